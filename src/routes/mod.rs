pub mod entities;

pub mod payments;

pub mod system;

use actix_web::web;

use crate::models::{
    batches::entities::Batch, classrooms::entities::Classroom,
    departments::entities::Department, due_fees::entities::DueFee,
    fee_settings::entities::FeeSetting, staff::entities::StaffMember,
    students::entities::Student, subjects::entities::Subject, teachers::entities::Teacher,
    transactions::entities::Transaction,
};

pub use entities::{configure_entity_routes, entity_scope};
pub use payments::configure_payment_routes;
pub use system::configure_system_routes;

/// 学生路由额外挂载缴费接口
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(entity_scope::<Student>().configure(configure_payment_routes));
}

// 配置全部实体路由
pub fn configure_entity_routes_all(cfg: &mut web::ServiceConfig) {
    configure_student_routes(cfg);
    configure_entity_routes::<Teacher>(cfg);
    configure_entity_routes::<StaffMember>(cfg);
    configure_entity_routes::<Classroom>(cfg);
    configure_entity_routes::<Subject>(cfg);
    configure_entity_routes::<Batch>(cfg);
    configure_entity_routes::<Department>(cfg);
    configure_entity_routes::<FeeSetting>(cfg);
    configure_entity_routes::<DueFee>(cfg);
    configure_entity_routes::<Transaction>(cfg);
}
