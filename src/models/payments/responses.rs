use serde::Serialize;
use ts_rs::TS;

use crate::models::students::entities::Student;
use crate::models::transactions::entities::Transaction;

// 缴费弹窗所需信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentSummary {
    pub student_id: String,
    pub student_name: String,
    pub fees_due: Vec<String>,
    pub monthly_fee: f64,
    // 全部月份已缴清
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/payment.ts")]
pub struct PaymentResponse {
    pub amount: f64,
    pub months: Vec<String>,
    pub transaction: Transaction,
    pub student: Student,
}
