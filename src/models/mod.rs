pub mod common;
pub mod entity;

pub mod students {
    pub mod entities;
    pub mod requests;
}

pub mod teachers {
    pub mod entities;
    pub mod requests;
}

pub mod staff {
    pub mod entities;
    pub mod requests;
}

pub mod classrooms {
    pub mod entities;
    pub mod requests;
}

pub mod subjects {
    pub mod entities;
    pub mod requests;
}

pub mod batches {
    pub mod entities;
    pub mod requests;
}

pub mod departments {
    pub mod entities;
    pub mod requests;
}

pub mod fee_settings {
    pub mod entities;
    pub mod requests;
}

pub mod due_fees {
    pub mod entities;
    pub mod requests;
}

pub mod transactions {
    pub mod entities;
    pub mod requests;
}

pub mod payments {
    pub mod requests;
    pub mod responses;
}

pub mod tables {
    pub mod requests;
    pub mod responses;
}

pub mod forms {
    pub mod requests;
}

pub mod system {
    pub mod responses;
}

pub use common::{ApiResponse, ErrorCode, PaginationInfo, PaginationQuery};
pub use entity::{Entity, EntityKind};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
