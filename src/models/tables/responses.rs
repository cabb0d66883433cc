use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::table::TableView;

// 表格响应，session 用于后续请求复用表格状态
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct TableResponse {
    pub session: Uuid,
    pub table: TableView,
}

// 删除前需要用户确认
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/table.ts")]
pub struct RemovalPrompt {
    pub id: String,
    pub prompt: String,
}
