use serde::Deserialize;
use ts_rs::TS;

use crate::form::FormMode;

// 打开表单会话
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct OpenFormRequest {
    pub mode: FormMode,
    // EDIT/VIEW 模式下要加载的记录
    #[ts(optional)]
    pub id: Option<String>,
}
