//! 新增/编辑/查看表单的通用生命周期

pub mod session;
pub mod validate;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use ts_rs::TS;

pub use session::{FormSession, SubmitOutcome, open, submit};
pub use validate::FieldErrors;

/// 实体表单值
///
/// 字段与前端表单一一对应；`derive` 用于在字段变化后重算派生字段。
pub trait FormValues:
    Clone
    + std::fmt::Debug
    + Default
    + PartialEq
    + Serialize
    + DeserializeOwned
    + TS
    + Send
    + Sync
    + 'static
{
    fn validate(&self) -> FieldErrors;

    fn derive(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum FormMode {
    Add,
    Edit,
    View,
}

impl FormMode {
    pub fn needs_record(&self) -> bool {
        !matches!(self, FormMode::Add)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
    NavigatedAway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// 提示消息，由前端以 toast 形式展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/form.ts")]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}
