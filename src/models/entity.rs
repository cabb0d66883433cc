//! 实体类型与通用实体接口
//!
//! 每种管理对象（学生、教师、班级……）实现 [`Entity`]，
//! 通用表格、表单生命周期与存储层都只依赖这个接口。

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use ts_rs::TS;

use crate::errors::Result;
use crate::form::FormValues;
use crate::storage::{Collection, Collections};
use crate::table::{ColumnDef, TableConfig};

// 实体类型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/entity.ts")]
pub enum EntityKind {
    Student,
    Teacher,
    Staff,
    Classroom,
    Subject,
    Batch,
    Department,
    FeeSetting,
    DueFee,
    Transaction,
}

impl EntityKind {
    /// 实体标签，用于拼接前端路由
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Student => "student",
            EntityKind::Teacher => "teacher",
            EntityKind::Staff => "staff",
            EntityKind::Classroom => "classroom",
            EntityKind::Subject => "subject",
            EntityKind::Batch => "batch",
            EntityKind::Department => "department",
            EntityKind::FeeSetting => "feeSetting",
            EntityKind::DueFee => "dueFee",
            EntityKind::Transaction => "transaction",
        }
    }

    /// 提示信息中使用的名称
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::FeeSetting => "fee setting",
            EntityKind::DueFee => "due fee record",
            _ => self.tag(),
        }
    }

    /// 首字母大写的名称，如 "Fee setting"
    pub fn title(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// API 路径段
    pub fn api_segment(&self) -> &'static str {
        match self {
            EntityKind::Student => "students",
            EntityKind::Teacher => "teachers",
            EntityKind::Staff => "staff",
            EntityKind::Classroom => "classrooms",
            EntityKind::Subject => "subjects",
            EntityKind::Batch => "batches",
            EntityKind::Department => "departments",
            EntityKind::FeeSetting => "fee-settings",
            EntityKind::DueFee => "due-fees",
            EntityKind::Transaction => "transactions",
        }
    }

    /// 前端路由使用的复数形式：标签后加 s，classroom 例外
    pub fn plural(&self) -> String {
        match self {
            EntityKind::Classroom => "classrooms".to_string(),
            _ => format!("{}s", self.tag()),
        }
    }

    // add-/edit-/view- 之后的路由片段，classroom 保持单数
    fn route_slug(&self) -> String {
        match self {
            EntityKind::Classroom => self.tag().to_string(),
            _ => self.plural(),
        }
    }

    pub fn list_route(&self) -> String {
        format!("/{}", self.plural())
    }

    pub fn add_route(&self) -> String {
        format!("/{}/add-{}", self.plural(), self.route_slug())
    }

    pub fn view_route(&self, id: &str) -> String {
        format!("/{}/view-{}/{}", self.plural(), self.route_slug(), id)
    }

    pub fn edit_route(&self, id: &str) -> String {
        format!("/{}/edit-{}/{}", self.plural(), self.route_slug(), id)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// 通用实体接口
pub trait Entity:
    Clone + std::fmt::Debug + Serialize + DeserializeOwned + TS + Send + Sync + 'static
{
    /// 对应的表单值类型
    type Form: FormValues;

    const KIND: EntityKind;

    /// 新建记录时生成 ID 的前缀
    const ID_PREFIX: &'static str = "";

    fn id(&self) -> &str;

    /// 由表单值构造记录；`existing` 为编辑前的记录，表单未覆盖的字段从中保留
    fn build(id: String, existing: Option<&Self>, form: Self::Form) -> Result<Self>;

    /// 记录回填到表单
    fn to_form(&self) -> Self::Form;

    /// 列定义
    fn columns() -> Vec<ColumnDef<Self>>;

    /// 列表页配置
    fn table() -> TableConfig;

    fn collection(collections: &Collections) -> &Collection<Self>;
}
