use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::TeacherForm;
use crate::errors::Result;
use crate::models::common::EnrollmentStatus;
use crate::models::common::parse::{non_empty, parse_choice};
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig, render};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: String,
    // 关联的用户账号
    pub user_id: String,
    pub name: String,
    pub department: String,
    #[ts(optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[ts(optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    pub joining_date: String,
    pub status: EnrollmentStatus,
}

/// 新建教职工时分配的用户ID
pub fn new_user_id() -> String {
    format!("user_{}", chrono::Utc::now().timestamp_millis())
}

impl Entity for Teacher {
    type Form = TeacherForm;

    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, existing: Option<&Self>, form: TeacherForm) -> Result<Self> {
        Ok(Self {
            id,
            user_id: existing.map_or_else(new_user_id, |t| t.user_id.clone()),
            name: form.name.trim().to_string(),
            department: form.department.trim().to_string(),
            designation: existing.and_then(|t| t.designation.clone()),
            qualification: non_empty(&form.qualification),
            joining_date: form.joining_date,
            status: parse_choice("status", &form.status)?,
        })
    }

    fn to_form(&self) -> TeacherForm {
        TeacherForm {
            name: self.name.clone(),
            department: self.department.clone(),
            qualification: self.qualification.clone().unwrap_or_default(),
            joining_date: self.joining_date.clone(),
            status: self.status.as_str().to_string(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |t: &Teacher| CellValue::text(&t.id)),
            ColumnDef::new("user_id", "User ID", |t: &Teacher| CellValue::text(&t.user_id)),
            ColumnDef::new("name", "Name", |t: &Teacher| CellValue::text(&t.name)),
            ColumnDef::new("department", "Department", |t: &Teacher| {
                CellValue::text(&t.department)
            }),
            ColumnDef::new("qualification", "Qualification", |t: &Teacher| {
                CellValue::optional_text(t.qualification.as_deref())
            }),
            ColumnDef::new("joining_date", "Joining Date", |t: &Teacher| {
                CellValue::text(&t.joining_date)
            }),
            ColumnDef::new("status", "Status", |t: &Teacher| {
                CellValue::text(t.status.as_str())
            })
            .cell(|t: &Teacher| render::capitalize(t.status.as_str())),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("name")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.teachers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_teacher_gets_user_id() {
        let form = TeacherForm {
            name: "Hamza Yusuf".to_string(),
            department: "Seerah".to_string(),
            qualification: "MA".to_string(),
            joining_date: "2024-01-01".to_string(),
            ..TeacherForm::default()
        };
        let teacher = Teacher::build("t1".to_string(), None, form).unwrap();
        assert!(teacher.user_id.starts_with("user_"));
        assert_eq!(teacher.status, EnrollmentStatus::Active);
    }

    #[test]
    fn test_empty_qualification_is_none() {
        let form = TeacherForm {
            name: "Hamza Yusuf".to_string(),
            ..TeacherForm::default()
        };
        let teacher = Teacher::build("t1".to_string(), None, form).unwrap();
        assert!(teacher.qualification.is_none());
        assert_eq!(teacher.to_form().qualification, "");
    }
}
