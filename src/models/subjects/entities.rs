use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::SubjectForm;
use crate::errors::Result;
use crate::models::common::EnrollmentStatus;
use crate::models::common::parse::parse_choice;
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig, render};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct Subject {
    pub id: String,
    pub subject_name: String,
    pub department_id: String,
    #[serde(default)]
    pub status: EnrollmentStatus,
}

impl Entity for Subject {
    type Form = SubjectForm;

    const KIND: EntityKind = EntityKind::Subject;
    const ID_PREFIX: &'static str = "sub-";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _existing: Option<&Self>, form: SubjectForm) -> Result<Self> {
        Ok(Self {
            id,
            subject_name: form.subject_name.trim().to_string(),
            department_id: form.department_id.trim().to_string(),
            status: parse_choice("status", &form.status)?,
        })
    }

    fn to_form(&self) -> SubjectForm {
        SubjectForm {
            subject_name: self.subject_name.clone(),
            department_id: self.department_id.clone(),
            status: self.status.as_str().to_string(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |s: &Subject| CellValue::text(&s.id)),
            ColumnDef::new("subject_name", "Subject Name", |s: &Subject| {
                CellValue::text(&s.subject_name)
            }),
            ColumnDef::new("department_id", "Department ID", |s: &Subject| {
                CellValue::text(&s.department_id)
            }),
            ColumnDef::new("status", "Status", |s: &Subject| {
                CellValue::text(s.status.as_str())
            })
            .cell(|s: &Subject| render::capitalize(s.status.as_str())),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("subject_name")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.subjects
    }
}
