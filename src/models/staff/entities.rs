use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::StaffForm;
use crate::errors::Result;
use crate::models::common::EnrollmentStatus;
use crate::models::common::parse::{non_empty, parse_choice};
use crate::models::teachers::entities::new_user_id;
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig, render};

// 职员，与教师记录结构相同
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffMember {
    pub id: String,
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

impl Entity for StaffMember {
    type Form = StaffForm;

    const KIND: EntityKind = EntityKind::Staff;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, existing: Option<&Self>, form: StaffForm) -> Result<Self> {
        Ok(Self {
            id,
            user_id: existing.map_or_else(new_user_id, |s| s.user_id.clone()),
            name: form.name.trim().to_string(),
            department: form.department.trim().to_string(),
            designation: non_empty(&form.designation),
            qualification: existing.and_then(|s| s.qualification.clone()),
            joining_date: form.joining_date,
            status: parse_choice("status", &form.status)?,
        })
    }

    fn to_form(&self) -> StaffForm {
        StaffForm {
            name: self.name.clone(),
            designation: self.designation.clone().unwrap_or_default(),
            department: self.department.clone(),
            joining_date: self.joining_date.clone(),
            status: self.status.as_str().to_string(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |s: &StaffMember| CellValue::text(&s.id)),
            ColumnDef::new("user_id", "User ID", |s: &StaffMember| {
                CellValue::text(&s.user_id)
            }),
            ColumnDef::new("name", "Name", |s: &StaffMember| CellValue::text(&s.name)),
            ColumnDef::new("department", "Department", |s: &StaffMember| {
                CellValue::text(&s.department)
            }),
            ColumnDef::new("designation", "Designation", |s: &StaffMember| {
                CellValue::optional_text(s.designation.as_deref())
            })
            .hidden(),
            ColumnDef::new("joining_date", "Joining Date", |s: &StaffMember| {
                CellValue::text(&s.joining_date)
            }),
            ColumnDef::new("status", "Status", |s: &StaffMember| {
                CellValue::text(s.status.as_str())
            })
            .cell(|s: &StaffMember| render::capitalize(s.status.as_str())),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("name")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.staff
    }
}
