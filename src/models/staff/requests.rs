use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::ActiveStatus;

// 职员表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/staff.ts")]
pub struct StaffForm {
    pub name: String,
    pub designation: String,
    pub department: String,
    pub joining_date: String,
    pub status: String,
}

impl Default for StaffForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            designation: String::new(),
            department: String::new(),
            joining_date: String::new(),
            status: ActiveStatus::Active.as_str().to_string(),
        }
    }
}

impl FormValues for StaffForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("name", validate::required(&self.name, "Name is required"))
            .check(
                "designation",
                validate::required(&self.designation, "Designation is required"),
            )
            .check(
                "department",
                validate::required(&self.department, "Department is required"),
            )
            .check(
                "joining_date",
                validate::date(&self.joining_date, "Joining date is required"),
            )
            .check("status", validate::one_of(&self.status, ActiveStatus::VALUES));
        errors
    }
}
