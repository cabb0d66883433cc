use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::EnrollmentStatus;

// 科目表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/subject.ts")]
pub struct SubjectForm {
    pub subject_name: String,
    pub department_id: String,
    pub status: String,
}

impl Default for SubjectForm {
    fn default() -> Self {
        Self {
            subject_name: String::new(),
            department_id: String::new(),
            status: EnrollmentStatus::Active.as_str().to_string(),
        }
    }
}

impl FormValues for SubjectForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "subject_name",
                validate::required(&self.subject_name, "Subject name is required"),
            )
            .check(
                "department_id",
                validate::required(&self.department_id, "Department is required"),
            )
            .check(
                "status",
                validate::one_of(&self.status, EnrollmentStatus::VALUES),
            );
        errors
    }
}
