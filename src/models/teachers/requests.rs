use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::ActiveStatus;

// 教师表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherForm {
    pub name: String,
    pub department: String,
    pub qualification: String,
    pub joining_date: String,
    pub status: String,
}

impl Default for TeacherForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            department: String::new(),
            qualification: String::new(),
            joining_date: String::new(),
            status: ActiveStatus::Active.as_str().to_string(),
        }
    }
}

impl FormValues for TeacherForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("name", validate::required(&self.name, "Please select a teacher"))
            .check(
                "department",
                validate::required(&self.department, "Please select a department"),
            )
            .check(
                "qualification",
                validate::required(&self.qualification, "Qualification is required"),
            )
            .check(
                "joining_date",
                validate::date(&self.joining_date, "Joining date is required"),
            )
            .check("status", validate::one_of(&self.status, ActiveStatus::VALUES));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graduated_is_not_a_teacher_status() {
        let form = TeacherForm {
            name: "Ahmed Khan".to_string(),
            department: "Quran".to_string(),
            qualification: "Hafiz".to_string(),
            joining_date: "2020-01-15".to_string(),
            status: "graduated".to_string(),
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.get("status").is_some());
    }

    #[test]
    fn test_required_messages() {
        let errors = TeacherForm::default().validate();
        assert_eq!(errors.get("name"), Some("Please select a teacher"));
        assert_eq!(errors.get("department"), Some("Please select a department"));
    }
}
