use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{ClassMode, Division};
use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::ActiveStatus;

// 班级表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct ClassroomForm {
    pub grade_id: String,
    pub division_id: String,
    pub class_mode_id: String,
    pub academic_year_id: String,
    pub teacher_id: String,
    pub status: String,
}

impl Default for ClassroomForm {
    fn default() -> Self {
        Self {
            grade_id: String::new(),
            division_id: Division::A.as_str().to_string(),
            class_mode_id: ClassMode::Morning.as_str().to_string(),
            academic_year_id: String::new(),
            teacher_id: String::new(),
            status: ActiveStatus::Active.as_str().to_string(),
        }
    }
}

impl FormValues for ClassroomForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("grade_id", validate::required(&self.grade_id, "Grade is required"))
            .check(
                "grade_id",
                validate::integer_range(&self.grade_id, 1, 10, "Grade must be between 1 and 10"),
            )
            .check("division_id", validate::one_of(&self.division_id, Division::VALUES))
            .check(
                "class_mode_id",
                validate::one_of(&self.class_mode_id, ClassMode::VALUES),
            )
            .check(
                "academic_year_id",
                validate::required(&self.academic_year_id, "Academic year is required"),
            )
            .check(
                "teacher_id",
                validate::required(&self.teacher_id, "Homeroom teacher is required"),
            )
            .check("status", validate::one_of(&self.status, ActiveStatus::VALUES));
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_rules() {
        let mut form = ClassroomForm {
            academic_year_id: "2023-24".to_string(),
            teacher_id: "tchr-001".to_string(),
            ..ClassroomForm::default()
        };
        assert_eq!(form.validate().get("grade_id"), Some("Grade is required"));

        form.grade_id = "11".to_string();
        assert_eq!(
            form.validate().get("grade_id"),
            Some("Grade must be between 1 and 10")
        );

        form.grade_id = "10".to_string();
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_homeroom_teacher_required() {
        let form = ClassroomForm {
            grade_id: "1".to_string(),
            academic_year_id: "2023-24".to_string(),
            ..ClassroomForm::default()
        };
        assert_eq!(
            form.validate().get("teacher_id"),
            Some("Homeroom teacher is required")
        );
    }
}
