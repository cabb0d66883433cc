use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Gender;
use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::EnrollmentStatus;
use crate::models::common::parse::today;

// 学生表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentForm {
    pub admission_no: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub dob: String,
    pub phone: String,
    pub guardian_name: String,
    pub address: String,
    pub admission_date: String,
    pub status: String,
    pub academic_year_id: String,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            admission_no: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            gender: Gender::Male.as_str().to_string(),
            dob: String::new(),
            phone: String::new(),
            guardian_name: String::new(),
            address: String::new(),
            admission_date: today(),
            status: EnrollmentStatus::Active.as_str().to_string(),
            academic_year_id: String::new(),
        }
    }
}

impl FormValues for StudentForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "admission_no",
                validate::required(&self.admission_no, "Admission number is required"),
            )
            .check(
                "first_name",
                validate::required(&self.first_name, "First name is required"),
            )
            .check(
                "last_name",
                validate::required(&self.last_name, "Last name is required"),
            )
            .check("gender", validate::one_of(&self.gender, Gender::VALUES))
            .check("dob", validate::date(&self.dob, "Date of birth is required"))
            .check(
                "phone",
                validate::min_len(&self.phone, 10, "Valid phone number is required"),
            )
            .check(
                "guardian_name",
                validate::required(&self.guardian_name, "Guardian name is required"),
            )
            .check(
                "address",
                validate::required(&self.address, "Address is required"),
            )
            .check(
                "admission_date",
                validate::date(&self.admission_date, "Admission date is required"),
            )
            .check(
                "status",
                validate::one_of(&self.status, EnrollmentStatus::VALUES),
            )
            .check(
                "academic_year_id",
                validate::required(&self.academic_year_id, "Academic year is required"),
            );
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = StudentForm::default();
        assert_eq!(form.gender, "male");
        assert_eq!(form.status, "active");
        assert_eq!(form.admission_date, today());
    }

    #[test]
    fn test_validation_messages() {
        let form = StudentForm {
            phone: "501234567".to_string(),
            gender: "other".to_string(),
            ..StudentForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.get("phone"), Some("Valid phone number is required"));
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert!(errors.get("gender").is_some());
        assert!(errors.get("admission_date").is_none());
    }
}
