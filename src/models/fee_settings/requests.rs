use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;

// 收费标准表单，金额为数字输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_setting.ts")]
pub struct FeeSettingForm {
    pub classroom_id: String,
    pub amount: f64,
    pub academic_year_id: String,
}

impl FormValues for FeeSettingForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "classroom_id",
                validate::required(&self.classroom_id, "Classroom is required"),
            )
            .check(
                "academic_year_id",
                validate::required(&self.academic_year_id, "Academic year is required"),
            );
        if !self.amount.is_finite() || self.amount < 0.0 {
            errors.add("amount", "Amount must be a positive number");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_is_allowed() {
        let form = FeeSettingForm {
            classroom_id: "class_1".to_string(),
            amount: 0.0,
            academic_year_id: "2023-2024".to_string(),
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_negative_amount() {
        let form = FeeSettingForm {
            amount: -5.0,
            ..FeeSettingForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.get("amount"), Some("Amount must be a positive number"));
        assert_eq!(errors.get("classroom_id"), Some("Classroom is required"));
    }
}
