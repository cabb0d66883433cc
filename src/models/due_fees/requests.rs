use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::parse::today;

/// 欠费月数上限
pub const MAX_DUE_MONTHS: u32 = 120;

// 欠费表单，数字字段以文本输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/due_fee.ts")]
pub struct DueFeeForm {
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub sibling_id: String,
    pub fee_amount: String,
    pub due_months: String,
    pub last_paid_date: String,
    pub total_due: String,
}

impl Default for DueFeeForm {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            student_name: String::new(),
            class_name: String::new(),
            sibling_id: String::new(),
            fee_amount: String::new(),
            due_months: "1".to_string(),
            last_paid_date: today(),
            total_due: "0".to_string(),
        }
    }
}

impl FormValues for DueFeeForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check(
                "student_id",
                validate::required(&self.student_id, "Student ID is required"),
            )
            .check(
                "student_name",
                validate::required(&self.student_name, "Student name is required"),
            )
            .check(
                "class_name",
                validate::required(&self.class_name, "Class is required"),
            )
            .check(
                "fee_amount",
                validate::positive_number(
                    &self.fee_amount,
                    "Fee amount is required",
                    "Amount must be a positive number",
                ),
            )
            .check(
                "due_months",
                validate::positive_number(
                    &self.due_months,
                    "Due months is required",
                    "Must be a positive number",
                )
                .and_then(|()| {
                    validate::at_most(
                        &self.due_months,
                        f64::from(MAX_DUE_MONTHS),
                        "Due months cannot exceed 120",
                    )
                }),
            )
            .check(
                "last_paid_date",
                validate::date(&self.last_paid_date, "Last paid date is required"),
            )
            .check(
                "total_due",
                validate::non_negative_number(
                    &self.total_due,
                    "Total due is required",
                    "Must be a positive number",
                ),
            );
        errors
    }

    /// 月费或月数变化后重算应缴总额，月数取整
    fn derive(&mut self) {
        if self.fee_amount.trim().is_empty() || self.due_months.trim().is_empty() {
            return;
        }
        let amount = self.fee_amount.trim().parse::<f64>().unwrap_or(0.0);
        let months = self
            .due_months
            .trim()
            .parse::<f64>()
            .map(f64::trunc)
            .unwrap_or(0.0);
        self.total_due = format!("{:.2}", amount * months);
    }
}
