use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::PaymentType;
use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;
use crate::models::common::parse::today;

// 缴费流水表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/transaction.ts")]
pub struct TransactionForm {
    pub date: String,
    pub name: String,
    pub student_id: String,
    pub amount: String,
    pub payment_type: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            date: today(),
            name: String::new(),
            student_id: String::new(),
            amount: String::new(),
            payment_type: PaymentType::Cash.as_str().to_string(),
        }
    }
}

impl FormValues for TransactionForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors
            .check("date", validate::date(&self.date, "Date is required"))
            .check(
                "name",
                validate::required(&self.name, "Student name is required"),
            )
            .check(
                "student_id",
                validate::required(&self.student_id, "Student ID is required"),
            )
            .check(
                "amount",
                validate::positive_number(
                    &self.amount,
                    "Amount is required",
                    "Amount must be a positive number",
                ),
            );
        if !PaymentType::VALUES.contains(&self.payment_type.as_str()) {
            errors.add("payment_type", "Please select a payment type");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_cash_today() {
        let form = TransactionForm::default();
        assert_eq!(form.payment_type, "cash");
        assert_eq!(form.date, today());
    }

    #[test]
    fn test_validation() {
        let form = TransactionForm {
            name: "Ahmed Khan".to_string(),
            student_id: "STU001".to_string(),
            amount: "-3".to_string(),
            payment_type: "cheque".to_string(),
            ..TransactionForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.get("amount"), Some("Amount must be a positive number"));
        assert_eq!(errors.get("payment_type"), Some("Please select a payment type"));
        assert_eq!(errors.len(), 2);
    }
}
