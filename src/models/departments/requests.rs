use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct DepartmentForm {
    pub name: String,
}

impl FormValues for DepartmentForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "name",
            validate::required(&self.name, "Department name is required"),
        );
        errors
    }
}
