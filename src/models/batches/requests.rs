use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::form::validate::{self, FieldErrors};
use crate::form::FormValues;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct BatchForm {
    pub batch_name: String,
}

impl FormValues for BatchForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "batch_name",
            validate::required(&self.batch_name, "Batch name is required"),
        );
        errors
    }
}
