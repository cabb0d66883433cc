use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::FeeSettingForm;
use crate::errors::{MadrasaError, Result};
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig, render};

// 班级收费标准
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/fee_setting.ts")]
pub struct FeeSetting {
    pub id: String,
    pub classroom_id: String,
    pub amount: f64,
    pub academic_year_id: String,
}

impl Entity for FeeSetting {
    type Form = FeeSettingForm;

    const KIND: EntityKind = EntityKind::FeeSetting;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _existing: Option<&Self>, form: FeeSettingForm) -> Result<Self> {
        if !form.amount.is_finite() || form.amount < 0.0 {
            return Err(MadrasaError::validation(
                "amount: Amount must be a positive number",
            ));
        }
        Ok(Self {
            id,
            classroom_id: form.classroom_id.trim().to_string(),
            amount: form.amount,
            academic_year_id: form.academic_year_id,
        })
    }

    fn to_form(&self) -> FeeSettingForm {
        FeeSettingForm {
            classroom_id: self.classroom_id.clone(),
            amount: self.amount,
            academic_year_id: self.academic_year_id.clone(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |f: &FeeSetting| CellValue::text(&f.id)),
            ColumnDef::new("classroom_id", "Classroom", |f: &FeeSetting| {
                CellValue::text(&f.classroom_id)
            }),
            ColumnDef::new("amount", "Amount", |f: &FeeSetting| CellValue::Number(f.amount))
                .cell(|f: &FeeSetting| render::money(f.amount)),
            ColumnDef::new("academic_year_id", "Academic Year", |f: &FeeSetting| {
                CellValue::text(&f.academic_year_id)
            }),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("classroom_id")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.fee_settings
    }
}
