use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::DueFeeForm;
use crate::errors::Result;
use crate::models::common::parse::{non_empty, parse_number, parse_whole};
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig, render};

// 学生欠费记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/due_fee.ts")]
pub struct DueFee {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    #[ts(optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<String>,
    // 月费
    pub fee_amount: f64,
    pub due_months: u32,
    #[ts(optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_paid_date: Option<String>,
    pub total_due: f64,
}

impl Entity for DueFee {
    type Form = DueFeeForm;

    const KIND: EntityKind = EntityKind::DueFee;
    const ID_PREFIX: &'static str = "df";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _existing: Option<&Self>, form: DueFeeForm) -> Result<Self> {
        Ok(Self {
            id,
            student_id: form.student_id.trim().to_string(),
            student_name: form.student_name.trim().to_string(),
            class_name: form.class_name.trim().to_string(),
            sibling_id: non_empty(&form.sibling_id),
            fee_amount: parse_number("fee_amount", &form.fee_amount)?,
            due_months: parse_whole("due_months", &form.due_months)?,
            last_paid_date: non_empty(&form.last_paid_date),
            total_due: parse_number("total_due", &form.total_due)?,
        })
    }

    fn to_form(&self) -> DueFeeForm {
        DueFeeForm {
            student_id: self.student_id.clone(),
            student_name: self.student_name.clone(),
            class_name: self.class_name.clone(),
            sibling_id: self.sibling_id.clone().unwrap_or_default(),
            fee_amount: self.fee_amount.to_string(),
            due_months: self.due_months.to_string(),
            last_paid_date: self.last_paid_date.clone().unwrap_or_default(),
            total_due: self.total_due.to_string(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("student_id", "Student ID", |d: &DueFee| {
                CellValue::text(&d.student_id)
            }),
            ColumnDef::new("student_name", "Student Name", |d: &DueFee| {
                CellValue::text(&d.student_name)
            }),
            ColumnDef::new("class_name", "Class", |d: &DueFee| CellValue::text(&d.class_name)),
            ColumnDef::new("sibling_id", "Sibling ID", |d: &DueFee| {
                CellValue::optional_text(d.sibling_id.as_deref())
            })
            .cell(|d: &DueFee| render::or_dash(d.sibling_id.as_deref())),
            ColumnDef::new("fee_amount", "Monthly Fee", |d: &DueFee| {
                CellValue::Number(d.fee_amount)
            })
            .cell(|d: &DueFee| render::money(d.fee_amount)),
            ColumnDef::new("due_months", "Due Months", |d: &DueFee| {
                CellValue::Number(f64::from(d.due_months))
            })
            .cell(|d: &DueFee| render::due_month_names(d.last_paid_date.as_deref(), d.due_months)),
            ColumnDef::new("last_paid_date", "Last Paid Date", |d: &DueFee| {
                CellValue::optional_text(d.last_paid_date.as_deref())
            }),
            ColumnDef::new("total_due", "Total Due", |d: &DueFee| {
                CellValue::Number(d.total_due)
            })
            .cell(|d: &DueFee| render::money(d.total_due)),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("class_name")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.due_fees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::seed;

    #[test]
    fn test_cells() {
        let record = seed::due_fees().remove(0);
        let cells: Vec<String> = DueFee::columns().iter().map(|c| c.render(&record)).collect();
        assert_eq!(cells[3], "2");
        assert_eq!(cells[4], "$100.00");
        assert_eq!(cells[5], "Dec, Jan '24 + 1 more");
        assert_eq!(cells[7], "$300.00");

        let no_sibling = seed::due_fees().remove(1);
        assert_eq!(DueFee::columns()[3].render(&no_sibling), "-");
    }

    #[test]
    fn test_form_projection_round_trip() {
        let record = seed::due_fees().remove(0);
        let rebuilt = DueFee::build(record.id.clone(), Some(&record), record.to_form()).unwrap();
        assert_eq!(rebuilt, record);
    }
}
