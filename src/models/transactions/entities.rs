use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::TransactionForm;
use crate::errors::Result;
use crate::models::common::parse::{parse_choice, parse_number};
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{ActionVisibility, CellValue, ColumnDef, TableConfig, render};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/transaction.ts")]
pub enum PaymentType {
    #[default]
    Cash,
    Card,
}

impl PaymentType {
    pub const VALUES: &'static [&'static str] = &["cash", "card"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cash => "cash",
            PaymentType::Card => "card",
        }
    }
}

impl std::str::FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentType::Cash),
            "card" => Ok(PaymentType::Card),
            _ => Err(format!("Invalid payment type: {s}")),
        }
    }
}

// 缴费流水
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/transaction.ts")]
pub struct Transaction {
    pub id: String,
    pub date: String,
    // 学生姓名
    pub name: String,
    pub student_id: String,
    pub amount: f64,
    pub payment_type: PaymentType,
}

impl Entity for Transaction {
    type Form = TransactionForm;

    const KIND: EntityKind = EntityKind::Transaction;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _existing: Option<&Self>, form: TransactionForm) -> Result<Self> {
        Ok(Self {
            id,
            date: form.date,
            name: form.name.trim().to_string(),
            student_id: form.student_id.trim().to_string(),
            amount: parse_number("amount", &form.amount)?,
            payment_type: parse_choice("payment_type", &form.payment_type)?,
        })
    }

    fn to_form(&self) -> TransactionForm {
        TransactionForm {
            date: self.date.clone(),
            name: self.name.clone(),
            student_id: self.student_id.clone(),
            amount: self.amount.to_string(),
            payment_type: self.payment_type.as_str().to_string(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("date", "Date", |t: &Transaction| CellValue::text(&t.date)),
            ColumnDef::new("name", "Student Name", |t: &Transaction| CellValue::text(&t.name)),
            ColumnDef::new("student_id", "Student ID", |t: &Transaction| {
                CellValue::text(&t.student_id)
            }),
            ColumnDef::new("amount", "Amount", |t: &Transaction| CellValue::Number(t.amount))
                .cell(|t: &Transaction| render::money(t.amount)),
            ColumnDef::new("payment_type", "Payment Type", |t: &Transaction| {
                CellValue::text(t.payment_type.as_str())
            })
            .cell(|t: &Transaction| render::capitalize(t.payment_type.as_str())),
        ]
    }

    // 流水只读：不能新增、编辑或删除
    fn table() -> TableConfig {
        TableConfig::new("name").with_actions(ActionVisibility {
            add: false,
            view: true,
            edit: false,
            remove: false,
            make_payment: false,
        })
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.transactions
    }
}
