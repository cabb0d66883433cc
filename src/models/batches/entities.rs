use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::BatchForm;
use crate::errors::Result;
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct Batch {
    pub id: String,
    pub batch_name: String,
}

impl Entity for Batch {
    type Form = BatchForm;

    const KIND: EntityKind = EntityKind::Batch;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _existing: Option<&Self>, form: BatchForm) -> Result<Self> {
        Ok(Self {
            id,
            batch_name: form.batch_name.trim().to_string(),
        })
    }

    fn to_form(&self) -> BatchForm {
        BatchForm {
            batch_name: self.batch_name.clone(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |b: &Batch| CellValue::text(&b.id)),
            ColumnDef::new("batch_name", "Batch Name", |b: &Batch| {
                CellValue::text(&b.batch_name)
            }),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("batch_name")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.batches
    }
}
