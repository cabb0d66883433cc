use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::DepartmentForm;
use crate::errors::Result;
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/department.ts")]
pub struct Department {
    pub id: String,
    pub name: String,
}

impl Entity for Department {
    type Form = DepartmentForm;

    const KIND: EntityKind = EntityKind::Department;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, _existing: Option<&Self>, form: DepartmentForm) -> Result<Self> {
        Ok(Self {
            id,
            name: form.name.trim().to_string(),
        })
    }

    fn to_form(&self) -> DepartmentForm {
        DepartmentForm {
            name: self.name.clone(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |d: &Department| CellValue::text(&d.id)),
            ColumnDef::new("name", "Department Name", |d: &Department| {
                CellValue::text(&d.name)
            }),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("name")
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.departments
    }
}
