use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::ClassroomForm;
use crate::errors::{MadrasaError, Result};
use crate::models::common::ActiveStatus;
use crate::models::common::parse::parse_choice;
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{
    CellValue, ColumnDef, FilterDialog, FilterField, FilterFieldKind, TableConfig, render,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub enum Division {
    #[default]
    A,
    B,
    C,
}

impl Division {
    pub const VALUES: &'static [&'static str] = &["A", "B", "C"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::A => "A",
            Division::B => "B",
            Division::C => "C",
        }
    }
}

impl std::str::FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "A" => Ok(Division::A),
            "B" => Ok(Division::B),
            "C" => Ok(Division::C),
            _ => Err(format!("Invalid division: {s}")),
        }
    }
}

// 上课时段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub enum ClassMode {
    #[default]
    Morning,
    Evening,
}

impl ClassMode {
    pub const VALUES: &'static [&'static str] = &["morning", "evening"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassMode::Morning => "morning",
            ClassMode::Evening => "evening",
        }
    }
}

impl std::str::FromStr for ClassMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "morning" => Ok(ClassMode::Morning),
            "evening" => Ok(ClassMode::Evening),
            _ => Err(format!("Invalid class mode: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/classroom.ts")]
pub struct Classroom {
    pub id: String,
    // 年级 1-10
    pub grade_id: u32,
    pub division_id: Division,
    pub class_mode_id: ClassMode,
    pub academic_year_id: String,
    // 班主任
    pub teacher_id: String,
    pub status: ActiveStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl Entity for Classroom {
    type Form = ClassroomForm;

    const KIND: EntityKind = EntityKind::Classroom;
    const ID_PREFIX: &'static str = "cls-";

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, existing: Option<&Self>, form: ClassroomForm) -> Result<Self> {
        let grade_id = form
            .grade_id
            .trim()
            .parse::<u32>()
            .map_err(|_| MadrasaError::validation(format!("grade_id: '{}' is not a grade", form.grade_id)))?;
        let now = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);

        Ok(Self {
            id,
            grade_id,
            division_id: parse_choice("division_id", &form.division_id)?,
            class_mode_id: parse_choice("class_mode_id", &form.class_mode_id)?,
            academic_year_id: form.academic_year_id,
            teacher_id: form.teacher_id.trim().to_string(),
            status: parse_choice("status", &form.status)?,
            created_at: existing.map_or_else(|| now.clone(), |c| c.created_at.clone()),
            updated_at: now,
        })
    }

    fn to_form(&self) -> ClassroomForm {
        ClassroomForm {
            grade_id: self.grade_id.to_string(),
            division_id: self.division_id.as_str().to_string(),
            class_mode_id: self.class_mode_id.as_str().to_string(),
            academic_year_id: self.academic_year_id.clone(),
            teacher_id: self.teacher_id.clone(),
            status: self.status.as_str().to_string(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("id", "ID", |c: &Classroom| CellValue::text(&c.id)),
            ColumnDef::new("grade_id", "Grade", |c: &Classroom| {
                CellValue::Number(f64::from(c.grade_id))
            }),
            ColumnDef::new("division_id", "Division", |c: &Classroom| {
                CellValue::text(c.division_id.as_str())
            }),
            ColumnDef::new("class_mode_id", "Batch", |c: &Classroom| {
                CellValue::text(c.class_mode_id.as_str())
            })
            .cell(|c: &Classroom| render::capitalize(c.class_mode_id.as_str())),
            ColumnDef::new("academic_year_id", "Academic Year", |c: &Classroom| {
                CellValue::text(&c.academic_year_id)
            }),
            ColumnDef::new("teacher_id", "Homeroom Teacher", |c: &Classroom| {
                CellValue::text(&c.teacher_id)
            })
            .cell(|c: &Classroom| {
                let short: String = c.teacher_id.chars().take(5).collect();
                format!("Teacher {short}...")
            }),
            ColumnDef::new("status", "Status", |c: &Classroom| {
                CellValue::text(c.status.as_str())
            })
            .cell(|c: &Classroom| render::capitalize(c.status.as_str())),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("teacher_id").with_dialog(FilterDialog {
            title: "Filter Classrooms by Availability",
            data: "Classrooms",
            fields: vec![
                FilterField {
                    label: "Division",
                    placeholder: "Select division",
                    kind: FilterFieldKind::Select,
                    field: "division_id",
                },
                FilterField {
                    label: "Batch",
                    placeholder: "Select batch",
                    kind: FilterFieldKind::Select,
                    field: "class_mode_id",
                },
                FilterField {
                    label: "Status",
                    placeholder: "Enter status",
                    kind: FilterFieldKind::Input,
                    field: "status",
                },
            ],
        })
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.classrooms
    }
}
