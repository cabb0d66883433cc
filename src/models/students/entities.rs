use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::requests::StudentForm;
use crate::errors::Result;
use crate::models::common::EnrollmentStatus;
use crate::models::common::parse::{non_empty, parse_choice};
use crate::models::{Entity, EntityKind};
use crate::storage::{Collection, Collections};
use crate::table::{CellValue, ColumnDef, TableConfig, render};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const VALUES: &'static [&'static str] = &["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: String,
    // 学号
    pub admission_no: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    // 出生日期
    pub dob: String,
    pub phone: String,
    // 监护人
    pub guardian_name: String,
    pub address: String,
    pub admission_date: String,
    pub status: EnrollmentStatus,
    pub academic_year_id: String,
    pub department: String,
    pub qualification: String,
    pub joining_date: String,
    #[ts(optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    // 兄弟姐妹的学号
    #[ts(optional)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sibling_id: Option<String>,
    // 欠费月份，如 ["jan", "feb"]
    #[serde(default)]
    pub fees_due: Vec<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Student {
    type Form = StudentForm;

    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(id: String, existing: Option<&Self>, form: StudentForm) -> Result<Self> {
        let gender = parse_choice("gender", &form.gender)?;
        let status = parse_choice("status", &form.status)?;
        // 学业信息、班级与欠费不在表单中，编辑时沿用原值
        let (department, qualification, joining_date, class, sibling_id, fees_due) = match existing
        {
            Some(s) => (
                s.department.clone(),
                s.qualification.clone(),
                s.joining_date.clone(),
                s.class.clone(),
                s.sibling_id.clone(),
                s.fees_due.clone(),
            ),
            None => (
                String::new(),
                String::new(),
                form.admission_date.clone(),
                None,
                None,
                Vec::new(),
            ),
        };

        Ok(Self {
            id,
            admission_no: form.admission_no.trim().to_string(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            gender,
            dob: form.dob,
            phone: form.phone.trim().to_string(),
            guardian_name: form.guardian_name.trim().to_string(),
            address: form.address,
            admission_date: form.admission_date,
            status,
            academic_year_id: form.academic_year_id,
            department,
            qualification,
            joining_date,
            class: class.and_then(|c| non_empty(&c)),
            sibling_id,
            fees_due,
        })
    }

    fn to_form(&self) -> StudentForm {
        StudentForm {
            admission_no: self.admission_no.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.as_str().to_string(),
            dob: self.dob.clone(),
            phone: self.phone.clone(),
            guardian_name: self.guardian_name.clone(),
            address: self.address.clone(),
            admission_date: self.admission_date.clone(),
            status: self.status.as_str().to_string(),
            academic_year_id: self.academic_year_id.clone(),
        }
    }

    fn columns() -> Vec<ColumnDef<Self>> {
        vec![
            ColumnDef::new("admission_no", "Admission No", |s: &Student| {
                CellValue::text(&s.admission_no)
            }),
            ColumnDef::new("name", "Name", |s: &Student| CellValue::text(s.full_name())),
            ColumnDef::new("class", "Class", |s: &Student| {
                CellValue::optional_text(s.class.as_deref())
            }),
            ColumnDef::new("sibling_id", "Sibling ID", |s: &Student| {
                CellValue::optional_text(s.sibling_id.as_deref())
            }),
            ColumnDef::new("fees_due", "Fees Due", |s: &Student| {
                CellValue::text(s.fees_due.join(", "))
            })
            .cell(|s: &Student| render::fees_due(&s.fees_due)),
            ColumnDef::new("status", "Status", |s: &Student| {
                CellValue::text(s.status.as_str())
            })
            .cell(|s: &Student| render::capitalize(s.status.as_str())),
            ColumnDef::new("phone", "Phone", |s: &Student| CellValue::text(&s.phone)).hidden(),
        ]
    }

    fn table() -> TableConfig {
        TableConfig::new("phone").with_payment()
    }

    fn collection(collections: &Collections) -> &Collection<Self> {
        &collections.students
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::seed;

    #[test]
    fn test_edit_keeps_academic_extras() {
        let original = seed::students().remove(0);
        let mut form = original.to_form();
        form.first_name = "Muhammad".to_string();

        let updated = Student::build(original.id.clone(), Some(&original), form).unwrap();
        assert_eq!(updated.first_name, "Muhammad");
        assert_eq!(updated.fees_due, original.fees_due);
        assert_eq!(updated.class, original.class);
        assert_eq!(updated.sibling_id, original.sibling_id);
    }

    #[test]
    fn test_new_student_has_no_fees_due() {
        let form = StudentForm {
            admission_no: "STU2024001".to_string(),
            first_name: "Hamza".to_string(),
            last_name: "Qureshi".to_string(),
            phone: "0501112223".to_string(),
            ..StudentForm::default()
        };
        let student = Student::build("x".to_string(), None, form).unwrap();
        assert!(student.fees_due.is_empty());
        assert_eq!(student.joining_date, student.admission_date);
    }

    #[test]
    fn test_fees_due_cell() {
        let student = seed::students().remove(0);
        let column = Student::columns()
            .into_iter()
            .find(|c| c.id == "fees_due")
            .unwrap();
        assert_eq!(column.render(&student), "jan, feb +2 months");
    }
}
