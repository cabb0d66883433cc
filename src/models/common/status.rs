use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 启用状态（班级、教职工表单）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum ActiveStatus {
    #[default]
    Active,
    Inactive,
}

impl ActiveStatus {
    pub const VALUES: &'static [&'static str] = &["active", "inactive"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActiveStatus::Active => "active",
            ActiveStatus::Inactive => "inactive",
        }
    }
}

impl std::str::FromStr for ActiveStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ActiveStatus::Active),
            "inactive" => Ok(ActiveStatus::Inactive),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

// 在籍状态（学生、教师、科目）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/common.ts")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Inactive,
    Graduated,
}

impl EnrollmentStatus {
    pub const VALUES: &'static [&'static str] = &["active", "inactive", "graduated"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Inactive => "inactive",
            EnrollmentStatus::Graduated => "graduated",
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EnrollmentStatus::Active),
            "inactive" => Ok(EnrollmentStatus::Inactive),
            "graduated" => Ok(EnrollmentStatus::Graduated),
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}

impl From<ActiveStatus> for EnrollmentStatus {
    fn from(status: ActiveStatus) -> Self {
        match status {
            ActiveStatus::Active => EnrollmentStatus::Active,
            ActiveStatus::Inactive => EnrollmentStatus::Inactive,
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for ActiveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
