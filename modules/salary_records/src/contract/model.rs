//! Contract models for salary records

use std::fmt;
use std::str::FromStr;

/// Field names shared by the JSON payloads and the stored documents
pub mod field {
    pub const AGE: &str = "Age";
    pub const GENDER: &str = "Gender";
    pub const EDUCATION_LEVEL: &str = "Education_Level";
    pub const JOB_TITLE: &str = "Job_Title";
    pub const YEARS_OF_EXPERIENCE: &str = "Years_of_Experience";
    pub const SALARY: &str = "Salary";
}

/// A salary record as supplied by callers and persisted by the store.
///
/// Carries no identifier: the store assigns one on create and it is only
/// attached when a record is returned (see [`StoredRecord`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryRecord {
    /// Age in years (no range check is applied)
    pub age: i64,
    /// Free-form, conventionally "Male" or "Female"
    pub gender: String,
    /// Open set: "High School", "Bachelor", "Master", "PhD", ...
    pub education_level: String,
    pub job_title: String,
    /// Years of experience (no range check is applied)
    pub years_of_experience: i64,
    /// Currency amount
    pub salary: i64,
}

/// A persisted record together with its encoded store identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Opaque identifier assigned by the store, in its string form
    pub id: String,
    pub record: SalaryRecord,
}

/// Storage backend chosen per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    #[default]
    Mongo,
    /// Reserved, every operation is rejected as not implemented
    Mysql,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Mongo => "mongo",
            Backend::Mysql => "mysql",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mongo" => Ok(Backend::Mongo),
            "mysql" => Ok(Backend::Mysql),
            other => Err(format!("unknown backend '{other}', expected 'mongo' or 'mysql'")),
        }
    }
}
