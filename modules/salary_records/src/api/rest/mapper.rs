//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

impl From<contract::StoredRecord> for SalaryRecordDto {
    fn from(stored: contract::StoredRecord) -> Self {
        let record = stored.record;
        Self {
            age: record.age,
            gender: record.gender,
            education_level: record.education_level,
            job_title: record.job_title,
            years_of_experience: record.years_of_experience,
            salary: record.salary,
            id: stored.id,
        }
    }
}

impl From<BackendDto> for contract::Backend {
    fn from(dto: BackendDto) -> Self {
        match dto {
            BackendDto::Mongo => contract::Backend::Mongo,
            BackendDto::Mysql => contract::Backend::Mysql,
        }
    }
}
