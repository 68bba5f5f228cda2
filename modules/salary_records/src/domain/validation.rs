//! Payload validation for salary records

use crate::contract::model::field;
use crate::contract::{FieldError, SalaryRecord, SalaryRecordsError};
use serde_json::{Map, Value};

/// Validate an untyped JSON payload and build a [`SalaryRecord`].
///
/// Every field is required. `Age`, `Years_of_Experience` and `Salary` must be
/// JSON integers; the remaining fields must be strings. Values are not range
/// checked, so negative ages are accepted. All failing fields are reported
/// together, in schema order.
pub fn parse_record(payload: &Value) -> Result<SalaryRecord, SalaryRecordsError> {
    let Some(object) = payload.as_object() else {
        return Err(SalaryRecordsError::Validation {
            errors: vec![FieldError::wrong_type("body", "JSON object")],
        });
    };

    let mut errors = Vec::new();
    let age = integer_field(object, field::AGE, &mut errors);
    let gender = string_field(object, field::GENDER, &mut errors);
    let education_level = string_field(object, field::EDUCATION_LEVEL, &mut errors);
    let job_title = string_field(object, field::JOB_TITLE, &mut errors);
    let years_of_experience = integer_field(object, field::YEARS_OF_EXPERIENCE, &mut errors);
    let salary = integer_field(object, field::SALARY, &mut errors);

    match (age, gender, education_level, job_title, years_of_experience, salary) {
        (
            Some(age),
            Some(gender),
            Some(education_level),
            Some(job_title),
            Some(years_of_experience),
            Some(salary),
        ) if errors.is_empty() => Ok(SalaryRecord {
            age,
            gender,
            education_level,
            job_title,
            years_of_experience,
            salary,
        }),
        _ => Err(SalaryRecordsError::Validation { errors }),
    }
}

fn integer_field(object: &Map<String, Value>, name: &str, errors: &mut Vec<FieldError>) -> Option<i64> {
    match object.get(name) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(name));
            None
        }
        Some(value) => {
            let parsed = value.as_i64();
            if parsed.is_none() {
                errors.push(FieldError::wrong_type(name, "integer"));
            }
            parsed
        }
    }
}

fn string_field(object: &Map<String, Value>, name: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match object.get(name) {
        None | Some(Value::Null) => {
            errors.push(FieldError::missing(name));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::wrong_type(name, "string"));
            None
        }
    }
}
