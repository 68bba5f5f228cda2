//! Document to model mappers
//!
//! Conversions between BSON documents and contract models

use super::object_id;
use crate::contract::model::field;
use crate::contract::{SalaryRecord, SalaryRecordsError, StoredRecord};
use bson::{Bson, Document};

/// Native identifier key of every document
pub const ID_KEY: &str = "_id";

/// Build the document body for a record (no `_id`, the store assigns it)
pub fn to_document(record: &SalaryRecord) -> Document {
    let mut document = Document::new();
    document.insert(field::AGE, record.age);
    document.insert(field::GENDER, record.gender.as_str());
    document.insert(field::EDUCATION_LEVEL, record.education_level.as_str());
    document.insert(field::JOB_TITLE, record.job_title.as_str());
    document.insert(field::YEARS_OF_EXPERIENCE, record.years_of_experience);
    document.insert(field::SALARY, record.salary);
    document
}

/// Turn a stored document into a record with its encoded identifier.
///
/// The `_id` field is removed from the body. Integer fields accept any
/// numeric representation the store may have coerced them to, as long as the
/// value is integral.
pub fn from_document(mut document: Document) -> Result<StoredRecord, SalaryRecordsError> {
    let id = match document.remove(ID_KEY) {
        Some(Bson::ObjectId(oid)) => object_id::encode(&oid),
        Some(other) => return Err(malformed(&format!("{ID_KEY} is {:?}", other.element_type()))),
        None => return Err(malformed(&format!("{ID_KEY} is missing"))),
    };

    let record = SalaryRecord {
        age: integer(&document, field::AGE)?,
        gender: string(&document, field::GENDER)?,
        education_level: string(&document, field::EDUCATION_LEVEL)?,
        job_title: string(&document, field::JOB_TITLE)?,
        years_of_experience: integer(&document, field::YEARS_OF_EXPERIENCE)?,
        salary: integer(&document, field::SALARY)?,
    };

    Ok(StoredRecord { id, record })
}

fn integer(document: &Document, key: &str) -> Result<i64, SalaryRecordsError> {
    match document.get(key) {
        Some(Bson::Int32(v)) => Ok(i64::from(*v)),
        Some(Bson::Int64(v)) => Ok(*v),
        Some(Bson::Double(v)) if v.fract() == 0.0 && in_i64_range(*v) => Ok(*v as i64),
        Some(other) => Err(malformed(&format!("{key} is {:?}", other.element_type()))),
        None => Err(malformed(&format!("{key} is missing"))),
    }
}

/// 2^63 is exactly representable; anything at or above it would saturate
fn in_i64_range(v: f64) -> bool {
    v >= -(2f64.powi(63)) && v < 2f64.powi(63)
}

fn string(document: &Document, key: &str) -> Result<String, SalaryRecordsError> {
    match document.get(key) {
        Some(Bson::String(v)) => Ok(v.clone()),
        Some(other) => Err(malformed(&format!("{key} is {:?}", other.element_type()))),
        None => Err(malformed(&format!("{key} is missing"))),
    }
}

fn malformed(details: &str) -> SalaryRecordsError {
    SalaryRecordsError::Storage {
        message: format!("Malformed salary record document: {details}"),
    }
}
