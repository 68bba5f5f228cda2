//! Conversion between MongoDB `ObjectId`s and their URL-safe string form

use crate::contract::SalaryRecordsError;
use bson::oid::ObjectId;

/// Encode as 24 lowercase hex characters
pub fn encode(id: &ObjectId) -> String {
    id.to_hex()
}

/// Parse the string form back into an `ObjectId`.
///
/// Fails with [`SalaryRecordsError::InvalidIdentifier`] for anything that is
/// not exactly 24 hex characters.
pub fn decode(id: &str) -> Result<ObjectId, SalaryRecordsError> {
    ObjectId::parse_str(id).map_err(|e| SalaryRecordsError::InvalidIdentifier {
        id: id.to_string(),
        details: e.to_string(),
    })
}
