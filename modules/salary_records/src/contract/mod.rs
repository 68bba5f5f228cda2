//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - the wire shape lives in `api::rest::dto`
//! and the document shape in `infra::storage::document`.

pub mod error;
pub mod model;

pub use error::{FieldError, SalaryRecordsError};
pub use model::{Backend, SalaryRecord, StoredRecord};
