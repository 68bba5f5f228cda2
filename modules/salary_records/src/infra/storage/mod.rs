//! Storage layer - document mapping, identifier codec and store implementations

pub mod document;
pub mod mongo;
pub mod object_id;
pub mod unimplemented;

pub use mongo::MongoRecordStore;
pub use unimplemented::UnimplementedStore;
