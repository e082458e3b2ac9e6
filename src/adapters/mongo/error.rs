//! MongoDB error types for the storage adapter.

pub type MongoError = mongodb::error::Error;
pub type SerializationError = mongodb::bson::ser::Error;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] MongoError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializationError),
}
