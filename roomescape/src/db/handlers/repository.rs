//! Base repository trait for database operations.

/// Contains the Repository trait.
///
/// A repository is the data access layer for one SQLite table. It provides methods for
/// creating, listing, and deleting rows, returning typed models from [`crate::db::models`].
use crate::db::errors::Result;

/// Base repository trait providing common database operations
///
/// This trait has separate associated types for create requests and responses.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// List all entities, ordered by id
    async fn list(&mut self) -> Result<Vec<Self::Response>>;

    /// Delete an entity by ID, returning the number of rows removed (0 or 1)
    async fn delete(&mut self, id: Self::Id) -> Result<u64>;
}
