//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with SQLite.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Callers   │  (CLI, or an HTTP layer built on top)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries & row decoding)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   SQLite    │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations
//! - [`models`]: Database record structures
//! - [`errors`]: Database-specific error types
//! - [`pool`]: Connection pool construction from configuration
//!
//! # Schema
//!
//! The layer reads and writes two tables, `reservation(id, name, date, time_id)` and
//! `reservation_time(id, start_at)`, with dates and times stored as ISO text. Creating
//! the schema is left to whoever provisions the database; `migrations/` holds the
//! definition the test suite runs against.

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
