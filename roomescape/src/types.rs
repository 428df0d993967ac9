//! Common type definitions.
//!
//! Entity IDs are the integer primary keys SQLite assigns on insert, wrapped in type aliases
//! so signatures say which table an id belongs to:
//!
//! - [`ReservationId`]: reservation identifier
//! - [`ReservationTimeId`]: reservation time slot identifier

// Type aliases for IDs
pub type ReservationId = i64;
pub type ReservationTimeId = i64;
