//! API request/response models.
//!
//! Responses are projections of [`crate::db::models`] records, built with `From`. They format
//! dates and times as strings and are recomputed on every output.

pub mod reservation_times;
pub mod reservations;
