//! Wire-facing types.
//!
//! Routing and controllers live outside this crate; [`models`] holds the request and response
//! shapes such a layer exchanges with clients.

pub mod models;
