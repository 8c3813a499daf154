//! Wire protocol for the licensing endpoint.

pub mod models;
