//! Domain aggregates exposed by the clients service layer.

pub mod client;
pub mod types;
