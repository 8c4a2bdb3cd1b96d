//! Catalog library
//!
//! Holds the book list fetched from the remote catalog service, the in-memory
//! filtering over it, and the comment operations that round-trip through the
//! service and replace local state with its authoritative response.
pub mod api;
pub mod client;
pub mod controller;
pub mod errors;
pub mod filter;
pub mod types;
