//! `athenaeum_core`
//!
//! Core library for the platform-independent logic of Athenaeum. This library aims to provide a
//! crate that can drive any frontend shell (console, desktop, web) against the remote catalog
//! service without implementing the same logic twice.

pub mod catalog;

pub mod render;
