//! detailhub server library entry.
//!
//! This crate wires configuration, identity resolution, the in-memory
//! document store, and the HTTP handlers into one axum application. It is
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod error;
pub mod ops;
pub mod router;
pub mod services;
