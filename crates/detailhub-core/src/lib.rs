//! detailhub core: data model, store contracts, the organization access guard,
//! and the dashboard operations built on top of them.
//!
//! This crate carries no transport or runtime dependencies. Every operation
//! takes a [`store::RequestCtx`] (caller identity + document store) so it can
//! run behind the HTTP server or directly against the in-memory store in tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `DashError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod access;
pub mod error;
pub mod identity;
pub mod memory;
pub mod model;
pub mod ops;
pub mod store;
pub mod summary;

/// Shared result type.
pub use error::{DashError, Result};
pub use access::AccessGuard;
