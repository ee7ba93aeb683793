//! Top-level facade crate for detailhub.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use detailhub_core::*;
}

pub mod server {
    pub use detailhub_server::*;
}
