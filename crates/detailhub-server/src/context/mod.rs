//! Per-request context: who is calling, resolved before any handler runs.

pub mod identity;
pub mod request;

pub use identity::StaticTokenProvider;
pub use request::Caller;
