//! HTTP handlers over the core operations, plus the simulated summarizer.

pub mod calls;
pub mod clients;
pub mod organizations;
pub mod summary;
pub mod tasks;
pub mod users;

pub use summary::SimulatedSummarizer;
