//! Access requests, verdicts, and synthetic request generation
//!
//! # Overview
//!
//! - **AccessRequest**: one badge swipe (employee, clearance, time, room)
//! - **AccessDecision**: which rule decided a request, with the values it cited
//! - **Verdict**: a request together with its outcome and processing position
//! - **RequestGenerator**: seeded batches of synthetic swipes

pub mod access_request;
pub mod generator;
pub mod verdict;

// Re-export all public types for convenience
pub use access_request::*;
pub use generator::*;
pub use verdict::*;
