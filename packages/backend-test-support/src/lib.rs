//! Backend test support utilities
//!
//! Shared helpers for backend testing: unified logging initialization and
//! Problem Details assertions that don't depend on backend types.

pub mod logging;
pub mod problem_details;
