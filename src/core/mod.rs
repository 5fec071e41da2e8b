//! Core data types and structures
//!
//! This module contains the fundamental data types used throughout
//! cycle-breaker, separated from the algorithms that operate on them.

pub mod types;

pub use types::*;
