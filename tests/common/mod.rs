//! Common test utilities for Enroll CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Fixtures: Reusable enrollment file contents

pub mod fixtures;

pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
