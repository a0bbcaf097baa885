//! Common test utilities for vendorclean integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project and config directories plus a CLI runner
//! - Fixtures: the reference vendor tree and its `glide.lock`

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
