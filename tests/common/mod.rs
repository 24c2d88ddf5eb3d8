//! Shared test utilities for griot integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Fixtures are deterministic and every fake store works
//! with `tokio::time::pause()`.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod builders;
pub mod fake_store;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_store::*;
pub use fixtures::*;
