//! Shared fixtures for unit tests.

mod fixtures;
pub(crate) use fixtures::*;
