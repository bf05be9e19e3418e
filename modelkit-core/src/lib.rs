#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub, clippy::std_instead_of_core)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod log;

mod error;
pub use error::{Error, Result};
pub mod reflect;
pub mod view;
pub use view::View;
pub mod naming;
pub mod introspect;
pub mod metadata;
pub mod property;
pub mod alternate;
pub mod docs;
mod context;
pub use context::{ModelContext, Operation};
pub mod schema;
pub use schema::{Model, ModelRef, Property};
mod resolver;
pub use resolver::{
    ModelProvider, ModelProviderBuilder, DEFAULT_WIRE_NAME_OVERRIDES, MODEL_ID_VIEW_DELIMITER,
};
pub mod dependency;

#[cfg(test)]
mod test_utils;
