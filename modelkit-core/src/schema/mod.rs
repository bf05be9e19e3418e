//! The resolved schema: models, their properties and item references.

mod model;
pub use model::Model;
mod model_ref;
pub use model_ref::ModelRef;
mod property;
pub use property::Property;
