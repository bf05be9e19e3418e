#![deny(
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs
)]
#![warn(unreachable_pub)]
#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod describe;
mod utils;

/// Derives `Describe` for structs with named fields and for enums with unit variants.
///
/// For a struct, the generated descriptor declares one field per Rust field, in declaration
/// order, with the field's `#[model(...)]` attributes and doc comment. Registering the type
/// also registers the type of every field. For an enum, the descriptor lists the variant
/// names, which become the allowable values of properties of that type.
///
/// The type path is the module path of the type followed by its name, so the same name in two
/// modules gives two distinct types. Every type parameter must implement `Describe` itself.
///
/// # Limitations
///
/// - **Tuple structs**: properties need names.
/// - **Enums with data**: only unit variants have a textual representation.
/// - **Unions**: not supported.
///
/// ```rust,compile_fail
/// # use modelkit::reflect::Describe;
/// #[derive(Describe)]  // This will fail to compile
/// struct Point(f32, f32, f32);
/// ```
///
/// ```rust,compile_fail
/// # use modelkit::reflect::Describe;
/// #[derive(Describe)]  // This will fail to compile
/// enum Shape {
///     Circle { radius: f64 },
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use modelkit::{
///     reflect::{Describe, Primitive, Type, TypeRegistry},
///     ModelContext, ModelProvider,
/// };
///
/// /// Someone to deliver to.
/// #[derive(Describe)]
/// #[model(rename_all = "camelCase")]
/// struct Recipient {
///     #[model(required)]
///     full_name: String,
///     #[model(view = "Internal")]
///     phone_number: Option<String>,
///     #[model(skip)]
///     cache: core::cell::Cell<u8>,
/// }
///
/// #[derive(Describe)]
/// enum Priority {
///     Low,
///     #[model(rename = "URGENT")]
///     High,
/// }
///
/// #[derive(Describe)]
/// struct Parcel {
///     to: Recipient,
///     priority: Priority,
/// }
///
/// let mut registry = TypeRegistry::new();
/// registry.register::<Parcel>()?;
/// assert!(registry.contains(&Recipient::type_expr()));
/// assert_eq!(
///     registry.enum_values(&Priority::type_expr()),
///     Some(vec!["Low".to_string(), "URGENT".to_string()]),
/// );
///
/// let provider = ModelProvider::builder(registry).build();
/// let recipient = provider
///     .model_for(&ModelContext::return_value(Recipient::type_expr()))?
///     .unwrap();
/// assert_eq!(recipient.description(), Some("Someone to deliver to."));
/// let names: Vec<_> = recipient.properties().keys().map(String::as_str).collect();
/// assert_eq!(names, ["fullName", "phoneNumber"]);
/// assert!(recipient.property("fullName").unwrap().is_required());
///
/// assert_eq!(Type::from(Primitive::String), String::type_expr());
/// # Ok::<(), modelkit::Error>(())
/// ```
///
/// # Attributes
///
/// All attributes live under `#[model(...)]`.
///
/// On the type:
///
/// - `crate = "..."`: path to the `modelkit` crate, `::modelkit` by default.
/// - `rename = "..."`: name of the type in model ids, instead of the Rust name.
/// - `rename_all = "..."`: naming rule for the external names of fields without `rename`.
///   Not allowed on enums.
///
/// On a field:
///
/// - `rename = "..."`: external name of the property.
/// - `view = "..."`: restricts the property to a view. Repeat for several views.
/// - `skip`: leaves the field out of the descriptor.
/// - `skip_serializing`, `skip_deserializing`: hides the field for one direction.
/// - `required`: marks the property as required.
/// - `allowable_values = "a,b"`: comma-separated allowable values.
///
/// On a variant:
///
/// - `rename = "..."`: the textual value of the variant.
#[proc_macro_derive(Describe, attributes(model))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive_describe(input)
}
