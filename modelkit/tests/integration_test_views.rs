//! View-specialized models of hand-written descriptors.
//!
//! Accessors and view hierarchies cannot be derived, so these types are declared with
//! `TypeDescriptor` directly.

use modelkit::{
    alternate::AlternateTypeRules,
    reflect::{MemberAttrs, Primitive, Type, TypeDescriptor, TypeRegistry},
    ModelContext, ModelProvider,
};

const USER: &str = "app::User";
const REPORT: &str = "app::Report";
const INVOICE: &str = "app::Invoice";
const MONEY: &str = "app::Money";

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .declare_view("Internal", ["Public", "Audit"])
        .declare_view("Admin", ["Internal"])
        .declare_view("Other", Vec::<&str>::new());

    for descriptor in [
        TypeDescriptor::object(USER)
            .field("id", Primitive::Long, MemberAttrs::new())
            .getter("getName", Primitive::String, MemberAttrs::new().view("Public")),
        TypeDescriptor::object(REPORT)
            .field("title", Primitive::String, MemberAttrs::new())
            .field(
                "figures",
                Primitive::String,
                MemberAttrs::new().view("Public").view("Audit"),
            ),
        TypeDescriptor::object(INVOICE)
            .field("total", Type::named(MONEY), MemberAttrs::new())
            .field("customer", Type::named("app::Ghost"), MemberAttrs::new()),
        TypeDescriptor::object(MONEY)
            .field("amount", Primitive::Long, MemberAttrs::new())
            .field("currency", Primitive::String, MemberAttrs::new()),
    ] {
        registry.insert(descriptor).unwrap();
    }

    registry
}

fn property_names(provider: &ModelProvider, context: &ModelContext) -> Vec<String> {
    let model = provider.model_for(context).unwrap().unwrap();
    model.properties().keys().cloned().collect()
}

#[test]
fn field_and_view_restricted_accessor() {
    let provider = ModelProvider::builder(registry()).build();
    let user = ModelContext::return_value(Type::named(USER));

    assert_eq!(property_names(&provider, &user), ["id", "name"]);
    assert_eq!(
        property_names(&provider, &user.clone().with_views(["Public"])),
        ["id", "name"]
    );
    assert_eq!(
        property_names(&provider, &user.clone().with_views(["Admin"])),
        ["id", "name"]
    );
    assert_eq!(
        property_names(&provider, &user.with_views(["Other"])),
        ["id"]
    );
}

#[test]
fn every_declared_view_must_match() {
    let provider = ModelProvider::builder(registry()).build();
    let report = ModelContext::return_value(Type::named(REPORT));

    // `Audit` is not assignable from `Public`.
    assert_eq!(
        property_names(&provider, &report.clone().with_views(["Public"])),
        ["title"]
    );
    // `Internal` extends both.
    assert_eq!(
        property_names(&provider, &report.clone().with_views(["Internal"])),
        ["title", "figures"]
    );
    assert_eq!(
        property_names(&provider, &report.with_views(["Public", "Audit"])),
        ["title", "figures"]
    );
}

#[test]
fn view_qualified_ids() {
    let provider = ModelProvider::builder(registry()).build();
    let user = Type::named(USER);

    let plain = provider
        .model_for(&ModelContext::return_value(user.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(plain.id(), "User");

    let context = ModelContext::return_value(user.clone()).with_views(["Public", "Admin"]);
    let first = provider.model_for(&context).unwrap().unwrap();
    let second = provider.model_for(&context).unwrap().unwrap();
    assert_eq!(first.id(), "UserPublicAndAdmin");
    assert_eq!(first, second);

    let reversed = ModelContext::return_value(user).with_views(["Admin", "Public"]);
    assert_eq!(
        provider.model_for(&reversed).unwrap().unwrap().id(),
        "UserAdminAndPublic"
    );
}

#[test_log::test]
fn unresolvable_dependencies_are_skipped() {
    let provider = ModelProvider::builder(registry()).build();
    let models = provider
        .dependencies(&ModelContext::return_value(Type::named(INVOICE)))
        .unwrap();

    let ids: Vec<_> = models.keys().map(String::as_str).collect();
    assert_eq!(ids, ["Invoice", "Money"]);
    assert_eq!(models["Invoice"].property("customer").unwrap().type_name(), "Ghost");
}

#[test]
fn alternate_types_are_inlined() {
    let provider = ModelProvider::builder(registry())
        .alternates(AlternateTypeRules::new().rule(Type::named(MONEY), Primitive::String.into()))
        .build();
    let models = provider
        .dependencies(&ModelContext::return_value(Type::named(INVOICE)))
        .unwrap();

    let ids: Vec<_> = models.keys().map(String::as_str).collect();
    assert_eq!(ids, ["Invoice"]);
    let total = models["Invoice"].property("total").unwrap();
    assert_eq!(total.type_name(), "string");
    assert_eq!(total.qualified_type(), "String");

    let money = ModelContext::return_value(Type::named(MONEY));
    assert!(provider.model_for(&money).unwrap().is_none());
}
