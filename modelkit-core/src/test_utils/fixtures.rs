//! A registry of small, interlinked types.
//!
//! Views: `Admin` extends `Internal` extends `Public`; `Other` is unrelated.

use crate::reflect::{MemberAttrs, Primitive, Type, TypeDescriptor, TypeRegistry};

/// `id` field plus a `name` property read through a `Public` getter.
pub(crate) const CUSTOMER: &str = "app::Customer";
/// Creator-built order referencing line items, an enum and its customer.
pub(crate) const ORDER: &str = "app::Order";
pub(crate) const LINE_ITEM: &str = "app::LineItem";
pub(crate) const STATUS: &str = "app::Status";
/// `Page<T>` template.
pub(crate) const PAGE: &str = "app::Page";
/// `Person` and `Pet` refer to each other.
pub(crate) const PERSON: &str = "app::Person";
pub(crate) const PET: &str = "app::Pet";
/// Carries a local date-time.
pub(crate) const EVENT: &str = "app::Event";
/// No members at all.
pub(crate) const EMPTY: &str = "app::Empty";
/// Inherits from `Customer`.
pub(crate) const VIP: &str = "app::Vip";

pub(crate) fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    registry
        .declare_view("Internal", ["Public"])
        .declare_view("Admin", ["Internal"])
        .declare_view("Other", Vec::<&str>::new());

    let descriptors = [
        TypeDescriptor::object(CUSTOMER)
            .description("A customer of the shop.")
            .field("id", Primitive::Long, MemberAttrs::new())
            .field("name", Primitive::String, MemberAttrs::new())
            .getter(
                "getName",
                Primitive::String,
                MemberAttrs::new().view("Public"),
            ),
        TypeDescriptor::object(ORDER)
            .field("number", Primitive::String, MemberAttrs::new())
            .field("status", Type::named(STATUS), MemberAttrs::new())
            .field("history", Type::list(Type::named(STATUS)), MemberAttrs::new())
            .field("items", Type::list(Type::named(LINE_ITEM)), MemberAttrs::new())
            .field("tags", Type::set(Primitive::String.into()), MemberAttrs::new())
            .field(
                "customer",
                Type::optional(Type::named(CUSTOMER)),
                MemberAttrs::new().view("Internal"),
            )
            .creator_param("number", Primitive::String, MemberAttrs::new().required()),
        TypeDescriptor::object(LINE_ITEM)
            .field("sku", Primitive::String, MemberAttrs::new())
            .field("quantity", Primitive::Int, MemberAttrs::new()),
        TypeDescriptor::enumeration(STATUS, ["OPEN", "SHIPPED"]),
        TypeDescriptor::object(PAGE)
            .generics(["T"])
            .field("items", Type::list(Type::param("T")), MemberAttrs::new())
            .field("total", Primitive::Long, MemberAttrs::new()),
        TypeDescriptor::object(PERSON)
            .field("name", Primitive::String, MemberAttrs::new())
            .field("pet", Type::named(PET), MemberAttrs::new()),
        TypeDescriptor::object(PET)
            .field("name", Primitive::String, MemberAttrs::new())
            .field("owner", Type::named(PERSON), MemberAttrs::new()),
        TypeDescriptor::object(EVENT)
            .field("at", Primitive::LocalDateTime, MemberAttrs::new())
            .field("day", Primitive::Date, MemberAttrs::new()),
        TypeDescriptor::object(EMPTY),
        TypeDescriptor::object(VIP)
            .parent(Type::named(CUSTOMER))
            .field("tier", Primitive::Int, MemberAttrs::new().view("Admin")),
    ];
    for descriptor in descriptors {
        registry.insert(descriptor).unwrap();
    }

    registry
}
