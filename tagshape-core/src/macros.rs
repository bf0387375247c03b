/// Builds a `&'static [Field<Self>]` table for a [`Shape`](crate::Shape).
///
/// Each entry names a struct field and how it maps onto the tag:
///
/// - `field => attribute("name")`: rendered as the attribute `name`
/// - `field => text(escape = true)`: rendered as the tag's text content
/// - `field => flatten`: an embedded [`Shaped`](crate::Shaped) value whose
///   fields are spliced in at this position
///
/// Leaf fields must implement [`ToFieldValue`](crate::ToFieldValue), so a
/// field whose type cannot be rendered fails to compile.
///
/// ```rust
/// use tagshape_core::{Shape, Shaped, TagDescriptor, fields};
///
/// struct Img {
///     src: Option<String>,
///     alt: Option<String>,
/// }
///
/// impl Shaped for Img {
///     const SHAPE: &'static Shape<Self> = &Shape {
///         type_identifier: "Img",
///         tag: Some(TagDescriptor::void("img")),
///         fields: fields![src => attribute("src"), alt => attribute("alt")],
///     };
/// }
/// ```
#[macro_export]
macro_rules! fields {
    ($($field:ident => $kind:ident $(($($args:tt)*))?),* $(,)?) => {
        &[$($crate::__field!($field => $kind $(($($args)*))?)),*]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field {
    ($field:ident => attribute($name:expr)) => {
        $crate::Field {
            name: ::core::stringify!($field),
            attributes: &[$crate::FieldAttribute::Attribute($name)],
            read: $crate::FieldRead::Value(|this| {
                $crate::ToFieldValue::to_field_value(&this.$field)
            }),
        }
    };
    ($field:ident => text(escape = $escape:expr)) => {
        $crate::Field {
            name: ::core::stringify!($field),
            attributes: &[$crate::FieldAttribute::Text { escape: $escape }],
            read: $crate::FieldRead::Value(|this| {
                $crate::ToFieldValue::to_field_value(&this.$field)
            }),
        }
    };
    ($field:ident => flatten) => {
        $crate::Field {
            name: ::core::stringify!($field),
            attributes: &[],
            read: $crate::FieldRead::Flatten(|this| {
                let set: &dyn $crate::FieldSet = &this.$field;
                set
            }),
        }
    };
}
