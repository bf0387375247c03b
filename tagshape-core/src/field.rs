use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::AttrValue;

/// A marker attached to a field in a [`Shape`](crate::Shape) table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldAttribute {
    /// The field renders as the tag attribute with this name.
    Attribute(&'static str),
    /// The field renders as the tag's text content.
    Text {
        /// Whether the text goes through body encoding when rendered.
        escape: bool,
    },
}

/// Reads one field's value out of its owner.
pub enum FieldRead<T> {
    /// A leaf field. `None` means the field currently holds no value.
    Value(for<'a> fn(&'a T) -> Option<FieldValue<'a>>),
    /// An embedded field set whose own fields are spliced in at this position.
    Flatten(for<'a> fn(&'a T) -> &'a dyn FieldSet),
}

/// Describes a field of a markup-mapped type.
pub struct Field<T> {
    /// The Rust field name (used in diagnostics).
    pub name: &'static str,

    /// Markers set on the field. Ignored for flattened fields.
    pub attributes: &'static [FieldAttribute],

    /// How to read the field's value.
    pub read: FieldRead<T>,
}

impl<T> Field<T> {
    /// The declared attribute name, if the field is marked as an attribute.
    pub fn attribute_name(&self) -> Option<&'static str> {
        attribute_name(self.attributes)
    }

    /// The escape flag, if the field is marked as text content.
    pub fn text_escape(&self) -> Option<bool> {
        text_escape(self.attributes)
    }

    /// Returns true if this field embeds another field set.
    pub fn is_flattened(&self) -> bool {
        matches!(self.read, FieldRead::Flatten(_))
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("flattened", &self.is_flattened())
            .finish()
    }
}

fn attribute_name(attributes: &[FieldAttribute]) -> Option<&'static str> {
    attributes.iter().find_map(|attr| match attr {
        FieldAttribute::Attribute(name) => Some(*name),
        FieldAttribute::Text { .. } => None,
    })
}

fn text_escape(attributes: &[FieldAttribute]) -> Option<bool> {
    attributes.iter().find_map(|attr| match attr {
        FieldAttribute::Text { escape } => Some(*escape),
        FieldAttribute::Attribute(_) => None,
    })
}

/// The current value of a leaf field, borrowed from its owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    /// A string value.
    Str(&'a str),
    /// A (possibly unit-suffixed) attribute value.
    Attr(&'a AttrValue),
    /// A boolean flag. As an attribute, `true` renders as the bare name.
    Flag(bool),
}

impl FieldValue<'_> {
    /// The string form used when the value becomes text content.
    pub fn to_text(&self) -> String {
        match self {
            FieldValue::Str(s) => (*s).to_string(),
            FieldValue::Attr(value) => value.render(),
            FieldValue::Flag(b) => b.to_string(),
        }
    }
}

/// Conversion from a field's storage type to an optional [`FieldValue`].
///
/// Implemented for the `Option<_>` types element fields are stored as;
/// `None` maps to an absent value.
pub trait ToFieldValue {
    /// Borrow the current value.
    fn to_field_value(&self) -> Option<FieldValue<'_>>;
}

impl ToFieldValue for Option<String> {
    fn to_field_value(&self) -> Option<FieldValue<'_>> {
        self.as_deref().map(FieldValue::Str)
    }
}

impl ToFieldValue for Option<&'static str> {
    fn to_field_value(&self) -> Option<FieldValue<'_>> {
        self.map(FieldValue::Str)
    }
}

impl ToFieldValue for Option<Cow<'static, str>> {
    fn to_field_value(&self) -> Option<FieldValue<'_>> {
        self.as_deref().map(FieldValue::Str)
    }
}

impl ToFieldValue for Option<AttrValue> {
    fn to_field_value(&self) -> Option<FieldValue<'_>> {
        self.as_ref().map(FieldValue::Attr)
    }
}

impl ToFieldValue for Option<bool> {
    fn to_field_value(&self) -> Option<FieldValue<'_>> {
        self.map(FieldValue::Flag)
    }
}

/// One leaf field reached while walking a [`FieldSet`].
#[derive(Clone, Copy, Debug)]
pub struct FieldItem<'a> {
    /// Type identifier of the type that declares the field.
    pub owner: &'static str,
    /// The Rust field name.
    pub name: &'static str,
    /// Markers set on the field.
    pub attributes: &'static [FieldAttribute],
    /// The field's current value.
    pub value: Option<FieldValue<'a>>,
}

impl FieldItem<'_> {
    /// The declared attribute name, if the field is marked as an attribute.
    pub fn attribute_name(&self) -> Option<&'static str> {
        attribute_name(self.attributes)
    }

    /// The escape flag, if the field is marked as text content.
    pub fn text_escape(&self) -> Option<bool> {
        text_escape(self.attributes)
    }
}

/// Object-safe view over a [`Shaped`](crate::Shaped) value's fields.
///
/// Implemented for every `Shaped` type; flattened fields are read through
/// `&dyn FieldSet` so the embedding type does not need to name the embedded
/// type's shape.
pub trait FieldSet {
    /// Type identifier of the underlying type.
    fn type_identifier(&self) -> &'static str;

    /// Push every leaf field, in walk order, onto `out`.
    ///
    /// Flattened fields are expanded in place.
    fn collect_fields<'a>(&'a self, out: &mut Vec<FieldItem<'a>>);
}
