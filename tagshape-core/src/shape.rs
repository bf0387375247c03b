use alloc::vec::Vec;
use core::fmt;

use crate::{Field, FieldItem, FieldRead, FieldSet};

/// Tag name and closing policy of an element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TagDescriptor {
    /// Tag name, e.g. `meta`.
    pub name: &'static str,
    /// Whether the element takes content and a closing tag.
    pub closable: bool,
}

impl TagDescriptor {
    /// An element written as `<name ...>...</name>`.
    pub const fn paired(name: &'static str) -> Self {
        Self {
            name,
            closable: true,
        }
    }

    /// An element written without a closing tag, like `<meta ...>`.
    pub const fn void(name: &'static str) -> Self {
        Self {
            name,
            closable: false,
        }
    }
}

/// The static description of a markup-mapped type.
pub struct Shape<T: 'static> {
    /// Name of the Rust type, for diagnostics.
    pub type_identifier: &'static str,

    /// The element's tag. `None` for field sets that are only ever embedded
    /// in other elements.
    pub tag: Option<TagDescriptor>,

    /// All fields, in declaration order.
    pub fields: &'static [Field<T>],
}

impl<T: 'static> fmt::Debug for Shape<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("type_identifier", &self.type_identifier)
            .field("tag", &self.tag)
            .field("fields", &self.fields)
            .finish()
    }
}

/// A type with a static [`Shape`].
pub trait Shaped: Sized + 'static {
    /// The shape table for this type.
    const SHAPE: &'static Shape<Self>;
}

impl<T: Shaped> FieldSet for T {
    fn type_identifier(&self) -> &'static str {
        T::SHAPE.type_identifier
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<FieldItem<'a>>) {
        for field in T::SHAPE.fields {
            match &field.read {
                FieldRead::Value(read) => out.push(FieldItem {
                    owner: T::SHAPE.type_identifier,
                    name: field.name,
                    attributes: field.attributes,
                    value: read(self),
                }),
                FieldRead::Flatten(read) => read(self).collect_fields(out),
            }
        }
    }
}
