//! Errors raised while mapping an element onto markup.

use core::fmt;

/// A shape table that cannot be mapped.
///
/// These are configuration errors in the element type itself: they do not
/// depend on field values, so a type that maps once always maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The type's shape has no tag descriptor.
    MissingTagDescriptor {
        /// The offending type.
        type_identifier: &'static str,
    },

    /// A field is marked both as an attribute and as text content.
    ConflictingMarkers {
        /// The type declaring the field.
        type_identifier: &'static str,
        /// The field name.
        field: &'static str,
    },

    /// More than one field (flattened fields included) is marked as text content.
    MultipleTextFields {
        /// The element being mapped.
        type_identifier: &'static str,
        /// The first text field found.
        first: &'static str,
        /// The second text field found.
        second: &'static str,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTagDescriptor { type_identifier } => {
                write!(f, "missing tag descriptor on `{type_identifier}`")
            }
            Self::ConflictingMarkers {
                type_identifier,
                field,
            } => write!(
                f,
                "field `{type_identifier}::{field}` is marked both as an attribute and as text"
            ),
            Self::MultipleTextFields {
                type_identifier,
                first,
                second,
            } => write!(
                f,
                "`{type_identifier}` has more than one text field: `{first}` and `{second}`"
            ),
        }
    }
}

impl core::error::Error for MapError {}

/// Error produced by [`serialize_element`](crate::serialize_element).
#[derive(Debug)]
pub enum SerializeError<E> {
    /// The element's shape cannot be mapped.
    Map(MapError),
    /// The sink rejected an event.
    Sink(E),
}

impl<E> From<MapError> for SerializeError<E> {
    fn from(err: MapError) -> Self {
        Self::Map(err)
    }
}

impl<E: fmt::Debug> fmt::Display for SerializeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(err) => write!(f, "{err}"),
            Self::Sink(err) => write!(f, "markup sink error: {err:?}"),
        }
    }
}

impl<E: fmt::Debug + 'static> core::error::Error for SerializeError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Map(err) => Some(err),
            Self::Sink(_) => None,
        }
    }
}
