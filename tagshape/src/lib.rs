#![deny(unsafe_code)]
#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

//! Map element types onto HTML tag attributes and text.
//!
//! An element is a plain struct implementing [`Shaped`]: its `'static`
//! [`Shape`] names the tag, whether it takes a closing tag, and how each field
//! maps onto the tag. [`builder`] walks that table once and returns a
//! [`TagBuilder`] holding the attributes, in field order, plus an optional
//! text payload.
//!
//! # Field mapping
//!
//! - `field => attribute("name")`: `Some(v)` adds `name="v"`, `None` adds
//!   nothing. `Some(true)` on a `bool` field adds the bare name.
//! - `field => text(escape = true)`: `Some(s)` becomes the text payload,
//!   body-encoded on output when `escape` is set. `None` leaves no payload.
//! - `field => flatten`: the embedded value's fields are walked in place.
//!
//! A field carrying both markers, two text fields, or a missing tag descriptor
//! is a [`MapError`], whatever the field values are.
//!
//! # Example
//!
//! ```rust
//! use tagshape::{Element, Shape, Shaped, TagDescriptor, fields};
//!
//! #[derive(Default)]
//! struct Abbr {
//!     tooltip: Option<String>,
//!     text: Option<String>,
//! }
//!
//! impl Shaped for Abbr {
//!     const SHAPE: &'static Shape<Self> = &Shape {
//!         type_identifier: "Abbr",
//!         tag: Some(TagDescriptor::paired("abbr")),
//!         fields: fields![
//!             tooltip => attribute("title"),
//!             text => text(escape = true),
//!         ],
//!     };
//! }
//!
//! let abbr = Abbr {
//!     tooltip: Some("Hypertext \"Markup\" Language".into()),
//!     text: Some("HTML & co".into()),
//! };
//! let markup = abbr.to_markup().unwrap();
//! assert_eq!(markup.tag_name, "abbr");
//! assert_eq!(
//!     markup.attributes,
//!     [("title", Some("Hypertext &quot;Markup&quot; Language".to_string()))]
//! );
//! assert_eq!(markup.text.as_deref(), Some("HTML&nbsp;&amp;&nbsp;co"));
//! ```
//!
//! # Encoding
//!
//! [`encode_attribute`] replaces only `&` and `"`; `<`, `>`, `'` and `\` are
//! left as they are. [`encode_body`] adds `&nbsp;` for spaces and tabs and
//! `<br>` for newlines. [`encode_style`] quotes values containing `;`.
//!
//! Assembling the final `<tag ...>` string is up to the caller, either from a
//! [`Markup`] or through a custom [`MarkupSink`].

extern crate alloc;

mod tracing_macros;

mod builder;
pub use builder::{Attribute, Markup, TagBuilder, TextPayload};

mod error;
pub use error::{MapError, SerializeError};

pub mod escape;
pub use escape::{encode_attribute, encode_body, encode_style};

mod serializer;
pub use serializer::{
    Element, MarkupSink, builder, map_element_to_markup, serialize_element, tag_of,
};

pub mod elements;

pub use tagshape_core::{
    AttrValue, Field, FieldAttribute, FieldItem, FieldRead, FieldSet, FieldValue, ScalarValue,
    Shape, Shaped, TagDescriptor, ToFieldValue, fields,
};
