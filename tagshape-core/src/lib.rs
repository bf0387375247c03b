#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]

//! Shape tables for markup-mapped types.
//!
//! A type opts into markup mapping by implementing [`Shaped`]: a single
//! `'static` [`Shape`] lists the element's [`TagDescriptor`] and every field
//! in declaration order, each with its [`FieldAttribute`] markers and a plain
//! function pointer that reads the field's current value.
//!
//! Nothing here inspects types at runtime. The table is written once per type
//! (usually with the [`fields!`] macro) and consulted by generic code.
//!
//! ```rust
//! use tagshape_core::{Shape, Shaped, TagDescriptor, fields};
//!
//! struct Anchor {
//!     href: Option<String>,
//!     label: Option<String>,
//! }
//!
//! impl Shaped for Anchor {
//!     const SHAPE: &'static Shape<Self> = &Shape {
//!         type_identifier: "Anchor",
//!         tag: Some(TagDescriptor::paired("a")),
//!         fields: fields![
//!             href => attribute("href"),
//!             label => text(escape = true),
//!         ],
//!     };
//! }
//!
//! assert_eq!(Anchor::SHAPE.fields.len(), 2);
//! assert_eq!(Anchor::SHAPE.fields[0].attribute_name(), Some("href"));
//! ```

extern crate alloc;

mod field;
pub use field::*;

mod shape;
pub use shape::*;

mod value;
pub use value::*;

mod macros;
