//! Ready-made element types for the document head.
//!
//! Every element embeds [`GlobalAttrs`] as its last field, so its own
//! attributes come first and the global ones follow:
//!
//! ```rust
//! use tagshape::Element;
//! use tagshape::elements::{HasGlobalAttrs, Link};
//!
//! let link = Link::stylesheet("/site.css").with_id("main-css");
//! assert_eq!(
//!     link.builder().unwrap().attribute_strings(),
//!     [r#"rel="stylesheet""#, r#"href="/site.css""#, r#"type="text/css""#, r#"id="main-css""#],
//! );
//! ```

mod global;
pub use global::*;

mod metadata;
pub use metadata::*;

mod scripting;
pub use scripting::*;
