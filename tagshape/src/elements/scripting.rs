use alloc::string::String;

use tagshape_core::{Shape, Shaped, TagDescriptor, fields};

use super::global::{GlobalAttrs, impl_has_global_attrs};

/// Script, inline or external.
///
/// Inline source is emitted without body encoding. `async_` and `defer` are
/// boolean attributes: `Some(true)` renders the bare name, anything else
/// leaves it out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Script {
    /// Script source URL.
    pub src: Option<String>,
    /// Script type.
    pub type_: Option<String>,
    /// Character encoding of an external script.
    pub charset: Option<String>,
    /// Execute asynchronously.
    pub async_: Option<bool>,
    /// Defer execution until the document is parsed.
    pub defer: Option<bool>,
    /// CORS mode.
    pub crossorigin: Option<String>,
    /// Subresource integrity hash.
    pub integrity: Option<String>,
    /// Inline script source.
    pub text: Option<String>,
    /// Global attributes.
    pub attrs: GlobalAttrs,
}

impl Script {
    /// An inline `text/javascript` script.
    pub fn inline(source: impl Into<String>) -> Self {
        Self {
            type_: Some("text/javascript".into()),
            text: Some(source.into()),
            ..Self::default()
        }
    }

    /// An external `text/javascript` script.
    pub fn external(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            type_: Some("text/javascript".into()),
            ..Self::default()
        }
    }

    /// An ES module loaded from `src`.
    pub fn module(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            type_: Some("module".into()),
            ..Self::default()
        }
    }

    /// Set or clear `async`.
    pub fn with_async(mut self, value: bool) -> Self {
        self.async_ = Some(value);
        self
    }

    /// Set or clear `defer`.
    pub fn with_defer(mut self, value: bool) -> Self {
        self.defer = Some(value);
        self
    }

    /// Set `integrity` and `crossorigin="anonymous"`.
    pub fn with_integrity(mut self, hash: impl Into<String>) -> Self {
        self.integrity = Some(hash.into());
        self.crossorigin = Some("anonymous".into());
        self
    }
}

impl Shaped for Script {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "Script",
        tag: Some(TagDescriptor::paired("script")),
        fields: fields![
            src => attribute("src"),
            type_ => attribute("type"),
            charset => attribute("charset"),
            async_ => attribute("async"),
            defer => attribute("defer"),
            crossorigin => attribute("crossorigin"),
            integrity => attribute("integrity"),
            text => text(escape = false),
            attrs => flatten,
        ],
    };
}

impl_has_global_attrs!(Script);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Element;

    #[test]
    fn flags_render_bare_and_false_is_omitted() {
        let script = Script::external("/app.js")
            .with_async(true)
            .with_defer(false);
        let builder = script.builder().unwrap();
        assert_eq!(
            builder.attribute_strings(),
            [r#"src="/app.js""#, r#"type="text/javascript""#, "async"]
        );
        assert!(builder.is_closable());
        assert!(builder.text().is_none());
    }

    #[test]
    fn inline_source_is_not_encoded() {
        let markup = Script::inline("if (a && b) { go(\"x\"); }")
            .to_markup()
            .unwrap();
        assert_eq!(markup.text.as_deref(), Some("if (a && b) { go(\"x\"); }"));
    }

    #[test]
    fn integrity_sets_crossorigin() {
        let markup = Script::module("/m.js")
            .with_integrity("sha384-abc")
            .to_markup()
            .unwrap();
        assert_eq!(
            markup.attributes,
            [
                ("src", Some("/m.js".to_string())),
                ("type", Some("module".to_string())),
                ("crossorigin", Some("anonymous".to_string())),
                ("integrity", Some("sha384-abc".to_string())),
            ]
        );
    }
}
