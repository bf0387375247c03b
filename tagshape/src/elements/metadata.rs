use alloc::string::String;

use tagshape_core::{AttrValue, Shape, Shaped, TagDescriptor, fields};

use super::global::{GlobalAttrs, impl_has_global_attrs};

/// Document title.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Title {
    /// Title text, body-encoded when rendered.
    pub text: Option<String>,
    /// Global attributes.
    pub attrs: GlobalAttrs,
}

impl Title {
    /// A title with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl Shaped for Title {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "Title",
        tag: Some(TagDescriptor::paired("title")),
        fields: fields![
            text => text(escape = true),
            attrs => flatten,
        ],
    };
}

/// Document metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Meta {
    /// Character encoding.
    pub charset: Option<String>,
    /// Metadata name.
    pub name: Option<String>,
    /// Pragma directive.
    pub http_equiv: Option<String>,
    /// Metadata content. Accepts numbers too, e.g. a refresh delay.
    pub content: Option<AttrValue>,
    /// Property (Open Graph and friends).
    pub property: Option<String>,
    /// Global attributes.
    pub attrs: GlobalAttrs,
}

impl Meta {
    /// `<meta charset="...">`
    pub fn charset(charset: impl Into<String>) -> Self {
        Self {
            charset: Some(charset.into()),
            ..Self::default()
        }
    }

    /// `<meta name="..." content="...">`
    pub fn named(name: impl Into<String>, content: impl Into<AttrValue>) -> Self {
        Self {
            name: Some(name.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// `<meta http-equiv="..." content="...">`
    pub fn http_equiv(http_equiv: impl Into<String>, content: impl Into<AttrValue>) -> Self {
        Self {
            http_equiv: Some(http_equiv.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// `<meta property="..." content="...">`
    pub fn property(property: impl Into<String>, content: impl Into<AttrValue>) -> Self {
        Self {
            property: Some(property.into()),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// `<meta http-equiv="refresh" content="N">`
    pub fn refresh(seconds: u32) -> Self {
        Self::http_equiv("refresh", seconds)
    }
}

impl Shaped for Meta {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "Meta",
        tag: Some(TagDescriptor::void("meta")),
        fields: fields![
            charset => attribute("charset"),
            name => attribute("name"),
            http_equiv => attribute("http-equiv"),
            content => attribute("content"),
            property => attribute("property"),
            attrs => flatten,
        ],
    };
}

/// External resource link.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Link {
    /// Relationship type.
    pub rel: Option<String>,
    /// URL of the linked resource.
    pub href: Option<String>,
    /// MIME type of the resource.
    pub type_: Option<String>,
    /// Media query for the resource.
    pub media: Option<String>,
    /// Icon sizes, e.g. `16x16`.
    pub sizes: Option<AttrValue>,
    /// Language of the linked resource.
    pub hreflang: Option<String>,
    /// CORS mode.
    pub crossorigin: Option<String>,
    /// Global attributes.
    pub attrs: GlobalAttrs,
}

impl Link {
    /// `<link rel="..." href="...">`
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: Some(rel.into()),
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// A `text/css` stylesheet link.
    pub fn stylesheet(href: impl Into<String>) -> Self {
        Self {
            type_: Some("text/css".into()),
            ..Self::new("stylesheet", href)
        }
    }

    /// An icon link, optionally with its sizes.
    pub fn icon(href: impl Into<String>, sizes: Option<AttrValue>) -> Self {
        Self {
            sizes,
            ..Self::new("icon", href)
        }
    }

    /// Set `media`.
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }
}

impl Shaped for Link {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "Link",
        tag: Some(TagDescriptor::void("link")),
        fields: fields![
            rel => attribute("rel"),
            href => attribute("href"),
            type_ => attribute("type"),
            media => attribute("media"),
            sizes => attribute("sizes"),
            hreflang => attribute("hreflang"),
            crossorigin => attribute("crossorigin"),
            attrs => flatten,
        ],
    };
}

/// Inline stylesheet. The CSS is emitted without body encoding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// MIME type.
    pub type_: Option<String>,
    /// Media query.
    pub media: Option<String>,
    /// CSS content.
    pub text: Option<String>,
    /// Global attributes.
    pub attrs: GlobalAttrs,
}

impl Style {
    /// A `text/css` stylesheet with the given content.
    pub fn new(css: impl Into<String>) -> Self {
        Self {
            type_: Some("text/css".into()),
            text: Some(css.into()),
            ..Self::default()
        }
    }
}

impl Shaped for Style {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "Style",
        tag: Some(TagDescriptor::paired("style")),
        fields: fields![
            type_ => attribute("type"),
            media => attribute("media"),
            text => text(escape = false),
            attrs => flatten,
        ],
    };
}

/// Document base URL.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Base {
    /// Base URL.
    pub href: Option<String>,
    /// Default browsing context.
    pub target: Option<String>,
    /// Global attributes.
    pub attrs: GlobalAttrs,
}

impl Base {
    /// `<base href="...">`
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }
}

impl Shaped for Base {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "Base",
        tag: Some(TagDescriptor::void("base")),
        fields: fields![
            href => attribute("href"),
            target => attribute("target"),
            attrs => flatten,
        ],
    };
}

impl_has_global_attrs!(Title, Meta, Link, Style, Base);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Element;
    use crate::elements::HasGlobalAttrs;
    use alloc::vec;

    #[test]
    fn meta_charset_maps_to_a_single_attribute() {
        let markup = Meta::charset("UTF-8").to_markup().unwrap();
        assert_eq!(markup.tag_name, "meta");
        assert!(!markup.closable);
        assert_eq!(markup.attributes, vec![("charset", Some("UTF-8".to_string()))]);
        assert_eq!(markup.text, None);
    }

    #[test]
    fn refresh_renders_numeric_content() {
        let builder = Meta::refresh(5).builder().unwrap();
        assert_eq!(
            builder.attribute_strings(),
            vec![r#"http-equiv="refresh""#, r#"content="5""#]
        );
    }

    #[test]
    fn own_attributes_precede_global_ones() {
        let base = Base::new("/docs/").with_lang("en").with_id("b");
        let names: Vec<_> = base
            .builder()
            .unwrap()
            .attributes()
            .iter()
            .map(|a| a.name())
            .collect();
        assert_eq!(names, vec!["href", "id", "lang"]);
    }

    #[test]
    fn style_text_is_not_body_encoded() {
        let style = Style::new("body { margin: 0 }");
        let markup = style.to_markup().unwrap();
        assert!(markup.closable);
        assert_eq!(markup.text.as_deref(), Some("body { margin: 0 }"));
    }

    #[test]
    fn empty_title_has_no_payload() {
        let markup = Title::default().to_markup().unwrap();
        assert_eq!(markup.text, None);
        assert!(markup.attributes.is_empty());
    }

    #[test]
    fn tooltip_renders_as_title_attribute() {
        let mut title = Title::new("Home");
        title.global_attrs_mut().tooltip = Some("tip".into());
        let builder = title.builder().unwrap();
        assert_eq!(builder.attribute_strings(), vec![r#"title="tip""#]);
        assert_eq!(builder.text().map(|t| t.text()), Some("Home"));
    }

    #[test]
    fn icon_sizes_accept_attr_values() {
        let link = Link::icon("/favicon.png", Some(AttrValue::new("32x32")));
        assert_eq!(
            link.builder().unwrap().attribute_strings(),
            vec![r#"rel="icon""#, r#"href="/favicon.png""#, r#"sizes="32x32""#]
        );
    }
}
