//! The markup-building helper produced by the mapper.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;

use tagshape_core::{AttrValue, TagDescriptor};

use crate::escape::{encode_attribute, encode_body};
use crate::serializer::MarkupSink;

/// One attribute of a tag.
///
/// An attribute without a value object renders as its bare name.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    name: &'static str,
    value: Option<AttrValue>,
}

impl Attribute {
    /// An attribute rendered as `name="value"`.
    pub fn new(name: &'static str, value: impl Into<AttrValue>) -> Self {
        Self {
            name,
            value: Some(value.into()),
        }
    }

    /// An attribute rendered as just `name`.
    pub const fn bare(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// The attribute name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw value, if any.
    pub fn value(&self) -> Option<&AttrValue> {
        self.value.as_ref()
    }

    /// The value rendered and attribute-encoded, if any.
    pub fn encoded_value(&self) -> Option<String> {
        self.value
            .as_ref()
            .map(|value| encode_attribute(value.render().as_str()))
    }

    /// `name` or `name="encodedValue"`.
    pub fn render(&self) -> String {
        alloc::string::ToString::to_string(self)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encoded_value() {
            Some(value) => write!(f, "{}=\"{value}\"", self.name),
            None => f.write_str(self.name),
        }
    }
}

/// The text content of a tag, with its escape flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextPayload {
    text: String,
    escape: bool,
}

impl TextPayload {
    /// Text that will be body-encoded.
    pub fn escaped(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// Text that is emitted as is (scripts, stylesheets).
    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// Text with an explicit escape flag.
    pub fn new(text: impl Into<String>, escape: bool) -> Self {
        Self {
            text: text.into(),
            escape,
        }
    }

    /// The unencoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether [`encoded`](Self::encoded) applies body encoding.
    pub fn escape(&self) -> bool {
        self.escape
    }

    /// Body-encoded text when `escape` is set, the raw text otherwise.
    pub fn encoded(&self) -> String {
        if self.escape {
            encode_body(self.text.as_str())
        } else {
            self.text.clone()
        }
    }
}

/// Structured, already-encoded output of the mapper.
///
/// Turning this into a literal `<tag ...>text</tag>` string is left to the
/// caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markup {
    /// Tag name.
    pub tag_name: &'static str,
    /// Whether the tag takes a closing tag.
    pub closable: bool,
    /// Attributes in walk order. `None` marks a bare attribute.
    pub attributes: Vec<(&'static str, Option<String>)>,
    /// Text content, encoded according to its escape flag.
    pub text: Option<String>,
}

/// Collects a tag's attributes and text.
///
/// Produced by [`builder`](crate::builder); can also be filled by hand.
/// Attributes keep insertion order and are never de-duplicated.
#[derive(Clone, Debug, PartialEq)]
pub struct TagBuilder {
    tag: TagDescriptor,
    attributes: Vec<Attribute>,
    text: Option<TextPayload>,
}

impl TagBuilder {
    /// An empty builder for `tag`.
    pub fn new(tag: TagDescriptor) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            text: None,
        }
    }

    /// The tag descriptor.
    pub fn tag(&self) -> TagDescriptor {
        self.tag
    }

    /// The tag name.
    pub fn tag_name(&self) -> &'static str {
        self.tag.name
    }

    /// Whether the tag takes a closing tag.
    pub fn is_closable(&self) -> bool {
        self.tag.closable
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The text payload, if any.
    pub fn text(&self) -> Option<&TextPayload> {
        self.text.as_ref()
    }

    /// Append an attribute.
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// Replace the text payload; `None` clears it.
    pub fn set_text(&mut self, text: Option<TextPayload>) {
        self.text = text;
    }

    /// Builder-style [`push_attribute`](Self::push_attribute) with a value.
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<AttrValue>) -> Self {
        self.push_attribute(Attribute::new(name, value));
        self
    }

    /// Builder-style [`push_attribute`](Self::push_attribute) for a bare name.
    pub fn with_flag(mut self, name: &'static str) -> Self {
        self.push_attribute(Attribute::bare(name));
        self
    }

    /// Builder-style [`set_text`](Self::set_text).
    pub fn with_text(mut self, text: TextPayload) -> Self {
        self.text = Some(text);
        self
    }

    /// Every attribute rendered on its own, `name` or `name="value"`.
    pub fn attribute_strings(&self) -> Vec<String> {
        self.attributes.iter().map(Attribute::render).collect()
    }

    /// The text payload encoded according to its escape flag.
    pub fn encoded_text(&self) -> Option<String> {
        self.text.as_ref().map(TextPayload::encoded)
    }

    /// Encode everything into a [`Markup`].
    pub fn to_markup(&self) -> Markup {
        Markup {
            tag_name: self.tag.name,
            closable: self.tag.closable,
            attributes: self
                .attributes
                .iter()
                .map(|attr| (attr.name, attr.encoded_value()))
                .collect(),
            text: self.encoded_text(),
        }
    }
}

impl MarkupSink for TagBuilder {
    type Error = Infallible;

    fn element_start(&mut self, tag: TagDescriptor) -> Result<(), Self::Error> {
        self.tag = tag;
        self.attributes.clear();
        self.text = None;
        Ok(())
    }

    fn attribute(
        &mut self,
        name: &'static str,
        value: Option<AttrValue>,
    ) -> Result<(), Self::Error> {
        self.attributes.push(Attribute { name, value });
        Ok(())
    }

    fn text(&mut self, payload: Option<TextPayload>) -> Result<(), Self::Error> {
        self.text = payload;
        Ok(())
    }
}
