//! Walks a shape table and feeds a [`MarkupSink`].

use alloc::borrow::ToOwned;
use alloc::vec::Vec;
use core::fmt::Debug;

use tagshape_core::{AttrValue, FieldItem, FieldSet, FieldValue, Shaped, TagDescriptor};

use crate::builder::{Markup, TagBuilder, TextPayload};
use crate::error::{MapError, SerializeError};
use crate::tracing_macros::{debug, trace, trace_span};

/// Receives the attributes and text of one element.
///
/// The mapper calls `element_start` once, then `attribute` and `text` in
/// field walk order. [`TagBuilder`] is the in-crate implementation; other
/// sinks can write tags straight into a buffer.
pub trait MarkupSink {
    /// Sink-specific error type.
    type Error: Debug;

    /// Begin the element described by `tag`.
    fn element_start(&mut self, tag: TagDescriptor) -> Result<(), Self::Error>;

    /// Emit an attribute. `None` means a bare attribute with no value.
    fn attribute(&mut self, name: &'static str, value: Option<AttrValue>)
    -> Result<(), Self::Error>;

    /// Set the text payload. `None` clears any payload set earlier.
    fn text(&mut self, payload: Option<TextPayload>) -> Result<(), Self::Error>;
}

/// The tag descriptor of `E`, or [`MapError::MissingTagDescriptor`].
pub fn tag_of<E: Shaped>() -> Result<TagDescriptor, MapError> {
    E::SHAPE.tag.ok_or(MapError::MissingTagDescriptor {
        type_identifier: E::SHAPE.type_identifier,
    })
}

/// Map `element` onto `sink`.
///
/// Fields are walked in declaration order, with flattened field sets spliced
/// in where their flatten field sits. Absent attribute values are skipped; an
/// absent text value clears the payload.
pub fn serialize_element<E, S>(element: &E, sink: &mut S) -> Result<(), SerializeError<S::Error>>
where
    E: Shaped,
    S: MarkupSink,
{
    let type_identifier = E::SHAPE.type_identifier;
    trace_span!("serialize_element", element = type_identifier);

    let tag = tag_of::<E>().inspect_err(|_err| {
        debug!(element = type_identifier, "no tag descriptor");
    })?;

    let mut items = Vec::new();
    element.collect_fields(&mut items);
    validate(type_identifier, &items).inspect_err(|_err| {
        debug!(element = type_identifier, error = %_err, "invalid shape table");
    })?;

    sink.element_start(tag).map_err(SerializeError::Sink)?;
    for item in &items {
        write_field(item, sink).map_err(SerializeError::Sink)?;
    }
    Ok(())
}

fn write_field<S: MarkupSink>(item: &FieldItem<'_>, sink: &mut S) -> Result<(), S::Error> {
    if let Some(name) = item.attribute_name() {
        return match item.value {
            None | Some(FieldValue::Flag(false)) => {
                trace!(field = item.name, attribute = name, "attribute absent, skipped");
                Ok(())
            }
            Some(FieldValue::Flag(true)) => sink.attribute(name, None),
            Some(FieldValue::Str(s)) => sink.attribute(name, Some(AttrValue::new(s.to_owned()))),
            Some(FieldValue::Attr(value)) => sink.attribute(name, Some(value.clone())),
        };
    }

    if let Some(escape) = item.text_escape() {
        trace!(field = item.name, escape, present = item.value.is_some(), "text");
        let payload = item
            .value
            .map(|value| TextPayload::new(value.to_text(), escape));
        return sink.text(payload);
    }

    trace!(field = item.name, owner = item.owner, "unmarked field, not rendered");
    Ok(())
}

fn validate(type_identifier: &'static str, items: &[FieldItem<'_>]) -> Result<(), MapError> {
    let mut text_field: Option<&'static str> = None;
    for item in items {
        let is_text = item.text_escape().is_some();
        if is_text && item.attribute_name().is_some() {
            return Err(MapError::ConflictingMarkers {
                type_identifier: item.owner,
                field: item.name,
            });
        }
        if is_text {
            if let Some(first) = text_field {
                return Err(MapError::MultipleTextFields {
                    type_identifier,
                    first,
                    second: item.name,
                });
            }
            text_field = Some(item.name);
        }
    }
    Ok(())
}

/// Map `element` into a [`TagBuilder`].
///
/// ```rust
/// use tagshape::elements::Meta;
///
/// let builder = tagshape::builder(&Meta::charset("UTF-8")).unwrap();
/// assert_eq!(builder.tag_name(), "meta");
/// assert!(!builder.is_closable());
/// assert_eq!(builder.attribute_strings(), [r#"charset="UTF-8""#]);
/// ```
pub fn builder<E: Shaped>(element: &E) -> Result<TagBuilder, MapError> {
    let mut builder = TagBuilder::new(tag_of::<E>()?);
    serialize_element(element, &mut builder).map_err(|err| match err {
        SerializeError::Map(err) => err,
        SerializeError::Sink(never) => match never {},
    })?;
    Ok(builder)
}

/// Map `element` straight to encoded [`Markup`].
pub fn map_element_to_markup<E: Shaped>(element: &E) -> Result<Markup, MapError> {
    builder(element).map(|builder| builder.to_markup())
}

/// Method-call access to the mapper for every [`Shaped`] type.
pub trait Element: Shaped {
    /// See [`builder`](crate::builder).
    fn builder(&self) -> Result<TagBuilder, MapError> {
        builder(self)
    }

    /// See [`map_element_to_markup`].
    fn to_markup(&self) -> Result<Markup, MapError> {
        map_element_to_markup(self)
    }
}

impl<T: Shaped> Element for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use tagshape_core::{Field, FieldAttribute, FieldRead, Shape, fields};

    struct Labelled {
        label: Option<String>,
    }

    impl Shaped for Labelled {
        const SHAPE: &'static Shape<Self> = &Shape {
            type_identifier: "Labelled",
            tag: Some(TagDescriptor::paired("span")),
            fields: &[Field {
                name: "label",
                attributes: &[
                    FieldAttribute::Attribute("label"),
                    FieldAttribute::Text { escape: true },
                ],
                read: FieldRead::Value(|this| {
                    tagshape_core::ToFieldValue::to_field_value(&this.label)
                }),
            }],
        };
    }

    struct TwoBodies {
        a: Option<String>,
        b: Option<String>,
    }

    impl Shaped for TwoBodies {
        const SHAPE: &'static Shape<Self> = &Shape {
            type_identifier: "TwoBodies",
            tag: Some(TagDescriptor::paired("p")),
            fields: fields![a => text(escape = true), b => text(escape = false)],
        };
    }

    struct Untagged {
        id: Option<String>,
    }

    impl Shaped for Untagged {
        const SHAPE: &'static Shape<Self> = &Shape {
            type_identifier: "Untagged",
            tag: None,
            fields: fields![id => attribute("id")],
        };
    }

    /// Records events as strings, failing on a chosen attribute name.
    struct Recorder {
        events: Vec<String>,
        reject: Option<&'static str>,
    }

    impl MarkupSink for Recorder {
        type Error = &'static str;

        fn element_start(&mut self, tag: TagDescriptor) -> Result<(), Self::Error> {
            self.events.push(alloc::format!("start {}", tag.name));
            Ok(())
        }

        fn attribute(
            &mut self,
            name: &'static str,
            value: Option<AttrValue>,
        ) -> Result<(), Self::Error> {
            if self.reject == Some(name) {
                return Err(name);
            }
            let value = value.map(|v| v.render()).unwrap_or_default();
            self.events.push(alloc::format!("attr {name}={value}"));
            Ok(())
        }

        fn text(&mut self, payload: Option<TextPayload>) -> Result<(), Self::Error> {
            let text = payload.map(|p| String::from(p.text()));
            self.events.push(alloc::format!("text {text:?}"));
            Ok(())
        }
    }

    #[test]
    fn both_markers_fail_fast_regardless_of_value() {
        for label in [None, Some(String::from("x"))] {
            let err = builder(&Labelled { label }).unwrap_err();
            assert_eq!(
                err,
                MapError::ConflictingMarkers {
                    type_identifier: "Labelled",
                    field: "label",
                }
            );
        }
    }

    #[test]
    fn two_text_fields_are_rejected() {
        let err = builder(&TwoBodies { a: None, b: None }).unwrap_err();
        assert_eq!(
            err,
            MapError::MultipleTextFields {
                type_identifier: "TwoBodies",
                first: "a",
                second: "b",
            }
        );
    }

    #[test]
    fn missing_tag_descriptor_is_an_error() {
        let err = builder(&Untagged {
            id: Some("x".into()),
        })
        .unwrap_err();
        assert_eq!(
            err,
            MapError::MissingTagDescriptor {
                type_identifier: "Untagged"
            }
        );
        assert_eq!(
            tag_of::<Untagged>(),
            Err(MapError::MissingTagDescriptor {
                type_identifier: "Untagged"
            })
        );
    }

    #[test]
    fn sink_sees_events_in_walk_order() {
        let meta = crate::elements::Meta::named("viewport", "width=device-width");
        let mut recorder = Recorder {
            events: Vec::new(),
            reject: None,
        };
        serialize_element(&meta, &mut recorder).unwrap();
        assert_eq!(
            recorder.events,
            vec![
                "start meta",
                "attr name=viewport",
                "attr content=width=device-width",
            ]
        );
    }

    #[test]
    fn sink_errors_are_wrapped() {
        let meta = crate::elements::Meta::charset("UTF-8");
        let mut recorder = Recorder {
            events: Vec::new(),
            reject: Some("charset"),
        };
        let err = serialize_element(&meta, &mut recorder).unwrap_err();
        assert!(matches!(err, SerializeError::Sink("charset")));
    }

    #[test]
    fn absent_text_reaches_the_sink_as_none() {
        let title = crate::elements::Title::default();
        let mut recorder = Recorder {
            events: Vec::new(),
            reject: None,
        };
        serialize_element(&title, &mut recorder).unwrap();
        assert_eq!(recorder.events, vec!["start title", "text None"]);
    }
}
