use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use tagshape::elements::{GlobalAttrs, Title};
use tagshape::{Element, builder};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Collects the `message` of every event.
#[derive(Clone, Default)]
struct Messages(Arc<Mutex<Vec<String>>>);

impl Messages {
    fn take(&self) -> Vec<String> {
        core::mem::take(&mut *self.0.lock().unwrap())
    }
}

struct MessageVisitor<'a>(&'a mut Option<String>);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for Messages {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut message = None;
        event.record(&mut MessageVisitor(&mut message));
        if let Some(message) = message {
            self.0.lock().unwrap().push(message);
        }
    }
}

fn capture(f: impl FnOnce()) -> Vec<String> {
    let messages = Messages::default();
    let subscriber = tracing_subscriber::registry().with(messages.clone());
    tracing::subscriber::with_default(subscriber, f);
    messages.take()
}

#[test]
fn mapping_traces_each_field_decision() {
    let messages = capture(|| {
        Title::new("Home").builder().unwrap();
    });
    assert_eq!(messages.len(), 7);
    assert_eq!(messages[0], "text");
    assert!(
        messages[1..]
            .iter()
            .all(|m| m == "attribute absent, skipped")
    );
}

#[test]
fn unmappable_shapes_are_reported() {
    let messages = capture(|| {
        builder(&GlobalAttrs::default()).unwrap_err();
    });
    assert!(messages.is_empty(), "builder fails before walking: {messages:?}");

    let messages = capture(|| {
        let mut sink = tagshape::TagBuilder::new(tagshape::TagDescriptor::paired("span"));
        tagshape::serialize_element(&GlobalAttrs::default(), &mut sink).unwrap_err();
    });
    assert_eq!(messages, ["no tag descriptor"]);
}
