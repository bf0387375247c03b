use alloc::string::String;

use tagshape_core::{Shape, Shaped, fields};

/// Attributes shared by every element.
///
/// Has no tag of its own: it is only ever mapped as part of an element that
/// embeds it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobalAttrs {
    /// Unique identifier for the element.
    pub id: Option<String>,
    /// CSS class names.
    pub class: Option<String>,
    /// Inline CSS styles.
    pub style: Option<String>,
    /// Advisory title. Named `tooltip` to stay clear of the `<title>` element;
    /// rendered as the `title` attribute.
    pub tooltip: Option<String>,
    /// Language of the element's content.
    pub lang: Option<String>,
    /// Text directionality (`ltr`, `rtl`, `auto`).
    pub dir: Option<String>,
}

impl Shaped for GlobalAttrs {
    const SHAPE: &'static Shape<Self> = &Shape {
        type_identifier: "GlobalAttrs",
        tag: None,
        fields: fields![
            id => attribute("id"),
            class => attribute("class"),
            style => attribute("style"),
            tooltip => attribute("title"),
            lang => attribute("lang"),
            dir => attribute("dir"),
        ],
    };
}

/// Access to an element's embedded [`GlobalAttrs`], with builder-style setters.
pub trait HasGlobalAttrs: Sized {
    /// The embedded global attributes.
    fn global_attrs(&self) -> &GlobalAttrs;

    /// The embedded global attributes, mutably.
    fn global_attrs_mut(&mut self) -> &mut GlobalAttrs;

    /// Set `id`.
    fn with_id(mut self, id: impl Into<String>) -> Self {
        self.global_attrs_mut().id = Some(id.into());
        self
    }

    /// Set `class`.
    fn with_class(mut self, class: impl Into<String>) -> Self {
        self.global_attrs_mut().class = Some(class.into());
        self
    }

    /// Set `style`.
    fn with_style(mut self, style: impl Into<String>) -> Self {
        self.global_attrs_mut().style = Some(style.into());
        self
    }

    /// Set `lang`.
    fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.global_attrs_mut().lang = Some(lang.into());
        self
    }
}

macro_rules! impl_has_global_attrs {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::elements::HasGlobalAttrs for $ty {
                fn global_attrs(&self) -> &$crate::elements::GlobalAttrs {
                    &self.attrs
                }

                fn global_attrs_mut(&mut self) -> &mut $crate::elements::GlobalAttrs {
                    &mut self.attrs
                }
            }
        )*
    };
}

pub(super) use impl_has_global_attrs;
