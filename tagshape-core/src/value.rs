use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

/// A scalar carried by an attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    /// Boolean, rendered as `true`/`false`.
    Bool(bool),
    /// Signed integer.
    I64(i64),
    /// Unsigned integer.
    U64(u64),
    /// Floating-point number, rendered with `Display`.
    F64(f64),
    /// UTF-8 string.
    Str(Cow<'static, str>),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::I64(n) => write!(f, "{n}"),
            ScalarValue::U64(n) => write!(f, "{n}"),
            ScalarValue::F64(n) => write!(f, "{n}"),
            ScalarValue::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! scalar_from {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for ScalarValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    ScalarValue::$variant(value as $target)
                }
            }

            impl From<$ty> for AttrValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    AttrValue::new(value)
                }
            }
        )*
    };
}

scalar_from!(I64 as i64: i8, i16, i32, i64, isize);
scalar_from!(U64 as u64: u8, u16, u32, u64, usize);
scalar_from!(F64 as f64: f32, f64);

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        ScalarValue::Bool(value)
    }
}

impl From<&'static str> for ScalarValue {
    fn from(value: &'static str) -> Self {
        ScalarValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        ScalarValue::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for ScalarValue {
    fn from(value: Cow<'static, str>) -> Self {
        ScalarValue::Str(value)
    }
}

/// An attribute value: an optional scalar followed by an optional unit.
///
/// `AttrValue::new(12).with_unit("px")` renders as `12px`. An empty value
/// renders as the empty string. Rendering never escapes; that happens when the
/// attribute string is assembled.
///
/// `Clone` copies the scalar, so a clone never observes later changes made to
/// the original.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrValue {
    value: Option<ScalarValue>,
    unit: Option<Cow<'static, str>>,
}

impl AttrValue {
    /// A value with no scalar and no unit.
    pub const fn empty() -> Self {
        Self {
            value: None,
            unit: None,
        }
    }

    /// Wrap a scalar.
    pub fn new(value: impl Into<ScalarValue>) -> Self {
        Self {
            value: Some(value.into()),
            unit: None,
        }
    }

    /// Set the unit suffix (`px`, `em`, `%`...).
    pub fn with_unit(mut self, unit: impl Into<Cow<'static, str>>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// The wrapped scalar, if any.
    pub fn value(&self) -> Option<&ScalarValue> {
        self.value.as_ref()
    }

    /// The unit suffix, if any.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// True when there is no scalar to render.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Render as `value + unit`, or `""` when there is no scalar.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(value) = &self.value else {
            return Ok(());
        };
        write!(f, "{value}")?;
        if let Some(unit) = &self.unit {
            f.write_str(unit)?;
        }
        Ok(())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::new(value)
    }
}

impl From<&'static str> for AttrValue {
    fn from(value: &'static str) -> Self {
        AttrValue::new(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::new(value)
    }
}

impl From<ScalarValue> for AttrValue {
    fn from(value: ScalarValue) -> Self {
        AttrValue::new(value)
    }
}
