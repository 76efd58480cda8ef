//! Free-form named style properties.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use horizon_synth_render::{Color, Insets, Size};

/// A typed value stored under a string key in a style.
///
/// Properties carry theme settings that have no dedicated slot, such as
/// `"Button.textShiftOffset"` or `"Slider.thumbWidth"`.
#[derive(Clone)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Dimension(Size),
    Insets(Insets),
    Color(Color),
    /// A shared reference to an arbitrary object (an icon, a painter, ...).
    Object(Arc<dyn Any + Send + Sync>),
}

impl PropertyValue {
    /// Wrap any shareable object.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric value; integers widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_dimension(&self) -> Option<Size> {
        match self {
            Self::Dimension(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_insets(&self) -> Option<Insets> {
        match self {
            Self::Insets(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }

    /// Downcast an object reference.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Object(v) => v.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Dimension(a), Self::Dimension(b)) => a == b,
            (Self::Insets(a), Self::Insets(b)) => a == b,
            (Self::Color(a), Self::Color(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::String(v) => f.debug_tuple("String").field(v).finish(),
            Self::Dimension(v) => f.debug_tuple("Dimension").field(v).finish(),
            Self::Insets(v) => f.debug_tuple("Insets").field(v).finish(),
            Self::Color(v) => f.debug_tuple("Color").field(v).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Size> for PropertyValue {
    fn from(v: Size) -> Self {
        Self::Dimension(v)
    }
}

impl From<Insets> for PropertyValue {
    fn from(v: Insets) -> Self {
        Self::Insets(v)
    }
}

impl From<Color> for PropertyValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}
