use chrono::{NaiveDate, NaiveDateTime};

/// A generic wrapper enum to hold any column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
    Boolean(bool),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Null,
}

// macro rules for implementing From trait for Value enum variants
macro_rules! impl_conv_for_value {
    ($variant:ident, $ty:ty, $name:ident) => {
        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::$variant(value)
            }
        }

        impl Value {
            /// Attempts to extract a reference to the inner value if it matches the variant.
            pub fn $name(&self) -> Option<&$ty> {
                if let Value::$variant(v) = self {
                    Some(v)
                } else {
                    None
                }
            }
        }
    };
}

impl_conv_for_value!(Integer, i32, as_integer);
impl_conv_for_value!(BigInt, i64, as_big_int);
impl_conv_for_value!(Real, f32, as_real);
impl_conv_for_value!(Double, f64, as_double);
impl_conv_for_value!(Boolean, bool, as_boolean);
impl_conv_for_value!(Text, String, as_text);
impl_conv_for_value!(Date, NaiveDate, as_date);
impl_conv_for_value!(Timestamp, NaiveDateTime, as_timestamp);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl Value {
    /// Checks if the value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::BigInt(_) => "BigInt",
            Value::Real(_) => "Real",
            Value::Double(_) => "Double",
            Value::Boolean(_) => "Boolean",
            Value::Text(_) => "Text",
            Value::Date(_) => "Date",
            Value::Timestamp(_) => "Timestamp",
            Value::Null => "Null",
        }
    }
}
