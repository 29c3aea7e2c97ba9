use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use std::fmt::Display;

/// Owned value of a single table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Absent value (`Option::None`)
    Null,
    Boolean(bool),
    TinyInt(i8),
    SmallInt(i16),
    Int(i32),
    BigInt(i64),
    HugeInt(i128),
    UTinyInt(u8),
    USmallInt(u16),
    UInt(u32),
    UBigInt(u64),
    Float(f32),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    /// Date without time component
    Date(NaiveDate),
    /// Time without date component
    Time(NaiveTime),
    /// Date and time, normalized to UTC when the source carried an offset
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Returns true if this value is [`Value::Null`].
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::TinyInt(value) => write!(f, "{}", value),
            Value::SmallInt(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::BigInt(value) => write!(f, "{}", value),
            Value::HugeInt(value) => write!(f, "{}", value),
            Value::UTinyInt(value) => write!(f, "{}", value),
            Value::USmallInt(value) => write!(f, "{}", value),
            Value::UInt(value) => write!(f, "{}", value),
            Value::UBigInt(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Double(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "{}", value),
            Value::Blob(bytes) => {
                write!(f, "\\x")?;
                for byte in bytes {
                    write!(f, "{:02X}", byte)?;
                }
                Ok(())
            }
            Value::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Value::Time(time) => write!(f, "{}", time.format("%H:%M:%S%.f")),
            Value::Timestamp(datetime) => write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S%.f")),
        }
    }
}
