use crate::bean::Getter;
use crate::bean::PropertyDescriptor;
use crate::bean::PropertyType;
use crate::database::naming::Naming;
use crate::database::value::Value;
use crate::error::AccessError;
use crate::error::BeanTableError;
use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::Utc;
use std::fmt::Display;
use std::str::FromStr;

/// Semantic type categories a column can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Date and time
    Timestamp,
    /// Time without date component
    Time,
    /// Date without time component
    Date,
    /// Boolean values (true/false)
    Boolean,
    /// Raw bytes
    Blob,
    /// Anything else, compared and displayed as-is
    Unknown,
}

impl DataType {
    /// Returns the string representation of the data type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataType::Timestamp => "TIMESTAMP",
            DataType::Time => "TIME",
            DataType::Date => "DATE",
            DataType::Boolean => "BOOLEAN",
            DataType::Blob => "BLOB",
            DataType::Unknown => "UNKNOWN",
        }
    }

    /// Resolves the category of a declared property type.
    /// Timestamps and times are checked before plain dates.
    pub fn resolve(property_type: &PropertyType) -> Self {
        if Self::is_timestamp(property_type) {
            DataType::Timestamp
        } else if property_type.is_base::<NaiveTime>() {
            DataType::Time
        } else if property_type.is_base::<NaiveDate>() {
            DataType::Date
        } else if property_type.is_base::<bool>() {
            DataType::Boolean
        } else if property_type.is_base::<Vec<u8>>() || property_type.is_base::<Box<[u8]>>() {
            DataType::Blob
        } else {
            DataType::Unknown
        }
    }

    fn is_timestamp(property_type: &PropertyType) -> bool {
        property_type.is_base::<NaiveDateTime>()
            || property_type.is_base::<DateTime<Utc>>()
            || property_type.is_base::<DateTime<Local>>()
            || property_type.is_base::<DateTime<FixedOffset>>()
    }
}

impl FromStr for DataType {
    type Err = BeanTableError;

    /// Parses a data type, ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_uppercase().as_str() {
            "DATETIME" | "TIMESTAMP" => Ok(Self::Timestamp),
            "TIME" => Ok(Self::Time),
            "DATE" => Ok(Self::Date),
            "BOOL" | "BOOLEAN" => Ok(Self::Boolean),
            "BLOB" | "BYTES" => Ok(Self::Blob),
            "UNKNOWN" => Ok(Self::Unknown),
            _ => Err(BeanTableError::invalid_argument(
                "data_type",
                &format!("'{}' is not a data type", name),
            )),
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Column metadata exposed to table consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Column name after naming resolution
    pub name: String,
    /// Semantic type category
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A bean property bound as a table column.
pub(crate) struct BeanColumn<T> {
    name: String,
    data_type: DataType,
    property_type: PropertyType,
    type_name: &'static str,
    getter: Getter<T>,
}

impl<T> BeanColumn<T> {
    /// Binds a readable property descriptor as a column.
    /// Returns None if the property has no read accessor.
    pub(crate) fn new(descriptor: PropertyDescriptor<T>, naming: Naming, type_name: &'static str) -> Option<Self> {
        let name = naming.resolve(descriptor.name());
        let property_type = descriptor.property_type();
        let getter = descriptor.into_getter()?;
        Some(Self {
            name,
            data_type: DataType::resolve(&property_type),
            property_type,
            type_name,
            getter,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn data_type(&self) -> DataType {
        self.data_type
    }

    pub(crate) fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Reads this column from a bean.
    pub(crate) fn value(&self, bean: &T) -> Result<Value, BeanTableError> {
        (self.getter)(bean).map_err(|error| match error {
            AccessError::Denied => BeanTableError::DataAccess {
                type_name: self.type_name,
                property: self.name.to_owned(),
                source: None,
            },
            AccessError::Bean(error) => BeanTableError::Bean(error),
            AccessError::Invocation(error) => BeanTableError::DataAccess {
                type_name: self.type_name,
                property: self.name.to_owned(),
                source: Some(error.into()),
            },
        })
    }

    pub(crate) fn to_column(&self) -> Column {
        Column::new(self.name.to_owned(), self.data_type)
    }
}

impl<T> std::fmt::Debug for BeanColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanColumn")
            .field("name", &self.name)
            .field("data_type", &self.data_type)
            .field("property_type", &self.property_type.name())
            .finish()
    }
}
