use thiserror::Error;

/// Main error type for the bean table crate.
/// Covers caller misuse of the builder and the table, and failures raised while reading a cell.
#[derive(Error, Debug)]
pub enum BeanTableError {
    /// A builder input or constructor argument was absent or unusable
    #[error("Invalid argument '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    /// The bean type describes its properties inconsistently
    #[error("Invalid bean '{type_name}': {message}")]
    Introspection { type_name: &'static str, message: String },

    /// A property could not be read from a bean
    #[error("failed to read {type_name}.{property}")]
    DataAccess {
        type_name: &'static str,
        property: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Row index outside `[0, row_count)`
    #[error("Row index {row} out of bounds, table has {row_count} rows")]
    RowIndexOutOfBounds { row: usize, row_count: usize },

    /// Column name unknown to the table
    #[error("Column '{column}' not found in table '{table}'")]
    NoSuchColumn { table: String, column: String },

    /// Failure raised by the bean's own accessor logic, passed through as raised
    #[error(transparent)]
    Bean(anyhow::Error),
}

impl BeanTableError {
    pub(crate) fn invalid_argument(name: &str, message: &str) -> Self {
        Self::InvalidArgument {
            name: name.to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Failure reported by a property accessor.
///
/// The variant decides how the table surfaces it: `Denied` and `Invocation` are
/// wrapped into [`BeanTableError::DataAccess`], `Bean` reaches the caller unchanged.
#[derive(Error, Debug)]
pub enum AccessError {
    /// The property is not readable for this bean
    #[error("access denied")]
    Denied,

    /// Error signaled by the bean's own logic
    #[error(transparent)]
    Bean(anyhow::Error),

    /// Any other failure while invoking the accessor
    #[error("{0}")]
    Invocation(#[source] anyhow::Error),
}

impl AccessError {
    /// Wraps an error raised by the bean's own logic.
    pub fn bean<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Bean(error.into())
    }

    /// Wraps a failure of the accessor plumbing itself.
    pub fn invocation<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Invocation(error.into())
    }
}

pub type Result<T, E = BeanTableError> = std::result::Result<T, E>;
