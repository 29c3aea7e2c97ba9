use crate::bean;
use crate::bean::Bean;
use crate::bean::Property;
use crate::bean::PropertyType;
use crate::database::column::BeanColumn;
use crate::database::column::Column;
use crate::database::column::DataType;
use crate::database::naming::Naming;
use crate::database::value::Value;
use crate::error::BeanTableError;
use crate::error::Result;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use tracing::trace;

/// Table name and ordered column list of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableMetaData {
    table_name: String,
    columns: Vec<Column>,
}

impl TableMetaData {
    pub fn new(table_name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Columns in discovery order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns the position of a column, matching the name exactly.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|column| column.name == name)
            .ok_or_else(|| BeanTableError::NoSuchColumn {
                table: self.table_name.to_owned(),
                column: name.to_owned(),
            })
    }
}

/// Read-only tabular view consumed by dataset frameworks.
pub trait Table {
    fn table_meta_data(&self) -> &TableMetaData;

    /// Number of rows in the table.
    fn row_count(&self) -> usize;

    /// Reads the cell at `row` in `column`.
    ///
    /// # Errors
    ///
    /// * [`BeanTableError::RowIndexOutOfBounds`] if `row` is not below [`Table::row_count`]
    /// * [`BeanTableError::NoSuchColumn`] if the table has no column named `column`
    /// * any failure raised while reading the cell value
    fn value(&self, row: usize, column: &str) -> Result<Value>;
}

/// Columns derived once from a bean type, shared by clones of a table.
struct BeanColumns<T> {
    columns: Vec<BeanColumn<T>>,
    by_name: HashMap<String, usize>,
    meta_data: TableMetaData,
}

/// A [`Table`] that treats zero or more beans as rows.
///
/// Beans are held by reference and read lazily, one cell at a time.
/// Use [`Builder`] to create instances.
pub struct BeanTable<T> {
    beans: Arc<[Arc<T>]>,
    columns: Arc<BeanColumns<T>>,
}

impl<T> BeanTable<T> {
    /// Returns the bean backing `row`.
    pub fn bean(&self, row: usize) -> Option<&T> {
        self.beans.get(row).map(|bean| bean.as_ref())
    }

    /// Iterates the beans in row order.
    pub fn beans(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.beans.iter().map(|bean| bean.as_ref())
    }

    fn column(&self, name: &str) -> Result<&BeanColumn<T>> {
        self.columns
            .by_name
            .get(name)
            .map(|index| &self.columns.columns[*index])
            .ok_or_else(|| BeanTableError::NoSuchColumn {
                table: self.columns.meta_data.table_name().to_owned(),
                column: name.to_owned(),
            })
    }
}

impl<T> Table for BeanTable<T> {
    fn table_meta_data(&self) -> &TableMetaData {
        &self.columns.meta_data
    }

    fn row_count(&self) -> usize {
        self.beans.len()
    }

    fn value(&self, row: usize, column: &str) -> Result<Value> {
        let bean = self.beans.get(row).ok_or(BeanTableError::RowIndexOutOfBounds {
            row,
            row_count: self.beans.len(),
        })?;
        self.column(column)?.value(bean)
    }
}

impl<T> Clone for BeanTable<T> {
    fn clone(&self) -> Self {
        Self {
            beans: Arc::clone(&self.beans),
            columns: Arc::clone(&self.columns),
        }
    }
}

impl<T> std::fmt::Debug for BeanTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanTable")
            .field("meta_data", &self.columns.meta_data)
            .field("columns", &self.columns.columns)
            .field("row_count", &self.beans.len())
            .finish()
    }
}

/// Chainable builder for [`BeanTable`].
///
/// Every call to [`Builder::build`] derives a fresh table from the builder's current state.
pub struct Builder<T> {
    table_name: String,
    beans: Vec<Arc<T>>,
    excluded_names: HashSet<String>,
    excluded_types: HashSet<PropertyType>,
    excluded_data_types: HashSet<DataType>,
    naming: Naming,
}

impl<T: Bean> Builder<T> {
    /// Creates a builder whose table is named after the bean type.
    pub fn new() -> Self {
        Self {
            table_name: T::type_name().to_owned(),
            beans: Vec::new(),
            excluded_names: HashSet::new(),
            excluded_types: HashSet::new(),
            excluded_data_types: HashSet::new(),
            naming: Naming::default(),
        }
    }

    /// Creates a builder with an explicit table name.
    pub fn with_table_name(table_name: impl Into<String>) -> Result<Self> {
        let table_name = table_name.into();
        if table_name.is_empty() {
            return Err(BeanTableError::invalid_argument("table_name", "must not be empty"));
        }
        Ok(Self {
            table_name,
            ..Self::new()
        })
    }

    /// Appends a bean.
    pub fn add(&mut self, bean: impl Into<Arc<T>>) -> &mut Self {
        self.beans.push(bean.into());
        self
    }

    /// Appends beans in iteration order.
    pub fn add_all<I>(&mut self, beans: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Arc<T>>,
    {
        self.beans.extend(beans.into_iter().map(Into::into));
        self
    }

    /// Appends beans from a nullable source.
    /// Fails without adding anything if any entry is `None`.
    pub fn add_all_opt<I, B>(&mut self, beans: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Option<B>>,
        B: Into<Arc<T>>,
    {
        let beans = beans
            .into_iter()
            .map(|bean| bean.map(Into::into))
            .collect::<Option<Vec<Arc<T>>>>()
            .ok_or_else(|| BeanTableError::invalid_argument("beans", "must not contain null"))?;
        self.beans.extend(beans);
        Ok(self)
    }

    /// Excludes columns by name. Names are matched after naming resolution.
    /// Fails without excluding anything if any name is empty.
    pub fn exclude_names<I, S>(&mut self, names: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.iter().any(|name| name.is_empty()) {
            return Err(BeanTableError::invalid_argument("names", "must not contain empty names"));
        }
        self.excluded_names.extend(names);
        Ok(self)
    }

    /// Excludes properties whose declared type is one of `types`.
    pub fn exclude_types<I>(&mut self, types: I) -> &mut Self
    where
        I: IntoIterator<Item = PropertyType>,
    {
        self.excluded_types.extend(types);
        self
    }

    /// Excludes properties declared as `V`.
    pub fn exclude_type<V: Property>(&mut self) -> &mut Self {
        self.exclude_types([PropertyType::of::<V>()])
    }

    /// Excludes properties whose semantic type is one of `data_types`.
    pub fn exclude_data_types<I>(&mut self, data_types: I) -> &mut Self
    where
        I: IntoIterator<Item = DataType>,
    {
        self.excluded_data_types.extend(data_types);
        self
    }

    /// Sets the naming convention for columns. Default: [`Naming::Raw`].
    pub fn naming(&mut self, naming: Naming) -> &mut Self {
        self.naming = naming;
        self
    }

    /// Builds a table over the beans added so far.
    ///
    /// # Errors
    ///
    /// Returns [`BeanTableError::Introspection`] if the bean registers a property twice
    /// or two properties resolve to the same column name.
    pub fn build(&self) -> Result<BeanTable<T>> {
        let type_name = T::type_name();
        let mut columns = Vec::<BeanColumn<T>>::new();
        let mut by_name = HashMap::<String, usize>::new();
        let mut properties = HashSet::<String>::new();
        for descriptor in bean::describe::<T>() {
            if !properties.insert(descriptor.name().to_owned()) {
                return Err(BeanTableError::Introspection {
                    type_name,
                    message: format!("property '{}' is registered twice", descriptor.name()),
                });
            }
            if !descriptor.is_readable() {
                trace!(property = descriptor.name(), "skip write-only property");
                continue;
            }
            if self.excluded_types.contains(&descriptor.property_type()) {
                trace!(property = descriptor.name(), "skip property of excluded type");
                continue;
            }
            let property = descriptor.name().to_owned();
            let Some(column) = BeanColumn::new(descriptor, self.naming, type_name) else {
                continue;
            };
            if self.excluded_data_types.contains(&column.data_type()) {
                trace!(property = property.as_str(), data_type = %column.data_type(), "skip property of excluded data type");
                continue;
            }
            if self.excluded_names.contains(column.name()) {
                trace!(property = property.as_str(), column = column.name(), "skip excluded column");
                continue;
            }
            if by_name.insert(column.name().to_owned(), columns.len()).is_some() {
                return Err(BeanTableError::Introspection {
                    type_name,
                    message: format!("property '{}' resolves to duplicate column '{}'", property, column.name()),
                });
            }
            trace!(
                property = property.as_str(),
                column = column.name(),
                property_type = column.property_type().name(),
                data_type = %column.data_type(),
                "bind column"
            );
            columns.push(column);
        }

        let meta_data = TableMetaData::new(
            self.table_name.to_owned(),
            columns.iter().map(BeanColumn::to_column).collect(),
        );
        debug!(
            table = %self.table_name,
            columns = columns.len(),
            rows = self.beans.len(),
            naming = %self.naming,
            "build bean table"
        );
        Ok(BeanTable {
            beans: self.beans.iter().cloned().collect(),
            columns: Arc::new(BeanColumns {
                columns,
                by_name,
                meta_data,
            }),
        })
    }
}

impl<T: Bean> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}
