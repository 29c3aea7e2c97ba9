//! # Bean Table
//!
//! Treats an in-memory collection of beans (structured records) as a read-only table of
//! named, typed columns, the shape dataset frameworks consume for test fixtures.
//!
//! ## Features
//!
//! - **Explicit introspection**: each bean type registers its readable properties once
//!   through [`Bean::describe`], in column order
//! - **Naming conventions**: property names map to column names unchanged, as snake case
//!   or as screaming snake case
//! - **Semantic types**: every column carries one of `TIMESTAMP`, `TIME`, `DATE`, `BOOLEAN`,
//!   `BLOB` or `UNKNOWN`, resolved from the declared property type
//! - **Exclusions**: drop columns by resolved name, by declared type or by semantic type
//! - **Lazy reads**: cell values are read from the bean only when requested
//! - **Failure passthrough**: errors raised by a bean's own getter reach the caller unchanged
//!
//! ## Example
//!
//! ```
//! use bean_table::{Bean, Builder, Naming, Properties, Table, Value};
//!
//! struct Cat {
//!     cat_leg: i32,
//! }
//!
//! impl Bean for Cat {
//!     fn describe(properties: &mut Properties<Self>) {
//!         properties.property("catLeg", |cat: &Self| cat.cat_leg);
//!     }
//! }
//!
//! let table = Builder::<Cat>::new()
//!     .naming(Naming::CamelToSnake)
//!     .add(Cat { cat_leg: 4 })
//!     .build()
//!     .unwrap();
//! assert_eq!(table.table_meta_data().table_name(), "Cat");
//! assert_eq!(table.value(0, "cat_leg").unwrap(), Value::Int(4));
//! ```
mod bean;
mod database;
mod error;

pub use crate::bean::Bean;
pub use crate::bean::Properties;
pub use crate::bean::Property;
pub use crate::bean::PropertyDescriptor;
pub use crate::bean::PropertyType;
pub use crate::database::column::Column;
pub use crate::database::column::DataType;
pub use crate::database::naming::Naming;
pub use crate::database::table::BeanTable;
pub use crate::database::table::Builder;
pub use crate::database::table::Table;
pub use crate::database::table::TableMetaData;
pub use crate::database::value::Value;
pub use crate::error::AccessError;
pub use crate::error::BeanTableError;
pub use crate::error::Result;
