//! # Table Projection Module
//!
//! Projects beans as a read-only table: naming conventions, column binding,
//! semantic types, cell values and the table itself with its builder.
pub mod column;
pub mod naming;
pub mod table;
pub mod value;
