//! Output formats for range-mockgen.
//!
//! Rows are rendered as one of three text formats targeting the table
//!
//! ```sql
//! CREATE TABLE mock (
//!   handle INT NOT NULL
//!   ,range_low <type> NOT NULL
//!   ,range_high <type> NOT NULL
//!   ,stuff TEXT
//! );
//! ```
//!
//! - [`CsvFormat`] - `handle,low,high,'seq:width'`
//! - [`SqlInsertFormat`] - one `INSERT INTO mock ... VALUES` statement
//! - [`SqlCopyFormat`] - a `COPY mock ... FROM stdin;` block, optionally with DDL
//!
//! Endpoints are spelled by an [`EndpointEncoding`], either as bare integers
//! or wrapped in `to_timestamp(...)`.

pub mod ddl;
pub mod encoding;
pub mod error;
pub mod format;

// Re-exports for convenience
pub use ddl::{create_table_sql, COLUMN_LIST, TABLE_NAME};
pub use encoding::EndpointEncoding;
pub use error::FormatError;
pub use format::{build_formatter, CsvFormat, OutputFormatter, SqlCopyFormat, SqlInsertFormat};
