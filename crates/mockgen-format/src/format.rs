//! Output formats: framing and per-row rendering.
//!
//! Each format is a strategy implementing [`OutputFormatter`]. The strategy
//! is picked once from the configuration with [`build_formatter`]; the output
//! loop never branches on the format itself.

use crate::ddl::{create_table_sql, COLUMN_LIST, TABLE_NAME};
use crate::encoding::EndpointEncoding;
use crate::error::FormatError;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use mockgen_core::{Configuration, OutputFormat, Row};

/// Renders rows as text and supplies the stream framing.
///
/// Implementations are pure: they return text and never write to a sink.
/// Every returned line is written by the caller followed by a newline.
pub trait OutputFormatter {
    /// Separator placed between the fields of a row.
    fn field_separator(&self) -> &'static str;

    /// Text placed before a row. `first` is true for sequence 0.
    fn row_prefix(&self, first: bool) -> &'static str;

    /// Text placed after a row.
    fn row_suffix(&self) -> &'static str;

    /// Endpoint encoding used for `low` and `high`.
    fn encoding(&self) -> EndpointEncoding;

    /// Lines emitted before the first row.
    fn prologue(&self) -> Vec<String>;

    /// Lines emitted after the last row.
    fn epilogue(&self) -> Vec<String>;

    /// Render one row as a single line.
    fn format_row(&self, row: &Row) -> Result<String, FormatError> {
        Ok(format!(
            "{}{}{}",
            self.row_prefix(row.sequence == 0),
            row_fields(row, self.encoding()).join(self.field_separator()),
            self.row_suffix()
        ))
    }
}

/// The four column values of a row: handle, low, high and quoted payload.
fn row_fields(row: &Row, encoding: EndpointEncoding) -> [String; 4] {
    [
        row.handle.to_string(),
        encoding.encode(row.low),
        encoding.encode(row.high),
        format!("'{}'", row.payload()),
    ]
}

/// Comma-separated values with no framing.
#[derive(Debug, Clone)]
pub struct CsvFormat {
    encoding: EndpointEncoding,
}

impl CsvFormat {
    pub fn new(encoding: EndpointEncoding) -> Self {
        Self { encoding }
    }
}

impl OutputFormatter for CsvFormat {
    fn field_separator(&self) -> &'static str {
        ","
    }

    fn row_prefix(&self, _first: bool) -> &'static str {
        ""
    }

    fn row_suffix(&self) -> &'static str {
        ""
    }

    fn encoding(&self) -> EndpointEncoding {
        self.encoding
    }

    fn prologue(&self) -> Vec<String> {
        Vec::new()
    }

    fn epilogue(&self) -> Vec<String> {
        Vec::new()
    }

    fn format_row(&self, row: &Row) -> Result<String, FormatError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .buffer_capacity(128)
            .from_writer(Vec::new());
        writer.write_record(row_fields(row, self.encoding))?;
        let mut line = String::from_utf8(writer.into_inner().map_err(|e| e.into_error())?)?;
        // The record terminator is added back by the caller.
        line.pop();
        Ok(line)
    }
}

/// A single multi-row `INSERT` statement.
#[derive(Debug, Clone)]
pub struct SqlInsertFormat {
    encoding: EndpointEncoding,
}

impl SqlInsertFormat {
    pub fn new(encoding: EndpointEncoding) -> Self {
        Self { encoding }
    }
}

impl OutputFormatter for SqlInsertFormat {
    fn field_separator(&self) -> &'static str {
        ","
    }

    fn row_prefix(&self, first: bool) -> &'static str {
        if first {
            "("
        } else {
            ",("
        }
    }

    fn row_suffix(&self) -> &'static str {
        ")"
    }

    fn encoding(&self) -> EndpointEncoding {
        self.encoding
    }

    fn prologue(&self) -> Vec<String> {
        vec![format!("INSERT INTO {TABLE_NAME} ({COLUMN_LIST}) VALUES")]
    }

    fn epilogue(&self) -> Vec<String> {
        vec![";".to_string()]
    }
}

/// A `COPY ... FROM stdin` block, optionally preceded by the table DDL.
#[derive(Debug, Clone)]
pub struct SqlCopyFormat {
    encoding: EndpointEncoding,
    /// Column type for the DDL; `None` skips `CREATE TABLE`
    create_table: Option<&'static str>,
}

impl SqlCopyFormat {
    pub fn new(encoding: EndpointEncoding) -> Self {
        Self {
            encoding,
            create_table: None,
        }
    }

    /// Emit `CREATE TABLE` with the given endpoint column type ahead of `COPY`.
    pub fn with_create_table(mut self, range_sql_type: &'static str) -> Self {
        self.create_table = Some(range_sql_type);
        self
    }
}

impl OutputFormatter for SqlCopyFormat {
    fn field_separator(&self) -> &'static str {
        "\t"
    }

    fn row_prefix(&self, _first: bool) -> &'static str {
        ""
    }

    fn row_suffix(&self) -> &'static str {
        ""
    }

    fn encoding(&self) -> EndpointEncoding {
        self.encoding
    }

    fn prologue(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if let Some(range_sql_type) = self.create_table {
            lines.push(create_table_sql(range_sql_type));
        }
        lines.push(format!("COPY {TABLE_NAME} ({COLUMN_LIST}) FROM stdin;"));
        lines
    }

    fn epilogue(&self) -> Vec<String> {
        vec!["\\.".to_string(), String::new()]
    }
}

/// Select the formatter for a configuration.
pub fn build_formatter(config: &Configuration) -> Box<dyn OutputFormatter> {
    let encoding = EndpointEncoding::from(config.range_type);
    match config.output_format {
        OutputFormat::Csv => Box::new(CsvFormat::new(encoding)),
        OutputFormat::SqlInsert => Box::new(SqlInsertFormat::new(encoding)),
        OutputFormat::SqlCopy => {
            let format = SqlCopyFormat::new(encoding);
            if config.create_table {
                Box::new(format.with_create_table(config.range_type.sql_type()))
            } else {
                Box::new(format)
            }
        }
    }
}
