//! Populator driving row generation into an output sink.

use crate::error::PopulatorError;
use mockgen_core::Configuration;
use mockgen_format::{build_formatter, OutputFormatter};
use mockgen_generator::{RandomSource, RowGenerator};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for sink writes.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// How often progress is logged, in rows.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written.
    pub rows_written: u64,
    /// Bytes written to the sink, framing included.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating rows.
    pub generation_duration: Duration,
    /// Time spent formatting and writing.
    pub write_duration: Duration,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.bytes_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that writes one complete generation run to a sink.
///
/// The format is chosen once at construction; a populator is consumed by
/// the run so sequence numbers always start at zero.
pub struct Populator {
    generator: RowGenerator,
    formatter: Box<dyn OutputFormatter>,
}

impl Populator {
    /// Create a populator whose random source follows `config.seed`.
    pub fn new(config: Configuration) -> Result<Self, PopulatorError> {
        let source = RandomSource::new(config.seed);
        Self::with_source(config, source)
    }

    /// Create a populator with an explicit random source.
    pub fn with_source(
        config: Configuration,
        source: RandomSource,
    ) -> Result<Self, PopulatorError> {
        let config = config.validate()?;
        let formatter = build_formatter(&config);
        let generator = RowGenerator::new(config, source)?;
        Ok(Self {
            generator,
            formatter,
        })
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &Configuration {
        self.generator.config()
    }

    /// Write the prologue, `row_count` rows and the epilogue to `sink`.
    ///
    /// The first failed write aborts the run; nothing is retried.
    pub fn populate<W: Write>(mut self, sink: W) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let config = self.generator.config().clone();

        info!(
            "Generating {} rows as {} ({} handles, range [{}, {}], seed {:?})",
            config.row_count,
            config.output_format,
            config.handle_count,
            config.lowest,
            config.highest,
            config.seed
        );

        let mut writer =
            CountingWriter::new(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, sink));

        let mut generation_time = Duration::ZERO;
        let mut write_time = Duration::ZERO;

        if config.verbose {
            let banner = format!(
                "Generating {} rows of mock data with {} handles",
                config.row_count, config.handle_count
            );
            if config.output_format.is_sql() {
                writer.write_line(&format!("-- {banner}"))?;
            } else {
                info!("{}", banner);
            }
        }

        for line in self.formatter.prologue() {
            writer.write_line(&line)?;
        }

        for _ in 0..config.row_count {
            let gen_start = Instant::now();
            let row = self.generator.next_row()?;
            generation_time += gen_start.elapsed();

            let write_start = Instant::now();
            let line = self.formatter.format_row(&row)?;
            writer.write_line(&line)?;
            write_time += write_start.elapsed();

            metrics.rows_written += 1;

            if metrics.rows_written % PROGRESS_INTERVAL == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        for line in self.formatter.epilogue() {
            writer.write_line(&line)?;
        }

        metrics.bytes_written = writer.finish()?;
        metrics.total_duration = start_time.elapsed();
        metrics.generation_duration = generation_time;
        metrics.write_duration = write_time;

        info!(
            "Generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.bytes_written,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }

    /// Create (or truncate) `output_path` and populate it.
    pub fn populate_file<P: AsRef<Path>>(
        self,
        output_path: P,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let output_path = output_path.as_ref();
        info!("Writing to '{}'", output_path.display());
        let file = File::create(output_path).map_err(|source| PopulatorError::OutputOpen {
            path: output_path.to_path_buf(),
            source,
        })?;
        self.populate(file)
    }
}

/// Newline-terminating writer that counts bytes.
struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.bytes += line.len() as u64 + 1;
        Ok(())
    }

    /// Flush buffered output and return the byte count.
    fn finish(mut self) -> std::io::Result<u64> {
        self.inner.flush()?;
        Ok(self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockgen_core::{OutputFormat, RangeType};
    use std::io;
    use tempfile::TempDir;

    fn test_config(output_format: OutputFormat) -> Configuration {
        Configuration {
            row_count: 3,
            handle_count: 5,
            lowest: 0,
            highest: 100,
            mean_width: 10.0,
            width_stddev: 0.0,
            seed: Some(42),
            output_format,
            ..Default::default()
        }
    }

    fn render(config: Configuration) -> String {
        let mut out = Vec::new();
        Populator::new(config).unwrap().populate(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    /// Sink that fails once `limit` bytes have been accepted.
    struct FailingSink {
        accepted: usize,
        limit: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
            }
            self.accepted += buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_metrics() {
        let metrics = PopulateMetrics {
            rows_written: 1000,
            bytes_written: 100000,
            total_duration: Duration::from_secs(10),
            generation_duration: Duration::from_secs(2),
            write_duration: Duration::from_secs(8),
        };

        assert_eq!(metrics.rows_per_second(), 100.0);
        assert_eq!(metrics.bytes_per_second(), 10000.0);
        assert_eq!(PopulateMetrics::default().rows_per_second(), 0.0);
    }

    #[test]
    fn test_populate_csv() {
        let output = render(test_config(OutputFormat::Csv));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 4);
            let handle: i64 = fields[0].parse().unwrap();
            let low: i64 = fields[1].parse().unwrap();
            let high: i64 = fields[2].parse().unwrap();
            assert!((1..=5).contains(&handle));
            assert!(0 <= low && low <= high && high <= 100);
            if low > 0 && high < 100 {
                assert_eq!(high - low, 10);
            }
            assert_eq!(fields[3], format!("'{i}:10'"));
        }
    }

    #[test]
    fn test_populate_sql_insert() {
        let output = render(test_config(OutputFormat::SqlInsert));
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "INSERT INTO mock (handle, range_low, range_high, stuff) VALUES"
        );
        assert!(lines[1].starts_with('(') && lines[1].ends_with(",'0:10')"));
        assert!(lines[2].starts_with(",(") && lines[2].ends_with(",'1:10')"));
        assert!(lines[3].starts_with(",(") && lines[3].ends_with(",'2:10')"));
        assert_eq!(lines[4], ";");
    }

    #[test]
    fn test_populate_sql_copy() {
        let mut config = test_config(OutputFormat::SqlCopy);
        config.create_table = true;
        let output = render(config);

        assert!(output.starts_with("CREATE TABLE mock (\n"));
        assert!(
            output.contains("\nCOPY mock (handle, range_low, range_high, stuff) FROM stdin;\n")
        );
        assert!(output.ends_with("\n\\.\n\n"));

        let rows: Vec<&str> = output.lines().filter(|l| l.contains('\t')).collect();
        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.split('\t').count(), 4);
        }
    }

    #[test]
    fn test_populate_sql_copy_without_create_table() {
        let output = render(test_config(OutputFormat::SqlCopy));
        assert!(output.starts_with("COPY mock"));
        assert!(!output.contains("CREATE TABLE"));
    }

    #[test]
    fn test_timestamp_endpoints() {
        let mut config = test_config(OutputFormat::Csv);
        config.range_type = RangeType::Timestamp;
        let output = render(config);

        for line in output.lines() {
            let fields: Vec<&str> = line.split(',').collect();
            assert!(fields[1].starts_with("to_timestamp(") && fields[1].ends_with(')'));
            assert!(fields[2].starts_with("to_timestamp(") && fields[2].ends_with(')'));
        }
    }

    #[test]
    fn test_verbose_banner() {
        let mut config = test_config(OutputFormat::SqlInsert);
        config.verbose = true;
        let output = render(config);
        assert!(output
            .starts_with("-- Generating 3 rows of mock data with 5 handles\nINSERT INTO"));

        let mut config = test_config(OutputFormat::Csv);
        config.verbose = true;
        let output = render(config);
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_zero_rows() {
        let mut config = test_config(OutputFormat::SqlInsert);
        config.row_count = 0;
        let output = render(config);
        assert_eq!(
            output,
            "INSERT INTO mock (handle, range_low, range_high, stuff) VALUES\n;\n"
        );

        let mut config = test_config(OutputFormat::Csv);
        config.row_count = 0;
        assert_eq!(render(config), "");
    }

    #[test]
    fn test_bytes_written_matches_output() {
        let mut out = Vec::new();
        let metrics = Populator::new(test_config(OutputFormat::SqlCopy))
            .unwrap()
            .populate(&mut out)
            .unwrap();

        assert_eq!(metrics.rows_written, 3);
        assert_eq!(metrics.bytes_written, out.len() as u64);
    }

    #[test]
    fn test_deterministic_generation() {
        let output1 = render(test_config(OutputFormat::Csv));
        let output2 = render(test_config(OutputFormat::Csv));
        assert_eq!(output1, output2);
    }

    #[test]
    fn test_invalid_configuration_writes_nothing() {
        let mut config = test_config(OutputFormat::Csv);
        config.highest = config.lowest;

        let result = Populator::new(config);
        assert!(matches!(result, Err(PopulatorError::Config(_))));
    }

    #[test]
    fn test_sink_write_failure() {
        let mut config = test_config(OutputFormat::Csv);
        config.row_count = 100_000;
        let sink = FailingSink {
            accepted: 0,
            limit: 1024,
        };

        let result = Populator::new(config).unwrap().populate(sink);
        assert!(matches!(result, Err(PopulatorError::SinkWriteFailure(_))));
    }

    #[test]
    fn test_populate_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("mock.csv");

        let metrics = Populator::new(test_config(OutputFormat::Csv))
            .unwrap()
            .populate_file(&output_path)
            .unwrap();

        assert_eq!(metrics.rows_written, 3);
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content, render(test_config(OutputFormat::Csv)));
        assert_eq!(metrics.bytes_written, content.len() as u64);
    }

    #[test]
    fn test_populate_file_open_failure() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("mock.csv");

        let result = Populator::new(test_config(OutputFormat::Csv))
            .unwrap()
            .populate_file(&output_path);

        match result {
            Err(PopulatorError::OutputOpen { path, .. }) => assert_eq!(path, output_path),
            other => panic!("expected OutputOpen, got {other:?}"),
        }
        assert!(!output_path.exists());
    }
}
