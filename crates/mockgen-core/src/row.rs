//! Generated row representation.

/// A single generated row.
///
/// Rows are produced, formatted and dropped one at a time; nothing holds on
/// to them beyond a single iteration of the output loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Partition key in `1..=handle_count`
    pub handle: i64,
    /// Lower endpoint of the range
    pub low: i64,
    /// Upper endpoint of the range
    pub high: i64,
    /// 0-based position in the output stream
    pub sequence: u64,
    /// Sampled width after flooring at zero, before clamping
    pub width: i64,
}

impl Row {
    /// Traceability payload stored in the `stuff` column, e.g. `3:12`.
    pub fn payload(&self) -> String {
        format!("{}:{}", self.sequence, self.width)
    }
}
