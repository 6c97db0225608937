//! Endpoint encodings for `range_low`/`range_high`.

use mockgen_core::RangeType;

/// Textual encoding of a range endpoint.
///
/// The encoding only changes how the integer is spelled; the generated value
/// is the same for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointEncoding {
    /// Bare integer, e.g. `1700000000`
    Integer,
    /// Epoch seconds passed to `to_timestamp`, e.g. `to_timestamp(1700000000)`
    Timestamp,
}

impl EndpointEncoding {
    /// Render a single endpoint.
    pub fn encode(&self, value: i64) -> String {
        match self {
            EndpointEncoding::Integer => value.to_string(),
            EndpointEncoding::Timestamp => format!("to_timestamp({value})"),
        }
    }
}

impl From<RangeType> for EndpointEncoding {
    fn from(range_type: RangeType) -> Self {
        match range_type {
            RangeType::Integer => EndpointEncoding::Integer,
            RangeType::Timestamp => EndpointEncoding::Timestamp,
        }
    }
}
