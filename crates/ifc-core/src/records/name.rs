use super::{Record, read_u16_le, read_u32_le};
use crate::index::TextOffset;

/// Operator function name (8 bytes): spelling (4), operator code (2), padding (2).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperatorFunctionName {
    /// Operator spelling without the `operator` keyword, e.g. `+=`.
    pub encoded: TextOffset,
    pub operator: u16,
}

impl Record for OperatorFunctionName {
    const PARTITION: &'static str = "name.operator";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self {
            encoded: TextOffset(read_u32_le(bytes, 0)),
            operator: read_u16_le(bytes, 4),
        }
    }
}
