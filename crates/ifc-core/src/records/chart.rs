use super::{Record, read_sequence};
use crate::index::Sequence;

/// Single template parameter list: a run of `decl.parameter` entries (8 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnilevelChart(pub Sequence);

impl Record for UnilevelChart {
    const PARTITION: &'static str = "chart.unilevel";
    const SIZE: usize = 8;

    fn decode(bytes: &[u8]) -> Self {
        Self(read_sequence(bytes, 0))
    }
}
