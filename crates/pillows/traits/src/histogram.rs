use pillows_types::{AttributeSet, Axis};
use serde::Serialize;

const MAX_CATEGORIES: usize = 8;

/// Per-axis category counts over a batch of attribute sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AxisHistogram {
    counts: [[u64; MAX_CATEGORIES]; 7],
    total: u64,
}

impl AxisHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, traits: &AttributeSet) {
        for axis in Axis::ALL {
            self.counts[axis.lane()][traits.code(axis) as usize] += 1;
        }
        self.total += 1;
    }

    /// Number of recorded sets.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, axis: Axis, code: u8) -> u64 {
        self.counts[axis.lane()]
            .get(code as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Counts for every category of `axis`, in code order.
    pub fn counts(&self, axis: Axis) -> &[u64] {
        &self.counts[axis.lane()][..axis.cardinality()]
    }

    pub fn frequency(&self, axis: Axis, code: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(axis, code) as f64 / self.total as f64
    }
}

impl Extend<AttributeSet> for AxisHistogram {
    fn extend<I: IntoIterator<Item = AttributeSet>>(&mut self, iter: I) {
        for traits in iter {
            self.record(&traits);
        }
    }
}

impl FromIterator<AttributeSet> for AxisHistogram {
    fn from_iter<I: IntoIterator<Item = AttributeSet>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}
