use indexmap::IndexSet;

use crate::core::scale::PixelRange;
use crate::core::types::TaskInstance;

/// Discrete mapping from processor id to an evenly spaced vertical band.
///
/// The domain is the distinct processor ids of the task list in first
/// appearance order, so band assignment is deterministic and stays put
/// across redraws as long as the id set does not change.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: IndexSet<u32>,
    range: PixelRange,
}

impl BandScale {
    #[must_use]
    pub fn from_tasks(tasks: &[TaskInstance], range: PixelRange) -> Self {
        let mut scale = Self {
            domain: IndexSet::new(),
            range,
        };
        scale.set_domain_from_tasks(tasks);
        scale
    }

    /// Rebuilds the processor domain; positions of ids that remain present
    /// keep their relative order.
    pub fn set_domain_from_tasks(&mut self, tasks: &[TaskInstance]) {
        self.domain = tasks.iter().map(|task| task.processor).collect();
    }

    pub fn set_pixel_range(&mut self, range: PixelRange) {
        self.range = range;
    }

    #[must_use]
    pub fn pixel_range(&self) -> PixelRange {
        self.range
    }

    /// Fixed band height shared by every processor row.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        self.range.span() / self.domain.len() as f64
    }

    /// Top pixel edge of the band for `processor`, or `None` when the id is
    /// not part of the domain.
    #[must_use]
    pub fn position(&self, processor: u32) -> Option<f64> {
        let index = self.domain.get_index_of(&processor)?;
        Some(self.range.min() + index as f64 * self.bandwidth())
    }

    pub fn domain(&self) -> impl ExactSizeIterator<Item = u32> + '_ {
        self.domain.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }
}
