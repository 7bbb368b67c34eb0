use std::collections::VecDeque;

use pillows_traits::derive;
use pillows_types::{Seed, TraitLookup};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::QueryConfig;
use crate::error::QueryError;

/// One element of a range query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeItem {
    pub index: u64,
    pub traits: TraitLookup,
}

/// Coarse progress of a range query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: u64,
    pub total: u64,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 * 100.0 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

type ProgressObserver = Box<dyn FnMut(Progress) + Send>;

/// Lazy, restartable iterator over the traits of `from..=to`.
///
/// Items are produced one chunk at a time; each chunk is derived in
/// parallel and handed out in index order. When the collection was not
/// revealed at query time every item is [`TraitLookup::Unavailable`].
///
/// The query owns a copy of the seed and never borrows the collection.
pub struct RangeQuery {
    seed: Option<Seed>,
    from: u64,
    to: u64,
    /// First index not yet derived; `None` once the window is exhausted.
    next: Option<u64>,
    buffer: VecDeque<RangeItem>,
    completed: u64,
    total: u64,
    step: u64,
    next_report: u64,
    config: QueryConfig,
    observer: Option<ProgressObserver>,
}

impl RangeQuery {
    /// Build a query over `from..=to`.
    ///
    /// A window covering all of `u64` reports `u64::MAX` as its total.
    pub fn new(
        seed: Option<Seed>,
        from: u64,
        to: u64,
        config: QueryConfig,
    ) -> Result<Self, QueryError> {
        if to < from {
            return Err(QueryError::InvalidRange { from, to });
        }
        let total = (to - from).saturating_add(1);
        let step = progress_step(total, config.progress_step_percent);
        Ok(Self {
            seed,
            from,
            to,
            next: Some(from),
            buffer: VecDeque::new(),
            completed: 0,
            total,
            step,
            next_report: step,
            config,
            observer: None,
        })
    }

    /// Call `observer` at every progress milestone.
    pub fn with_progress(mut self, observer: impl FnMut(Progress) + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Indices derived per chunk.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size.max(1)
    }

    pub fn from_index(&self) -> u64 {
        self.from
    }

    pub fn to_index(&self) -> u64 {
        self.to
    }

    /// Whether the items carry traits.
    pub fn is_available(&self) -> bool {
        self.seed.is_some()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed,
            total: self.total,
        }
    }

    /// Index the next call to `next()` yields, `None` when done.
    pub fn position(&self) -> Option<u64> {
        self.buffer.front().map(|item| item.index).or(self.next)
    }

    /// Rewind to the start of the window.
    pub fn restart(&mut self) {
        self.seek(self.from);
    }

    /// Continue from `index`, which must lie inside the window.
    pub fn resume_at(&mut self, index: u64) -> Result<(), QueryError> {
        if index < self.from || index > self.to {
            return Err(QueryError::OutOfWindow {
                index,
                from: self.from,
                to: self.to,
            });
        }
        self.seek(index);
        Ok(())
    }

    fn seek(&mut self, index: u64) {
        self.buffer.clear();
        self.next = Some(index);
        self.completed = index - self.from;
        self.next_report = next_milestone(self.completed, self.step);
    }

    fn fill_chunk(&mut self) {
        let Some(start) = self.next else {
            return;
        };
        let span = self.chunk_size() as u64 - 1;
        let end = start.saturating_add(span).min(self.to);

        match self.seed {
            None => {
                self.buffer.extend((start..=end).map(|index| RangeItem {
                    index,
                    traits: TraitLookup::Unavailable,
                }));
            }
            Some(seed) if self.config.parallel => {
                let indices: Vec<u64> = (start..=end).collect();
                let items: Vec<RangeItem> = indices
                    .par_iter()
                    .map(|&index| RangeItem {
                        index,
                        traits: TraitLookup::Available(derive(&seed, index)),
                    })
                    .collect();
                self.buffer.extend(items);
            }
            Some(seed) => {
                self.buffer.extend((start..=end).map(|index| RangeItem {
                    index,
                    traits: TraitLookup::Available(derive(&seed, index)),
                }));
            }
        }

        debug!(start, end, parallel = self.config.parallel, "derived chunk");
        self.next = if end == self.to { None } else { Some(end + 1) };
    }

    fn report_progress(&mut self) {
        if self.completed < self.next_report && self.completed < self.total {
            return;
        }
        let progress = self.progress();
        info!(
            from = self.from,
            to = self.to,
            completed = progress.completed,
            total = progress.total,
            "range query progress {:.0}%",
            progress.percent()
        );
        if let Some(observer) = self.observer.as_mut() {
            observer(progress);
        }
        self.next_report = next_milestone(self.completed, self.step);
    }
}

impl Iterator for RangeQuery {
    type Item = RangeItem;

    fn next(&mut self) -> Option<RangeItem> {
        if self.buffer.is_empty() {
            self.fill_chunk();
        }
        let item = self.buffer.pop_front()?;
        self.completed = self.completed.saturating_add(1);
        self.report_progress();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The full u64 window holds 2^64 items, one more than `total` can say.
        let len = u128::from(self.to - self.from) + 1;
        let remaining = len.saturating_sub(u128::from(self.completed));
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for RangeQuery {}

impl std::fmt::Debug for RangeQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeQuery")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("available", &self.seed.is_some())
            .field("position", &self.position())
            .field("completed", &self.completed)
            .field("total", &self.total)
            .finish()
    }
}

/// Items between two progress reports.
fn progress_step(total: u64, percent: u8) -> u64 {
    let percent = u128::from(percent.clamp(1, 100));
    let step = u128::from(total) * percent / 100;
    (step as u64).max(1)
}

/// Smallest multiple of `step` strictly greater than `completed`.
fn next_milestone(completed: u64, step: u64) -> u64 {
    (completed / step).saturating_add(1).saturating_mul(step)
}
