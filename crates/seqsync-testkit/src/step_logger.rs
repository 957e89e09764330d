use std::convert::Infallible;

use seqsync_core::{EditCounts, EditKind, EditObserver};

/// Counts notifications per kind and logs the totals when dropped.
#[derive(Debug, Default)]
pub struct StepLogger {
    counts: EditCounts,
}

impl StepLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> EditCounts {
        self.counts
    }
}

impl Drop for StepLogger {
    fn drop(&mut self) {
        tracing::debug!(
            inserts = self.counts.inserts,
            removes = self.counts.removes,
            moves = self.counts.moves,
            "step logger totals"
        );
    }
}

impl<T> EditObserver<T> for StepLogger {
    type Error = Infallible;

    fn insert(&mut self, _item: &T, _position: usize) -> Result<(), Infallible> {
        self.counts.record(EditKind::Insert);
        Ok(())
    }

    fn remove(&mut self, _position: usize) -> Result<(), Infallible> {
        self.counts.record(EditKind::Remove);
        Ok(())
    }

    fn move_item(&mut self, _from: usize, _to: usize) -> Result<(), Infallible> {
        self.counts.record(EditKind::Move);
        Ok(())
    }
}
