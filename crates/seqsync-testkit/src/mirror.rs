use seqsync_core::{Edit, EditCounts, EditObserver, EditOutOfRange};

/// Observer that mirrors the reconciled sequence structurally.
///
/// Every notification is applied to a private copy seeded with the same
/// initial items. A position that is invalid for the mirror at that instant
/// is returned as an error, which aborts the synchronization.
#[derive(Clone, Debug)]
pub struct MirrorObserver<T> {
    mirror: Vec<T>,
    edits: Vec<Edit<T>>,
    counts: EditCounts,
    lengths: Vec<usize>,
}

impl<T: Clone> MirrorObserver<T> {
    pub fn new(initial: &[T]) -> Self {
        Self {
            mirror: initial.to_vec(),
            edits: Vec::new(),
            counts: EditCounts::default(),
            lengths: Vec::new(),
        }
    }

    pub fn mirror(&self) -> &[T] {
        &self.mirror
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn counts(&self) -> EditCounts {
        self.counts
    }

    /// Mirror length after each applied edit.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Smallest length observed after any edit; `None` if no edit arrived.
    pub fn min_observed_len(&self) -> Option<usize> {
        self.lengths.iter().copied().min()
    }

    pub fn into_mirror(self) -> Vec<T> {
        self.mirror
    }

    fn apply(&mut self, edit: Edit<T>) -> Result<(), EditOutOfRange> {
        edit.apply_to(&mut self.mirror)?;
        self.counts.record(edit.kind());
        self.lengths.push(self.mirror.len());
        self.edits.push(edit);
        Ok(())
    }
}

impl<T: Clone> EditObserver<T> for MirrorObserver<T> {
    type Error = EditOutOfRange;

    fn insert(&mut self, item: &T, position: usize) -> Result<(), EditOutOfRange> {
        self.apply(Edit::Insert {
            item: item.clone(),
            position,
        })
    }

    fn remove(&mut self, position: usize) -> Result<(), EditOutOfRange> {
        self.apply(Edit::Remove { position })
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<(), EditOutOfRange> {
        self.apply(Edit::Move { from, to })
    }
}
