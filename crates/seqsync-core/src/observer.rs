use std::convert::Infallible;

use crate::{Edit, EditCounts};

/// Capability notified of every structural edit, in the order edits are
/// applied.
///
/// Each notification arrives before the sequence is mutated, with positions
/// valid against the sequence at that instant. Returning `Err` aborts the
/// synchronization; the error reaches the caller wrapped in a
/// [`SyncError`](crate::SyncError).
pub trait EditObserver<T> {
    type Error;

    fn insert(&mut self, item: &T, position: usize) -> Result<(), Self::Error>;

    fn remove(&mut self, position: usize) -> Result<(), Self::Error>;

    fn move_item(&mut self, from: usize, to: usize) -> Result<(), Self::Error>;
}

impl<T, O> EditObserver<T> for &mut O
where
    O: EditObserver<T> + ?Sized,
{
    type Error = O::Error;

    fn insert(&mut self, item: &T, position: usize) -> Result<(), Self::Error> {
        (**self).insert(item, position)
    }

    fn remove(&mut self, position: usize) -> Result<(), Self::Error> {
        (**self).remove(position)
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<(), Self::Error> {
        (**self).move_item(from, to)
    }
}

/// Observer that ignores every edit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl<T> EditObserver<T> for Silent {
    type Error = Infallible;

    fn insert(&mut self, _item: &T, _position: usize) -> Result<(), Infallible> {
        Ok(())
    }

    fn remove(&mut self, _position: usize) -> Result<(), Infallible> {
        Ok(())
    }

    fn move_item(&mut self, _from: usize, _to: usize) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Observer assembled from three independent callbacks.
pub struct FnObserver<I, R, M> {
    on_insert: I,
    on_remove: R,
    on_move: M,
}

impl<I, R, M> FnObserver<I, R, M> {
    pub fn new(on_insert: I, on_remove: R, on_move: M) -> Self {
        Self {
            on_insert,
            on_remove,
            on_move,
        }
    }
}

impl<T, I, R, M> EditObserver<T> for FnObserver<I, R, M>
where
    I: FnMut(&T, usize),
    R: FnMut(usize),
    M: FnMut(usize, usize),
{
    type Error = Infallible;

    fn insert(&mut self, item: &T, position: usize) -> Result<(), Infallible> {
        (self.on_insert)(item, position);
        Ok(())
    }

    fn remove(&mut self, position: usize) -> Result<(), Infallible> {
        (self.on_remove)(position);
        Ok(())
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<(), Infallible> {
        (self.on_move)(from, to);
        Ok(())
    }
}

/// Observer that records every edit as an [`Edit`] value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditLog<T> {
    edits: Vec<Edit<T>>,
}

impl<T> Default for EditLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EditLog<T> {
    pub fn new() -> Self {
        Self { edits: Vec::new() }
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<Edit<T>> {
        self.edits
    }

    pub fn counts(&self) -> EditCounts {
        let mut counts = EditCounts::default();
        for edit in &self.edits {
            counts.record(edit.kind());
        }
        counts
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }
}

impl<T: Clone> EditObserver<T> for EditLog<T> {
    type Error = Infallible;

    fn insert(&mut self, item: &T, position: usize) -> Result<(), Infallible> {
        self.edits.push(Edit::Insert {
            item: item.clone(),
            position,
        });
        Ok(())
    }

    fn remove(&mut self, position: usize) -> Result<(), Infallible> {
        self.edits.push(Edit::Remove { position });
        Ok(())
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<(), Infallible> {
        self.edits.push(Edit::Move { from, to });
        Ok(())
    }
}
