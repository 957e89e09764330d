use std::fmt;

use seqsync_core::EditObserver;

/// Error produced by [`FailAfter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InjectedFailure<E> {
    /// The wrapper refused the edit with this zero-based index.
    Injected { edit_index: usize },
    /// The wrapped observer failed on its own.
    Inner(E),
}

impl<E: fmt::Display> fmt::Display for InjectedFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectedFailure::Injected { edit_index } => {
                write!(f, "injected failure at edit #{edit_index}")
            }
            InjectedFailure::Inner(e) => write!(f, "{e}"),
        }
    }
}

impl<E> std::error::Error for InjectedFailure<E> where E: std::error::Error {}

/// Forwards the first `allowed` edits to the inner observer, then fails.
///
/// The refused edit is not forwarded, so the inner observer sees exactly the
/// edits the reconciler applied.
#[derive(Debug)]
pub struct FailAfter<O> {
    inner: O,
    allowed: usize,
    seen: usize,
}

impl<O> FailAfter<O> {
    pub fn new(inner: O, allowed: usize) -> Self {
        Self {
            inner,
            allowed,
            seen: 0,
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn into_inner(self) -> O {
        self.inner
    }

    /// Index of the incoming edit if it must be refused.
    fn refuse(&mut self) -> Option<usize> {
        let index = self.seen;
        self.seen += 1;
        (index >= self.allowed).then_some(index)
    }
}

impl<T, O> EditObserver<T> for FailAfter<O>
where
    O: EditObserver<T>,
{
    type Error = InjectedFailure<O::Error>;

    fn insert(&mut self, item: &T, position: usize) -> Result<(), Self::Error> {
        if let Some(edit_index) = self.refuse() {
            return Err(InjectedFailure::Injected { edit_index });
        }
        self.inner.insert(item, position).map_err(InjectedFailure::Inner)
    }

    fn remove(&mut self, position: usize) -> Result<(), Self::Error> {
        if let Some(edit_index) = self.refuse() {
            return Err(InjectedFailure::Injected { edit_index });
        }
        self.inner.remove(position).map_err(InjectedFailure::Inner)
    }

    fn move_item(&mut self, from: usize, to: usize) -> Result<(), Self::Error> {
        if let Some(edit_index) = self.refuse() {
            return Err(InjectedFailure::Injected { edit_index });
        }
        self.inner.move_item(from, to).map_err(InjectedFailure::Inner)
    }
}
