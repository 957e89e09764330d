/// Equality predicate used to match items between sequence and target.
///
/// Implementations must be pure, total and consistent: the same pair always
/// compares the same way, and the relation behaves as an equivalence.
pub trait Equivalence<T: ?Sized> {
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Default predicate: `PartialEq` value equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueEq;

impl<T: PartialEq + ?Sized> Equivalence<T> for ValueEq {
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// First position at or after `from` whose item is equivalent to `item`.
pub(crate) fn position_from<T, P>(items: &[T], from: usize, item: &T, eq: &P) -> Option<usize>
where
    P: Equivalence<T>,
{
    items
        .get(from..)?
        .iter()
        .position(|candidate| eq.equivalent(candidate, item))
        .map(|offset| from + offset)
}
