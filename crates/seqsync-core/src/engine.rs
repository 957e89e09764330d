use tracing::trace;

use crate::equality::{position_from, Equivalence};
use crate::{EditKind, EditObserver, Phase, SyncError};

// ---------------------------------------------------------------------------
// Counterpart matching
// ---------------------------------------------------------------------------

/// Pairing of sequence items with target positions.
///
/// Each sequence item, in ascending order, claims the first unclaimed target
/// position holding an equivalent item. Duplicates therefore pair up by first
/// occurrence, and an item only counts as shared while an unclaimed
/// counterpart remains.
struct Counterparts {
    sequence_matched: Vec<bool>,
    target_claimed: Vec<bool>,
}

fn match_counterparts<T, P>(sequence: &[T], target: &[T], eq: &P) -> Counterparts
where
    P: Equivalence<T>,
{
    let mut sequence_matched = vec![false; sequence.len()];
    let mut target_claimed = vec![false; target.len()];

    for (i, item) in sequence.iter().enumerate() {
        let slot = (0..target.len()).find(|&j| !target_claimed[j] && eq.equivalent(item, &target[j]));
        if let Some(j) = slot {
            target_claimed[j] = true;
            sequence_matched[i] = true;
        }
    }

    Counterparts {
        sequence_matched,
        target_claimed,
    }
}

// ---------------------------------------------------------------------------
// Removal
// ---------------------------------------------------------------------------

/// Positions in `sequence` whose item has no counterpart in `target`,
/// ascending.
pub fn plan_removals<T, P>(sequence: &[T], target: &[T], eq: &P) -> Vec<usize>
where
    P: Equivalence<T>,
{
    match_counterparts(sequence, target, eq)
        .sequence_matched
        .iter()
        .enumerate()
        .filter(|(_, matched)| !**matched)
        .map(|(i, _)| i)
        .collect()
}

/// Remove the planned positions, highest first, notifying before each
/// deletion. `ascending` must be sorted and valid for `sequence`.
///
/// Returns the number of removals issued.
pub fn apply_removals<T, O>(
    sequence: &mut Vec<T>,
    ascending: &[usize],
    observer: &mut O,
) -> Result<usize, SyncError<O::Error>>
where
    O: EditObserver<T>,
{
    for &position in ascending.iter().rev() {
        debug_assert!(position < sequence.len(), "planned removal out of range");
        trace!(position, len = sequence.len(), "remove");
        observer
            .remove(position)
            .map_err(|e| SyncError::new(Phase::Removing, EditKind::Remove, e))?;
        sequence.remove(position);
    }
    Ok(ascending.len())
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

/// Relocate one element so the item at `from` ends up at `to`, shifting the
/// elements in between by one place.
pub fn move_element<T>(items: &mut [T], from: usize, to: usize) {
    if from > to {
        items[to..=from].rotate_right(1);
    } else if from < to {
        items[from..=to].rotate_left(1);
    }
}

/// Align shared items with the target's relative order using moves.
///
/// Walks `target` once with a cursor into `sequence`. Everything before the
/// cursor is already aligned; each target item is searched for at or after
/// the cursor and, if found elsewhere, moved onto it. Target items with no
/// remaining copy in the sequence are skipped for the insertion phase.
///
/// Greedy single pass: the relative order comes out right, the move count is
/// not guaranteed minimal.
///
/// Returns the number of moves issued.
pub fn reorder<T, O, P>(
    sequence: &mut Vec<T>,
    target: &[T],
    eq: &P,
    observer: &mut O,
) -> Result<usize, SyncError<O::Error>>
where
    O: EditObserver<T>,
    P: Equivalence<T>,
{
    let mut cursor = 0usize;
    let mut moves = 0usize;

    for item in target {
        if cursor >= sequence.len() {
            break;
        }
        let Some(found) = position_from(sequence, cursor, item, eq) else {
            continue;
        };
        if found != cursor {
            trace!(from = found, to = cursor, "move");
            observer
                .move_item(found, cursor)
                .map_err(|e| SyncError::new(Phase::Reordering, EditKind::Move, e))?;
            move_element(sequence, found, cursor);
            moves += 1;
        }
        cursor += 1;
    }

    Ok(moves)
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every target item that has no counterpart in `sequence`, in target
/// order, each at its target index.
///
/// When the sequence already holds the shared items in target order this
/// yields a sequence equal to `target` edit by edit.
///
/// Returns the number of insertions issued.
pub fn insert_missing<T, O, P>(
    sequence: &mut Vec<T>,
    target: &[T],
    eq: &P,
    observer: &mut O,
) -> Result<usize, SyncError<O::Error>>
where
    T: Clone,
    O: EditObserver<T>,
    P: Equivalence<T>,
{
    let missing: Vec<usize> = match_counterparts(sequence, target, eq)
        .target_claimed
        .iter()
        .enumerate()
        .filter(|(_, claimed)| !**claimed)
        .map(|(j, _)| j)
        .collect();

    for &position in &missing {
        debug_assert!(position <= sequence.len(), "insertion point out of range");
        let item = &target[position];
        trace!(position, len = sequence.len(), "insert");
        observer
            .insert(item, position)
            .map_err(|e| SyncError::new(Phase::Inserting, EditKind::Insert, e))?;
        sequence.insert(position, item.clone());
    }

    Ok(missing.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edit, EditLog, ValueEq};

    fn v(items: &[&'static str]) -> Vec<&'static str> {
        items.to_vec()
    }

    #[test]
    fn move_element_rotates_backward() {
        let mut items = v(&["a", "b", "c", "d"]);
        move_element(&mut items, 3, 1);
        assert_eq!(items, v(&["a", "d", "b", "c"]));
    }

    #[test]
    fn move_element_rotates_forward() {
        let mut items = v(&["a", "b", "c", "d"]);
        move_element(&mut items, 0, 2);
        assert_eq!(items, v(&["b", "c", "a", "d"]));
    }

    #[test]
    fn move_element_same_position_is_noop() {
        let mut items = v(&["a", "b"]);
        move_element(&mut items, 1, 1);
        assert_eq!(items, v(&["a", "b"]));
    }

    #[test]
    fn plan_removals_is_ascending_and_pure() {
        let seq = v(&["x", "a", "y", "b", "z"]);
        let target = v(&["b", "a"]);
        assert_eq!(plan_removals(&seq, &target, &ValueEq), vec![0, 2, 4]);
        assert_eq!(seq, v(&["x", "a", "y", "b", "z"]));
    }

    #[test]
    fn plan_removals_counts_duplicates() {
        // target keeps one "a"; the second copy has no counterpart
        let seq = v(&["a", "b", "a"]);
        let target = v(&["a", "b"]);
        assert_eq!(plan_removals(&seq, &target, &ValueEq), vec![2]);
    }

    #[test]
    fn removals_run_highest_index_first() {
        let mut seq = v(&["x", "a", "y"]);
        let mut log = EditLog::new();
        let n = apply_removals(&mut seq, &[0, 2], &mut log).unwrap();
        assert_eq!(n, 2);
        assert_eq!(seq, v(&["a"]));
        assert_eq!(
            log.edits(),
            &[Edit::Remove { position: 2 }, Edit::Remove { position: 0 }]
        );
    }

    #[test]
    fn reorder_uses_extraction_not_swap() {
        let mut seq = v(&["Zagreb", "Wien", "Paris", "Roma", "London"]);
        let target = v(&["Paris", "Zagreb", "London", "Wien", "Roma"]);
        let mut log = EditLog::new();

        let moves = reorder(&mut seq, &target, &ValueEq, &mut log).unwrap();

        assert_eq!(seq, target);
        assert_eq!(moves, 2);
        assert_eq!(
            log.edits(),
            &[Edit::Move { from: 2, to: 0 }, Edit::Move { from: 4, to: 2 }]
        );
    }

    #[test]
    fn reorder_skips_items_absent_from_sequence() {
        let mut seq = v(&["Zagreb", "Wien", "Paris"]);
        let target = v(&["Paris", "Zagreb", "London", "Wien", "Roma"]);
        let mut log = EditLog::new();

        reorder(&mut seq, &target, &ValueEq, &mut log).unwrap();

        assert_eq!(seq, v(&["Paris", "Zagreb", "Wien"]));
        assert_eq!(log.edits(), &[Edit::Move { from: 2, to: 0 }]);
    }

    #[test]
    fn reorder_never_disturbs_aligned_duplicates() {
        let mut seq = v(&["a", "b", "a"]);
        let target = v(&["b", "a", "a"]);
        let mut log = EditLog::new();

        reorder(&mut seq, &target, &ValueEq, &mut log).unwrap();

        assert_eq!(seq, target);
        assert_eq!(log.edits(), &[Edit::Move { from: 1, to: 0 }]);
    }

    #[test]
    fn insert_missing_uses_target_indices() {
        let mut seq = v(&["Paris", "Zagreb", "Wien"]);
        let target = v(&["Paris", "Zagreb", "London", "Wien", "Roma"]);
        let mut log = EditLog::new();

        let n = insert_missing(&mut seq, &target, &ValueEq, &mut log).unwrap();

        assert_eq!(n, 2);
        assert_eq!(seq, target);
        assert_eq!(
            log.edits(),
            &[
                Edit::Insert {
                    item: "London",
                    position: 2
                },
                Edit::Insert {
                    item: "Roma",
                    position: 4
                },
            ]
        );
    }

    #[test]
    fn insert_missing_fills_extra_duplicates() {
        let mut seq = v(&["a"]);
        let target = v(&["a", "a"]);
        let mut log = EditLog::new();

        insert_missing(&mut seq, &target, &ValueEq, &mut log).unwrap();

        assert_eq!(seq, target);
        assert_eq!(
            log.edits(),
            &[Edit::Insert {
                item: "a",
                position: 1
            }]
        );
    }
}
