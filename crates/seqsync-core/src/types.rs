use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::move_element;
use crate::policy::PhaseOrder;

/// One structural change to the sequence.
///
/// Positions refer to the sequence as it exists immediately before the edit
/// is applied, not to the final sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit<T> {
    Insert { item: T, position: usize },
    Remove { position: usize },
    Move { from: usize, to: usize },
}

impl<T> Edit<T> {
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Insert { .. } => EditKind::Insert,
            Edit::Remove { .. } => EditKind::Remove,
            Edit::Move { .. } => EditKind::Move,
        }
    }

    /// Apply this edit to a mirror of the sequence.
    ///
    /// The mirror is left untouched when a position is out of range for it.
    pub fn apply_to(&self, mirror: &mut Vec<T>) -> Result<(), EditOutOfRange>
    where
        T: Clone,
    {
        let len = mirror.len();
        match self {
            Edit::Insert { item, position } => {
                if *position > len {
                    return Err(EditOutOfRange::new(EditKind::Insert, *position, len));
                }
                mirror.insert(*position, item.clone());
            }
            Edit::Remove { position } => {
                if *position >= len {
                    return Err(EditOutOfRange::new(EditKind::Remove, *position, len));
                }
                mirror.remove(*position);
            }
            Edit::Move { from, to } => {
                let worst = (*from).max(*to);
                if worst >= len {
                    return Err(EditOutOfRange::new(EditKind::Move, worst, len));
                }
                move_element(mirror, *from, *to);
            }
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for Edit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Insert { item, position } => write!(f, "insert {position} {item}"),
            Edit::Remove { position } => write!(f, "remove {position}"),
            Edit::Move { from, to } => write!(f, "move {from} -> {to}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Insert,
    Remove,
    Move,
}

impl EditKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditKind::Insert => "insert",
            EditKind::Remove => "remove",
            EditKind::Move => "move",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind edit counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCounts {
    pub inserts: usize,
    pub removes: usize,
    pub moves: usize,
}

impl EditCounts {
    pub fn record(&mut self, kind: EditKind) {
        match kind {
            EditKind::Insert => self.inserts += 1,
            EditKind::Remove => self.removes += 1,
            EditKind::Move => self.moves += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.inserts + self.removes + self.moves
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Phases of a single synchronization call.
///
/// Valid walks are `Planning → Removing → Reordering → Inserting → Done`
/// and, when insertion runs first, `Planning → Inserting → Removing → Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Planning,
    Removing,
    Reordering,
    Inserting,
    Done,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Planning => "planning",
            Phase::Removing => "removing",
            Phase::Reordering => "reordering",
            Phase::Inserting => "inserting",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of the most recent synchronization call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub order: PhaseOrder,
    pub counts: EditCounts,
    pub source_len: usize,
    pub target_len: usize,
}

impl SyncReport {
    pub fn new(order: PhaseOrder, source_len: usize, target_len: usize) -> Self {
        Self {
            order,
            counts: EditCounts::default(),
            source_len,
            target_len,
        }
    }

    /// `true` when the call issued no edits (sequence already matched).
    pub fn is_noop(&self) -> bool {
        self.counts.is_empty()
    }
}

/// An edit referenced a position that does not exist in the vector it was
/// applied to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutOfRange {
    pub kind: EditKind,
    pub position: usize,
    pub len: usize,
}

impl EditOutOfRange {
    pub fn new(kind: EditKind, position: usize, len: usize) -> Self {
        Self {
            kind,
            position,
            len,
        }
    }
}

impl fmt::Display for EditOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} references position {} but the sequence holds {} element(s)",
            self.kind, self.position, self.len
        )
    }
}

impl std::error::Error for EditOutOfRange {}

/// Error returned when the observer rejects an edit.
///
/// The sequence keeps every edit applied before the failing one; the failing
/// edit itself is not applied. No rollback is attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncError<E> {
    /// Phase that was running when the observer failed.
    pub phase: Phase,
    /// Edit the observer was being notified of.
    pub edit: EditKind,
    /// The observer's own error.
    pub source: E,
}

impl<E> SyncError<E> {
    pub fn new(phase: Phase, edit: EditKind, source: E) -> Self {
        Self {
            phase,
            edit,
            source,
        }
    }

    pub fn into_source(self) -> E {
        self.source
    }
}

impl<E: fmt::Display> fmt::Display for SyncError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "observer rejected {} while {}: {}",
            self.edit, self.phase, self.source
        )
    }
}

impl<E> std::error::Error for SyncError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
