//! seqsync-core
//!
//! Ordered-sequence reconciliation.
//!
//! A [`Reconciler`] owns a sequence and, on every call to
//! [`Reconciler::synchronize_to_destination`], transforms it into the
//! requested target through remove, move and insert edits. Each edit is
//! reported to an [`EditObserver`] before it is applied, so a structure that
//! mirrors the sequence can be kept in lockstep without rebuilding it.
//!
//! Phases, in order:
//! - removal planning (items with no counterpart in the target)
//! - removal application, highest index first
//! - reorder-by-move of the surviving items
//! - insertion of missing items at their target index
//!
//! A [`PhasePolicy`] may run insertion before removal; [`AvoidTransientEmpty`]
//! does so when every element would otherwise be removed, so the sequence is
//! never observed empty on its way to a non-empty target.
//!
//! Deterministic, pure logic. No IO.

mod engine;
mod equality;
mod observer;
mod policy;
mod reconciler;
mod types;

pub use engine::{apply_removals, insert_missing, move_element, plan_removals, reorder};
pub use equality::{Equivalence, ValueEq};
pub use observer::{EditLog, EditObserver, FnObserver, Silent};
pub use policy::{
    AvoidTransientEmpty, PhaseOrder, PhasePolicy, PlanSummary, PolicyKind, Standard, UnknownPolicy,
};
pub use reconciler::{edit_script, edit_script_with, Reconciler, SilentReconciler};
pub use types::*;
