//! Phase-ordering policies.
//!
//! The only behavior that varies between reconciler profiles is the order in
//! which removal and insertion run. A [`PhasePolicy`] is consulted once per
//! synchronization, after removal planning, and returns a [`PhaseOrder`].
//!
//! - [`Standard`] always removes first.
//! - [`AvoidTransientEmpty`] inserts first when every current element is
//!   about to be removed and the target is non-empty, so the sequence never
//!   passes through zero elements.
//!
//! Policies are pure functions of the [`PlanSummary`]; closures of type
//! `Fn(&PlanSummary) -> PhaseOrder` are accepted as policies too.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Phase;

// ---------------------------------------------------------------------------
// Phase order
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseOrder {
    /// `Removing → Reordering → Inserting`.
    RemoveFirst,
    /// `Inserting → Removing`.
    ///
    /// Only valid when no element survives removal; there is nothing to
    /// reorder in that case.
    InsertFirst,
}

impl PhaseOrder {
    /// Mutating phases run after planning, in order.
    pub fn phases(&self) -> &'static [Phase] {
        match self {
            PhaseOrder::RemoveFirst => &[Phase::Removing, Phase::Reordering, Phase::Inserting],
            PhaseOrder::InsertFirst => &[Phase::Inserting, Phase::Removing],
        }
    }

    pub fn is_insert_first(&self) -> bool {
        matches!(self, PhaseOrder::InsertFirst)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseOrder::RemoveFirst => "remove_first",
            PhaseOrder::InsertFirst => "insert_first",
        }
    }
}

// ---------------------------------------------------------------------------
// Plan summary
// ---------------------------------------------------------------------------

/// What removal planning found, handed to the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanSummary {
    pub sequence_len: usize,
    pub target_len: usize,
    pub planned_removals: usize,
}

impl PlanSummary {
    /// Elements that survive removal.
    pub fn shared(&self) -> usize {
        self.sequence_len - self.planned_removals
    }

    /// `true` if remove-first ordering would leave the sequence empty before
    /// it ends non-empty.
    pub fn passes_through_empty(&self) -> bool {
        self.sequence_len > 0 && self.planned_removals == self.sequence_len && self.target_len > 0
    }

    /// `true` if [`PhaseOrder::InsertFirst`] can be honored for this plan.
    pub fn permits_insert_first(&self) -> bool {
        self.planned_removals == self.sequence_len
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

pub trait PhasePolicy {
    fn phase_order(&self, plan: &PlanSummary) -> PhaseOrder;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PhasePolicy for F
where
    F: Fn(&PlanSummary) -> PhaseOrder,
{
    fn phase_order(&self, plan: &PlanSummary) -> PhaseOrder {
        self(plan)
    }
}

/// Remove, reorder, insert. May pass through an empty sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standard;

impl PhasePolicy for Standard {
    fn phase_order(&self, _plan: &PlanSummary) -> PhaseOrder {
        PhaseOrder::RemoveFirst
    }

    fn name(&self) -> &str {
        PolicyKind::Standard.as_str()
    }
}

/// Insert before removing whenever the sequence would otherwise be emptied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvoidTransientEmpty;

impl PhasePolicy for AvoidTransientEmpty {
    fn phase_order(&self, plan: &PlanSummary) -> PhaseOrder {
        if plan.passes_through_empty() {
            PhaseOrder::InsertFirst
        } else {
            PhaseOrder::RemoveFirst
        }
    }

    fn name(&self) -> &str {
        PolicyKind::AvoidTransientEmpty.as_str()
    }
}

// ---------------------------------------------------------------------------
// Named selector
// ---------------------------------------------------------------------------

/// Built-in policy selected by name (configuration, command line).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Standard,
    AvoidTransientEmpty,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Standard => "standard",
            PolicyKind::AvoidTransientEmpty => "avoid_transient_empty",
        }
    }
}

impl PhasePolicy for PolicyKind {
    fn phase_order(&self, plan: &PlanSummary) -> PhaseOrder {
        match self {
            PolicyKind::Standard => Standard.phase_order(plan),
            PolicyKind::AvoidTransientEmpty => AvoidTransientEmpty.phase_order(plan),
        }
    }

    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized policy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPolicy(pub String);

impl fmt::Display for UnknownPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown policy '{}'. expected one of: standard | avoid_transient_empty",
            self.0
        )
    }
}

impl std::error::Error for UnknownPolicy {}

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" => Ok(PolicyKind::Standard),
            "avoid_transient_empty" => Ok(PolicyKind::AvoidTransientEmpty),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
