use tracing::{debug, debug_span, warn};

use crate::engine::{apply_removals, insert_missing, plan_removals, reorder};
use crate::{
    Edit, EditLog, EditObserver, Equivalence, Phase, PhaseOrder, PhasePolicy, PlanSummary,
    Silent, Standard, SyncError, SyncReport, ValueEq,
};

// ---------------------------------------------------------------------------
// Notifying reconciler
// ---------------------------------------------------------------------------

/// Owns a sequence and brings it to each requested target, reporting every
/// edit to an observer as it is applied.
///
/// No reentrancy: a call runs to completion (or to the first observer error)
/// before the next may start.
pub struct Reconciler<T, O, P = ValueEq> {
    sequence: Vec<T>,
    observer: O,
    equality: P,
    policy: Box<dyn PhasePolicy + Send + Sync>,
    last_report: Option<SyncReport>,
}

impl<T, O> Reconciler<T, O, ValueEq>
where
    T: Clone + PartialEq,
    O: EditObserver<T>,
{
    /// Seed the sequence from `initial`. Items compare by value and the
    /// [`Standard`] policy is used.
    pub fn new(initial: impl Into<Vec<T>>, observer: O) -> Self {
        Self::with_predicate(initial, observer, ValueEq)
    }
}

impl<T, O, P> Reconciler<T, O, P>
where
    T: Clone,
    O: EditObserver<T>,
    P: Equivalence<T>,
{
    pub fn with_predicate(initial: impl Into<Vec<T>>, observer: O, equality: P) -> Self {
        Self {
            sequence: initial.into(),
            observer,
            equality,
            policy: Box::new(Standard),
            last_report: None,
        }
    }

    /// Replace the equality predicate.
    pub fn with_equality<Q: Equivalence<T>>(self, equality: Q) -> Reconciler<T, O, Q> {
        Reconciler {
            sequence: self.sequence,
            observer: self.observer,
            equality,
            policy: self.policy,
            last_report: self.last_report,
        }
    }

    /// Replace the phase-ordering policy.
    pub fn with_policy(mut self, policy: impl PhasePolicy + Send + Sync + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }

    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Report of the last call that completed; `None` before the first call
    /// and after a call aborted by the observer.
    pub fn last_report(&self) -> Option<&SyncReport> {
        self.last_report.as_ref()
    }

    pub fn into_sequence(self) -> Vec<T> {
        self.sequence
    }

    pub fn into_parts(self) -> (Vec<T>, O) {
        (self.sequence, self.observer)
    }

    /// Transform the owned sequence into `target` and return it.
    ///
    /// On observer failure the sequence keeps every edit applied so far and
    /// the error names the phase and edit that failed.
    pub fn synchronize_to_destination(&mut self, target: &[T]) -> Result<&[T], SyncError<O::Error>> {
        let span = debug_span!(
            "synchronize",
            source_len = self.sequence.len(),
            target_len = target.len(),
            policy = self.policy.name()
        );
        let _enter = span.enter();

        self.last_report = None;

        let removals = plan_removals(&self.sequence, target, &self.equality);
        let plan = PlanSummary {
            sequence_len: self.sequence.len(),
            target_len: target.len(),
            planned_removals: removals.len(),
        };

        let mut order = self.policy.phase_order(&plan);
        if order.is_insert_first() && !plan.permits_insert_first() {
            warn!(
                shared = plan.shared(),
                "policy requested insert-first while items are shared; removing first instead"
            );
            order = PhaseOrder::RemoveFirst;
        }
        debug!(
            phase = %Phase::Planning,
            planned_removals = plan.planned_removals,
            order = order.as_str(),
            "removal plan ready"
        );

        let mut report = SyncReport::new(order, self.sequence.len(), target.len());
        let mut planned = Some(removals);

        for &phase in order.phases() {
            match phase {
                Phase::Removing => {
                    // Stale after any earlier mutation; recompute.
                    let positions = match planned.take() {
                        Some(positions) => positions,
                        None => plan_removals(&self.sequence, target, &self.equality),
                    };
                    report.counts.removes +=
                        apply_removals(&mut self.sequence, &positions, &mut self.observer)?;
                }
                Phase::Reordering => {
                    report.counts.moves +=
                        reorder(&mut self.sequence, target, &self.equality, &mut self.observer)?;
                }
                Phase::Inserting => {
                    report.counts.inserts += insert_missing(
                        &mut self.sequence,
                        target,
                        &self.equality,
                        &mut self.observer,
                    )?;
                }
                Phase::Planning | Phase::Done => {}
            }
            planned = None;
            debug!(phase = %phase, len = self.sequence.len(), "phase complete");
        }

        debug_assert_eq!(self.sequence.len(), target.len());
        debug_assert!(self
            .sequence
            .iter()
            .zip(target)
            .all(|(a, b)| self.equality.equivalent(a, b)));

        debug!(
            phase = %Phase::Done,
            inserts = report.counts.inserts,
            removes = report.counts.removes,
            moves = report.counts.moves,
            "synchronized"
        );
        self.last_report = Some(report);
        Ok(&self.sequence)
    }
}

// ---------------------------------------------------------------------------
// Silent reconciler
// ---------------------------------------------------------------------------

/// Same transformation as [`Reconciler`], without notification.
pub struct SilentReconciler<T, P = ValueEq> {
    inner: Reconciler<T, Silent, P>,
}

impl<T> SilentReconciler<T, ValueEq>
where
    T: Clone + PartialEq,
{
    pub fn new(initial: impl Into<Vec<T>>) -> Self {
        Self {
            inner: Reconciler::new(initial, Silent),
        }
    }
}

impl<T, P> SilentReconciler<T, P>
where
    T: Clone,
    P: Equivalence<T>,
{
    pub fn with_predicate(initial: impl Into<Vec<T>>, equality: P) -> Self {
        Self {
            inner: Reconciler::with_predicate(initial, Silent, equality),
        }
    }

    pub fn sequence(&self) -> &[T] {
        self.inner.sequence()
    }

    pub fn last_report(&self) -> Option<&SyncReport> {
        self.inner.last_report()
    }

    pub fn into_sequence(self) -> Vec<T> {
        self.inner.into_sequence()
    }

    pub fn synchronize_to_destination(&mut self, target: &[T]) -> &[T] {
        match self.inner.synchronize_to_destination(target) {
            Ok(sequence) => sequence,
            Err(err) => match err.into_source() {},
        }
    }
}

// ---------------------------------------------------------------------------
// One-shot edit scripts
// ---------------------------------------------------------------------------

/// Edits that transform `source` into `target` under value equality and the
/// [`Standard`] policy.
pub fn edit_script<T>(source: &[T], target: &[T]) -> Vec<Edit<T>>
where
    T: Clone + PartialEq,
{
    edit_script_with(source, target, ValueEq, Standard)
}

/// Edits that transform `source` into `target` under the given predicate and
/// policy.
pub fn edit_script_with<T, P, Q>(source: &[T], target: &[T], equality: P, policy: Q) -> Vec<Edit<T>>
where
    T: Clone,
    P: Equivalence<T>,
    Q: PhasePolicy + Send + Sync + 'static,
{
    let mut log = EditLog::new();
    {
        let mut reconciler =
            Reconciler::with_predicate(source.to_vec(), &mut log, equality).with_policy(policy);
        if let Err(err) = reconciler.synchronize_to_destination(target) {
            match err.into_source() {}
        }
    }
    log.into_edits()
}
