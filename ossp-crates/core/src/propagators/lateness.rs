use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::engine::VariableStore;

/// Bounds consistency for `lateness = max(0, end - limit)`.
///
/// The lower bound of `lateness` is kept at 0 by its initial domain.
pub(crate) fn propagate_lateness(
    store: &mut VariableStore,
    end: DomainId,
    lateness: DomainId,
    limit: i64,
) -> PropagationStatus {
    let mut changed = store.tighten_lower_bound(lateness, store.lower_bound(end) - limit)?;
    changed |= store.tighten_upper_bound(lateness, (store.upper_bound(end) - limit).max(0))?;
    changed |= store.tighten_upper_bound(end, store.upper_bound(lateness).saturating_add(limit))?;

    Ok(Propagation::from_changed(changed))
}
