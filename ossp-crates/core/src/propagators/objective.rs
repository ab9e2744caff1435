//! Links the objective variable to the lateness of the jobs.
//!
//! The terms are lateness variables and therefore never negative; an empty set of terms
//! aggregates to 0 for both the sum and the maximum.
use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::engine::VariableStore;

/// Bounds consistency for `objective = sum(terms)` with respect to the upper bounds of the terms.
pub(crate) fn propagate_objective_sum(
    store: &mut VariableStore,
    objective: DomainId,
    terms: &[DomainId],
) -> PropagationStatus {
    let lower_bound_sum: i64 = terms.iter().map(|&term| store.lower_bound(term)).sum();
    let upper_bound_sum: i64 = terms.iter().map(|&term| store.upper_bound(term)).sum();

    let mut changed = store.tighten_lower_bound(objective, lower_bound_sum)?;
    changed |= store.tighten_upper_bound(objective, upper_bound_sum)?;

    // Every other term contributes at least its lower bound.
    let objective_upper_bound = store.upper_bound(objective);
    for &term in terms {
        let slack = objective_upper_bound - (lower_bound_sum - store.lower_bound(term));
        changed |= store.tighten_upper_bound(term, slack)?;
    }

    Ok(Propagation::from_changed(changed))
}

/// Bounds consistency for `objective = max(terms)` with respect to the upper bounds of the terms.
pub(crate) fn propagate_objective_max(
    store: &mut VariableStore,
    objective: DomainId,
    terms: &[DomainId],
) -> PropagationStatus {
    let largest_lower_bound = terms
        .iter()
        .map(|&term| store.lower_bound(term))
        .max()
        .unwrap_or(0);
    let largest_upper_bound = terms
        .iter()
        .map(|&term| store.upper_bound(term))
        .max()
        .unwrap_or(0);

    let mut changed = store.tighten_lower_bound(objective, largest_lower_bound)?;
    changed |= store.tighten_upper_bound(objective, largest_upper_bound)?;

    let objective_upper_bound = store.upper_bound(objective);
    for &term in terms {
        changed |= store.tighten_upper_bound(term, objective_upper_bound)?;
    }

    Ok(Propagation::from_changed(changed))
}
