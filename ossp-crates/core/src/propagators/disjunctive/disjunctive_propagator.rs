use super::disjunctive_task::DisjunctiveTask;
use super::theta_tree::ThetaTree;
use crate::basic_types::Contradiction;
use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::OptionalInterval;
use crate::engine::VariableStore;

/// Propagation of the no-overlap constraint of a single machine over optional intervals.
///
/// Only intervals whose presence is fixed to 1 take part in the reasoning over start times. The
/// start of an interval which may still be absent is shared with the other machines of its job
/// and is therefore never tightened here; at most its presence is fixed to 0.
///
/// Two filtering rules are applied:
/// - An overload check \[1\] on the present intervals: no subset of them may have an earliest
///   completion time beyond its latest completion time.
/// - Pairwise detectable precedences: if only one order of two intervals is possible, the bounds of
///   their starts are adjusted to that order.
///
/// # Bibliography
/// \[1\] P. Vilím, ‘Filtering algorithms for the unary resource constraint’, Archives of Control
/// Sciences, vol. 18, no. 2, pp. 159–202, 2008.
pub(crate) fn propagate_no_overlap(
    store: &mut VariableStore,
    intervals: &[OptionalInterval],
) -> PropagationStatus {
    let present_tasks = intervals
        .iter()
        .enumerate()
        .filter(|(_, interval)| store.lower_bound(interval.presence) == 1)
        .map(|(id, interval)| DisjunctiveTask::new(id, interval))
        .collect::<Vec<_>>();

    overload_check(store, &present_tasks)?;

    let mut changed = false;
    for (index, first) in intervals.iter().enumerate() {
        for second in &intervals[index + 1..] {
            changed |= propagate_pair(store, first, second)?.is_changed();
        }
    }

    Ok(Propagation::from_changed(changed))
}

fn overload_check(store: &VariableStore, tasks: &[DisjunctiveTask]) -> Result<(), Contradiction> {
    if tasks.len() < 2 {
        return Ok(());
    }

    let mut theta_tree = ThetaTree::new(tasks, store);

    let mut sorted_tasks = tasks.to_vec();
    sorted_tasks.sort_by_key(|task| (task.lct(store), task.id));

    for task in &sorted_tasks {
        theta_tree.add(task, store);
        if theta_tree.ect() > task.lct(store) {
            return Err(Contradiction::Conflict("machine overload"));
        }
    }

    Ok(())
}

fn propagate_pair(
    store: &mut VariableStore,
    first: &OptionalInterval,
    second: &OptionalInterval,
) -> PropagationStatus {
    if store.upper_bound(first.presence) == 0 || store.upper_bound(second.presence) == 0 {
        return Ok(Propagation::NoChange);
    }

    let first_is_present = store.lower_bound(first.presence) == 1;
    let second_is_present = store.lower_bound(second.presence) == 1;

    let first_can_precede = can_precede(store, first, second);
    let second_can_precede = can_precede(store, second, first);

    match (first_is_present, second_is_present) {
        (true, true) => match (first_can_precede, second_can_precede) {
            (false, false) => Err(Contradiction::Conflict("no order of two intervals fits")),
            (true, false) => enforce_precedence(store, first, second),
            (false, true) => enforce_precedence(store, second, first),
            (true, true) => Ok(Propagation::NoChange),
        },
        (true, false) | (false, true) if !first_can_precede && !second_can_precede => {
            let optional = if first_is_present { second } else { first };
            let _ = store.tighten_upper_bound(optional.presence, 0)?;
            Ok(Propagation::Changed)
        }
        _ => Ok(Propagation::NoChange),
    }
}

/// Whether `before` can complete before `after` starts given the current bounds.
fn can_precede(store: &VariableStore, before: &OptionalInterval, after: &OptionalInterval) -> bool {
    store.lower_bound(before.start) + before.duration <= store.upper_bound(after.start)
}

fn enforce_precedence(
    store: &mut VariableStore,
    before: &OptionalInterval,
    after: &OptionalInterval,
) -> PropagationStatus {
    let earliest_start_after = store.lower_bound(before.start) + before.duration;
    let mut changed = store.tighten_lower_bound(after.start, earliest_start_after)?;

    let latest_start_before = store.upper_bound(after.start) - before.duration;
    changed |= store.tighten_upper_bound(before.start, latest_start_before)?;

    Ok(Propagation::from_changed(changed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_interval(
        store: &mut VariableStore,
        start: (i64, i64),
        duration: i64,
        present: Option<bool>,
    ) -> OptionalInterval {
        let (presence_lb, presence_ub) = match present {
            Some(true) => (1, 1),
            Some(false) => (0, 0),
            None => (0, 1),
        };
        let start_var = store.new_variable(start.0, start.1, "s".into());
        OptionalInterval {
            start: start_var,
            end: store.new_variable(start.0 + duration, start.1 + duration, "e".into()),
            presence: store.new_variable(presence_lb, presence_ub, "p".into()),
            duration,
        }
    }

    #[test]
    fn detected_precedence_pushes_both_starts() {
        let mut store = VariableStore::default();
        let first = new_interval(&mut store, (0, 4), 5, Some(true));
        let second = new_interval(&mut store, (2, 10), 3, Some(true));

        let result = propagate_no_overlap(&mut store, &[first, second]);

        assert_eq!(Ok(Propagation::Changed), result);
        assert_eq!(5, store.lower_bound(second.start));
        assert_eq!(4, store.upper_bound(first.start));
    }

    #[test]
    fn both_orders_possible_leaves_domains() {
        let mut store = VariableStore::default();
        let first = new_interval(&mut store, (0, 10), 2, Some(true));
        let second = new_interval(&mut store, (0, 10), 2, Some(true));

        let result = propagate_no_overlap(&mut store, &[first, second]);

        assert_eq!(Ok(Propagation::NoChange), result);
    }

    #[test]
    fn overlapping_fixed_intervals_conflict() {
        let mut store = VariableStore::default();
        let first = new_interval(&mut store, (0, 0), 5, Some(true));
        let second = new_interval(&mut store, (3, 3), 5, Some(true));

        assert!(propagate_no_overlap(&mut store, &[first, second]).is_err());
    }

    #[test]
    fn overload_is_detected_beyond_pairs() {
        let mut store = VariableStore::default();
        // Every pair fits in [0, 8) but the three intervals together need 9 time units.
        let intervals = [
            new_interval(&mut store, (0, 5), 3, Some(true)),
            new_interval(&mut store, (0, 5), 3, Some(true)),
            new_interval(&mut store, (0, 5), 3, Some(true)),
        ];

        assert_eq!(
            Err(Contradiction::Conflict("machine overload")),
            propagate_no_overlap(&mut store, &intervals)
        );
    }

    #[test]
    fn optional_interval_which_cannot_fit_is_made_absent() {
        let mut store = VariableStore::default();
        let present = new_interval(&mut store, (0, 0), 10, Some(true));
        let optional = new_interval(&mut store, (2, 6), 3, None);

        let result = propagate_no_overlap(&mut store, &[present, optional]);

        assert_eq!(Ok(Propagation::Changed), result);
        assert_eq!(0, store.upper_bound(optional.presence));
        assert_eq!(2, store.lower_bound(optional.start));
    }

    #[test]
    fn starts_of_optional_intervals_are_not_pruned() {
        let mut store = VariableStore::default();
        let present = new_interval(&mut store, (0, 0), 4, Some(true));
        let optional = new_interval(&mut store, (2, 20), 3, None);

        let result = propagate_no_overlap(&mut store, &[present, optional]);

        assert_eq!(Ok(Propagation::NoChange), result);
        assert_eq!(2, store.lower_bound(optional.start));
    }

    #[test]
    fn absent_intervals_are_ignored() {
        let mut store = VariableStore::default();
        let present = new_interval(&mut store, (0, 0), 5, Some(true));
        let absent = new_interval(&mut store, (0, 0), 5, Some(false));

        assert_eq!(
            Ok(Propagation::NoChange),
            propagate_no_overlap(&mut store, &[present, absent])
        );
    }
}
