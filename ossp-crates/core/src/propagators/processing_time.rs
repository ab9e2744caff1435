use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::engine::variables::OptionalInterval;
use crate::engine::VariableStore;

/// Bounds consistency for `end = start + duration`.
pub(crate) fn propagate_processing_time(
    store: &mut VariableStore,
    start: DomainId,
    end: DomainId,
    duration: i64,
) -> PropagationStatus {
    let mut changed = store.tighten_lower_bound(end, store.lower_bound(start) + duration)?;
    changed |= store.tighten_upper_bound(end, store.upper_bound(start) + duration)?;
    changed |= store.tighten_lower_bound(start, store.lower_bound(end) - duration)?;
    changed |= store.tighten_upper_bound(start, store.upper_bound(end) - duration)?;

    Ok(Propagation::from_changed(changed))
}

/// Links a present interval to its job, and rules out machines on which the job no longer fits.
///
/// While the presence is undecided the start and end are left untouched since they are shared with
/// the intervals of the job on the other machines.
pub(crate) fn propagate_interval_link(
    store: &mut VariableStore,
    interval: &OptionalInterval,
) -> PropagationStatus {
    let presence = interval.presence;

    if store.lower_bound(presence) == 1 {
        return propagate_processing_time(store, interval.start, interval.end, interval.duration);
    }

    if store.upper_bound(presence) == 1
        && store.lower_bound(interval.start) + interval.duration > store.upper_bound(interval.end)
    {
        let _ = store.tighten_upper_bound(presence, 0)?;
        return Ok(Propagation::Changed);
    }

    Ok(Propagation::NoChange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(store: &mut VariableStore, start_ub: i64, end_ub: i64) -> OptionalInterval {
        OptionalInterval {
            start: store.new_variable(0, start_ub, "s".into()),
            end: store.new_variable(0, end_ub, "e".into()),
            presence: store.new_variable(0, 1, "p".into()),
            duration: 5,
        }
    }

    #[test]
    fn processing_time_tightens_both_directions() {
        let mut store = VariableStore::default();
        let start = store.new_variable(2, 20, "s".into());
        let end = store.new_variable(0, 12, "e".into());

        let result = propagate_processing_time(&mut store, start, end, 5);

        assert_eq!(Ok(Propagation::Changed), result);
        assert_eq!((2, 7), (store.lower_bound(start), store.upper_bound(start)));
        assert_eq!((7, 12), (store.lower_bound(end), store.upper_bound(end)));
    }

    #[test]
    fn undecided_interval_does_not_touch_shared_domains() {
        let mut store = VariableStore::default();
        let interval = interval(&mut store, 20, 20);

        let result = propagate_interval_link(&mut store, &interval);

        assert_eq!(Ok(Propagation::NoChange), result);
        assert_eq!(0, store.lower_bound(interval.end));
    }

    #[test]
    fn interval_which_cannot_fit_becomes_absent() {
        let mut store = VariableStore::default();
        let interval = interval(&mut store, 20, 4);

        let result = propagate_interval_link(&mut store, &interval);

        assert_eq!(Ok(Propagation::Changed), result);
        assert_eq!(0, store.upper_bound(interval.presence));
    }

    #[test]
    fn present_interval_links_start_and_end() {
        let mut store = VariableStore::default();
        let interval = interval(&mut store, 20, 20);
        let _ = store.tighten_lower_bound(interval.presence, 1).unwrap();

        let _ = propagate_interval_link(&mut store, &interval).unwrap();

        assert_eq!(5, store.lower_bound(interval.end));
        assert_eq!(15, store.upper_bound(interval.start));
    }
}
