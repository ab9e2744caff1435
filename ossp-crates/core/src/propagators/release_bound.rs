use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::engine::VariableStore;

pub(crate) fn propagate_release_bound(
    store: &mut VariableStore,
    start: DomainId,
    release: i64,
) -> PropagationStatus {
    Ok(Propagation::from_changed(
        store.tighten_lower_bound(start, release)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Contradiction;

    #[test]
    fn start_is_pushed_to_release() {
        let mut store = VariableStore::default();
        let start = store.new_variable(0, 10, "s".into());

        let result = propagate_release_bound(&mut store, start, 4);

        assert_eq!(Ok(Propagation::Changed), result);
        assert_eq!(4, store.lower_bound(start));
        assert_eq!(Ok(Propagation::NoChange), propagate_release_bound(&mut store, start, 4));
    }

    #[test]
    fn release_after_latest_start_is_a_contradiction() {
        let mut store = VariableStore::default();
        let start = store.new_variable(0, 3, "s".into());

        assert_eq!(
            Err(Contradiction::EmptyDomain(start)),
            propagate_release_bound(&mut store, start, 4)
        );
    }
}
