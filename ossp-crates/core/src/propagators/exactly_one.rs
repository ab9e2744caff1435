use crate::basic_types::Contradiction;
use crate::basic_types::Propagation;
use crate::basic_types::PropagationStatus;
use crate::engine::variables::DomainId;
use crate::engine::VariableStore;

/// Exactly one of the 0/1 `flags` takes the value 1.
pub(crate) fn propagate_exactly_one(
    store: &mut VariableStore,
    flags: &[DomainId],
) -> PropagationStatus {
    let mut set_flag = None;
    let mut num_open = 0;
    let mut last_open = None;

    for &flag in flags {
        if store.lower_bound(flag) == 1 {
            if set_flag.is_some() {
                return Err(Contradiction::Conflict("more than one flag is set"));
            }
            set_flag = Some(flag);
        } else if store.upper_bound(flag) == 1 {
            num_open += 1;
            last_open = Some(flag);
        }
    }

    if let Some(set_flag) = set_flag {
        let mut changed = false;
        for &flag in flags.iter().filter(|&&flag| flag != set_flag) {
            changed |= store.tighten_upper_bound(flag, 0)?;
        }
        return Ok(Propagation::from_changed(changed));
    }

    match (num_open, last_open) {
        (0, _) => Err(Contradiction::Conflict("every flag is unset")),
        (1, Some(flag)) => {
            let _ = store.tighten_lower_bound(flag, 1)?;
            Ok(Propagation::Changed)
        }
        _ => Ok(Propagation::NoChange),
    }
}
