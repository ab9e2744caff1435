use super::TerminationCondition;

/// A [`TerminationCondition`] which never triggers; the search runs until it either proves
/// optimality or finds that no schedule exists.
#[derive(Clone, Copy, Debug)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}
