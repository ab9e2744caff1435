use crate::engine::variables::DomainId;

/// The result of invoking a propagator. Propagation either succeeds, reporting whether any domain
/// was tightened, or identifies a [`Contradiction`].
pub(crate) type PropagationStatus = Result<Propagation, Contradiction>;

/// Outcome of a propagation step which did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Propagation {
    Changed,
    NoChange,
}

impl Propagation {
    pub(crate) fn from_changed(changed: bool) -> Propagation {
        if changed {
            Propagation::Changed
        } else {
            Propagation::NoChange
        }
    }

    pub(crate) fn is_changed(self) -> bool {
        self == Propagation::Changed
    }
}

/// The current domains admit no solution. Only ever used for backtracking; it is never surfaced to
/// the caller of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contradiction {
    /// Tightening a bound of the given domain would have made it empty.
    EmptyDomain(DomainId),
    /// A constraint detected an infeasible state without emptying a domain.
    Conflict(&'static str),
}

/// Returned by the variable store when a bound update would leave a domain without values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EmptyDomain(pub(crate) DomainId);

impl From<EmptyDomain> for Contradiction {
    fn from(empty_domain: EmptyDomain) -> Self {
        Contradiction::EmptyDomain(empty_domain.0)
    }
}
