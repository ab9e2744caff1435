use enumset::enum_set;
use enumset::EnumSet;
use enumset::EnumSetType;

/// A change to the bounds of a domain which constraints can subscribe to.
#[derive(Debug, EnumSetType, Hash)]
pub(crate) enum DomainEvent {
    /// The domain collapsed to a single value.
    Assign,
    /// The lower bound of the domain was tightened.
    LowerBound,
    /// The upper bound of the domain was tightened.
    UpperBound,
}

impl DomainEvent {
    /// Both bound events; assignment always comes with one of them.
    pub(crate) const BOUNDS: EnumSet<DomainEvent> =
        enum_set!(DomainEvent::LowerBound | DomainEvent::UpperBound);
    pub(crate) const UPPER_BOUND: EnumSet<DomainEvent> = enum_set!(DomainEvent::UpperBound);
    pub(crate) const ASSIGN: EnumSet<DomainEvent> = enum_set!(DomainEvent::Assign);
}

impl std::fmt::Display for DomainEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainEvent::Assign => write!(f, "[Event:Assign]"),
            DomainEvent::LowerBound => write!(f, "[Event:LB]"),
            DomainEvent::UpperBound => write!(f, "[Event:UB]"),
        }
    }
}
