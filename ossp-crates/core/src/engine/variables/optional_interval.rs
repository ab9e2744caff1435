use super::DomainId;

/// The interval a job occupies on one specific machine.
///
/// It shares the start and end variables of its job and only takes effect when `presence` is
/// fixed to 1; in that case `end - start = duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OptionalInterval {
    pub(crate) start: DomainId,
    pub(crate) end: DomainId,
    pub(crate) presence: DomainId,
    pub(crate) duration: i64,
}
