mod domain_id;
mod optional_interval;

pub(crate) use domain_id::DomainId;
pub(crate) use optional_interval::OptionalInterval;
