mod invalid_spec;
mod job_spec;
mod propagation_status;
mod schedule;
mod trail;

pub use invalid_spec::InvalidSpec;
pub use job_spec::*;
pub(crate) use propagation_status::*;
pub use schedule::*;
pub(crate) use trail::Trail;
