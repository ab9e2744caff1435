use enumset::EnumSet;
use fnv::FnvHashSet;
use log::debug;

use super::variables::DomainId;
use super::variables::OptionalInterval;
use super::DomainEvent;
use crate::basic_types::EmptyDomain;
use crate::basic_types::InvalidSpec;
use crate::basic_types::JobSpec;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::ossp_assert_moderate;
use crate::ossp_assert_simple;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    lower_bound: i64,
    upper_bound: i64,
}

#[derive(Debug, Clone, Copy)]
struct TrailEntry {
    domain: DomainId,
    previous: Bounds,
}

/// The decision variables of a single job.
#[derive(Debug, Clone)]
pub(crate) struct JobVariables {
    pub(crate) spec: JobSpec,
    pub(crate) start: DomainId,
    pub(crate) end: DomainId,
    pub(crate) lateness: DomainId,
    /// One 0/1 flag per machine, indexed by machine.
    pub(crate) presence: Vec<DomainId>,
    /// One optional interval per machine, indexed by machine.
    pub(crate) intervals: Vec<OptionalInterval>,
    /// A 0/1 search-only flag which is set once the job has been given its position in the
    /// sequence of its machine.
    pub(crate) sequenced: DomainId,
}

impl JobVariables {
    /// The machine whose presence flag is fixed to 1, if any.
    pub(crate) fn assigned_machine(&self, store: &VariableStore) -> Option<usize> {
        self.presence
            .iter()
            .position(|&flag| store.lower_bound(flag) == 1)
    }

    pub(crate) fn is_sequenced(&self, store: &VariableStore) -> bool {
        store.lower_bound(self.sequenced) == 1
    }
}

/// Holds the bounds of every integer domain together with the trail that allows restoring them
/// when the search backtracks.
///
/// Domains are intervals `[lower_bound, upper_bound]`, values only ever narrow between
/// checkpoints. Every change is recorded as a [`DomainEvent`] which the propagation engine drains
/// to decide which constraints to run.
#[derive(Debug, Default)]
pub(crate) struct VariableStore {
    domains: KeyedVec<DomainId, Bounds>,
    names: KeyedVec<DomainId, String>,
    trail: Trail<TrailEntry>,
    events: Vec<(DomainId, EnumSet<DomainEvent>)>,

    jobs: Vec<JobVariables>,
    machine_count: usize,
    horizon: i64,
    objective: Option<DomainId>,
}

impl VariableStore {
    /// Validates the jobs and creates all of their decision variables.
    ///
    /// On failure nothing is created.
    pub(crate) fn create(
        jobs: &[JobSpec],
        machine_count: usize,
    ) -> Result<VariableStore, InvalidSpec> {
        let horizon = validate(jobs, machine_count)?;

        let mut store = VariableStore {
            machine_count,
            horizon,
            ..Default::default()
        };

        let mut objective_upper_bound: i64 = 0;

        for spec in jobs {
            let lateness_upper_bound = horizon
                .checked_add(0_i64.saturating_sub(spec.limit).max(0))
                .ok_or(InvalidSpec::HorizonOverflow)?;
            objective_upper_bound = objective_upper_bound
                .checked_add(lateness_upper_bound)
                .ok_or(InvalidSpec::HorizonOverflow)?;

            if spec.limit < spec.release + spec.duration {
                debug!(
                    "Job {} finishes at least {} time units after its limit",
                    spec.job_id,
                    spec.release + spec.duration - spec.limit
                );
            }

            let id = spec.job_id;
            let start = store.new_variable(0, horizon, format!("job_start_{id}"));
            let end = store.new_variable(0, horizon, format!("job_end_{id}"));
            let lateness =
                store.new_variable(0, lateness_upper_bound, format!("job_lateness_{id}"));

            let presence = (0..machine_count)
                .map(|machine| store.new_variable(0, 1, format!("machine_{machine}_job_{id}")))
                .collect::<Vec<_>>();
            let intervals = presence
                .iter()
                .map(|&presence| OptionalInterval {
                    start,
                    end,
                    presence,
                    duration: spec.duration,
                })
                .collect();

            let sequenced = store.new_variable(0, 1, format!("job_sequenced_{id}"));

            store.jobs.push(JobVariables {
                spec: spec.clone(),
                start,
                end,
                lateness,
                presence,
                intervals,
                sequenced,
            });
        }

        store.objective = Some(store.new_variable(0, objective_upper_bound, "objective".into()));

        Ok(store)
    }

    pub(crate) fn new_variable(
        &mut self,
        lower_bound: i64,
        upper_bound: i64,
        name: String,
    ) -> DomainId {
        ossp_assert_simple!(lower_bound <= upper_bound);
        ossp_assert_simple!(
            self.trail.get_checkpoint() == 0,
            "variables can only be created at the root"
        );

        let _ = self.names.push(name);
        self.domains.push(Bounds {
            lower_bound,
            upper_bound,
        })
    }

    pub(crate) fn jobs(&self) -> &[JobVariables] {
        &self.jobs
    }

    pub(crate) fn machine_count(&self) -> usize {
        self.machine_count
    }

    pub(crate) fn horizon(&self) -> i64 {
        self.horizon
    }

    /// The variable holding the objective value.
    pub(crate) fn objective(&self) -> DomainId {
        self.objective
            .unwrap_or_else(|| panic!("the objective is created together with the jobs"))
    }

    pub(crate) fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub(crate) fn name(&self, domain: DomainId) -> &str {
        &self.names[domain]
    }

    pub(crate) fn lower_bound(&self, domain: DomainId) -> i64 {
        self.domains[domain].lower_bound
    }

    pub(crate) fn upper_bound(&self, domain: DomainId) -> i64 {
        self.domains[domain].upper_bound
    }

    pub(crate) fn is_fixed(&self, domain: DomainId) -> bool {
        self.lower_bound(domain) == self.upper_bound(domain)
    }

    /// Raises the lower bound of `domain` to `value`.
    ///
    /// Returns whether the domain changed; a value below the current lower bound is ignored.
    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain: DomainId,
        value: i64,
    ) -> Result<bool, EmptyDomain> {
        let bounds = self.domains[domain];
        if value <= bounds.lower_bound {
            return Ok(false);
        }
        if value > bounds.upper_bound {
            return Err(EmptyDomain(domain));
        }

        self.update(
            domain,
            Bounds {
                lower_bound: value,
                upper_bound: bounds.upper_bound,
            },
            DomainEvent::LowerBound,
        );
        Ok(true)
    }

    /// Lowers the upper bound of `domain` to `value`.
    ///
    /// Returns whether the domain changed; a value above the current upper bound is ignored.
    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain: DomainId,
        value: i64,
    ) -> Result<bool, EmptyDomain> {
        let bounds = self.domains[domain];
        if value >= bounds.upper_bound {
            return Ok(false);
        }
        if value < bounds.lower_bound {
            return Err(EmptyDomain(domain));
        }

        self.update(
            domain,
            Bounds {
                lower_bound: bounds.lower_bound,
                upper_bound: value,
            },
            DomainEvent::UpperBound,
        );
        Ok(true)
    }

    pub(crate) fn fix(&mut self, domain: DomainId, value: i64) -> Result<bool, EmptyDomain> {
        let raised = self.tighten_lower_bound(domain, value)?;
        let lowered = self.tighten_upper_bound(domain, value)?;
        Ok(raised || lowered)
    }

    fn update(&mut self, domain: DomainId, new_bounds: Bounds, event: DomainEvent) {
        ossp_assert_moderate!(new_bounds.lower_bound <= new_bounds.upper_bound);

        self.trail.push(TrailEntry {
            domain,
            previous: self.domains[domain],
        });
        self.domains[domain] = new_bounds;

        let mut events = EnumSet::only(event);
        if new_bounds.lower_bound == new_bounds.upper_bound {
            let _ = events.insert(DomainEvent::Assign);
        }
        self.events.push((domain, events));
    }

    pub(crate) fn new_checkpoint(&mut self) {
        self.trail.new_checkpoint();
    }

    pub(crate) fn get_checkpoint(&self) -> usize {
        self.trail.get_checkpoint()
    }

    /// Restores every domain to the state it had when `checkpoint` was the current checkpoint.
    ///
    /// Pending events are discarded since they describe changes which no longer exist.
    pub(crate) fn synchronise(&mut self, checkpoint: usize) {
        if checkpoint >= self.trail.get_checkpoint() {
            return;
        }

        for entry in self.trail.synchronise(checkpoint) {
            self.domains[entry.domain] = entry.previous;
        }
        self.events.clear();
    }

    /// Hands out the events recorded since the last call, in the order they happened.
    pub(crate) fn drain_events(&mut self) -> std::vec::Drain<'_, (DomainId, EnumSet<DomainEvent>)> {
        self.events.drain(..)
    }

    pub(crate) fn clear_events(&mut self) {
        self.events.clear();
    }
}

/// Checks the input and computes the scheduling horizon, `max(release) + sum(duration)`.
///
/// Any schedule which starts every job no earlier than its release and leaves no machine idle
/// after the last release completes within this horizon. The propagators add a duration to a
/// bound inside `[0, horizon]`, so `horizon + max(duration)` has to fit in an `i64` as well.
fn validate(jobs: &[JobSpec], machine_count: usize) -> Result<i64, InvalidSpec> {
    if machine_count == 0 {
        return Err(InvalidSpec::NoMachines);
    }

    let mut seen_ids = FnvHashSet::default();
    let mut total_duration: i64 = 0;
    let mut latest_release: i64 = 0;
    let mut longest_duration: i64 = 0;

    for job in jobs {
        if job.duration <= 0 {
            return Err(InvalidSpec::NonPositiveDuration {
                job_id: job.job_id,
                duration: job.duration,
            });
        }
        if job.release < 0 {
            return Err(InvalidSpec::NegativeRelease {
                job_id: job.job_id,
                release: job.release,
            });
        }
        if !seen_ids.insert(job.job_id) {
            return Err(InvalidSpec::DuplicateJobId(job.job_id));
        }

        total_duration = total_duration
            .checked_add(job.duration)
            .ok_or(InvalidSpec::HorizonOverflow)?;
        latest_release = latest_release.max(job.release);
        longest_duration = longest_duration.max(job.duration);
    }

    let horizon = latest_release
        .checked_add(total_duration)
        .ok_or(InvalidSpec::HorizonOverflow)?;
    let _ = horizon
        .checked_add(longest_duration)
        .ok_or(InvalidSpec::HorizonOverflow)?;

    Ok(horizon)
}
