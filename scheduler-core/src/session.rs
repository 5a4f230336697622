//! [`Session`]: the single-use owner of one solve, end to end
//! (SPEC_FULL.md §3, §5). Construct one per descriptor, call
//! [`Session::schedule`] exactly once.

use tracing::instrument;

use crate::constraints;
use crate::domain::{Descriptor, Domain, TalkRecord};
use crate::error::{Error, Result};
use crate::objective;
use crate::project;
use crate::solve::{self, HighsOracle, MilpOracle};
use crate::types::SolverConfig;
use crate::variables::ModelContext;

pub struct Session {
    domain: Domain,
    solved: bool,
}

impl Session {
    /// Loads and validates a descriptor. Fails with [`Error::BadDescriptor`]
    /// before any MILP machinery is touched.
    pub fn new(descriptor: &Descriptor) -> Result<Self> {
        let domain = Domain::load(descriptor)?;
        Ok(Self {
            domain,
            solved: false,
        })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Builds the model, solves it, and annotates `talks` in place with the
    /// chosen slot/venue/time/attendance for every talk. Consumes the
    /// session's single-use guard - a second call returns
    /// [`Error::AlreadySolved`].
    #[instrument(skip(self, talks, config))]
    pub fn schedule(&mut self, talks: &mut [TalkRecord], config: &SolverConfig) -> Result<()> {
        self.schedule_with(&HighsOracle, talks, config)
    }

    /// Same as [`Session::schedule`] but against a caller-supplied oracle -
    /// primarily useful for tests that want a deterministic stub.
    pub fn schedule_with(
        &mut self,
        oracle: &dyn MilpOracle,
        talks: &mut [TalkRecord],
        config: &SolverConfig,
    ) -> Result<()> {
        if self.solved {
            return Err(Error::AlreadySolved);
        }

        let mut ctx = ModelContext::new(&self.domain);
        tracing::info!(
            talks = self.domain.talks_by_id.len(),
            people = self.domain.people_by_id.len(),
            venues = self.domain.venues_by_id.len(),
            "assembling model"
        );
        let hard_constraints = constraints::build_all(&mut ctx);
        let obj = objective::build(&mut ctx);
        tracing::info!(constraints = hard_constraints.len(), "model assembled");

        let pool = ctx.factory.take_pool();
        let values = solve::drive(oracle, pool, obj, hard_constraints, config)?;

        // Reuse the same context (and its Variable cache) for projection -
        // a fresh ModelContext would hand out different Variable handles
        // that wouldn't match the keys in `values`.
        project::project(&self.domain, &mut ctx, &values, talks);

        self.solved = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PersonRecord, TimeRange, VenueRecord};
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;

    fn range(sh: u32, eh: u32) -> TimeRange {
        TimeRange {
            start: Utc.with_ymd_and_hms(2026, 7, 27, sh, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 7, 27, eh, 0, 0).unwrap(),
        }
    }

    fn single_talk_descriptor() -> Descriptor {
        Descriptor {
            languages: vec![],
            venues: vec![VenueRecord {
                id: 1,
                name: "Main".into(),
                capacity: None,
                time_ranges: vec![range(9, 10)],
            }],
            people: vec![PersonRecord {
                id: 1,
                name: "alice".into(),
                attending: 1,
                time_ranges: vec![range(9, 10)],
                preferred_time_ranges: vec![],
                preferences: HashMap::new(),
                languages: vec![],
            }],
            talks: vec![TalkRecord {
                id: 1,
                duration: 30,
                durations: vec![],
                valid_venues: vec![1],
                preferred_venues: vec![],
                time_ranges: vec![range(9, 10)],
                preferred_time_ranges: vec![],
                speakers: vec!["alice".into()],
                plenary: false,
                irl_only: false,
                invite_only: false,
                meetup: false,
                rest: false,
                before_rest: false,
                after_rest: false,
                prereqs: vec![],
                languages: vec![],
                similarities: HashMap::new(),
                spacing_slots: 0,
                slot: None,
                time: None,
                end_time: None,
                venue: None,
                attendees: vec![],
                partial_attendees: vec![],
            }],
        }
    }

    #[test]
    fn rejects_a_second_solve() {
        let descriptor = single_talk_descriptor();
        let mut session = Session::new(&descriptor).unwrap();
        session.solved = true;
        let mut talks = descriptor.talks.clone();
        let err = session
            .schedule(&mut talks, &SolverConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::AlreadySolved));
    }
}
