//! The variable factory: lazily created, cached MILP variables keyed by a
//! typed `VarKey`, not by the formatted string name. Names are only
//! generated when handing a variable to the oracle (SPEC_FULL.md §4.3, §9).

use std::collections::HashMap;

use good_lp::{ProblemVariables, Variable, VariableDefinition};

use crate::domain::{Domain, PersonId, Slot, TalkId, VenueId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VarKey {
    Start(Slot, TalkId, VenueId),
    Active(Slot, TalkId, VenueId),
    Attend(TalkId, PersonId),
    AttendAt(Slot, TalkId, PersonId),
    DistanceV(TalkId, TalkId),
    AbsDistanceV(TalkId, TalkId),
    AdjacentOrBeforeV(TalkId, TalkId, VenueId),
    AdjacentV(TalkId, TalkId, VenueId),
}

impl VarKey {
    pub fn name(&self) -> String {
        match self {
            VarKey::Start(s, t, v) => format!("START_{s}_{t}_{v}"),
            VarKey::Active(s, t, v) => format!("ACTIVE_{s}_{t}_{v}"),
            VarKey::Attend(t, p) => format!("ATTEND_{t}_{p}"),
            VarKey::AttendAt(s, t, p) => format!("ATTEND_AT_{s}_{t}_{p}"),
            VarKey::DistanceV(t1, t2) => format!("DISTANCE_V_{t1}_{t2}"),
            VarKey::AbsDistanceV(t1, t2) => format!("ABS_DISTANCE_V_{t1}_{t2}"),
            VarKey::AdjacentOrBeforeV(t1, t2, v) => format!("ADJACENT_OR_BEFORE_V_{t1}_{t2}_{v}"),
            VarKey::AdjacentV(t1, t2, v) => format!("ADJACENT_V_{t1}_{t2}_{v}"),
        }
    }
}

/// Owns the `good_lp` variable pool and the typed cache over it. Forced-zero
/// variables are still created (pinned to an upper bound of zero) rather
/// than omitted, so constraint expressions referencing them stay
/// well-formed (SPEC_FULL.md §4.3).
pub struct VariableFactory {
    pool: ProblemVariables,
    cache: HashMap<VarKey, Variable>,
}

impl VariableFactory {
    pub fn new() -> Self {
        Self {
            pool: ProblemVariables::new(),
            cache: HashMap::new(),
        }
    }

    fn get_or_insert(&mut self, key: VarKey, def: VariableDefinition) -> Variable {
        if let Some(v) = self.cache.get(&key) {
            return *v;
        }
        let var = self.pool.add(def);
        self.cache.insert(key, var);
        var
    }

    pub fn binary(&mut self, key: VarKey) -> Variable {
        let def = VariableDefinition::new().binary().name(key.name());
        self.get_or_insert(key, def)
    }

    pub fn binary_forced_zero(&mut self, key: VarKey) -> Variable {
        let def = VariableDefinition::new()
            .integer()
            .min(0.0)
            .max(0.0)
            .name(key.name());
        self.get_or_insert(key, def)
    }

    pub fn integer(&mut self, key: VarKey, min: f64, max: f64) -> Variable {
        let def = VariableDefinition::new()
            .integer()
            .min(min)
            .max(max)
            .name(key.name());
        self.get_or_insert(key, def)
    }

    /// Hands the accumulated `good_lp` variable pool to the caller (who
    /// needs to own it to build a solver model) while keeping the
    /// `VarKey` -> `Variable` cache in place - `Variable` handles stay
    /// valid regardless of which `ProblemVariables` they came from, so the
    /// same `ModelContext` can keep answering `start`/`active`/... lookups
    /// for the result projector after the pool has been taken.
    pub fn take_pool(&mut self) -> ProblemVariables {
        std::mem::replace(&mut self.pool, ProblemVariables::new())
    }
}

impl Default for VariableFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// A big-M bound tight enough for decent LP relaxation but loose enough to
/// never bind a legitimate assignment: the longest possible horizon plus the
/// longest talk (SPEC_FULL.md §9).
pub fn big_m(domain: &Domain) -> i64 {
    let max_slot = domain.slots_available.iter().copied().max().unwrap_or(0);
    let max_duration = domain
        .talks_by_id
        .values()
        .map(|t| t.duration)
        .max()
        .unwrap_or(0);
    max_slot + max_duration
}

/// Bundles the domain and the variable factory together; every
/// variable-template accessor lives here so constraint/objective building
/// never has to re-derive pruning rules.
pub struct ModelContext<'d> {
    pub domain: &'d Domain,
    pub factory: VariableFactory,
    pub big_m: i64,
}

impl<'d> ModelContext<'d> {
    pub fn new(domain: &'d Domain) -> Self {
        Self {
            big_m: big_m(domain),
            domain,
            factory: VariableFactory::new(),
        }
    }

    fn talk_duration(&self, t: TalkId) -> i64 {
        self.domain.talks_by_id.get(&t).map(|talk| talk.duration).unwrap_or(0)
    }

    pub fn start(&mut self, s: Slot, t: TalkId, v: VenueId) -> Variable {
        let duration = self.talk_duration(t);
        let key = VarKey::Start(s, t, v);
        if self.domain.interval_available(s, duration) {
            self.factory.binary(key)
        } else {
            self.factory.binary_forced_zero(key)
        }
    }

    pub fn active(&mut self, s: Slot, t: TalkId, v: VenueId) -> Variable {
        let key = VarKey::Active(s, t, v);
        let perm = self.domain.talk_permissions.get(&t);
        let ok = perm.map(|p| p.slots.contains(&s) && p.venues.contains(&v)).unwrap_or(false);
        if ok {
            self.factory.binary(key)
        } else {
            self.factory.binary_forced_zero(key)
        }
    }

    pub fn attend(&mut self, t: TalkId, p: PersonId) -> Variable {
        self.factory.binary(VarKey::Attend(t, p))
    }

    pub fn attend_at(&mut self, s: Slot, t: TalkId, p: PersonId) -> Variable {
        let key = VarKey::AttendAt(s, t, p);
        let person_ok = self
            .domain
            .people_by_id
            .get(&p)
            .map(|person| person.slots.contains(&s))
            .unwrap_or(false);
        if person_ok {
            self.factory.binary(key)
        } else {
            self.factory.binary_forced_zero(key)
        }
    }

    pub fn distance_v(&mut self, t1: TalkId, t2: TalkId) -> Variable {
        let bound = self.big_m as f64;
        self.factory
            .integer(VarKey::DistanceV(t1, t2), -bound, bound)
    }

    pub fn abs_distance_v(&mut self, t1: TalkId, t2: TalkId) -> Variable {
        let key = VarKey::AbsDistanceV(t1, t2);
        if t1 == t2 {
            self.factory.binary_forced_zero(key)
        } else {
            self.factory.integer(key, 0.0, self.big_m as f64)
        }
    }

    pub fn adjacent_or_before_v(&mut self, t1: TalkId, t2: TalkId, v: VenueId) -> Variable {
        self.factory.binary(VarKey::AdjacentOrBeforeV(t1, t2, v))
    }

    pub fn adjacent_v(&mut self, t1: TalkId, t2: TalkId, v: VenueId) -> Variable {
        self.factory.binary(VarKey::AdjacentV(t1, t2, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Descriptor, PersonRecord, TalkRecord, TimeRange, VenueRecord};
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap as Map;

    fn range(sh: u32, eh: u32) -> TimeRange {
        TimeRange {
            start: Utc.with_ymd_and_hms(2026, 7, 27, sh, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 7, 27, eh, 0, 0).unwrap(),
        }
    }

    fn domain() -> Domain {
        let descriptor = Descriptor {
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
                preferences: Map::new(),
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
                similarities: Map::new(),
                spacing_slots: 0,
                slot: None,
                time: None,
                end_time: None,
                venue: None,
                attendees: vec![],
                partial_attendees: vec![],
            }],
        };
        Domain::load(&descriptor).unwrap()
    }

    #[test]
    fn start_is_cached() {
        let d = domain();
        let mut ctx = ModelContext::new(&d);
        let a = ctx.start(0, 1, 1);
        let b = ctx.start(0, 1, 1);
        assert_eq!(a, b);
    }

    #[test]
    fn start_past_available_slots_is_still_cached_consistently() {
        let d = domain();
        let mut ctx = ModelContext::new(&d);
        // A 6-slot talk starting at slot 11 would run past the 12 available
        // slots (0..=11); the variable is pinned to zero, not omitted, but
        // the cache key still resolves to the same handle on repeat lookup.
        let a = ctx.start(11, 1, 1);
        let b = ctx.start(11, 1, 1);
        assert_eq!(a, b);
    }
}
