//! Descriptor parsing and the derived, solve-ready domain model.
//!
//! [`Descriptor`] mirrors the external JSON shape (SPEC_FULL.md §6) almost
//! verbatim. [`Domain::load`] turns it into [`Talk`]/[`Person`]/[`Venue`]
//! records expressed in slots rather than wall-clock ranges, plus the
//! indexes the rest of the crate relies on. Every index is an `IndexMap` so
//! that iterating it replays descriptor order - this is what makes variable
//! and constraint creation order reproducible without threading an ordinal
//! through every loop (SPEC_FULL.md §3, §5).

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::time;

pub type TalkId = i64;
pub type PersonId = i64;
pub type VenueId = i64;
pub type LanguageId = i64;
pub type Slot = i64;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LanguageRecord {
    pub id: LanguageId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VenueRecord {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub capacity: Option<i64>,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PersonRecord {
    pub id: PersonId,
    pub name: String,
    #[serde(default)]
    pub attending: i64,
    #[serde(default)]
    pub time_ranges: Vec<TimeRange>,
    #[serde(default)]
    pub preferred_time_ranges: Vec<TimeRange>,
    #[serde(default)]
    pub preferences: HashMap<TalkId, i64>,
    #[serde(default)]
    pub languages: Vec<LanguageId>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TalkRecord {
    pub id: TalkId,
    /// Declared duration, minutes. Authoritative (see `durations` below).
    pub duration: i64,
    /// Alternate permitted durations. Declared by the descriptor but not
    /// enforced by this core - `duration` is authoritative (SPEC_FULL.md §9).
    #[serde(default)]
    pub durations: Vec<i64>,
    pub valid_venues: Vec<VenueId>,
    #[serde(default)]
    pub preferred_venues: Vec<VenueId>,
    pub time_ranges: Vec<TimeRange>,
    #[serde(default)]
    pub preferred_time_ranges: Vec<TimeRange>,
    pub speakers: Vec<String>,
    #[serde(default)]
    pub plenary: bool,
    #[serde(default)]
    pub irl_only: bool,
    #[serde(default)]
    pub invite_only: bool,
    #[serde(default)]
    pub meetup: bool,
    #[serde(default)]
    pub rest: bool,
    #[serde(default)]
    pub before_rest: bool,
    #[serde(default)]
    pub after_rest: bool,
    #[serde(default)]
    pub prereqs: Vec<TalkId>,
    #[serde(default)]
    pub languages: Vec<LanguageId>,
    #[serde(default)]
    pub similarities: HashMap<TalkId, i64>,
    #[serde(default)]
    pub spacing_slots: i64,

    // Output fields: absent on input, populated by the result projector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<Slot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<VenueId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<PersonId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub partial_attendees: Vec<PersonId>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Descriptor {
    #[serde(default)]
    pub languages: Vec<LanguageRecord>,
    pub venues: Vec<VenueRecord>,
    pub people: Vec<PersonRecord>,
    pub talks: Vec<TalkRecord>,
}

/// A talk expressed in slot units, ready for variable/constraint building.
#[derive(Debug, Clone)]
pub struct Talk {
    pub id: TalkId,
    pub duration: i64,
    pub slots: Vec<Slot>,
    pub venues: Vec<VenueId>,
    pub preferred_slots: Vec<Slot>,
    pub preferred_venues: Vec<VenueId>,
    pub speakers: Vec<PersonId>,
    pub plenary: bool,
    pub irl_only: bool,
    pub invite_only: bool,
    pub meetup: bool,
    pub rest: bool,
    pub before_rest: bool,
    pub after_rest: bool,
    pub prereqs: Vec<TalkId>,
    pub similarities: HashMap<TalkId, i64>,
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub slots: Vec<Slot>,
    pub preferred_slots: Vec<Slot>,
    pub preferences: HashMap<TalkId, i64>,
    pub attending: bool,
}

#[derive(Debug, Clone)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub capacity: Option<i64>,
    pub slots: Vec<Slot>,
    pub slots_set: HashSet<Slot>,
}

/// Per-talk permitted (slot, venue) sets, derived once at load time.
#[derive(Debug, Clone, Default)]
pub struct TalkPermission {
    pub slots: HashSet<Slot>,
    pub venues: HashSet<VenueId>,
}

#[derive(Debug, Clone)]
pub struct Domain {
    pub event_start: DateTime<Utc>,
    pub talks_by_id: IndexMap<TalkId, Talk>,
    pub people_by_id: IndexMap<PersonId, Person>,
    pub people_by_name: IndexMap<String, PersonId>,
    pub venues_by_id: IndexMap<VenueId, Venue>,
    pub languages_by_id: IndexMap<LanguageId, LanguageRecord>,
    pub talk_permissions: IndexMap<TalkId, TalkPermission>,
    pub talks_by_speaker: IndexMap<PersonId, Vec<TalkId>>,
    pub slots_available: Vec<Slot>,
    pub slots_available_set: HashSet<Slot>,
}

fn sorted_dedup(mut v: Vec<i64>) -> Vec<i64> {
    v.sort_unstable();
    v.dedup();
    v
}

impl Domain {
    /// Parses and derives everything this crate needs from a raw descriptor.
    /// Fails with [`Error::BadDescriptor`] on any dangling reference or
    /// structurally impossible record.
    pub fn load(descriptor: &Descriptor) -> Result<Domain> {
        let event_start = descriptor
            .talks
            .iter()
            .flat_map(|t| t.time_ranges.iter())
            .map(|r| r.start)
            .min()
            .ok_or_else(|| Error::bad_descriptor("no talks with time ranges; cannot derive event_start"))?;

        let mut people_by_id = IndexMap::new();
        let mut people_by_name = IndexMap::new();
        for p in &descriptor.people {
            if people_by_name.insert(p.name.clone(), p.id).is_some() {
                return Err(Error::bad_descriptor(format!(
                    "duplicate person name: {}",
                    p.name
                )));
            }
            let slots = sorted_dedup(
                p.time_ranges
                    .iter()
                    .flat_map(|r| time::calculate_slots(event_start, r.start, r.end, 0))
                    .collect(),
            );
            let preferred_slots = sorted_dedup(
                p.preferred_time_ranges
                    .iter()
                    .flat_map(|r| time::calculate_slots(event_start, r.start, r.end, 0))
                    .collect(),
            );
            people_by_id.insert(
                p.id,
                Person {
                    id: p.id,
                    name: p.name.clone(),
                    slots,
                    preferred_slots,
                    preferences: p.preferences.clone(),
                    attending: p.attending != 0,
                },
            );
        }

        let mut venues_by_id = IndexMap::new();
        for v in &descriptor.venues {
            let slots = sorted_dedup(
                v.time_ranges
                    .iter()
                    .flat_map(|r| time::calculate_slots(event_start, r.start, r.end, 0))
                    .collect(),
            );
            let slots_set: HashSet<Slot> = slots.iter().copied().collect();
            venues_by_id.insert(
                v.id,
                Venue {
                    id: v.id,
                    name: v.name.clone(),
                    capacity: v.capacity,
                    slots,
                    slots_set,
                },
            );
        }

        let mut languages_by_id = IndexMap::new();
        for l in &descriptor.languages {
            languages_by_id.insert(l.id, l.clone());
        }

        let known_talk_ids: HashSet<TalkId> = descriptor.talks.iter().map(|t| t.id).collect();

        let mut talks_by_id = IndexMap::new();
        for t in &descriptor.talks {
            if t.time_ranges.is_empty() {
                return Err(Error::bad_descriptor(format!(
                    "talk {} has no time_ranges",
                    t.id
                )));
            }
            if t.valid_venues.is_empty() {
                return Err(Error::bad_descriptor(format!(
                    "talk {} has no valid_venues",
                    t.id
                )));
            }
            for v in &t.valid_venues {
                if !venues_by_id.contains_key(v) {
                    return Err(Error::bad_descriptor(format!(
                        "talk {} references unknown venue {}",
                        t.id, v
                    )));
                }
            }
            for prereq in &t.prereqs {
                if !known_talk_ids.contains(prereq) {
                    return Err(Error::bad_descriptor(format!(
                        "talk {} has unknown prereq {}",
                        t.id, prereq
                    )));
                }
            }
            for sim in t.similarities.keys() {
                if !known_talk_ids.contains(sim) {
                    return Err(Error::bad_descriptor(format!(
                        "talk {} references unknown similarity target {}",
                        t.id, sim
                    )));
                }
            }

            let mut speakers = Vec::with_capacity(t.speakers.len());
            for name in &t.speakers {
                let pid = people_by_name.get(name).copied().ok_or_else(|| {
                    Error::bad_descriptor(format!("talk {} has unknown speaker {name:?}", t.id))
                })?;
                speakers.push(pid);
            }

            let duration_slots = (t.duration + time::SLOT_MINUTES - 1) / time::SLOT_MINUTES;
            let spacing = if t.spacing_slots > 0 { t.spacing_slots } else { 0 };
            let slots = sorted_dedup(
                t.time_ranges
                    .iter()
                    .flat_map(|r| time::calculate_slots(event_start, r.start, r.end, spacing))
                    .collect(),
            );
            let preferred_slots = sorted_dedup(
                t.preferred_time_ranges
                    .iter()
                    .flat_map(|r| time::calculate_slots(event_start, r.start, r.end, 0))
                    .collect(),
            );

            talks_by_id.insert(
                t.id,
                Talk {
                    id: t.id,
                    duration: duration_slots,
                    slots,
                    venues: t.valid_venues.clone(),
                    preferred_slots,
                    preferred_venues: t.preferred_venues.clone(),
                    speakers,
                    plenary: t.plenary,
                    irl_only: t.irl_only,
                    invite_only: t.invite_only,
                    meetup: t.meetup,
                    rest: t.rest,
                    before_rest: t.before_rest,
                    after_rest: t.after_rest,
                    prereqs: t.prereqs.clone(),
                    similarities: t.similarities.clone(),
                },
            );
        }

        let mut talk_permissions = IndexMap::new();
        let mut talks_by_speaker: IndexMap<PersonId, Vec<TalkId>> = IndexMap::new();
        let mut slots_available: HashSet<Slot> = HashSet::new();
        for talk in talks_by_id.values() {
            talk_permissions.insert(
                talk.id,
                TalkPermission {
                    slots: talk.slots.iter().copied().collect(),
                    venues: talk.venues.iter().copied().collect(),
                },
            );
            slots_available.extend(talk.slots.iter().copied());
            for &speaker in &talk.speakers {
                talks_by_speaker.entry(speaker).or_default().push(talk.id);
            }
        }
        let mut slots_available_sorted: Vec<Slot> = slots_available.iter().copied().collect();
        slots_available_sorted.sort_unstable();

        Ok(Domain {
            event_start,
            talks_by_id,
            people_by_id,
            people_by_name,
            venues_by_id,
            languages_by_id,
            talk_permissions,
            talks_by_speaker,
            slots_available: slots_available_sorted,
            slots_available_set: slots_available,
        })
    }

    /// True iff `[s, s + duration)` is fully contained in `slots_available`.
    pub fn interval_available(&self, s: Slot, duration: i64) -> bool {
        (s..s + duration).all(|slot| self.slots_available_set.contains(&slot))
    }
}
