//! The result projector (SPEC_FULL.md §4.7): reads a solved variable
//! valuation back into annotated talk records.

use std::collections::HashMap;

use good_lp::Variable;

use crate::domain::{Domain, PersonId, TalkId, TalkRecord, VenueId};
use crate::time;
use crate::variables::ModelContext;

const TRUTHY: f64 = 0.5;

fn is_set(values: &HashMap<Variable, f64>, var: Variable) -> bool {
    values.get(&var).copied().unwrap_or(0.0) >= TRUTHY
}

/// Projects a solved valuation onto the original talk records, filling in
/// `slot`, `time`, `end_time`, `venue`, `attendees`, and `partial_attendees`.
pub fn project(
    domain: &Domain,
    ctx: &mut ModelContext,
    values: &HashMap<Variable, f64>,
    talks: &mut [TalkRecord],
) {
    let person_ids: Vec<PersonId> = domain.people_by_id.keys().copied().collect();

    for talk_record in talks.iter_mut() {
        let t: TalkId = talk_record.id;
        let perm = domain.talk_permissions[&t].clone();
        let mut placement: Option<(i64, VenueId)> = None;
        'search: for &s in &perm.slots {
            for &v in &perm.venues {
                let start = ctx.start(s, t, v);
                if is_set(values, start) {
                    placement = Some((s, v));
                    break 'search;
                }
            }
        }
        let Some((slot, venue)) = placement else {
            continue;
        };
        let duration = domain.talks_by_id[&t].duration;

        talk_record.slot = Some(slot);
        talk_record.time = Some(time::slot_to_time(domain.event_start, slot));
        talk_record.end_time = Some(time::slot_to_time(domain.event_start, slot + duration));
        talk_record.venue = Some(venue);

        let mut attendees: Vec<PersonId> = Vec::new();
        let mut partial_attendees: Vec<PersonId> = Vec::new();
        for &p in &person_ids {
            let attend = ctx.attend(t, p);
            if is_set(values, attend) {
                attendees.push(p);
            }
            let mut attended_any = false;
            for offset in 0..duration {
                let attend_at = ctx.attend_at(slot + offset, t, p);
                if is_set(values, attend_at) {
                    attended_any = true;
                    break;
                }
            }
            if attended_any && !attendees.contains(&p) {
                partial_attendees.push(p);
            }
        }
        talk_record.attendees = attendees;
        talk_record.partial_attendees = partial_attendees;
    }
}
