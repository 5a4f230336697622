//! The composite objective (SPEC_FULL.md §4.5): a weighted sum of adjacency,
//! attendance, preference, and placement-preference terms.

use good_lp::Expression;

use crate::domain::{PersonId, TalkId, VenueId};
use crate::variables::ModelContext;

/// Weight applied to a person's attendance of a talk at a given slot,
/// folding in invite-only status and whether the slot is one the person
/// prefers.
fn attend_weight(ctx: &ModelContext, p: PersonId, t: TalkId, s: i64) -> f64 {
    let person = &ctx.domain.people_by_id[&p];
    let talk = &ctx.domain.talks_by_id[&t];
    let base = if talk.meetup {
        *person.preferences.get(&t).unwrap_or(&0) as f64
    } else {
        *person.preferences.get(&t).unwrap_or(&1) as f64
    };
    let invite_term = if talk.invite_only { 0.0 } else { 1.0 };
    let slot_term = if person.preferred_slots.contains(&s) {
        1.0
    } else {
        0.0
    };
    base * (1.0 + invite_term + slot_term) / 14.0
}

/// Builds the full objective expression (to be maximised).
pub fn build(ctx: &mut ModelContext) -> Expression {
    let talk_ids: Vec<TalkId> = ctx.domain.talks_by_id.keys().copied().collect();
    let venue_ids: Vec<VenueId> = ctx.domain.venues_by_id.keys().copied().collect();
    let person_ids: Vec<PersonId> = ctx.domain.people_by_id.keys().copied().collect();

    let mut objective = Expression::from(0.0);

    // Content adjacency: reward scheduling similar talks back to back. Summed
    // over ordered pairs - ADJACENT_V(t1,t2,v) and ADJACENT_V(t2,t1,v) are
    // distinct variables, so a symmetric pair of mutually-similar talks
    // contributes twice (effective weight 20, not 10).
    for &t1 in &talk_ids {
        for &t2 in &talk_ids {
            if t1 == t2 {
                continue;
            }
            let sim12 = *ctx.domain.talks_by_id[&t1].similarities.get(&t2).unwrap_or(&0);
            let sim21 = *ctx.domain.talks_by_id[&t2].similarities.get(&t1).unwrap_or(&0);
            let weight = sim12.max(sim21) as f64;
            if weight == 0.0 {
                continue;
            }
            for &v in &venue_ids {
                let adj = ctx.adjacent_v(t1, t2, v);
                objective = objective + 10.0 * weight * Expression::from(adj);
            }
        }
    }

    // Raw attendance volume.
    for &t in &talk_ids {
        let slots: Vec<i64> = ctx.domain.talk_permissions[&t].slots.iter().copied().collect();
        for &p in &person_ids {
            for &s in &slots {
                let attend_at = ctx.attend_at(s, t, p);
                objective = objective + Expression::from(attend_at);
            }
        }
    }

    // Preference-weighted attendance.
    for &t in &talk_ids {
        let slots: Vec<i64> = ctx.domain.talk_permissions[&t].slots.iter().copied().collect();
        for &p in &person_ids {
            for &s in &slots {
                let w = attend_weight(ctx, p, t, s);
                if w == 0.0 {
                    continue;
                }
                let attend_at = ctx.attend_at(s, t, p);
                objective = objective + 10.0 * w * Expression::from(attend_at);
            }
        }
    }

    // Venue placement preference.
    for &t in &talk_ids {
        let preferred_venues = ctx.domain.talks_by_id[&t].preferred_venues.clone();
        if preferred_venues.is_empty() {
            continue;
        }
        let slots: Vec<i64> = ctx.domain.talk_permissions[&t].slots.iter().copied().collect();
        for &v in &preferred_venues {
            for &s in &slots {
                let active = ctx.active(s, t, v);
                objective = objective + 5.0 * Expression::from(active);
            }
        }
    }

    // Slot placement preference: the talk's own preference and its speakers'
    // are independent additive terms, so a slot that is both scores 10+5=15,
    // not a capped 10.
    for &t in &talk_ids {
        let own_slots: Vec<i64> = ctx.domain.talk_permissions[&t].slots.iter().copied().collect();
        let talk_preferred = ctx.domain.talks_by_id[&t].preferred_slots.clone();
        let mut speaker_preferred: Vec<i64> = Vec::new();
        for &speaker in &ctx.domain.talks_by_id[&t].speakers.clone() {
            speaker_preferred.extend(ctx.domain.people_by_id[&speaker].preferred_slots.iter());
        }
        speaker_preferred.sort_unstable();
        speaker_preferred.dedup();

        for &v in &venue_ids {
            for &s in own_slots.iter().filter(|s| talk_preferred.contains(s)) {
                let active = ctx.active(*s, t, v);
                objective = objective + 10.0 * Expression::from(active);
            }
            for &s in own_slots.iter().filter(|s| speaker_preferred.contains(s)) {
                let active = ctx.active(*s, t, v);
                objective = objective + 5.0 * Expression::from(active);
            }
        }
    }

    objective
}
