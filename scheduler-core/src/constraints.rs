//! The hard constraint set (SPEC_FULL.md §4.4). Every constraint carries a
//! stable name so [`crate::diagnose`] can point at it when the solve comes
//! back non-optimal.

use good_lp::Expression;

use crate::domain::{PersonId, Slot, TalkId, VenueId};
use crate::variables::ModelContext;

#[derive(Debug, Clone, Copy)]
pub enum CmpOp {
    Le,
    Ge,
    Eq,
}

/// `lhs <op> rhs`, where `lhs` carries only the variable terms and `rhs` is
/// a plain constant. Keeping the constant out of `lhs` means the
/// "valuation at an all-zero assignment" check (§4.8) reduces to comparing
/// `0` against `rhs`, with no need to introspect `good_lp`'s internals.
pub struct NamedConstraint {
    pub name: String,
    pub lhs: Expression,
    pub op: CmpOp,
    pub rhs: f64,
}

impl NamedConstraint {
    pub fn to_good_lp(&self) -> good_lp::Constraint {
        match self.op {
            CmpOp::Le => self.lhs.clone().leq(self.rhs),
            CmpOp::Ge => self.lhs.clone().geq(self.rhs),
            CmpOp::Eq => self.lhs.clone().eq(self.rhs),
        }
    }

    /// Whether this constraint is violated when every variable is zero -
    /// the diagnostic valuation used by the infeasibility reporter.
    pub fn violated_at_zero(&self) -> bool {
        const EPS: f64 = 1e-6;
        match self.op {
            CmpOp::Le => self.rhs < -EPS,
            CmpOp::Ge => self.rhs > EPS,
            CmpOp::Eq => self.rhs.abs() > EPS,
        }
    }
}

fn named(name: impl Into<String>, lhs: Expression, op: CmpOp, rhs: f64) -> NamedConstraint {
    NamedConstraint {
        name: name.into(),
        lhs,
        op,
        rhs,
    }
}

fn sum<I: IntoIterator<Item = good_lp::Variable>>(vars: I) -> Expression {
    vars.into_iter()
        .fold(Expression::from(0.0), |acc, v| acc + v)
}

/// Builds every hard constraint for the whole problem, in descriptor order.
pub fn build_all(ctx: &mut ModelContext) -> Vec<NamedConstraint> {
    let mut out = Vec::new();
    let talk_ids: Vec<TalkId> = ctx.domain.talks_by_id.keys().copied().collect();
    let venue_ids: Vec<VenueId> = ctx.domain.venues_by_id.keys().copied().collect();
    let person_ids: Vec<PersonId> = ctx.domain.people_by_id.keys().copied().collect();

    for &t in &talk_ids {
        out.push(one_start(ctx, t));
        out.push(allowed_time_place(ctx, t, &venue_ids));
        out.push(talk_not_in_bad_slots(ctx, t));
        out.push(talk_not_in_invalid_venue(ctx, t, &venue_ids));
    }

    for &v in &venue_ids {
        out.push(venue_not_in_bad_slots(ctx, v, &talk_ids));
    }

    for &t in &talk_ids {
        let perm_slots: Vec<Slot> = ctx.domain.talk_permissions[&t].slots.iter().copied().collect();
        let perm_venues: Vec<VenueId> = ctx.domain.talk_permissions[&t].venues.iter().copied().collect();
        for &v in &perm_venues {
            for &s in &perm_slots {
                out.push(contiguity(ctx, s, t, v));
            }
        }
    }

    for &v in &venue_ids {
        for &s in &ctx.domain.slots_available.clone() {
            out.push(one_active(ctx, s, v, &talk_ids));
        }
    }
    for &s in &ctx.domain.slots_available.clone() {
        out.push(plenary_exclusivity(ctx, s, &talk_ids, &venue_ids));
    }

    for &p in &person_ids {
        for &s in &ctx.domain.slots_available.clone() {
            out.push(unipresence(ctx, s, p, &talk_ids));
        }
        out.push(person_availability(ctx, p, &talk_ids));
    }

    for &t in &talk_ids {
        for &p in &person_ids {
            for &s in &ctx.domain.slots_available.clone() {
                out.push(attend_availability(ctx, t, s, p, &venue_ids));
            }
        }
    }

    for &t in &talk_ids {
        let meetup = ctx.domain.talks_by_id[&t].meetup;
        let speakers = ctx.domain.talks_by_id[&t].speakers.clone();
        for &p in &person_ids {
            if !meetup {
                out.push(attend_full_talk(ctx, t, p));
            }
            if speakers.contains(&p) {
                out.push(speaker_attends_whole(ctx, t, p));
                out.push(speaker_attends(ctx, t, p));
            }
            if ctx.domain.talks_by_id[&t].irl_only && !ctx.domain.people_by_id[&p].attending {
                out.push(irl_only(ctx, t, p));
            }
            let invite_only = ctx.domain.talks_by_id[&t].invite_only;
            let invited = ctx
                .domain
                .people_by_id
                .get(&p)
                .map(|person| *person.preferences.get(&t).unwrap_or(&0) != 0)
                .unwrap_or(false);
            if invite_only && !invited {
                out.push(invite_only_gate(ctx, t, p));
            }
        }
    }

    for &p in &person_ids {
        let talks = ctx.domain.talks_by_speaker.get(&p).cloned().unwrap_or_default();
        if talks.len() > 1 {
            for &s in &ctx.domain.slots_available.clone() {
                out.push(no_speaker_conflicts(ctx, p, s, &talks, &venue_ids));
            }
        }
    }

    for &t2 in &talk_ids {
        let prereqs = ctx.domain.talks_by_id[&t2].prereqs.clone();
        for &t1 in &prereqs {
            let is_rest_pair =
                ctx.domain.talks_by_id[&t1].rest && ctx.domain.talks_by_id[&t2].rest;
            if is_rest_pair {
                out.push(rest_min_spacing(ctx, t2, t1));
                out.push(rest_max_spacing(ctx, t2, t1));
            } else {
                out.push(prereq(ctx, t2, t1));
            }
        }
    }

    for &t in &talk_ids {
        let (before_rest, after_rest) = {
            let talk = &ctx.domain.talks_by_id[&t];
            (talk.before_rest, talk.after_rest)
        };
        if before_rest || after_rest {
            for &v in &venue_ids {
                for &s in &ctx.domain.slots_available.clone() {
                    if before_rest {
                        out.push(before_rest_constraint(ctx, t, s, v, &talk_ids, &venue_ids));
                    }
                    if after_rest {
                        out.push(after_rest_constraint(ctx, t, s, v, &talk_ids, &venue_ids));
                    }
                }
            }
        }
    }

    // Ordered pairs (t1, t2) with t1 != t2 - DISTANCE_V/ADJACENT_V are
    // directional (talk1-then-talk2 is a different variable from
    // talk2-then-talk1), matching the Python original's full double loop.
    // Self-pairs are skipped: the original creates them too, but with no
    // declared self-similarity they never affect the objective.
    for &t1 in &talk_ids {
        for &t2 in &talk_ids {
            if t1 == t2 {
                continue;
            }
            out.push(distance_c(ctx, t1, t2));
            out.push(abs_distance_12(ctx, t1, t2));
            out.push(abs_distance_21(ctx, t1, t2));
            for &v in &venue_ids {
                out.push(adjacent_or_before_c(ctx, t1, t2, v));
                out.push(adjacent_c(ctx, t1, t2, v));
                out.push(adjacent_c2(ctx, t1, t2, v));
            }
        }
    }

    out
}

fn one_start(ctx: &mut ModelContext, t: TalkId) -> NamedConstraint {
    let perm = ctx.domain.talk_permissions[&t].clone();
    let mut vars = Vec::new();
    for &s in &perm.slots {
        for &v in &perm.venues {
            vars.push(ctx.start(s, t, v));
        }
    }
    named(format!("ONE_START_{t}"), sum(vars), CmpOp::Eq, 1.0)
}

fn allowed_time_place(ctx: &mut ModelContext, t: TalkId, _venues: &[VenueId]) -> NamedConstraint {
    // Redundant with ONE_START given that `start` is only ever created for
    // permitted (slot, venue) pairs; kept as its own named constraint so a
    // diagnostic naming it is meaningful on its own.
    let perm = ctx.domain.talk_permissions[&t].clone();
    let mut vars = Vec::new();
    for &s in &perm.slots {
        for &v in &perm.venues {
            vars.push(ctx.start(s, t, v));
        }
    }
    named(
        format!("ALLOWED_TIME_PLACE_{t}"),
        sum(vars),
        CmpOp::Eq,
        1.0,
    )
}

/// Redundant with `active`'s own forced-zero pruning for slots outside the
/// talk's own window - named so the diagnostic set can point at it directly.
fn talk_not_in_bad_slots(ctx: &mut ModelContext, t: TalkId) -> NamedConstraint {
    let perm = ctx.domain.talk_permissions[&t].clone();
    let bad_slots: Vec<Slot> = ctx
        .domain
        .slots_available
        .iter()
        .copied()
        .filter(|s| !perm.slots.contains(s))
        .collect();
    let mut vars = Vec::new();
    for &v in &perm.venues {
        for &s in &bad_slots {
            vars.push(ctx.active(s, t, v));
        }
    }
    named(format!("TALK_NOT_IN_BAD_SLOTS_{t}"), sum(vars), CmpOp::Eq, 0.0)
}

/// Redundant with `active`'s own forced-zero pruning for venues outside the
/// talk's `valid_venues` - named so the diagnostic set can point at it
/// directly.
fn talk_not_in_invalid_venue(ctx: &mut ModelContext, t: TalkId, venue_ids: &[VenueId]) -> NamedConstraint {
    let perm = ctx.domain.talk_permissions[&t].clone();
    let invalid_venues: Vec<VenueId> = venue_ids
        .iter()
        .copied()
        .filter(|v| !perm.venues.contains(v))
        .collect();
    let mut vars = Vec::new();
    for &v in &invalid_venues {
        for &s in &ctx.domain.slots_available.clone() {
            vars.push(ctx.active(s, t, v));
        }
    }
    named(
        format!("TALK_NOT_IN_INVALID_VENUE_{t}"),
        sum(vars),
        CmpOp::Eq,
        0.0,
    )
}

/// Unlike the two constraints above, this one is *not* redundant: `active`
/// only prunes against the talk's own permitted slots, never against the
/// venue's own opening hours, so this is the only thing stopping a talk from
/// running in a venue while it's closed.
fn venue_not_in_bad_slots(ctx: &mut ModelContext, v: VenueId, talk_ids: &[TalkId]) -> NamedConstraint {
    let bad_slots: Vec<Slot> = {
        let venue_slots = &ctx.domain.venues_by_id[&v].slots_set;
        ctx.domain
            .slots_available
            .iter()
            .copied()
            .filter(|s| !venue_slots.contains(s))
            .collect()
    };
    let mut vars = Vec::new();
    for &t in talk_ids {
        for &s in &bad_slots {
            vars.push(ctx.active(s, t, v));
        }
    }
    named(
        format!("VENUE_NOT_IN_BAD_SLOTS_{v}"),
        sum(vars),
        CmpOp::Eq,
        0.0,
    )
}

fn contiguity(ctx: &mut ModelContext, s: Slot, t: TalkId, v: VenueId) -> NamedConstraint {
    let duration = ctx.domain.talks_by_id[&t].duration;
    let lo = (s - duration + 1).max(0);
    let allowed_slots = ctx.domain.talk_permissions[&t].slots.clone();
    let active = ctx.active(s, t, v);
    let mut starts = Expression::from(0.0);
    for k in lo..=s {
        if allowed_slots.contains(&k) {
            starts = starts + ctx.start(k, t, v);
        }
    }
    named(
        format!("CONTIGUITY_{s}_{t}_{v}"),
        Expression::from(active) - starts,
        CmpOp::Eq,
        0.0,
    )
}

fn one_active(ctx: &mut ModelContext, s: Slot, v: VenueId, talk_ids: &[TalkId]) -> NamedConstraint {
    let vars: Vec<_> = talk_ids.iter().map(|&t| ctx.active(s, t, v)).collect();
    named(format!("ONE_ACTIVE_{v}_{s}"), sum(vars), CmpOp::Le, 1.0)
}

fn unipresence(ctx: &mut ModelContext, s: Slot, p: PersonId, talk_ids: &[TalkId]) -> NamedConstraint {
    let vars: Vec<_> = talk_ids.iter().map(|&t| ctx.attend_at(s, t, p)).collect();
    named(format!("UNIPRESENCE_{p}_{s}"), sum(vars), CmpOp::Le, 1.0)
}

fn plenary_exclusivity(
    ctx: &mut ModelContext,
    s: Slot,
    talk_ids: &[TalkId],
    venue_ids: &[VenueId],
) -> NamedConstraint {
    let m = ctx.big_m as f64;
    let mut lhs = Expression::from(0.0);
    for &t in talk_ids {
        let weight = if ctx.domain.talks_by_id[&t].plenary {
            m + 1.0
        } else {
            1.0
        };
        for &v in venue_ids {
            lhs = lhs + weight * ctx.active(s, t, v);
        }
    }
    named(format!("PLENARY_EXCLUSIVITY_{s}"), lhs, CmpOp::Le, m + 1.0)
}

fn attend_availability(
    ctx: &mut ModelContext,
    t: TalkId,
    s: Slot,
    p: PersonId,
    venue_ids: &[VenueId],
) -> NamedConstraint {
    let attend_at = ctx.attend_at(s, t, p);
    let active_sum = sum(venue_ids.iter().map(|&v| ctx.active(s, t, v)));
    named(
        format!("ATTEND_AVAILABILITY_{t}_{s}_{p}"),
        Expression::from(attend_at) - active_sum,
        CmpOp::Le,
        0.0,
    )
}

fn person_availability(ctx: &mut ModelContext, p: PersonId, talk_ids: &[TalkId]) -> NamedConstraint {
    let bad_slots: Vec<Slot> = ctx
        .domain
        .slots_available
        .iter()
        .copied()
        .filter(|s| !ctx.domain.people_by_id[&p].slots.contains(s))
        .collect();
    let mut vars = Vec::new();
    for &s in &bad_slots {
        for &t in talk_ids {
            vars.push(ctx.attend_at(s, t, p));
        }
    }
    named(format!("PERSON_AVAILABILITY_{p}"), sum(vars), CmpOp::Eq, 0.0)
}

fn attend_full_talk(ctx: &mut ModelContext, t: TalkId, p: PersonId) -> NamedConstraint {
    let slots = ctx.domain.talk_permissions[&t].slots.clone();
    let duration = ctx.domain.talks_by_id[&t].duration as f64;
    let attend = ctx.attend(t, p);
    let mut lhs = sum(slots.iter().map(|&s| ctx.attend_at(s, t, p)));
    lhs = lhs - duration * attend;
    named(format!("ATTEND_FULL_TALK_{t}_{p}"), lhs, CmpOp::Eq, 0.0)
}

fn speaker_attends_whole(ctx: &mut ModelContext, t: TalkId, p: PersonId) -> NamedConstraint {
    let slots = ctx.domain.talk_permissions[&t].slots.clone();
    let duration = ctx.domain.talks_by_id[&t].duration as f64;
    let lhs = sum(slots.iter().map(|&s| ctx.attend_at(s, t, p)));
    named(
        format!("SPEAKER_ATTENDS_WHOLE_{t}_{p}"),
        lhs,
        CmpOp::Eq,
        duration,
    )
}

fn speaker_attends(ctx: &mut ModelContext, t: TalkId, p: PersonId) -> NamedConstraint {
    let attend = ctx.attend(t, p);
    named(
        format!("SPEAKER_ATTENDS_{t}_{p}"),
        Expression::from(attend),
        CmpOp::Eq,
        1.0,
    )
}

fn irl_only(ctx: &mut ModelContext, t: TalkId, p: PersonId) -> NamedConstraint {
    let attend = ctx.attend(t, p);
    named(
        format!("IRL_ONLY_{t}_{p}"),
        Expression::from(attend),
        CmpOp::Eq,
        0.0,
    )
}

fn invite_only_gate(ctx: &mut ModelContext, t: TalkId, p: PersonId) -> NamedConstraint {
    let attend = ctx.attend(t, p);
    named(
        format!("INVITE_ONLY_{t}_{p}"),
        Expression::from(attend),
        CmpOp::Eq,
        0.0,
    )
}

fn no_speaker_conflicts(
    ctx: &mut ModelContext,
    p: PersonId,
    s: Slot,
    talks: &[TalkId],
    venue_ids: &[VenueId],
) -> NamedConstraint {
    let mut vars = Vec::new();
    for &t in talks {
        for &v in venue_ids {
            vars.push(ctx.active(s, t, v));
        }
    }
    named(
        format!("NO_SPEAKER_CONFLICTS_{p}_{s}"),
        sum(vars),
        CmpOp::Le,
        1.0,
    )
}

fn start_expr(ctx: &mut ModelContext, t: TalkId) -> Expression {
    let perm = ctx.domain.talk_permissions[&t].clone();
    let mut lhs = Expression::from(0.0);
    for &s in &perm.slots {
        for &v in &perm.venues {
            lhs = lhs + (s as f64) * ctx.start(s, t, v);
        }
    }
    lhs
}

fn prereq(ctx: &mut ModelContext, t2: TalkId, t1: TalkId) -> NamedConstraint {
    let duration1 = ctx.domain.talks_by_id[&t1].duration as f64;
    let lhs = start_expr(ctx, t2) - start_expr(ctx, t1);
    named(format!("PREREQS_{t2}_{t1}"), lhs, CmpOp::Ge, duration1)
}

fn rest_min_spacing(ctx: &mut ModelContext, t2: TalkId, t1: TalkId) -> NamedConstraint {
    let duration1 = ctx.domain.talks_by_id[&t1].duration as f64;
    let min_gap = duration1 + 12.0;
    let lhs = start_expr(ctx, t2) - start_expr(ctx, t1);
    named(
        format!("REST_MIN_SPACING_{t2}_{t1}"),
        lhs,
        CmpOp::Ge,
        min_gap,
    )
}

fn rest_max_spacing(ctx: &mut ModelContext, t2: TalkId, t1: TalkId) -> NamedConstraint {
    let duration1 = ctx.domain.talks_by_id[&t1].duration as f64;
    let max_gap = duration1 + 24.0;
    let lhs = start_expr(ctx, t2) - start_expr(ctx, t1);
    named(
        format!("REST_MAX_SPACING_{t2}_{t1}"),
        lhs,
        CmpOp::Le,
        max_gap,
    )
}

/// Talks flagged `rest`, usable as the adjacent break in before/after-rest
/// constraints.
fn rest_talks(talk_ids: &[TalkId], ctx: &ModelContext) -> Vec<TalkId> {
    talk_ids
        .iter()
        .copied()
        .filter(|t| ctx.domain.talks_by_id[t].rest)
        .collect()
}

/// Talks *not* flagged `rest`, other than `t` itself.
fn other_nonrest_talks(talk_ids: &[TalkId], ctx: &ModelContext, t: TalkId) -> Vec<TalkId> {
    talk_ids
        .iter()
        .copied()
        .filter(|&t2| t2 != t && !ctx.domain.talks_by_id[&t2].rest)
        .collect()
}

/// At the slot directly after `t`'s activity, either `t` extends into it or
/// some rest talk is active there (in any venue) - unless some other
/// non-rest talk has already claimed that slot in this venue, in which case
/// the big-M term is the only thing keeping the constraint satisfied.
fn before_rest_constraint(
    ctx: &mut ModelContext,
    t: TalkId,
    s: Slot,
    v: VenueId,
    talk_ids: &[TalkId],
    venue_ids: &[VenueId],
) -> NamedConstraint {
    let m = ctx.big_m as f64;
    let rests = rest_talks(talk_ids, ctx);
    let nonrests = other_nonrest_talks(talk_ids, ctx, t);
    let active_t = ctx.active(s, t, v);
    let active_t_next = ctx.active(s + 1, t, v);
    let mut lhs = Expression::from(active_t) * m;
    for &t2 in &nonrests {
        lhs = lhs + ctx.active(s + 1, t2, v);
    }
    lhs = lhs - Expression::from(active_t_next);
    for &r in &rests {
        for &v2 in venue_ids {
            lhs = lhs - ctx.active(s + 1, r, v2);
        }
    }
    named(format!("BEFORE_REST_{t}_{s}_{v}"), lhs, CmpOp::Le, m - 1.0)
}

/// Mirror of [`before_rest_constraint`] looking one slot back instead of
/// forward.
fn after_rest_constraint(
    ctx: &mut ModelContext,
    t: TalkId,
    s: Slot,
    v: VenueId,
    talk_ids: &[TalkId],
    venue_ids: &[VenueId],
) -> NamedConstraint {
    let m = ctx.big_m as f64;
    let rests = rest_talks(talk_ids, ctx);
    let nonrests = other_nonrest_talks(talk_ids, ctx, t);
    let active_t = ctx.active(s, t, v);
    let active_t_prev = ctx.active(s - 1, t, v);
    let mut lhs = Expression::from(active_t) * m;
    for &t2 in &nonrests {
        lhs = lhs + ctx.active(s - 1, t2, v);
    }
    lhs = lhs - Expression::from(active_t_prev);
    for &r in &rests {
        for &v2 in venue_ids {
            lhs = lhs - ctx.active(s - 1, r, v2);
        }
    }
    named(format!("AFTER_REST_{t}_{s}_{v}"), lhs, CmpOp::Le, m - 1.0)
}

fn distance_c(ctx: &mut ModelContext, t1: TalkId, t2: TalkId) -> NamedConstraint {
    let distance = ctx.distance_v(t1, t2);
    let lhs = start_expr(ctx, t2) - start_expr(ctx, t1) - Expression::from(distance);
    named(format!("DISTANCE_C_{t2}_{t1}"), lhs, CmpOp::Eq, 0.0)
}

fn abs_distance_12(ctx: &mut ModelContext, t1: TalkId, t2: TalkId) -> NamedConstraint {
    let abs_d = ctx.abs_distance_v(t1, t2);
    let d = ctx.distance_v(t1, t2);
    let lhs = Expression::from(abs_d) - Expression::from(d);
    named(format!("ABS_DISTANCE_12_{t1}_{t2}"), lhs, CmpOp::Ge, 0.0)
}

fn abs_distance_21(ctx: &mut ModelContext, t1: TalkId, t2: TalkId) -> NamedConstraint {
    let abs_d = ctx.abs_distance_v(t1, t2);
    let d = ctx.distance_v(t1, t2);
    let lhs = Expression::from(abs_d) + Expression::from(d);
    named(format!("ABS_DISTANCE_21_{t1}_{t2}"), lhs, CmpOp::Ge, 0.0)
}

/// `start_expr` restricted to a single venue: `Σ_s s * start(s, t, v)`, zero
/// wherever `t` isn't placed in `v` at all.
fn start_expr_v(ctx: &mut ModelContext, t: TalkId, v: VenueId) -> Expression {
    let perm = ctx.domain.talk_permissions[&t].clone();
    if !perm.venues.contains(&v) {
        return Expression::from(0.0);
    }
    let mut lhs = Expression::from(0.0);
    for &s in &perm.slots {
        lhs = lhs + (s as f64) * ctx.start(s, t, v);
    }
    lhs
}

/// 1 iff `t` is placed in venue `v` at all: `Σ_s start(s, t, v)`.
fn placed_v(ctx: &mut ModelContext, t: TalkId, v: VenueId) -> Expression {
    let perm = ctx.domain.talk_permissions[&t].clone();
    if !perm.venues.contains(&v) {
        return Expression::from(0.0);
    }
    sum(perm.slots.iter().map(|&s| ctx.start(s, t, v)))
}

/// Conditioned on both talks being placed in `v`: if either isn't, the
/// `M*placed` slack relaxes the bound unconditionally, so the constraint
/// only bites when `t1` and `t2` are actually co-located.
fn adjacent_or_before_c(ctx: &mut ModelContext, t1: TalkId, t2: TalkId, v: VenueId) -> NamedConstraint {
    let m = ctx.big_m as f64;
    let duration1 = ctx.domain.talks_by_id[&t1].duration as f64;
    let adjob = ctx.adjacent_or_before_v(t1, t2, v);
    let placed1 = placed_v(ctx, t1, v);
    let placed2 = placed_v(ctx, t2, v);
    let lhs = start_expr_v(ctx, t2, v) - start_expr_v(ctx, t1, v) + Expression::from(adjob) * (3.0 * m)
        - placed1 * m
        - placed2 * m;
    named(
        format!("ADJACENT_OR_BEFORE_C_{t1}_{t2}_{v}"),
        lhs,
        CmpOp::Le,
        m + duration1,
    )
}

fn adjacent_c(ctx: &mut ModelContext, t1: TalkId, t2: TalkId, v: VenueId) -> NamedConstraint {
    let adj = ctx.adjacent_v(t1, t2, v);
    let adjob_12 = ctx.adjacent_or_before_v(t1, t2, v);
    let adjob_21 = ctx.adjacent_or_before_v(t2, t1, v);
    let lhs = Expression::from(adjob_12) + Expression::from(adjob_21) - Expression::from(adj);
    named(format!("ADJACENT_C_{t1}_{t2}_{v}"), lhs, CmpOp::Le, 1.0)
}

fn adjacent_c2(ctx: &mut ModelContext, t1: TalkId, t2: TalkId, v: VenueId) -> NamedConstraint {
    let adj = ctx.adjacent_v(t1, t2, v);
    let adjob_21 = ctx.adjacent_or_before_v(t2, t1, v);
    let lhs = Expression::from(adj) - Expression::from(adjob_21);
    named(format!("ADJACENT_C2_{t1}_{t2}_{v}"), lhs, CmpOp::Le, 0.0)
}
