//! Collision and zone rules
//!
//! Road and river use deliberately different tests: a vehicle only has to
//! touch the frog (with some slack for sprite padding), while a float has
//! to contain it completely to carry it.

use super::entity::Body;
use crate::consts::*;
use crate::within;

/// Where the frog stands after everything has moved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Footing {
    /// Road with no vehicle contact, riverbank, or goal row
    Safe,
    /// Hit by a vehicle on the road
    RunOver,
    /// Riding a float that moves at `speed`
    Carried { speed: f32 },
    /// In open water with nothing under it
    Drowned,
}

impl Footing {
    /// Whether this footing ends the session
    pub fn is_fatal(&self) -> bool {
        matches!(self, Footing::RunOver | Footing::Drowned)
    }
}

/// Vehicle contact test.
///
/// The frog's horizontal centre must lie over the vehicle. Vertically,
/// either the frog's top edge lies in the upper `HAZARD_SLACK` share of the
/// vehicle's height, or the frog's vertical centre lies within
/// `HAZARD_SLACK` of the vehicle's *width* below its top edge. The second
/// band is an approximation inherited from tuning against the sprites and
/// is kept as is.
pub fn ground_collided(frog: &Body, body: &Body) -> bool {
    let centre_x = frog.pos.x + frog.width / 2.0;
    let over_body = within(body.pos.x, body.pos.x + body.width, centre_x);

    let top_edge_hit = within(
        body.pos.y,
        body.pos.y + body.height * HAZARD_SLACK,
        frog.pos.y,
    );
    let centre_hit = within(
        body.pos.y,
        body.pos.y + body.width * HAZARD_SLACK,
        frog.pos.y + frog.height / 2.0,
    );

    over_body && (top_edge_hit || centre_hit)
}

/// Frog is on the road and touching at least one vehicle
pub fn ground_end(frog: &Body, cars: &[Body]) -> bool {
    within(GROUND_START_Y, GROUND_END_Y, frog.pos.y)
        && cars.iter().any(|c| ground_collided(frog, c))
}

/// Frog is in the river band but not on the riverbank strip
pub fn water_area(frog: &Body) -> bool {
    within(WATER_START_Y, WATER_END_Y, frog.pos.y)
        && !within(SAFE_ZONE_START_Y, SAFE_ZONE_END_Y, frog.pos.y)
}

/// All four edges of the frog lie inside the float's box
pub fn on_float(frog: &Body, body: &Body) -> bool {
    let (left, right) = (body.pos.x, body.pos.x + body.width);
    let (top, bottom) = (body.pos.y, body.pos.y + body.height);

    within(top, bottom, frog.pos.y)
        && within(left, right, frog.pos.x)
        && within(top, bottom, frog.pos.y + frog.height)
        && within(left, right, frog.pos.x + frog.width)
}

/// Classify the frog against the current lanes
pub fn footing(frog: &Body, cars: &[Body], floats: &[Body]) -> Footing {
    if ground_end(frog, cars) {
        return Footing::RunOver;
    }
    if !water_area(frog) {
        return Footing::Safe;
    }
    match floats.iter().find(|f| on_float(frog, f)) {
        Some(float) => Footing::Carried { speed: float.speed },
        None => Footing::Drowned,
    }
}

/// Index of the goal window containing `(x, y)`, if the point is on the goal row
pub fn goal_window(x: f32, y: f32) -> Option<usize> {
    if y > GOAL_ROW_Y {
        return None;
    }
    GOAL_WINDOWS
        .iter()
        .position(|&(start, end)| within(start, end, x))
}

pub fn is_win(x: f32, y: f32) -> bool {
    goal_window(x, y).is_some()
}
