//! Game entities and the factories that lay out the starting lanes

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::{translate_wrapped, wrap_horizontal};
use crate::consts::*;
use crate::tuning::{LaneSpec, Tuning};

/// Sprite class of a body. Decides the lane and asset, never the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewType {
    Frog,
    SlowCar,
    FastCar,
    Lorry,
    Turtle,
    Lotus,
    ShortLog,
    MiddleLog,
    LongLog,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Frog => "frog",
            ViewType::SlowCar => "slowCar",
            ViewType::FastCar => "fastCar",
            ViewType::Lorry => "lorry",
            ViewType::Turtle => "turtle",
            ViewType::Lotus => "lotus",
            ViewType::ShortLog => "shortLog",
            ViewType::MiddleLog => "middleLog",
            ViewType::LongLog => "longLog",
        }
    }

    /// Road vehicles; everything else except the frog floats on the river
    pub fn is_hazard(&self) -> bool {
        matches!(self, ViewType::SlowCar | ViewType::FastCar | ViewType::Lorry)
    }
}

/// Position, size and asset of a body before it is given an identity
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub img: String,
}

/// Anything drawn on the board: the frog, a vehicle or a float.
///
/// Bodies are values. Every change goes through a method that consumes
/// the old body and returns the new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// `view_type` name followed by the index within its lane
    pub id: String,
    pub create_time: u64,
    pub view_type: ViewType,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Horizontal displacement per tick
    pub speed: f32,
    pub img: String,
}

impl Body {
    /// Advance by one tick of the body's own speed, wrapping horizontally
    pub fn advanced(self) -> Self {
        let pos = translate_wrapped(self.pos, Vec2::new(self.speed, 0.0));
        Self { pos, ..self }
    }

    /// Grow the speed's magnitude by `step`, keeping its direction.
    /// A stationary body starts moving right.
    pub fn sped_up(self, step: f32) -> Self {
        let speed = if self.speed < 0.0 {
            self.speed - step
        } else {
            self.speed + step
        };
        Self { speed, ..self }
    }

    pub fn with_speed(self, speed: f32) -> Self {
        Self { speed, ..self }
    }

    pub fn at(self, pos: Vec2) -> Self {
        Self { pos, ..self }
    }
}

/// Build a lane entity.
///
/// The body starts one step of its own speed past the footprint, wrapped,
/// so the first frame already shows it in motion.
pub fn make_entity(
    view_type: ViewType,
    index: usize,
    create_time: u64,
    footprint: Footprint,
    speed: f32,
) -> Body {
    Body {
        id: format!("{}{}", view_type.as_str(), index),
        create_time,
        view_type,
        pos: translate_wrapped(footprint.pos, Vec2::new(speed, 0.0)),
        width: footprint.width,
        height: footprint.height,
        speed,
        img: footprint.img,
    }
}

/// The player at the bottom of the board, standing still
pub fn make_frog() -> Body {
    Body {
        id: ViewType::Frog.as_str().to_string(),
        create_time: START_TIME,
        view_type: ViewType::Frog,
        pos: Vec2::new(FROG_START_X, FROG_START_Y),
        width: FROG_WIDTH,
        height: FROG_HEIGHT,
        speed: 0.0,
        img: FROG_IMG.to_string(),
    }
}

/// Replicate a lane template `count` times, `spacing` apart
pub fn spawn_lane(lane: &LaneSpec) -> impl Iterator<Item = Body> + '_ {
    (0..lane.count as usize).map(move |i| {
        let start = Vec2::new(lane.start_x + i as f32 * lane.spacing, lane.start_y);
        let footprint = Footprint {
            pos: wrap_horizontal(start, CANVAS_WIDTH),
            width: lane.width,
            height: lane.height,
            img: lane.img.clone(),
        };
        make_entity(lane.view_type, i, START_TIME, footprint, lane.speed)
    })
}

/// Road vehicles in lane-table order
pub fn starting_cars(tuning: &Tuning) -> Vec<Body> {
    tuning.lanes_where(true).flat_map(spawn_lane).collect()
}

/// River floats in lane-table order
pub fn starting_floats(tuning: &Tuning) -> Vec<Body> {
    tuning.lanes_where(false).flat_map(spawn_lane).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(bodies: &'a [Body], id: &str) -> &'a Body {
        bodies.iter().find(|b| b.id == id).unwrap()
    }

    #[test]
    fn test_frog_spawn() {
        let frog = make_frog();
        assert_eq!(frog.id, "frog");
        assert_eq!(frog.pos, Vec2::new(251.0, 438.0));
        assert_eq!(frog.speed, 0.0);
        assert_eq!((frog.width, frog.height), (30.0, 30.0));
    }

    #[test]
    fn test_default_lane_populations() {
        let tuning = Tuning::default();
        let cars = starting_cars(&tuning);
        let floats = starting_floats(&tuning);

        assert_eq!(cars.len(), 2 + 1 + 2);
        assert_eq!(floats.len(), 3 + 10 + 4 + 3 + 2);
        assert!(cars.iter().all(|c| c.view_type.is_hazard()));
        assert!(floats.iter().all(|f| !f.view_type.is_hazard()));

        let ids: Vec<_> = cars.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["slowCar0", "slowCar1", "fastCar0", "lorry0", "lorry1"]);
    }

    #[test]
    fn test_spawn_applies_one_speed_step() {
        let tuning = Tuning::default();
        let cars = starting_cars(&tuning);
        let floats = starting_floats(&tuning);

        let slow = find(&cars, "slowCar1");
        assert!((slow.pos.x - 479.3).abs() < 1e-3);
        assert_eq!(slow.pos.y, 390.0);

        // Starts at -10, wraps to 522 then moves 0.3
        let log = find(&floats, "shortLog0");
        assert!((log.pos.x - 522.3).abs() < 1e-3);

        // 70 + 9 * 95 = 925 wraps to 393
        let pad = find(&floats, "lotus9");
        assert!((pad.pos.x - 393.3).abs() < 1e-3);
    }

    #[test]
    fn test_body_transforms() {
        let body = make_entity(
            ViewType::Turtle,
            0,
            START_TIME,
            Footprint {
                pos: Vec2::new(1.0, 200.0),
                width: 80.0,
                height: 45.0,
                img: String::new(),
            },
            -0.5,
        );
        assert_eq!(body.pos, Vec2::new(0.5, 200.0));

        let moved = body.clone().advanced();
        assert_eq!(moved.pos, Vec2::new(0.0, 200.0));
        assert_eq!(moved.advanced().pos, Vec2::new(531.5, 200.0));

        assert_eq!(body.clone().sped_up(0.5).speed, -1.0);
        assert_eq!(body.with_speed(2.0).sped_up(0.5).speed, 2.5);
    }
}
