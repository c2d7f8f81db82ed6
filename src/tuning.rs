//! Data-driven game balance
//!
//! Lane populations, scoring and difficulty live here so they can be
//! overridden from JSON without touching the engine.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::ViewType;

/// One row of the lane table: a template replicated `count` times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneSpec {
    pub view_type: ViewType,
    pub count: u32,
    /// Horizontal velocity per tick (sign is direction)
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Horizontal gap between consecutive copies
    pub spacing: f32,
    pub img: String,
}

impl LaneSpec {
    fn new(
        view_type: ViewType,
        count: u32,
        speed: f32,
        (width, height): (f32, f32),
        (start_x, start_y): (f32, f32),
        spacing: f32,
        img: &str,
    ) -> Self {
        Self {
            view_type,
            count,
            speed,
            width,
            height,
            start_x,
            start_y,
            spacing,
            img: img.to_string(),
        }
    }
}

/// Points awarded by moves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoring {
    /// Each upward hop that doesn't land in a goal
    pub per_move: u64,
    /// Landing in a goal window
    pub goal: u64,
}

impl Default for Scoring {
    fn default() -> Self {
        Self {
            per_move: 10,
            goal: 200,
        }
    }
}

/// Vertical hop sizes; the river uses coarser rows than the road
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveSteps {
    /// Road hop, also used for every lateral hop
    pub ground: f32,
    pub water: f32,
}

impl Default for MoveSteps {
    fn default() -> Self {
        Self {
            ground: 8.0,
            water: 32.0,
        }
    }
}

/// One-shot speed-up after enough goals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Difficulty {
    /// Win count that triggers the speed-up
    pub threshold: u32,
    /// Added to every lane speed's magnitude
    pub speed_step: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            threshold: 5,
            speed_step: 0.5,
        }
    }
}

/// Complete balance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub lanes: Vec<LaneSpec>,
    pub scoring: Scoring,
    pub steps: MoveSteps,
    pub difficulty: Difficulty,
}

impl Default for Tuning {
    fn default() -> Self {
        use ViewType::*;

        const VEHICLE: (f32, f32) = (60.0, 42.0);
        const LOG_HEIGHT: f32 = 60.0;

        Self {
            lanes: vec![
                LaneSpec::new(SlowCar, 2, -0.7, VEHICLE, (420.0, 390.0), 60.0, "../assets/slow-car.png"),
                LaneSpec::new(FastCar, 1, 2.5, VEHICLE, (7.0, 330.0), 60.0, "../assets/fast-car.png"),
                LaneSpec::new(Lorry, 2, 0.3, (80.0, 55.0), (460.0, 275.0), 60.0, "../assets/lorry.png"),
                LaneSpec::new(Turtle, 3, -0.5, (80.0, 45.0), (430.0, 198.0), 160.0, "../assets/turtles.png"),
                // Lily pads are drawn 35 wide but collide as wide as a lorry
                LaneSpec::new(Lotus, 10, 0.3, (80.0, 35.0), (70.0, 107.0), 95.0, "../assets/lotus.png"),
                LaneSpec::new(ShortLog, 4, 0.3, (90.0, LOG_HEIGHT), (-10.0, 160.0), 140.0, "../assets/short-log.png"),
                LaneSpec::new(MiddleLog, 3, 0.5, (130.0, LOG_HEIGHT), (50.0, 67.0), 170.0, "../assets/middle-log.png"),
                LaneSpec::new(LongLog, 2, 0.9, (190.0, LOG_HEIGHT), (90.0, 130.0), 240.0, "../assets/long-log.png"),
            ],
            scoring: Scoring::default(),
            steps: MoveSteps::default(),
            difficulty: Difficulty::default(),
        }
    }
}

impl Tuning {
    /// Parse a tuning override. Missing sections keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for lane in &self.lanes {
            if lane.view_type == ViewType::Frog {
                return Err(ConfigError::Invalid(
                    "the frog cannot be used as a lane entity".into(),
                ));
            }
            if lane.width <= 0.0 || lane.height <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} lane has a non-positive size",
                    lane.view_type.as_str()
                )));
            }
        }
        if self.steps.ground <= 0.0 || self.steps.water <= 0.0 {
            return Err(ConfigError::Invalid("move steps must be positive".into()));
        }
        if self.difficulty.threshold == 0 {
            return Err(ConfigError::Invalid(
                "difficulty threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Lane rows in table order whose entities are hazards (or floats)
    pub fn lanes_where(&self, hazard: bool) -> impl Iterator<Item = &LaneSpec> {
        self.lanes
            .iter()
            .filter(move |lane| lane.view_type.is_hazard() == hazard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.lanes_where(true).count(), 3);
        assert_eq!(tuning.lanes_where(false).count(), 5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "scoring": { "goal": 500 } }"#).unwrap();
        assert_eq!(tuning.scoring.goal, 500);
        assert_eq!(tuning.scoring.per_move, 10);
        assert_eq!(tuning.lanes, Tuning::default().lanes);
        assert_eq!(tuning.difficulty.threshold, 5);
    }

    #[test]
    fn test_custom_lane_table() {
        let json = r#"{
            "lanes": [{
                "view_type": "turtle", "count": 1, "speed": -1.0,
                "width": 50.0, "height": 40.0, "start_x": 0.0, "start_y": 150.0,
                "spacing": 0.0, "img": "t.png"
            }]
        }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.lanes.len(), 1);
        assert_eq!(tuning.lanes_where(true).count(), 0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let frog_lane = r#"{ "lanes": [{
            "view_type": "frog", "count": 1, "speed": 0.0, "width": 1.0, "height": 1.0,
            "start_x": 0.0, "start_y": 0.0, "spacing": 0.0, "img": ""
        }] }"#;
        assert!(matches!(
            Tuning::from_json(frog_lane),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "steps": { "water": 0.0 } }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
