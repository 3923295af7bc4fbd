//! Challenge definition domain — exercises, schedules, open/close state.
//!
//! A challenge describes one exercise ([`ExerciseInfo`]) repeated
//! `days_of_week` times a week for `weeks` weeks at a difficulty `level`.
//! Its creator can open it (accepting participants), close it, or delete it.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::UserId;
use serde::{Deserialize, Serialize};

pub use wire::{
    ChallengeAction, ChallengeNameResponse, CreateChallengeRequest, CreateChallengeResponse,
    CreatorResponse, DateCreatedResponse, IsOpenResponse, StatusResponse,
};

// ─── ExerciseInfo ────────────────────────────────────────────────────────────

/// Exercise parameters, tagged on the wire by `_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ExerciseInfo {
    /// Strength work: sets × reps, optionally weighted (kg).
    #[serde(rename = "AnaerobicInfo")]
    Anaerobic {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weight: Option<f64>,
        sets: u32,
        reps: u32,
    },
    /// Repetition cardio (e.g. jumping jacks) at `rep_speed` reps per minute.
    #[serde(rename = "RepAerobicInfo")]
    RepAerobic {
        #[serde(rename = "repSpeed")]
        rep_speed: f64,
        minutes: f64,
    },
    /// Distance cardio (e.g. running) at `distance_speed` km per hour.
    #[serde(rename = "DistanceAerobicInfo")]
    DistanceAerobic {
        #[serde(rename = "distanceSpeed")]
        distance_speed: f64,
        minutes: f64,
    },
}

impl ExerciseInfo {
    /// The `_type` tag written on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Anaerobic { .. } => "AnaerobicInfo",
            Self::RepAerobic { .. } => "RepAerobicInfo",
            Self::DistanceAerobic { .. } => "DistanceAerobicInfo",
        }
    }

    pub fn is_aerobic(&self) -> bool {
        !matches!(self, Self::Anaerobic { .. })
    }

    /// Short human-readable description, e.g. `"3 sets × 10 reps @ 20 kg"`.
    pub fn summary(&self) -> String {
        match self {
            Self::Anaerobic {
                weight: Some(kg),
                sets,
                reps,
            } => format!("{} sets × {} reps @ {} kg", sets, reps, kg),
            Self::Anaerobic {
                weight: None,
                sets,
                reps,
            } => format!("{} sets × {} reps", sets, reps),
            Self::RepAerobic { rep_speed, minutes } => {
                format!("{} reps/min for {} min", rep_speed, minutes)
            }
            Self::DistanceAerobic {
                distance_speed,
                minutes,
            } => format!("{} km/h for {} min", distance_speed, minutes),
        }
    }
}

// ─── ChallengeDetails ────────────────────────────────────────────────────────

/// One row of `/ChallengeDefinition/_getChallengeDetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDetails {
    pub exercise: String,
    pub days_of_week: u32,
    pub weeks: u32,
    pub level: u32,
    pub info: ExerciseInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserId>,
}

impl ChallengeDetails {
    /// Number of scheduled parts: days per week × weeks.
    pub fn total_parts(&self) -> u32 {
        self.days_of_week.saturating_mul(self.weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anaerobic_wire_shape() {
        let info = ExerciseInfo::Anaerobic {
            weight: None,
            sets: 3,
            reps: 10,
        };
        assert_eq!(
            serde_json::to_value(&info).unwrap(),
            json!({"_type": "AnaerobicInfo", "sets": 3, "reps": 10})
        );
    }

    #[test]
    fn test_rep_aerobic_wire_shape() {
        let info: ExerciseInfo =
            serde_json::from_value(json!({"_type": "RepAerobicInfo", "repSpeed": 40.0, "minutes": 15.0}))
                .unwrap();
        assert_eq!(
            info,
            ExerciseInfo::RepAerobic {
                rep_speed: 40.0,
                minutes: 15.0
            }
        );
        assert!(info.is_aerobic());
    }

    #[test]
    fn test_distance_aerobic_wire_shape() {
        let info = ExerciseInfo::DistanceAerobic {
            distance_speed: 10.5,
            minutes: 30.0,
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["_type"], "DistanceAerobicInfo");
        assert_eq!(value["distanceSpeed"], 10.5);
        assert_eq!(info.kind(), "DistanceAerobicInfo");
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let result: Result<ExerciseInfo, _> =
            serde_json::from_value(json!({"_type": "YogaInfo", "minutes": 10}));
        assert!(result.is_err());
    }

    #[test]
    fn test_summary() {
        let weighted = ExerciseInfo::Anaerobic {
            weight: Some(20.0),
            sets: 3,
            reps: 10,
        };
        assert_eq!(weighted.summary(), "3 sets × 10 reps @ 20 kg");
        let run = ExerciseInfo::DistanceAerobic {
            distance_speed: 10.0,
            minutes: 30.0,
        };
        assert_eq!(run.summary(), "10 km/h for 30 min");
    }

    #[test]
    fn test_details_total_parts() {
        let details: ChallengeDetails = serde_json::from_value(json!({
            "exercise": "pushups",
            "daysOfWeek": 3,
            "weeks": 4,
            "level": 1,
            "info": {"_type": "AnaerobicInfo", "sets": 3, "reps": 10}
        }))
        .unwrap();
        assert_eq!(details.total_parts(), 12);
        assert!(details.open.is_none());
    }
}
