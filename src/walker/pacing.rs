//! Pacing: wie viele bzw. welche Steps pro Segment erzeugt werden.

use crate::core::geometry::{curve_intervals, uniform_intervals};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Schrittweite in Ausgabe-Einheiten.
pub const DEFAULT_PACE: f32 = 20.0;
/// Kleinster zulässiger Pace-Wert (kleinere Werte werden angehoben).
pub const MIN_PACE: f32 = 1.0;

/// Pacing-Modus des Walkers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Pacing {
    /// `pace` ist der Ziel-Abstand zwischen zwei Steps
    ByDistance { pace: f32 },
    /// Feste Anzahl Unterteilungen pro Segment
    ByCount { steps: u32 },
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::ByDistance { pace: DEFAULT_PACE }
    }
}

impl Pacing {
    /// Distanz-Pacing; nicht-positive Werte werden auf [`MIN_PACE`] angehoben.
    pub fn by_distance(pace: f32) -> Self {
        Pacing::ByDistance { pace }.normalized()
    }

    /// Anzahl-Pacing; 0 wird auf 1 angehoben.
    pub fn by_count(steps: u32) -> Self {
        Pacing::ByCount { steps }.normalized()
    }

    /// Klemmt ungültige Werte (auch aus deserialisierten Optionen).
    pub fn normalized(self) -> Self {
        match self {
            // NaN fällt ebenfalls durch den Vergleich
            Pacing::ByDistance { pace } if !(pace > 0.0) => {
                Pacing::ByDistance { pace: MIN_PACE }
            }
            Pacing::ByCount { steps: 0 } => Pacing::ByCount { steps: 1 },
            other => other,
        }
    }

    /// Anzahl der Steps auf einer Linie der Länge `length` (mindestens 1).
    pub fn line_steps(&self, length: f32) -> u32 {
        let steps = match *self {
            Pacing::ByDistance { pace } => (length / pace) as u32,
            Pacing::ByCount { steps } => steps,
        };
        steps.max(1)
    }

    /// t-Werte für eine kubische Bézier, beginnend bei 0.0.
    pub fn curve_intervals(&self, p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2) -> Vec<f32> {
        match *self {
            Pacing::ByDistance { pace } => curve_intervals(p0, c1, c2, p3, pace).0,
            Pacing::ByCount { steps } => uniform_intervals(steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_pace_is_clamped() {
        assert_eq!(Pacing::by_distance(0.0), Pacing::ByDistance { pace: 1.0 });
        assert_eq!(Pacing::by_distance(-5.0), Pacing::ByDistance { pace: 1.0 });
        assert_eq!(Pacing::by_distance(f32::NAN), Pacing::ByDistance { pace: 1.0 });
        assert_eq!(Pacing::by_distance(2.5), Pacing::ByDistance { pace: 2.5 });
        assert_eq!(Pacing::by_count(0), Pacing::ByCount { steps: 1 });
    }

    #[test]
    fn test_line_steps() {
        let paced = Pacing::by_distance(10.0);
        assert_eq!(paced.line_steps(100.0), 10);
        assert_eq!(paced.line_steps(25.0), 2);
        assert_eq!(paced.line_steps(3.0), 1);
        assert_eq!(paced.line_steps(0.0), 1);
        assert_eq!(Pacing::by_count(7).line_steps(1000.0), 7);
    }

    #[test]
    fn test_count_curve_intervals_are_uniform() {
        let intervals =
            Pacing::by_count(2).curve_intervals(Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y);
        assert_eq!(intervals, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Pacing::by_count(4)).unwrap();
        assert_eq!(json, r#"{"mode":"by_count","steps":4}"#);
        let back: Pacing = serde_json::from_str(r#"{"mode":"by_distance","pace":12.0}"#).unwrap();
        assert_eq!(back, Pacing::ByDistance { pace: 12.0 });
    }
}
