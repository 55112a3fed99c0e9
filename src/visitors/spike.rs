//! Spike-Effekt: Dreiecks-Spitze zwischen je zwei Steps.

use super::{PenCursor, StepVisitor};
use crate::core::geometry::{angle, distance, polar_offset};
use crate::core::OutlinePen;
use crate::walker::Step;
use glam::Vec2;

/// Standard-Höhe der Spitzen.
pub const DEFAULT_SPIKE_LENGTH: f32 = 25.0;

/// Ersetzt jede Sehne zwischen zwei Steps durch eine Spitze der Höhe `spike_length`.
#[derive(Debug, Clone)]
pub struct SpikeVisitor {
    /// Senkrechte Höhe der Spitze über der Sehnenmitte
    pub spike_length: f32,
    cursor: PenCursor,
}

impl Default for SpikeVisitor {
    fn default() -> Self {
        Self::new(DEFAULT_SPIKE_LENGTH)
    }
}

impl SpikeVisitor {
    pub fn new(spike_length: f32) -> Self {
        Self {
            spike_length,
            cursor: PenCursor::new(),
        }
    }
}

/// Spitze über der Sehne `from → to`.
///
/// Liegt im Abstand `hypot(d/2, h)` von `from`, unter dem Winkel
/// `Sehnenwinkel + atan(h / (d/2))`.
pub fn spike_apex(from: Vec2, to: Vec2, spike_length: f32) -> Vec2 {
    let half = distance(from, to) / 2.0;
    let chord_angle = angle(from, to);
    let spike_angle = (spike_length / half).atan();
    let reach = half.hypot(spike_length);
    polar_offset(from, chord_angle + spike_angle, reach)
}

impl StepVisitor for SpikeVisitor {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        match self.cursor.last() {
            Some(previous) if self.cursor.is_open() => {
                let apex = spike_apex(previous, step.position, self.spike_length);
                out.line_to(apex);
                out.line_to(step.position);
                self.cursor.mark(step.position);
            }
            _ => self.cursor.draw(step.position, out),
        }
    }

    fn on_contour_close(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        self.cursor.finish(closed, out);
    }
}
