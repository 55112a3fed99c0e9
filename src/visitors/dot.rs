//! Dot-Effekt: Kreis-Stempel an jedem Step.

use super::StepVisitor;
use crate::core::OutlinePen;
use crate::walker::Step;
use glam::Vec2;

/// Standard-Radius der Punkte.
pub const DEFAULT_DOT_RADIUS: f32 = 10.0;
/// Kontrollpunkt-Faktor für Viertelkreise: `4·(√2 − 1)/3 ≈ 0.5522847`.
pub const DEFAULT_ROUNDNESS: f32 = 0.552_284_75;

/// Zeichnet einen geschlossenen Kreis aus vier kubischen Segmenten.
///
/// Beginnt rechts (`center + (r, 0)`) und läuft gegen den Uhrzeigersinn.
/// Die Steuerpunkte liegen `roundness · r` neben den vier On-Curve-Punkten.
pub fn circle(pen: &mut dyn OutlinePen, center: Vec2, radius: f32, roundness: f32) {
    let r = radius;
    let k = radius * roundness;
    let c = center;

    pen.move_to(c + Vec2::new(r, 0.0));
    pen.curve_to(c + Vec2::new(r, k), c + Vec2::new(k, r), c + Vec2::new(0.0, r));
    pen.curve_to(c + Vec2::new(-k, r), c + Vec2::new(-r, k), c + Vec2::new(-r, 0.0));
    pen.curve_to(c + Vec2::new(-r, -k), c + Vec2::new(-k, -r), c + Vec2::new(0.0, -r));
    pen.curve_to(c + Vec2::new(k, -r), c + Vec2::new(r, -k), c + Vec2::new(r, 0.0));
    pen.close_path();
}

/// Stempelt an jedem Step einen Kreis mit `radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotVisitor {
    pub radius: f32,
    pub roundness: f32,
}

impl Default for DotVisitor {
    fn default() -> Self {
        Self::new(DEFAULT_DOT_RADIUS)
    }
}

impl DotVisitor {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            roundness: DEFAULT_ROUNDNESS,
        }
    }

    /// Überschreibt den Kontrollpunkt-Faktor.
    pub fn with_roundness(mut self, roundness: f32) -> Self {
        self.roundness = roundness;
        self
    }
}

impl StepVisitor for DotVisitor {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        circle(out, step.position, self.radius, self.roundness);
    }
}
