//! Jitter-Effekt: Gauß-Rauschen auf jeder Step-Position.

use super::{PenCursor, StepVisitor};
use crate::core::OutlinePen;
use crate::walker::Step;
use anyhow::{anyhow, Result};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

/// Standard-Standardabweichung des Rauschens (beide Achsen).
pub const DEFAULT_JITTER_AMPLITUDE: f32 = 10.0;

/// Zeichnet eine Polylinie durch verrauschte Step-Positionen.
///
/// Die Zufallsquelle wird injiziert; `seeded` liefert reproduzierbare Ausgaben.
pub struct JitterVisitor<R = StdRng> {
    x_noise: Normal<f32>,
    y_noise: Normal<f32>,
    rng: R,
    cursor: PenCursor,
}

impl JitterVisitor<StdRng> {
    /// Jitter mit OS-geseedeter Zufallsquelle. `y_amplitude = None` übernimmt `x_amplitude`.
    pub fn new(x_amplitude: f32, y_amplitude: Option<f32>) -> Result<Self> {
        Self::with_rng(x_amplitude, y_amplitude, StdRng::from_os_rng())
    }

    /// Jitter mit fester Seed (deterministisch).
    pub fn seeded(x_amplitude: f32, y_amplitude: Option<f32>, seed: u64) -> Result<Self> {
        Self::with_rng(x_amplitude, y_amplitude, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterVisitor<R> {
    /// Jitter mit beliebiger Zufallsquelle.
    ///
    /// Negative oder nicht-endliche Amplituden werden abgelehnt.
    pub fn with_rng(x_amplitude: f32, y_amplitude: Option<f32>, rng: R) -> Result<Self> {
        let y_amplitude = y_amplitude.unwrap_or(x_amplitude);
        Ok(Self {
            x_noise: noise("x", x_amplitude)?,
            y_noise: noise("y", y_amplitude)?,
            rng,
            cursor: PenCursor::new(),
        })
    }

    /// Standardabweichung (x, y).
    pub fn amplitudes(&self) -> (f32, f32) {
        (self.x_noise.std_dev(), self.y_noise.std_dev())
    }

    fn deviate(&mut self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x + self.x_noise.sample(&mut self.rng),
            point.y + self.y_noise.sample(&mut self.rng),
        )
    }
}

fn noise(axis: &str, amplitude: f32) -> Result<Normal<f32>> {
    if !amplitude.is_finite() || amplitude < 0.0 {
        return Err(anyhow!(
            "Jitter-Amplitude ({}) muss endlich und >= 0 sein: {}",
            axis,
            amplitude
        ));
    }
    Normal::new(0.0, amplitude).map_err(|e| anyhow!("Jitter-Amplitude ({}): {}", axis, e))
}

impl<R: Rng> StepVisitor for JitterVisitor<R> {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        let point = self.deviate(step.position);
        self.cursor.draw(point, out);
    }

    fn on_contour_close(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        self.cursor.finish(closed, out);
    }
}
