//! Dash-Effekt: kurzer Strich an jedem Step.

use super::{PenCursor, StepVisitor};
use crate::core::geometry::satellite_pair;
use crate::core::OutlinePen;
use crate::walker::Step;
use std::f32::consts::FRAC_PI_2;

/// Standard-Strichlänge.
pub const DEFAULT_DASH_LENGTH: f32 = 10.0;
/// Standard-Verschiebung: Strich zentriert auf dem Step.
pub const DEFAULT_DASH_SHIFT: f32 = 0.5;

/// Zeichnet an jedem Step einen Strich der Länge `length`.
///
/// Ausrichtung: entlang der Tangente, senkrecht dazu (`normal`) oder unter einem
/// festen Winkel (`angle`, überschreibt beides). Im Stick-Modus (`embroidered`)
/// werden die Striche pro Kontur zu einem durchgehenden Zickzack verkettet.
#[derive(Debug, Clone)]
pub struct DashVisitor {
    /// Strichlänge
    pub length: f32,
    /// Fester Winkel in Radiant
    pub angle: Option<f32>,
    /// Senkrecht statt tangential
    pub normal: bool,
    /// Striche verketten statt einzeln abschließen
    pub embroidered: bool,
    /// Anteil der Strichlänge vor dem Step (0.5 = zentriert)
    pub shift: f32,
    cursor: PenCursor,
}

impl Default for DashVisitor {
    fn default() -> Self {
        Self::new(DEFAULT_DASH_LENGTH)
    }
}

impl DashVisitor {
    /// Tangentiale, zentrierte Einzelstriche.
    pub fn new(length: f32) -> Self {
        Self {
            length,
            angle: None,
            normal: false,
            embroidered: false,
            shift: DEFAULT_DASH_SHIFT,
            cursor: PenCursor::new(),
        }
    }

    /// Striche senkrecht zur Kontur.
    pub fn with_normal(mut self, normal: bool) -> Self {
        self.normal = normal;
        self
    }

    /// Fester Winkel in Grad (überschreibt `normal`).
    pub fn with_angle_degrees(mut self, degrees: Option<f32>) -> Self {
        self.angle = degrees.map(f32::to_radians);
        self
    }

    /// Stick-Modus: Striche verketten.
    pub fn with_embroidered(mut self, embroidered: bool) -> Self {
        self.embroidered = embroidered;
        self
    }

    /// Verschiebung des Strichs relativ zum Step.
    pub fn with_shift(mut self, shift: f32) -> Self {
        self.shift = shift;
        self
    }

    /// Strich-Richtung am Step.
    fn dash_angle(&self, step: &Step) -> f32 {
        match self.angle {
            Some(angle) => angle,
            None if self.normal => step.tangent_angle + FRAC_PI_2,
            None => step.tangent_angle,
        }
    }
}

impl StepVisitor for DashVisitor {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        let (head, tail) = satellite_pair(
            step.position,
            self.dash_angle(step),
            self.length,
            self.shift,
        );

        if self.embroidered {
            // Erster Strich der Kontur beginnt mit move_to, alle weiteren hängen an
            self.cursor.draw(head, out);
            out.line_to(tail);
            self.cursor.mark(tail);
        } else {
            out.move_to(head);
            out.line_to(tail);
            out.end_path();
        }
    }

    fn on_contour_close(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        self.cursor.finish(closed, out);
    }
}
