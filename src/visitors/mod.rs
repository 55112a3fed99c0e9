//! Step-Visitors: erzeugen aus dem Step-Strom neue Zeichenbefehle.
//!
//! Jeder Effekt implementiert den `StepVisitor`-Trait und wird einem `StepPen`
//! übergeben. Visitors führen ihren eigenen Zeichen-Cursor (`PenCursor`),
//! unabhängig vom Kontur-Zustand des Walkers.

/// Striche an jedem Step (tangential, normal oder fester Winkel).
pub mod dash;
/// Punkt-Stempel: Kreis an jedem Step.
pub mod dot;
/// Polylinie durch alle Steps.
pub mod flatten;
/// Gauß-verrauschte Polylinie.
pub mod jitter;
/// Sägezahn-Kontur mit Spitzen zwischen den Steps.
pub mod spike;


pub use dash::{DashVisitor, DEFAULT_DASH_LENGTH, DEFAULT_DASH_SHIFT};
pub use dot::{circle, DotVisitor, DEFAULT_DOT_RADIUS, DEFAULT_ROUNDNESS};
pub use flatten::FlattenVisitor;
pub use jitter::{JitterVisitor, DEFAULT_JITTER_AMPLITUDE};
pub use spike::{SpikeVisitor, DEFAULT_SPIKE_LENGTH};

use crate::core::OutlinePen;
use crate::walker::Step;
use glam::Vec2;

/// Schnittstelle für alle Step-Effekte.
pub trait StepVisitor {
    /// Wird einmal pro Step in Ablaufreihenfolge aufgerufen.
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen);

    /// Konturende in der Quelle (`closed = true` bei `close_path`).
    fn on_contour_close(&mut self, _closed: bool, _out: &mut dyn OutlinePen) {}

    /// Sollen Linien-Segmente in Steps zerlegt werden?
    ///
    /// `false` liefert pro Linie nur einen Step am Linienende.
    fn paces_lines(&self) -> bool {
        true
    }
}

impl<V: StepVisitor + ?Sized> StepVisitor for Box<V> {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        (**self).on_step(step, out);
    }

    fn on_contour_close(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        (**self).on_contour_close(closed, out);
    }

    fn paces_lines(&self) -> bool {
        (**self).paces_lines()
    }
}

impl<V: StepVisitor + ?Sized> StepVisitor for &mut V {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        (**self).on_step(step, out);
    }

    fn on_contour_close(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        (**self).on_contour_close(closed, out);
    }

    fn paces_lines(&self) -> bool {
        (**self).paces_lines()
    }
}

/// Zeichen-Cursor eines Visitors: ist in der Senke gerade eine Kontur offen?
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PenCursor {
    open: bool,
    last: Option<Vec2>,
}

impl PenCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ist in der Senke eine Kontur offen?
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Zuletzt gezeichneter bzw. markierter Punkt der offenen Kontur.
    pub fn last(&self) -> Option<Vec2> {
        self.last
    }

    /// `move_to` bei geschlossenem Cursor, sonst `line_to`.
    pub fn draw(&mut self, point: Vec2, out: &mut dyn OutlinePen) {
        if self.open {
            out.line_to(point);
        } else {
            out.move_to(point);
            self.open = true;
        }
        self.last = Some(point);
    }

    /// Merkt sich `point` als letzten Punkt, ohne zu zeichnen.
    pub fn mark(&mut self, point: Vec2) {
        self.last = Some(point);
    }

    /// Schließt bzw. beendet eine offene Kontur in der Senke.
    pub fn finish(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        if self.open {
            if closed {
                out.close_path();
            } else {
                out.end_path();
            }
        }
        *self = Self::default();
    }
}

/// Zeichnet nichts, sammelt nur den Step-Strom.
#[derive(Debug, Clone, Default)]
pub struct StepRecorder {
    /// Alle Steps in Ablaufreihenfolge
    pub steps: Vec<Step>,
    /// Konturenden in Reihenfolge (`true` = geschlossen)
    pub contour_closes: Vec<bool>,
    /// Anzahl Steps beim jeweiligen Konturende
    pub contour_ends: Vec<usize>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steps der Kontur mit Index `index` (in Ende-Reihenfolge).
    pub fn contour_steps(&self, index: usize) -> &[Step] {
        let start = if index == 0 {
            0
        } else {
            self.contour_ends.get(index - 1).copied().unwrap_or(self.steps.len())
        };
        let end = self
            .contour_ends
            .get(index)
            .copied()
            .unwrap_or(self.steps.len());
        &self.steps[start.min(end)..end]
    }
}

impl StepVisitor for StepRecorder {
    fn on_step(&mut self, step: &Step, _out: &mut dyn OutlinePen) {
        self.steps.push(*step);
    }

    fn on_contour_close(&mut self, closed: bool, _out: &mut dyn OutlinePen) {
        self.contour_closes.push(closed);
        self.contour_ends.push(self.steps.len());
    }
}
