//! Flatten-Effekt: Kurven werden zur gepaceten Polylinie, Linien bleiben Linien.

use super::{PenCursor, StepVisitor};
use crate::core::OutlinePen;
use crate::walker::Step;

/// Zeichnet eine Polylinie durch alle Steps.
///
/// Linien werden nicht unterteilt (ein Step am Linienende), so dass Polygone
/// exakt ihre Eckpunkte behalten. Kurven-Befehle erreichen die Senke nie.
#[derive(Debug, Clone, Default)]
pub struct FlattenVisitor {
    cursor: PenCursor,
}

impl FlattenVisitor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepVisitor for FlattenVisitor {
    fn on_step(&mut self, step: &Step, out: &mut dyn OutlinePen) {
        self.cursor.draw(step.position, out);
    }

    fn on_contour_close(&mut self, closed: bool, out: &mut dyn OutlinePen) {
        self.cursor.finish(closed, out);
    }

    fn paces_lines(&self) -> bool {
        false
    }
}
