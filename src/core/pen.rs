//! Zeichen-Protokoll: die Callback-Schnittstelle zwischen Quelle, Walker und Senke.
//!
//! Quelle und Senke sprechen dasselbe Protokoll. Dadurch lassen sich Walker
//! hintereinander schalten (die Ausgabe eines Effekts ist Quelle des nächsten).

use glam::{Affine2, Vec2};

/// Empfänger von Kontur-Befehlen (Stift-Protokoll).
pub trait OutlinePen {
    /// Beginnt eine neue Kontur am Punkt `to`.
    fn move_to(&mut self, to: Vec2);

    /// Gerade Linie vom aktuellen Punkt nach `to`.
    fn line_to(&mut self, to: Vec2);

    /// Kubische Bézier vom aktuellen Punkt über `control1`/`control2` nach `to`.
    fn curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2);

    /// Schließt die aktuelle Kontur.
    fn close_path(&mut self);

    /// Beendet die aktuelle Kontur offen.
    fn end_path(&mut self);

    /// Referenz auf eine Komponente (z.B. Sub-Glyphe) mit Platzierung.
    fn add_component(&mut self, name: &str, transform: Affine2);
}

impl<P: OutlinePen + ?Sized> OutlinePen for &mut P {
    fn move_to(&mut self, to: Vec2) {
        (**self).move_to(to);
    }

    fn line_to(&mut self, to: Vec2) {
        (**self).line_to(to);
    }

    fn curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        (**self).curve_to(control1, control2, to);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }

    fn end_path(&mut self) {
        (**self).end_path();
    }

    fn add_component(&mut self, name: &str, transform: Affine2) {
        (**self).add_component(name, transform);
    }
}

impl<P: OutlinePen + ?Sized> OutlinePen for Box<P> {
    fn move_to(&mut self, to: Vec2) {
        (**self).move_to(to);
    }

    fn line_to(&mut self, to: Vec2) {
        (**self).line_to(to);
    }

    fn curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        (**self).curve_to(control1, control2, to);
    }

    fn close_path(&mut self) {
        (**self).close_path();
    }

    fn end_path(&mut self) {
        (**self).end_path();
    }

    fn add_component(&mut self, name: &str, transform: Affine2) {
        (**self).add_component(name, transform);
    }
}
