//! Path-Walker: läuft eine Outline Segment für Segment ab und erzeugt Steps.
//!
//! `StepPen` implementiert selbst `OutlinePen`. Die Quelle treibt den Walker,
//! der Walker treibt den aktiven `StepVisitor`, der Visitor zeichnet in die Senke.
//! Da Quelle und Senke dasselbe Protokoll sprechen, lassen sich Walker verketten.

mod pacing;
mod state;


pub use pacing::{Pacing, DEFAULT_PACE, MIN_PACE};
pub use state::{Step, WalkerState};

use crate::core::{Outline, OutlinePen};
use crate::visitors::StepVisitor;
use anyhow::{Context, Result};
use glam::{Affine2, Vec2};

/// Stift, der eingehende Segmente in Steps zerlegt und an einen Visitor weitergibt.
pub struct StepPen<V, P> {
    pacing: Pacing,
    visitor: V,
    sink: P,
    /// Zustand der offenen Kontur (`None` außerhalb von Konturen)
    contour: Option<WalkerState>,
}

impl<V: StepVisitor, P: OutlinePen> StepPen<V, P> {
    /// Erstellt einen Walker. Ungültiges Pacing wird geklemmt (siehe [`Pacing::normalized`]).
    pub fn new(visitor: V, sink: P, pacing: Pacing) -> Self {
        Self {
            pacing: pacing.normalized(),
            visitor,
            sink,
            contour: None,
        }
    }

    /// Aktuelles Pacing.
    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    /// Wechselt das Pacing. Wirkt ab dem nächsten Segment.
    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.pacing = pacing.normalized();
    }

    /// Zugriff auf den Visitor.
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    /// Zugriff auf die Senke.
    pub fn sink(&self) -> &P {
        &self.sink
    }

    /// Zustand der offenen Kontur, falls vorhanden.
    pub fn contour(&self) -> Option<&WalkerState> {
        self.contour.as_ref()
    }

    /// Beendet den Walker und gibt die Senke zurück.
    ///
    /// Eine noch offene Kontur wird dabei wie mit `end_path` beendet.
    pub fn into_sink(self) -> P {
        self.into_parts().1
    }

    /// Beendet den Walker und gibt Visitor und Senke zurück.
    pub fn into_parts(mut self) -> (V, P) {
        if self.contour.is_some() {
            log::debug!("Walker beendet mit offener Kontur, schließe per end_path");
            self.finish_contour(false);
        }
        (self.visitor, self.sink)
    }

    /// Verwirft den Kontur-Zustand und meldet das Konturende an den Visitor.
    fn finish_contour(&mut self, closed: bool) {
        if let Some(state) = self.contour.take() {
            log::debug!(
                "Kontur {} nach {} Punkten: {} Steps",
                if closed { "geschlossen" } else { "beendet" },
                state.vertices().len(),
                state.emitted_count()
            );
        }
        self.visitor.on_contour_close(closed, &mut self.sink);
    }
}

impl<V: StepVisitor, P: OutlinePen> OutlinePen for StepPen<V, P> {
    fn move_to(&mut self, to: Vec2) {
        if self.contour.is_some() {
            log::debug!("move_to bei offener Kontur, vorherige Kontur wird beendet");
            self.finish_contour(false);
        }
        log::trace!("Kontur beginnt bei ({}, {})", to.x, to.y);
        self.contour = Some(WalkerState::new(to));
    }

    fn line_to(&mut self, to: Vec2) {
        if self.contour.is_none() {
            log::warn!("line_to ohne move_to, beginne Kontur bei ({}, {})", to.x, to.y);
            self.move_to(to);
            return;
        }
        let Self {
            pacing,
            visitor,
            sink,
            contour,
        } = self;
        let Some(state) = contour.as_mut() else {
            return;
        };
        let paced = visitor.paces_lines();
        let count = state.line_to(to, pacing, paced, |step| visitor.on_step(&step, &mut *sink));
        log::trace!("line_to ({}, {}): {} Steps", to.x, to.y, count);
    }

    fn curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        if self.contour.is_none() {
            log::warn!("curve_to ohne move_to, beginne Kontur bei ({}, {})", to.x, to.y);
            self.move_to(to);
            return;
        }
        let Self {
            pacing,
            visitor,
            sink,
            contour,
        } = self;
        let Some(state) = contour.as_mut() else {
            return;
        };
        let count = state.curve_to(control1, control2, to, pacing, |step| {
            visitor.on_step(&step, &mut *sink)
        });
        log::trace!("curve_to ({}, {}): {} Steps", to.x, to.y, count);
    }

    fn close_path(&mut self) {
        // Schließlinie zurück zum Start; fällt bei bereits geschlossener Kontur auf Länge 0.
        // Ein einzelner move_to liefert so seinen Rand-Step.
        if let Some(start) = self.contour.as_ref().map(WalkerState::start) {
            self.line_to(start);
        }
        self.finish_contour(true);
    }

    fn end_path(&mut self) {
        self.finish_contour(false);
    }

    fn add_component(&mut self, name: &str, transform: Affine2) {
        self.sink.add_component(name, transform);
    }
}

/// Lässt `outline` einmal durch einen Walker mit `visitor` laufen und liefert das Ergebnis.
pub fn step_outline<V: StepVisitor>(outline: &Outline, pacing: Pacing, visitor: V) -> Result<Outline> {
    let mut pen = StepPen::new(visitor, Outline::new(), pacing);
    outline
        .replay(&mut pen)
        .context("Outline konnte nicht abgelaufen werden")?;
    Ok(pen.into_sink())
}
