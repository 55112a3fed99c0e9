//! Step-Datensatz und kurzlebiger Kontur-Zustand des Walkers.

use super::pacing::Pacing;
use crate::core::geometry::{angle, cubic_tangent, distance, evaluate_cubic, tangent_angle};
use glam::Vec2;
use std::collections::HashSet;

/// Ein abgetasteter Punkt entlang einer Kontur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Position des Steps
    pub position: Vec2,
    /// Tangentenrichtung an dieser Stelle (Radiant)
    pub tangent_angle: f32,
    /// Fortschritt innerhalb des aktuellen Segments in [0, 1]; bei Kurven stets < 1
    pub progress: f32,
}

impl Step {
    pub fn new(position: Vec2, tangent_angle: f32, progress: f32) -> Self {
        Self {
            position,
            tangent_angle,
            progress,
        }
    }
}

/// Zustand einer einzelnen Kontur. Lebt von `move_to` bis `close_path`/`end_path`.
#[derive(Debug, Clone)]
pub struct WalkerState {
    /// Startpunkt der Kontur (Ziel der synthetischen Schließlinie)
    start: Vec2,
    /// Aktueller Punkt (Ende des letzten Segments)
    current: Vec2,
    /// true direkt nach `move_to`, bis das erste Segment den Rand-Step erzeugt hat
    at_move: bool,
    /// Bereits ausgegebene oder besuchte Positionen (Bit-Muster) für die Deduplizierung
    visited: HashSet<(u32, u32)>,
    /// Gepufferte On-Curve-Punkte der Kontur
    vertices: Vec<Vec2>,
    /// Anzahl ausgegebener Steps
    emitted: usize,
}

/// Hash-Schlüssel einer Position; -0.0 und 0.0 gelten als gleich.
fn position_key(p: Vec2) -> (u32, u32) {
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

impl WalkerState {
    /// Beginnt eine Kontur bei `start`.
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            current: start,
            at_move: true,
            visited: HashSet::new(),
            vertices: vec![start],
            emitted: 0,
        }
    }

    /// Startpunkt der Kontur.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Aktueller Punkt.
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Steht der Walker noch direkt hinter dem `move_to`?
    pub fn is_at_move(&self) -> bool {
        self.at_move
    }

    /// Gepufferte On-Curve-Punkte (Start + Segment-Endpunkte).
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Anzahl bisher ausgegebener Steps dieser Kontur.
    pub fn emitted_count(&self) -> usize {
        self.emitted
    }

    /// Läuft eine Linie nach `to` ab und gibt die Anzahl ausgegebener Steps zurück.
    ///
    /// `paced = false` erzeugt genau einen Step am Linienende (Durchreichen).
    pub fn line_to<F: FnMut(Step)>(
        &mut self,
        to: Vec2,
        pacing: &Pacing,
        paced: bool,
        mut emit: F,
    ) -> usize {
        let from = self.current;
        let length = distance(from, to);
        let direction = angle(from, to);
        let before = self.emitted;

        self.emit_boundary(direction, &mut emit);

        let steps = if paced { pacing.line_steps(length) } else { 1 };
        for i in 1..=steps {
            let progress = i as f32 / steps as f32;
            // Letzter Step exakt auf dem Endpunkt, ohne Rundungsfehler der Interpolation
            let position = if i == steps {
                to
            } else {
                from + (to - from) * progress
            };
            self.emit_unique(Step::new(position, direction, progress), &mut emit);
        }

        self.advance(to);
        self.emitted - before
    }

    /// Läuft eine kubische Bézier nach `to` ab und gibt die Anzahl ausgegebener Steps zurück.
    pub fn curve_to<F: FnMut(Step)>(
        &mut self,
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
        pacing: &Pacing,
        mut emit: F,
    ) -> usize {
        let from = self.current;
        let before = self.emitted;

        let start_tangent = cubic_tangent(from, control1, control2, to, 0.0);
        self.emit_boundary(tangent_angle(start_tangent), &mut emit);

        // Kurve kürzer als ein Pace: nur [0.0], keine inneren Steps
        let intervals = pacing.curve_intervals(from, control1, control2, to);
        let count = intervals.len() as f32;
        for (k, &t) in intervals.iter().enumerate().skip(1) {
            let position = evaluate_cubic(from, control1, control2, to, t);
            let tangent = cubic_tangent(from, control1, control2, to, t);
            // Fortschritt bleibt < 1
            let step = Step::new(position, tangent_angle(tangent), k as f32 / count);
            self.emit_unique(step, &mut emit);
        }

        self.advance(to);
        self.emitted - before
    }

    /// Rand-Step am Konturanfang (nur beim ersten Segment nach `move_to`).
    fn emit_boundary<F: FnMut(Step)>(&mut self, tangent_angle: f32, emit: &mut F) {
        if !self.at_move {
            return;
        }
        self.at_move = false;
        let start = self.current;
        self.visited.insert(position_key(start));
        self.emitted += 1;
        emit(Step::new(start, tangent_angle, 0.0));
    }

    /// Gibt den Step nur aus, wenn seine Position in dieser Kontur noch nicht vorkam.
    fn emit_unique<F: FnMut(Step)>(&mut self, step: Step, emit: &mut F) -> bool {
        if !self.visited.insert(position_key(step.position)) {
            return false;
        }
        self.emitted += 1;
        emit(step);
        true
    }

    fn advance(&mut self, to: Vec2) {
        self.visited.insert(position_key(to));
        self.vertices.push(to);
        self.current = to;
    }
}
