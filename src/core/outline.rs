//! Aufgezeichnete Kontur-Befehle: Senke (implementiert `OutlinePen`) und Quelle (`replay`).

use super::pen::OutlinePen;
use anyhow::{bail, Context, Result};
use glam::{Affine2, Vec2};
use serde::{Deserialize, Serialize};

/// Ein einzelner Zeichenbefehl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum OutlineCommand {
    /// Neue Kontur beginnen
    MoveTo { to: Vec2 },
    /// Gerade Linie
    LineTo { to: Vec2 },
    /// Quadratische Bézier (TrueType-Quellen), wird beim Abspielen abgelehnt
    QuadTo { control: Vec2, to: Vec2 },
    /// Kubische Bézier
    CurveTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    /// Kontur schließen
    ClosePath,
    /// Kontur offen beenden
    EndPath,
    /// Komponenten-Referenz (wird nie abgelaufen, nur durchgereicht)
    AddComponent { name: String, transform: Affine2 },
}

/// Eine Folge von Zeichenbefehlen, z.B. eine Glyphe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    commands: Vec<OutlineCommand>,
}

impl Outline {
    /// Erstellt eine leere Outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Outline aus fertigen Befehlen.
    pub fn from_commands(commands: Vec<OutlineCommand>) -> Self {
        Self { commands }
    }

    /// Parsed eine Outline aus JSON (Liste von Befehlen).
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Outline-JSON konnte nicht gelesen werden")
    }

    /// Serialisiert die Outline als JSON.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Outline konnte nicht serialisiert werden")
    }

    /// Gibt die Befehle zurück.
    pub fn commands(&self) -> &[OutlineCommand] {
        &self.commands
    }

    /// Gibt `true` zurück wenn die Outline keine Befehle enthält.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Anzahl der Befehle.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Hängt einen Befehl an.
    pub fn push(&mut self, command: OutlineCommand) {
        self.commands.push(command);
    }

    /// Anzahl der begonnenen Konturen (MoveTo-Befehle).
    pub fn contour_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, OutlineCommand::MoveTo { .. }))
            .count()
    }

    /// Enthält die Outline Kurven-Befehle?
    pub fn has_curves(&self) -> bool {
        self.commands.iter().any(|c| {
            matches!(
                c,
                OutlineCommand::CurveTo { .. } | OutlineCommand::QuadTo { .. }
            )
        })
    }

    /// Alle On-Curve-Punkte in Zeichenreihenfolge (Move-, Linien- und Kurven-Endpunkte).
    pub fn on_curve_points(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                OutlineCommand::MoveTo { to }
                | OutlineCommand::LineTo { to }
                | OutlineCommand::QuadTo { to, .. }
                | OutlineCommand::CurveTo { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    /// Spielt alle Befehle in `pen` ab.
    ///
    /// Quadratische Segmente gehören nicht zum Protokoll und führen zu einem Fehler.
    /// Geprüft wird vor dem ersten Befehl: die Senke sieht nie eine halbe Outline.
    pub fn replay<P: OutlinePen + ?Sized>(&self, pen: &mut P) -> Result<()> {
        if let Some(index) = self
            .commands
            .iter()
            .position(|c| matches!(c, OutlineCommand::QuadTo { .. }))
        {
            bail!(unsupported_segment(index));
        }

        for (index, command) in self.commands.iter().enumerate() {
            match command {
                OutlineCommand::MoveTo { to } => pen.move_to(*to),
                OutlineCommand::LineTo { to } => pen.line_to(*to),
                OutlineCommand::CurveTo {
                    control1,
                    control2,
                    to,
                } => pen.curve_to(*control1, *control2, *to),
                OutlineCommand::ClosePath => pen.close_path(),
                OutlineCommand::EndPath => pen.end_path(),
                OutlineCommand::AddComponent { name, transform } => {
                    pen.add_component(name, *transform)
                }
                OutlineCommand::QuadTo { .. } => bail!(unsupported_segment(index)),
            }
        }
        Ok(())
    }

    /// SVG-Pfaddaten (`d`-Attribut). Komponenten werden ausgelassen.
    pub fn to_svg_path_data(&self) -> String {
        let mut parts = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            match command {
                OutlineCommand::MoveTo { to } => parts.push(format!("M{} {}", to.x, to.y)),
                OutlineCommand::LineTo { to } => parts.push(format!("L{} {}", to.x, to.y)),
                OutlineCommand::QuadTo { control, to } => parts.push(format!(
                    "Q{} {} {} {}",
                    control.x, control.y, to.x, to.y
                )),
                OutlineCommand::CurveTo {
                    control1,
                    control2,
                    to,
                } => parts.push(format!(
                    "C{} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                )),
                OutlineCommand::ClosePath => parts.push("Z".to_string()),
                OutlineCommand::EndPath | OutlineCommand::AddComponent { .. } => {}
            }
        }
        parts.join(" ")
    }
}

fn unsupported_segment(index: usize) -> String {
    format!(
        "Nicht unterstützter Segment-Typ an Befehl {}: quadratische Bézier (nur Linien und kubische Kurven)",
        index
    )
}

impl OutlinePen for Outline {
    fn move_to(&mut self, to: Vec2) {
        self.commands.push(OutlineCommand::MoveTo { to });
    }

    fn line_to(&mut self, to: Vec2) {
        self.commands.push(OutlineCommand::LineTo { to });
    }

    fn curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        self.commands.push(OutlineCommand::CurveTo {
            control1,
            control2,
            to,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(OutlineCommand::ClosePath);
    }

    fn end_path(&mut self) {
        self.commands.push(OutlineCommand::EndPath);
    }

    fn add_component(&mut self, name: &str, transform: Affine2) {
        self.commands.push(OutlineCommand::AddComponent {
            name: name.to_string(),
            transform,
        });
    }
}

// Outline-Primitive

/// Achsparalleles Rechteck als geschlossene Kontur aus vier Linien.
pub fn rect(min: Vec2, max: Vec2) -> Outline {
    let mut outline = Outline::new();
    outline.move_to(min);
    outline.line_to(Vec2::new(max.x, min.y));
    outline.line_to(max);
    outline.line_to(Vec2::new(min.x, max.y));
    outline.close_path();
    outline
}

/// Geöffneter Linienzug durch `points`.
pub fn polyline(points: &[Vec2]) -> Outline {
    let mut outline = Outline::new();
    let Some((&first, rest)) = points.split_first() else {
        return outline;
    };
    outline.move_to(first);
    for &p in rest {
        outline.line_to(p);
    }
    outline.end_path();
    outline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_replay_roundtrip() {
        let mut source = Outline::new();
        source.move_to(Vec2::new(0.0, 0.0));
        source.curve_to(
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(10.0, 0.0),
        );
        source.close_path();
        source.add_component("acute", Affine2::from_translation(Vec2::new(5.0, 0.0)));

        let mut copy = Outline::new();
        source.replay(&mut copy).unwrap();
        assert_eq!(copy, source);
    }

    #[test]
    fn test_replay_rejects_quadratic_segments() {
        let outline = Outline::from_commands(vec![
            OutlineCommand::MoveTo { to: Vec2::ZERO },
            OutlineCommand::QuadTo {
                control: Vec2::new(5.0, 5.0),
                to: Vec2::new(10.0, 0.0),
            },
            OutlineCommand::ClosePath,
        ]);
        let mut sink = Outline::new();
        let err = outline.replay(&mut sink).unwrap_err();
        assert!(err.to_string().contains("quadratische"));
        assert!(sink.is_empty(), "Senke darf nichts empfangen haben");
    }

    #[test]
    fn test_json_format() {
        let json = r#"[
            {"op": "move_to", "to": [0.0, 0.0]},
            {"op": "line_to", "to": [10.0, 0.0]},
            {"op": "close_path"}
        ]"#;
        let outline = Outline::from_json_str(json).unwrap();
        assert_eq!(outline.len(), 3);
        assert_eq!(outline.contour_count(), 1);
        assert_eq!(outline.to_svg_path_data(), "M0 0 L10 0 Z");
    }

    #[test]
    fn test_json_unknown_segment_type_is_error() {
        let json = r#"[{"op": "arc_to", "to": [1.0, 1.0]}]"#;
        assert!(Outline::from_json_str(json).is_err());
    }

    #[test]
    fn test_rect_and_polyline_primitives() {
        let r = rect(Vec2::ZERO, Vec2::new(4.0, 2.0));
        assert_eq!(r.on_curve_points().len(), 4);
        assert!(!r.has_curves());
        assert_eq!(r.commands().last(), Some(&OutlineCommand::ClosePath));

        let p = polyline(&[Vec2::ZERO, Vec2::X, Vec2::ONE]);
        assert_eq!(p.commands().last(), Some(&OutlineCommand::EndPath));
        assert!(polyline(&[]).is_empty());
    }
}
