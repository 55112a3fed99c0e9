//! Konfiguration eines Stepper-Laufs: Pacing und Effekt.
//!
//! `StepOptions` wird als TOML gelesen/geschrieben. Die `const`-Werte der
//! Visitors bleiben Fallback/Default.

use crate::visitors::{
    DashVisitor, DotVisitor, FlattenVisitor, JitterVisitor, SpikeVisitor, StepVisitor,
    DEFAULT_DASH_LENGTH, DEFAULT_DASH_SHIFT, DEFAULT_DOT_RADIUS, DEFAULT_JITTER_AMPLITUDE,
    DEFAULT_ROUNDNESS, DEFAULT_SPIKE_LENGTH,
};
use crate::walker::Pacing;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

// ── Effekte ─────────────────────────────────────────────────────────

/// Effekt-Auswahl samt Parametern. TOML: `[effect]` mit `kind = "dash"` usw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectOptions {
    /// Polylinie durch alle Steps
    Flatten,
    /// Verrauschte Polylinie
    Jitter {
        /// Standardabweichung in x
        #[serde(default = "default_jitter_amplitude")]
        x_amplitude: f32,
        /// Standardabweichung in y (fehlt: wie x)
        #[serde(default)]
        y_amplitude: Option<f32>,
        /// Fester Seed für reproduzierbare Ausgabe (fehlt: OS-Zufall)
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Striche an jedem Step
    Dash {
        #[serde(default = "default_dash_length")]
        length: f32,
        /// Fester Winkel in Grad
        #[serde(default)]
        angle: Option<f32>,
        #[serde(default)]
        normal: bool,
        #[serde(default)]
        embroidered: bool,
        #[serde(default = "default_dash_shift")]
        shift: f32,
    },
    /// Kreis an jedem Step
    Dot {
        #[serde(default = "default_dot_radius")]
        radius: f32,
        #[serde(default = "default_roundness")]
        roundness: f32,
    },
    /// Spitzen zwischen den Steps
    Spike {
        #[serde(default = "default_spike_length")]
        length: f32,
    },
}

impl Default for EffectOptions {
    fn default() -> Self {
        EffectOptions::Flatten
    }
}

fn default_jitter_amplitude() -> f32 {
    DEFAULT_JITTER_AMPLITUDE
}

fn default_dash_length() -> f32 {
    DEFAULT_DASH_LENGTH
}

fn default_dash_shift() -> f32 {
    DEFAULT_DASH_SHIFT
}

fn default_dot_radius() -> f32 {
    DEFAULT_DOT_RADIUS
}

fn default_roundness() -> f32 {
    DEFAULT_ROUNDNESS
}

fn default_spike_length() -> f32 {
    DEFAULT_SPIKE_LENGTH
}

impl EffectOptions {
    /// Name des Effekts wie im TOML (`kind`).
    pub fn kind(&self) -> &'static str {
        match self {
            EffectOptions::Flatten => "flatten",
            EffectOptions::Jitter { .. } => "jitter",
            EffectOptions::Dash { .. } => "dash",
            EffectOptions::Dot { .. } => "dot",
            EffectOptions::Spike { .. } => "spike",
        }
    }

    /// Prüft die Parameter, bevor ein Visitor gebaut wird.
    pub fn validate(&self) -> Result<()> {
        match *self {
            EffectOptions::Flatten => {}
            EffectOptions::Jitter {
                x_amplitude,
                y_amplitude,
                ..
            } => {
                non_negative("jitter.x_amplitude", x_amplitude)?;
                if let Some(y) = y_amplitude {
                    non_negative("jitter.y_amplitude", y)?;
                }
            }
            EffectOptions::Dash {
                length,
                angle,
                shift,
                ..
            } => {
                non_negative("dash.length", length)?;
                if let Some(angle) = angle {
                    finite("dash.angle", angle)?;
                }
                if !(0.0..=1.0).contains(&shift) {
                    bail!("dash.shift muss in [0, 1] liegen: {}", shift);
                }
            }
            EffectOptions::Dot { radius, roundness } => {
                non_negative("dot.radius", radius)?;
                finite("dot.roundness", roundness)?;
            }
            EffectOptions::Spike { length } => finite("spike.length", length)?,
        }
        Ok(())
    }

    /// Baut den passenden Visitor. Parameter werden vorher validiert.
    pub fn build_visitor(&self) -> Result<Box<dyn StepVisitor>> {
        self.validate()?;
        let visitor: Box<dyn StepVisitor> = match *self {
            EffectOptions::Flatten => Box::new(FlattenVisitor::new()),
            EffectOptions::Jitter {
                x_amplitude,
                y_amplitude,
                seed,
            } => match seed {
                Some(seed) => Box::new(JitterVisitor::seeded(x_amplitude, y_amplitude, seed)?),
                None => Box::new(JitterVisitor::new(x_amplitude, y_amplitude)?),
            },
            EffectOptions::Dash {
                length,
                angle,
                normal,
                embroidered,
                shift,
            } => Box::new(
                DashVisitor::new(length)
                    .with_angle_degrees(angle)
                    .with_normal(normal)
                    .with_embroidered(embroidered)
                    .with_shift(shift),
            ),
            EffectOptions::Dot { radius, roundness } => {
                Box::new(DotVisitor::new(radius).with_roundness(roundness))
            }
            EffectOptions::Spike { length } => Box::new(SpikeVisitor::new(length)),
        };
        Ok(visitor)
    }
}

fn finite(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        bail!("{} muss endlich sein: {}", name, value);
    }
    Ok(())
}

fn non_negative(name: &str, value: f32) -> Result<()> {
    finite(name, value)?;
    if value < 0.0 {
        bail!("{} darf nicht negativ sein: {}", name, value);
    }
    Ok(())
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Parameter eines Laufs. Fehlende Felder fallen auf Standardwerte zurück.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepOptions {
    /// Abtastung der Segmente
    #[serde(default)]
    pub pacing: Pacing,
    /// Aktiver Effekt
    #[serde(default)]
    pub effect: EffectOptions,
}

impl StepOptions {
    /// Parsed Optionen aus einem TOML-String und validiert sie.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content).context("Optionen-TOML fehlerhaft")?;
        options.validate()?;
        Ok(options)
    }

    /// Lädt Optionen aus einer TOML-Datei, Fallback auf Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen konnten nicht geschrieben werden: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Prüft Pacing und Effekt-Parameter.
    pub fn validate(&self) -> Result<()> {
        if let Pacing::ByDistance { pace } = self.pacing {
            if !(pace > 0.0) {
                log::warn!("pace {} ungültig, wird auf 1 angehoben", pace);
            }
        }
        self.effect
            .validate()
            .with_context(|| format!("Ungültige Parameter für Effekt '{}'", self.effect.kind()))
    }

    /// Baut den Visitor des konfigurierten Effekts.
    pub fn build_visitor(&self) -> Result<Box<dyn StepVisitor>> {
        self.effect.build_visitor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let options = StepOptions::from_toml_str("").unwrap();
        assert_eq!(options, StepOptions::default());
        assert_eq!(options.pacing, Pacing::ByDistance { pace: 20.0 });
        assert_eq!(options.effect, EffectOptions::Flatten);
    }

    #[test]
    fn test_effect_field_defaults() {
        let options = StepOptions::from_toml_str("[effect]\nkind = \"dash\"\nnormal = true\n").unwrap();
        assert_eq!(
            options.effect,
            EffectOptions::Dash {
                length: DEFAULT_DASH_LENGTH,
                angle: None,
                normal: true,
                embroidered: false,
                shift: DEFAULT_DASH_SHIFT,
            }
        );

        let spike = StepOptions::from_toml_str("[effect]\nkind = \"spike\"\n").unwrap();
        assert_eq!(spike.effect, EffectOptions::Spike { length: 25.0 });
    }

    #[test]
    fn test_pacing_from_toml() {
        let toml = "[pacing]\nmode = \"by_count\"\nsteps = 8\n";
        let options = StepOptions::from_toml_str(toml).unwrap();
        assert_eq!(options.pacing, Pacing::ByCount { steps: 8 });
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let negative_radius = "[effect]\nkind = \"dot\"\nradius = -1.0\n";
        let err = StepOptions::from_toml_str(negative_radius).unwrap_err();
        assert!(format!("{:#}", err).contains("dot.radius"));

        let bad_shift = "[effect]\nkind = \"dash\"\nshift = 1.5\n";
        assert!(StepOptions::from_toml_str(bad_shift).is_err());

        let bad_jitter = "[effect]\nkind = \"jitter\"\nx_amplitude = -2.0\n";
        assert!(StepOptions::from_toml_str(bad_jitter).is_err());
    }

    #[test]
    fn test_unknown_effect_kind_is_error() {
        assert!(StepOptions::from_toml_str("[effect]\nkind = \"wobble\"\n").is_err());
    }

    #[test]
    fn test_build_visitor_for_every_kind() {
        let effects = [
            EffectOptions::Flatten,
            EffectOptions::Jitter {
                x_amplitude: 2.0,
                y_amplitude: None,
                seed: Some(7),
            },
            EffectOptions::Dash {
                length: 4.0,
                angle: Some(45.0),
                normal: false,
                embroidered: true,
                shift: 0.0,
            },
            EffectOptions::Dot {
                radius: 3.0,
                roundness: DEFAULT_ROUNDNESS,
            },
            EffectOptions::Spike { length: 5.0 },
        ];
        for effect in effects {
            let visitor = effect.build_visitor().unwrap();
            assert_eq!(visitor.paces_lines(), effect.kind() != "flatten");
        }
    }
}
