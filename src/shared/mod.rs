//! Geteilte Typen für Bibliothek und Binary.

/// Laufzeit-Optionen (TOML) und Visitor-Fabrik.
pub mod options;

pub use options::{EffectOptions, StepOptions};
