//! Core-Domänentypen: Zeichenprotokoll, aufgezeichnete Outlines und Geometrie.

/// Reine Geometrie-Funktionen (Abstand, Winkel, kubische Bézier, Intervalle)
pub mod geometry;
pub mod outline;
pub mod pen;

pub use outline::{polyline, rect, Outline, OutlineCommand};
pub use pen::OutlinePen;
