//! Outline Stepper Library.
//!
//! Läuft Vektor-Konturen (Linien + kubische Bézier) in gleichmäßigen Steps ab und
//! lässt an jedem Step einen Effekt (Flatten, Jitter, Dash, Dot, Spike) zeichnen.

pub mod core;
pub mod shared;
pub mod visitors;
pub mod walker;

pub use core::{polyline, rect, Outline, OutlineCommand, OutlinePen};
pub use shared::{EffectOptions, StepOptions};
pub use visitors::{
    DashVisitor, DotVisitor, FlattenVisitor, JitterVisitor, PenCursor, SpikeVisitor,
    StepRecorder, StepVisitor,
};
pub use walker::{step_outline, Pacing, Step, StepPen, WalkerState};
