#![no_main]

use libfuzzer_sys::fuzz_target;
use outline_stepper::{step_outline, DashVisitor, FlattenVisitor, Outline, Pacing, SpikeVisitor};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    // Darf Fehler liefern, aber nie paniken
    let Ok(outline) = Outline::from_json_str(json) else {
        return;
    };
    // Schrittzahl wächst linear mit der Kontur-Länge
    if outline
        .on_curve_points()
        .iter()
        .any(|p| p.abs().max_element() > 10_000.0)
    {
        return;
    }
    let pacing = Pacing::by_distance(5.0);
    let _ = step_outline(&outline, pacing, FlattenVisitor::new());
    let _ = step_outline(&outline, pacing, DashVisitor::new(4.0).with_embroidered(true));
    let _ = step_outline(&outline, pacing, SpikeVisitor::default());
});
