//! Geometrie-Kern: Vektor-Hilfen, kubische Bézier-Auswertung und Intervall-Erzeugung.
//!
//! Layer-neutral: wird vom Walker und von den Step-Visitors gleichermaßen benutzt.

use glam::Vec2;

/// Euklidischer Abstand zwischen zwei Punkten.
pub fn distance(from: Vec2, to: Vec2) -> f32 {
    from.distance(to)
}

/// Richtung von `from` nach `to` in Radiant (atan2).
pub fn angle(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}

/// Verschiebt `point` um `distance` entlang `angle` (negativer Abstand = Gegenrichtung).
pub fn polar_offset(point: Vec2, angle: f32, distance: f32) -> Vec2 {
    point + Vec2::from_angle(angle) * distance
}

/// Zwei Punkte auf einer Geraden durch `point` unter `angle`.
///
/// Der erste liegt `width * shift` vorwärts, der zweite `width * (1 - shift)` rückwärts.
/// `shift = 0.5` zentriert das Paar auf `point`.
pub fn satellite_pair(point: Vec2, angle: f32, width: f32, shift: f32) -> (Vec2, Vec2) {
    let forward = polar_offset(point, angle, width * shift);
    let backward = polar_offset(point, angle, -(width * (1.0 - shift)));
    (forward, backward)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·C1 + 3(1-t)t²·C2 + t³·P3
///
/// Bernstein-Form, damit t=0 exakt `p0` und t=1 exakt `p3` liefert.
pub fn evaluate_cubic(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * c1 + 3.0 * inv * t2 * c2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(C1-P0) + 6(1-t)t·(C2-C1) + 3t²·(P3-C2)
///
/// Nicht normiert; bei zusammenfallenden Steuerpunkten kann der Vektor null sein.
pub fn cubic_tangent(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (c1 - p0) + 6.0 * inv * t * (c2 - c1) + 3.0 * t * t * (p3 - c2)
}

/// Winkel eines (Tangenten-)Vektors in Radiant.
pub fn tangent_angle(vector: Vec2) -> f32 {
    vector.y.atan2(vector.x)
}

/// Skaliert `values` linear auf `[new_min, new_max]`.
///
/// Das Verhältnis wird als `v / (last - first)` gebildet, ohne `first` abzuziehen.
/// Da die Intervall-Listen immer bei 0 beginnen, ist das gleichwertig.
/// Bei Delta 0 bleiben die Werte unverändert.
pub fn remap(values: &mut [f32], new_min: f32, new_max: f32) {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return;
    };
    let init_delta = last - first;
    if init_delta == 0.0 {
        return;
    }
    let new_delta = new_max - new_min;
    for value in values.iter_mut() {
        let ratio = *value / init_delta;
        *value = new_min + new_delta * ratio;
    }
}

/// Annähernd distanz-gleichmäßige t-Werte entlang einer kubischen Bézier.
///
/// Tastet die Kurve mit `ceil(1.5 × Sehnenlänge)` gleichmäßigen t-Schritten ab,
/// summiert die Polylinien-Länge und merkt sich jedes t, an dem die Summe das nächste
/// Vielfache von `pace` erreicht (höchstens eins pro Abtastung). Anschließend wird die
/// Liste per [`remap`] auf `[0, 1]` gestreckt. Das ist bewusst nur eine Näherung der
/// Bogenlängen-Parametrisierung.
///
/// Gibt `(t-Werte beginnend bei 0.0, Polylinien-Länge)` zurück.
pub fn curve_intervals(p0: Vec2, c1: Vec2, c2: Vec2, p3: Vec2, pace: f32) -> (Vec<f32>, f32) {
    let subdivisions = ((p0.distance(p3) * 1.5).ceil() as usize).max(1);

    let mut intervals = vec![0.0f32];
    let mut length = 0.0f32;
    let mut crossings = 1u32;
    let mut previous = p0;

    for i in 1..=subdivisions {
        let t = i as f32 / subdivisions as f32;
        let point = evaluate_cubic(p0, c1, c2, p3, t);
        length += previous.distance(point);
        if length >= crossings as f32 * pace {
            intervals.push(t);
            crossings += 1;
        }
        previous = point;
    }

    remap(&mut intervals, 0.0, 1.0);
    (intervals, length)
}

/// Gleichmäßige t-Werte `k / steps` für `k` in `0..=steps`.
pub fn uniform_intervals(steps: u32) -> Vec<f32> {
    let steps = steps.max(1);
    (0..=steps).map(|k| k as f32 / steps as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn s_curve() -> (Vec2, Vec2, Vec2, Vec2) {
        (
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
        )
    }

    #[test]
    fn test_distance_and_angle() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_relative_eq!(distance(a, b), 5.0);
        assert_relative_eq!(angle(Vec2::ZERO, Vec2::new(0.0, 3.0)), FRAC_PI_2);
        assert_relative_eq!(angle(Vec2::ZERO, Vec2::new(-2.0, 0.0)), PI);
    }

    #[test]
    fn test_polar_offset_negative_distance() {
        let p = polar_offset(Vec2::new(10.0, 10.0), 0.0, -4.0);
        assert_relative_eq!(p.x, 6.0);
        assert_relative_eq!(p.y, 10.0);
    }

    #[test]
    fn test_satellite_pair_centered() {
        let (a, b) = satellite_pair(Vec2::new(5.0, 5.0), FRAC_PI_2, 10.0, 0.5);
        assert_relative_eq!(a.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(a.y, 10.0, epsilon = 1e-5);
        assert_relative_eq!(b.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(b.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_satellite_pair_shift_zero_starts_at_point() {
        let (a, b) = satellite_pair(Vec2::ZERO, 0.0, 8.0, 0.0);
        assert_eq!(a, Vec2::ZERO);
        assert_relative_eq!(b.x, -8.0);
    }

    #[test]
    fn test_evaluate_cubic_endpoints_exact() {
        let (p0, c1, c2, p3) = s_curve();
        assert_eq!(evaluate_cubic(p0, c1, c2, p3, 0.0), p0);
        assert_eq!(evaluate_cubic(p0, c1, c2, p3, 1.0), p3);

        let odd = (
            Vec2::new(0.1, -3.7),
            Vec2::new(17.3, 4.1),
            Vec2::new(-2.9, 8.8),
            Vec2::new(33.3, 0.7),
        );
        assert_eq!(evaluate_cubic(odd.0, odd.1, odd.2, odd.3, 0.0), odd.0);
        assert_eq!(evaluate_cubic(odd.0, odd.1, odd.2, odd.3, 1.0), odd.3);
    }

    #[test]
    fn test_evaluate_cubic_midpoint() {
        // B(0.5) = (P0 + 3·C1 + 3·C2 + P3) / 8
        let (p0, c1, c2, p3) = s_curve();
        let mid = evaluate_cubic(p0, c1, c2, p3, 0.5);
        assert_relative_eq!(mid.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(mid.y, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn test_cubic_tangent_at_endpoints() {
        let (p0, c1, c2, p3) = s_curve();
        let start = cubic_tangent(p0, c1, c2, p3, 0.0);
        let end = cubic_tangent(p0, c1, c2, p3, 1.0);
        // Startrichtung: 3·(C1-P0), Endrichtung: 3·(P3-C2)
        assert_relative_eq!(start.x, 0.0);
        assert_relative_eq!(start.y, 300.0);
        assert_relative_eq!(end.x, 0.0);
        assert_relative_eq!(end.y, 300.0);
        assert_relative_eq!(tangent_angle(start), FRAC_PI_2);
    }

    #[test]
    fn test_remap_zero_delta_keeps_values() {
        let mut values = vec![0.0];
        remap(&mut values, 0.0, 1.0);
        assert_eq!(values, vec![0.0]);

        let mut empty: Vec<f32> = Vec::new();
        remap(&mut empty, 0.0, 1.0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_remap_stretches_to_unit() {
        let mut values = vec![0.0, 0.2, 0.4];
        remap(&mut values, 0.0, 1.0);
        assert_relative_eq!(values[1], 0.5);
        assert_eq!(values[2], 1.0);
    }

    #[test]
    fn test_curve_intervals_monotonic_from_zero() {
        let (p0, c1, c2, p3) = s_curve();
        let (intervals, length) = curve_intervals(p0, c1, c2, p3, 10.0);

        assert!(!intervals.is_empty());
        assert_eq!(intervals[0], 0.0);
        for pair in intervals.windows(2) {
            assert!(pair[1] > pair[0], "t-Werte nicht streng steigend: {:?}", pair);
        }
        assert_eq!(*intervals.last().unwrap(), 1.0);
        // Sehne ~141, Kurve deutlich länger
        assert!(length > 141.0);
        // Ungefähr ein Intervall pro `pace` Längeneinheiten
        let expected = (length / 10.0).floor() as usize + 1;
        assert!(intervals.len().abs_diff(expected) <= 1);
    }

    #[test]
    fn test_curve_intervals_degenerate_curve() {
        let p = Vec2::new(3.0, 3.0);
        let (intervals, length) = curve_intervals(p, p, p, p, 10.0);
        assert_eq!(intervals, vec![0.0]);
        assert_eq!(length, 0.0);
    }

    #[test]
    fn test_curve_intervals_pace_larger_than_curve() {
        let (intervals, _) = curve_intervals(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(3.0, 0.0),
            50.0,
        );
        assert_eq!(intervals, vec![0.0]);
    }

    #[test]
    fn test_uniform_intervals() {
        assert_eq!(uniform_intervals(4), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(uniform_intervals(0), vec![0.0, 1.0]);
    }
}
