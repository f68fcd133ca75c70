use macroquad::math::Vec2;

/// Heading of a vector: its angle in radians from the +x axis
pub fn heading(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Rotate `vertex` about `pivot` by `angle` radians
pub fn rotate_around(vertex: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(vertex - pivot) + pivot
}

/// Linearly remap `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Not clamped: values outside the input range extrapolate. An empty input
/// range maps everything to `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let in_span = in_max - in_min;
    if in_span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / in_span
}

/// Average of a set of vectors, zero when empty
pub fn average(vs: &[Vec2]) -> Vec2 {
    if vs.is_empty() {
        return Vec2::ZERO;
    }
    vs.iter().copied().sum::<Vec2>() / vs.len() as f32
}

/// Intersection of segment P (`p1`→`p2`) with segment Q (`q1`→`q2`).
///
/// Solves `p1 + ua·(p2−p1) = q1 + ub·(q2−q1)` and accepts the crossing only
/// when both `ua` and `ub` lie in `[0, 1]`, so touching at an endpoint counts.
/// Parallel and collinear pairs never intersect. The denominator is the
/// cross product of the two directions, so the parallel test is relative to
/// the segment lengths; zero-length segments never intersect either.
/// The returned point is evaluated along P.
pub fn segment_intersection(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> Option<Vec2> {
    let denom = (q2.y - q1.y) * (p2.x - p1.x) - (q2.x - q1.x) * (p2.y - p1.y);
    let tolerance = f32::EPSILON * (p2 - p1).length() * (q2 - q1).length();
    if denom.abs() <= tolerance {
        return None;
    }

    let ua = ((q2.x - q1.x) * (p1.y - q1.y) - (q2.y - q1.y) * (p1.x - q1.x)) / denom;
    let ub = ((p2.x - p1.x) * (p1.y - q1.y) - (p2.y - p1.y) * (p1.x - q1.x)) / denom;

    if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
        Some(p1 + (p2 - p1) * ua)
    } else {
        None
    }
}
