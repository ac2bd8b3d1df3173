use gjk2d_math::Vec2;

/// Whether a point lies inside or on a convex outline given in counter-clockwise order, such as
/// one produced by `boundary::trace`.
///
/// An outline of one point contains only that point and an outline of two points is a line
/// segment. Points exactly on an edge count as contained.
pub fn contains_point<N: num::Float>(outline: &[Vec2<N>], p: Vec2<N>) -> bool {
    match *outline {
        [] => false,
        [a] => a == p,
        [a, b] => {
            let ab = b - a;
            let ap = p - a;
            ab.perp_dot(ap).is_zero() && ap.dot(ab) >= N::zero() && ap.dot(ab) <= ab.dot(ab)
        }
        _ => outline
            .iter()
            .zip(outline.iter().cycle().skip(1))
            .all(|(&start, &end)| (end - start).perp_dot(p - start) >= N::zero()),
    }
}

/// Whether the origin lies inside or on a counter-clockwise convex outline.
///
/// Applied to the outline of a Minkowski difference this is a slower, approximate check of the
/// same question `gjk::intersects` answers, useful for checking the two against each other.
pub fn contains_origin<N: num::Float>(outline: &[Vec2<N>]) -> bool {
    contains_point(outline, Vec2::zero())
}
