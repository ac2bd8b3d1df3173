use std::{cmp::Ordering, mem};

use gjk2d_math::Vec2;

use crate::{
    boundary,
    shapes::Difference,
    support::{SupportError, SupportMap},
};

#[derive(Debug, Copy, Clone)]
pub struct Settings<N> {
    /// Shapes closer than this are reported as intersecting, so that touching shapes collide
    /// even when rounding leaves a tiny gap between them.
    pub tolerance: N,
    /// If no answer has been found after searching this many triangles, the search stops and
    /// returns `Collision::Unresolved`. The same limit applies to refining a near contact.
    pub max_iterations: u32,
}

impl<N: num::Float> Default for Settings<N> {
    fn default() -> Self {
        Self {
            tolerance: N::epsilon().sqrt(),
            max_iterations: 64,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Collision {
    /// The shapes share at least one point, or are no further than `Settings::tolerance` apart.
    /// Shapes that only touch are intersecting.
    Intersecting,
    /// The shapes are further than `Settings::tolerance` apart.
    Separated,
    /// The iteration limit was reached before the search found an answer.
    Unresolved,
}

impl Collision {
    pub fn is_intersecting(self) -> bool {
        self == Collision::Intersecting
    }
}

/// Determine whether two shapes intersect by searching for a triangle inside their Minkowski
/// difference that contains the origin.
pub fn intersects<N, A, B>(settings: Settings<N>, a: A, b: B) -> Result<Collision, SupportError>
where
    N: num::Float,
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    search(settings, Difference(a, b), |_| {})
}

/// Like `intersects`, but appends every triangle the search visits to `triangles`.
///
/// Every triangle is wound counter-clockwise and its vertices lie on the boundary of the
/// Minkowski difference. If the search finds a triangle containing the origin it is the last one.
/// Contacts within `Settings::tolerance` are decided without adding more triangles.
pub fn intersects_traced<N, A, B>(
    settings: Settings<N>,
    a: A,
    b: B,
    triangles: &mut Vec<[Vec2<N>; 3]>,
) -> Result<Collision, SupportError>
where
    N: num::Float,
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    search(settings, Difference(a, b), |tri| triangles.push(tri))
}

/// Calls `intersects` with the default settings, an unresolved search counts as no intersection.
pub fn test_collision<N, A, B>(a: A, b: B) -> Result<bool, SupportError>
where
    N: num::Float,
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    Ok(intersects(Settings::default(), a, b)?.is_intersecting())
}

/// Everything the collision search looked at, for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionTrace<N> {
    /// The traced outline of the Minkowski difference.
    pub boundary: Vec<Vec2<N>>,
    /// Every triangle visited by the search, in order.
    pub triangles: Vec<[Vec2<N>; 3]>,
}

impl<N> Default for CollisionTrace<N> {
    fn default() -> Self {
        Self {
            boundary: Vec::new(),
            triangles: Vec::new(),
        }
    }
}

impl<N: Copy> CollisionTrace<N> {
    /// The boundary points followed by three points for every visited triangle.
    pub fn points(&self) -> impl Iterator<Item = Vec2<N>> + '_ {
        self.boundary
            .iter()
            .copied()
            .chain(self.triangles.iter().flatten().copied())
    }
}

pub fn test_collision_traced<N, A, B>(
    settings: Settings<N>,
    trace_settings: boundary::Settings<N>,
    a: A,
    b: B,
) -> Result<(Collision, CollisionTrace<N>), SupportError>
where
    N: num::Float,
    A: SupportMap<N>,
    B: SupportMap<N>,
{
    let mut trace = CollisionTrace {
        boundary: boundary::trace(trace_settings, Difference(&a, &b))?.points,
        triangles: Vec::new(),
    };
    let collision = intersects_traced(settings, &a, &b, &mut trace.triangles)?;
    Ok((collision, trace))
}

fn search<N, S>(
    settings: Settings<N>,
    support: S,
    mut visit: impl FnMut([Vec2<N>; 3]),
) -> Result<Collision, SupportError>
where
    N: num::Float,
    S: SupportMap<N>,
{
    let _0 = N::zero();
    let _1 = N::one();

    let mut surf_a = support.support_point(Vec2::new(_0, _1))?;
    if surf_a.y() < _0 {
        // Even the top of the difference is below the origin.
        return settle(&settings, &support, surf_a.y(), &[surf_a]);
    }
    if surf_a.length() <= settings.tolerance {
        // The origin is on, or within tolerance of, the boundary.
        return Ok(Collision::Intersecting);
    }

    let mut surf_b = support.support_point(-surf_a)?;
    let reach = (-surf_a).dot(surf_b) / surf_a.length();
    if reach < _0 {
        // Searching straight back from `surf_a` never reaches the origin.
        return settle(&settings, &support, reach, &[surf_a, surf_b]);
    }

    // Wind the edge so that the origin is to the left of `a -> b`, then `out` is the edge's left
    // normal and faces the origin.
    let mut out = (surf_b - surf_a).perp();
    if out.dot(surf_b) < _0 {
        mem::swap(&mut surf_a, &mut surf_b);
    } else {
        out = -out;
    }

    for _ in 0..settings.max_iterations {
        let surf_c = support.support_point(out)?;
        let reach = out.dot(surf_c) / out.length();
        if !(reach > settings.tolerance) {
            // The shape ends before, or barely past, the line through the origin parallel to
            // edge `a -> b`.
            return settle(&settings, &support, reach, &[surf_a, surf_b, surf_c]);
        }

        visit([surf_a, surf_b, surf_c]);

        // `a -> b -> c` is counter-clockwise and the origin is already known to be inside of
        // edge `a -> b`, so only the two new edges need checking. An origin on an edge counts as
        // inside.
        let bc_out = (surf_c - surf_b).perp();
        if bc_out.dot(surf_c) >= _0 {
            let ca_out = (surf_a - surf_c).perp();
            if ca_out.dot(surf_c) >= _0 {
                return Ok(Collision::Intersecting);
            } else {
                // The origin is beyond edge `c -> a`, search from `a -> c`.
                out = ca_out;
                surf_b = surf_c;
            }
        } else {
            // The origin is beyond edge `b -> c`, search from `c -> b`.
            out = bc_out;
            surf_a = surf_c;
        }
    }

    log::warn!(
        "collision search gave up after {} iterations",
        settings.max_iterations
    );
    Ok(Collision::Unresolved)
}

/// Decides a search that stopped with the shape reaching `reach` past the origin along some unit
/// direction. Every point of the shape is at least `-reach` away from the origin, so a clearly
/// negative reach means the shapes are separated. Otherwise the origin is within `tolerance` of
/// a supporting line and the answer depends on how far the origin is from the shape, found by
/// walking the closest feature towards the origin from the nearest of `known`.
fn settle<N, S>(
    settings: &Settings<N>,
    support: &S,
    reach: N,
    known: &[Vec2<N>],
) -> Result<Collision, SupportError>
where
    N: num::Float,
    S: SupportMap<N>,
{
    let tolerance = settings.tolerance;
    if reach < -tolerance {
        return Ok(Collision::Separated);
    }

    let Some(start) = known.iter().copied().min_by(|&a, &b| by_length(a, b)) else {
        return Ok(Collision::Separated);
    };

    let mut feature = Feature::Point(start);
    for _ in 0..settings.max_iterations {
        let closest = feature.closest();
        let distance = closest.length();
        if distance <= tolerance {
            return Ok(Collision::Intersecting);
        }

        let surf = support.support_point(-closest)?;
        // No point of the shape is closer than this along the direction of `closest`.
        let lower = closest.dot(surf) / distance;
        // Either a separating line was found or `closest` is as close as the shape gets.
        if lower > tolerance || distance - lower <= tolerance {
            return Ok(Collision::Separated);
        }

        feature = match feature.extend(surf) {
            Some(feature) => feature,
            None => return Ok(Collision::Intersecting),
        };
    }

    log::warn!(
        "contact refinement gave up after {} iterations",
        settings.max_iterations
    );
    Ok(Collision::Unresolved)
}

/// The part of the shape closest to the origin found so far while settling a near contact.
#[derive(Debug, Copy, Clone)]
enum Feature<N> {
    Point(Vec2<N>),
    Segment(Vec2<N>, Vec2<N>),
}

impl<N: num::Float> Feature<N> {
    /// The segment `a -> b` reduced to the part containing its point closest to the origin.
    fn segment(a: Vec2<N>, b: Vec2<N>) -> Self {
        let ab = b - a;
        let t = -a.dot(ab) / ab.length_squared();
        if !(t > N::zero()) {
            Feature::Point(a)
        } else if t >= N::one() {
            Feature::Point(b)
        } else {
            Feature::Segment(a, b)
        }
    }

    fn closest(self) -> Vec2<N> {
        match self {
            Feature::Point(p) => p,
            Feature::Segment(a, b) => {
                let ab = b - a;
                a + ab * (-a.dot(ab) / ab.length_squared())
            }
        }
    }

    /// Adds a new support point and keeps the part closest to the origin. Returns `None` if the
    /// triangle formed with a segment contains the origin.
    fn extend(self, p: Vec2<N>) -> Option<Self> {
        match self {
            Feature::Point(a) => Some(Feature::segment(a, p)),
            Feature::Segment(a, b) => {
                let _0 = N::zero();
                let sides = [(a, b), (b, p), (p, a)].map(|(s, e)| (e - s).perp_dot(-s));
                let degenerate = sides.iter().all(|&side| side == _0);
                if !degenerate
                    && (sides.iter().all(|&side| side >= _0) || sides.iter().all(|&side| side <= _0))
                {
                    return None;
                }

                [(a, b), (b, p), (p, a)]
                    .map(|(s, e)| Feature::segment(s, e))
                    .into_iter()
                    .min_by(|f, g| by_length(f.closest(), g.closest()))
            }
        }
    }
}

fn by_length<N: num::Float>(a: Vec2<N>, b: Vec2<N>) -> Ordering {
    a.length_squared()
        .partial_cmp(&b.length_squared())
        .unwrap_or(Ordering::Equal)
}
