pub mod boundary;
pub mod containment;
pub mod gjk;
pub mod scene;
pub mod shapes;
pub mod support;
pub mod support_ext;

pub use self::{
    boundary::{Boundary, trace_boundary},
    gjk::{Collision, CollisionTrace, test_collision},
    scene::{Scene, SceneError, SceneShape, ShapeId},
    shapes::{Circle, Difference, Polygon, Sum},
    support::{SupportError, SupportMap},
    support_ext::SupportMapExt,
};
