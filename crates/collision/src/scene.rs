use gjk2d_math::Vec2;
use thiserror::Error;

use crate::{
    shapes::{Circle, Difference, Polygon, Sum},
    support::{SupportError, SupportMap},
};

/// A handle to a shape inside of a `Scene`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShapeId(usize);

impl ShapeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node<N> {
    Circle(Circle<N>),
    Polygon(Polygon<N>),
    Sum(ShapeId, ShapeId),
    Difference(ShapeId, ShapeId),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum SceneError {
    #[error("shape {} does not exist in this scene", .0.index())]
    UnknownShape(ShapeId),
}

/// Owns a set of shapes that may refer to each other.
///
/// Combinator nodes refer to their operands by `ShapeId`, and an operand must be added before any
/// combinator that uses it, so the shape graph can never contain a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<N> {
    nodes: Vec<Node<N>>,
}

impl<N> Default for Scene<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N> Scene<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_circle(&mut self, circle: Circle<N>) -> ShapeId {
        self.push(Node::Circle(circle))
    }

    pub fn add_polygon(&mut self, polygon: Polygon<N>) -> ShapeId {
        self.push(Node::Polygon(polygon))
    }

    pub fn add_sum(&mut self, a: ShapeId, b: ShapeId) -> Result<ShapeId, SceneError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.push(Node::Sum(a, b)))
    }

    pub fn add_difference(&mut self, a: ShapeId, b: ShapeId) -> Result<ShapeId, SceneError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.push(Node::Difference(a, b)))
    }

    pub fn node(&self, id: ShapeId) -> Option<&Node<N>> {
        self.nodes.get(id.0)
    }

    /// Mutable access to a polygon's points, for shapes that move between queries.
    pub fn polygon_mut(&mut self, id: ShapeId) -> Option<&mut Polygon<N>> {
        match self.nodes.get_mut(id.0)? {
            Node::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    pub fn circle_mut(&mut self, id: ShapeId) -> Option<&mut Circle<N>> {
        match self.nodes.get_mut(id.0)? {
            Node::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<SceneShape<'_, N>> {
        self.check(id).ok()?;
        Some(SceneShape { scene: self, id })
    }

    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        (0..self.nodes.len()).map(ShapeId)
    }

    fn check(&self, id: ShapeId) -> Result<(), SceneError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownShape(id))
        }
    }

    fn push(&mut self, node: Node<N>) -> ShapeId {
        let id = ShapeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}

/// A shape in a `Scene`, borrowed for querying.
#[derive(Debug, Copy, Clone)]
pub struct SceneShape<'a, N> {
    scene: &'a Scene<N>,
    id: ShapeId,
}

impl<'a, N> SceneShape<'a, N> {
    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn node(&self) -> &'a Node<N> {
        &self.scene.nodes[self.id.0]
    }

    fn operand(&self, id: ShapeId) -> Self {
        SceneShape {
            scene: self.scene,
            id,
        }
    }
}

impl<'a, N: num::Float> SupportMap<N> for SceneShape<'a, N> {
    fn support_point(&self, dir: Vec2<N>) -> Result<Vec2<N>, SupportError> {
        match *self.node() {
            Node::Circle(ref circle) => circle.support_point(dir),
            Node::Polygon(ref polygon) => polygon.support_point(dir),
            Node::Sum(a, b) => Sum(self.operand(a), self.operand(b)).support_point(dir),
            Node::Difference(a, b) => {
                Difference(self.operand(a), self.operand(b)).support_point(dir)
            }
        }
    }
}
