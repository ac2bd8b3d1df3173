use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use gjk2d_collision::{
    Circle, Polygon, Scene, SceneShape, ShapeId, boundary, gjk, scene::SceneError,
};
use gjk2d_math::Vec2;
use serde::Deserialize;
use serde_json as json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneFileError {
    #[error("shape {0:?} is not defined")]
    UnknownShape(String),
    #[error("shape {0:?} is defined in terms of itself")]
    Cycle(String),
    #[error("polygon {0:?} has no points")]
    EmptyPolygon(String),
    #[error("circle {0:?} has a negative radius")]
    NegativeRadius(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Json(#[from] json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A shape definition, combinators name their operands.
///
/// ```json
/// { "circle": { "center": [0, -1], "radius": 1 } }
/// { "polygon": [[-1, 0], [-1, 3], [1, 2]] }
/// { "sum": ["triangle", "ball"] }
/// { "difference": ["capsule", "cursor"] }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeDef {
    Circle { center: [f32; 2], radius: f32 },
    Polygon(Vec<[f32; 2]>),
    Sum(String, String),
    Difference(String, String),
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    pub epsilon: f32,
    pub point_tolerance: f32,
    pub max_depth: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        let settings = boundary::Settings::<f32>::default();
        Self {
            epsilon: settings.epsilon,
            point_tolerance: settings.point_tolerance,
            max_depth: settings.max_depth,
        }
    }
}

impl From<TraceConfig> for boundary::Settings<f32> {
    fn from(config: TraceConfig) -> Self {
        Self {
            epsilon: config.epsilon,
            point_tolerance: config.point_tolerance,
            max_depth: config.max_depth,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollisionConfig {
    pub tolerance: f32,
    pub max_iterations: u32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        let settings = gjk::Settings::<f32>::default();
        Self {
            tolerance: settings.tolerance,
            max_iterations: settings.max_iterations,
        }
    }
}

impl From<CollisionConfig> for gjk::Settings<f32> {
    fn from(config: CollisionConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    pub shapes: BTreeMap<String, ShapeDef>,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub collision: CollisionConfig,
}

impl SceneFile {
    pub fn from_reader(reader: impl Read) -> Result<Self, SceneFileError> {
        Ok(json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SceneFileError> {
        Ok(json::from_str(json)?)
    }

    pub fn open(path: &Path) -> Result<Self, SceneFileError> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Build every named shape into a `Scene`.
    ///
    /// Operands are added to the scene before the shapes that use them, shapes which are not
    /// used by anything are added in name order.
    pub fn build(&self) -> Result<LoadedScene, SceneFileError> {
        let mut builder = Builder {
            defs: &self.shapes,
            scene: Scene::new(),
            ids: HashMap::new(),
            visiting: HashSet::new(),
        };

        for name in self.shapes.keys() {
            builder.resolve(name)?;
        }

        log::debug!("loaded scene with {} shapes", builder.scene.len());

        Ok(LoadedScene {
            scene: builder.scene,
            names: builder.ids,
            trace: self.trace.into(),
            collision: self.collision.into(),
        })
    }
}

/// A scene file after every name has been resolved.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub scene: Scene<f32>,
    pub names: HashMap<String, ShapeId>,
    pub trace: boundary::Settings<f32>,
    pub collision: gjk::Settings<f32>,
}

impl LoadedScene {
    pub fn load(path: &Path) -> Result<Self, SceneFileError> {
        SceneFile::open(path)?.build()
    }

    pub fn id(&self, name: &str) -> Result<ShapeId, SceneFileError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| SceneFileError::UnknownShape(name.to_owned()))
    }

    pub fn shape(&self, name: &str) -> Result<SceneShape<'_, f32>, SceneFileError> {
        let id = self.id(name)?;
        Ok(self.scene.shape(id).ok_or(SceneError::UnknownShape(id))?)
    }
}

struct Builder<'a> {
    defs: &'a BTreeMap<String, ShapeDef>,
    scene: Scene<f32>,
    ids: HashMap<String, ShapeId>,
    visiting: HashSet<&'a str>,
}

impl<'a> Builder<'a> {
    fn resolve(&mut self, name: &'a str) -> Result<ShapeId, SceneFileError> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let defs = self.defs;
        let (name, def) = defs
            .get_key_value(name)
            .ok_or_else(|| SceneFileError::UnknownShape(name.to_owned()))?;

        if !self.visiting.insert(name.as_str()) {
            return Err(SceneFileError::Cycle(name.clone()));
        }

        let id = match def {
            ShapeDef::Circle { center, radius } => {
                if *radius < 0.0 {
                    return Err(SceneFileError::NegativeRadius(name.clone()));
                }
                self.scene
                    .add_circle(Circle::new(Vec2::from(*center), *radius))
            }
            ShapeDef::Polygon(points) => {
                if points.is_empty() {
                    return Err(SceneFileError::EmptyPolygon(name.clone()));
                }
                self.scene
                    .add_polygon(Polygon::new(points.iter().copied().map(Vec2::from)))
            }
            ShapeDef::Sum(a, b) => {
                let a = self.resolve(a)?;
                let b = self.resolve(b)?;
                self.scene.add_sum(a, b)?
            }
            ShapeDef::Difference(a, b) => {
                let a = self.resolve(a)?;
                let b = self.resolve(b)?;
                self.scene.add_difference(a, b)?
            }
        };

        self.visiting.remove(name.as_str());
        self.ids.insert(name.clone(), id);
        Ok(id)
    }
}
