pub mod scene_file;

pub use self::scene_file::{LoadedScene, SceneFile, SceneFileError};
