pub mod aabox;
pub mod cast;
pub mod vector;

pub use self::{
    aabox::{AABox, Box2},
    cast::lit,
    vector::{Vec2, Vector},
};
