mod astar;
mod config;
mod depth_first;
mod dijkstra;
mod distance_map;
mod error;
mod grid;
mod location;
mod metadata;
mod path;
mod point;
mod search;
mod space;

pub use astar::*;
pub use config::*;
pub use depth_first::*;
pub use distance_map::*;
pub use error::*;
pub use grid::*;
pub use location::*;
pub use metadata::*;
pub use path::*;
pub use point::*;
pub use search::*;
pub use space::*;

#[cfg(test)]
mod tests;
