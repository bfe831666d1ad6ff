//! Building domain entities.

pub mod model;

pub use model::{Building, CreateBuilding, UpdateBuilding};
