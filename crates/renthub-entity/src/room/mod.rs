//! Room domain entities.

pub mod category;
pub mod model;
pub mod photo;
pub mod status;

pub use category::{CreateRoomCategory, RoomCategory};
pub use model::{CreateRoom, Room, RoomFilter, UpdateRoom};
pub use photo::{CreateRoomPhoto, RoomPhoto};
pub use status::RoomStatus;
