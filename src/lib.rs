pub mod error;
pub mod height;
pub mod io;
pub mod math;
pub mod operations;
pub mod segmentation;

pub use error::{Result, RoomboxError};
