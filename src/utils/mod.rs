pub mod fetch;
pub mod misc;
