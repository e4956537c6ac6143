pub mod handler;

pub use handler::{direction_for_key, InputHandler};
