pub mod resources;
pub mod types;

pub use resources::Connection;
