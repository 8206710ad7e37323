pub mod class;
pub mod loader;
