pub mod loader;
pub mod validation;
