pub mod engine;
pub mod version;
