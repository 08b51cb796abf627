//! User store implementations

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileUserStore;
pub use memory::InMemoryUserStore;
