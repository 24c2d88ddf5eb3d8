//! griot-store — collection store adapters for griot.
//!
//! Each adapter implements [`griot_core::CollectionStore`]: it returns every
//! document of a collection ordered by the collection's sort field.

pub mod json_dir;
pub mod memory;

pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
