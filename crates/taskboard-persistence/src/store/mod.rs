pub mod atomic_writer;
pub mod json_settings_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use json_settings_store::JsonFileSettingsStore;
pub use memory_store::MemorySettingsStore;
