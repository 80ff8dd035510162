pub mod file_preferences;
pub mod memory_preferences;

pub use file_preferences::FilePreferenceStore;
pub use memory_preferences::InMemoryPreferenceStore;
