pub mod initialize;
pub mod log;
pub mod pool;
pub mod queries;
pub mod settings;
pub mod stats;
pub mod store;
pub mod trigger;

pub use pool::DbPool;
pub use store::{EntryStore, SaveOutcome, SettingsStore};
