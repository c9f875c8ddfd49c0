//! Data access layer over the key-value store

pub mod accounts;
pub mod chat;
pub mod food;
pub mod kv;
mod log;
pub mod profiles;
pub mod weight;
pub mod workouts;

pub use accounts::{AccountRecord, AccountRepository};
pub use chat::ChatRepository;
pub use food::FoodRepository;
pub use kv::{keys, new_log_id, Collection, KvStore, MemoryKvStore, PgKvStore};
pub use profiles::ProfileRepository;
pub use weight::WeightRepository;
pub use workouts::WorkoutRepository;
