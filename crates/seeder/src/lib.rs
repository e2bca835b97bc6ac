// Campusboard colleges seeder
// Decision: One-shot job; library split out so the batch loop is testable
// without a process or a network

pub mod config;
pub mod fixture;
pub mod record;
pub mod seed;
pub mod table;

pub use config::{ConfigError, SeederConfig};
pub use fixture::{load_colleges, FixtureError};
pub use record::CollegeRecord;
pub use seed::{run, seed_batches, RunSummary, SeedError, SeedReport};
pub use table::{CollegeTable, SupabaseTable, TableError};
