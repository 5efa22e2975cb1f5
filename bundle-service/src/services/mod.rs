pub mod database;
pub mod diagnostics;
pub mod memory;
pub mod metrics;
pub mod seed;
pub mod store;

pub use database::{connect_store, MongoStore};
pub use diagnostics::{diagnose, DiagnosticsReport};
pub use memory::MemoryStore;
pub use metrics::{get_metrics, init_metrics};
pub use seed::{default_bundles, seed_bundles, SeedOutcome};
pub use store::{create_document, DocumentStore, StoreStatus, UnavailableReason, UnavailableStore};
