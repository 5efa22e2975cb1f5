pub mod bundles;
pub mod seed;

pub use bundles::BundleSummary;
pub use seed::SeedResponse;
