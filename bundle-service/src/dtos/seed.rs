use crate::services::SeedOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedResponse {
    pub status: String,
    pub seeded: bool,
    pub count: u64,
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        let (seeded, count) = match outcome {
            SeedOutcome::AlreadySeeded { count } => (false, count),
            SeedOutcome::Seeded { count } => (true, count),
        };

        Self {
            status: "ok".to_string(),
            seeded,
            count,
        }
    }
}
