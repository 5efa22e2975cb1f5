use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_active() -> bool {
    true
}

/// Stored in the `user` collection. Declaration only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Full name.
    pub name: String,

    pub email: String,

    pub address: String,

    /// Age in years.
    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120"))]
    #[schema(minimum = 0, maximum = 120)]
    pub age: Option<i64>,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl User {
    pub const COLLECTION: &'static str = "user";
}
