pub mod bundle;
pub mod product;
pub mod user;

pub use bundle::{Bundle, BundleItem};
pub use product::Product;
pub use user::User;
