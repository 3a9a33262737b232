pub mod errors;
pub mod menu;

pub use errors::{StoreError, StoreResult};
pub use menu::MenuItem;
