pub mod health;
pub mod menu;

pub use health::*;
pub use menu::*;
