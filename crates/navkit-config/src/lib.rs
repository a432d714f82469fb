pub mod error;
pub mod helper;
pub mod layout;
pub mod navbar;
pub mod templates;

pub use error::ConfigError;
pub use helper::HelperConfig;
pub use layout::{Item, Layout, LayoutFormat, NavbarLayout, RequestConfig};
pub use navbar::{Brand, NavbarOptions, Placement};
