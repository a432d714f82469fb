//! Bootstrap navbar markup, built one fragment at a time.
//!
//! A [`NavbarBuilder`] is a short lived session: open the navbar with
//! [`NavbarBuilder::create`], add links, menus and widgets, then close it
//! with [`NavbarBuilder::end`]. Each call returns a markup fragment and the
//! fragments concatenate, in call order, to the complete widget.
//!
//! ```
//! use navkit::{Collaborators, MenuSpec, NavbarBuilder, NavbarOptions};
//! use navkit_config::HelperConfig;
//! use navkit_html::{Attributes, StaticUrlResolver};
//!
//! let helpers = Collaborators::new(StaticUrlResolver::new("/"));
//! let config = HelperConfig::default();
//! let mut navbar = NavbarBuilder::new(&helpers, &config);
//!
//! let mut html = navbar.create(Some(&"MyApp".into()), &NavbarOptions::default());
//! html += &navbar.begin_menu(MenuSpec::nav(Attributes::new()));
//! html += &navbar.link("Home", "/");
//! html += &navbar.end_menu();
//! html += &navbar.end();
//!
//! assert!(html.contains(r#"<li class="active nav-item"><a href="/" class="nav-link">Home</a></li>"#));
//! ```
pub mod cli;
pub mod error;
pub mod layout;
pub mod menu;
pub mod navbar;

pub use error::NavkitError;
pub use layout::{render_layout, render_layout_file, render_layout_with};
pub use menu::MenuLevel;
pub use navbar::{Collaborators, MenuSpec, NavbarBuilder};
pub use navkit_config::{Brand, NavbarOptions, Placement};
