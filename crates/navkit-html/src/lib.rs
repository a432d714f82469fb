//! Markup building blocks shared by the navkit crates.
//!
//! The navbar builder never writes tags by hand. It composes [`Attributes`]
//! and hands them to a small set of collaborators:
//!
//! - [`TagRenderer`] serializes single elements and hyperlinks.
//! - [`FormRenderer`] renders buttons and search forms.
//! - [`UrlResolver`] canonicalizes URLs and reports the current request URL.
//! - [`Translator`] localizes the few labels the widget emits itself.
//!
//! Each trait comes with a default implementation so the builder can be used
//! without a surrounding web framework.
pub mod attrs;
pub mod form;
pub mod i18n;
pub mod tag;
pub mod url;

pub use attrs::{Attributes, IntoClassTokens, append_classes};
pub use form::{BootstrapFormRenderer, FormRenderer};
pub use i18n::{CatalogTranslator, IdentityTranslator, Translator};
pub use tag::{HtmlTagRenderer, TagRenderer};
pub use url::{StaticUrlResolver, UrlResolver};
