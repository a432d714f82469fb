use navkit_html::Attributes;
use serde::{Deserialize, Serialize};

/// Default id of the collapsible inner `div` of a responsive navbar.
pub const DEFAULT_INNER_ID: &str = "navbarSupportedContent";

/// Edge of the viewport a fixed navbar sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
  Top,
  Bottom,
}

impl Placement {
  /// Bootstrap class for this placement.
  #[must_use]
  pub const fn class(self) -> &'static str {
    match self {
      Self::Top => "fixed-top",
      Self::Bottom => "fixed-bottom",
    }
  }
}

/// Options recognized by the navbar's opening call.
///
/// Any key in a config file that is not one of the named fields ends up in
/// [`NavbarOptions::attributes`] and is written on the outer `<nav>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarOptions {
  /// Wrap the navbar inside a `<div class="container">`.
  pub container: bool,

  /// Fixed navbar. Takes precedence over `sticky`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fixed: Option<Placement>,

  /// HTML id of the collapsible inner `div` (responsive navbars only).
  pub inner_id: String,

  /// Inverted (dark) color scheme.
  pub inverse: bool,

  /// Collapse the navbar content behind a toggle button on small screens.
  pub responsive: bool,

  pub sticky: bool,

  /// Extra HTML attributes for the outer `<nav>` element.
  #[serde(flatten)]
  pub attributes: Attributes,
}

impl Default for NavbarOptions {
  fn default() -> Self {
    Self {
      container:  false,
      fixed:      None,
      inner_id:   DEFAULT_INNER_ID.to_string(),
      inverse:    false,
      responsive: true,
      sticky:     false,
      attributes: Attributes::new(),
    }
  }
}

/// Brand shown at the start of the navbar.
///
/// In config files a plain string is a [`Brand::Label`] and a table with a
/// `name` is a [`Brand::Link`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Brand {
  /// Markup label linking to the site root. The label is not escaped.
  Label(String),

  /// Link with an explicit URL (default `/`) and link attributes.
  Link {
    name:    String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url:     Option<String>,
    #[serde(default)]
    options: Attributes,
  },
}

impl From<&str> for Brand {
  fn from(label: &str) -> Self {
    Self::Label(label.to_string())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn defaults_match_bootstrap_helper() {
    let options = NavbarOptions::default();
    assert!(options.responsive);
    assert!(!options.container);
    assert_eq!(options.inner_id, "navbarSupportedContent");
    assert_eq!(options.fixed, None);
  }

  #[test]
  fn unknown_keys_become_attributes() {
    let options: NavbarOptions = toml::from_str(
      r#"
        fixed = "top"
        id = "main-nav"
        class = "shadow"
      "#,
    )
    .expect("options should parse");

    assert_eq!(options.fixed, Some(Placement::Top));
    assert!(options.responsive);
    assert_eq!(options.attributes.get("id"), Some("main-nav"));
    assert_eq!(options.attributes.class(), Some("shadow"));
    assert!(!options.attributes.contains("fixed"));
  }

  #[test]
  fn brand_accepts_label_or_link() {
    let label: Brand = serde_json::from_str(r#""MyApp""#).expect("label");
    assert_eq!(label, Brand::from("MyApp"));

    let link: Brand =
      serde_json::from_str(r#"{"name": "MyApp", "url": "/home"}"#)
        .expect("link");
    assert_eq!(
      link,
      Brand::Link {
        name:    "MyApp".to_string(),
        url:     Some("/home".to_string()),
        options: Attributes::new(),
      }
    );
  }
}
