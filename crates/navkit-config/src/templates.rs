use std::{fs, path::Path};

use crate::{error::ConfigError, layout::LayoutFormat};

/// Starter layout in TOML, with enough comments that the file explains
/// itself.
pub const DEFAULT_TOML_TEMPLATE: &str = r##"# navkit layout file

[helper]
# Add the `active` class to links pointing at the current request
auto_active_link = true

# Localized labels, keyed by their English text
# [helper.translations]
# "Toggle navigation" = "Navigation umschalten"
# "Search" = "Suchen"

[request]
# Path the application is mounted at
base = ""
# Page being rendered
current = "/"

[navbar]
# Plain label linking to "/", or a table with name/url/options
brand = { name = "My Project", url = "/" }

# Wrap the navbar inside a container div
container = false
# "top" or "bottom"; takes precedence over `sticky`
# fixed = "top"
sticky = false
inverse = false
responsive = true
inner_id = "navbarSupportedContent"

# Any other key becomes an attribute of the <nav> element
# id = "main-nav"

[[navbar.items]]
type = "menu"
options = { class = "mr-auto" }

[[navbar.items.items]]
type = "link"
name = "Home"
url = "/"

[[navbar.items.items]]
type = "link"
name = "About"
url = "/about"

[[navbar.items.items]]
type = "menu"
name = "More"

[[navbar.items.items.items]]
type = "header"
name = "Resources"

[[navbar.items.items.items]]
type = "link"
name = "Documentation"
url = "/docs"

[[navbar.items.items.items]]
type = "divider"

[[navbar.items.items.items]]
type = "link"
name = "Changelog"
url = "/changelog"

[[navbar.items]]
type = "search"
options = { align = "right", action = "/search" }
"##;

/// Starter layout in JSON. Same content as [`DEFAULT_TOML_TEMPLATE`].
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "helper": {
    "auto_active_link": true,
    "translations": {}
  },
  "request": {
    "base": "",
    "current": "/"
  },
  "navbar": {
    "brand": { "name": "My Project", "url": "/" },
    "container": false,
    "sticky": false,
    "inverse": false,
    "responsive": true,
    "inner_id": "navbarSupportedContent",
    "items": [
      {
        "type": "menu",
        "options": { "class": "mr-auto" },
        "items": [
          { "type": "link", "name": "Home", "url": "/" },
          { "type": "link", "name": "About", "url": "/about" },
          {
            "type": "menu",
            "name": "More",
            "items": [
              { "type": "header", "name": "Resources" },
              { "type": "link", "name": "Documentation", "url": "/docs" },
              { "type": "divider" },
              { "type": "link", "name": "Changelog", "url": "/changelog" }
            ]
          }
        ]
      },
      {
        "type": "search",
        "options": { "align": "right", "action": "/search" }
      }
    ]
  }
}
"#;

/// Starter layout for `format`.
///
/// # Errors
///
/// Returns an error if `format` is not a supported layout format name.
pub fn get_template(format: &str) -> Result<&'static str, ConfigError> {
  let format = LayoutFormat::from_name(format).map_err(|_| {
    ConfigError::Template(format!("No starter layout for format: {format}"))
  })?;
  match format {
    LayoutFormat::Toml => Ok(DEFAULT_TOML_TEMPLATE),
    LayoutFormat::Json => Ok(DEFAULT_JSON_TEMPLATE),
  }
}

/// Write the starter layout for `format` to `path`.
///
/// # Errors
///
/// Returns an error if the format is unsupported or the file cannot be
/// written.
pub fn write_template(format: &str, path: &Path) -> Result<(), ConfigError> {
  let content = get_template(format)?;

  fs::write(path, content).map_err(|e| {
    ConfigError::Config(format!(
      "Failed to write starter layout to {}: {}",
      path.display(),
      e
    ))
  })?;

  log::info!("Created starter layout: {}", path.display());
  Ok(())
}
