use std::{fmt, fs, path::Path};

use navkit_html::Attributes;
use serde::{Deserialize, Serialize};

use crate::{
  error::ConfigError,
  helper::HelperConfig,
  navbar::{Brand, NavbarOptions},
};

/// Serialization format of a layout file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFormat {
  Toml,
  Json,
}

impl LayoutFormat {
  /// Parse a format name as given on the command line.
  ///
  /// # Errors
  ///
  /// Returns an error for anything other than `toml` or `json`.
  pub fn from_name(name: &str) -> Result<Self, ConfigError> {
    match name.to_lowercase().as_str() {
      "toml" => Ok(Self::Toml),
      "json" => Ok(Self::Json),
      other => {
        Err(ConfigError::Config(format!(
          "Unsupported layout format: {other}"
        )))
      },
    }
  }

  /// Pick the format from a file extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the path has no extension or an unsupported one.
  pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some(ext) => {
        Self::from_name(ext).map_err(|_| {
          ConfigError::Config(format!(
            "Unsupported layout file format: {}",
            path.display()
          ))
        })
      },
      None => {
        Err(ConfigError::Config(format!(
          "Layout file has no extension: {}",
          path.display()
        )))
      },
    }
  }
}

impl fmt::Display for LayoutFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Toml => write!(f, "toml"),
      Self::Json => write!(f, "json"),
    }
  }
}

/// Declarative description of a complete navbar.
///
/// A layout is rendered by replaying it as a sequence of builder calls, so
/// everything it can express can also be produced by calling the builder
/// directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
  pub helper:  HelperConfig,
  pub request: RequestConfig,
  pub navbar:  NavbarLayout,
}

/// The request a layout is rendered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
  /// Path the application is mounted at, e.g. `/app`. Empty for the root.
  pub base: String,

  /// URL of the page being rendered, used for active link detection.
  pub current: String,
}

impl Default for RequestConfig {
  fn default() -> Self {
    Self {
      base:    String::new(),
      current: "/".to_string(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarLayout {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub brand: Option<Brand>,

  /// Navbar body, rendered in order between the opening and closing tags.
  pub items: Vec<Item>,

  #[serde(flatten)]
  pub options: NavbarOptions,
}

/// One entry of the navbar body, tagged by `type` in layout files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
  Link {
    name:         String,
    #[serde(default)]
    url:          String,
    #[serde(default)]
    options:      Attributes,
    #[serde(default)]
    link_options: Attributes,
  },
  Button {
    name:    String,
    #[serde(default)]
    options: Attributes,
  },
  Divider {
    #[serde(default)]
    options: Attributes,
  },
  Header {
    name:    String,
    #[serde(default)]
    options: Attributes,
  },
  Text {
    text:    String,
    #[serde(default)]
    options: Attributes,
  },
  Search {
    #[serde(default)]
    model:   Option<String>,
    #[serde(default)]
    options: Attributes,
  },
  /// A horizontal menu when it appears at the top level, a dropdown when
  /// nested inside another menu.
  Menu {
    #[serde(default)]
    name:         Option<String>,
    #[serde(default)]
    url:          Option<String>,
    #[serde(default)]
    options:      Attributes,
    #[serde(default)]
    link_options: Attributes,
    #[serde(default)]
    list_options: Attributes,
    #[serde(default)]
    items:        Vec<Item>,
  },
}

impl Layout {
  /// Parse a layout from a string.
  ///
  /// # Errors
  ///
  /// Returns an error if the content is not a valid layout in `format`.
  pub fn parse(
    content: &str,
    format: LayoutFormat,
  ) -> Result<Self, ConfigError> {
    match format {
      LayoutFormat::Toml => Ok(toml::from_str(content)?),
      LayoutFormat::Json => Ok(serde_json::from_str(content)?),
    }
  }

  /// Load a layout from a TOML or JSON file, chosen by extension.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format
  /// is unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let format = LayoutFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read layout file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let layout = Self::parse(&content, format).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to parse {} layout from {}: {}",
        format,
        path.display(),
        e
      ))
    })?;

    log::debug!(
      "Loaded layout from {} with {} top-level items",
      path.display(),
      layout.navbar.items.len()
    );
    Ok(layout)
  }

  /// Deepest menu nesting in the layout (0 when there are no menus).
  #[must_use]
  pub fn menu_depth(&self) -> usize {
    items_depth(&self.navbar.items)
  }
}

fn items_depth(items: &[Item]) -> usize {
  items
    .iter()
    .map(|item| {
      match item {
        Item::Menu { items, .. } => 1 + items_depth(items),
        _ => 0,
      }
    })
    .max()
    .unwrap_or(0)
}
