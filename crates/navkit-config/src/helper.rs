use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Settings shared by every navbar rendered through one helper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
  /// Add the `active` class to links whose URL matches the current request.
  pub auto_active_link: bool,

  /// Replacement labels keyed by their English source text, e.g.
  /// `"Toggle navigation"`.
  pub translations: HashMap<String, String>,
}

impl Default for HelperConfig {
  fn default() -> Self {
    Self {
      auto_active_link: true,
      translations:     HashMap::new(),
    }
  }
}
