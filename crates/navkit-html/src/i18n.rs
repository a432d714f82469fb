use std::collections::HashMap;

/// Looks up localized labels by their source text.
pub trait Translator {
  fn translate(&self, msgid: &str) -> String;
}

/// Returns every message unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
  fn translate(&self, msgid: &str) -> String {
    msgid.to_string()
  }
}

/// Map backed translator. Messages without an entry fall back to the
/// source text.
#[derive(Debug, Clone, Default)]
pub struct CatalogTranslator {
  entries: HashMap<String, String>,
}

impl CatalogTranslator {
  #[must_use]
  pub const fn new(entries: HashMap<String, String>) -> Self {
    Self { entries }
  }
}

impl Translator for CatalogTranslator {
  fn translate(&self, msgid: &str) -> String {
    self.entries.get(msgid).cloned().unwrap_or_else(|| {
      log::debug!("No translation for {msgid:?}, using source text");
      msgid.to_string()
    })
  }
}
