use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Name of the attribute that [`Attributes::add_class`] appends to.
pub const CLASS: &str = "class";

/// Ordered set of HTML attributes for a single element.
///
/// Entries keep their insertion order, which is also the order in which
/// they are serialized. The `escape` flag is not an attribute: it tells the
/// [`TagRenderer`](crate::TagRenderer) whether the element content should
/// be escaped (`Some(true)`), passed through as markup (`Some(false)`), or
/// handled with the renderer's default for that element (`None`).
///
/// When deserialized from a config file, every key other than `escape` is
/// an attribute. Numbers and booleans are written out as text, so
/// `tabindex = 1` becomes `tabindex="1"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub escape: Option<bool>,

  #[serde(flatten, deserialize_with = "scalar_entries")]
  entries: IndexMap<String, String>,
}

/// Attribute value as it may appear in a config file.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarValue {
  Text(String),
  Integer(i64),
  Float(f64),
  Bool(bool),
}

impl From<ScalarValue> for String {
  fn from(value: ScalarValue) -> Self {
    match value {
      ScalarValue::Text(text) => text,
      ScalarValue::Integer(n) => n.to_string(),
      ScalarValue::Float(n) => n.to_string(),
      ScalarValue::Bool(b) => b.to_string(),
    }
  }
}

fn scalar_entries<'de, D>(
  deserializer: D,
) -> Result<IndexMap<String, String>, D::Error>
where
  D: Deserializer<'de>,
{
  let raw = IndexMap::<String, ScalarValue>::deserialize(deserializer)?;
  Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

impl Attributes {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder form of [`Attributes::insert`].
  #[must_use]
  pub fn with(
    mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) -> Self {
    self.insert(name, value);
    self
  }

  /// Builder form of [`Attributes::add_class`].
  #[must_use]
  pub fn with_class(mut self, tokens: impl IntoClassTokens) -> Self {
    self.add_class(tokens);
    self
  }

  #[must_use]
  pub const fn with_escape(mut self, escape: bool) -> Self {
    self.escape = Some(escape);
    self
  }

  /// Set an attribute, replacing any previous value.
  pub fn insert(
    &mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) -> Option<String> {
    self.entries.insert(name.into(), value.into())
  }

  /// Set an attribute only if the caller has not set it already.
  ///
  /// This is how defaults are merged into caller supplied attributes.
  pub fn or_insert(
    &mut self,
    name: impl Into<String>,
    value: impl Into<String>,
  ) {
    self.entries.entry(name.into()).or_insert_with(|| value.into());
  }

  /// Remove an attribute and return its value, keeping the order of the
  /// remaining entries.
  pub fn take(&mut self, name: &str) -> Option<String> {
    self.entries.shift_remove(name)
  }

  #[must_use]
  pub fn get(&self, name: &str) -> Option<&str> {
    self.entries.get(name).map(String::as_str)
  }

  #[must_use]
  pub fn contains(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  #[must_use]
  pub fn class(&self) -> Option<&str> {
    self.get(CLASS)
  }

  /// Whether the `class` attribute contains `token` as a whole word.
  #[must_use]
  pub fn has_class(&self, token: &str) -> bool {
    self
      .class()
      .is_some_and(|class| class.split_whitespace().any(|t| t == token))
  }

  /// Append class tokens to the `class` attribute.
  ///
  /// Existing classes are kept and the new tokens go after them. Nothing is
  /// deduplicated against the existing value, so adding the same class twice
  /// yields it twice.
  pub fn add_class(&mut self, tokens: impl IntoClassTokens) {
    let tokens = tokens.into_class_tokens();
    let joined = append_classes(self.class(), &tokens);
    self.insert(CLASS, joined);
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
  K: Into<String>,
  V: Into<String>,
{
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self {
      escape:  None,
      entries: iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    }
  }
}

impl<const N: usize> From<[(&str, &str); N]> for Attributes {
  fn from(pairs: [(&str, &str); N]) -> Self {
    pairs.into_iter().collect()
  }
}

/// Anything that can be appended to a `class` attribute: a single string
/// (which may itself hold several space separated classes) or a sequence of
/// tokens.
pub trait IntoClassTokens {
  fn into_class_tokens(self) -> Vec<String>;
}

impl IntoClassTokens for &str {
  fn into_class_tokens(self) -> Vec<String> {
    vec![self.to_string()]
  }
}

impl IntoClassTokens for String {
  fn into_class_tokens(self) -> Vec<String> {
    vec![self]
  }
}

impl IntoClassTokens for &String {
  fn into_class_tokens(self) -> Vec<String> {
    vec![self.clone()]
  }
}

impl IntoClassTokens for &[&str] {
  fn into_class_tokens(self) -> Vec<String> {
    self.iter().map(ToString::to_string).collect()
  }
}

impl<const N: usize> IntoClassTokens for [&str; N] {
  fn into_class_tokens(self) -> Vec<String> {
    self.iter().map(ToString::to_string).collect()
  }
}

impl IntoClassTokens for Vec<&str> {
  fn into_class_tokens(self) -> Vec<String> {
    self.into_iter().map(ToString::to_string).collect()
  }
}

impl IntoClassTokens for Vec<String> {
  fn into_class_tokens(self) -> Vec<String> {
    self
  }
}

/// Append `tokens` to an existing class string.
///
/// Tokens are trimmed, empty ones are dropped, and duplicates among the new
/// tokens collapse to their first occurrence. The existing value is kept
/// verbatim (apart from surrounding whitespace) and is not checked against
/// the new tokens.
///
/// ```
/// use navkit_html::append_classes;
///
/// let tokens = vec!["nav-link".to_string()];
/// assert_eq!(append_classes(Some("active"), &tokens), "active nav-link");
/// assert_eq!(append_classes(None, &tokens), "nav-link");
/// ```
#[must_use]
pub fn append_classes(existing: Option<&str>, tokens: &[String]) -> String {
  let mut added: Vec<&str> = Vec::with_capacity(tokens.len());
  for token in tokens.iter().map(|t| t.trim()) {
    if !token.is_empty() && !added.contains(&token) {
      added.push(token);
    }
  }
  let added = added.join(" ");

  match existing.map(str::trim).filter(|e| !e.is_empty()) {
    Some(existing) if added.is_empty() => existing.to_string(),
    Some(existing) => format!("{existing} {added}"),
    None => added,
  }
}
