/// Canonicalizes URLs so a link target can be compared with the URL of the
/// request being rendered.
pub trait UrlResolver {
  /// Canonical form of `url`.
  fn resolve(&self, url: &str) -> String;

  /// Canonical URL of the current request.
  fn current(&self) -> String;

  /// Whether `url` points at the current request.
  fn is_current(&self, url: &str) -> bool {
    self.resolve(url) == self.current()
  }
}

/// [`UrlResolver`] for a request known up front, e.g. when rendering a page
/// to a file.
///
/// Canonicalization rules:
///
/// - Absolute URLs (`scheme:...`, `//host`) and fragment
///   only URLs (`#top`) are returned unchanged.
/// - The query string and fragment are dropped.
/// - The path gets a leading `/`, the base path prefix (unless it already
///   carries it), and loses any trailing `/` except for the root itself.
#[derive(Debug, Clone, Default)]
pub struct StaticUrlResolver {
  base:    String,
  current: String,
}

impl StaticUrlResolver {
  #[must_use]
  pub fn new(current: impl Into<String>) -> Self {
    Self {
      base:    String::new(),
      current: current.into(),
    }
  }

  /// Mount point of the application, e.g. `/app`.
  #[must_use]
  pub fn with_base(mut self, base: impl Into<String>) -> Self {
    let base = base.into();
    let base = base.trim().trim_end_matches('/');
    self.base = if base.is_empty() || base.starts_with('/') {
      base.to_string()
    } else {
      format!("/{base}")
    };
    self
  }

  #[must_use]
  pub fn base(&self) -> &str {
    &self.base
  }
}

impl UrlResolver for StaticUrlResolver {
  fn resolve(&self, url: &str) -> String {
    canonicalize(&self.base, url)
  }

  fn current(&self) -> String {
    canonicalize(&self.base, &self.current)
  }
}

/// Whether `url` starts with a scheme (`https:`, `mailto:`, ...) or is
/// protocol relative. Only the part before the first `/`, `?` or `#` is
/// looked at, so URLs inside a query string do not count.
fn is_absolute(url: &str) -> bool {
  if url.starts_with("//") {
    return true;
  }

  let head = url.split(['/', '?', '#']).next().unwrap_or_default();
  head.split_once(':').is_some_and(|(scheme, _)| {
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
      && scheme
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
  })
}

fn canonicalize(base: &str, url: &str) -> String {
  let url = url.trim();
  if is_absolute(url) || url.starts_with('#') {
    return url.to_string();
  }

  let path = url.split(['?', '#']).next().unwrap_or_default();
  let path = path.trim_end_matches('/');

  let mut out = String::with_capacity(base.len() + path.len() + 1);
  let has_base = !base.is_empty()
    && (path == base
      || path.strip_prefix(base).is_some_and(|rest| rest.starts_with('/')));
  if !has_base {
    out.push_str(base);
  }
  if !path.starts_with('/') {
    out.push('/');
  }
  out.push_str(path);

  while out.len() > 1 && out.ends_with('/') {
    out.pop();
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn root_variants_are_equal() {
    let resolver = StaticUrlResolver::new("/");
    assert_eq!(resolver.resolve(""), "/");
    assert_eq!(resolver.resolve("/"), "/");
    assert!(resolver.is_current(""));
  }

  #[test]
  fn query_fragment_and_trailing_slash_are_ignored() {
    let resolver = StaticUrlResolver::new("/docs/");
    assert!(resolver.is_current("/docs?page=2"));
    assert!(resolver.is_current("docs#intro"));
    assert!(!resolver.is_current("/docs/intro"));
  }

  #[test]
  fn base_path_is_prefixed_once() {
    let resolver = StaticUrlResolver::new("/app/users").with_base("app/");
    assert_eq!(resolver.base(), "/app");
    assert_eq!(resolver.resolve("/users"), "/app/users");
    assert_eq!(resolver.resolve("/app/users"), "/app/users");
    assert_eq!(resolver.resolve("/application"), "/app/application");
    assert_eq!(resolver.resolve(""), "/app");
    assert!(resolver.is_current("users"));
  }

  #[test]
  fn absolute_urls_are_left_alone() {
    let resolver = StaticUrlResolver::new("/").with_base("/app");
    assert_eq!(
      resolver.resolve("https://example.com/a/"),
      "https://example.com/a/"
    );
    assert_eq!(resolver.resolve("#"), "#");
    assert_eq!(
      resolver.resolve("mailto:me@example.com"),
      "mailto:me@example.com"
    );
    assert_eq!(resolver.resolve("tel:+123"), "tel:+123");
    assert_eq!(resolver.resolve("//cdn.test/x"), "//cdn.test/x");
  }

  #[test]
  fn url_in_query_string_is_not_a_scheme() {
    let resolver = StaticUrlResolver::new("/login");
    assert_eq!(
      resolver.resolve("/login?redirect=https://x.test/"),
      "/login"
    );
    assert!(resolver.is_current("/login?redirect=https://x.test/"));
    assert!(resolver.is_current("login?next=mailto:me@example.com"));

    let based = StaticUrlResolver::new("/app/login").with_base("/app");
    assert!(based.is_current("/login?redirect=https://x.test/a"));
  }
}
