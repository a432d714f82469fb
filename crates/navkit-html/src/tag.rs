use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::attrs::Attributes;

/// Serializes single HTML elements.
pub trait TagRenderer {
  /// Render an element.
  ///
  /// With `content == None` only the opening tag is emitted, leaving the
  /// caller to close it later. `Some("")` yields an empty element with its
  /// closing tag.
  fn render_tag(
    &self,
    name: &str,
    content: Option<&str>,
    attrs: &Attributes,
  ) -> String;

  /// Render an `<a>` element pointing at `url`.
  fn render_link(&self, label: &str, url: &str, attrs: &Attributes) -> String;
}

/// Plain string based [`TagRenderer`].
///
/// Element content is written verbatim unless the attributes ask for
/// escaping with `escape: Some(true)`. Link labels are escaped unless
/// `escape: Some(false)` is set. Attribute values are always escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTagRenderer;

impl HtmlTagRenderer {
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl TagRenderer for HtmlTagRenderer {
  fn render_tag(
    &self,
    name: &str,
    content: Option<&str>,
    attrs: &Attributes,
  ) -> String {
    let mut out = String::with_capacity(name.len() * 2 + 32);
    out.push('<');
    out.push_str(name);
    write_attributes(&mut out, attrs, &[]);
    out.push('>');

    if let Some(content) = content {
      if attrs.escape == Some(true) {
        out.push_str(&encode_text(content));
      } else {
        out.push_str(content);
      }
      out.push_str("</");
      out.push_str(name);
      out.push('>');
    }

    out
  }

  fn render_link(&self, label: &str, url: &str, attrs: &Attributes) -> String {
    let mut out = String::from("<a href=\"");
    out.push_str(&encode_double_quoted_attribute(url));
    out.push('"');
    write_attributes(&mut out, attrs, &["href"]);
    out.push('>');
    if attrs.escape == Some(false) {
      out.push_str(label);
    } else {
      out.push_str(&encode_text(label));
    }
    out.push_str("</a>");
    out
  }
}

/// Append ` name="value"` pairs for every attribute not listed in `skip`.
fn write_attributes(out: &mut String, attrs: &Attributes, skip: &[&str]) {
  for (name, value) in attrs.iter() {
    if name.is_empty() || skip.contains(&name) {
      continue;
    }
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
  }
}
