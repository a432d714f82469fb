use crate::{
  attrs::Attributes,
  i18n::{IdentityTranslator, Translator},
  tag::{HtmlTagRenderer, TagRenderer},
};

/// Renders the form widgets a navbar can embed.
pub trait FormRenderer {
  /// Render a `<button>` element.
  fn button(&self, label: &str, attrs: &Attributes) -> String;

  /// Render a complete search form for `model`.
  fn search_form(&self, model: Option<&str>, attrs: &Attributes) -> String;
}

/// Bootstrap 4 flavored [`FormRenderer`] built on top of a [`TagRenderer`].
#[derive(Debug, Clone, Default)]
pub struct BootstrapFormRenderer<T = HtmlTagRenderer, L = IdentityTranslator>
{
  tags:       T,
  translator: L,
}

impl BootstrapFormRenderer {
  #[must_use]
  pub const fn new() -> Self {
    Self {
      tags:       HtmlTagRenderer,
      translator: IdentityTranslator,
    }
  }
}

impl<T: TagRenderer, L: Translator> BootstrapFormRenderer<T, L> {
  pub const fn with_parts(tags: T, translator: L) -> Self {
    Self { tags, translator }
  }
}

impl<T: TagRenderer, L: Translator> FormRenderer
  for BootstrapFormRenderer<T, L>
{
  /// Buttons default to `type="submit"` and, unless the caller already
  /// picked a `btn-*` style, `btn btn-secondary`.
  fn button(&self, label: &str, attrs: &Attributes) -> String {
    let mut attrs = attrs.clone();
    attrs.or_insert("type", "submit");
    let styled = attrs
      .class()
      .is_some_and(|c| c.split_whitespace().any(|t| t.starts_with("btn-")));
    if !styled {
      attrs.add_class("btn btn-secondary");
    }
    self.tags.render_tag("button", Some(label), &attrs)
  }

  /// Recognized keys, removed before the rest go on the `<form>` element:
  ///
  /// - `placeholder`: input placeholder, default "Search" (translated).
  /// - `name`: input name, default `q`.
  /// - `value`: initial input value.
  /// - `button`: submit button label, default "Search" (translated).
  fn search_form(&self, model: Option<&str>, attrs: &Attributes) -> String {
    let mut form = attrs.clone();
    form.escape = None;

    let placeholder = form
      .take("placeholder")
      .unwrap_or_else(|| self.translator.translate("Search"));
    let name = form.take("name").unwrap_or_else(|| "q".to_string());
    let value = form.take("value");
    let label = form
      .take("button")
      .unwrap_or_else(|| self.translator.translate("Search"));

    if let Some(model) = model.filter(|m| !m.is_empty()) {
      form.or_insert("id", format!("{}-search", model.to_lowercase()));
    }
    form.or_insert("method", "get");
    form.or_insert("role", "search");
    form.add_class("form-inline");

    let mut input = Attributes::new()
      .with("type", "search")
      .with("name", name)
      .with("class", "form-control")
      .with("placeholder", placeholder.clone())
      .with("aria-label", placeholder);
    if let Some(value) = value {
      input.insert("value", value);
    }

    let input = self.tags.render_tag("input", None, &input);
    let submit = self.button(&label, &Attributes::new());
    let submit = self.tags.render_tag(
      "span",
      Some(&submit),
      &Attributes::new().with_class("input-group-btn"),
    );
    let group = self.tags.render_tag(
      "div",
      Some(&format!("{input}{submit}")),
      &Attributes::new().with_class("input-group"),
    );

    self.tags.render_tag("form", Some(&group), &form)
  }
}
