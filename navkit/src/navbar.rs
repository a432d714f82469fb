use navkit_config::{Brand, HelperConfig, Layout, NavbarOptions};
use navkit_html::{
  Attributes,
  BootstrapFormRenderer,
  CatalogTranslator,
  FormRenderer,
  HtmlTagRenderer,
  IdentityTranslator,
  StaticUrlResolver,
  TagRenderer,
  Translator,
  UrlResolver,
};

use crate::menu::MenuLevel;

/// The services a navbar session delegates to.
pub struct Collaborators {
  pub tags:       Box<dyn TagRenderer>,
  pub forms:      Box<dyn FormRenderer>,
  pub urls:       Box<dyn UrlResolver>,
  pub translator: Box<dyn Translator>,
}

impl Collaborators {
  /// Default renderers around the given URL resolver, without translations.
  #[must_use]
  pub fn new(urls: impl UrlResolver + 'static) -> Self {
    Self {
      tags:       Box::new(HtmlTagRenderer),
      forms:      Box::new(BootstrapFormRenderer::new()),
      urls:       Box::new(urls),
      translator: Box::new(IdentityTranslator),
    }
  }

  /// Default renderers for the request and translations a layout describes.
  #[must_use]
  pub fn for_layout(layout: &Layout) -> Self {
    let translator = CatalogTranslator::new(layout.helper.translations.clone());
    let urls = StaticUrlResolver::new(layout.request.current.clone())
      .with_base(layout.request.base.clone());

    Self {
      tags:       Box::new(HtmlTagRenderer),
      forms:      Box::new(BootstrapFormRenderer::with_parts(
        HtmlTagRenderer,
        translator.clone(),
      )),
      urls:       Box::new(urls),
      translator: Box::new(translator),
    }
  }

  #[must_use]
  pub fn with_tags(mut self, tags: impl TagRenderer + 'static) -> Self {
    self.tags = Box::new(tags);
    self
  }

  #[must_use]
  pub fn with_forms(mut self, forms: impl FormRenderer + 'static) -> Self {
    self.forms = Box::new(forms);
    self
  }

  #[must_use]
  pub fn with_translator(
    mut self,
    translator: impl Translator + 'static,
  ) -> Self {
    self.translator = Box::new(translator);
    self
  }
}

/// Arguments of [`NavbarBuilder::begin_menu`].
///
/// Which fields matter depends on the level the menu is opened at. Outside
/// any menu only `options` is used, for the `<ul>`. Inside a menu it
/// describes a dropdown: `name` and `url` for its toggle link, `options`
/// for the wrapping `<li>`, `link_options` for the toggle link and
/// `list_options` for the dropdown `<div>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSpec {
  pub name:         Option<String>,
  pub url:          Option<String>,
  pub options:      Attributes,
  pub link_options: Attributes,
  pub list_options: Attributes,
}

impl MenuSpec {
  /// Horizontal menu in the navbar.
  #[must_use]
  pub fn nav(options: Attributes) -> Self {
    Self {
      options,
      ..Self::default()
    }
  }

  /// Dropdown menu labelled `name`.
  #[must_use]
  pub fn dropdown(name: impl Into<String>) -> Self {
    Self {
      name: Some(name.into()),
      ..Self::default()
    }
  }

  #[must_use]
  pub fn url(mut self, url: impl Into<String>) -> Self {
    self.url = Some(url.into());
    self
  }

  #[must_use]
  pub fn options(mut self, options: Attributes) -> Self {
    self.options = options;
    self
  }

  #[must_use]
  pub fn link_options(mut self, link_options: Attributes) -> Self {
    self.link_options = link_options;
    self
  }

  #[must_use]
  pub fn list_options(mut self, list_options: Attributes) -> Self {
    self.list_options = list_options;
    self
  }
}

/// One navbar render.
///
/// The `create`/`begin_menu` calls return opening tags whose closing tags
/// come from `end_menu`/`end`, so individual fragments are unbalanced on
/// purpose. Misuse (a link outside of any menu, closing a menu that was
/// never opened) never fails: it produces an empty fragment and a warning
/// in the log.
pub struct NavbarBuilder<'a> {
  helpers:          &'a Collaborators,
  auto_active_link: bool,
  responsive:       bool,
  container:        bool,
  level:            MenuLevel,
}

impl<'a> NavbarBuilder<'a> {
  #[must_use]
  pub const fn new(helpers: &'a Collaborators, config: &HelperConfig) -> Self {
    Self {
      helpers,
      auto_active_link: config.auto_active_link,
      responsive: false,
      container: false,
      level: MenuLevel::Outside,
    }
  }

  #[must_use]
  pub const fn level(&self) -> MenuLevel {
    self.level
  }

  #[must_use]
  pub const fn is_responsive(&self) -> bool {
    self.responsive
  }

  #[must_use]
  pub const fn has_container(&self) -> bool {
    self.container
  }

  /// Open the navbar.
  ///
  /// Returns the optional container `div`, the `nav` opening tag, the
  /// toggle button and brand, and for responsive navbars the opening tag of
  /// the collapsible `div`. [`NavbarBuilder::end`] closes all of them.
  pub fn create(
    &mut self,
    brand: Option<&Brand>,
    options: &NavbarOptions,
  ) -> String {
    self.responsive = options.responsive;
    self.container = options.container;

    let mut nav = options.attributes.clone();
    nav.add_class("navbar");
    if options.inverse {
      nav.add_class("navbar-inverse bg-inverse");
    } else {
      nav.add_class("navbar-light bg-faded");
    }
    if let Some(placement) = options.fixed {
      nav.add_class(placement.class());
    } else if options.sticky {
      nav.add_class("sticky-top");
    }

    let brand = brand.map(|b| self.brand(b)).unwrap_or_default();

    let toggle = if self.responsive {
      nav.add_class("navbar-toggleable-md");
      self.toggle_button(&options.inner_id)
    } else {
      String::new()
    };

    let tags = &self.helpers.tags;
    let mut out = String::new();
    if self.container {
      let div = Attributes::new().with_class("container");
      out.push_str(&tags.render_tag("div", None, &div));
    }
    out.push_str(&tags.render_tag("nav", None, &nav));
    out.push_str(&toggle);
    out.push_str(&brand);
    if self.responsive {
      let collapse = Attributes::new()
        .with_class("collapse navbar-collapse")
        .with("id", options.inner_id.clone());
      out.push_str(&tags.render_tag("div", None, &collapse));
    }

    log::debug!(
      "Opened navbar (responsive: {}, container: {})",
      self.responsive,
      self.container
    );
    out
  }

  fn brand(&self, brand: &Brand) -> String {
    match brand {
      Brand::Label(label) if label.is_empty() => String::new(),
      Brand::Label(label) => {
        let attrs = Attributes::new()
          .with_class("navbar-brand")
          .with_escape(false);
        self.helpers.tags.render_link(label, "/", &attrs)
      },
      Brand::Link { name, url, options } => {
        let mut attrs = options.clone();
        attrs.add_class("navbar-brand");
        let url = url.as_deref().filter(|u| !u.is_empty()).unwrap_or("/");
        self.helpers.tags.render_link(name, url, &attrs)
      },
    }
  }

  /// Collapse toggle for responsive navbars.
  ///
  /// The icon uses Bootstrap's `navbar-toggler-icon` class. Older helpers
  /// emitted `navbar-toggle-icon`, which no Bootstrap stylesheet defines.
  fn toggle_button(&self, inner_id: &str) -> String {
    let tags = &self.helpers.tags;
    let icon = tags.render_tag(
      "span",
      Some(""),
      &Attributes::new().with_class("navbar-toggler-icon"),
    );
    let attrs = Attributes::new()
      .with("type", "button")
      .with_class("navbar-toggler navbar-toggler-right")
      .with("data-toggle", "collapse")
      .with("data-target", format!("#{inner_id}"))
      .with("aria-controls", inner_id)
      .with("aria-expanded", "false")
      .with(
        "aria-label",
        self.helpers.translator.translate("Toggle navigation"),
      );
    tags.render_tag("button", Some(&icon), &attrs)
  }

  /// [`NavbarBuilder::link_with`] without extra attributes.
  pub fn link(&self, name: &str, url: &str) -> String {
    self.link_with(name, url, Attributes::new(), Attributes::new())
  }

  /// Add a link to the current menu.
  ///
  /// In a horizontal menu the link is wrapped in `<li class="nav-item">`
  /// carrying `options`, and `link_options` go on the `<a class="nav-link">`.
  /// In a dropdown the link is a bare `<a class="dropdown-item">` carrying
  /// `options`. Outside of any menu nothing is rendered.
  ///
  /// With `auto_active_link` on, `active` is added to `options` when `url`
  /// resolves to the current request URL.
  pub fn link_with(
    &self,
    name: &str,
    url: &str,
    mut options: Attributes,
    mut link_options: Attributes,
  ) -> String {
    if self.auto_active_link && self.helpers.urls.is_current(url) {
      options.add_class("active");
    }

    let tags = &self.helpers.tags;
    match self.level {
      MenuLevel::Outside => {
        log::warn!("Ignoring navbar link {name:?} outside of a menu");
        String::new()
      },
      MenuLevel::Horizontal => {
        options.add_class("nav-item");
        link_options.add_class("nav-link");
        let link = tags.render_link(name, url, &link_options);
        tags.render_tag("li", Some(&link), &options)
      },
      MenuLevel::Dropdown(_) => {
        options.add_class("dropdown-item");
        tags.render_link(name, url, &options)
      },
    }
  }

  pub fn button(&self, name: &str, options: &Attributes) -> String {
    self.helpers.forms.button(name, options)
  }

  pub fn divider(&self, mut options: Attributes) -> String {
    options.add_class("dropdown-divider");
    self.helpers.tags.render_tag("div", Some(""), &options)
  }

  /// Section header, meant for dropdown menus.
  pub fn header(&self, name: &str, mut options: Attributes) -> String {
    options.add_class("dropdown-header");
    self.helpers.tags.render_tag("h6", Some(name), &options)
  }

  /// Free text in the navbar. The `tag` option picks the wrapping element
  /// (default `span`); everything else goes on that element.
  pub fn text(&self, text: &str, mut options: Attributes) -> String {
    let tag = options.take("tag").unwrap_or_else(|| "span".to_string());
    options.add_class("navbar-text");
    self.helpers.tags.render_tag(&tag, Some(text), &options)
  }

  /// Search form aligned by the `align` option (default `left`). The other
  /// options go to [`FormRenderer::search_form`].
  pub fn search_form(
    &self,
    model: Option<&str>,
    mut options: Attributes,
  ) -> String {
    let align = options.take("align").unwrap_or_else(|| "left".to_string());
    let align = format!("navbar-{align}");
    options.add_class(["navbar-form", align.as_str()]);
    self.helpers.forms.search_form(model, &options)
  }

  /// Open a menu one level below the current one.
  ///
  /// Outside of any menu this opens the horizontal `<ul class="navbar-nav">`
  /// from `menu.options`. Inside a menu it opens a dropdown: the
  /// `<li class="nav-item dropdown">`, its toggle link and the
  /// `<div class="dropdown-menu">`.
  pub fn begin_menu(&mut self, menu: MenuSpec) -> String {
    let out = match self.level {
      MenuLevel::Outside => {
        let mut options = menu.options;
        options.add_class("navbar-nav");
        self.helpers.tags.render_tag("ul", None, &options)
      },
      level => {
        if level.depth() >= 2 {
          log::warn!(
            "Opening a dropdown at depth {}, Bootstrap does not style \
             nested dropdowns",
            level.depth() + 1
          );
        }
        self.open_dropdown(menu)
      },
    };

    self.level = self.level.enter();
    out
  }

  fn open_dropdown(&self, menu: MenuSpec) -> String {
    let MenuSpec {
      name,
      url,
      mut options,
      mut link_options,
      mut list_options,
    } = menu;

    link_options.or_insert("data-toggle", "dropdown");
    link_options.or_insert("aria-haspopup", "true");
    link_options.or_insert("aria-expanded", "false");
    if link_options.escape.is_none() {
      link_options.escape = Some(false);
    }
    link_options.add_class("nav-link dropdown-toggle");

    let url = url.filter(|u| !u.is_empty());
    let tags = &self.helpers.tags;
    let link = tags.render_link(
      name.as_deref().unwrap_or_default(),
      url.as_deref().unwrap_or("#"),
      &link_options,
    );

    options.add_class("nav-item dropdown");
    list_options.add_class("dropdown-menu");

    let mut out = tags.render_tag("li", None, &options);
    out.push_str(&link);
    out.push_str(&tags.render_tag("div", None, &list_options));
    out
  }

  /// Close the innermost open menu.
  pub fn end_menu(&mut self) -> String {
    let out = match self.level {
      MenuLevel::Outside => {
        log::warn!("Ignoring end of menu with no open menu");
        return String::new();
      },
      MenuLevel::Horizontal => "</ul>",
      MenuLevel::Dropdown(_) => "</div></li>",
    };

    self.level = self.level.leave().unwrap_or_default();
    out.to_string()
  }

  /// Close the navbar opened by [`NavbarBuilder::create`].
  pub fn end(&self) -> String {
    if !self.level.is_outside() {
      log::warn!(
        "Closing navbar with {} menu level(s) still open",
        self.level.depth()
      );
    }

    let mut out = String::new();
    if self.responsive {
      out.push_str("</div>");
    }
    out.push_str("</nav>");
    if self.container {
      out.push_str("</div>");
    }
    out
  }
}
