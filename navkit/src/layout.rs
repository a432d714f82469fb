use std::path::Path;

use navkit_config::{Item, Layout};

use crate::{
  error::NavkitError,
  navbar::{Collaborators, MenuSpec, NavbarBuilder},
};

/// Render a layout with the default collaborators for its request.
#[must_use]
pub fn render_layout(layout: &Layout) -> String {
  let helpers = Collaborators::for_layout(layout);
  render_layout_with(layout, &helpers)
}

/// Render a layout by replaying it as builder calls.
#[must_use]
pub fn render_layout_with(layout: &Layout, helpers: &Collaborators) -> String {
  if let Some(warning) = nesting_warning(layout) {
    log::warn!("{warning}");
  }

  let mut navbar = NavbarBuilder::new(helpers, &layout.helper);

  let mut out =
    navbar.create(layout.navbar.brand.as_ref(), &layout.navbar.options);
  render_items(&mut navbar, &layout.navbar.items, &mut out);
  out.push_str(&navbar.end());
  out
}

/// Load a layout file and render it.
///
/// # Errors
///
/// Returns an error if the layout file cannot be read or parsed.
pub fn render_layout_file(path: &Path) -> Result<String, NavkitError> {
  let layout = Layout::from_file(path)?;
  Ok(render_layout(&layout))
}

/// Warning for layouts nesting dropdowns inside dropdowns, which Bootstrap
/// does not style.
fn nesting_warning(layout: &Layout) -> Option<String> {
  let depth = layout.menu_depth();
  (depth > 2).then(|| {
    format!(
      "Menus are nested {depth} levels deep; only one dropdown level is \
       styled by Bootstrap"
    )
  })
}

fn render_items(
  navbar: &mut NavbarBuilder<'_>,
  items: &[Item],
  out: &mut String,
) {
  for item in items {
    match item {
      Item::Link {
        name,
        url,
        options,
        link_options,
      } => {
        out.push_str(&navbar.link_with(
          name,
          url,
          options.clone(),
          link_options.clone(),
        ));
      },
      Item::Button { name, options } => {
        out.push_str(&navbar.button(name, options));
      },
      Item::Divider { options } => {
        out.push_str(&navbar.divider(options.clone()));
      },
      Item::Header { name, options } => {
        out.push_str(&navbar.header(name, options.clone()));
      },
      Item::Text { text, options } => {
        out.push_str(&navbar.text(text, options.clone()));
      },
      Item::Search { model, options } => {
        out
          .push_str(&navbar.search_form(model.as_deref(), options.clone()));
      },
      Item::Menu {
        name,
        url,
        options,
        link_options,
        list_options,
        items,
      } => {
        out.push_str(&navbar.begin_menu(MenuSpec {
          name:         name.clone(),
          url:          url.clone(),
          options:      options.clone(),
          link_options: link_options.clone(),
          list_options: list_options.clone(),
        }));
        render_items(navbar, items, out);
        out.push_str(&navbar.end_menu());
      },
    }
  }
}
