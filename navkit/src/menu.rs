/// Menu nesting state of a navbar session.
///
/// The level decides what `link`, `begin_menu` and `end_menu` emit:
///
/// | Level          | Depth | `link`                 | `begin_menu` opens |
/// |----------------|-------|------------------------|--------------------|
/// | `Outside`      | 0     | nothing                | `<ul class="navbar-nav">` |
/// | `Horizontal`   | 1     | `<li><a.nav-link></li>`| dropdown           |
/// | `Dropdown(n)`  | n ≥ 2 | `<a.dropdown-item>`    | nested dropdown    |
///
/// Bootstrap only styles one dropdown level; depths above 2 are tracked so
/// closing tags stay balanced, but they have no distinct markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuLevel {
  #[default]
  Outside,
  Horizontal,
  Dropdown(usize),
}

impl MenuLevel {
  #[must_use]
  pub const fn from_depth(depth: usize) -> Self {
    match depth {
      0 => Self::Outside,
      1 => Self::Horizontal,
      n => Self::Dropdown(n),
    }
  }

  #[must_use]
  pub const fn depth(self) -> usize {
    match self {
      Self::Outside => 0,
      Self::Horizontal => 1,
      Self::Dropdown(n) => n,
    }
  }

  /// Level after opening a menu.
  #[must_use]
  pub const fn enter(self) -> Self {
    Self::from_depth(self.depth() + 1)
  }

  /// Level after closing a menu, or `None` when no menu is open.
  #[must_use]
  pub const fn leave(self) -> Option<Self> {
    match self {
      Self::Outside => None,
      level => Some(Self::from_depth(level.depth().saturating_sub(1))),
    }
  }

  #[must_use]
  pub const fn is_outside(self) -> bool {
    matches!(self, Self::Outside)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn enter_and_leave_are_inverse() {
    let mut level = MenuLevel::Outside;
    for depth in 1..=4 {
      level = level.enter();
      assert_eq!(level.depth(), depth);
    }
    assert_eq!(level, MenuLevel::Dropdown(4));

    while let Some(next) = level.leave() {
      level = next;
    }
    assert_eq!(level, MenuLevel::Outside);
  }

  #[test]
  fn named_levels() {
    assert_eq!(MenuLevel::Outside.enter(), MenuLevel::Horizontal);
    assert_eq!(MenuLevel::Horizontal.enter(), MenuLevel::Dropdown(2));
    assert_eq!(MenuLevel::Dropdown(2).leave(), Some(MenuLevel::Horizontal));
    assert_eq!(MenuLevel::Outside.leave(), None);
  }
}
