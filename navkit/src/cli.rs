use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for navkit
#[derive(Parser, Debug)]
#[command(author, version, about = "navkit: Bootstrap navbars from layout files")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,
}

/// All supported subcommands for the navkit CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Write a starter layout file
  Init {
    /// Path to create the layout file at
    #[arg(short, long, default_value = "navkit.toml")]
    output: PathBuf,

    /// Format of the layout file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Render a layout file to HTML.
  Render {
    /// Layout file (TOML or JSON).
    layout: PathBuf,

    /// Write the markup to this file instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// URL of the page being rendered. Overrides `request.current`.
    #[arg(long)]
    current: Option<String>,

    /// Path the application is mounted at. Overrides `request.base`.
    #[arg(long)]
    base: Option<String>,

    /// Do not mark links to the current page as active.
    #[arg(long = "no-auto-active")]
    no_auto_active: bool,
  },
}

impl Cli {
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  #![allow(
    clippy::expect_used,
    clippy::unreachable,
    reason = "Fine in tests"
  )]

  use clap::CommandFactory;

  use super::*;

  #[test]
  fn cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn parses_render_overrides() {
    let cli = Cli::try_parse_from([
      "navkit",
      "render",
      "nav.toml",
      "--current",
      "/about",
      "--no-auto-active",
      "-v",
    ])
    .expect("arguments should parse");

    assert!(cli.verbose);
    let Commands::Render {
      layout,
      output,
      current,
      base,
      no_auto_active,
    } = cli.command
    else {
      unreachable!("expected the render subcommand");
    };
    assert_eq!(layout, PathBuf::from("nav.toml"));
    assert_eq!(output, None);
    assert_eq!(current.as_deref(), Some("/about"));
    assert_eq!(base, None);
    assert!(no_auto_active);
  }
}
