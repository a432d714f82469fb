use std::{
  fs,
  io::{self, Write},
};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, info};
use navkit::{
  cli::{Cli, Commands},
  render_layout,
};
use navkit_config::{Layout, templates};

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  match cli.command {
    Commands::Init {
      output,
      format,
      force,
    } => {
      if output.exists() && !force {
        bail!(
          "Layout file already exists: {}. Use --force to overwrite.",
          output.display()
        );
      }

      if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
          fs::create_dir_all(parent).wrap_err_with(|| {
            format!("Failed to create directory: {}", parent.display())
          })?;
          info!("Created directory: {}", parent.display());
        }
      }

      templates::write_template(&format, &output).wrap_err_with(|| {
        format!("Failed to write layout file: {}", output.display())
      })?;
      info!("Edit the layout and run `navkit render {}`", output.display());
    },

    Commands::Render {
      layout,
      output,
      current,
      base,
      no_auto_active,
    } => {
      let mut navbar = Layout::from_file(&layout).wrap_err_with(|| {
        format!("Failed to load layout: {}", layout.display())
      })?;

      if let Some(current) = current {
        navbar.request.current = current;
      }
      if let Some(base) = base {
        navbar.request.base = base;
      }
      if no_auto_active {
        navbar.helper.auto_active_link = false;
      }

      let html = render_layout(&navbar);

      if let Some(output) = output {
        fs::write(&output, &html).wrap_err_with(|| {
          format!("Failed to write markup to {}", output.display())
        })?;
        info!("Navbar written to {}", output.display());
      } else {
        let mut stdout = io::stdout().lock();
        stdout
          .write_all(html.as_bytes())
          .and_then(|()| stdout.write_all(b"\n"))
          .wrap_err("Failed to write markup to standard output")?;
      }
    },
  }

  Ok(())
}
