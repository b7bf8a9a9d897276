//! Config command handler.
//!
//! Displays and initializes the ezconsole configuration file.

use std::io::Write;
use std::path::Path;

use super::stdout_console;
use crate::config::{
    generate_config_with_comments, load_config_from_path, save_config_to_path, Config,
};
use crate::error::{EzConsoleError, Result};
use crate::output::{print_success, Color, Console};

/// Display the configuration stored at `path`.
///
/// Shows the config file path, then the values in TOML format. When the file
/// does not exist the defaults are shown with a note.
pub fn config_display_command(config: &Config, path: &Path) -> Result<()> {
    let mut console = stdout_console(config);
    display_config(&mut console, path)
}

fn display_config<W: Write>(console: &mut Console<W>, path: &Path) -> Result<()> {
    console.write_line_colored(&format!("# {}", path.display()), Some(Color::DarkGray), None)?;

    let config = if path.exists() {
        load_config_from_path(path)?
    } else {
        console.write_line_colored(
            "# (file does not exist, using defaults)",
            Some(Color::Yellow),
            None,
        )?;
        Config::default()
    };
    console.new_line()?;
    console.write(&generate_config_with_comments(&config))?;
    console.flush()
}

/// Write a commented default config file to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn config_init_command(config: &Config, path: &Path, force: bool) -> Result<()> {
    let mut console = stdout_console(config);
    init_config(&mut console, path, force)
}

fn init_config<W: Write>(console: &mut Console<W>, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(EzConsoleError::Config(format!(
            "Config file already exists at {}. Use --force to overwrite it.",
            path.display()
        )));
    }
    save_config_to_path(&Config::default(), path)?;
    print_success(console, &format!("wrote {}", path.display()))
}
