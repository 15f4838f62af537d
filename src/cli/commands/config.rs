use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
        edit_config,
        editor,
    } = cmd
    {
        // ---- INIT CONFIG ----
        if *init {
            Config::init_at(path, *force)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            if path.exists() {
                println!("📄 Current configuration ({}):\n", path.display());
            } else {
                println!("📄 Default configuration (no file at {}):\n", path.display());
            }
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist (create it with `config --init`)",
                    path.display()
                )));
            }

            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{editor_to_use}'"));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    let status = Command::new(&default_editor)
                        .arg(path)
                        .status()
                        .map_err(|e| AppError::Config(e.to_string()))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "editor '{default_editor}' exited with {status}"
                        )));
                    }
                }
            }

            // Reject what the editor left behind early
            Config::load(path)?;
        }

        if !*init && !*print_config && !*edit_config {
            warning("Nothing to do: use --print, --init or --edit");
        }
    }

    Ok(())
}
