use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            match serde_yaml::to_string(cfg) {
                Ok(yaml) => println!("{}", yaml),
                Err(e) => messages::error(format!("Cannot render configuration: {}", e)),
            }
        }

        if *edit_config {
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

            let status = Command::new(&editor_to_use).arg(&path).status();
            match status {
                Ok(s) if s.success() => {
                    messages::success(format!("Configuration edited with '{}'", editor_to_use));
                }
                Ok(_) | Err(_) => {
                    messages::warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            messages::success(format!(
                                "Configuration edited with fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            messages::error(format!(
                                "Failed to edit configuration with fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
