//! Saved defaults for the `render` command.
//!
//! Defaults are stored as the same flags accepted on the command line, one
//! per line, in a global config file and an optional local `.iconmarkrc`.
//! Command-line flags win over local ones, which win over global ones.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::render::RenderMode;

const APP_DIR: &str = "iconmark";
const LOCAL_FILE: &str = ".iconmarkrc";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub perf: bool,
    pub mode: Option<RenderMode>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` on top of `self`. Switches accumulate; valued options
    /// from `other` replace those in `self`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            perf: self.perf || other.perf,
            mode: other.mode.or(self.mode),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }

    fn to_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.watch {
            lines.push("--watch".to_string());
        }
        if self.perf {
            lines.push("--perf".to_string());
        }
        if let Some(mode) = self.mode {
            lines.push(format!("--mode {}", mode.as_str()));
        }
        if let Some(path) = &self.render_debug_log {
            lines.push(format!("--render-debug-log {}", path.display()));
        }
        lines
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join(APP_DIR).join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR)
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR).join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join(APP_DIR).join("config");
        }
    }

    PathBuf::from(LOCAL_FILE)
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(LOCAL_FILE)
}

/// Read flags from a config file. A missing file yields no flags.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// # Errors
/// Returns an error if the config directory or file cannot be written.
pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# iconmark defaults (saved with --save)".to_string()];
    lines.extend(flags.to_lines());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

/// # Errors
/// Returns an error if the file exists but cannot be removed.
pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Combine saved defaults with command-line flags.
///
/// `--clear` removes the global file and ignores every saved default for
/// this run. `--save` writes `cli` to the global file before it is read
/// back. Local flags sit on top of global ones, and `cli` on top of both.
///
/// # Errors
/// Returns an error if a config file cannot be read, written, or removed.
pub fn effective_flags(
    global: &Path,
    local: &Path,
    cli: &ConfigFlags,
    save: bool,
    clear: bool,
) -> Result<ConfigFlags> {
    if clear {
        clear_config_flags(global)?;
    }
    if save {
        save_config_flags(global, cli)?;
    }

    let file_flags = if clear {
        ConfigFlags::default()
    } else {
        load_config_flags(global)?.union(&load_config_flags(local)?)
    };
    Ok(file_flags.union(cli))
}

/// Pick the render mode: merged flags first, then `env_mode`, then view.
pub fn resolve_mode(flags: &ConfigFlags, env_mode: Option<&str>) -> RenderMode {
    flags
        .mode
        .or_else(|| env_mode.and_then(RenderMode::from_name))
        .unwrap_or_default()
}

/// Pick the flags this module persists out of a raw argument list.
///
/// Unknown tokens are skipped, so the full process argv can be passed in.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        let (key, inline_value) = match token.split_once('=') {
            Some((key, value)) if key.starts_with("--") => (key, Some(value.to_string())),
            _ => (token.as_str(), None),
        };
        match key {
            "--watch" => flags.watch = true,
            "--perf" => flags.perf = true,
            "--mode" => {
                let value = inline_value.or_else(|| iter.next().cloned());
                flags.mode = value.as_deref().and_then(RenderMode::from_name);
            }
            "--render-debug-log" => {
                let value = inline_value.or_else(|| iter.next().cloned());
                flags.render_debug_log = value.map(PathBuf::from);
            }
            _ => {}
        }
    }
    flags
}
