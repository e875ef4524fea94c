use std::path::PathBuf;

const APP_DIR_NAME: &str = "cost-manager";

/// `$XDG_CONFIG_HOME/cost-manager`, else `~/.config/cost-manager`.
pub fn config_dir() -> Result<PathBuf, String> {
    base_dir("XDG_CONFIG_HOME", ".config")
}

/// `$XDG_DATA_HOME/cost-manager`, else `~/.local/share/cost-manager`.
pub fn data_dir() -> Result<PathBuf, String> {
    base_dir("XDG_DATA_HOME", ".local/share")
}

fn base_dir(xdg_var: &str, home_fallback: &str) -> Result<PathBuf, String> {
    if let Some(dir) = std::env::var_os(xdg_var).filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir).join(APP_DIR_NAME));
    }
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home).join(home_fallback).join(APP_DIR_NAME))
}
