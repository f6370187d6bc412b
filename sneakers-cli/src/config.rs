use std::path::PathBuf;

/// Load environment variables from .env files in multiple locations
///
/// Priority order (highest to lowest):
/// 1. Environment variables already set
/// 2. Current directory .env
/// 3. ~/.sneakers/.env
///
/// dotenvy never overwrites a variable that is already set, so loading in
/// this order gives the priority above. Returns the files that were read
/// so the caller can log them once tracing is up.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded_from = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded_from.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded_from.push(env_file);
        }
    }

    loaded_from
}

/// Get the sneakers config directory path (~/.sneakers)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".sneakers"))
}
