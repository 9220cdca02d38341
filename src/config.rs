use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_APP_NAME: &str = "FitBee";
pub const DEFAULT_FOOTER_APP_NAME: &str = "FitTrack";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_WORKOUT_API_URL: &str = "https://wger.de/api/v2/exerciseinfo/";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_WORKOUT_LIMIT: u32 = 20;
pub const DEFAULT_WORKOUT_LANGUAGE: u32 = 2;
pub const DEFAULT_WATER_GOAL: u32 = 8;
pub const DEFAULT_REMINDER_INTERVAL_MS: u64 = 7_200_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Unset, the nav bar and the footer fall back to different names
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default = "default_app_version")]
    pub app_version: String,
    #[serde(default = "default_workout_api_url")]
    pub workout_api_url: String,
    #[serde(default)]
    pub api_timeout_ms: u64,
    #[serde(default)]
    pub workout_limit: u32,
    #[serde(default)]
    pub workout_language: u32,
    #[serde(default)]
    pub water_goal: u32,
    #[serde(default)]
    pub reminder_interval_ms: u64,
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    #[serde(default)]
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal_weight_kg: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Bot".to_string(),
            age: 28,
            height_cm: 175.0,
            weight_kg: 76.0,
            goal_weight_kg: 70.0,
        }
    }
}

fn default_app_version() -> String {
    DEFAULT_APP_VERSION.to_string()
}

fn default_workout_api_url() -> String {
    DEFAULT_WORKOUT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: None,
            app_version: default_app_version(),
            workout_api_url: default_workout_api_url(),
            api_timeout_ms: DEFAULT_API_TIMEOUT_MS,
            workout_limit: DEFAULT_WORKOUT_LIMIT,
            workout_language: DEFAULT_WORKOUT_LANGUAGE,
            water_goal: DEFAULT_WATER_GOAL,
            reminder_interval_ms: DEFAULT_REMINDER_INTERVAL_MS,
            debug_mode: false,
            storage_path: None,
            profile: Profile::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Failed to parse config")?;
        Ok(config.normalized())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Zero means "not set": fall back to the built-in default
    pub fn normalized(mut self) -> Self {
        if self.api_timeout_ms == 0 {
            self.api_timeout_ms = DEFAULT_API_TIMEOUT_MS;
        }
        if self.workout_limit == 0 {
            self.workout_limit = DEFAULT_WORKOUT_LIMIT;
        }
        if self.workout_language == 0 {
            self.workout_language = DEFAULT_WORKOUT_LANGUAGE;
        }
        if self.water_goal == 0 {
            self.water_goal = DEFAULT_WATER_GOAL;
        }
        if self.reminder_interval_ms == 0 {
            self.reminder_interval_ms = DEFAULT_REMINDER_INTERVAL_MS;
        }
        if self
            .app_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            self.app_name = None;
        }
        if self.app_version.trim().is_empty() {
            self.app_version = default_app_version();
        }
        if self.workout_api_url.trim().is_empty() {
            self.workout_api_url = default_workout_api_url();
        }
        self
    }

    /// Name shown in the navigation bar
    pub fn nav_app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Name shown in the dashboard footer
    pub fn footer_app_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_FOOTER_APP_NAME)
    }

    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    pub fn reminder_interval(&self) -> Duration {
        Duration::from_millis(self.reminder_interval_ms)
    }

    /// Where the local storage database lives
    pub fn storage_file(&self) -> PathBuf {
        if let Some(path) = &self.storage_path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("fitbee"))
            .unwrap_or_else(crate::utils::get_storage_fallback_dir)
            .join("storage.db")
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists anywhere; every setting has
/// a default so the app can still start.
pub fn find_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/fitbee/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("fitbee").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.app_name, None);
        assert_eq!(config.nav_app_name(), "FitBee");
        assert_eq!(config.footer_app_name(), "FitTrack");
        assert_eq!(config.app_version, "1.0.0");
        assert_eq!(config.workout_api_url, DEFAULT_WORKOUT_API_URL);
        assert_eq!(config.api_timeout(), Duration::from_millis(10_000));
        assert_eq!(config.water_goal, 8);
        assert_eq!(config.reminder_interval_ms, 7_200_000);
        assert!(!config.debug_mode);
        assert_eq!(config.profile, Profile::default());
    }

    #[test]
    fn test_zero_values_fall_back_to_defaults() {
        let config = Config::from_yaml("water_goal: 0\napi_timeout_ms: 0\nworkout_limit: 0").unwrap();
        assert_eq!(config.water_goal, DEFAULT_WATER_GOAL);
        assert_eq!(config.api_timeout_ms, DEFAULT_API_TIMEOUT_MS);
        assert_eq!(config.workout_limit, DEFAULT_WORKOUT_LIMIT);
    }

    #[test]
    fn test_overrides_and_partial_profile() {
        let yaml = "
app_name: Pulse
water_goal: 10
workout_api_url: http://localhost:9000/exercises/
profile:
  name: Sam
  weight_kg: 80
";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.nav_app_name(), "Pulse");
        assert_eq!(config.footer_app_name(), "Pulse");
        assert_eq!(config.water_goal, 10);
        assert_eq!(config.workout_api_url, "http://localhost:9000/exercises/");
        assert_eq!(config.profile.name, "Sam");
        assert_eq!(config.profile.weight_kg, 80.0);
        // Unset profile fields keep their defaults
        assert_eq!(config.profile.height_cm, 175.0);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(Config::from_yaml("water_goal: [").is_err());
    }

    #[test]
    fn test_missing_cli_config_is_an_error() {
        let result = find_config_path(Some("/definitely/not/here/config.yaml".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_storage_path() {
        let config = Config::from_yaml("storage_path: /tmp/fitbee-test.db").unwrap();
        assert_eq!(config.storage_file(), PathBuf::from("/tmp/fitbee-test.db"));
    }

    #[test]
    fn test_blank_app_name_counts_as_unset() {
        let config = Config::from_yaml("app_name: \"  \"").unwrap();
        assert_eq!(config.app_name, None);
        assert_eq!(config.nav_app_name(), DEFAULT_APP_NAME);
        assert_eq!(config.footer_app_name(), DEFAULT_FOOTER_APP_NAME);
    }
}
