use std::fs;
use std::path::PathBuf;

use chrono::FixedOffset;
use serde::Deserialize;

/// Zone used when rendering event times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Accepts `local`, `utc` or an offset such as `+02:00` / `-0530`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        match value.to_lowercase().as_str() {
            "local" => return Some(Self::Local),
            "utc" | "z" => return Some(Self::Utc),
            _ => {}
        }
        parse_offset(value).map(Self::Fixed)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// `local`, `utc` or a fixed `+HH:MM` offset
    #[serde(default)]
    pub timezone: Option<String>,

    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// tracing `EnvFilter` directive, e.g. `multicall_devtools=debug`
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Config {
    pub fn timezone(&self) -> TimeZoneSetting {
        self.timezone
            .as_deref()
            .and_then(TimeZoneSetting::parse)
            .unwrap_or_default()
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join("mcdev.log")))
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    parse(&content)
}

/// Malformed files fall back to defaults.
pub fn parse(content: &str) -> Config {
    toml::from_str::<Config>(content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("MCDEV_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("mcdev").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("mcdev").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "mcdev", "mcdev")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("mcdev"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("mcdev"));
    }
    directories::ProjectDirs::from("io", "mcdev", "mcdev").map(|dirs| dirs.data_dir().to_path_buf())
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timezone_setting() {
        assert_eq!(TimeZoneSetting::parse("local"), Some(TimeZoneSetting::Local));
        assert_eq!(TimeZoneSetting::parse("UTC"), Some(TimeZoneSetting::Utc));
        assert_eq!(
            TimeZoneSetting::parse("+02:00"),
            Some(TimeZoneSetting::Fixed(FixedOffset::east_opt(7200).unwrap()))
        );
        assert_eq!(
            TimeZoneSetting::parse("-0530"),
            Some(TimeZoneSetting::Fixed(
                FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap()
            ))
        );
        assert_eq!(TimeZoneSetting::parse("Europe/Paris"), None);
        assert_eq!(TimeZoneSetting::parse("+2"), None);
        assert_eq!(TimeZoneSetting::parse("+01:75"), None);
    }

    #[test]
    fn test_parse_config() {
        let config = parse(
            r#"
            timezone = "utc"
            log_file = "/tmp/mcdev.log"
            log_filter = "debug"
            "#,
        );
        assert_eq!(config.timezone(), TimeZoneSetting::Utc);
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/mcdev.log")));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_malformed_config_uses_defaults() {
        let config = parse("timezone = [");
        assert_eq!(config.timezone(), TimeZoneSetting::Local);
        assert!(config.log_file.is_none());
    }
}
