use anyhow::{Context, Result};
use gtk4::CssProvider;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::icon::InvalidationPolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub position: PositionConfig,
    #[serde(default = "default_battery_path")]
    pub battery_path: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_resource_dir")]
    pub resource_dir: PathBuf,
    #[serde(default = "default_icon_scale")]
    pub icon_scale: f64,
    #[serde(default)]
    pub invalidation: InvalidationPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PositionConfig {
    #[serde(default = "default_horizontal")]
    pub horizontal: String,
    #[serde(default = "default_vertical")]
    pub vertical: String,
    #[serde(default)]
    pub padding_top: i32,
    #[serde(default)]
    pub padding_bottom: i32,
    #[serde(default)]
    pub padding_left: i32,
    #[serde(default)]
    pub padding_right: i32,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            horizontal: default_horizontal(),
            vertical: default_vertical(),
            padding_top: 20,
            padding_bottom: 0,
            padding_left: 0,
            padding_right: 0,
        }
    }
}

fn default_horizontal() -> String { "right".to_string() }
fn default_vertical() -> String { "top".to_string() }
fn default_battery_path() -> String { "/sys/class/power_supply/BAT0".to_string() }
fn default_poll_interval() -> u64 { 5 }
fn default_resource_dir() -> PathBuf { PathBuf::from("/usr/share/battery-icon/resources") }
fn default_icon_scale() -> f64 { 1.0 }

impl Default for Config {
    fn default() -> Self {
        Self {
            position: PositionConfig::default(),
            battery_path: default_battery_path(),
            poll_interval_secs: default_poll_interval(),
            resource_dir: default_resource_dir(),
            icon_scale: default_icon_scale(),
            invalidation: InvalidationPolicy::default(),
        }
    }
}

fn config_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
        .join(".config/battery-icon")
}

pub fn parse_config(content: &str) -> Result<Config> {
    let mut config: Config = toml::from_str(content).context("invalid config")?;
    if config.poll_interval_secs == 0 {
        warn!("poll_interval_secs must be positive, using {}", default_poll_interval());
        config.poll_interval_secs = default_poll_interval();
    }
    if !(config.icon_scale.is_finite() && config.icon_scale > 0.0) {
        warn!("icon_scale must be positive, using {}", default_icon_scale());
        config.icon_scale = default_icon_scale();
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<Option<Config>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };
    parse_config(&content).map(Some)
}

pub fn load_config() -> Config {
    let config_path = config_dir().join("config.toml");

    match read_config(&config_path) {
        Ok(Some(cfg)) => cfg,
        Ok(None) => {
            debug!("no config at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            warn!("{:#}. Using defaults.", e);
            Config::default()
        }
    }
}

pub fn load_css() {
    let css_path = config_dir().join("style.css");

    let css = if let Ok(content) = std::fs::read_to_string(&css_path) {
        content
    } else {
        include_str!("../style/style.css").to_string()
    };

    let Some(display) = gtk4::gdk::Display::default() else {
        warn!("no display available, skipping stylesheet");
        return;
    };
    let provider = CssProvider::new();
    provider.load_from_data(&css);
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
