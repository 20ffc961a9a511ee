/*
 *  config.rs
 *
 *  Lightpainter - paint with light
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layered YAML and command line configuration
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

pub const DEFAULT_FRAME_RATE: u32 = 30;
/// Above this the frame period rounds to zero milliseconds
pub const MAX_FRAME_RATE: u32 = 1000;
pub const DEFAULT_TITLE: &str = "Lightpainter2";
pub const DEFAULT_CATALOG_DIR: &str = "images";

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>, // e.g., "info" | "debug"
    /// panel geometry and wiring
    pub display: Option<DisplayConfig>,
    /// image card, saved settings and animation
    pub menu: Option<MenuConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub rotate_deg: Option<u16>,
    pub invert: Option<bool>,
    pub brightness: Option<u8>,     // 0-255
    pub driver: Option<DriverKind>,
    pub bus: Option<BusConfig>,
    /// headless only: write every changed frame here as PBM
    pub dump_frame: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MenuConfig {
    /// directory the images are uploaded to
    pub catalog_dir: Option<PathBuf>,
    pub settings_file: Option<PathBuf>,
    pub frame_rate: Option<u32>,
    pub title: Option<String>,
}

impl MenuConfig {
    pub fn catalog_dir(&self) -> PathBuf {
        self.catalog_dir.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR))
    }

    /// Explicit path, else `~/.config/lightpainter/settings.yaml`
    pub fn settings_file(&self) -> PathBuf {
        if let Some(p) = self.settings_file.as_ref() {
            return p.clone();
        }
        match home_dir() {
            Some(home) => home.join(".config/lightpainter/settings.yaml"),
            None => PathBuf::from("settings.yaml"),
        }
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate.unwrap_or(DEFAULT_FRAME_RATE)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

impl Config {
    /// Display group, defaults when absent
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Menu group, defaults when absent
    pub fn menu(&self) -> MenuConfig {
        self.menu.clone().unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "lightpainter", about = "Lightpainter menu controller", version)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Directory holding the images
    #[arg(long, value_hint = ValueHint::DirPath)]
    pub catalog_dir: Option<PathBuf>,
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub settings_file: Option<PathBuf>,
    #[arg(long)]
    pub display_width: Option<u32>,
    #[arg(long)]
    pub display_height: Option<u32>,
    #[arg(long)]
    pub display_rotate_deg: Option<u16>,
    #[arg(long, action = ArgAction::Set)]
    pub display_invert: Option<bool>,
    /// run against the in-memory panel instead of hardware
    #[arg(long, action = ArgAction::SetTrue)]
    pub headless: bool,
    /// write each changed frame to this PBM file (headless)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub dump_frame: Option<PathBuf>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Public entry point: read YAML, merge, apply CLI, validate.
pub fn load(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        log::debug!("using config file {}", p.display());
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Pretty YAML of the effective config
pub fn dump_config(cfg: &Config) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(cfg)?)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/lightpainter/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/lightpainter/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/lightpainter.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["lightpainter.yaml", "config.yaml", "config/lightpainter.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() { dst.log_level = src.log_level; }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
    match (&mut dst.menu, src.menu) {
        (None, Some(c)) => dst.menu = Some(c),
        (Some(d), Some(s)) => merge_menu(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()       { dst.width = src.width; }
    if src.height.is_some()      { dst.height = src.height; }
    if src.rotate_deg.is_some()  { dst.rotate_deg = src.rotate_deg; }
    if src.invert.is_some()      { dst.invert = src.invert; }
    if src.brightness.is_some()  { dst.brightness = src.brightness; }
    if src.driver.is_some()      { dst.driver = src.driver; }
    if src.bus.is_some()         { dst.bus = src.bus; }
    if src.dump_frame.is_some()  { dst.dump_frame = src.dump_frame; }
}

fn merge_menu(dst: &mut MenuConfig, src: MenuConfig) {
    if src.catalog_dir.is_some()   { dst.catalog_dir = src.catalog_dir; }
    if src.settings_file.is_some() { dst.settings_file = src.settings_file; }
    if src.frame_rate.is_some()    { dst.frame_rate = src.frame_rate; }
    if src.title.is_some()         { dst.title = src.title; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }

    let any_display = cli.display_width.is_some()
        || cli.display_height.is_some()
        || cli.display_rotate_deg.is_some()
        || cli.display_invert.is_some()
        || cli.dump_frame.is_some()
        || cli.headless;
    if any_display && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    if let Some(display) = cfg.display.as_mut() {
        if cli.display_width.is_some()       { display.width = cli.display_width; }
        if cli.display_height.is_some()      { display.height = cli.display_height; }
        if cli.display_rotate_deg.is_some()  { display.rotate_deg = cli.display_rotate_deg; }
        if cli.display_invert.is_some()      { display.invert = cli.display_invert; }
        if cli.dump_frame.is_some()          { display.dump_frame = cli.dump_frame.clone(); }
        if cli.headless                      { display.driver = Some(DriverKind::Mock); }
    }

    if (cli.catalog_dir.is_some() || cli.settings_file.is_some()) && cfg.menu.is_none() {
        cfg.menu = Some(MenuConfig::default());
    }
    if let Some(menu) = cfg.menu.as_mut() {
        if cli.catalog_dir.is_some()   { menu.catalog_dir = cli.catalog_dir.clone(); }
        if cli.settings_file.is_some() { menu.settings_file = cli.settings_file.clone(); }
    }
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(display) = cfg.display.as_ref() {
        if display.width == Some(0) || display.height == Some(0) {
            return Err(ConfigError::Validation("display width/height must be > 0".into()));
        }
        if let Some(rot) = display.rotate_deg {
            match rot {
                0 | 90 | 180 | 270 => {},
                _ => return Err(ConfigError::Validation("display rotate_deg must be 0|90|180|270".into()))
            }
        }
    }
    if let Some(menu) = cfg.menu.as_ref() {
        if let Some(rate) = menu.frame_rate {
            if rate == 0 || rate > MAX_FRAME_RATE {
                return Err(ConfigError::Validation(
                    format!("menu frame_rate must be 1..={}", MAX_FRAME_RATE)
                ));
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BusConfig {
    I2c {
        bus: String,        // e.g. "/dev/i2c-1"
        address: u8,        // e.g. 0x3C (I2C addresses are 7-bit, stored in u8)
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    Ssd1306,
    /// in-memory panel, no hardware
    Mock,
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
log_level: debug
display:
  width: 128
  height: 32
  driver: ssd1306
  bus:
    type: i2c
    bus: /dev/i2c-1
    address: 60
menu:
  catalog_dir: /media/sd
  frame_rate: 20
"#;

    #[test]
    fn test_yaml_groups_parse() {
        let cfg: Config = serde_yaml::from_str(YAML).unwrap();
        let display = cfg.display();
        assert!(matches!(display.driver, Some(DriverKind::Ssd1306)));
        assert!(matches!(display.bus, Some(BusConfig::I2c { address: 0x3C, .. })));
        assert_eq!(cfg.menu().catalog_dir(), PathBuf::from("/media/sd"));
        assert_eq!(cfg.menu().frame_rate(), 20);
        assert_eq!(cfg.menu().title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_defaults_without_groups() {
        let cfg = Config::default();
        assert_eq!(cfg.log_level(), "info");
        assert_eq!(cfg.menu().frame_rate(), DEFAULT_FRAME_RATE);
        assert_eq!(cfg.menu().catalog_dir(), PathBuf::from(DEFAULT_CATALOG_DIR));
        assert!(cfg.display().driver.is_none());
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let mut cfg: Config = serde_yaml::from_str(YAML).unwrap();
        let over: Config = serde_yaml::from_str("menu:\n  title: Hello\n").unwrap();
        merge(&mut cfg, over);
        assert_eq!(cfg.menu().title(), "Hello");
        assert_eq!(cfg.menu().frame_rate(), 20);
        assert_eq!(cfg.log_level(), "debug");
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut cfg: Config = serde_yaml::from_str(YAML).unwrap();
        let cli = Cli::parse_from([
            "lightpainter",
            "--log-level", "warn",
            "--catalog-dir", "/tmp/images",
            "--display-invert", "true",
            "--headless",
        ]);
        apply_cli_overrides(&mut cfg, &cli);
        assert_eq!(cfg.log_level(), "warn");
        assert_eq!(cfg.menu().catalog_dir(), PathBuf::from("/tmp/images"));
        assert_eq!(cfg.display().invert, Some(true));
        assert!(matches!(cfg.display().driver, Some(DriverKind::Mock)));
    }

    #[test]
    fn test_cli_creates_missing_groups() {
        let mut cfg = Config::default();
        let cli = Cli::parse_from(["lightpainter", "--display-width", "64", "--settings-file", "s.yaml"]);
        apply_cli_overrides(&mut cfg, &cli);
        assert_eq!(cfg.display().width, Some(64));
        assert_eq!(cfg.menu().settings_file(), PathBuf::from("s.yaml"));
    }

    #[test]
    fn test_validation_errors() {
        let bad_size: Config = serde_yaml::from_str("display:\n  width: 0\n").unwrap();
        assert!(matches!(validate(&bad_size), Err(ConfigError::Validation(_))));

        let bad_rot: Config = serde_yaml::from_str("display:\n  rotate_deg: 45\n").unwrap();
        assert!(matches!(validate(&bad_rot), Err(ConfigError::Validation(_))));

        let bad_rate: Config = serde_yaml::from_str("menu:\n  frame_rate: 0\n").unwrap();
        assert!(matches!(validate(&bad_rate), Err(ConfigError::Validation(_))));

        let too_fast: Config = serde_yaml::from_str("menu:\n  frame_rate: 2000\n").unwrap();
        assert!(matches!(validate(&too_fast), Err(ConfigError::Validation(_))));

        let fastest: Config = serde_yaml::from_str("menu:\n  frame_rate: 1000\n").unwrap();
        assert!(validate(&fastest).is_ok());

        let ok: Config = serde_yaml::from_str(YAML).unwrap();
        assert!(validate(&ok).is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/lightpainter.yaml")),
            ..Cli::default()
        };
        assert!(matches!(load(&cli), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_dump_config_is_yaml() {
        let cfg: Config = serde_yaml::from_str(YAML).unwrap();
        let text = dump_config(&cfg).unwrap();
        let back: Config = serde_yaml::from_str(&text).unwrap();
        assert_eq!(back.menu().frame_rate(), 20);
    }
}
