//! Window and loop settings
//!
//! Settings come from an optional JSON file (`--config PATH`) and are then
//! overridden by command line flags. Nothing here touches the fractal itself:
//! viewport, iteration cap and gradient are fixed.

use crate::display::{DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub title: String,
    /// Show FPS in the window title at startup (toggle with F)
    pub show_fps: bool,
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            vsync: true,
            title: DEFAULT_TITLE.to_string(),
            show_fps: false,
        }
    }
}

impl Config {
    /// Load settings from a JSON file; missing fields take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse command line arguments (without the program name).
    /// `--config` is applied first so flags always win over the file.
    pub fn from_args<I, S>(args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        // Usage wins over everything, including an unreadable config file
        if args.iter().any(|a| a == "--help") {
            return Ok(Invocation::Help);
        }

        let mut config = match args.iter().position(|a| a == "--config" || a == "-c") {
            Some(i) => match args.get(i + 1) {
                Some(path) => Self::load(path)?,
                None => return Err(Error::MissingValue("--config")),
            },
            None => Self::default(),
        };

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--no-vsync" => config.vsync = false,
                "--fps" => config.show_fps = true,
                "--config" | "-c" => i += 1,
                "--width" | "-w" => {
                    if let Some(w) = args.get(i + 1).and_then(|v| v.parse::<u32>().ok()) {
                        config.width = w;
                    }
                    i += 1;
                },
                "--height" | "-h" => {
                    if let Some(h) = args.get(i + 1).and_then(|v| v.parse::<u32>().ok()) {
                        config.height = h;
                    }
                    i += 1;
                },
                "--resolution" | "-r" => {
                    // WxH, e.g. 1920x1080
                    if let Some((w, h)) = args.get(i + 1).and_then(|v| parse_resolution(v)) {
                        config.width = w;
                        config.height = h;
                    }
                    i += 1;
                },
                "--title" | "-t" => {
                    if let Some(title) = args.get(i + 1) {
                        config.title = title.clone();
                    }
                    i += 1;
                },
                _ => {},
            }
            i += 1;
        }

        config.validate()?;
        Ok(Invocation::Run(config))
    }

    /// A zero-sized window has no framebuffer to render into
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

fn parse_resolution(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once('x')?;
    Some((w.parse().ok()?, h.parse().ok()?))
}

pub fn print_usage() {
    println!("Usage: mandelview [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config PATH, -c PATH    Load settings from a JSON file");
    println!(
        "  --width W, -w W           Set window width (default: {})",
        DEFAULT_WIDTH
    );
    println!(
        "  --height H, -h H          Set window height (default: {})",
        DEFAULT_HEIGHT
    );
    println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
    println!("  --title T, -t T           Set window title");
    println!("  --no-vsync                Disable VSync for uncapped framerate");
    println!("  --fps                     Show FPS in the window title");
    println!("  --help                    Show this help message");
    println!();
    println!("Keys: F toggles FPS display, Escape quits.");
    println!("Log level is read from RUST_LOG (default: mandelview=info).");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn run(args: &[&str]) -> Config {
        match Config::from_args(args.iter().copied()) {
            Ok(Invocation::Run(config)) => config,
            other => panic!("unexpected parse result: {:?}", other),
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mandelview-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = run(&[]);
        assert_eq!(config, Config::default());
        assert_eq!((config.width, config.height), (800, 600));
        assert!(config.vsync);
        assert_eq!(config.title, "Mandelbrot");
    }

    #[test]
    fn test_width_height_flags() {
        let config = run(&["--width", "1024", "-h", "768", "--no-vsync"]);
        assert_eq!((config.width, config.height), (1024, 768));
        assert!(!config.vsync);
    }

    #[test]
    fn test_resolution_flag() {
        let config = run(&["-r", "1920x1080", "--fps"]);
        assert_eq!((config.width, config.height), (1920, 1080));
        assert!(config.show_fps);
    }

    #[test]
    fn test_unparseable_values_are_ignored() {
        let config = run(&["--width", "wide", "--resolution", "big"]);
        assert_eq!((config.width, config.height), (800, 600));
    }

    #[test]
    fn test_help() {
        let result = Config::from_args(["--width", "10", "--help"]);
        assert!(matches!(result, Ok(Invocation::Help)));
    }

    #[test]
    fn test_help_wins_over_unreadable_config() {
        let missing = temp_path("help-missing");
        let missing = missing.to_string_lossy().to_string();
        let result = Config::from_args(["--config", missing.as_str(), "--help"]);
        assert!(matches!(result, Ok(Invocation::Help)));
    }

    #[test]
    fn test_config_without_path_is_error() {
        let result = Config::from_args(["--width", "640", "--config"]);
        assert!(matches!(result, Err(Error::MissingValue("--config"))));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let result = Config::from_args(["--width", "0"]);
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions {
                width: 0,
                height: 600
            })
        ));
    }

    #[test]
    fn test_save_load_and_flag_override() {
        let path = temp_path("override");
        let saved = Config {
            width: 320,
            height: 240,
            vsync: false,
            title: "Kursach".to_string(),
            show_fps: true,
        };
        saved.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), saved);

        let path_str = path.to_string_lossy().to_string();
        let config = run(&["--width", "640", "--config", path_str.as_str()]);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 240);
        assert_eq!(config.title, "Kursach");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "width": 400 }"#).unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(config.vsync);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = Config::load(temp_path("does-not-exist"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::ConfigFormat(_))));
        let _ = fs::remove_file(&path);
    }
}
