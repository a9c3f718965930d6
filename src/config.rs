//! Configuration management for the playground.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML settings (runtime URL, preview file, isolation)

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::compose::DEFAULT_RUNTIME_URL;
use crate::core::BufferId;
use crate::error::PlaygroundError;

/// Name of the per-project settings file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "twp.toml";

/// Command-line arguments for the playground
#[derive(Debug, Parser)]
#[command(name = "twp")]
#[command(about = "Live-preview playground for HTML, CSS and Tailwind configuration")]
#[command(version)]
pub struct Args {
    /// Settings file to use instead of the default lookup
    #[arg(long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    /// Log level for the playground
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a workspace with the starter markup, stylesheet and config
    Init { dir: PathBuf },

    /// Compose a workspace or project file once and render the preview
    Render {
        /// Workspace directory or project .json file
        source: PathBuf,
        /// Preview file to write (defaults to the configured preview file)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the bare document instead of a sandboxed host page
        #[arg(long)]
        raw: bool,
        /// Print the composed document instead of writing a file
        #[arg(long, conflicts_with_all = ["output", "raw"])]
        stdout: bool,
    },

    /// Save a workspace as a project file
    Save {
        dir: PathBuf,
        /// Destination file; prompts when omitted
        #[arg(long)]
        to: Option<PathBuf>,
    },

    /// Load a project file into a workspace
    Load {
        dir: PathBuf,
        /// Project file to read; prompts when omitted
        #[arg(long)]
        from: Option<PathBuf>,
    },

    /// Print one buffer of a workspace or project file
    Show {
        source: PathBuf,
        #[arg(long, default_value = "html", help = "Buffer to show (html, css, config)")]
        tab: BufferId,
    },

    /// Re-render the preview whenever a workspace file changes
    Watch {
        dir: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        raw: bool,
    },
}

/// Settings as written in a TOML file; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub runtime_url: Option<String>,
    pub preview_file: Option<PathBuf>,
    pub isolate: Option<bool>,
}

impl FileConfig {
    /// Parse a settings file. A missing file yields the defaults.
    pub fn load(path: &Path) -> std::result::Result<Self, PlaygroundError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(PlaygroundError::Config {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        toml::from_str(&content).map_err(|e| PlaygroundError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    /// Framework runtime script referenced by composed documents
    pub runtime_url: String,
    /// Default preview output file
    pub preview_file: PathBuf,
    /// Wrap previews in a sandboxed host page
    pub isolate: bool,
    /// Settings file that was applied, if any
    pub config_path: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = match args.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Settings file not found: {}", path.display());
                }
                Some(path)
            }
            None => Self::default_config_paths()
                .into_iter()
                .find(|path| path.exists()),
        };

        let file = match &config_path {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(args.command, args.log_level, file, config_path))
    }

    fn merge(
        command: Command,
        log_level: String,
        file: FileConfig,
        config_path: Option<PathBuf>,
    ) -> Self {
        Config {
            command,
            runtime_url: file
                .runtime_url
                .unwrap_or_else(|| DEFAULT_RUNTIME_URL.to_string()),
            preview_file: file
                .preview_file
                .unwrap_or_else(|| PathBuf::from("preview.html")),
            isolate: file.isolate.unwrap_or(true),
            config_path,
            log_level,
        }
    }

    /// Settings lookup order: working directory, then the user config directory
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("twp").join("config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render_command() {
        let args = Args::parse_from(["twp", "render", "site", "-o", "out.html", "--raw"]);
        match args.command {
            Command::Render {
                source,
                output,
                raw,
                stdout,
            } => {
                assert_eq!(source, PathBuf::from("site"));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(raw);
                assert!(!stdout);
            }
            other => panic!("Expected render, got {:?}", other),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_parse_show_tab() {
        let args = Args::parse_from(["twp", "show", "p.json", "--tab", "config"]);
        match args.command {
            Command::Show { tab, .. } => assert_eq!(tab, BufferId::FrameworkConfig),
            other => panic!("Expected show, got {:?}", other),
        }
        assert!(Args::try_parse_from(["twp", "show", "p.json", "--tab", "js"]).is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let parsed = Args::try_parse_from(["twp", "render", "site", "--stdout", "-o", "x.html"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_file_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("twp.toml");
        std::fs::write(
            &path,
            "runtime_url = \"http://localhost/tw.js\"\nisolate = false\n",
        )
        .unwrap();

        let args = Args::parse_from([
            "twp",
            "--config",
            path.to_str().unwrap(),
            "init",
            "site",
        ]);
        let config = Config::from_args(args).unwrap();

        assert_eq!(config.config_path, Some(path.clone()));
        assert_eq!(config.runtime_url, "http://localhost/tw.js");
        assert!(!config.isolate);
        assert_eq!(config.preview_file, PathBuf::from("preview.html"));
    }

    #[test]
    fn test_log_level_carried_into_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let args = Args::parse_from([
            "twp",
            "--config",
            path.to_str().unwrap(),
            "--log-level",
            "debug",
            "show",
            "p.json",
        ]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.runtime_url, DEFAULT_RUNTIME_URL);
    }

    #[test]
    fn test_missing_explicit_settings_file_is_an_error() {
        let args = Args::parse_from(["twp", "--config", "/nonexistent/twp.toml", "init", "site"]);
        assert!(Config::from_args(args).is_err());
    }

    #[test]
    fn test_invalid_file_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "unknown_key = 1\n").unwrap();

        let err = FileConfig::load(&path).unwrap_err();
        assert!(matches!(err, PlaygroundError::Config { .. }));
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let args = Args::parse_from(["twp", "--config", "/nonexistent/twp.toml", "init", "x"]);
        assert!(Config::from_args(args).is_err());
    }

    #[test]
    fn test_missing_file_config_is_default() {
        let config = FileConfig::load(Path::new("/nonexistent/twp.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }
}
