//! Configuration module for the diagram extraction system.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `UMLGRAPH_` and use double underscores
//! to separate nested levels:
//! - `UMLGRAPH_SEMANTIC=false` sets `semantic`
//! - `UMLGRAPH_OUTPUT__FORMAT=json` sets `output.format`
//! - `UMLGRAPH_ASSOCIATION__ATTRIBUTE=Uml` sets `association.attribute`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Resolve names against the declarations of all input files.
    /// When false every name is shaped from syntax alone.
    #[serde(default = "default_true")]
    pub semantic: bool,

    /// Number of files processed in parallel
    #[serde(default = "default_parallel_threads")]
    pub parallel_threads: usize,

    /// Accepted source file extensions
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Association override attributes
    #[serde(default)]
    pub association: AssociationConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssociationConfig {
    /// Attribute that overrides an inferred association
    #[serde(default = "default_association_attribute")]
    pub attribute: String,

    /// Attribute that suppresses an inferred association
    #[serde(default = "default_ignore_attribute")]
    pub ignore_attribute: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    /// "plantuml" or "json"
    #[serde(default = "default_output_format")]
    pub format: String,

    /// Emit type definition lines ahead of relationship lines
    #[serde(default = "default_true")]
    pub definitions: bool,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_parallel_threads() -> usize {
    num_cpus::get()
}
fn default_extensions() -> Vec<String> {
    vec!["cs".to_string()]
}
fn default_association_attribute() -> String {
    "PlantUmlAssociation".to_string()
}
fn default_ignore_attribute() -> String {
    "PlantUmlIgnoreAssociation".to_string()
}
fn default_output_format() -> String {
    "plantuml".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            debug: false,
            semantic: true,
            parallel_threads: default_parallel_threads(),
            extensions: default_extensions(),
            association: AssociationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for AssociationConfig {
    fn default() -> Self {
        Self {
            attribute: default_association_attribute(),
            ignore_attribute: default_ignore_attribute(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_output_format(),
            definitions: true,
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(".umlgraph/settings.toml"));

        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref().to_path_buf())
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: PathBuf) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("UMLGRAPH_").map(|key| {
                key.as_str()
                    .to_lowercase()
                    .replace("__", ".") // Double underscore separates nested levels
                    .into()
            }))
    }

    /// Find the workspace config by looking for a .umlgraph directory
    /// Searches from current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(".umlgraph");
            if config_dir.is_dir() {
                return Some(config_dir.join("settings.toml"));
            }
        }

        None
    }

    /// Whether a path carries one of the accepted extensions
    pub fn accepts(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Save current configuration to file
    pub fn save(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Create a default settings file with helpful comments
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(".umlgraph/settings.toml");

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = format!(
            r#"# umlgraph configuration

# Version of the configuration schema
version = 1

# Global debug mode
debug = false

# Resolve type names against every declaration in the input files.
# Set to false to shape names from syntax only.
semantic = true

# Number of files processed in parallel (defaults to CPU count)
# parallel_threads = {}

# Accepted source extensions
extensions = ["cs"]

[association]
# Attribute that overrides an inferred association
attribute = "PlantUmlAssociation"

# Attribute that suppresses an inferred association
ignore_attribute = "PlantUmlIgnoreAssociation"

[output]
# "plantuml" or "json"
format = "plantuml"

# Emit type definition lines ahead of relationships
definitions = true
"#,
            num_cpus::get()
        );

        std::fs::write(&config_path, template)?;
        Ok(config_path)
    }
}
