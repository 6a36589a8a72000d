//! Configuration settings for the Game of Life engine and its session shell

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub persistence: PersistenceConfig,
    pub view: ViewConfig,
}

/// Size used for fresh boards and for save files without a usable header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub default_rows: usize,
    pub default_columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations_per_second: f64,
    pub start_running: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    pub format: SaveFormat,
    pub extension: String,
    pub save_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SaveFormat {
    /// `<columns>x<rows>` header, `x,y` cells
    #[default]
    Plain,
    /// `cgol-version`/`columns`/`rows` header, `(x, y)` cells
    Verbose,
}

/// Window geometry used to map screen pixels onto the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub min_cell_size: i32,
    pub max_cell_size: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_rows: 300,
            default_columns: 300,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations_per_second: 12.0,
            start_running: false,
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            format: SaveFormat::Plain,
            extension: "cgol".to_string(),
            save_directory: PathBuf::from("."),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 20,
            min_cell_size: 5,
            max_cell_size: 50,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.default_rows == 0 || self.board.default_columns == 0 {
            anyhow::bail!("Default board dimensions must be positive");
        }

        if !(self.simulation.generations_per_second.is_finite()
            && self.simulation.generations_per_second > 0.0)
        {
            anyhow::bail!(
                "Generations per second must be a positive number, got {}",
                self.simulation.generations_per_second
            );
        }

        let extension = &self.persistence.extension;
        if extension.is_empty() || extension.contains(['/', '\\', '.']) {
            anyhow::bail!("Save file extension {:?} is not a plain suffix", extension);
        }

        let view = &self.view;
        if view.width <= 0 || view.height <= 0 {
            anyhow::bail!("View size must be positive, got {}x{}", view.width, view.height);
        }
        if view.min_cell_size <= 0 || view.min_cell_size > view.max_cell_size {
            anyhow::bail!(
                "Cell size bounds [{}, {}] are invalid",
                view.min_cell_size,
                view.max_cell_size
            );
        }
        if !(view.min_cell_size..=view.max_cell_size).contains(&view.cell_size) {
            anyhow::bail!(
                "Cell size {} is outside [{}, {}]",
                view.cell_size,
                view.min_cell_size,
                view.max_cell_size
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.board.default_rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.board.default_columns = columns;
        }
        if let Some(rate) = cli_overrides.generations_per_second {
            self.simulation.generations_per_second = rate;
        }
        if let Some(format) = cli_overrides.format {
            self.persistence.format = format;
        }
        if let Some(ref save_dir) = cli_overrides.save_dir {
            self.persistence.save_directory = save_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub generations_per_second: Option<f64>,
    pub format: Option<SaveFormat>,
    pub save_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.board.default_rows, 300);
        assert_eq!(settings.board.default_columns, 300);
        assert_eq!(settings.persistence.format, SaveFormat::Plain);
        assert_eq!(settings.persistence.extension, "cgol");
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.persistence.format = SaveFormat::Verbose;
        settings.simulation.generations_per_second = 30.0;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("partial.yaml");
        std::fs::write(&path, "persistence:\n  format: verbose\n  extension: xg\n  save_directory: out\n").unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.persistence.format, SaveFormat::Verbose);
        assert_eq!(loaded.persistence.extension, "xg");
        assert_eq!(loaded.board, BoardConfig::default());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.board.default_rows = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.generations_per_second = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.persistence.extension = "tar.gz".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.view.cell_size = 80;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            rows: Some(40),
            columns: None,
            generations_per_second: Some(2.5),
            format: Some(SaveFormat::Verbose),
            save_dir: Some(PathBuf::from("saves")),
        });

        assert_eq!(settings.board.default_rows, 40);
        assert_eq!(settings.board.default_columns, 300);
        assert_eq!(settings.simulation.generations_per_second, 2.5);
        assert_eq!(settings.persistence.format, SaveFormat::Verbose);
        assert_eq!(settings.persistence.save_directory, PathBuf::from("saves"));
    }
}
