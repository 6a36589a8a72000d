//! Configuration management for the Game of Life engine

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, PersistenceConfig, SaveFormat, Settings, SimulationConfig,
    ViewConfig,
};
