//! Command line shell for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use torus_life::{
    config::{CliOverrides, SaveFormat, Settings},
    game_of_life::{
        io::create_sample_patterns, load_saved_board_from_file, save_board, save_board_to_file, Board,
    },
    open_board,
    simulation::{Command, Outcome, PatternAnalysis, Session, Viewport},
    utils::{BoardFormatter, ColorOutput},
};

#[derive(Parser)]
#[command(name = "gameoflife")]
#[command(about = "Conway's Game of Life on a wrap-around board")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty board and save it
    New {
        #[arg(short, long)]
        rows: Option<usize>,

        #[arg(short = 'C', long)]
        columns: Option<usize>,

        /// Save file layout (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<SaveFormat>,

        /// Directory for the save file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the simulation without a window
    Run {
        /// Saved board to start from
        #[arg(short, long)]
        load: Option<PathBuf>,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 100)]
        generations: u64,

        /// Hold to the configured generations per second
        #[arg(long)]
        paced: bool,

        /// Generations per second when paced (overrides config)
        #[arg(long)]
        rate: Option<f64>,

        /// Print the visible window after every generation
        #[arg(long)]
        show: bool,

        /// Save the final generation
        #[arg(short, long)]
        save: bool,
    },

    /// Toggle and shift cells of a saved board
    Edit {
        /// Saved board to edit
        #[arg(short, long)]
        load: PathBuf,

        /// Cell to flip, as x,y (repeatable)
        #[arg(short, long, value_parser = parse_pair, allow_hyphen_values = true)]
        toggle: Vec<(i64, i64)>,

        /// Pan the board by dx,dy (repeatable, applied after toggles)
        #[arg(short, long, value_parser = parse_pair, allow_hyphen_values = true)]
        shift: Vec<(i64, i64)>,

        /// Overwrite the loaded file instead of writing a new timestamped save
        #[arg(long)]
        in_place: bool,
    },

    /// Print the part of a board a window would show
    Show {
        #[arg(short, long)]
        load: Option<PathBuf>,

        /// Pixel offset of cell (0, 0)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset_x: i32,

        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset_y: i32,

        /// Cell size in pixels (overrides config)
        #[arg(long)]
        cell_size: Option<i32>,

        /// Print the whole board with coordinates instead
        #[arg(long)]
        full: bool,
    },

    /// Classify a board as still life, oscillator, extinct, or unsettled
    Analyze {
        #[arg(short, long)]
        load: PathBuf,

        #[arg(short, long, default_value_t = 1000)]
        max_generations: usize,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a default configuration and sample patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    match cli.command {
        Commands::New { rows, columns, format, output } => {
            let settings = load_settings(&cli.config, CliOverrides {
                rows,
                columns,
                format,
                save_dir: output,
                ..Default::default()
            })?;
            new_command(&settings)
        }
        Commands::Run { load, generations, paced, rate, show, save } => {
            let settings = load_settings(&cli.config, CliOverrides {
                generations_per_second: rate,
                ..Default::default()
            })?;
            run_command(&settings, load.as_deref(), generations, paced, show, save)
        }
        Commands::Edit { load, toggle, shift, in_place } => {
            let settings = load_settings(&cli.config, CliOverrides::default())?;
            edit_command(&settings, &load, &toggle, &shift, in_place)
        }
        Commands::Show { load, offset_x, offset_y, cell_size, full } => {
            let mut settings = load_settings(&cli.config, CliOverrides::default())?;
            if let Some(cell_size) = cell_size {
                settings.view.cell_size = cell_size;
                settings.validate().context("Invalid cell size")?;
            }
            show_command(&settings, load.as_deref(), (offset_x, offset_y), full)
        }
        Commands::Analyze { load, max_generations, json } => {
            let settings = load_settings(&cli.config, CliOverrides::default())?;
            analyze_command(&settings, &load, max_generations, json)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn parse_pair(value: &str) -> Result<(i64, i64), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got {:?}", value))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in {:?}: {}", value, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y in {:?}: {}", value, e))?;
    Ok((x, y))
}

fn load_settings(config_path: &Path, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path.to_path_buf())
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        log::info!("config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn new_command(settings: &Settings) -> Result<()> {
    let board = Board::new(settings.board.default_rows, settings.board.default_columns)
        .context("Failed to create board")?;
    let path = save_board(&board, &settings.persistence)
        .context("Failed to save new board")?;

    println!("{}", ColorOutput::success(&format!(
        "Created empty {}x{} board: {}",
        board.columns(),
        board.rows(),
        path.display()
    )));
    Ok(())
}

fn run_command(
    settings: &Settings,
    load: Option<&Path>,
    generations: u64,
    paced: bool,
    show: bool,
    save: bool,
) -> Result<()> {
    let board = open_board(load, settings)?;
    let mut session = Session::new(board, settings);
    if !paced {
        session.pacer_mut().set_rate(0.0);
    }

    println!("{}", ColorOutput::info(&format!("▶ Running {} generations", generations)));
    let start_time = Instant::now();
    let initial_population = session.board().living_count();

    session.set_running(true);
    while session.generation() < generations {
        session.tick_blocking();
        if show {
            println!("{}", BoardFormatter::format_status(session.board(), session.generation(), true));
            println!("{}", BoardFormatter::render_viewport(session.board(), session.viewport()));
        }
    }
    session.set_running(false);

    let elapsed = start_time.elapsed();
    println!("{}", BoardFormatter::format_status(session.board(), session.generation(), false));
    println!(
        "Population: {} → {} in {:.3}s",
        initial_population,
        session.board().living_count(),
        elapsed.as_secs_f64()
    );

    if save {
        if let Outcome::Saved(path) = session.apply(Command::Save)? {
            println!("{}", ColorOutput::success(&format!("Saved to {}", path.display())));
        }
    }

    Ok(())
}

fn edit_command(
    settings: &Settings,
    load: &Path,
    toggles: &[(i64, i64)],
    shifts: &[(i64, i64)],
    in_place: bool,
) -> Result<()> {
    let saved = load_saved_board_from_file(load, &settings.board)?;
    let mut session = Session::new(saved.board, settings);
    session.set_running(false);

    let commands = toggles
        .iter()
        .map(|&(x, y)| Command::ToggleCell { x, y })
        .chain(shifts.iter().map(|&(dx, dy)| Command::Shift { dx, dy }));
    for command in commands {
        session.apply(command)?;
    }

    let path = if in_place {
        // Keep the layout the file was written in; headerless files take the configured one
        let format = saved.format.unwrap_or(settings.persistence.format);
        save_board_to_file(session.board(), load, format)?;
        load.to_path_buf()
    } else {
        match session.apply(Command::Save)? {
            Outcome::Saved(path) => path,
            other => anyhow::bail!("Board was not saved: {:?}", other),
        }
    };

    println!("{}", ColorOutput::success(&format!(
        "Applied {} toggle(s) and {} shift(s), {} living cells saved to {}",
        toggles.len(),
        shifts.len(),
        session.board().living_count(),
        path.display()
    )));
    Ok(())
}

fn show_command(settings: &Settings, load: Option<&Path>, offset: (i32, i32), full: bool) -> Result<()> {
    let board = open_board(load, settings)?;

    if full {
        println!("{}", BoardFormatter::format_with_coords(&board));
    } else {
        let mut viewport = Viewport::new(&settings.view);
        viewport.set_offset(offset.0, offset.1);
        println!("{}", BoardFormatter::render_viewport(&board, &viewport));
    }
    println!("{}", BoardFormatter::format_status(&board, 0, false));
    Ok(())
}

fn analyze_command(settings: &Settings, load: &Path, max_generations: usize, json: bool) -> Result<()> {
    let board = open_board(Some(load), settings)?;
    let analysis = PatternAnalysis::analyze(&board, max_generations);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
        if !analysis.is_stable() {
            println!("{}", ColorOutput::warning(&format!(
                "No repeat within {} generations",
                max_generations
            )));
        }
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");
    let saves_dir = directory.join("saves");

    for dir in [&config_dir, &patterns_dir, &saves_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let mut settings = Settings::default();
    settings.persistence.save_directory = PathBuf::from("saves");

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        settings.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let mut verbose_settings = settings.clone();
    verbose_settings.persistence.format = SaveFormat::Verbose;
    let verbose_path = config_dir.join("examples").join("verbose.yaml");
    if !verbose_path.exists() || force {
        verbose_settings.to_file(&verbose_path)
            .context("Failed to create verbose example configuration")?;
        println!("Created: {}", verbose_path.display());
    } else {
        println!("Skipped: {} (already exists)", verbose_path.display());
    }

    let mut sample_settings = settings.clone();
    sample_settings.board.default_rows = 32;
    sample_settings.board.default_columns = 32;
    let written = create_sample_patterns(&patterns_dir, &sample_settings.board, &sample_settings.persistence)
        .context("Failed to create sample patterns")?;
    println!("Created {} sample patterns in: {}", written.len(), patterns_dir.display());

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: gameoflife run --load patterns/glider.cgol --generations 32 --show");

    Ok(())
}
