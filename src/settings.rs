use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use nalgebra::Point2;
use serde::Deserialize;
use std::env;
use std::fmt;

/// Slider range for both refractive indices.
pub const MIN_REFR_INDEX: f32 = 1.0;
pub const MAX_REFR_INDEX: f32 = 3.0;
/// Minimum vector length (in pixels) to be considered non-degenerate.
pub const VEC_LENGTH_THRESHOLD: f32 = 0.01;

/// Runtime configuration for the demonstration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub n1: f32,
    pub n2: f32,
    pub width: f32,
    pub height: f32,
    pub ray_length: f32,
    /// Fixed cursor position for a single headless frame. When set, the
    /// readout is printed to stdout instead of opening a window.
    #[serde(default)]
    pub cursor: Option<(f32, f32)>,
}

impl Settings {
    /// The ray origin, at the centre of the window on the boundary.
    pub fn origin(&self) -> Point2<f32> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Top of the boundary line between the two media.
    pub fn boundary_start(&self) -> Point2<f32> {
        Point2::new(self.width / 2.0, 0.0)
    }

    /// Bottom of the boundary line between the two media.
    pub fn boundary_end(&self) -> Point2<f32> {
        Point2::new(self.width / 2.0, self.height)
    }
}

pub fn load_default_config() -> Result<Settings> {
    let root_dir = retrieve_project_root();
    let default_config_file = root_dir.join("config/default.toml");

    let settings: Config = Config::builder()
        .add_source(File::from(default_config_file).required(true))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    validate_config(&config);

    Ok(config)
}

pub fn load_config() -> Result<Settings> {
    let root_dir = retrieve_project_root();

    let default_config_file = root_dir.join("config/default.toml");
    let local_config = root_dir.join("config/local.toml");

    // Check if local config exists, if not use default
    let config_file = if local_config.exists() {
        println!("Using local configuration: {:?}", local_config);
        local_config
    } else {
        println!("Using default configuration: {:?}", default_config_file);
        default_config_file
    };

    let settings: Config = Config::builder()
        .add_source(File::from(config_file).required(true))
        .add_source(Environment::with_prefix("refract2d"))
        .build()
        .unwrap_or_else(|err| {
            eprintln!("Error loading configuration: {}", err);
            std::process::exit(1);
        });

    let mut config: Settings = settings.try_deserialize().unwrap_or_else(|err| {
        eprintln!("Error deserializing configuration: {}", err);
        std::process::exit(1);
    });

    // Parse command-line arguments and override values
    let args = CliArgs::parse();

    if let Some(n1) = args.n1 {
        config.n1 = n1;
    }
    if let Some(n2) = args.n2 {
        config.n2 = n2;
    }
    if let Some(length) = args.ray_length {
        config.ray_length = length;
    }
    if let Some(cursor) = &args.cursor {
        if cursor.len() == 2 {
            config.cursor = Some((cursor[0], cursor[1]));
        } else {
            eprintln!("Warning: --cursor requires exactly two values. Ignoring.");
        }
    }

    validate_config(&config);

    println!("{}", config);

    Ok(config)
}

/// Retrieve the project root directory.
/// This function tries to find the project root directory in different ways:
/// 1. If the CARGO_MANIFEST_DIR environment variable is set, use it.
/// 2. If the REFRACT2D_ROOT_DIR environment variable is set, use it.
/// 3. If the "config" subdirectory is found in the executable directory or any of its parents, use it.
/// If none of these methods work, the function will panic.
fn retrieve_project_root() -> std::path::PathBuf {
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        // When running through cargo (e.g. cargo run, cargo test)
        std::path::PathBuf::from(manifest_dir)
    } else if let Ok(path) = env::var("REFRACT2D_ROOT_DIR") {
        // Allow explicit configuration via environment variable
        std::path::PathBuf::from(path)
    } else {
        // Fallback: walk upward from the executable directory until a
        // "config" subdirectory is found
        let exe_path = env::current_exe().expect("Failed to get current executable path");
        let mut current_dir = exe_path
            .parent()
            .expect("Failed to get executable directory")
            .to_path_buf();

        loop {
            if current_dir.join("config").is_dir() {
                return current_dir;
            }
            match current_dir.parent() {
                Some(parent) => current_dir = parent.to_path_buf(),
                None => panic!("Could not find project root directory"),
            }
        }
    }
}

fn validate_config(config: &Settings) {
    assert!(
        (MIN_REFR_INDEX..=MAX_REFR_INDEX).contains(&config.n1),
        "n1 must lie within [{}, {}]",
        MIN_REFR_INDEX,
        MAX_REFR_INDEX
    );
    assert!(
        (MIN_REFR_INDEX..=MAX_REFR_INDEX).contains(&config.n2),
        "n2 must lie within [{}, {}]",
        MIN_REFR_INDEX,
        MAX_REFR_INDEX
    );
    assert!(
        config.width > 0.0 && config.height > 0.0,
        "Window dimensions must be positive"
    );
    assert!(config.ray_length > 0.0, "Ray length must be positive");
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "refract2d - reflection and refraction at a planar boundary"
)]
pub struct CliArgs {
    /// Refractive index of the first medium, left of the boundary.
    #[arg(long)]
    n1: Option<f32>,

    /// Refractive index of the second medium, right of the boundary.
    #[arg(long)]
    n2: Option<f32>,

    /// Length at which the reflected and refracted rays are drawn, in pixels.
    #[arg(long)]
    ray_length: Option<f32>,

    /// Compute a single frame at this cursor position (X Y, in pixels) and
    /// print the readout instead of opening a window.
    #[arg(long, num_args = 2, value_delimiter = ' ')]
    cursor: Option<Vec<f32>>,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings:
  - N1: {:.2}
  - N2: {:.2}
  - Window: {:.0} x {:.0}
  - Ray Length: {:.0}
  ",
            self.n1, self.n2, self.width, self.height, self.ray_length,
        )
    }
}
