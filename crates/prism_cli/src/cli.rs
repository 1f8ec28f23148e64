use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use prism_renderer::RenderConfig;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "prism")]
#[command(about = "A recursive Whitted-style ray tracer")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output image path; the format follows the extension
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Maximum reflection bounces (0 disables reflection)
    #[arg(short, long, default_value_t = 2)]
    pub bounces: u32,

    /// Render buckets in parallel across all cores
    #[arg(short, long)]
    pub parallel: bool,

    /// Bucket edge length in pixels for parallel rendering
    #[arg(long, default_value_t = prism_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Logging level (RUST_LOG overrides per module)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Renderer settings taken from the arguments.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            bounces: self.bounces,
            bucket_size: self.bucket_size,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["prism", "scene.json"]);
        assert_eq!(args.scene, PathBuf::from("scene.json"));
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert!(!args.parallel);

        let config = args.render_config();
        assert_eq!((config.width, config.height, config.bounces), (800, 600, 2));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "prism",
            "scene.json",
            "-o",
            "out.png",
            "--width",
            "320",
            "--height",
            "240",
            "-b",
            "0",
            "--parallel",
            "--log-level",
            "debug",
        ]);

        let config = args.render_config();
        assert_eq!((config.width, config.height, config.bounces), (320, 240, 0));
        assert!(args.parallel);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
