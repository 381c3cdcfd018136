use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "glint")]
#[command(about = "A Whitted-style sphere ray tracer in Rust")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "1024", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "768", help = "Image height in pixels")]
    pub height: u32,

    /// Maximum number of reflection bounces per primary ray
    #[arg(long, short = 'd', default_value = "3", help = "Maximum number of reflection bounces per primary ray")]
    pub depth: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value = "90.0", help = "Vertical field of view in degrees")]
    pub fov: f32,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Output file path (.png for 8-bit PNG, .ppm for a binary P6 pixel dump)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png for 8-bit PNG, .ppm for a binary P6 pixel dump)")]
    pub output: String,
}
