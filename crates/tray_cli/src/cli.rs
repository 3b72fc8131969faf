use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use tray_renderer::{TraceFlags, DEFAULT_TRACE_LEVEL};

/// Log levels selectable on the command line
#[derive(Debug, Clone, ValueEnum)]
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

/// Shading features that can be switched on with `--trace`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceFeature {
    Ambient,
    /// Diffuse and specular lighting
    Diffuse,
    Shadow,
    Reflection,
    Refraction,
}

impl From<TraceFeature> for TraceFlags {
    fn from(feature: TraceFeature) -> Self {
        match feature {
            TraceFeature::Ambient => TraceFlags::AMBIENT,
            TraceFeature::Diffuse => TraceFlags::DIFFUSE_AND_SPECULAR,
            TraceFeature::Shadow => TraceFlags::SHADOW,
            TraceFeature::Reflection => TraceFlags::REFLECTION,
            TraceFeature::Refraction => TraceFlags::REFRACTION,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tray")]
#[command(about = "Render a scene with the Tray recursive ray tracer")]
pub struct Args {
    /// JSON scene file; the built-in demo scene is used when omitted
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(
        long,
        default_value_t = 800,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Image height in pixels
    #[arg(
        long,
        default_value_t = 600,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub height: u32,

    /// Maximum recursion depth for reflected and refracted rays
    #[arg(long, short = 'd', default_value_t = DEFAULT_TRACE_LEVEL)]
    pub depth: i32,

    /// Comma-separated shading features (default: ambient only)
    #[arg(long, value_enum, value_delimiter = ',', conflicts_with = "all")]
    pub trace: Vec<TraceFeature>,

    /// Enable every shading feature
    #[arg(long)]
    pub all: bool,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Trace flags selected by `--trace` / `--all`.
    pub fn trace_flags(&self) -> TraceFlags {
        if self.all {
            return TraceFlags::ALL;
        }
        if self.trace.is_empty() {
            return TraceFlags::default();
        }

        let mut flags = TraceFlags::empty();
        for feature in &self.trace {
            flags |= TraceFlags::from(*feature);
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tray").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.scene.is_none());
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.depth, DEFAULT_TRACE_LEVEL);
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert_eq!(args.trace_flags(), TraceFlags::AMBIENT);
    }

    #[test]
    fn test_trace_list() {
        let args = parse(&["scene.json", "--trace", "diffuse,shadow", "--depth", "3"]);
        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!(args.depth, 3);
        assert_eq!(
            args.trace_flags(),
            TraceFlags::DIFFUSE_AND_SPECULAR | TraceFlags::SHADOW
        );
    }

    #[test]
    fn test_all_flag() {
        assert_eq!(parse(&["--all"]).trace_flags(), TraceFlags::ALL);
    }

    #[test]
    fn test_all_conflicts_with_trace() {
        let result = Args::try_parse_from(["tray", "--all", "--trace", "shadow"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(Args::try_parse_from(["tray", "--width", "0"]).is_err());
    }

    #[test]
    fn test_log_level_maps_to_filter() {
        let args = parse(&["--log-level", "debug"]);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }
}
