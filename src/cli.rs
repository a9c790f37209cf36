use crate::config::{Config, load_config};
use crate::engine::TimelineChart;
use crate::render::{render_svg, write_output_svg};
use crate::scene_dump::write_scene_dump;
use crate::surface::{MemoryHost, MemorySurface};
use crate::task::parse_tasks;
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

const CHART_SELECTOR: &str = "#timeline";

#[derive(Parser, Debug)]
#[command(name = "gntt", version, about = "Year-timeline Gantt renderer in Rust")]
pub struct Args {
    /// Task list (JSON or JSON5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, timeline, render sections)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Year to chart. Defaults to the current year.
    #[arg(short = 'y', long = "year")]
    pub year: Option<i32>,

    /// Day cell width in pixels
    #[arg(short = 'w', long = "dayWidth")]
    pub day_width: Option<f32>,

    /// Viewport width used when centering on today
    #[arg(long = "viewportWidth", default_value_t = 1200.0)]
    pub viewport_width: f32,

    /// Write the computed scene as JSON to this path
    #[arg(long = "dumpScene")]
    pub dump_scene: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "logLevel", default_value = "warn")]
    pub log_level: String,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let _logger = flexi_logger::Logger::try_with_str(&args.log_level)?
        .log_to_stderr()
        .start()?;

    let mut config = load_config(args.config.as_deref())?;
    if let Some(day_width) = args.day_width {
        config.timeline.initial_day_width = day_width;
    }

    let input = read_input(args.input.as_deref())?;
    let tasks = parse_tasks(&input)?;

    let today = config
        .timeline
        .today
        .unwrap_or_else(|| Local::now().date_naive());
    let year = args.year.unwrap_or_else(|| today.year());

    let mut host = MemoryHost::new();
    host.insert(CHART_SELECTOR, MemorySurface::new(args.viewport_width));
    let chart = TimelineChart::mount(
        &mut host,
        CHART_SELECTOR,
        year,
        tasks,
        config.timeline.clone(),
    )?;

    if let Some(dump_path) = args.dump_scene.as_deref() {
        write_scene_dump(dump_path, chart.scene())?;
    }

    let svg = render_svg(chart.scene(), &config.theme, &config.timeline);
    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_png(&svg, &output, &config)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!(
        "Output path required for {} output",
        ext
    ))
}


#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    crate::render::write_output_png(svg, output, &config.render, &config.theme)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output is not available in this build; enable the png feature"
    ))
}
