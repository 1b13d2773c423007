//! crochet-renderer CLI
//!
//! Commands: render, describe, palettes, schema
//! Logs go to stderr, controlled by RUST_LOG (default: warn)

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crochet_renderer::{
    BodyColor, Color, Configuration, EyeColor, ExportFormat, MouthStyle, RasterOptions, Result,
    compose, render_png,
};

#[derive(Parser)]
#[command(name = "crochet-renderer")]
#[command(about = "Render stacked-coil crochet figures as SVG or PNG")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a figure to a file or stdout
    Render {
        #[command(flatten)]
        figure: FigureArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Svg)]
        format: ExportFormat,

        /// Pixels per unit for PNG output
        #[arg(long, default_value_t = 2.0)]
        scale: f32,

        /// Opaque PNG background, e.g. "#ffffff"
        #[arg(long)]
        background: Option<String>,

        /// Output path, or "-" for stdout. Defaults to a descriptive file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the caption and file name of a figure
    Describe {
        #[command(flatten)]
        figure: FigureArgs,
    },

    /// List body palettes and eye colors
    Palettes,

    /// Print the JSON schema of the configuration file
    Schema,
}

/// Figure options. Flags override values from `--config`.
#[derive(Args)]
struct FigureArgs {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Body palette: chocolate, vanilla or blue
    #[arg(long)]
    body_color: Option<String>,

    /// Number of coil layers (2-5)
    #[arg(long, allow_negative_numbers = true)]
    layers: Option<i32>,

    /// Number of eyes (1-6)
    #[arg(long, allow_negative_numbers = true)]
    eyes: Option<i32>,

    /// Eye color name
    #[arg(long)]
    eye_color: Option<String>,

    /// Mouth style: smile, frown, tongue, shark or none
    #[arg(long)]
    mouth: Option<String>,

    /// Add arms
    #[arg(long)]
    arms: bool,

    /// Add legs
    #[arg(long)]
    legs: bool,
}

impl FigureArgs {
    fn configuration(&self) -> Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => Configuration::from_json(&fs::read_to_string(path)?)?,
            None => Configuration::default(),
        };

        if let Some(name) = &self.body_color {
            config.body_color = BodyColor::from_name(name);
        }
        if let Some(layers) = self.layers {
            config.num_layers = layers;
        }
        if let Some(eyes) = self.eyes {
            config.num_eyes = eyes;
        }
        if let Some(name) = &self.eye_color {
            config.eye_color = EyeColor::from_name(name);
        }
        if let Some(name) = &self.mouth {
            config.mouth_style = MouthStyle::from_name(name);
        }
        config.has_arms |= self.arms;
        config.has_legs |= self.legs;

        log::debug!("configuration: {:?}", config);
        Ok(config)
    }
}

fn render(
    figure: &FigureArgs,
    format: ExportFormat,
    scale: f32,
    background: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = figure.configuration()?;
    let document = compose(&config);

    let bytes = match format {
        ExportFormat::Svg => document.to_svg_file().into_bytes(),
        ExportFormat::Png => {
            let background = background.map(str::parse::<Color>).transpose()?;
            let options = RasterOptions::default()
                .with_scale(scale)
                .with_background(background);
            render_png(&document, &options)?
        }
    };

    let path = output.unwrap_or_else(|| PathBuf::from(config.file_name(format)));
    if path.as_os_str() == "-" {
        io::stdout().write_all(&bytes)?;
    } else {
        fs::write(&path, &bytes)?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn describe(figure: &FigureArgs) -> Result<()> {
    let config = figure.configuration()?;
    println!("{}", config.description());
    println!("{}", config.file_name(ExportFormat::Svg));
    Ok(())
}

fn palettes() {
    println!("body colors:");
    for color in BodyColor::ALL {
        let p = color.palette();
        println!(
            "  {:<10} main {} light {} dark {} highlight {} yarn {} shadow {}",
            color.name(),
            p.main,
            p.light,
            p.dark,
            p.highlight,
            p.yarn_base,
            p.shadow
        );
    }
    println!("eye colors:");
    for color in EyeColor::ALL {
        println!("  {:<10} {}", color.name(), color.color());
    }
}

#[cfg(feature = "jsonschema")]
fn schema() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Configuration::json_schema())?);
    Ok(())
}

#[cfg(not(feature = "jsonschema"))]
fn schema() -> Result<()> {
    Err(io::Error::new(io::ErrorKind::Unsupported, "built without the `jsonschema` feature").into())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match &cli.command {
        Commands::Render {
            figure,
            format,
            scale,
            background,
            output,
        } => render(figure, *format, *scale, background.as_deref(), output.clone()),
        Commands::Describe { figure } => describe(figure),
        Commands::Palettes => {
            palettes();
            Ok(())
        }
        Commands::Schema => schema(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
