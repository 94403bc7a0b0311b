use clap::{Args, Parser, Subcommand};
use std::io::BufRead;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use autocolor::models::{AppConfig, OpacitySetting, RulesetName};
use autocolor::output::{self, OutputFormat};
use distinct_palette::{AutoColor, HtmlOverlay, BASE_COLORS};

#[derive(Parser)]
#[command(name = "autocolor")]
#[command(about = "Assign stable, visually distinct colors to values")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a color for every input (arguments, or stdin lines)
    Assign {
        /// Values to color; read from stdin when empty
        inputs: Vec<String>,

        #[command(flatten)]
        engine: EngineArgs,

        /// Picking method: static, dynamic, dynamic-random or random
        #[arg(short, long)]
        method: Option<String>,

        /// Output type: hex, rgb or rgba
        #[arg(short = 't', long)]
        color_type: Option<String>,

        /// Opacity for rgba output (passed through verbatim)
        #[arg(long)]
        opacity: Option<String>,

        /// Seed for the random picking methods
        #[arg(long)]
        seed: Option<u64>,

        /// Render recorded errors once
        #[arg(long)]
        debug: bool,

        /// Render errors as an HTML overlay on stderr instead of log events
        #[arg(long)]
        overlay: bool,

        /// Parse each input as JSON
        #[arg(long)]
        json_input: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the working palette: index, hex and perceived lightness
    Palette {
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Validate a settings file and report every error it produces
    Check {
        /// YAML settings file
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Settings shared by commands that build a palette
#[derive(Args)]
struct EngineArgs {
    /// YAML settings file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lowest perceived lightness (0..1)
    #[arg(long)]
    min_lightness: Option<f64>,

    /// Highest perceived lightness (0..1)
    #[arg(long)]
    max_lightness: Option<f64>,

    /// Use at most this many palette colors
    #[arg(long)]
    max_colors: Option<i64>,

    /// Use the legacy validation ranges
    #[arg(long)]
    legacy: bool,
}

impl EngineArgs {
    fn load(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load_or_default(self.config.as_deref())?;
        if self.min_lightness.is_some() {
            config.lightness.min = self.min_lightness;
        }
        if self.max_lightness.is_some() {
            config.lightness.max = self.max_lightness;
        }
        if self.max_colors.is_some() {
            config.maximum_colors = self.max_colors;
        }
        if self.legacy {
            config.ruleset = RulesetName::Legacy;
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autocolor=warn,distinct_palette=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Assign {
            inputs,
            engine,
            method,
            color_type,
            opacity,
            seed,
            debug,
            overlay,
            json_input,
            format,
        } => {
            let mut config = engine.load()?;
            if method.is_some() {
                config.picking_method = method;
            }
            if color_type.is_some() {
                config.color_type = color_type;
            }
            if let Some(opacity) = opacity {
                config.opacity = Some(OpacitySetting::Text(opacity));
            }
            if seed.is_some() {
                config.seed = seed;
            }
            config.debugging |= debug;
            run_assign(&config, inputs, overlay, json_input, format)
        }
        Commands::Palette { engine } => run_palette_command(&engine.load()?),
        Commands::Check { config } => run_check_command(&AppConfig::load(&config)?),
    }
}

/// Color every input; non-zero exit when the engine ends up poisoned
fn run_assign(
    config: &AppConfig,
    inputs: Vec<String>,
    overlay: bool,
    json_input: bool,
    format: OutputFormat,
) -> anyhow::Result<ExitCode> {
    let (mut engine, _) = config.build_engine();
    if overlay {
        engine.set_diagnostic_sink(HtmlOverlay::new(std::io::stderr()));
    }
    let opacity = config.default_opacity();

    let inputs = if inputs.is_empty() {
        std::io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        inputs
    };

    for raw in &inputs {
        let input = output::parse_input(raw, json_input)?;
        let color = engine.color_with_opacity(input, opacity.clone());
        println!("{}", output::render_assignment(format, raw, json_input, &color));
    }

    if engine.is_poisoned() {
        report_errors(&engine);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_palette_command(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let (mut engine, _) = config.build_engine();
    let palette = engine.initialize().clone();

    if engine.is_poisoned() {
        report_errors(&engine);
        return Ok(ExitCode::FAILURE);
    }

    print!("{}", output::render_palette(&palette));
    tracing::debug!(
        colors = palette.len(),
        base = BASE_COLORS.len(),
        "Printed working palette"
    );
    Ok(ExitCode::SUCCESS)
}

fn run_check_command(config: &AppConfig) -> anyhow::Result<ExitCode> {
    let (mut engine, _) = config.build_engine();
    let palette_size = engine.initialize().len();

    let mut failed = false;
    for entry in engine.errors() {
        println!("{entry}");
        failed = true;
    }
    if let Err(e) = config.default_opacity().validate() {
        println!("opacity: {e}");
        failed = true;
    }

    if failed {
        return Ok(ExitCode::FAILURE);
    }
    println!("OK: {palette_size} colors available");
    Ok(ExitCode::SUCCESS)
}

fn report_errors(engine: &AutoColor) {
    if engine.errors().is_empty() {
        eprintln!("autocolor: errors were recorded and already rendered");
    }
    for entry in engine.errors() {
        eprintln!("{entry}");
    }
}
