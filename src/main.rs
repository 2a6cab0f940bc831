//! Territory War - Main Binary
//!
//! Text-menu territory conquest game for one player

use anyhow::Context;
use clap::{Parser, ValueEnum};
use territory_war::{
    core::Mission,
    game::{
        seed_from_clock, FixedScriptController, GameConfig, GameLoop, GameSession,
        InteractiveController, OutputFormat, PlayerController, RandomController, VerbosityLevel,
    },
};

/// Who makes the player's decisions
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerType {
    /// Text UI controller for human play via stdin
    Tui,
    /// Fixed script of inputs (requires --fixed-inputs)
    Fixed,
    /// Makes random choices
    Random,
}

/// Output format for game messages
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormatArg {
    Text,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "Territory War - conquer territories and complete your mission", long_about = None)]
struct Cli {
    /// Number of territories on the map (prompted for when omitted)
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u64).range(1..))]
    territories: Option<u64>,

    /// Set random seed for deterministic games (default: current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Play a specific mission from the catalog (1-5) instead of drawing one
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=5))]
    mission: Option<u64>,

    /// Who makes the decisions
    #[arg(long, value_enum, default_value = "tui")]
    controller: ControllerType,

    /// Inputs for the fixed controller (space or comma separated, e.g. "1 0 1 2 0")
    #[arg(long, value_name = "INPUTS", required_if_eq("controller", "fixed"))]
    fixed_inputs: Option<String>,

    /// Stop after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,

    /// Print messages as text or as JSON lines
    #[arg(long, value_enum, default_value = "text")]
    output_format: OutputFormatArg,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json_output = matches!(cli.output_format, OutputFormatArg::Json);

    let territories = match cli.territories {
        Some(count) => usize::try_from(count).context("number of territories is too large")?,
        None if json_output => InteractiveController::stdin_with_stderr_prompts()
            .prompt_territory_count()
            .context("failed to read the number of territories")?,
        None => InteractiveController::stdio()
            .prompt_territory_count()
            .context("failed to read the number of territories")?,
    };

    let seed = cli.seed.unwrap_or_else(seed_from_clock);
    let mission = cli
        .mission
        .map(|number| Mission::from_number(number as usize))
        .transpose()?;

    let config = GameConfig {
        territories,
        seed,
        mission,
        max_rounds: cli.max_rounds,
        verbosity: cli.verbosity.into(),
        output_format: cli.output_format.into(),
    };

    let mut session = GameSession::from_config(&config)?;

    let mut controller: Box<dyn PlayerController> = match cli.controller {
        // Prompts stay off stdout so every stdout line is JSON
        ControllerType::Tui if json_output => {
            Box::new(InteractiveController::stdin_with_stderr_prompts())
        }
        ControllerType::Tui => Box::new(InteractiveController::stdio()),
        ControllerType::Fixed => {
            let inputs = cli.fixed_inputs.as_deref().unwrap_or_default();
            Box::new(FixedScriptController::parse(inputs)?)
        }
        ControllerType::Random => Box::new(RandomController::with_seed(seed.wrapping_add(1))),
    };

    let mut game_loop = GameLoop::new(&mut session).with_max_rounds(config.max_rounds);
    game_loop.announce_mission();
    let result = game_loop.run(controller.as_mut())?;

    if json_output {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
