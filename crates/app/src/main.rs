use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use hilo_core::{DealInterval, TrainerSettingsDraft};
use services::{TrainerService, resolve_settings};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSpeed { raw: String },
    InvalidSeed { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSpeed { raw } => write!(
                f,
                "invalid speed: {raw} (expected seconds between {} and {})",
                DealInterval::MIN_SECS,
                DealInterval::MAX_SECS
            ),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid seed: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    trainer: Arc<TrainerService>,
}

impl UiApp for DesktopApp {
    fn trainer(&self) -> Arc<TrainerService> {
        Arc::clone(&self.trainer)
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[derive(Debug, Default)]
struct Args {
    speed: Option<f64>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--speed <secs>] [--seed <u64>] [--config <path.json>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --speed   seconds per card in Timed Mode ({} to {}, default {})",
        DealInterval::MIN_SECS,
        DealInterval::MAX_SECS,
        DealInterval::DEFAULT_SECS
    );
    eprintln!("  --seed    shuffle seed for reproducible shoes");
    eprintln!("  --config  JSON settings file (deal_interval_secs, feedback_secs, seed)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  HILO_SPEED, HILO_SEED, HILO_CONFIG, RUST_LOG");
}

fn parse_speed(raw: String) -> Result<f64, ArgsError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite())
        .ok_or(ArgsError::InvalidSpeed { raw })
}

fn parse_seed(raw: String) -> Result<u64, ArgsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ArgsError::InvalidSeed { raw })
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--speed" => parsed.speed = Some(parse_speed(require_value(&mut args, "--speed")?)?),
                "--seed" => parsed.seed = Some(parse_seed(require_value(&mut args, "--seed")?)?),
                "--config" => {
                    parsed.config = Some(PathBuf::from(require_value(&mut args, "--config")?));
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Fill unset flags from `HILO_*` environment variables.
    fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self, ArgsError> {
        if self.speed.is_none() {
            self.speed = var("HILO_SPEED").map(parse_speed).transpose()?;
        }
        if self.seed.is_none() {
            self.seed = var("HILO_SEED").map(parse_seed).transpose()?;
        }
        if self.config.is_none() {
            self.config = var("HILO_CONFIG").map(PathBuf::from);
        }
        Ok(self)
    }

    fn overrides(&self) -> TrainerSettingsDraft {
        TrainerSettingsDraft {
            deal_interval_secs: self.speed,
            seed: self.seed,
            ..TrainerSettingsDraft::new()
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let report = |e: ArgsError| {
        eprintln!("{e}");
        print_usage();
        e
    };

    let parsed = Args::parse(std::env::args().skip(1)).map_err(report)?;
    if parsed.help {
        print_usage();
        return Ok(());
    }
    let parsed = parsed
        .with_env(|name| std::env::var(name).ok().filter(|value| !value.is_empty()))
        .map_err(report)?;

    env_logger::init();

    let settings = resolve_settings(parsed.overrides(), parsed.config.as_deref())?;
    log::info!(
        "starting trainer ({}s per card, seed {:?})",
        settings.deal_interval().secs(),
        settings.seed()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        trainer: Arc::new(TrainerService::new(settings)),
    });
    let context = build_app_context(&app);

    // Some desktop setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("BlackJack Card Counter")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
