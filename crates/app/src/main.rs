use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use muster_core::{PersonError, PersonRecord, Roster};
use services::DEFAULT_FEEDBACK_DELAY;
use ui::{App, UiApp, build_app_context};

// The cadet-staff roster the quiz drills. Configuration data, kept in the
// binary glue so core/services stay roster-agnostic.
const DEFAULT_ROSTER: &[(&str, &str)] = &[
    ("C/1Lt. Hailey Lee", "Operations Squadron Officer (OPSO)"),
    ("C/1Lt. Ivan Lee", "Drill and Ceremonies Officer (DCO)"),
    ("C/1Lt. Jacob Cho", "Deputy Commander (DPC)"),
    ("C/1Lt. Sally Kim", "Kitty Hawk President (KP)"),
    ("C/2Lt. AJ Ahn", "Logistics Officers (LOs)"),
    ("C/2Lt. Alexander Kalindjian", "Technology Officer (TO)"),
    ("C/2Lt. Brian Yoo", "Flight Commanders (FCs)"),
    ("C/2Lt. Cayden Kwon", "Flight Commanders (FCs)"),
    ("C/2Lt. Charlotte Hong", "Flight Commanders (FCs)"),
    ("C/2Lt. Erick Padua", "Color Guard Commander (CGC)"),
    ("C/2Lt. Hera Yoo", "Logistics Officers (LOs)"),
    ("C/2Lt. Isaiah An", "Physical Training Officer (PTO)"),
    ("C/2Lt. Joel Ju", "Services Officer (SO)"),
    ("C/2Lt. Joel Kim", "Flight Commanders (FCs)"),
    ("C/2Lt. Seraphina Ahn", "MWR/KHAS Vice Director (KVD)"),
    ("C/2Lt. Terron Brown", "Personnel Officer (PO)"),
    ("C/Capt David Lee", "Corps Commander (CC)"),
    ("C/MSgt Erin Oh", "StellarXplorers Captain (SXC)"),
    ("C/MSgt Hana Cho", "DC Secretary (DCS)"),
    ("C/MSgt Hudson Pluimer", "Raider Team Captains (RTCs)"),
    ("C/MSgt Jeongwoo Kye", "Recruitment Officer (RO)"),
    ("C/MSgt Mark Shin", "StellarXplorers Captain (SXC)"),
    ("C/MSgt Samantha Hendrix", "Raider Team Captains (RTCs)"),
    ("C/SrA Chloe Tan", "JLAB Captain (JC)"),
    ("C/TSgt Sarah Park", "JLAB Captain (JC)"),
    ("MSgt Maurice Mack", "Senior Aerospace Science Instructor (SASI)"),
    ("TSgt Mariano Morua", "Aerospace Science Instructor (ASI)"),
];

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
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

struct Args {
    feedback_delay: Duration,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--delay-ms <millis>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!(
        "  --delay-ms {}",
        DEFAULT_FEEDBACK_DELAY.as_millis()
    );
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MUSTER_DELAY_MS");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut feedback_delay = std::env::var("MUSTER_DELAY_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or(DEFAULT_FEEDBACK_DELAY, Duration::from_millis);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--delay-ms" => {
                    let value = require_value(args, "--delay-ms")?;
                    let millis: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    feedback_delay = Duration::from_millis(millis);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { feedback_delay })
    }
}

struct DesktopApp {
    roster: Arc<Roster>,
    feedback_delay: Duration,
}

impl UiApp for DesktopApp {
    fn roster(&self) -> Arc<Roster> {
        Arc::clone(&self.roster)
    }

    fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }
}

fn default_roster() -> Result<Roster, PersonError> {
    let entries = DEFAULT_ROSTER
        .iter()
        .map(|&(name, position)| PersonRecord::new(name, position))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Roster::new(entries))
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app = DesktopApp {
        roster: Arc::new(default_roster()?),
        feedback_delay: parsed.feedback_delay,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Keep the window a normal one; some dev setups default to always-on-top.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Muster")
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
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
