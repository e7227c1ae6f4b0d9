//! # Utilkit CLI Application
//!
//! Command-line front end for `utilkit_core`. Collects raw arguments, calls
//! the engine and renders the result as text, or as JSON with `--json`.
//! Set `RUST_LOG=debug` to see engine tracing on stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use utilkit_core::bases;
use utilkit_core::calculations::bmi::{self, BmiInput, UnitSystem};
use utilkit_core::calculations::dates::{self, DateResult};
use utilkit_core::calculations::salary::{self, format_currency, PayPeriod, SalaryInput};
use utilkit_core::codec::{self, CodecKind};
use utilkit_core::color::parse_hex_color;
use utilkit_core::parse::parse_date;
use utilkit_core::settings::{load_settings, EngineSettings};
use utilkit_core::text::{self, TextOperation};
use utilkit_core::units;
use utilkit_core::EngineError;

/// Utilkit - conversion and calculation utilities
#[derive(Parser, Debug)]
#[command(name = "utilkit", version, about, long_about = None)]
struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (JSON); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Unit conversion
    #[command(subcommand)]
    Units(UnitsCommand),

    /// Show a number in bases 2, 8, 10, 16 and 32
    Base {
        value: String,
        /// Radix the value is written in
        #[arg(long, default_value_t = 10)]
        from: u32,
    },

    /// Encode text (base64, uri, html, url, hex, binary)
    Encode { kind: CodecKind, text: String },

    /// Decode text (base64, uri, html, url, hex, binary)
    Decode { kind: CodecKind, text: String },

    /// Body-mass index (cm/kg, or inch/lb with --imperial)
    Bmi {
        height: String,
        weight: String,
        #[arg(long)]
        imperial: bool,
    },

    /// Net pay from gross annual pay (or monthly with --monthly)
    Salary {
        amount: String,
        #[arg(long)]
        monthly: bool,
    },

    /// Days until (or since) a date, YYYY-MM-DD
    Dday { target: String },

    /// Distance between two dates
    Diff { start: String, end: String },

    /// Exact age from a birth date
    Age { birth: String },

    /// Character, word, sentence and paragraph counts
    Stats { text: String },

    /// Transform text (trim, uppercase, lowercase, capitalize, reverse,
    /// remove-linebreaks, add-commas, remove-duplicates, sort-lines)
    Text { operation: TextOperation, text: String },

    /// Compare two texts line by line
    Compare { left: String, right: String },

    /// Hex colour to RGB and HSL
    Color { hex: String },
}

#[derive(Subcommand, Debug)]
enum UnitsCommand {
    /// List categories and their units
    List,
    /// Convert a value between two units of a category
    Convert {
        category: String,
        from: String,
        to: String,
        value: String,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    let settings = match load_cli_settings(cli.config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli.command, &settings, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&ErrorReport::from(&e)) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_cli_settings(path: Option<&PathBuf>) -> anyhow::Result<EngineSettings> {
    match path {
        Some(path) => {
            let settings = load_settings(path)
                .with_context(|| format!("loading settings from {}", path.display()))?;
            info!(path = %path.display(), "settings loaded");
            Ok(settings)
        }
        None => Ok(EngineSettings::default()),
    }
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    code: &'static str,
    message: String,
    error: &'a EngineError,
}

impl<'a> From<&'a EngineError> for ErrorReport<'a> {
    fn from(error: &'a EngineError) -> Self {
        ErrorReport {
            code: error.error_code(),
            message: error.to_string(),
            error,
        }
    }
}

/// Print `value` as JSON, or run `text` to print it for humans.
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("Error: failed to serialize output: {}", e),
        }
    } else {
        text(value);
    }
}

fn run(command: &Command, settings: &EngineSettings, json: bool) -> Result<(), EngineError> {
    let today = Local::now().date_naive();

    match command {
        Command::Units(UnitsCommand::List) => {
            emit(json, &units::categories(), |cats| {
                for cat in cats.iter() {
                    println!("{} ({})", cat.id, cat.display_name);
                    for unit in &cat.units {
                        println!("  {:<12} {}", unit.id, unit.display_name);
                    }
                }
            });
        }
        Command::Units(UnitsCommand::Convert {
            category,
            from,
            to,
            value,
        }) => {
            let result = units::convert_raw(category, from, to, value)?;
            let display = units::format_conversion(category, result);
            #[derive(Serialize)]
            struct Conversion<'a> {
                category: &'a str,
                from: &'a str,
                to: &'a str,
                value: f64,
                display: String,
            }
            let out = Conversion {
                category,
                from,
                to,
                value: result,
                display,
            };
            emit(json, &out, |c| println!("{} {} = {} {}", value.trim(), c.from, c.display, c.to));
        }
        Command::Base { value, from } => {
            let result = bases::convert_number(value, *from)?;
            emit(json, &result, |r| {
                println!("Decimal: {}", r.value);
                for rep in &r.representations {
                    println!("{:<12} (base {:>2}): {}", rep.label, rep.radix, rep.digits);
                }
                println!("Binary (grouped): {}", r.binary_formatted);
                println!("Hex (prefixed):   {}", r.hex_formatted);
            });
        }
        Command::Encode { kind, text } => {
            let out = codec::encode(*kind, text);
            emit(json, &out, |s| println!("{}", s));
        }
        Command::Decode { kind, text } => {
            let out = codec::decode(*kind, text)?;
            emit(json, &out, |s| println!("{}", s));
        }
        Command::Bmi {
            height,
            weight,
            imperial,
        } => {
            let system = if *imperial {
                UnitSystem::Imperial
            } else {
                UnitSystem::Metric
            };
            let input = BmiInput::parse(height, weight, system)?;
            let result = bmi::calculate(&input)?;
            emit(json, &result, |r| {
                println!("BMI: {} ({})", r.bmi_display(), r.category.label());
                println!(
                    "Ideal weight: {:.1} - {:.1} kg",
                    r.ideal_weight_min_kg, r.ideal_weight_max_kg
                );
                println!("{}", r.category.advice());
            });
        }
        Command::Salary { amount, monthly } => {
            let period = if *monthly {
                PayPeriod::Monthly
            } else {
                PayPeriod::Annual
            };
            let input = SalaryInput::parse(amount, period)?;
            let result = salary::calculate(&input, &settings.salary)?;
            emit(json, &result, |r| {
                println!("Gross annual:  {}", format_currency(r.gross_annual));
                println!("Net annual:    {}", format_currency(r.net_annual));
                println!("Gross monthly: {}", format_currency(r.gross_monthly));
                println!("Net monthly:   {}", format_currency(r.net_monthly));
                println!("Net daily:     {}", format_currency(r.net_daily));
                println!("Net hourly:    {}", format_currency(r.net_hourly));
                println!("(flat tax rate {:.0}%)", r.tax_rate * 100.0);
            });
        }
        Command::Dday { target } => {
            let result = DateResult::Dday(dates::dday(parse_date(target)?, today));
            print_date(json, &result);
        }
        Command::Diff { start, end } => {
            let result = DateResult::Difference(dates::difference(parse_date(start)?, parse_date(end)?));
            print_date(json, &result);
        }
        Command::Age { birth } => {
            let result = DateResult::Age(dates::age(parse_date(birth)?, today)?);
            print_date(json, &result);
        }
        Command::Stats { text: input } => {
            let stats = text::text_stats(input);
            emit(json, &stats, |s| {
                println!("Characters:            {}", s.characters);
                println!("Characters (no space): {}", s.characters_no_spaces);
                println!("Words:                 {}", s.words);
                println!("Sentences:             {}", s.sentences);
                println!("Paragraphs:            {}", s.paragraphs);
                println!("Bytes:                 {}", s.bytes);
            });
        }
        Command::Text { operation, text: input } => {
            let out = text::transform(input, *operation);
            emit(json, &out, |s| println!("{}", s));
        }
        Command::Compare { left, right } => {
            let diffs = text::compare_lines(left, right);
            emit(json, &diffs, |d| {
                if d.is_empty() {
                    println!("The texts are identical.");
                } else {
                    println!("{} difference(s):", d.len());
                    for diff in d.iter() {
                        println!("  line {}: {:?} != {:?}", diff.line, diff.left, diff.right);
                    }
                }
            });
        }
        Command::Color { hex } => {
            let rgb = parse_hex_color(hex)?;
            #[derive(Serialize)]
            struct ColorReport {
                hex: String,
                rgb: String,
                hsl: String,
            }
            let out = ColorReport {
                hex: rgb.to_hex(),
                rgb: rgb.css(),
                hsl: rgb.to_hsl().css(),
            };
            emit(json, &out, |c| {
                println!("HEX: {}", c.hex);
                println!("RGB: {}", c.rgb);
                println!("HSL: {}", c.hsl);
            });
        }
    }

    Ok(())
}

fn print_date(json: bool, result: &DateResult) {
    emit(json, result, |r| match r {
        DateResult::Dday(d) => {
            println!("{} ({})", d.label(), d.target_date);
            if d.is_past {
                println!("{} days ago", -d.days);
            } else {
                println!("{} days left", d.days);
            }
        }
        DateResult::Difference(d) => {
            println!("{} -> {}", d.start_date, d.end_date);
            println!("{} days (~{} weeks, ~{} months, ~{} years)", d.days, d.weeks, d.months, d.years);
        }
        DateResult::Age(a) => {
            println!("Age: {} (born {})", a.exact_age, a.birth_date);
            println!("Lived {} days (~{} months)", a.total_days, a.total_months);
            println!(
                "Next birthday: {} ({} days left)",
                a.next_birthday.date, a.next_birthday.days_left
            );
        }
    });
}
