mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use fs_err as fs;
use std::io::Read;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;
use typofix_core::Engine;
use typofix_types::TypographySettings;

#[derive(Debug, Parser)]
#[command(
    name = "typofix",
    version,
    about = "Typographic correction for French and English Markdown prose."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,

    #[command(flatten)]
    correct: CorrectArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available fixers with priorities, categories and examples.
    ListFixers(ListFixersArgs),
}

#[derive(Debug, Parser)]
struct CorrectArgs {
    /// Files to correct; reads stdin when omitted.
    files: Vec<Utf8PathBuf>,

    /// Rewrite the files in place instead of printing to stdout.
    #[arg(long)]
    write: bool,

    /// Report which files would change and exit 2 if any would.
    #[arg(long)]
    check: bool,

    /// Print a unified diff instead of the corrected text.
    #[arg(long)]
    diff: bool,

    /// Locale override (e.g. fr_FR, en_GB, de_DE).
    #[arg(long)]
    locale: Option<String>,

    /// Enable a fixer by id (repeatable).
    #[arg(long)]
    enable: Vec<String>,

    /// Disable a fixer by id (repeatable).
    #[arg(long)]
    disable: Vec<String>,

    /// Config file path (default: ./typofix.toml when present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct ListFixersArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Exit code 2 = corrections required (`--check`), 1 = tool error.
#[derive(Debug, thiserror::Error)]
enum ToolError {
    #[error("corrections required")]
    CorrectionsRequired,
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ToolError {
    fn exit_code(&self) -> u8 {
        match self {
            ToolError::CorrectionsRequired => 2,
            ToolError::Internal(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let ToolError::Internal(_) = err {
                error!("{}", err);
            }
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), ToolError> {
    match cli.cmd {
        Some(Command::ListFixers(args)) => {
            list_fixers(&engine_from_args(&cli.correct)?, args.format);
            Ok(())
        }
        None => correct(&cli.correct),
    }
}

fn engine_from_args(args: &CorrectArgs) -> anyhow::Result<Engine> {
    let file_config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::load_or_default(Utf8PathBuf::from(".").as_path())?,
    };

    let mut settings = file_config.into_settings();
    if let Some(tag) = &args.locale {
        settings = override_locale(settings, tag);
    }
    for id in &args.enable {
        settings.fixers.insert(id.clone(), true);
    }
    for id in &args.disable {
        settings.fixers.insert(id.clone(), false);
    }

    Ok(Engine::new(settings))
}

/// Re-derive the locale preset, keeping explicit per-fixer choices.
fn override_locale(settings: TypographySettings, tag: &str) -> TypographySettings {
    let mut next = TypographySettings::for_locale(tag);
    next.enable_real_time_correction = settings.enable_real_time_correction;
    for (id, enabled) in settings.fixers {
        next.fixers.entry(id).or_insert(enabled);
    }
    next
}

fn correct(args: &CorrectArgs) -> Result<(), ToolError> {
    let engine = engine_from_args(args)?;

    if args.files.is_empty() {
        if args.write {
            return Err(anyhow::anyhow!("--write requires file arguments").into());
        }
        return correct_stdin(&engine, args);
    }

    let mut corrections_needed = false;
    for path in &args.files {
        let original =
            fs::read_to_string(path).with_context(|| format!("read {}", path))?;
        let outcome = engine.process_text_with_details(&original);

        if args.check {
            let status = if outcome.changed { "needs correction" } else { "ok" };
            println!("{path}: {status}");
            corrections_needed |= outcome.changed;
        } else if args.diff {
            if outcome.changed {
                print!("{}", diffy::create_patch(&outcome.original, &outcome.corrected));
            }
        } else if args.write {
            if outcome.changed {
                fs::write(path, &outcome.corrected)
                    .with_context(|| format!("write {}", path))?;
            }
        } else {
            print!("{}", outcome.corrected);
        }
    }

    if args.check && corrections_needed {
        return Err(ToolError::CorrectionsRequired);
    }
    Ok(())
}

fn correct_stdin(engine: &Engine, args: &CorrectArgs) -> Result<(), ToolError> {
    let mut original = String::new();
    std::io::stdin()
        .read_to_string(&mut original)
        .context("read stdin")?;
    let outcome = engine.process_text_with_details(&original);

    if args.check {
        println!("<stdin>: {}", if outcome.changed { "needs correction" } else { "ok" });
        if outcome.changed {
            return Err(ToolError::CorrectionsRequired);
        }
    } else if args.diff {
        if outcome.changed {
            print!("{}", diffy::create_patch(&outcome.original, &outcome.corrected));
        }
    } else {
        print!("{}", outcome.corrected);
    }
    Ok(())
}

fn list_fixers(engine: &Engine, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!(
                "{:<16} {:>8}  {:<12} {:<8}  description",
                "id", "priority", "category", "enabled"
            );
            for fixer in engine.fixers() {
                println!(
                    "{:<16} {:>8}  {:<12} {:<8}  {}",
                    fixer.id(),
                    fixer.priority(),
                    fixer.category().as_str(),
                    if fixer.enabled() { "yes" } else { "no" },
                    fixer.description()
                );
            }
        }
        OutputFormat::Json => {
            let fixers: Vec<serde_json::Value> = engine
                .fixers()
                .iter()
                .map(|fixer| {
                    let example = fixer.example();
                    serde_json::json!({
                        "id": fixer.id(),
                        "name": fixer.name(),
                        "description": fixer.description(),
                        "category": fixer.category().as_str(),
                        "priority": fixer.priority(),
                        "enabled": fixer.enabled(),
                        "locale_sensitive": fixer.meta().locale_sensitive,
                        "example": { "before": example.before, "after": example.after },
                    })
                })
                .collect();
            let doc = serde_json::json!({ "fixers": fixers });
            println!(
                "{}",
                serde_json::to_string_pretty(&doc).expect("fixer listing serializes")
            );
        }
    }
}
