use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tpv_core::RuleCode;
use tpv_report::{template_for, DiagnosticRecord, Report};
use tpv_runner::{FailOn, OutputFormat, Runner};

#[derive(Parser)]
#[command(name = "tpv", version, about = "Validate task and transform property declarations")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default .tpv/tpv.toml in the current directory
    Init,

    /// Validate unit descriptions (files or directories)
    Check {
        /// Defaults to `input.paths` from the config
        paths: Vec<PathBuf>,
        #[arg(long)]
        format: Option<OutputFormat>,
        #[arg(long)]
        fail_on: Option<FailOn>,
    },

    /// List the active rules with their severities
    Rules,

    /// Show the message template, hint and docs anchor of a rule
    Explain { code: String },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let repo_root = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => {
            let path = Runner::init_repo(&repo_root)?;
            println!("Initialized tpv config at {}", path.display());
        }
        Command::Check { paths, format, fail_on } => {
            let r = Runner::open(repo_root)?;
            let summary = r.check_paths(&paths)?;
            match format.unwrap_or(r.cfg.output.format) {
                OutputFormat::Text => print_text(&summary.report, summary.files, summary.units),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary.report)?),
            }
            let fail_on = fail_on.unwrap_or(r.cfg.output.fail_on);
            if fail_on.fails(summary.report.max_severity()) {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Rules => {
            let r = Runner::open(repo_root)?;
            for code in r.rules.codes() {
                let severity = r.rules.severity_of(code).map(|s| s.as_str()).unwrap_or_default();
                let title = template_for(code).map(|t| t.title).unwrap_or_default();
                println!("{:<42} {:<8} {}", code, severity, title);
            }
        }
        Command::Explain { code } => {
            let code = RuleCode::parse(&code).ok_or_else(|| anyhow!("unknown rule code `{code}`"))?;
            let t = template_for(code).ok_or_else(|| anyhow!("no template for {code}"))?;
            println!("{code}: {}", t.title);
            println!();
            println!("  message: {}", t.message);
            println!("  hint:    {}", t.hint);
            println!("  docs:    {}", t.docs);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_text(report: &Report, files: usize, units: usize) {
    for rec in &report.records {
        println!("{}[{}] {}: {}", rec.severity.as_str(), rec.code, location(rec), rec.message);
        println!("  hint: {}", rec.hint);
    }
    println!(
        "checked {units} unit(s) in {files} file(s): {} error(s), {} warning(s)",
        report.errors, report.warnings
    );
}

fn location(rec: &DiagnosticRecord) -> String {
    match &rec.property {
        Some(p) => format!("{}.{}", rec.unit, p),
        None => rec.unit.clone(),
    }
}
