mod cli;

use cgpa::config;
use cgpa::engine::{calculate, parse_score, validate};
use cgpa::error::{CgpaError, Result};
use cgpa::report::{self, OutputFormat};
use cgpa::types::degree::DegreeProgram;
use cgpa::types::report::CalculationReport;
use cgpa::types::scores::RawScore;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32> {
    match cli.command {
        cli::Commands::Calculate(cmd) => run_calculate(cmd),
        cli::Commands::Validate(cmd) => {
            let validation = validate(Some(cmd.value.as_str()));
            match validation.reason {
                None => {
                    println!("valid");
                    Ok(exit_code::SUCCESS)
                }
                Some(reason) => {
                    println!("invalid ({}): {}", reason.code(), reason);
                    Ok(exit_code::INVALID_INPUT)
                }
            }
        }
        cli::Commands::Programs => {
            for program in DegreeProgram::ALL {
                let info = program.info();
                println!(
                    "{:<14} {} semesters  {}",
                    info.id, info.semester_count, info.label
                );
                println!("    {}", info.description);
                println!("    {}", program.formula());
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn run_calculate(cmd: cli::CalculateCommand) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd)?;

    let (file_program, raw) = match &cmd.file {
        Some(path) => {
            let file = config::load_score_file(path)?;
            info!(path = %path.display(), entries = file.sgpa.len(), "loaded score file");
            (file.program, file.sgpa)
        }
        None => (None, cmd.sgpa.into_iter().map(RawScore::Text).collect()),
    };

    let program = match cmd.program.as_deref().or(file_program.as_deref()) {
        Some(name) => name.parse()?,
        None => loaded.default_program()?,
    };

    let max = program.semester_count();
    if raw.len() > max {
        return Err(CgpaError::TooManyScores {
            given: raw.len(),
            max,
        });
    }

    let mut scores = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for (index, entry) in raw.iter().enumerate() {
        match parse_entry(entry) {
            Ok(score) => scores.push(score),
            Err(reason) => errors.push(CgpaError::InvalidScore {
                semester: program.semester_label(index),
                reason,
            }),
        }
    }
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("error: {error}");
        }
        return Ok(exit_code::INVALID_INPUT);
    }

    let result = calculate(program, &scores);
    info!(program = %program, filled = result.filled_count, "calculation finished");

    let format = match (cmd.format, loaded.default_format()) {
        (Some(cli::ReportFormat::Json), _) => OutputFormat::Json,
        (Some(cli::ReportFormat::Md), _) => OutputFormat::Md,
        (None, Some(name)) => OutputFormat::from_name(name)?,
        (None, None) => OutputFormat::Md,
    };
    let rendered = report::render(
        &CalculationReport::from_result(&result),
        format,
        loaded.decimals(),
    )?;
    println!("{rendered}");

    Ok(exit_code::SUCCESS)
}

fn parse_entry(entry: &RawScore) -> std::result::Result<Option<f64>, cgpa::InvalidReason> {
    match entry {
        RawScore::Text(raw) if matches!(raw.trim(), "-" | "_") => Ok(None),
        RawScore::Text(raw) => parse_score(raw),
        number => number.parse(),
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_input_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
