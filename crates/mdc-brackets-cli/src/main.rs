mod highlight;

use anyhow::{Context, Result, bail};
use mdc_brackets_config::Config;
use mdc_brackets_engine::{
    FenceMode, Position, RopeDocument, ScanOptions, TextDocument, find_all_pairs,
    find_matching_brackets_with,
};
use std::{env, path::PathBuf, process};

use highlight::{describe, render_match};

#[derive(Debug, PartialEq, Eq)]
enum Query {
    /// Cursor position, already converted to the engine's zero-based model.
    At(Position),
    All,
}

/// Parses a 1-based `line:column` argument into a zero-based position.
fn parse_position(arg: &str) -> Result<Position> {
    let Some((line, column)) = arg.split_once(':') else {
        bail!("expected <line>:<column>, got '{arg}'");
    };
    let line: usize = line
        .parse()
        .with_context(|| format!("invalid line number '{line}'"))?;
    let column: usize = column
        .parse()
        .with_context(|| format!("invalid column '{column}'"))?;
    if line == 0 || column == 0 {
        bail!("line and column are 1-based, got '{arg}'");
    }
    Ok(Position::new(line - 1, column - 1))
}

fn parse_args(args: &[String]) -> Result<(PathBuf, Query)> {
    match args {
        [_, file, flag] if flag == "--all" => Ok((PathBuf::from(file), Query::All)),
        [_, file, position] => Ok((PathBuf::from(file), Query::At(parse_position(position)?))),
        _ => bail!("wrong number of arguments"),
    }
}

fn scan_options(config: &Config) -> ScanOptions {
    ScanOptions {
        fence_mode: if config.strict_fences {
            FenceMode::MatchKind
        } else {
            FenceMode::Toggle
        },
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let (file, query) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {} <file> <line>:<column>", args[0]);
            eprintln!("       {} <file> --all", args[0]);
            process::exit(1);
        }
    };

    log::info!("Config path: {}", Config::config_path().display());
    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("{e}; using default settings");
            Config::default()
        }
    };

    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let doc = RopeDocument::from(content.as_str());

    if doc.line_count() > config.max_document_lines {
        log::warn!(
            "{} has {} lines, above max_document_lines = {}; skipping",
            file.display(),
            doc.line_count(),
            config.max_document_lines
        );
        println!("no match");
        return Ok(());
    }

    let options = scan_options(&config);
    match query {
        Query::At(position) => match find_matching_brackets_with(&doc, position, &options) {
            Some(found) => print!("{}", render_match(&doc, &found)?),
            None => println!("no match"),
        },
        Query::All => {
            let pairs = find_all_pairs(&doc, &options);
            if pairs.is_empty() {
                println!("no pairs");
            }
            for found in pairs {
                println!(
                    "{} {} {}",
                    ":".repeat(found.colon_count),
                    describe(found.opening),
                    describe(found.closing)
                );
            }
        }
    }

    Ok(())
}
