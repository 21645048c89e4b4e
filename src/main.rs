mod cli;
mod config;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::process::ExitCode;

use quickargs::{Argv, FilenameResolver};

use crate::cli::{Args, Command};
use crate::config::{
    config_path, load_config, maybe_add_extension, normalize_extension, save_config,
};

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(args: Args) -> Result<()> {
    // Handle --config flag
    if args.config {
        let path = config_path()?;
        println!("Config path: {}", path.display());
        if path.exists() {
            let content = fs::read_to_string(&path).context("Failed to read config file")?;
            println!("\nConfig content:\n{}", content);
        } else {
            println!("Config file does not exist.");
        }
        return Ok(());
    }

    let command = args
        .command
        .ok_or_else(|| anyhow!("A subcommand is required (unless using --config flag)"))?;

    match command {
        Command::Resolve {
            patterns,
            ext,
            sort,
            basenames,
            remember,
        } => resolve(patterns, ext, sort, basenames, remember),
        Command::Check { flag, args } => check(flag, args),
    }
}

fn resolve(
    patterns: Vec<String>,
    ext: Vec<String>,
    sort: bool,
    basenames: bool,
    remember: bool,
) -> Result<()> {
    let mut cfg = load_config().unwrap_or_else(|e| {
        log::warn!("{e:#}; using defaults");
        Default::default()
    });
    let ext: Vec<String> = ext.iter().map(|e| normalize_extension(e)).collect();

    if remember && !ext.is_empty() {
        let mut changed = false;
        for e in &ext {
            changed |= maybe_add_extension(&mut cfg, e.clone());
        }
        if changed {
            // ignore save errors (still can run)
            match save_config(&cfg) {
                Ok(()) => log::info!("saved extensions {:?}", cfg.extensions),
                Err(e) => log::warn!("{e:#}"),
            }
        }
    }

    let mut resolver = FilenameResolver::new(patterns).sorted(sort || cfg.sort);
    if !ext.is_empty() {
        resolver = resolver.extensions(ext);
    } else if !cfg.extensions.is_empty() {
        log::debug!("filtering by configured extensions {:?}", cfg.extensions);
        resolver = resolver.extensions(cfg.extensions);
    }

    for (file, base) in resolver.resolve().iter() {
        if basenames {
            println!("{file}\t{base}");
        } else {
            println!("{file}");
        }
    }
    Ok(())
}

fn check(flags: Vec<String>, args: Vec<String>) -> Result<()> {
    let mut argv = Argv::from(args);
    for flag in &flags {
        println!("{}={}", flag, argv.exists(flag));
    }
    argv.exit_if_any_unparsed_options();
    for positional in argv {
        println!("positional: {positional}");
    }
    Ok(())
}
