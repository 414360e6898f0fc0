//! `vc-brief`: the VC Brief command-line companion.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use vcb_cli::cli::{Cli, Command, IntroAction, LogFormatArg, LogLevelArg};
use vcb_cli::commands::{
    IntroStatus, NewsletterOutput, intro_reset, intro_status, open_session_store, run_dossier,
    run_newsletter, run_search, run_validate, tab_rows,
};
use vcb_cli::logging::{LogConfig, LogFormat, init_logging};
use vcb_cli::summary::{print_search, print_validation, tab_lines};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli.command) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: &Command) -> anyhow::Result<i32> {
    match command {
        Command::Validate(args) => {
            let report = run_validate(args)?;
            print_validation(&report);
            Ok(if report.is_valid() { 0 } else { 1 })
        }
        Command::Search(args) => {
            let hits = run_search(args)?;
            print_search(&args.query, &hits);
            Ok(0)
        }
        Command::Tabs => {
            println!("{}", tab_lines(&tab_rows()));
            Ok(0)
        }
        Command::Newsletter(args) => {
            match run_newsletter(args)? {
                NewsletterOutput::Written(path) => println!("Wrote {}", path.display()),
                NewsletterOutput::Preview(text) => println!("{text}"),
            }
            Ok(0)
        }
        Command::Dossier(args) => {
            let path = run_dossier(args)?;
            println!("Wrote {}", path.display());
            Ok(0)
        }
        Command::Intro { action } => {
            let mut store = open_session_store()?;
            match action {
                IntroAction::Status => match intro_status(&store) {
                    IntroStatus::Seen => println!("Intro already seen this session."),
                    IntroStatus::NotSeen => println!("Intro will play on next launch."),
                },
                IntroAction::Reset => {
                    if intro_reset(&mut store)? {
                        println!("Intro flag cleared.");
                    } else {
                        println!("Intro flag was not set.");
                    }
                }
            }
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
