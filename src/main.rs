// tpm2sh: TPM 2.0 command line tool
//
// SPDX-FileCopyrightText: 2025 Opinsys Oy
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Config --> Command Dispatch
//!   Version | Options | Rc | List
//! ```

use std::process::ExitCode;

use tpm2sh::cli::global::GlobalOptions;
use tpm2sh::cli::{self, Command};
use tpm2sh::cmd::config::{run_options_command, run_version_command};
use tpm2sh::cmd::list::run_list_command;
use tpm2sh::cmd::rc::run_rc_command;
use tpm2sh::config::loader::ConfigLoader;
use tpm2sh::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use tpm2sh::error::Tpm2shError;
use tpm2sh::logging::init_logging;
use tpm2sh::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            run_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Rc(args)) => run_rc_command(args),
        Some(Command::List(args)) => {
            load_config(&cli.global).and_then(|config| run_list_command(args, &config))
        }
        None => Err(Tpm2shError::Other(
            "No command specified. Use --help for usage information.".into(),
        )
        .into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> tpm2sh::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    if let Some(device) = &global.device {
        loader = loader.set("device.path", device.display().to_string())?;
    }
    Ok(loader)
}

fn load_config(global: &GlobalOptions) -> tpm2sh::error::Result<Config> {
    build_config_loader(global)?
        .build()
        .map_err(|e| e.context("failed to load config"))
}
