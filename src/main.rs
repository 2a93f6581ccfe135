// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Status | Stage | Commit | Log | Branch | Tag | Remote | Submodule | ...
//! ```

use std::process::ExitCode;

use gitdesk::cli::global::GlobalOptions;
use gitdesk::cli::{self, Command};
use gitdesk::cmd::config::{run_config_files_command, run_options_command};
use gitdesk::cmd::history::{run_log_command, run_reflog_command, run_search_command};
use gitdesk::cmd::open_repository;
use gitdesk::cmd::refs::{
    run_branch_command, run_branches_command, run_checkout_command, run_tag_command,
};
use gitdesk::cmd::remote::{
    run_clone_command, run_config_user_command, run_init_command, run_pull_command,
    run_push_command, run_push_review_command, run_remote_command,
};
use gitdesk::cmd::submodule::run_submodule_command;
use gitdesk::cmd::worktree::{
    run_commit_command, run_diff_command, run_ignore_command, run_stage_command,
    run_status_command, run_unstage_command,
};
use gitdesk::config::Config;
use gitdesk::config::loader::ConfigLoader;
use gitdesk::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_CONFIG_FILE: &str = "gitdesk.toml";
const ENV_PREFIX: &str = "GITDESK";

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    let console_level = config.global.log_level;
    let file_level = config.global.file_log_level.unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let global = &cli.global;
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::ConfigFiles) => {
            run_config_files_command(&build_config_loader(global).loaded_files());
            Ok(())
        }
        Some(Command::Init(args)) => run_init_command(global, config, args),
        Some(Command::Clone(args)) => run_clone_command(config, args),
        Some(command) => {
            open_repository(global, config).and_then(|repo| match command {
                Command::Status(args) => run_status_command(&repo, args),
                Command::Stage(args) => run_stage_command(&repo, args),
                Command::Unstage(args) => run_unstage_command(&repo, args),
                Command::Commit(args) => run_commit_command(&repo, args),
                Command::Diff(args) => run_diff_command(&repo, args),
                Command::Ignore(args) => run_ignore_command(&repo, args),
                Command::Log(args) => run_log_command(&repo, args),
                Command::Search(args) => run_search_command(&repo, args),
                Command::Reflog => run_reflog_command(&repo),
                Command::Branches => run_branches_command(&repo),
                Command::Branch(args) => run_branch_command(&repo, args),
                Command::Checkout(args) => run_checkout_command(&repo, args),
                Command::Tag(args) => run_tag_command(&repo, args),
                Command::Pull(args) => run_pull_command(&repo, args),
                Command::Push(args) => run_push_command(&repo, args),
                Command::PushReview(args) => run_push_review_command(&repo, args),
                Command::Remote(args) => run_remote_command(&repo, args),
                Command::ConfigUser(args) => run_config_user_command(&repo, args),
                Command::Submodule(args) => run_submodule_command(&repo, args),
                Command::Version
                | Command::Options
                | Command::ConfigFiles
                | Command::Init(_)
                | Command::Clone(_) => Ok(()),
            })
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new()
        .add_toml_file_optional(DEFAULT_CONFIG_FILE)
        .add_repository_file(global.repo_path());
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> gitdesk::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(key, value)?;
    }
    loader.build()
}

