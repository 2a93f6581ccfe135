// gitdesk: Git working-tree desk
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands.

use crate::config::Config;
use crate::config::loader::ConfigSource;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display contributing configuration layers, lowest priority first.
pub fn run_config_files_command(sources: &[ConfigSource]) {
    if sources.is_empty() {
        println!("No configuration files loaded");
    }
    for source in sources {
        println!("{source}");
    }
}
