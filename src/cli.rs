// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for intcode.

use std::path::PathBuf;

use clap::Parser;
use intcode_codegen::ProfileKind;

use crate::config::{Config, OutputFormat};

/// intcode - compile a JavaScript subset to label-addressed intermediate code
#[derive(Parser, Debug)]
#[command(name = "intcode")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to compile
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Compile the given source text instead of a file
    #[arg(short, long, value_name = "CODE")]
    pub eval: Option<String>,

    /// Target opcode profile (branch or machine)
    #[arg(short, long)]
    pub profile: Option<ProfileKind>,

    /// Listing format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read settings from this file after the default locations
    #[arg(short, long, value_name = "PATH", env = "INTCODE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(profile) = self.profile {
            config.profile = profile;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.verbose {
            config.loglevel = "debug".to_string();
        } else if self.quiet {
            config.loglevel = "error".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_argument() {
        let cli = Cli::try_parse_from(["intcode", "prog.js", "--profile", "machine"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("prog.js")));
        assert_eq!(cli.profile, Some(ProfileKind::Machine));
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_eval_argument() {
        let cli = Cli::try_parse_from(["intcode", "-e", "var a = 1", "-f", "json"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("var a = 1"));
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_source_is_required() {
        assert!(Cli::try_parse_from(["intcode"]).is_err());
        assert!(Cli::try_parse_from(["intcode", "a.js", "-e", "x"]).is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["intcode", "a.js", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cli =
            Cli::try_parse_from(["intcode", "a.js", "-p", "machine", "-f", "json", "-q"]).unwrap();
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.profile, ProfileKind::Machine);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.loglevel, "error");
    }

    #[test]
    fn test_apply_keeps_config_without_flags() {
        let cli = Cli::try_parse_from(["intcode", "a.js"]).unwrap();
        let mut config = Config {
            profile: ProfileKind::Machine,
            format: OutputFormat::Json,
            loglevel: "info".to_string(),
            ..Config::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.profile, ProfileKind::Machine);
        assert_eq!(config.loglevel, "info");
    }
}
