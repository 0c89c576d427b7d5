// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Workspace automation for the Spots crates
//!
//! - `cargo xtask ci` — lint, build, then test
//! - `cargo xtask test` — crate and binary tests, then doc tests
//! - `cargo xtask coverage` — lcov report via `cargo llvm-cov`
//!
//! Each command expands to a list of [`Step`]s that run in order and stop
//! at the first failure.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{io, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

const CLIPPY: &[&str] = &["clippy", "--all-targets", "--all-features", "--", "-D", "warnings"];
const CLIPPY_FIX: &[&str] = &[
    "clippy",
    "--all-targets",
    "--all-features",
    "--fix",
    "--allow-dirty",
    "--allow-staged",
    "--",
    "-D",
    "warnings",
];

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Copy, Debug, Subcommand)]
enum Command {
    /// Lint, build, and test
    CI,

    /// Build every target
    #[command(visible_alias = "b")]
    Build,

    /// Type-check every target
    #[command(visible_alias = "c")]
    Check,

    /// Write an lcov report to target/lcov.info
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run clippy, rustdoc, rustfmt and typos checks
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build docs with docs.rs flags and warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting with nightly rustfmt
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check spelling with typos-cli
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Apply clippy suggestions
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Apply nightly rustfmt
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run crate tests, then doc tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests only
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run crate and binary tests only
    #[command(visible_alias = "tl")]
    TestLibs,
}

/// A single unit of work behind a command.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// `cargo <args>` on the default toolchain
    Cargo(&'static [&'static str]),
    /// `cargo <args>` on nightly (rustfmt options we rely on are nightly-only)
    CargoNightly(&'static [&'static str]),
    /// `cargo doc` per default workspace package with `-D warnings`
    Docs,
    /// `typos`
    Typos,
}

impl Command {
    fn steps(self) -> Vec<Step> {
        match self {
            Self::CI => [Self::Lint, Self::Build, Self::Test]
                .into_iter()
                .flat_map(Self::steps)
                .collect(),
            Self::Build => vec![Step::Cargo(&["build", "--all-targets", "--all-features"])],
            Self::Check => vec![Step::Cargo(&["check", "--all-targets", "--all-features"])],
            Self::Coverage => vec![Step::Cargo(&[
                "llvm-cov",
                "--lcov",
                "--output-path",
                "target/lcov.info",
                "--all-features",
            ])],
            Self::Lint => [
                Self::LintClippy,
                Self::LintDocs,
                Self::LintFormatting,
                Self::LintTypos,
            ]
            .into_iter()
            .flat_map(Self::steps)
            .collect(),
            Self::LintClippy => vec![Step::Cargo(CLIPPY)],
            Self::LintDocs => vec![Step::Docs],
            Self::LintFormatting => vec![Step::CargoNightly(&["fmt", "--all", "--check"])],
            Self::LintTypos => vec![Step::Typos],
            Self::FixClippy => vec![Step::Cargo(CLIPPY_FIX)],
            Self::FixFormatting => vec![Step::CargoNightly(&["fmt", "--all"])],
            // doc tests last because they are slow
            Self::Test => [Self::TestLibs, Self::TestDocs]
                .into_iter()
                .flat_map(Self::steps)
                .collect(),
            Self::TestDocs => vec![Step::Cargo(&["test", "--doc", "--all-features"])],
            Self::TestLibs => vec![Step::Cargo(&["test", "--all-targets", "--all-features"])],
        }
    }

    fn run(self) -> Result<()> {
        self.steps().into_iter().try_for_each(Step::run)
    }
}

impl Step {
    fn run(self) -> Result<()> {
        match self {
            Self::Cargo(args) => {
                cmd("cargo", args.iter().copied()).run_with_trace()?;
            }
            Self::CargoNightly(args) => {
                nightly(cmd("cargo", args.iter().copied())).run_with_trace()?;
            }
            Self::Docs => {
                let meta = MetadataCommand::new()
                    .exec()
                    .wrap_err("failed to get cargo metadata")?;

                for package in meta.workspace_default_packages() {
                    let args = ["doc", "--no-deps", "--all-features", "--package", &package.name];
                    nightly(cmd("cargo", args))
                        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
                        .run_with_trace()?;
                }
            }
            Self::Typos => {
                cmd!("typos").run_with_trace()?;
            }
        }
        Ok(())
    }
}

/// Switch an expression to the nightly toolchain.
fn nightly(expression: duct::Expression) -> duct::Expression {
    // CARGO is set because we're running in a cargo subcommand
    expression
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_runs_lint_build_test_in_order() {
        let steps = Command::CI.steps();

        assert_eq!(steps.len(), 7);
        assert!(matches!(steps[0], Step::Cargo(args) if args == CLIPPY));
        assert!(matches!(steps[4], Step::Cargo(args) if args[0] == "build"));
        assert!(matches!(steps[6], Step::Cargo(args) if args[1] == "--doc"));
    }

    #[test]
    fn test_args_are_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
