// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod render;

use chrono::Utc;
use clap::Parser;
use color_eyre::{Result, eyre::Context};
use config::Args;
use render::render_summary;
use spots_domain::{Response, decode_reader};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::{debug, info};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .without_time()
        .init();

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let options = args
        .render_options()
        .wrap_err("invalid display options")?;

    let response = read_response(args.input.as_deref())?;
    info!(
        structures = response.structures().len(),
        "Loaded availability payload"
    );

    let output = if args.json {
        serde_json::to_string_pretty(&response).wrap_err("failed to serialize response")?
    } else {
        render_summary(&response, &options, Utc::now()).wrap_err("failed to render summary")?
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn read_response(path: Option<&Path>) -> Result<Response> {
    match path {
        Some(path) => {
            debug!("Reading payload from {}", path.display());
            let file =
                File::open(path).wrap_err_with(|| format!("failed to open {}", path.display()))?;
            decode_reader(BufReader::new(file))
                .wrap_err_with(|| format!("failed to decode {}", path.display()))
        }
        None => {
            debug!("Reading payload from stdin");
            decode_reader(io::stdin().lock()).wrap_err("failed to decode payload from stdin")
        }
    }
}
