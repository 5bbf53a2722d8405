//! Favorites list driver.
//!
//! Runs a command script against one in-memory session and prints what each
//! command did. Reads the script from a file or from stdin.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use faves_host::{Config, Session};
use tracing::info;

mod script;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "faves")]
#[command(about = "Curate favorite images and jump between them")]
struct Args {
	/// Script to run (stdin if omitted)
	#[arg(value_name = "SCRIPT")]
	script: Option<PathBuf>,

	/// Config file (defaults to the user config directory)
	#[arg(short, long, value_name = "PATH")]
	config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let config = match &args.config {
		Some(path) => Config::load(path),
		None => Config::load_default(),
	}
	.context("loading config")?;
	info!(reference_mode = ?config.reference_mode, "config loaded");

	let input = match &args.script {
		Some(path) => std::fs::read_to_string(path)
			.with_context(|| format!("reading {}", path.display()))?,
		None => {
			let mut input = String::new();
			io::stdin().read_to_string(&mut input)?;
			input
		}
	};
	let commands = script::parse(&input)?;

	let mut session = Session::new(config);
	info!(document = ?session.document.id(), commands = commands.len(), "running script");

	let stdout = io::stdout();
	let mut out = stdout.lock();
	for (line, command) in commands {
		script::execute(&mut session, command, &mut out).with_context(|| format!("line {line}"))?;
	}
	out.flush()?;
	Ok(())
}
