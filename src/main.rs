use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use edgar_cli::config::{LoadedSource, expand_home, load_source};
use edgar_cli::output::{default_output_path, render_with_header, write_output};
use edgar_cli::{StderrSink, compile};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "EDGAR_LOG";

#[derive(Parser)]
#[command(name = "edgar")]
#[command(
	author,
	version,
	about = "Compile a hierarchical YAML/TOML description of SSH hosts into an OpenSSH client config"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Source document to compile (default: ~/.config/edgar.yml, ~/.config/edgar.toml or ~/.edgarrc)
	#[arg(short, long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	/// SSH config file to write (default: ~/.ssh/config). Use - to print on stdout
	#[arg(short, long, value_name = "FILE", global = true)]
	output: Option<PathBuf>,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
	/// Compile the source document and write the SSH config file (default)
	Store,
	/// Compile the source document and print the result
	Show,
	/// Compile the source document and report problems without writing anything
	Check,
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing(verbose: u8) {
	// Keyword warnings reach the user through the diagnostics sink, so the
	// default level only lets errors through.
	let filter = match std::env::var(LOG_ENV) {
		Ok(directives) => EnvFilter::new(directives),
		Err(_) => EnvFilter::new(match verbose {
			0 => "error",
			1 => "debug",
			_ => "trace",
		}),
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn run(cli: Cli) -> Result<ExitCode> {
	let source = load_source(cli.config.as_deref()).context("Failed to load source document")?;

	let mut sink = StderrSink::new();
	let store = compile(&source.document, &mut sink)
		.with_context(|| format!("Failed to compile {}", source.path.display()))?;

	match cli.command.unwrap_or(Commands::Store) {
		Commands::Show => {
			println!("{store}");
			Ok(ExitCode::SUCCESS)
		}
		Commands::Check => {
			println!(
				"{} is valid ({} blocks, {} warnings)",
				source.path.display(),
				store.len(),
				sink.count()
			);
			Ok(ExitCode::SUCCESS)
		}
		Commands::Store => handle_store(&source, &store.render(), cli.output.as_deref()),
	}
}

fn handle_store(source: &LoadedSource, compiled: &str, output: Option<&Path>) -> Result<ExitCode> {
	if output == Some(Path::new("-")) {
		println!("{compiled}");
		return Ok(ExitCode::SUCCESS);
	}

	let path = match output {
		Some(path) => {
			let home_dir = dirs::home_dir().context("Failed to resolve home directory")?;
			expand_home(path, &home_dir)
		}
		None => default_output_path().context("Failed to resolve the default output path")?,
	};

	let content = render_with_header(compiled, &source.path, chrono::Utc::now());
	write_output(&path, &content).with_context(|| format!("Failed to write {}", path.display()))?;

	Ok(ExitCode::SUCCESS)
}
