#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "reflectdoc", about = "Reflection model layout and default-instance export tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Export {
		out_dir: PathBuf,
	},
	Layout,
	Defaults,
	Info,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> reflectdoc::reflect::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Export { out_dir } => cmd::export::run(out_dir),
		Commands::Layout => cmd::layout::run(),
		Commands::Defaults => cmd::defaults::run(),
		Commands::Info => cmd::info::run(),
	}
}
