use std::fs;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use humansize::DECIMAL;

use palettec::converter::{convert, default_output_path, ConvertOptions};
use palettec::palettes::{ACT_PALETTE_SIZE, MAX_CONTAINER_PALETTES};

use crate::commands::Cli;

mod commands;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let folder = match &cli.folder {
		Some(f) => f,
		None => {
			// no palette folder is not an error, just show how to use the tool
			if let Err(err) = Cli::command().print_help() {
				eprintln!("Can't print usage: {err}");
			}
			println!();
			return ExitCode::SUCCESS;
		}
	};

	let output = cli.output.clone().unwrap_or_else(|| default_output_path(folder));

	let options = ConvertOptions {
		sorted: !cli.unsorted,
		debug: cli.debug,
	};

	if cli.debug {
		println!("{:#^40}", " DEBUG MODE ");
		println!("input folder: {}", folder.display());
		println!("output file: {}", output.display());
	}

	let summary = match convert(folder, &output, options) {
		Ok(s) => s,
		Err(e) => {
			eprintln!("{} {e:#}", "execution failed:".red());
			return ExitCode::FAILURE;
		}
	};

	for short in &summary.short_palettes {
		eprintln!(
			"{} {} has only {} of {ACT_PALETTE_SIZE} bytes, its palette block is incomplete",
			"warning:".yellow(),
			short.path.display(),
			short.size,
		);
	}

	if summary.palette_count() > MAX_CONTAINER_PALETTES {
		eprintln!(
			"{} {} palettes packed, but .pal4 readers only load up to {MAX_CONTAINER_PALETTES}",
			"warning:".yellow(),
			summary.palette_count(),
		);
	}

	if summary.palette_count() == 0 {
		eprintln!("NOTE: {} contains no .act files!", folder.display());
	}

	println!("Packed {} palettes into {}", summary.palette_count(), output.display());

	match fs::metadata(&output) {
		Ok(m) => {
			let size = humansize::format_size(m.len(), DECIMAL);
			println!("Output file size: {size}");
		}
		Err(err) => {
			eprintln!("Can't determine output file size: {err}");
		}
	}

	ExitCode::SUCCESS
}
