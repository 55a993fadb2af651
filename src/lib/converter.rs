use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::palettes::pal4::{write_header, write_palette};
use crate::palettes::pal_act::ActPalette;
use crate::palettes::palette::Rgba;
use crate::palettes::{ACT_PALETTE_SIZE, PAL4_HEADER_SIZE};

pub const PALETTE_EXTENSION: &str = "act";
pub const CONTAINER_EXTENSION: &str = "pal4";

const FALLBACK_BASENAME: &str = "palettes";

#[derive(Clone, Copy, Debug)]
pub struct ConvertOptions {
	/// Order input files by name. Without this the platform's directory listing order is used.
	pub sorted: bool,
	pub debug: bool,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self { sorted: true, debug: false }
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShortPalette {
	pub path: PathBuf,
	pub size: usize,
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct ConversionSummary {
	pub inputs: Vec<PathBuf>,
	pub short_palettes: Vec<ShortPalette>,
	pub bytes_written: usize,
}

impl ConversionSummary {
	pub fn palette_count(&self) -> usize {
		self.inputs.len()
	}
}

fn is_palette_file(path: &Path) -> bool {
	let name = match path.file_name() {
		Some(n) => n,
		None => return false,
	};

	// mirrors the shell glob "*.act", which never matches dotfiles
	if name.as_encoded_bytes().starts_with(b".") {
		return false;
	}

	// unlike a POSIX glob, "a.ACT" matches too
	path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case(PALETTE_EXTENSION))
}

/// Lists the .act files directly inside `dir`.
pub fn find_palette_files<P: AsRef<Path>>(dir: P, sorted: bool) -> Result<Vec<PathBuf>> {
	let dir = dir.as_ref();
	let entries = fs::read_dir(dir).with_context(|| format!("Can't read directory {}", dir.display()))?;

	let mut files = vec![];
	for entry in entries {
		let entry = entry.with_context(|| format!("Can't list directory {}", dir.display()))?;
		let path = entry.path();
		if !is_palette_file(&path) {
			continue;
		}

		// follows symlinks, like a glob would
		if !path.is_file() {
			continue;
		}

		files.push(path);
	}

	if sorted {
		files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
	}

	Ok(files)
}

/// `<directory name>.pal4`, relative to the working directory.
pub fn default_output_path<P: AsRef<Path>>(dir: P) -> PathBuf {
	let dir = dir.as_ref();

	let basename = dir.file_name()
		.map(|n| n.to_os_string())
		.or_else(|| {
			// ".", ".." and "/" have no file name of their own
			dir.canonicalize().ok().and_then(|p| p.file_name().map(|n| n.to_os_string()))
		})
		.unwrap_or_else(|| FALLBACK_BASENAME.into());

	let mut name = basename;
	name.push(".");
	name.push(CONTAINER_EXTENSION);
	PathBuf::from(name)
}

/// Writes a .pal4 container made of the given .act files, in the order given.
pub fn write_container<W: Write>(w: &mut W, inputs: &[PathBuf], debug: bool) -> Result<ConversionSummary> {
	let mut summary = ConversionSummary::default();

	write_header(w, inputs.len()).context("Failed to write container header")?;
	summary.bytes_written += PAL4_HEADER_SIZE;

	for (i, path) in inputs.iter().enumerate() {
		let pal = ActPalette::from_act_file(path)
			.with_context(|| format!("Failed to read palette {}", path.display()))?;

		if debug {
			match pal.colors().first() {
				Some(c) => println!("[{i}] {} ({} bytes, transparent {})", path.display(), pal.as_bytes().len(), Rgba::for_index(*c, 0)),
				None => println!("[{i}] {} ({} bytes)", path.display(), pal.as_bytes().len()),
			}
		}

		if !pal.is_complete() {
			summary.short_palettes.push(ShortPalette {
				path: path.clone(),
				size: pal.as_bytes().len(),
			});
		}

		summary.bytes_written += write_palette(w, &pal)
			.with_context(|| format!("Failed to write palette {}", path.display()))?;
		summary.inputs.push(path.clone());
	}

	Ok(summary)
}

/// Converts every .act file in `dir` into a single .pal4 container at `output`.
///
/// An existing output file is overwritten. If anything fails halfway, the partially written
/// file is left behind as-is.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(dir: P, output: Q, options: ConvertOptions) -> Result<ConversionSummary> {
	let dir = dir.as_ref();
	let output = output.as_ref();

	let inputs = find_palette_files(dir, options.sorted)?;

	if options.debug {
		println!("Found {} .{PALETTE_EXTENSION} files in {}", inputs.len(), dir.display());
		if inputs.iter().any(|p| fs::metadata(p).is_ok_and(|m| m.len() as usize > ACT_PALETTE_SIZE)) {
			println!("Bytes past the first {ACT_PALETTE_SIZE} of a palette file are ignored");
		}
	}

	let f = File::create(output).with_context(|| format!("Can't create output file {}", output.display()))?;
	let mut w = BufWriter::new(f);

	let summary = write_container(&mut w, &inputs, options.debug)?;
	w.flush().with_context(|| format!("Failed to write {}", output.display()))?;

	Ok(summary)
}
