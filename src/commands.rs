use clap::Parser;
use const_format::formatcp;
use std::path::PathBuf;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Packs a folder of .act palettes into a single .pal4 file")]
pub(crate) struct Cli {
	#[arg(value_name = "FOLDER_WITH_PALETTES", help = "The folder containing the .act files.")]
	pub folder: Option<PathBuf>,
	#[arg(value_name = "OUTPUT_FILE", help = "The output file. Defaults to <folder name>.pal4 in the current directory.")]
	pub output: Option<PathBuf>,

	#[arg(long, help = "Keeps the directory listing order instead of sorting palettes by file name. (output order then depends on the platform)")]
	pub unsorted: bool,

	#[arg(long, help = "Prints every palette file as it is packed.")]
	pub debug: bool,
}
