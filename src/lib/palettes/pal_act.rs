use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::palettes::palette::{Color, PaletteError};
use crate::palettes::{ACT_PALETTE_SIZE, MAX_PALETTE_COLORS};

// https://github.com/aseprite/aseprite/blob/8323a555007e1db9670b098ce4b1b9c5f8b3d7ad/src/doc/file/act_file.cpp

/// The raw color table of an Adobe .act file.
///
/// Nothing is validated: a short file simply yields fewer bytes, and anything past
/// the 768-byte table (such as the Photoshop color count footer) is never read.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ActPalette {
	data: Vec<u8>,
}

impl ActPalette {
	pub fn from_act_file<P: AsRef<Path>>(path: P) -> Result<ActPalette, PaletteError> {
		let f = File::open(path)?;
		Self::from_reader(BufReader::new(f))
	}

	pub fn from_reader<R: Read>(reader: R) -> Result<ActPalette, PaletteError> {
		let mut data = Vec::with_capacity(ACT_PALETTE_SIZE);
		reader.take(ACT_PALETTE_SIZE as u64).read_to_end(&mut data)?;
		Ok(ActPalette { data })
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.data
	}

	/// True if all 256 colors were present in the file.
	pub fn is_complete(&self) -> bool {
		self.data.len() == ACT_PALETTE_SIZE
	}

	/// The bytes read for color slot `index`. Full slots hold 3 bytes, the slot a short
	/// file ends in holds fewer and every slot after that is empty.
	pub fn slot(&self, index: usize) -> &[u8] {
		let start = (index * 3).min(self.data.len());
		let end = (start + 3).min(self.data.len());
		&self.data[start..end]
	}

	pub fn colors(&self) -> Vec<Color> {
		self.data
			.chunks_exact(3)
			.take(MAX_PALETTE_COLORS)
			.map(|c| Color::from([c[0], c[1], c[2]]))
			.collect()
	}
}
