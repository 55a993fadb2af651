use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::palettes::pal_act::ActPalette;
use crate::palettes::palette::{ALPHA_OPAQUE, ALPHA_TRANSPARENT, Color, PaletteError, Rgba};
use crate::palettes::{ACT_PALETTE_SIZE, MAX_CONTAINER_PALETTES, MAX_PALETTE_COLORS, PAL4_HEADER_SIZE, PAL4_PALETTE_SIZE};

// .pal4 layout:
//   u32 LE      palette count
//   [u8; 1024]  per palette, 256 RGBA entries; entry 0 has A=0x00, the rest A=0xFF

pub fn write_header<W: Write>(w: &mut W, count: usize) -> Result<(), PaletteError> {
	let count = u32::try_from(count).map_err(|_| PaletteError::TooManyPalettes(count))?;
	w.write_u32::<LittleEndian>(count)?;
	Ok(())
}

/// Writes one palette block and returns the number of bytes written.
///
/// Every one of the 256 slots gets its alpha byte, even when the source ran out of
/// color bytes early, so a short .act file produces a short block.
pub fn write_palette<W: Write>(w: &mut W, pal: &ActPalette) -> Result<usize, PaletteError> {
	let mut written = 0;
	for i in 0..MAX_PALETTE_COLORS {
		let slot = pal.slot(i);
		w.write_all(slot)?;
		w.write_u8(if i == 0 { ALPHA_TRANSPARENT } else { ALPHA_OPAQUE })?;
		written += slot.len() + 1;
	}
	Ok(written)
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Pal4Palette {
	pub colors: Vec<Rgba>,
}

impl Pal4Palette {
	fn from_block(block: &[u8]) -> Self {
		let colors = block
			.chunks_exact(4)
			.map(|c| Rgba::from([c[0], c[1], c[2], c[3]]))
			.collect();
		Pal4Palette { colors }
	}

	pub fn transparent_index(&self) -> Option<usize> {
		self.colors.iter().position(Rgba::is_transparent)
	}

	/// Drops alpha, giving back the contents of a 768-byte .act file.
	pub fn to_act_bytes(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(ACT_PALETTE_SIZE);
		for c in &self.colors {
			out.extend_from_slice(&[c.color.r, c.color.g, c.color.b]);
		}
		out
	}
}

impl From<&ActPalette> for Pal4Palette {
	fn from(pal: &ActPalette) -> Self {
		let colors = pal.colors()
			.into_iter()
			.enumerate()
			.map(|(i, c)| Rgba::for_index(c, i))
			.collect();
		Pal4Palette { colors }
	}
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Pal4Container {
	pub palettes: Vec<Pal4Palette>,
}

impl Pal4Container {
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Pal4Container, PaletteError> {
		let f = File::open(path)?;
		Self::from_reader(BufReader::new(f))
	}

	pub fn from_reader<R: Read>(mut reader: R) -> Result<Pal4Container, PaletteError> {
		let mut data = Vec::new();
		reader.read_to_end(&mut data)?;

		if data.len() < PAL4_HEADER_SIZE {
			return Err(PaletteError::InvalidBinaryData {
				position: 0,
				msg: format!("Header needs {PAL4_HEADER_SIZE} bytes, found {}", data.len()),
			});
		}

		let count = LittleEndian::read_u32(&data[..PAL4_HEADER_SIZE]) as usize;
		if count > MAX_CONTAINER_PALETTES {
			return Err(PaletteError::InvalidBinaryData {
				position: 0,
				msg: format!("Palette count {count} exceeds {MAX_CONTAINER_PALETTES}"),
			});
		}

		let body = &data[PAL4_HEADER_SIZE..];
		let expected = count * PAL4_PALETTE_SIZE;

		if body.len() < expected {
			return Err(PaletteError::InvalidBinaryData {
				position: data.len(),
				msg: format!("Header announces {count} palettes ({expected} bytes), found only {} bytes", body.len()),
			});
		}
		if body.len() > expected {
			return Err(PaletteError::InvalidBinaryData {
				position: PAL4_HEADER_SIZE + expected,
				msg: format!("{} unexpected bytes after the last palette", body.len() - expected),
			});
		}

		let palettes = body.chunks_exact(PAL4_PALETTE_SIZE).map(Pal4Palette::from_block).collect();
		Ok(Pal4Container { palettes })
	}

	pub fn len(&self) -> usize {
		self.palettes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.palettes.is_empty()
	}

	pub fn colors(&self, index: usize) -> Option<Vec<Color>> {
		self.palettes.get(index).map(|p| p.colors.iter().map(|c| c.color).collect())
	}
}
