use std::fmt::{Display, Formatter};

pub const ALPHA_TRANSPARENT: u8 = 0x00;
pub const ALPHA_OPAQUE: u8 = 0xFF;

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rgba {
	pub color: Color,
	pub a: u8,
}

impl Rgba {
	pub fn new(color: Color, a: u8) -> Self {
		Self { color, a }
	}

	/// Alpha doubles as a transparency flag: palette index 0 is the transparent color.
	pub fn for_index(color: Color, index: usize) -> Self {
		let a = if index == 0 { ALPHA_TRANSPARENT } else { ALPHA_OPAQUE };
		Self { color, a }
	}

	pub fn is_transparent(&self) -> bool {
		self.a == ALPHA_TRANSPARENT
	}
}

impl From<[u8; 4]> for Rgba {
	fn from(v: [u8; 4]) -> Self {
		Self {
			color: Color::from([v[0], v[1], v[2]]),
			a: v[3],
		}
	}
}

impl Display for Rgba {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}{:02X}", self.color, self.a)
	}
}

#[derive(Debug)]
pub enum PaletteError {
	InvalidBinaryData { position: usize, msg: String },
	TooManyPalettes(usize),
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::InvalidBinaryData { position, msg } => write!(f, "Invalid data at byte {position:#X}: {msg}"),
			PaletteError::TooManyPalettes(n) => write!(f, "{n} palettes don't fit into a 32-bit container header"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}
