use std::io::Cursor;

use palettec::palettes::pal4::{Pal4Container, Pal4Palette, write_header, write_palette};
use palettec::palettes::pal_act::ActPalette;
use palettec::palettes::palette::{Color, Rgba};

fn gradient_act() -> Vec<u8> {
	(0..256_usize).flat_map(|i| [i as u8, (255 - i) as u8, (i * 7) as u8]).collect()
}

#[test]
fn act_parsing() {
	let data = gradient_act();
	let pal = ActPalette::from_reader(Cursor::new(&data)).unwrap();

	assert!(pal.is_complete());
	assert_eq!(pal.as_bytes(), data.as_slice());

	let colors = pal.colors();
	assert_eq!(colors.len(), 256);
	assert_eq!(colors[0].to_string(), "#00FF00");
	assert_eq!(colors[255].to_string(), "#FF00F9");
}

#[test]
fn act_footer_is_ignored() {
	let mut data = gradient_act();
	// Photoshop appends a big endian color count and a transparency index
	data.extend_from_slice(&[0x00, 0x10, 0xFF, 0xFF]);

	let pal = ActPalette::from_reader(Cursor::new(&data)).unwrap();
	assert!(pal.is_complete());
	assert_eq!(pal.as_bytes(), &data[..768]);
}

#[test]
fn act_short_file() {
	let data = vec![0xAB_u8; 7];
	let pal = ActPalette::from_reader(Cursor::new(&data)).unwrap();

	assert!(!pal.is_complete());
	assert_eq!(pal.colors().len(), 2);
	assert_eq!(pal.slot(0), &[0xAB, 0xAB, 0xAB]);
	assert_eq!(pal.slot(2), &[0xAB]);
	assert!(pal.slot(3).is_empty());
	assert!(pal.slot(255).is_empty());
}

#[test]
fn pal4_block_alpha() {
	let pal = ActPalette::from_reader(Cursor::new(gradient_act())).unwrap();

	let mut out = vec![];
	let written = write_palette(&mut out, &pal).unwrap();
	assert_eq!(written, 1024);
	assert_eq!(out.len(), 1024);

	assert_eq!(out[3], 0x00);
	assert!(out.chunks_exact(4).skip(1).all(|c| c[3] == 0xFF));

	for (i, quad) in out.chunks_exact(4).enumerate() {
		assert_eq!(&quad[..3], pal.slot(i));
	}
}

#[test]
fn pal4_block_from_short_palette() {
	// two full colors and a single stray byte
	let pal = ActPalette::from_reader(Cursor::new(vec![1, 2, 3, 4, 5, 6, 7])).unwrap();

	let mut out = vec![];
	let written = write_palette(&mut out, &pal).unwrap();

	// 7 color bytes plus one alpha byte for each of the 256 slots
	assert_eq!(written, 7 + 256);
	assert_eq!(&out[..9], &[1, 2, 3, 0x00, 4, 5, 6, 0xFF, 7]);
	assert!(out[9..].iter().all(|b| *b == 0xFF));
}

#[test]
fn pal4_header() {
	let mut out = vec![];
	write_header(&mut out, 0x0102_0304).unwrap();
	assert_eq!(out, vec![0x04, 0x03, 0x02, 0x01]);
}

#[test]
fn pal4_container_parsing() {
	let pal = ActPalette::from_reader(Cursor::new(gradient_act())).unwrap();

	let mut data = vec![];
	write_header(&mut data, 2).unwrap();
	write_palette(&mut data, &pal).unwrap();
	write_palette(&mut data, &pal).unwrap();

	let container = Pal4Container::from_reader(Cursor::new(&data)).unwrap();
	assert_eq!(container.len(), 2);

	let first = &container.palettes[0];
	assert_eq!(first, &Pal4Palette::from(&pal));
	assert_eq!(first.transparent_index(), Some(0));
	assert_eq!(first.colors[0].to_string(), "#00FF0000");
	assert_eq!(first.colors[1].to_string(), "#01FE07FF");
	assert_eq!(first.colors[1], Rgba::new(Color::from(0x01FE07), 0xFF));
	assert_eq!(first.to_act_bytes(), gradient_act());
	assert_eq!(container.colors(1), Some(pal.colors()));
	assert_eq!(container.colors(2), None);
}

#[test]
fn pal4_empty_container() {
	let container = Pal4Container::from_reader(Cursor::new([0_u8; 4])).unwrap();
	assert!(container.is_empty());
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 1028, msg: \"Header announces 2 palettes (2048 bytes), found only 1024 bytes\" }")]
fn pal4_parsing_truncated() {
	let mut data = vec![];
	write_header(&mut data, 2).unwrap();
	data.extend_from_slice(&[0_u8; 1024]);

	Pal4Container::from_reader(Cursor::new(&data)).unwrap();
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 1028, msg: \"3 unexpected bytes after the last palette\" }")]
fn pal4_parsing_trailing_data() {
	let mut data = vec![];
	write_header(&mut data, 1).unwrap();
	data.extend_from_slice(&[0_u8; 1027]);

	Pal4Container::from_reader(Cursor::new(&data)).unwrap();
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 0, msg: \"Header needs 4 bytes, found 2\" }")]
fn pal4_parsing_missing_header() {
	Pal4Container::from_reader(Cursor::new([0_u8; 2])).unwrap();
}

#[test]
fn pal4_container_at_palette_limit() {
	let mut data = vec![];
	write_header(&mut data, 64).unwrap();
	data.extend_from_slice(&vec![0xFF_u8; 64 * 1024]);

	let container = Pal4Container::from_reader(Cursor::new(&data)).unwrap();
	assert_eq!(container.len(), 64);
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 0, msg: \"Palette count 65 exceeds 64\" }")]
fn pal4_parsing_too_many_palettes() {
	let mut data = vec![];
	write_header(&mut data, 65).unwrap();
	data.extend_from_slice(&vec![0xFF_u8; 65 * 1024]);

	Pal4Container::from_reader(Cursor::new(&data)).unwrap();
}

#[test]
#[should_panic(expected = "InvalidBinaryData { position: 0, msg: \"Palette count 4294967295 exceeds 64\" }")]
fn pal4_parsing_huge_count() {
	Pal4Container::from_reader(Cursor::new([0xFF_u8; 4])).unwrap();
}
