pub mod pal4;
pub mod pal_act;
pub mod palette;

pub const MAX_PALETTE_COLORS: usize = 256;

/// Size of a raw .act color table, without the optional footer.
pub const ACT_PALETTE_SIZE: usize = MAX_PALETTE_COLORS * 3;

/// Size of a single palette block inside a .pal4 container.
pub const PAL4_PALETTE_SIZE: usize = MAX_PALETTE_COLORS * 4;

pub const PAL4_HEADER_SIZE: usize = 4;

/// Most palettes a .pal4 consumer will load from one container.
pub const MAX_CONTAINER_PALETTES: usize = 64;
