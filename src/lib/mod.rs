pub mod converter;
pub mod palettes;
