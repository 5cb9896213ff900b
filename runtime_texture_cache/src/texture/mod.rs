/// Texture module - slot backing textures, image payloads and mip generation

pub mod image_data;
pub mod mipmap;
pub mod slot_texture;

pub use image_data::*;
pub use mipmap::*;
pub use slot_texture::*;

#[cfg(test)]
pub mod mock_texture;
