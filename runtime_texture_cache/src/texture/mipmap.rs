/// CPU mip chain generation for repaint uploads

use crate::texture::ImageData;

/// Maximum number of mip levels for the given dimensions
///
/// `floor(log2(max(width, height))) + 1`
pub fn max_mip_levels(width: u32, height: u32) -> u32 {
    let largest = width.max(height).max(1);
    u32::BITS - largest.leading_zeros()
}

/// Build a mip chain of `levels` images from `source`
///
/// Level 0 is a copy of the source. Each further level halves both
/// dimensions (never below 1) using a 2x2 box filter; odd edges reuse the
/// last row/column. `levels` is clamped to `1..=max_mip_levels`.
pub fn generate_mip_levels(source: &ImageData, levels: u32) -> Vec<ImageData> {
    let levels = levels.clamp(1, max_mip_levels(source.width(), source.height()));

    let mut chain = Vec::with_capacity(levels as usize);
    chain.push(source.clone());

    for _ in 1..levels {
        let next = match chain.last() {
            Some(previous) => downsample(previous),
            None => break,
        };
        chain.push(next);
    }

    chain
}

fn downsample(src: &ImageData) -> ImageData {
    let src_w = src.width() as usize;
    let src_h = src.height() as usize;
    let dst_w = (src_w / 2).max(1);
    let dst_h = (src_h / 2).max(1);

    let bpp = ImageData::BYTES_PER_PIXEL;
    let pixels = src.pixels();
    let mut out = Vec::with_capacity(dst_w * dst_h * bpp);

    for y in 0..dst_h {
        let y0 = (y * 2).min(src_h - 1);
        let y1 = (y * 2 + 1).min(src_h - 1);
        for x in 0..dst_w {
            let x0 = (x * 2).min(src_w - 1);
            let x1 = (x * 2 + 1).min(src_w - 1);
            for channel in 0..bpp {
                let sum: u32 = [(x0, y0), (x1, y0), (x0, y1), (x1, y1)]
                    .iter()
                    .map(|&(sx, sy)| pixels[(sy * src_w + sx) * bpp + channel] as u32)
                    .sum();
                out.push(((sum + 2) / 4) as u8);
            }
        }
    }

    ImageData::from_derived(dst_w as u32, dst_h as u32, out)
}

#[cfg(test)]
#[path = "mipmap_tests.rs"]
mod tests;
