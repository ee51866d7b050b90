//! Single-image ICO container holding an uncompressed 32bpp BMP.

use crate::canvas::Canvas;

const HEADER_LEN: u32 = 6;
const DIR_ENTRY_LEN: u32 = 16;
const DIB_HEADER_LEN: u32 = 40;
const BITS_PER_PIXEL: u16 = 32;

/// Offset of the image data from the start of the file.
pub const IMAGE_OFFSET: u32 = HEADER_LEN + DIR_ENTRY_LEN;

/// AND mask bytes per row: one bit per pixel, rows padded to 4 bytes.
fn mask_row_len(width: u32) -> u32 {
    width.div_ceil(32) * 4
}

/// Byte length of the embedded BMP (DIB header, pixels, AND mask).
pub fn image_data_len(canvas: &Canvas) -> u32 {
    let pixels = canvas.width * canvas.height * 4;
    let mask = mask_row_len(canvas.width) * canvas.height;
    DIB_HEADER_LEN + pixels + mask
}

pub fn encode(canvas: &Canvas) -> Vec<u8> {
    let image_len = image_data_len(canvas);
    let mut ico = Vec::with_capacity((IMAGE_OFFSET + image_len) as usize);

    // File header: reserved, type (1 = icon), image count
    ico.extend_from_slice(&0u16.to_le_bytes());
    ico.extend_from_slice(&1u16.to_le_bytes());
    ico.extend_from_slice(&1u16.to_le_bytes());

    // Directory entry. A width/height byte of 0 means 256.
    ico.push((canvas.width % 256) as u8);
    ico.push((canvas.height % 256) as u8);
    ico.push(0); // palette colors
    ico.push(0); // reserved
    // Decoders accept 0 or 1/32 here; the DIB header is authoritative
    ico.extend_from_slice(&1u16.to_le_bytes()); // planes
    ico.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    ico.extend_from_slice(&image_len.to_le_bytes());
    ico.extend_from_slice(&IMAGE_OFFSET.to_le_bytes());

    // BITMAPINFOHEADER; height covers both the XOR and AND masks
    ico.extend_from_slice(&DIB_HEADER_LEN.to_le_bytes());
    ico.extend_from_slice(&(canvas.width as i32).to_le_bytes());
    ico.extend_from_slice(&((canvas.height * 2) as i32).to_le_bytes());
    ico.extend_from_slice(&1u16.to_le_bytes());
    ico.extend_from_slice(&BITS_PER_PIXEL.to_le_bytes());
    ico.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    ico.extend_from_slice(&[0u8; 20]); // size, x/y resolution, palette, important

    // Pixel rows, bottom-up
    let pixel = canvas.color.bgra();
    for _row in (0..canvas.height).rev() {
        for _ in 0..canvas.width {
            ico.extend_from_slice(&pixel);
        }
    }

    // AND mask: all clear, alpha governs transparency
    let mask_len = (mask_row_len(canvas.width) * canvas.height) as usize;
    ico.resize(ico.len() + mask_len, 0);

    tracing::debug!(
        "Encoded {}x{} ICO ({} bytes image data)",
        canvas.width,
        canvas.height,
        image_len
    );
    ico
}
