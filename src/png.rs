//! Truecolor PNG with exactly one IHDR, IDAT and IEND chunk.

use std::io::Write;

use anyhow::{Context, Result};
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};

use crate::canvas::Canvas;

pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;

pub fn encode(canvas: &Canvas) -> Result<Vec<u8>> {
    let idat = compress(&scanlines(canvas))?;

    let mut png = Vec::with_capacity(SIGNATURE.len() + 3 * 12 + 13 + idat.len());
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(canvas));
    write_chunk(&mut png, b"IDAT", &idat);
    write_chunk(&mut png, b"IEND", &[]);

    tracing::debug!(
        "Encoded {}x{} PNG ({} bytes IDAT)",
        canvas.width,
        canvas.height,
        idat.len()
    );
    Ok(png)
}

fn ihdr(canvas: &Canvas) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&canvas.width.to_be_bytes());
    data[4..8].copy_from_slice(&canvas.height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_RGB;
    // compression, filter and interlace methods stay 0
    data
}

/// Raw image stream: each row is a filter byte followed by RGB triples, top row first.
fn scanlines(canvas: &Canvas) -> Vec<u8> {
    let row_len = 1 + canvas.width as usize * 3;
    let rgb = canvas.color.rgb();
    let mut raw = Vec::with_capacity(row_len * canvas.height as usize);
    for _ in 0..canvas.height {
        raw.push(FILTER_NONE);
        for _ in 0..canvas.width {
            raw.extend_from_slice(&rgb);
        }
    }
    raw
}

fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(raw)
        .context("Failed to compress PNG scanlines")?;
    encoder.finish().context("Failed to finish zlib stream")
}

fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(chunk_type, data).to_be_bytes());
}

/// CRC-32 over the chunk type followed by its data.
pub fn chunk_crc(chunk_type: &[u8; 4], data: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(chunk_type);
    crc.update(data);
    crc.sum()
}
