//! Attendance photo compression. The wire contract only asks for a smaller
//! payload that the server can reverse; deflate keeps the frame bytes
//! intact and needs no image decoding on this side.

use crate::errors::AppResult;
use flate2::Compression;
use flate2::write::DeflateEncoder;
use std::io::Write;

pub fn compress_frame(frame: &[u8], level: u32) -> AppResult<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::new(level.min(9)));
    encoder.write_all(frame)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::DeflateDecoder;
    use std::io::Read;

    #[test]
    fn compression_is_reversible() {
        let frame: Vec<u8> = (0..4096u32).map(|i| (i % 7) as u8).collect();
        let packed = compress_frame(&frame, 6).unwrap();

        let mut decoder = DeflateDecoder::new(&packed[..]);
        let mut back = Vec::new();
        decoder.read_to_end(&mut back).unwrap();
        assert_eq!(back, frame);
    }

    #[test]
    fn repetitive_frames_shrink() {
        let frame = vec![0u8; 64 * 1024];
        let packed = compress_frame(&frame, 6).unwrap();
        assert!(packed.len() < frame.len() / 10);
    }

    #[test]
    fn out_of_range_level_is_clamped() {
        assert!(compress_frame(b"frame", 99).is_ok());
    }
}
