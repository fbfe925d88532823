//! Minimal audio files for tests that need lofty to accept a real MP3.

use std::path::Path;

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo, no padding
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];

/// 144 * 128000 / 44100
const FRAME_LEN: usize = 417;

/// `frames` silent MPEG frames with no tag
pub fn silent_mp3(frames: usize) -> Vec<u8> {
    let mut frame = vec![0u8; FRAME_LEN];
    frame[..FRAME_HEADER.len()].copy_from_slice(&FRAME_HEADER);
    frame.repeat(frames)
}

/// Write an untagged ten-frame MP3 to `path`
pub fn write_silent_mp3(path: impl AsRef<Path>) {
    std::fs::write(path, silent_mp3(10)).expect("failed to write MP3 fixture");
}
