// plan.rs
//
// Copyright (c) 2026  Douglas Lau
//
use crate::block::{
    Application, BlockCode, GraphicControl, ImageData, CHUNK_LEN,
    SUB_BLOCK_LEN,
};

/// Bytes written once per file (header through trailer)
const FILE_OVERHEAD: usize = BlockCode::Header_.size()
    + BlockCode::LogicalScreenDesc_.size()
    + BlockCode::GlobalColorTable_.size()
    + Application::size()
    + BlockCode::Trailer_.size();

/// Bytes written once per frame, besides pixel sub-blocks
const FRAME_OVERHEAD: usize = GraphicControl::size()
    + BlockCode::ImageDesc_.size()
    + ImageData::size(0);

/// Bytes per pixel sub-block (length byte, clear code, chunk)
const SUB_BLOCK_SZ: usize = 1 + SUB_BLOCK_LEN as usize;

/// Calculate the exact size of a finished GIF, in bytes.
///
/// The result is the capacity an [Encoder] allocates, and also the length
/// of the finalized file once `num_frames` frames have been added.  It is
/// only exact when `width * height` is a multiple of 32; other dimensions
/// are rejected when frames are added.
///
/// ```
/// // one 32-pixel sub-block per frame
/// assert_eq!(rawgif::capacity(8, 4, 3), 585);
/// // 32 sub-blocks per frame
/// assert_eq!(rawgif::capacity(32, 32, 3), 3747);
/// ```
///
/// The result saturates at `usize::MAX` when the size cannot be
/// represented; see [checked_capacity].
///
/// [checked_capacity]: fn.checked_capacity.html
/// [Encoder]: struct.Encoder.html
pub fn capacity(width: u16, height: u16, num_frames: usize) -> usize {
    checked_capacity(width, height, num_frames).unwrap_or(usize::MAX)
}

/// Calculate the exact size of a finished GIF, or `None` on overflow.
pub fn checked_capacity(
    width: u16,
    height: u16,
    num_frames: usize,
) -> Option<usize> {
    let image_sz = usize::from(width) * usize::from(height);
    let sub_blocks = (image_sz + CHUNK_LEN - 1) / CHUNK_LEN;
    let frame_sz = SUB_BLOCK_SZ * sub_blocks + FRAME_OVERHEAD;
    frame_sz
        .checked_mul(num_frames)?
        .checked_add(FILE_OVERHEAD)
}
