// error.rs
//
// Copyright (c) 2026  Douglas Lau
//
use std::fmt;

/// Errors encountered while assembling a GIF
///
/// All of these are caller contract violations.  The encoder is left
/// untouched by a failed call, but the encoding should be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// [Colormap](struct.Colormap.html) length is not a multiple of 3 and
    /// 32, is empty, or has more than 128 colors.
    InvalidColormap,
    /// Screen is empty, or `width * height` is not a multiple of 32.
    UnsupportedDimensions,
    /// Frame length does not equal `width * height`.
    FrameSizeMismatch,
    /// Frame contains an index outside of the colormap.
    InvalidColorIndex,
    /// Planned file size does not fit in memory.
    CapacityOverflow,
}

/// Rawgif result type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, fmt)
    }
}

impl std::error::Error for Error {}
