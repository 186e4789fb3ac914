// lib.rs      rawgif crate.
//
// Copyright (c) 2026  Douglas Lau
//
//! Animated GIF assembly into a buffer which never grows.
//!
//! The output size is [planned](fn.capacity.html) before anything is
//! written, and every byte is copied directly into place.  No compression
//! is done: each 32-pixel chunk is preceded by an LZW clear code, so every
//! palette index can be stored as a one-byte literal code.  The result is
//! a valid GIF89a file, at the cost of one extra byte per 32 pixels.
//!
//! ## Limitations
//! * `width * height` must be a multiple of 32
//! * The colormap byte length must be a multiple of 32, with at most 128
//!   colors
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod block;
mod buffer;
mod encode;
mod error;
mod palette;
mod plan;

pub use crate::block::{CHUNK_LEN, LITERAL_CODE_SIZE, MAX_COLORS};
pub use crate::encode::{Builder, Encoder};
pub use crate::error::{Error, Result};
pub use crate::palette::{lzw_bits, Colormap};
pub use crate::plan::{capacity, checked_capacity};
