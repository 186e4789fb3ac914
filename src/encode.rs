// encode.rs
//
// Copyright (c) 2026  Douglas Lau
//
use crate::block::*;
use crate::buffer::FixedBuf;
use crate::error::{Error, Result};
use crate::palette::Colormap;
use crate::plan::checked_capacity;
use pix::gray::Gray8;
use pix::Raster;

/// Default frame delay, in centiseconds
const DEFAULT_DELAY_TIME_CS: u16 = 4;

/// Builder for an [Encoder] with non-default settings.
///
/// None of the settings change the size of any block, so the planned
/// [capacity] is the same as for [Encoder::init].
///
/// ```
/// use rawgif::{Builder, Colormap};
///
/// let colormap = Colormap::grayscale(32)?;
/// let enc = Builder::new(8, 4, 2)
///     .with_delay_time_cs(10)
///     .with_loop_count(3)
///     .init(&colormap)?;
/// assert_eq!(enc.frames_remaining(), 2);
/// # Ok::<(), rawgif::Error>(())
/// ```
///
/// [capacity]: fn.capacity.html
/// [Encoder]: struct.Encoder.html
/// [Encoder::init]: struct.Encoder.html#method.init
#[derive(Clone, Debug)]
pub struct Builder {
    width: u16,
    height: u16,
    num_frames: usize,
    delay_time_cs: u16,
    loop_count: u16,
}

/// Animated GIF encoder writing into a buffer sized up front.
///
/// The sequence is always [init], one [add_frame] per planned frame, then
/// [finalize]:
///
/// ```
/// use rawgif::{Colormap, Encoder};
///
/// let colormap = Colormap::grayscale(32)?;
/// let mut enc = Encoder::init(8, 8, 2, &colormap)?;
/// enc.add_frame(&[0; 64])?;
/// enc.add_frame(&[31; 64])?;
/// let gif = enc.finalize();
/// assert_eq!(&gif[..6], b"GIF89a");
/// assert_eq!(gif.len(), rawgif::capacity(8, 8, 2));
/// # Ok::<(), rawgif::Error>(())
/// ```
///
/// [add_frame]: struct.Encoder.html#method.add_frame
/// [finalize]: struct.Encoder.html#method.finalize
/// [init]: struct.Encoder.html#method.init
#[derive(Debug)]
pub struct Encoder {
    /// Output buffer
    buf: FixedBuf,
    /// Screen width
    width: u16,
    /// Screen height
    height: u16,
    /// Number of frames planned
    num_frames: usize,
    /// Number of frames written
    frames_written: usize,
    /// Number of colors in colormap
    num_colors: usize,
    /// Bits needed to address all colors
    lzw_bits: u8,
    /// Delay between frames
    delay_time_cs: u16,
}

impl Builder {
    /// Create a new builder for a screen size and planned frame count
    pub fn new(width: u16, height: u16, num_frames: usize) -> Self {
        Builder {
            width,
            height,
            num_frames,
            delay_time_cs: DEFAULT_DELAY_TIME_CS,
            loop_count: 0,
        }
    }

    /// Set the delay after each frame, in centiseconds
    pub fn with_delay_time_cs(mut self, delay_time_cs: u16) -> Self {
        self.delay_time_cs = delay_time_cs;
        self
    }

    /// Set the animation loop count (zero means loop forever)
    pub fn with_loop_count(mut self, loop_count: u16) -> Self {
        self.loop_count = loop_count;
        self
    }

    /// Allocate the buffer and write the file header.
    ///
    /// Writes the signature, logical screen descriptor, global color
    /// table and looping extension.
    ///
    /// * `colormap` Colormap to install as global color table.
    pub fn init(self, colormap: &Colormap) -> Result<Encoder> {
        colormap.validate()?;
        if self.width == 0 || self.height == 0 {
            return Err(Error::UnsupportedDimensions);
        }
        let cap = checked_capacity(self.width, self.height, self.num_frames)
            .ok_or(Error::CapacityOverflow)?;
        debug!(
            "init {}x{}, {} frames, {} colors: {} bytes",
            self.width,
            self.height,
            self.num_frames,
            colormap.len(),
            cap
        );
        let mut buf = FixedBuf::with_capacity(cap);
        Header::default().format(&mut buf);
        LogicalScreenDesc::new(self.width, self.height).format(&mut buf);
        GlobalColorTable::with_colors(colormap.colors()).format(&mut buf);
        Application::with_loop_count(self.loop_count).format(&mut buf);
        Ok(Encoder {
            buf,
            width: self.width,
            height: self.height,
            num_frames: self.num_frames,
            frames_written: 0,
            num_colors: colormap.len(),
            lzw_bits: colormap.lzw_bits(),
            delay_time_cs: self.delay_time_cs,
        })
    }
}

impl Encoder {
    /// Allocate the buffer and write the file header, with default settings
    /// (4 centisecond delay, loop forever).
    ///
    /// * `width` Screen width, in pixels.
    /// * `height` Screen height, in pixels.
    /// * `num_frames` Number of frames which will be added.
    /// * `colormap` Colormap to install as global color table.
    ///
    /// Fails with `InvalidColormap` unless the colormap byte length is a
    /// multiple of 3 and 32, with at most 128 colors.
    pub fn init(
        width: u16,
        height: u16,
        num_frames: usize,
        colormap: &Colormap,
    ) -> Result<Self> {
        Builder::new(width, height, num_frames).init(colormap)
    }

    /// Get the screen width
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get the screen height
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get the number of bits needed to address every color
    pub fn lzw_bits(&self) -> u8 {
        self.lzw_bits
    }

    /// Get the buffer capacity, in bytes
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Get the number of bytes written
    pub fn position(&self) -> usize {
        self.buf.position()
    }

    /// Get the number of frames added
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Get the number of frames which can still be added
    pub fn frames_remaining(&self) -> usize {
        self.num_frames.saturating_sub(self.frames_written)
    }

    /// Get the number of pixels in one frame
    fn image_sz(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Add one frame of palette indices.
    ///
    /// * `frame` Row-major indices, exactly `width * height` bytes.
    ///
    /// Nothing is written unless all checks pass.
    ///
    /// # Panics
    ///
    /// Adding more frames than were planned at `init` overflows the buffer.
    pub fn add_frame(&mut self, frame: &[u8]) -> Result<()> {
        let image_sz = self.image_sz();
        if image_sz % CHUNK_LEN != 0 {
            return Err(Error::UnsupportedDimensions);
        }
        if frame.len() != image_sz {
            return Err(Error::FrameSizeMismatch);
        }
        let num_colors = self.num_colors;
        if let Some(idx) = frame.iter().find(|&&i| usize::from(i) >= num_colors)
        {
            warn!("color index {} outside {} colors", idx, self.num_colors);
            return Err(Error::InvalidColorIndex);
        }
        assert!(
            self.frames_written < self.num_frames,
            "more than {} planned frames",
            self.num_frames
        );
        GraphicControl::with_delay_time_cs(self.delay_time_cs)
            .format(&mut self.buf);
        ImageDesc::new(self.width, self.height).format(&mut self.buf);
        ImageData::with_data(frame).format(&mut self.buf);
        self.frames_written += 1;
        trace!(
            "frame {} of {}: {} bytes written",
            self.frames_written,
            self.num_frames,
            self.buf.position()
        );
        Ok(())
    }

    /// Add one frame from an indexed raster
    pub fn add_raster(&mut self, raster: &Raster<Gray8>) -> Result<()> {
        if raster.width() != u32::from(self.width)
            || raster.height() != u32::from(self.height)
        {
            return Err(Error::FrameSizeMismatch);
        }
        self.add_frame(raster.as_u8_slice())
    }

    /// Write the trailer and get the finished file, trimmed to the bytes
    /// actually written.
    pub fn finalize(mut self) -> Vec<u8> {
        Trailer::default().format(&mut self.buf);
        let slack = self.buf.remaining();
        if slack > 0 {
            warn!(
                "{} of {} frames written; trimming {} bytes",
                self.frames_written, self.num_frames, slack
            );
        }
        self.buf.into_vec()
    }
}

impl Header {
    fn format(&self, buf: &mut FixedBuf) {
        buf.put(BlockCode::Header_.signature());
    }
}

impl LogicalScreenDesc {
    fn format(&self, buf: &mut FixedBuf) {
        buf.put_u16_le(self.screen_width());
        buf.put_u16_le(self.screen_height());
        buf.put_u8(self.flags());
        buf.put_u8(self.background_color_idx());
        buf.put_u8(self.pixel_aspect_ratio());
    }
}

impl GlobalColorTable<'_> {
    fn format(&self, buf: &mut FixedBuf) {
        for chunk in self.colors().chunks_exact(CHUNK_LEN) {
            buf.put(chunk);
        }
        buf.put_zeros(self.padding());
    }
}

impl Application {
    fn format(&self, buf: &mut FixedBuf) {
        buf.put(BlockCode::Extension_.signature());
        buf.put_u8(ExtensionCode::Application_.into());
        buf.put_u8(Self::APP_ID.len() as u8); // block size
        buf.put(Self::APP_ID);
        buf.put_u8(3); // block size
        buf.put_u8(1); // sub-block ID
        buf.put_u16_le(self.loop_count());
        buf.put_u8(0); // block size
    }
}

impl GraphicControl {
    fn format(&self, buf: &mut FixedBuf) {
        buf.put(BlockCode::Extension_.signature());
        buf.put_u8(ExtensionCode::GraphicControl_.into());
        buf.put_u8(4); // block size
        buf.put_u8(self.flags());
        buf.put_u16_le(self.delay_time_cs());
        buf.put_u8(self.transparent_color_idx());
        buf.put_u8(0); // block size
    }
}

impl ImageDesc {
    fn format(&self, buf: &mut FixedBuf) {
        buf.put(BlockCode::ImageDesc_.signature());
        buf.put_u16_le(self.left());
        buf.put_u16_le(self.top());
        buf.put_u16_le(self.width());
        buf.put_u16_le(self.height());
        buf.put_u8(self.flags());
    }
}

impl ImageData<'_> {
    /// Every chunk starts with a clear code, so each index is a literal
    /// code and the dictionary never grows past 8-bit codes.
    fn format(&self, buf: &mut FixedBuf) {
        buf.put_u8(self.min_code_size());
        for chunk in self.chunks() {
            buf.put_u8(SUB_BLOCK_LEN); // block size
            buf.put_u8(CLEAR_CODE);
            buf.put(chunk);
        }
        buf.put_u8(1); // block size
        buf.put_u8(END_CODE);
        buf.put_u8(0); // block size
    }
}

impl Trailer {
    fn format(&self, buf: &mut FixedBuf) {
        buf.put(BlockCode::Trailer_.signature());
    }
}
