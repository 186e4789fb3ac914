// block.rs
//
// Copyright (c) 2026  Douglas Lau
//
//! GIF89a blocks written by the encoder
//!
//! Every block here has a size known before it is written, so the
//! capacity planner can be exact.

/// Number of pixels (and colormap bytes) handled per chunk
pub const CHUNK_LEN: usize = 32;

/// LZW minimum code size for one-byte literal codes
pub const LITERAL_CODE_SIZE: u8 = 7;

/// Largest number of colors addressable with a literal code
pub const MAX_COLORS: usize = 1 << LITERAL_CODE_SIZE;

/// Bytes per color table entry
pub(crate) const CHANNELS: usize = 3;

/// Global color table size, in bytes
pub(crate) const TABLE_BYTES: usize = MAX_COLORS * CHANNELS;

/// LZW clear code (resets decoder dictionary)
pub(crate) const CLEAR_CODE: u8 = 1 << LITERAL_CODE_SIZE;

/// LZW end of information code
pub(crate) const END_CODE: u8 = CLEAR_CODE + 1;

/// Length of a pixel data sub-block (clear code + one chunk)
pub(crate) const SUB_BLOCK_LEN: u8 = 1 + CHUNK_LEN as u8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum BlockCode {
    Header_,
    LogicalScreenDesc_,
    GlobalColorTable_,
    Extension_,
    ImageDesc_,
    Trailer_,
}

impl BlockCode {
    pub fn signature(&self) -> &'static [u8] {
        use self::BlockCode::*;
        match self {
            Header_ => b"GIF89a",
            ImageDesc_ => b",", // (0x2C) Image separator
            Extension_ => b"!", // (0x21) Extension introducer
            Trailer_ => b";",   // (0x3B) GIF trailer
            _ => &[],
        }
    }
    pub const fn size(&self) -> usize {
        use self::BlockCode::*;
        match self {
            Header_ => 6,
            LogicalScreenDesc_ => 7,
            GlobalColorTable_ => TABLE_BYTES,
            ImageDesc_ => 10,
            Trailer_ => 1,
            Extension_ => 2, // +sub-blocks
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum ExtensionCode {
    GraphicControl_,
    Application_,
}

impl From<ExtensionCode> for u8 {
    fn from(t: ExtensionCode) -> Self {
        use self::ExtensionCode::*;
        match t {
            GraphicControl_ => 0xF9,
            Application_ => 0xFF,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct Header {}

#[derive(Debug)]
pub(crate) struct LogicalScreenDesc {
    screen_width: u16,
    screen_height: u16,
}

impl LogicalScreenDesc {
    const COLOR_TABLE_PRESENT: u8 = 0b1000_0000;
    const COLOR_RESOLUTION: u8 = 0b0111_0000;
    const COLOR_TABLE_SIZE: u8 = 0b0000_0111;

    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        LogicalScreenDesc {
            screen_width,
            screen_height,
        }
    }
    pub fn screen_width(&self) -> u16 {
        self.screen_width
    }
    pub fn screen_height(&self) -> u16 {
        self.screen_height
    }
    /// Flags for a sorted=0, 128-entry global color table
    pub fn flags(&self) -> u8 {
        // table length is 2 << size
        let size = LITERAL_CODE_SIZE - 1;
        Self::COLOR_TABLE_PRESENT
            | Self::COLOR_RESOLUTION
            | (size & Self::COLOR_TABLE_SIZE)
    }
    pub fn background_color_idx(&self) -> u8 {
        0
    }
    pub fn pixel_aspect_ratio(&self) -> u8 {
        0
    }
}

#[derive(Debug)]
pub(crate) struct GlobalColorTable<'a> {
    colors: &'a [u8],
}

impl<'a> GlobalColorTable<'a> {
    pub fn with_colors(colors: &'a [u8]) -> Self {
        debug_assert_eq!(colors.len() % CHUNK_LEN, 0);
        debug_assert!(colors.len() <= TABLE_BYTES);
        GlobalColorTable { colors }
    }
    pub fn colors(&self) -> &[u8] {
        self.colors
    }
    /// Number of zero bytes needed to fill out the table
    pub fn padding(&self) -> usize {
        TABLE_BYTES - self.colors.len()
    }
}

#[derive(Debug)]
pub(crate) struct Application {
    loop_count: u16,
}

impl Application {
    pub const APP_ID: &'static [u8; 11] = b"NETSCAPE2.0";

    pub fn with_loop_count(loop_count: u16) -> Self {
        Application { loop_count }
    }
    /// Number of times to loop animation (zero means loop forever)
    pub fn loop_count(&self) -> u16 {
        self.loop_count
    }
    pub const fn size() -> usize {
        // app ID sub-block, loop sub-block, terminator
        BlockCode::Extension_.size() + 1 + Self::APP_ID.len() + 4 + 1
    }
}

#[derive(Debug)]
pub(crate) struct GraphicControl {
    delay_time_cs: u16, // delay in centiseconds (hundredths of a second)
}

impl GraphicControl {
    const DISPOSAL_METHOD: u8 = 0b0001_1100;
    /// Disposal method 1: leave frame in place
    const DISPOSAL_KEEP: u8 = 1;

    pub fn with_delay_time_cs(delay_time_cs: u16) -> Self {
        GraphicControl { delay_time_cs }
    }
    pub fn flags(&self) -> u8 {
        (Self::DISPOSAL_KEEP << 2) & Self::DISPOSAL_METHOD
    }
    pub fn delay_time_cs(&self) -> u16 {
        self.delay_time_cs
    }
    /// Transparent color index (unused, since transparency flag is clear)
    pub fn transparent_color_idx(&self) -> u8 {
        0xFF
    }
    pub const fn size() -> usize {
        BlockCode::Extension_.size() + 6
    }
}

#[derive(Debug)]
pub(crate) struct ImageDesc {
    width: u16,
    height: u16,
}

impl ImageDesc {
    pub fn new(width: u16, height: u16) -> Self {
        ImageDesc { width, height }
    }
    pub fn left(&self) -> u16 {
        0
    }
    pub fn top(&self) -> u16 {
        0
    }
    pub fn width(&self) -> u16 {
        self.width
    }
    pub fn height(&self) -> u16 {
        self.height
    }
    /// No local color table, not interlaced
    pub fn flags(&self) -> u8 {
        0
    }
}

/// Image data packed as literal LZW codes
#[derive(Debug)]
pub(crate) struct ImageData<'a> {
    data: &'a [u8],
}

impl<'a> ImageData<'a> {
    pub fn with_data(data: &'a [u8]) -> Self {
        debug_assert_eq!(data.len() % CHUNK_LEN, 0);
        ImageData { data }
    }
    pub fn min_code_size(&self) -> u8 {
        LITERAL_CODE_SIZE
    }
    pub fn chunks(&self) -> impl Iterator<Item = &'a [u8]> {
        self.data.chunks_exact(CHUNK_LEN)
    }
    /// Bytes written for an image of `image_sz` pixels
    pub const fn size(image_sz: usize) -> usize {
        let sub_blocks = (image_sz + CHUNK_LEN - 1) / CHUNK_LEN;
        // min code size, sub-blocks, end code sub-block, terminator
        1 + sub_blocks * (1 + SUB_BLOCK_LEN as usize) + 2 + 1
    }
}

#[derive(Debug, Default)]
pub(crate) struct Trailer {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn screen_flags() {
        let b = LogicalScreenDesc::new(32, 16);
        assert_eq!(b.flags(), 0xF6);
        assert_eq!(b.screen_width(), 32);
        assert_eq!(b.screen_height(), 16);
    }

    #[test]
    fn graphic_control_flags() {
        let b = GraphicControl::with_delay_time_cs(4);
        assert_eq!(b.flags(), 0x04);
        assert_eq!(GraphicControl::size(), 8);
    }

    #[test]
    fn codes() {
        assert_eq!(CLEAR_CODE, 0x80);
        assert_eq!(END_CODE, 0x81);
        assert_eq!(SUB_BLOCK_LEN, 0x21);
        assert_eq!(u8::from(ExtensionCode::GraphicControl_), 0xF9);
        assert_eq!(BlockCode::Trailer_.signature(), &[0x3B]);
    }

    #[test]
    fn fixed_sizes() {
        assert_eq!(Application::size(), 19);
        assert_eq!(TABLE_BYTES, 384);
        let fixed = BlockCode::Header_.size()
            + BlockCode::LogicalScreenDesc_.size()
            + BlockCode::GlobalColorTable_.size()
            + Application::size()
            + BlockCode::Trailer_.size();
        assert_eq!(fixed, 417);
    }

    #[test]
    fn frame_size() {
        let overhead = GraphicControl::size()
            + BlockCode::ImageDesc_.size()
            + ImageData::size(0);
        assert_eq!(overhead, 22);
        assert_eq!(ImageData::size(32), 4 + 34);
        assert_eq!(ImageData::size(1024), 4 + 34 * 32);
    }

    #[test]
    fn table_padding() {
        let colors = [0; 96];
        let t = GlobalColorTable::with_colors(&colors);
        assert_eq!(t.padding(), 288);
        assert_eq!(t.colors().len(), 96);
    }
}
