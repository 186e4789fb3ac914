// cargo fuzz run encode corpus/encode -- -timeout=30

#![no_main]

use libfuzzer_sys::fuzz_target;

use rawgif::{Colormap, Encoder};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // width * height is always a multiple of 32
    let width = u16::from(data[0] % 16 + 1) * 8;
    let height = u16::from(data[1] % 8 + 1) * 4;
    let image_sz = usize::from(width) * usize::from(height);
    let pixels: Vec<u8> = data[2..].iter().map(|b| b % 32).collect();
    let frames: Vec<&[u8]> = pixels.chunks_exact(image_sz).collect();
    let colormap = Colormap::grayscale(32).unwrap();
    let mut enc = Encoder::init(width, height, frames.len(), &colormap).unwrap();
    for frame in &frames {
        enc.add_frame(frame).unwrap();
    }
    let gif = enc.finalize();
    assert_eq!(gif.len(), rawgif::capacity(width, height, frames.len()));
});
