use rawgif::{Builder, Colormap, Encoder, Error};

/// Decode all frames as palette indices
fn decode_indexed(gif: &[u8]) -> (u16, u16, Vec<Vec<u8>>) {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::Indexed);
    let mut decoder = options.read_info(gif).unwrap();
    let (width, height) = (decoder.width(), decoder.height());
    let mut frames = vec![];
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        assert_eq!(frame.width, width);
        assert_eq!(frame.height, height);
        assert_eq!(frame.dispose, gif::DisposalMethod::Keep);
        assert_eq!(frame.transparent, None);
        frames.push(frame.buffer.to_vec());
    }
    (width, height, frames)
}

fn encode(w: u16, h: u16, colormap: &Colormap, frames: &[Vec<u8>]) -> Vec<u8> {
    let mut enc = Encoder::init(w, h, frames.len(), colormap).unwrap();
    for frame in frames {
        enc.add_frame(frame).unwrap();
    }
    enc.finalize()
}

#[test]
fn alternating() {
    let colormap = Colormap::grayscale(32).unwrap();
    let frame: Vec<u8> = (0..1024).map(|i| (i % 2) as u8).collect();
    let gif = encode(32, 32, &colormap, &[frame.clone()]);
    assert_eq!(gif.len(), rawgif::capacity(32, 32, 1));
    let (width, height, frames) = decode_indexed(&gif);
    assert_eq!((width, height), (32, 32));
    assert_eq!(frames, vec![frame]);
}

#[test]
fn rgba() {
    let colormap = Colormap::grayscale(32).unwrap();
    let frame: Vec<u8> = (0..256).map(|i| (i % 32) as u8).collect();
    let gif = encode(16, 16, &colormap, &[frame.clone()]);
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options.read_info(&gif[..]).unwrap();
    let decoded = decoder.read_next_frame().unwrap().unwrap();
    assert_eq!(decoded.buffer.len(), 256 * 4);
    for (idx, px) in frame.iter().zip(decoded.buffer.chunks_exact(4)) {
        let v = idx * 8;
        assert_eq!(px, &[v, v, v, 0xFF]);
    }
}

#[test]
fn three_frames() {
    let colormap = Colormap::grayscale(128).unwrap();
    let frames: Vec<Vec<u8>> = (0..3)
        .map(|f| (0..32).map(|i| (i * 4 + f) as u8).collect())
        .collect();
    let gif = encode(8, 4, &colormap, &frames);
    assert_eq!(gif.len(), 585);
    let (_, _, decoded) = decode_indexed(&gif);
    assert_eq!(decoded, frames);
}

#[test]
fn planned_size() {
    let colormap = Colormap::grayscale(64).unwrap();
    for &(w, h, n) in &[(32, 32, 1), (64, 64, 3), (128, 1, 2), (48, 40, 5)] {
        let frames: Vec<Vec<u8>> = (0..n)
            .map(|f| {
                (0..usize::from(w) * usize::from(h))
                    .map(|i| ((i * 7 + f) % 64) as u8)
                    .collect()
            })
            .collect();
        let gif = encode(w, h, &colormap, &frames);
        assert_eq!(gif.len(), rawgif::capacity(w, h, n));
        let (width, height, decoded) = decode_indexed(&gif);
        assert_eq!((width, height), (w, h));
        assert_eq!(decoded, frames);
    }
}

#[test]
fn global_palette() {
    let colormap = Colormap::grayscale(32).unwrap();
    let gif = encode(8, 4, &colormap, &[vec![0; 32]]);
    let decoder = gif::DecodeOptions::new().read_info(&gif[..]).unwrap();
    let palette = decoder.global_palette().unwrap();
    assert_eq!(palette.len(), 128 * 3);
    assert_eq!(&palette[..96], colormap.colors());
    assert!(palette[96..].iter().all(|&b| b == 0));
}

#[test]
fn delay_and_repeat() {
    let colormap = Colormap::grayscale(32).unwrap();
    let mut enc = Builder::new(8, 4, 2)
        .with_delay_time_cs(25)
        .with_loop_count(3)
        .init(&colormap)
        .unwrap();
    enc.add_frame(&[1; 32]).unwrap();
    enc.add_frame(&[2; 32]).unwrap();
    let gif = enc.finalize();
    let mut decoder = gif::DecodeOptions::new().read_info(&gif[..]).unwrap();
    let mut n_frames = 0;
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        assert_eq!(frame.delay, 25);
        n_frames += 1;
    }
    assert_eq!(n_frames, 2);
    assert_eq!(decoder.repeat(), gif::Repeat::Finite(3));
}

#[test]
fn loop_forever() {
    let colormap = Colormap::grayscale(32).unwrap();
    let gif = encode(8, 4, &colormap, &[vec![3; 32]]);
    let mut decoder = gif::DecodeOptions::new().read_info(&gif[..]).unwrap();
    let frame = decoder.read_next_frame().unwrap().unwrap();
    assert_eq!(frame.delay, 4);
    while decoder.read_next_frame().unwrap().is_some() {}
    assert_eq!(decoder.repeat(), gif::Repeat::Infinite);
}

#[test]
fn fewer_frames_than_planned() {
    let colormap = Colormap::grayscale(32).unwrap();
    let mut enc = Encoder::init(8, 4, 10, &colormap).unwrap();
    enc.add_frame(&[5; 32]).unwrap();
    let gif = enc.finalize();
    assert_eq!(gif.len(), rawgif::capacity(8, 4, 1));
    let (_, _, decoded) = decode_indexed(&gif);
    assert_eq!(decoded, vec![vec![5; 32]]);
}

#[test]
fn rejected_frame_leaves_no_trace() {
    let colormap = Colormap::grayscale(32).unwrap();
    let mut enc = Encoder::init(8, 4, 1, &colormap).unwrap();
    assert_eq!(enc.add_frame(&[0; 31]), Err(Error::FrameSizeMismatch));
    assert_eq!(enc.add_frame(&[40; 32]), Err(Error::InvalidColorIndex));
    enc.add_frame(&[7; 32]).unwrap();
    let gif = enc.finalize();
    assert_eq!(gif.len(), rawgif::capacity(8, 4, 1));
    let (_, _, decoded) = decode_indexed(&gif);
    assert_eq!(decoded, vec![vec![7; 32]]);
}
