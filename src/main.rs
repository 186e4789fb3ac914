// main.rs      rawgif command
//
// Copyright (c) 2026  Douglas Lau
//
#![forbid(unsafe_code)]

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use pix::gray::Gray8;
use pix::Raster;
use rawgif::{Builder, Colormap};
use std::error::Error;
use std::fs;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Crate version
const VERSION: &'static str = std::env!("CARGO_PKG_VERSION");

/// Main entry point
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder().format_timestamp(None).init();
    let mut out = StandardStream::stdout(ColorChoice::Always);
    match create_app().get_matches().subcommand() {
        ("plan", Some(matches)) => plan(&mut out, matches)?,
        ("ramp", Some(matches)) => ramp(&mut out, matches)?,
        _ => unreachable!(),
    }
    out.reset()?;
    Ok(())
}

/// Create clap App
fn create_app() -> App<'static, 'static> {
    App::new("rawgif")
        .version(VERSION)
        .setting(AppSettings::GlobalVersion)
        .about("Fixed-buffer GIF assembler")
        .setting(AppSettings::ArgRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("plan")
                .about("Show planned file size")
                .arg(Arg::with_name("width").required(true).help("width"))
                .arg(Arg::with_name("height").required(true).help("height"))
                .arg(
                    Arg::with_name("frames")
                        .required(true)
                        .help("frame count"),
                ),
        )
        .subcommand(
            SubCommand::with_name("ramp")
                .about("Write an animated grayscale ramp")
                .arg(
                    Arg::with_name("width")
                        .short("W")
                        .long("width")
                        .takes_value(true)
                        .default_value("64")
                        .help("width"),
                )
                .arg(
                    Arg::with_name("height")
                        .short("H")
                        .long("height")
                        .takes_value(true)
                        .default_value("64")
                        .help("height"),
                )
                .arg(
                    Arg::with_name("frames")
                        .short("f")
                        .long("frames")
                        .takes_value(true)
                        .default_value("32")
                        .help("frame count"),
                )
                .arg(
                    Arg::with_name("colors")
                        .short("c")
                        .long("colors")
                        .takes_value(true)
                        .default_value("32")
                        .help("colormap size (32, 64, 96 or 128)"),
                )
                .arg(
                    Arg::with_name("delay")
                        .short("d")
                        .long("delay")
                        .takes_value(true)
                        .default_value("4")
                        .help("frame delay (centiseconds)"),
                )
                .arg(
                    Arg::with_name("loop")
                        .short("l")
                        .long("loop")
                        .takes_value(true)
                        .default_value("0")
                        .help("loop count (0: forever)"),
                )
                .arg(Arg::with_name("file").required(true).help("output file")),
        )
}

/// Handle plan subcommand
fn plan(
    out: &mut StandardStream,
    matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
    let width = value_t!(matches, "width", u16).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", u16).unwrap_or_else(|e| e.exit());
    let frames =
        value_t!(matches, "frames", usize).unwrap_or_else(|e| e.exit());
    let mut bold = ColorSpec::new();
    bold.set_fg(Some(Color::White))
        .set_intense(true)
        .set_bold(true);
    let mut red = ColorSpec::new();
    red.set_fg(Some(Color::Red)).set_intense(true);
    out.set_color(&bold)?;
    writeln!(
        out,
        "{}x{}, {} frames: {} bytes",
        width,
        height,
        frames,
        rawgif::capacity(width, height, frames)
    )?;
    if (usize::from(width) * usize::from(height)) % rawgif::CHUNK_LEN != 0 {
        out.set_color(&red)?;
        writeln!(out, "width * height is not a multiple of 32!")?;
    }
    Ok(())
}

/// Handle ramp subcommand
fn ramp(
    out: &mut StandardStream,
    matches: &ArgMatches,
) -> Result<(), Box<dyn Error>> {
    let width = value_t!(matches, "width", u16).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", u16).unwrap_or_else(|e| e.exit());
    let frames =
        value_t!(matches, "frames", usize).unwrap_or_else(|e| e.exit());
    let colors =
        value_t!(matches, "colors", usize).unwrap_or_else(|e| e.exit());
    let delay = value_t!(matches, "delay", u16).unwrap_or_else(|e| e.exit());
    let loop_count =
        value_t!(matches, "loop", u16).unwrap_or_else(|e| e.exit());
    let path = matches.value_of_os("file").ok_or("missing file")?;
    let colormap = Colormap::grayscale(colors)?;
    let mut enc = Builder::new(width, height, frames)
        .with_delay_time_cs(delay)
        .with_loop_count(loop_count)
        .init(&colormap)?;
    for f in 0..frames {
        enc.add_raster(&ramp_raster(width, height, colors, f))?;
    }
    let gif = enc.finalize();
    fs::write(path, &gif)?;
    let mut magenta = ColorSpec::new();
    magenta.set_fg(Some(Color::Magenta));
    out.set_color(&magenta)?;
    write!(out, "{}", path.to_string_lossy())?;
    out.set_color(&ColorSpec::new())?;
    writeln!(out, ": {} frames, {} bytes", frames, gif.len())?;
    Ok(())
}

/// Render one frame of diagonal bands, shifted by frame number
fn ramp_raster(
    width: u16,
    height: u16,
    colors: usize,
    frame: usize,
) -> Raster<Gray8> {
    let mut raster = Raster::with_clear(width.into(), height.into());
    for y in 0..i32::from(height) {
        for x in 0..i32::from(width) {
            let v = (x + y) as usize + frame;
            *raster.pixel_mut(x, y) = Gray8::new((v % colors) as u8);
        }
    }
    raster
}
