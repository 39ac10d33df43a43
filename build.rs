//! Build script for mood-display
//!
//! - Renders the compiled-in mood faces into 1-bit packed frames (`faces.rs` in OUT_DIR)
//! - Sets up linker search paths and link arguments for ARM builds

use std::env;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Ellipse, Line, Polyline, PrimitiveStyle};

/// Panel geometry, mirrored from `src/config/display.rs`.
const ROWS: usize = 128;
const COLS: usize = 128;
const COMPRESSED_FRAME_BYTES: usize = ROWS * COLS / 8;

/// Number of frames in the resting (looping) animations.
const IDLE_FRAMES: usize = 8;
/// Number of frames in each transition animation.
const TRANSITION_FRAMES: usize = 4;

/// Mouth curvature per resting mood (-1 frown, 0 flat, +1 smile).
const SAD_CURVE: f32 = -1.0;
const NEUTRAL_CURVE: f32 = 0.0;
const HAPPY_CURVE: f32 = 1.0;

fn main() {
    generate_faces();
    setup_linker();
}

// =============================================================================
// Face Assets
// =============================================================================

#[derive(Clone, Copy)]
enum Eyes {
    Open,
    Half,
    Closed,
}

/// 1-bit canvas packed MSB-first in raster order. `On` is black (bit 1).
struct MonoCanvas {
    bits: [u8; COMPRESSED_FRAME_BYTES],
}

impl MonoCanvas {
    fn new() -> Self {
        Self {
            bits: [0u8; COMPRESSED_FRAME_BYTES],
        }
    }
}

impl OriginDimensions for MonoCanvas {
    fn size(&self) -> Size {
        Size::new(COLS as u32, ROWS as u32)
    }
}

impl DrawTarget for MonoCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= COLS as i32 || point.y >= ROWS as i32 {
                continue;
            }
            let idx = point.y as usize * COLS + point.x as usize;
            let mask = 0x80u8 >> (idx % 8);
            match color {
                BinaryColor::On => self.bits[idx / 8] |= mask,
                BinaryColor::Off => self.bits[idx / 8] &= !mask,
            }
        }
        Ok(())
    }
}

fn render_face(curve: f32, eyes: Eyes) -> [u8; COMPRESSED_FRAME_BYTES] {
    let mut canvas = MonoCanvas::new();
    let ink = PrimitiveStyle::with_stroke(BinaryColor::On, 4);
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);

    Circle::with_center(Point::new(64, 64), 120)
        .into_styled(ink)
        .draw(&mut canvas)
        .ok();

    for center in [Point::new(42, 50), Point::new(86, 50)] {
        match eyes {
            Eyes::Open => {
                Circle::with_center(center, 16).into_styled(fill).draw(&mut canvas).ok();
            }
            Eyes::Half => {
                Ellipse::with_center(center, Size::new(16, 8))
                    .into_styled(fill)
                    .draw(&mut canvas)
                    .ok();
            }
            Eyes::Closed => {
                Line::new(center - Point::new(8, 0), center + Point::new(8, 0))
                    .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 3))
                    .draw(&mut canvas)
                    .ok();
            }
        }
    }

    // Parabolic mouth: corners stay put, the middle dips (smile) or rises (frown)
    let mouth: Vec<Point> = (36..=92)
        .step_by(4)
        .map(|x| {
            let t = (x as f32 - 64.0) / 28.0;
            let y = 90.0 + curve * 12.0 * (1.0 - t * t);
            Point::new(x, y.round() as i32)
        })
        .collect();
    Polyline::new(&mouth).into_styled(ink).draw(&mut canvas).ok();

    canvas.bits
}

fn idle_animation(curve: f32) -> Vec<[u8; COMPRESSED_FRAME_BYTES]> {
    let blink = [
        Eyes::Open,
        Eyes::Open,
        Eyes::Open,
        Eyes::Open,
        Eyes::Open,
        Eyes::Half,
        Eyes::Closed,
        Eyes::Half,
    ];
    debug_assert_eq!(blink.len(), IDLE_FRAMES);
    blink.iter().map(|&eyes| render_face(curve, eyes)).collect()
}

fn transition_animation(from: f32, to: f32) -> Vec<[u8; COMPRESSED_FRAME_BYTES]> {
    (1..=TRANSITION_FRAMES)
        .map(|step| {
            let t = step as f32 / TRANSITION_FRAMES as f32;
            render_face(from + (to - from) * t, Eyes::Open)
        })
        .collect()
}

fn emit_animation(out: &mut String, name: &str, frames: &[[u8; COMPRESSED_FRAME_BYTES]]) {
    writeln!(out, "pub static {name}: [&[u8]; {}] = [", frames.len()).unwrap();
    for frame in frames {
        out.push_str("    &[\n");
        for chunk in frame.chunks(16) {
            out.push_str("        ");
            for byte in chunk {
                write!(out, "0x{byte:02X}, ").unwrap();
            }
            out.push('\n');
        }
        out.push_str("    ],\n");
    }
    out.push_str("];\n\n");
}

fn generate_faces() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let mut out = String::new();
    out.push_str("// Generated by build.rs. Do not edit.\n\n");
    emit_animation(&mut out, "SAD_FRAMES", &idle_animation(SAD_CURVE));
    emit_animation(&mut out, "NEUTRAL_FRAMES", &idle_animation(NEUTRAL_CURVE));
    emit_animation(&mut out, "HAPPY_FRAMES", &idle_animation(HAPPY_CURVE));
    emit_animation(&mut out, "SAD_TO_NEUTRAL_FRAMES", &transition_animation(SAD_CURVE, NEUTRAL_CURVE));
    emit_animation(&mut out, "NEUTRAL_TO_SAD_FRAMES", &transition_animation(NEUTRAL_CURVE, SAD_CURVE));
    emit_animation(&mut out, "NEUTRAL_TO_HAPPY_FRAMES", &transition_animation(NEUTRAL_CURVE, HAPPY_CURVE));
    emit_animation(&mut out, "HAPPY_TO_NEUTRAL_FRAMES", &transition_animation(HAPPY_CURVE, NEUTRAL_CURVE));

    fs::write(out_dir.join("faces.rs"), out).unwrap();
    println!("cargo:rerun-if-changed=build.rs");
}

// =============================================================================
// Linker Setup
// =============================================================================

/// Copy memory.x next to the build output and pass the cortex-m-rt/defmt
/// linker scripts. Host builds (tests, simulator) skip this entirely.
fn setup_linker() {
    if env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default() != "arm" {
        return;
    }

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=memory.x");

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
}
