//! Mood display simulator for Windows/Desktop.
//!
//! Runs the real state walker against an emulated ST7735 panel rendered with
//! embedded-graphics-simulator. The walker's command stream is decoded by
//! [`panel::EmulatedPanel`], so what shows up in the window is exactly what the
//! hardware would receive.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Up` / `A` | Raise the target mood one step |
//! | `Down` / `B` | Lower the target mood one step |
//! | `P` | Toggle the ping-pong demo producer |
//!
//! Key repeat is ignored so holding a key moves one step.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]

mod panel;

use std::convert::Infallible;
use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};
use embedded_hal_async::delay::DelayNs;
use mood_display::assets::{self, MAX_MOOD, mood_name};
use mood_display::config::{INITIAL_TARGET_MOOD, PING_PONG_PERIOD_MS, STARTING_MOOD};
use mood_display::producer::{Nudge, PingPong, nudge};
use mood_display::{AnimationEngineConfig, DisplayBus, DisplayWriter, EngineSettings, MoodCell, StateWalker};

use crate::panel::EmulatedPanel;

static DESIRED_MOOD: MoodCell = MoodCell::new(INITIAL_TARGET_MOOD);
static CURRENT_MOOD: MoodCell = MoodCell::new(STARTING_MOOD);

/// The window was closed.
#[derive(Debug)]
struct WindowClosed;

/// Display bus backed by the emulated panel and an SDL window.
///
/// Events are pumped after every completed frame, which is also when the
/// window is refreshed.
struct SimulatorBus {
    panel: EmulatedPanel,
    window: Window,
    demo: Option<(PingPong, Instant)>,
}

impl SimulatorBus {
    fn new(window: Window) -> Self {
        Self {
            panel: EmulatedPanel::new(),
            window,
            demo: None,
        }
    }

    fn on_frame(&mut self) -> Result<(), WindowClosed> {
        self.window.update(self.panel.display());

        for ev in self.window.events() {
            match ev {
                SimulatorEvent::Quit => return Err(WindowClosed),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Up | Keycode::A => nudge_target(Nudge::Up),
                        Keycode::Down | Keycode::B => nudge_target(Nudge::Down),
                        Keycode::P => {
                            self.demo = match self.demo {
                                Some(_) => {
                                    println!("Demo producer off");
                                    None
                                }
                                None => {
                                    println!("Demo producer on");
                                    Some((PingPong::new(MAX_MOOD), Instant::now()))
                                }
                            };
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if let Some((producer, last_run)) = &mut self.demo
            && last_run.elapsed() >= Duration::from_millis(PING_PONG_PERIOD_MS)
        {
            let target = producer.next_target(CURRENT_MOOD.load());
            DESIRED_MOOD.store(target);
            *last_run = Instant::now();
            println!("Demo target: {}", mood_name(target));
        }

        Ok(())
    }
}

impl DisplayBus for SimulatorBus {
    type Error = WindowClosed;

    async fn write_command(
        &mut self,
        opcode: u8,
    ) -> Result<(), Self::Error> {
        self.panel.command(opcode);
        Ok(())
    }

    async fn write_data(
        &mut self,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        self.panel.data(data);
        if self.panel.take_frame_done() {
            self.on_frame()?;
        }
        Ok(())
    }
}

/// Blocking delay for the single-threaded simulator loop.
struct ThreadDelay;

impl DelayNs for ThreadDelay {
    async fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

fn nudge_target(direction: Nudge) {
    let target = nudge(DESIRED_MOOD.load(), direction, MAX_MOOD);
    DESIRED_MOOD.store(target);
    println!("Target: {} ({})", mood_name(target), target);
}

fn main() {
    let output_settings = OutputSettingsBuilder::new().scale(4).build();
    let window = Window::new("Mood Display Sim", &output_settings);

    let config = match AnimationEngineConfig::new(
        assets::ascending(),
        assets::descending(),
        EngineSettings::default(),
        &DESIRED_MOOD,
        &CURRENT_MOOD,
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid animation tables: {err}");
            std::process::exit(1);
        }
    };

    let mut writer = DisplayWriter::new(SimulatorBus::new(window));
    let init: Result<(), WindowClosed> = embassy_futures::block_on(writer.init(&mut ThreadDelay));
    if init.is_err() {
        return;
    }

    println!("Up/A: happier, Down/B: sadder, P: ping-pong demo");
    let mut walker = StateWalker::new(&config, writer, ThreadDelay);
    let result: Result<Infallible, WindowClosed> = embassy_futures::block_on(walker.run());
    if let Err(WindowClosed) = result {
        println!("Window closed after {} frames", walker.writer().bus().panel.frames());
    }
}
