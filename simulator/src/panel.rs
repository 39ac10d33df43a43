//! Emulated ST7735 controller.
//!
//! Interprets the same command stream the hardware receives (CASET, RASET,
//! RAMWR and pixel data) and paints into a [`SimulatorDisplay`]. Anything else
//! (reset, sleep-out, pixel format, display-on) is accepted and ignored.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;
use mood_display::config::{COLS, COLUMN_OFFSET, ROW_OFFSET, ROWS};
use mood_display::display::{CASET, RAMWR, RASET};

/// Inclusive address range on one axis, already shifted into panel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    start: u16,
    end: u16,
}

impl Span {
    const fn full(len: usize) -> Self {
        Self {
            start: 0,
            end: len as u16 - 1,
        }
    }

    /// Parse a CASET/RASET parameter block (big-endian start, big-endian end).
    fn parse(
        params: &[u8],
        offset: u16,
    ) -> Option<Self> {
        let [s_hi, s_lo, e_hi, e_lo] = params.try_into().ok()?;
        let start = u16::from_be_bytes([s_hi, s_lo]).checked_sub(offset)?;
        let end = u16::from_be_bytes([e_hi, e_lo]).checked_sub(offset)?;
        (start <= end).then_some(Self { start, end })
    }
}

pub struct EmulatedPanel {
    display: SimulatorDisplay<Rgb565>,
    command: Option<u8>,
    columns: Span,
    rows: Span,
    cursor: Point,
    high_byte: Option<u8>,
    frame_done: bool,
    frames: u32,
}

impl EmulatedPanel {
    pub fn new() -> Self {
        Self {
            display: SimulatorDisplay::new(Size::new(COLS as u32, ROWS as u32)),
            command: None,
            columns: Span::full(COLS),
            rows: Span::full(ROWS),
            cursor: Point::zero(),
            high_byte: None,
            frame_done: false,
            frames: 0,
        }
    }

    pub fn display(&self) -> &SimulatorDisplay<Rgb565> {
        &self.display
    }

    /// Frames fully written since start.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// True once after each completed frame.
    pub fn take_frame_done(&mut self) -> bool {
        core::mem::take(&mut self.frame_done)
    }

    pub fn command(
        &mut self,
        opcode: u8,
    ) {
        self.command = Some(opcode);
        if opcode == RAMWR {
            self.cursor = Point::new(i32::from(self.columns.start), i32::from(self.rows.start));
            self.high_byte = None;
        }
    }

    pub fn data(
        &mut self,
        bytes: &[u8],
    ) {
        match self.command {
            Some(CASET) => {
                if let Some(span) = Span::parse(bytes, COLUMN_OFFSET) {
                    self.columns = span;
                }
            }
            Some(RASET) => {
                if let Some(span) = Span::parse(bytes, ROW_OFFSET) {
                    self.rows = span;
                }
            }
            Some(RAMWR) => {
                for &byte in bytes {
                    match self.high_byte.take() {
                        None => self.high_byte = Some(byte),
                        Some(high) => self.put_pixel(u16::from_be_bytes([high, byte])),
                    }
                }
            }
            _ => {}
        }
    }

    fn put_pixel(
        &mut self,
        raw: u16,
    ) {
        let row_end = i32::from(self.rows.end);
        if self.cursor.y > row_end {
            // Window already full, the controller drops overflow
            return;
        }

        Pixel(self.cursor, Rgb565::from(RawU16::new(raw)))
            .draw(&mut self.display)
            .ok();

        self.cursor.x += 1;
        if self.cursor.x > i32::from(self.columns.end) {
            self.cursor.x = i32::from(self.columns.start);
            self.cursor.y += 1;
            if self.cursor.y > row_end {
                self.frames += 1;
                self.frame_done = true;
            }
        }
    }
}

impl Default for EmulatedPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use mood_display::config::{COLUMN_OFFSET, ROW_OFFSET};
    use mood_display::display::window_params;

    use super::*;

    fn set_window(
        panel: &mut EmulatedPanel,
        cols: (u16, u16),
        rows: (u16, u16),
    ) {
        panel.command(CASET);
        panel.data(&window_params(cols.0, cols.1, COLUMN_OFFSET));
        panel.command(RASET);
        panel.data(&window_params(rows.0, rows.1, ROW_OFFSET));
    }

    #[test]
    fn test_span_parse_removes_offset() {
        assert_eq!(Span::parse(&[0, 2, 0, 129], 2), Some(Span { start: 0, end: 127 }));
        assert_eq!(Span::parse(&[0, 1, 0, 129], 2), None);
        assert_eq!(Span::parse(&[0, 9, 0, 5], 0), None);
        assert_eq!(Span::parse(&[0, 2, 0], 2), None);
    }

    #[test]
    fn test_pixels_land_in_window_order() {
        let mut panel = EmulatedPanel::new();
        set_window(&mut panel, (10, 11), (20, 21));
        panel.command(RAMWR);
        panel.data(&[0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0xFF, 0xFF]);

        assert_eq!(panel.display().get_pixel(Point::new(10, 20)), Rgb565::RED);
        assert_eq!(panel.display().get_pixel(Point::new(11, 20)), Rgb565::GREEN);
        assert_eq!(panel.display().get_pixel(Point::new(10, 21)), Rgb565::BLUE);
        assert_eq!(panel.display().get_pixel(Point::new(11, 21)), Rgb565::WHITE);
        assert!(panel.take_frame_done());
        assert!(!panel.take_frame_done());
        assert_eq!(panel.frames(), 1);
    }

    #[test]
    fn test_pixel_split_across_writes() {
        let mut panel = EmulatedPanel::new();
        set_window(&mut panel, (0, 0), (0, 0));
        panel.command(RAMWR);
        panel.data(&[0xF8]);
        assert!(!panel.take_frame_done());
        panel.data(&[0x00]);

        assert_eq!(panel.display().get_pixel(Point::zero()), Rgb565::RED);
        assert!(panel.take_frame_done());
    }

    #[test]
    fn test_full_frame_counts_once() {
        let mut panel = EmulatedPanel::new();
        set_window(&mut panel, (0, COLS as u16 - 1), (0, ROWS as u16 - 1));
        panel.command(RAMWR);
        for _ in 0..ROWS {
            panel.data(&[0xFF; COLS * 2]);
        }
        // Overflow is dropped
        panel.data(&[0x00, 0x00]);

        assert_eq!(panel.frames(), 1);
        assert_eq!(panel.display().get_pixel(Point::new(127, 127)), Rgb565::WHITE);
    }

    #[test]
    fn test_other_commands_ignored() {
        let mut panel = EmulatedPanel::new();
        panel.command(0x3A);
        panel.data(&[0b101]);
        panel.command(0x29);

        assert_eq!(panel.frames(), 0);
        assert_eq!(panel.display().get_pixel(Point::zero()), Rgb565::BLACK);
    }
}
