//! Frame writer: addressing window setup and row-by-row streaming.

use embedded_hal_async::delay::DelayNs;

use super::{CASET, COLMOD, COLMOD_16BPP, DISPON, DisplayBus, RAMWR, RASET, SLPOUT, SWRESET};
use crate::config::{COLMOD_SETTLE_MS, COLS, COLUMN_OFFSET, FRAME_BYTES, ROW_BYTES, ROW_OFFSET, ROWS, SETTLE_MS};

/// CASET/RASET payload: `[min_hi, min_lo, max_hi, max_lo]`, both ends shifted by
/// the controller offset.
#[inline]
pub const fn window_params(
    start: u16,
    end: u16,
    offset: u16,
) -> [u8; 4] {
    let min = (start + offset).to_be_bytes();
    let max = (end + offset).to_be_bytes();
    [min[0], min[1], max[0], max[1]]
}

/// Full-screen column window, pre-computed.
const COLUMN_WINDOW: [u8; 4] = window_params(0, COLS as u16 - 1, COLUMN_OFFSET);
/// Full-screen row window, pre-computed.
const ROW_WINDOW: [u8; 4] = window_params(0, ROWS as u16 - 1, ROW_OFFSET);

/// Pushes decoded frames to the panel.
///
/// Owns the transport and a one-row transfer buffer that is reused for every row
/// of every frame. Rows are copied into it before sending because DMA-capable
/// transports may need a buffer in RAM, while frames can live in flash.
pub struct DisplayWriter<B> {
    bus: B,
    line: [u8; ROW_BYTES],
}

impl<B: DisplayBus> DisplayWriter<B> {
    /// Wrap a transport. Call [`DisplayWriter::init`] once before drawing.
    pub const fn new(bus: B) -> Self {
        Self {
            bus,
            line: [0u8; ROW_BYTES],
        }
    }

    /// Bring the controller out of reset into 16-bit color mode with the display on.
    pub async fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), B::Error> {
        // Software reset
        self.bus.write_command(SWRESET).await?;
        delay.delay_ms(SETTLE_MS).await;

        // Exit sleep mode
        self.bus.write_command(SLPOUT).await?;
        delay.delay_ms(SETTLE_MS).await;
        debug!("Display out of reset and sleep");

        // Set pixel format to RGB565 (16-bit)
        self.bus.write_command(COLMOD).await?;
        self.bus.write_data(&[COLMOD_16BPP]).await?;
        delay.delay_ms(COLMOD_SETTLE_MS).await;

        // Display on
        self.bus.write_command(DISPON).await?;
        delay.delay_ms(SETTLE_MS).await;

        info!("Display initialized ({}x{})", COLS, ROWS);
        Ok(())
    }

    /// Draw a full decoded frame of exactly [`FRAME_BYTES`] bytes.
    ///
    /// Any transport error aborts the frame; the panel is left with a partially
    /// written image and the caller is expected to treat the error as fatal.
    pub async fn draw(
        &mut self,
        frame: &[u8],
    ) -> Result<(), B::Error> {
        debug_assert_eq!(frame.len(), FRAME_BYTES);

        self.bus.write_command(CASET).await?;
        self.bus.write_data(&COLUMN_WINDOW).await?;

        self.bus.write_command(RASET).await?;
        self.bus.write_data(&ROW_WINDOW).await?;

        self.bus.write_command(RAMWR).await?;
        for row in frame.chunks_exact(ROW_BYTES) {
            self.line.copy_from_slice(row);
            self.bus.write_data(&self.line).await?;
        }
        Ok(())
    }

    /// Access the transport.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Give back the transport.
    pub fn release(self) -> B {
        self.bus
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::mock::{BusOp, RecordingBus, RecordingDelay};

    #[test]
    fn test_window_params() {
        assert_eq!(window_params(0, 127, 2), [0x00, 0x02, 0x00, 0x81]);
        assert_eq!(window_params(0, 255, 2), [0x00, 0x02, 0x01, 0x01]);
        assert_eq!(COLUMN_WINDOW, [0x00, 0x02, 0x00, 0x81]);
        assert_eq!(ROW_WINDOW, [0x00, 0x02, 0x00, 0x81]);
    }

    #[test]
    fn test_init_sequence() {
        let mut writer = DisplayWriter::new(RecordingBus::new());
        let mut delay = RecordingDelay::default();
        block_on(writer.init(&mut delay)).unwrap();

        assert_eq!(
            writer.bus().ops,
            vec![
                BusOp::Command(SWRESET),
                BusOp::Command(SLPOUT),
                BusOp::Command(COLMOD),
                BusOp::Data(vec![0b101]),
                BusOp::Command(DISPON),
            ]
        );
        assert_eq!(delay.delays_ms, vec![150, 150, 10, 150]);
    }

    #[test]
    fn test_draw_sets_window_then_streams_rows() {
        let frame: Vec<u8> = (0..FRAME_BYTES).map(|i| (i / ROW_BYTES) as u8).collect();
        let mut writer = DisplayWriter::new(RecordingBus::new());
        block_on(writer.draw(&frame)).unwrap();

        let ops = &writer.bus().ops;
        assert_eq!(ops.len(), 5 + ROWS);
        assert_eq!(ops[0], BusOp::Command(CASET));
        assert_eq!(ops[1], BusOp::Data(vec![0x00, 0x02, 0x00, 0x81]));
        assert_eq!(ops[2], BusOp::Command(RASET));
        assert_eq!(ops[3], BusOp::Data(vec![0x00, 0x02, 0x00, 0x81]));
        assert_eq!(ops[4], BusOp::Command(RAMWR));

        for (row, op) in ops[5..].iter().enumerate() {
            match op {
                BusOp::Data(bytes) => {
                    assert_eq!(bytes.len(), ROW_BYTES);
                    assert!(bytes.iter().all(|&b| b == row as u8));
                }
                BusOp::Command(c) => panic!("unexpected command {c:#04x} in pixel stream"),
            }
        }
    }

    #[test]
    fn test_draw_stops_on_transport_error() {
        let frame = vec![0u8; FRAME_BYTES];
        let mut writer = DisplayWriter::new(RecordingBus::failing_after(6));
        assert!(block_on(writer.draw(&frame)).is_err());
        // Five setup ops and one row made it out before the fault
        assert_eq!(writer.bus().ops.len(), 6);
    }
}
