//! Byte transport to the display controller.

use embedded_hal::digital::{Error as _, OutputPin};
use embedded_hal::spi::Error as _;
use embedded_hal_async::spi::SpiDevice;

use crate::error::TransportError;

/// Command/data byte transport.
///
/// Implementations drive the mode-select line before each phase: command for
/// opcodes, data for parameters and pixels. Calls are expected to complete or
/// fail; callers never retry.
#[allow(async_fn_in_trait)]
pub trait DisplayBus {
    /// Error type of the underlying transport.
    type Error;

    /// Send one opcode with mode-select asserted to "command".
    async fn write_command(
        &mut self,
        opcode: u8,
    ) -> Result<(), Self::Error>;

    /// Send parameter or pixel bytes with mode-select asserted to "data".
    async fn write_data(
        &mut self,
        data: &[u8],
    ) -> Result<(), Self::Error>;
}

/// [`DisplayBus`] over an SPI device and a D/C pin.
///
/// Chip-select is owned by the `SpiDevice`, so every call is its own transaction.
/// The ST7735 keeps RAMWR open across chip-select toggles, which lets a frame be
/// streamed row by row.
pub struct SpiDisplayBus<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiDisplayBus<SPI, DC> {
    /// Create a bus from an SPI device and the mode-select pin.
    pub const fn new(
        spi: SPI,
        dc: DC,
    ) -> Self {
        Self { spi, dc }
    }

    /// Give back the SPI device and pin.
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }
}

impl<SPI, DC> DisplayBus for SpiDisplayBus<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = TransportError;

    async fn write_command(
        &mut self,
        opcode: u8,
    ) -> Result<(), TransportError> {
        self.dc.set_low().map_err(|e| TransportError::ModeSelect(e.kind()))?;
        self.spi
            .write(&[opcode])
            .await
            .map_err(|e| TransportError::Spi(e.kind()))
    }

    async fn write_data(
        &mut self,
        data: &[u8],
    ) -> Result<(), TransportError> {
        self.dc.set_high().map_err(|e| TransportError::ModeSelect(e.kind()))?;
        self.spi.write(data).await.map_err(|e| TransportError::Spi(e.kind()))
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use embassy_futures::block_on;
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Wire {
        Dc(bool),
        Bytes(usize, u8),
    }

    /// Shared log so the pin and the SPI device record into one timeline.
    type Log = std::rc::Rc<std::cell::RefCell<Vec<Wire>>>;

    struct FakeSpi {
        log: Log,
        fail: bool,
    }

    #[derive(Debug)]
    struct FakeSpiError;

    impl embedded_hal::spi::Error for FakeSpiError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    impl ErrorType for FakeSpi {
        type Error = FakeSpiError;
    }

    impl SpiDevice for FakeSpi {
        async fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> Result<(), FakeSpiError> {
            if self.fail {
                return Err(FakeSpiError);
            }
            for op in operations {
                if let Operation::Write(bytes) = op {
                    self.log.borrow_mut().push(Wire::Bytes(bytes.len(), bytes[0]));
                }
            }
            Ok(())
        }
    }

    struct FakePin {
        log: Log,
    }

    impl PinErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Wire::Dc(false));
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Wire::Dc(true));
            Ok(())
        }
    }

    fn bus(fail: bool) -> (SpiDisplayBus<FakeSpi, FakePin>, Log) {
        let log = Log::default();
        let spi = FakeSpi { log: log.clone(), fail };
        let pin = FakePin { log: log.clone() };
        (SpiDisplayBus::new(spi, pin), log)
    }

    #[test]
    fn test_mode_select_precedes_bytes() {
        let (mut bus, log) = bus(false);
        block_on(bus.write_command(0x2A)).unwrap();
        block_on(bus.write_data(&[0x00, 0x02, 0x00, 0x81])).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                Wire::Dc(false),
                Wire::Bytes(1, 0x2A),
                Wire::Dc(true),
                Wire::Bytes(4, 0x00),
            ]
        );
    }

    #[test]
    fn test_spi_failure_maps_to_transport_error() {
        let (mut bus, _log) = bus(true);
        assert_eq!(
            block_on(bus.write_command(0x01)),
            Err(TransportError::Spi(ErrorKind::Other))
        );
    }
}
