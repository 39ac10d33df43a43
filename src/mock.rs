//! Test doubles for the display transport and delays.

use embedded_hal_async::delay::DelayNs;

use crate::display::DisplayBus;

/// One call made on a [`RecordingBus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BusOp {
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError;

/// Bus that records every call, optionally failing once `fail_after` calls went through.
#[derive(Default)]
pub struct RecordingBus {
    pub ops: Vec<BusOp>,
    fail_after: Option<usize>,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(calls: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_after: Some(calls),
        }
    }

    fn check(&self) -> Result<(), MockBusError> {
        match self.fail_after {
            Some(limit) if self.ops.len() >= limit => Err(MockBusError),
            _ => Ok(()),
        }
    }

    /// Number of RAMWR commands seen, i.e. frames started.
    pub fn frames_started(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| **op == BusOp::Command(crate::display::RAMWR))
            .count()
    }

    /// Pixel rows sent after the most recent RAMWR, concatenated.
    pub fn last_frame(&self) -> Vec<u8> {
        let start = self
            .ops
            .iter()
            .rposition(|op| *op == BusOp::Command(crate::display::RAMWR))
            .map_or(0, |i| i + 1);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                BusOp::Data(bytes) => Some(bytes.as_slice()),
                BusOp::Command(_) => None,
            })
            .flatten()
            .copied()
            .collect()
    }
}

impl DisplayBus for RecordingBus {
    type Error = MockBusError;

    async fn write_command(
        &mut self,
        opcode: u8,
    ) -> Result<(), MockBusError> {
        self.check()?;
        self.ops.push(BusOp::Command(opcode));
        Ok(())
    }

    async fn write_data(
        &mut self,
        data: &[u8],
    ) -> Result<(), MockBusError> {
        self.check()?;
        self.ops.push(BusOp::Data(data.to_vec()));
        Ok(())
    }
}

/// Delay that returns immediately and remembers what was asked for.
#[derive(Default)]
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
    pub delays_ns: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        self.delays_ns.push(ns);
    }

    async fn delay_ms(
        &mut self,
        ms: u32,
    ) {
        self.delays_ms.push(ms);
    }
}
