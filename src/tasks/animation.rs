//! Animation task: owns the state walker and the display.

use defmt::info;

use crate::board::Walker;

/// Play animations forever. A transport fault halts the firmware; there is no
/// display-less mode to fall back to.
#[embassy_executor::task]
pub async fn animation_task(walker: &'static mut Walker) {
    info!("Animation task started");

    let Err(err) = walker.run().await;
    defmt::panic!("Display transport failed: {}", err);
}
