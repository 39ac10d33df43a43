//! Target-mood producer tasks.
//!
//! Exactly one runs, selected by the `demo` feature. Both only touch the shared
//! mood cells.

use defmt::info;
use embassy_time::Timer;
use mood_display::assets::{MAX_MOOD, mood_name};

use crate::DESIRED_MOOD;

/// Demo producer: bounce between sad and happy, re-evaluated every 15 seconds.
#[cfg(feature = "demo")]
#[embassy_executor::task]
pub async fn ping_pong_task() {
    use mood_display::config::PING_PONG_PERIOD_MS;
    use mood_display::producer::PingPong;

    use crate::CURRENT_MOOD;

    info!("Ping-pong producer started");
    let mut producer = PingPong::new(MAX_MOOD);

    loop {
        let current = CURRENT_MOOD.load();
        let target = producer.next_target(current);
        DESIRED_MOOD.store(target);
        info!("Current mood {}, target {}", mood_name(current), mood_name(target));

        Timer::after_millis(PING_PONG_PERIOD_MS).await;
    }
}

/// Button producer: A raises the target one step, B lowers it.
#[cfg(not(feature = "demo"))]
#[embassy_executor::task]
pub async fn button_task(
    btn_up: embassy_rp::gpio::Input<'static>,
    btn_down: embassy_rp::gpio::Input<'static>,
) {
    use embassy_time::Instant;
    use mood_display::button::ButtonState;
    use mood_display::config::BUTTON_POLL_MS;
    use mood_display::producer::{Nudge, nudge};

    info!("Button producer started");
    let mut up_state = ButtonState::new();
    let mut down_state = ButtonState::new();

    loop {
        let now_ms = Instant::now().as_millis();

        let pressed = if up_state.just_pressed(btn_up.is_low(), now_ms) {
            Some(Nudge::Up)
        } else if down_state.just_pressed(btn_down.is_low(), now_ms) {
            Some(Nudge::Down)
        } else {
            None
        };

        if let Some(direction) = pressed {
            let target = nudge(DESIRED_MOOD.load(), direction, MAX_MOOD);
            DESIRED_MOOD.store(target);
            info!("Button {}: target mood {}", direction, mood_name(target));
        }

        Timer::after_millis(BUTTON_POLL_MS).await;
    }
}
