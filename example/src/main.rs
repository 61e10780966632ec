//! Headless slider demo.
//!
//! Drives a slider with a synthetic drag at roughly 60 frames per second while
//! the value consumer on the logic domain is deliberately slow. The thumb keeps
//! up with the pointer; the stored value catches up once the drag is over.
use std::{thread, time::Duration};

use range_components::slider::{GestureEvent, Slider, SliderArgs, SliderError, SliderSize};
use range_shard::{LogicDomain, LogicDomainConfig};
use range_ui::Dp;
use tokio::sync::watch;
use tracing::info;

const FRAME: Duration = Duration::from_millis(16);
const CONSUMER_LATENCY: Duration = Duration::from_millis(40);
const TRACK_WIDTH: Dp = Dp(320.0);
const DRAG_FRAMES: u32 = 30;

fn main() -> Result<(), SliderError> {
    range_ui::init_tracing();

    let domain = LogicDomain::new(LogicDomainConfig {
        worker_threads: 2,
        ..Default::default()
    })?;

    // Application state lives on the logic domain; the render loop only reads
    // the latest published value.
    let (store, mut stored) = watch::channel(25.0_f32);
    let args = SliderArgs::default()
        .value(*stored.borrow())
        .step(5.0)
        .size(SliderSize::Large)
        .show_value(true)
        .label("Volume")
        .on_value_change(move |value| {
            thread::sleep(CONSUMER_LATENCY);
            store.send_replace(value);
        });

    let mut slider = Slider::spawn(args, &domain);
    slider.on_layout(TRACK_WIDTH);
    render(&mut slider, &mut stored, "initial");

    slider.handle_gesture(GestureEvent::Start);
    for frame in 0..=DRAG_FRAMES {
        let x = TRACK_WIDTH.0 * frame as f32 / DRAG_FRAMES as f32;
        slider.handle_gesture(GestureEvent::Move { x: Dp(x) });
        render(&mut slider, &mut stored, "drag");
        thread::sleep(FRAME);
    }
    slider.handle_gesture(GestureEvent::End);

    while *stored.borrow() != slider.config().maximum {
        render(&mut slider, &mut stored, "settling");
        thread::sleep(FRAME);
    }
    render(&mut slider, &mut stored, "settled");
    Ok(())
}

fn render(slider: &mut Slider, stored: &mut watch::Receiver<f32>, phase: &str) {
    if stored.has_changed().unwrap_or(false) {
        slider.set_value(*stored.borrow_and_update());
    }
    let frame = slider.frame();
    info!(
        phase,
        stored = slider.args().value,
        shown = %slider.value_text().unwrap_or_default(),
        fill = frame.fill_percent(),
        thumb = frame.thumb_offset.0,
        scale = frame.scale,
        "frame"
    );
}
