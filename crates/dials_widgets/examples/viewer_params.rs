//! Scripted host session
//!
//! Plays the role of a viewer plugin host: builds a slider and a combo
//! box, wires them to a dispatcher, then replays the events a toolkit
//! would produce for a drag, an edit-box commit, and a selection.
//!
//! Run with:
//! `cargo run -p dials_widgets --example viewer_params`

use anyhow::Result;
use dials_widgets::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut events = EventDispatcher::new();

    let sigma = slider("sigma")
        .low(0.0)
        .high(10.0)
        .on_change(|name, value| println!("callback: {name} = {value}"))
        .build()?;
    sigma.attach(&mut events);

    let mode = combo_box("smooth mode", ["nearest", "bilinear", "bicubic"])
        .kind(ParamKind::Attr)
        .on_change(|name, value| println!("callback: {name} = {value}"))
        .build()?;
    mode.attach(&mut events);

    println!(
        "initial: {} = {}, {} = {}",
        sigma.name(),
        sigma.current_value(),
        mode.name(),
        mode.current_item()
    );

    // Drag across the 200px track, then let go
    for x in [40.0, 100.0, 150.0] {
        events.dispatch(&mut Event::new(
            event_types::DRAG,
            sigma.widget_id(),
            EventData::Pointer { x, y: 0.0, button: 0 },
        ));
    }
    events.dispatch(&mut Event::new(
        event_types::DRAG_END,
        sigma.widget_id(),
        EventData::None,
    ));

    // A rejected edit-box commit leaves the error indicator set
    events.dispatch(&mut Event::new(
        event_types::TEXT_COMMIT,
        sigma.widget_id(),
        EventData::Text {
            text: "12.5".into(),
        },
    ));
    println!(
        "after '12.5': value = {}, input valid = {}",
        sigma.current_value(),
        sigma.input_valid()
    );

    // A valid commit snaps to the nearest step and clears it
    events.dispatch(&mut Event::new(
        event_types::TEXT_COMMIT,
        sigma.widget_id(),
        EventData::Text { text: "2.5".into() },
    ));
    println!(
        "after '2.5': value = {}, input valid = {}",
        sigma.current_value(),
        sigma.input_valid()
    );

    // Pick the third interpolation mode
    events.dispatch(&mut Event::new(
        event_types::ITEM_SELECTED,
        mode.widget_id(),
        EventData::Selection { index: 2 },
    ));

    println!(
        "final: {} = {} ({}), {} = {} ({})",
        sigma.name(),
        sigma.current_value(),
        sigma.kind(),
        mode.name(),
        mode.current_item(),
        mode.kind()
    );

    Ok(())
}
