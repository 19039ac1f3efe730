//! Host-style wiring tests
//!
//! Drives widgets the way a host application does: trait objects in a
//! collection, toolkit events routed through the dispatcher by widget id.

use std::sync::{Arc, Mutex};

use dials_widgets::prelude::*;

type Calls = Arc<Mutex<Vec<(String, ParamValue)>>>;

fn recorder(calls: &Calls) -> impl Fn(&str, ParamValue) + Send + Sync + 'static {
    let sink = Arc::clone(calls);
    move |name, value| sink.lock().unwrap().push((name.to_string(), value))
}

fn pointer(event_type: u32, target: u64, x: f32, y: f32) -> Event {
    Event::new(event_type, target, EventData::Pointer { x, y, button: 0 })
}

fn key(target: u64, key: KeyCode) -> Event {
    Event::new(
        event_types::KEY_DOWN,
        target,
        EventData::Key {
            key,
            modifiers: Modifiers::NONE,
            repeat: false,
        },
    )
}

#[test]
fn drag_moves_slider_and_fires_callback() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let mut events = EventDispatcher::new();

    let sigma = slider("sigma")
        .low(0.0)
        .high(10.0)
        .track_extent(200.0)
        .on_change(recorder(&calls))
        .build()
        .unwrap();
    sigma.attach(&mut events);
    let id = sigma.widget_id();

    // Drag to the three-quarter point of a 200px track
    events.dispatch(&mut pointer(event_types::POINTER_DOWN, id, 150.0, 0.0));
    assert!(sigma.is_dragging());
    assert_eq!(sigma.step(), 750);
    assert!((sigma.current_value() - 7.5).abs() < 1e-12);

    events.dispatch(&mut Event::new(event_types::DRAG_END, id, EventData::None));
    assert!(!sigma.is_dragging());

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "sigma");
    assert_eq!(calls[0].1, ParamValue::Float(7.5));
}

#[test]
fn vertical_track_inverts_pointer_axis() {
    let sigma = slider("sigma")
        .orientation(Orientation::Vertical)
        .track_extent(200.0)
        .build()
        .unwrap();
    let mut events = EventDispatcher::new();
    sigma.attach(&mut events);

    // 50px down a 200px vertical track is three quarters of the range
    events.dispatch(&mut pointer(
        event_types::DRAG,
        sigma.widget_id(),
        0.0,
        50.0,
    ));
    assert_eq!(sigma.step(), 750);
}

#[test]
fn release_policy_fires_once_per_gesture() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let mut events = EventDispatcher::new();

    let sigma = slider("sigma")
        .low(0.0)
        .high(10.0)
        .update_on(UpdateOn::Release)
        .on_change(recorder(&calls))
        .build()
        .unwrap();
    sigma.attach(&mut events);
    let id = sigma.widget_id();

    for x in [20.0, 60.0, 140.0] {
        events.dispatch(&mut pointer(event_types::DRAG, id, x, 0.0));
    }
    assert!(calls.lock().unwrap().is_empty());

    events.dispatch(&mut Event::new(event_types::DRAG_END, id, EventData::None));
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, ParamValue::Float(7.0));
}

#[test]
fn text_commit_event_validates_input() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let mut events = EventDispatcher::new();

    let sigma = slider("sigma")
        .low(0.0)
        .high(10.0)
        .on_change(recorder(&calls))
        .build()
        .unwrap();
    sigma.attach(&mut events);
    let id = sigma.widget_id();

    let mut bad = Event::new(
        event_types::TEXT_COMMIT,
        id,
        EventData::Text {
            text: "12.5".into(),
        },
    );
    events.dispatch(&mut bad);
    assert!(!sigma.input_valid());
    assert_eq!(sigma.step(), 500);
    assert!(calls.lock().unwrap().is_empty());

    let mut good = Event::new(
        event_types::TEXT_COMMIT,
        id,
        EventData::Text { text: "7.5".into() },
    );
    events.dispatch(&mut good);
    assert!(sigma.input_valid());
    assert_eq!(sigma.step(), 750);
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn keyboard_drives_both_widgets() {
    let mut events = EventDispatcher::new();

    let sigma = slider("sigma").low(0.0).high(10.0).build().unwrap();
    let mode = combo_box("mode", ["a", "b", "c"]).build().unwrap();
    sigma.attach(&mut events);
    mode.attach(&mut events);

    events.dispatch(&mut key(sigma.widget_id(), KeyCode::RIGHT));
    events.dispatch(&mut key(sigma.widget_id(), KeyCode::PAGE_DOWN));
    assert_eq!(sigma.step(), 451);

    // Shift-arrow jumps coarsely
    events.dispatch(&mut Event::new(
        event_types::KEY_DOWN,
        sigma.widget_id(),
        EventData::Key {
            key: KeyCode::RIGHT,
            modifiers: Modifiers::new(true, false, false, false),
            repeat: false,
        },
    ));
    assert_eq!(sigma.step(), 461);

    events.dispatch(&mut key(sigma.widget_id(), KeyCode::END));
    assert_eq!(sigma.step(), 1000);

    events.dispatch(&mut key(mode.widget_id(), KeyCode::DOWN));
    events.dispatch(&mut key(mode.widget_id(), KeyCode::DOWN));
    events.dispatch(&mut key(mode.widget_id(), KeyCode::DOWN));
    assert_eq!(mode.selected_index(), 2);
    events.dispatch(&mut key(mode.widget_id(), KeyCode::UP));
    assert_eq!(mode.selected_index(), 1);
}

#[test]
fn selection_event_routes_to_combo() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let mut events = EventDispatcher::new();

    let mode = combo_box("mode", ["nearest", "bilinear", "bicubic"])
        .on_change(recorder(&calls))
        .build()
        .unwrap();
    mode.attach(&mut events);

    let mut event = Event::new(
        event_types::ITEM_SELECTED,
        mode.widget_id(),
        EventData::Selection { index: 2 },
    );
    events.dispatch(&mut event);
    assert_eq!(mode.current_item(), "bicubic");

    // Malformed toolkit index: ignored, state unchanged
    let mut event = Event::new(
        event_types::ITEM_SELECTED,
        mode.widget_id(),
        EventData::Selection { index: 9 },
    );
    events.dispatch(&mut event);
    assert_eq!(mode.current_item(), "bicubic");

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, ParamValue::Str("bicubic".into()));
}

#[test]
fn disabled_widgets_ignore_events() {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let mut events = EventDispatcher::new();

    let sigma = slider("sigma")
        .low(0.0)
        .high(10.0)
        .disabled(true)
        .on_change(recorder(&calls))
        .build()
        .unwrap();
    let mode = combo_box("mode", ["a", "b"])
        .disabled(true)
        .on_change(recorder(&calls))
        .build()
        .unwrap();
    sigma.attach(&mut events);
    mode.attach(&mut events);

    events.dispatch(&mut pointer(event_types::DRAG, sigma.widget_id(), 150.0, 0.0));
    events.dispatch(&mut key(sigma.widget_id(), KeyCode::RIGHT));
    let mut text = Event::new(
        event_types::TEXT_COMMIT,
        sigma.widget_id(),
        EventData::Text { text: "7.5".into() },
    );
    events.dispatch(&mut text);
    events.dispatch(&mut Event::new(
        event_types::ITEM_SELECTED,
        mode.widget_id(),
        EventData::Selection { index: 1 },
    ));
    events.dispatch(&mut key(mode.widget_id(), KeyCode::DOWN));

    assert_eq!(sigma.step(), 500);
    assert_eq!(mode.selected_index(), 0);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn events_only_reach_their_target() {
    let mut events = EventDispatcher::new();

    let a = slider("a").build().unwrap();
    let b = slider("b").build().unwrap();
    a.attach(&mut events);
    b.attach(&mut events);

    events.dispatch(&mut pointer(event_types::DRAG, a.widget_id(), 200.0, 0.0));
    assert_eq!(a.step(), 1000);
    assert_eq!(b.step(), 500);
}

#[test]
fn hosts_use_widgets_as_trait_objects() {
    let widgets: Vec<Box<dyn ParamWidget>> = vec![
        Box::new(
            slider("sigma")
                .low(0.0)
                .high(10.0)
                .kind(ParamKind::Kwarg)
                .build()
                .unwrap(),
        ),
        Box::new(
            combo_box("mode", ["nearest", "bilinear"])
                .kind(ParamKind::Attr)
                .build()
                .unwrap(),
        ),
    ];

    let mut events = EventDispatcher::new();
    for widget in &widgets {
        widget.attach(&mut events);
    }

    assert_eq!(widgets[0].value(), ParamValue::Float(5.0));
    assert_eq!(widgets[1].value(), ParamValue::Str("nearest".into()));
    assert_eq!(widgets[0].kind(), ParamKind::Kwarg);
    assert_eq!(widgets[1].kind(), ParamKind::Attr);
    assert_eq!(widgets[1].name(), "mode");
}
