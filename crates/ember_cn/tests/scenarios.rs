//! End-to-end component scenarios driven through the public API

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ember_cn::prelude::*;
use ember_cn::HookKind;
use serde_json::json;

#[test]
fn button_lifecycle_end_to_end() {
    let log = EventLog::new();
    let config = cn::button(
        "btn1",
        ButtonPatch::new().label("Go").button_type("contained"),
    );
    let mut button = ButtonWrapper::new(config, log.handlers()).unwrap();

    let initialized = log.of_type(EventType::Initialized);
    assert_eq!(initialized.len(), 1);
    assert_eq!(initialized[0].component_id, "btn1");

    assert!(button.press(Interaction::mouse(2.0, 3.0)).unwrap());
    let presses = log.of_type(EventType::Press);
    assert_eq!(presses.len(), 1);
    assert_eq!(presses[0].component_id, "btn1");
    match &presses[0].kind {
        EventKind::Press(details) => {
            assert_eq!(details.label, "Go");
            assert_eq!(details.pointer, PointerKind::Mouse);
        }
        other => panic!("expected a press, got {other:?}"),
    }

    button.cleanup().unwrap();
    assert_eq!(log.of_type(EventType::Destroyed).len(), 1);
    let settled = log.len();

    // Every call after cleanup is refused and silent
    assert!(matches!(
        button.press(Interaction::keyboard()),
        Err(WrapperError::Destroyed { .. })
    ));
    assert!(button
        .update_config(cn::button("btn1", ButtonPatch::new().label("Again")))
        .is_err());
    assert!(button.render().is_err());
    assert!(button.cleanup().is_err());
    assert_eq!(log.len(), settled);
    assert_eq!(button.lifecycle(), Lifecycle::Destroyed);
}

#[test]
fn label_text_change_end_to_end() {
    let log = EventLog::new();
    let mut label =
        LabelWrapper::new(cn::label("lbl1", LabelPatch::new().text("A")), log.handlers()).unwrap();

    label
        .update_config(cn::label("lbl1", LabelPatch::new().text("B")))
        .unwrap();

    let changes = log.of_type(EventType::TextChanged);
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0].kind,
        EventKind::TextChanged {
            text: "B".into(),
            previous_text: "A".into(),
        }
    );

    // Wire shape uses camelCase keys
    let wire = serde_json::to_value(&changes[0]).unwrap();
    assert_eq!(wire["componentId"], json!("lbl1"));
    assert_eq!(wire["type"], json!("textChanged"));
    assert_eq!(wire["previousText"], json!("A"));
}

#[test]
fn hidden_configurations_render_nothing() {
    let hidden = [
        BasePatch::new().visible(false),
        BasePatch::new().render_if(false),
        BasePatch::new().render_if_fn(|| false),
        BasePatch::new()
            .visible(false)
            .disabled(true)
            .stl(Style::new().display(Display::Flex).opacity(1.0)),
    ];

    for base in hidden {
        let button = ButtonWrapper::new(
            cn::button("b", ButtonPatch::new().with_base(base.clone())),
            EventHandlers::new(),
        )
        .unwrap();
        assert!(button.render().unwrap().is_none());

        let label = LabelWrapper::new(
            cn::label("l", LabelPatch::new().with_base(base)),
            EventHandlers::new(),
        )
        .unwrap();
        assert!(label.render().unwrap().is_none());
    }
}

#[test]
fn predicate_is_reevaluated_on_every_render() {
    let shown = Rc::new(Cell::new(false));
    let flag = shown.clone();
    let label = LabelWrapper::new(
        cn::label(
            "l",
            LabelPatch::new().with_base(BasePatch::new().render_if_fn(move || flag.get())),
        ),
        EventHandlers::new(),
    )
    .unwrap();

    assert!(label.render().unwrap().is_none());
    shown.set(true);
    assert!(label.render().unwrap().is_some());
}

#[test]
fn init_and_destroy_fire_once() {
    let inits = Rc::new(Cell::new(0));
    let destroys = Rc::new(Cell::new(0));

    let patch = |text: &str| {
        let (i, d) = (inits.clone(), destroys.clone());
        LabelPatch::new().text(text).with_base(
            BasePatch::new()
                .on_init(move || {
                    i.set(i.get() + 1);
                    Ok(())
                })
                .on_destroy(move || {
                    d.set(d.get() + 1);
                    Ok(())
                }),
        )
    };

    let mut label = LabelWrapper::new(cn::label("l", patch("0")), EventHandlers::new()).unwrap();
    for n in 1..=5 {
        label
            .update_config(cn::label("l", patch(&n.to_string())))
            .unwrap();
    }
    assert_eq!(inits.get(), 1);
    assert_eq!(destroys.get(), 0);

    label.cleanup().unwrap();
    let _ = label.cleanup();
    assert_eq!(inits.get(), 1);
    assert_eq!(destroys.get(), 1);
}

#[test]
fn failing_init_hook_aborts_mount() {
    let log = EventLog::new();
    let destroyed = Rc::new(Cell::new(false));
    let d = destroyed.clone();

    let base = BasePatch::new()
        .on_init(|| Err("backend offline".into()))
        .on_destroy(move || {
            d.set(true);
            Ok(())
        });
    let result = ButtonWrapper::new(
        cn::button("b", ButtonPatch::new().with_base(base)),
        log.handlers(),
    );

    match result {
        Err(WrapperError::Hook { hook, id, .. }) => {
            assert_eq!(hook, HookKind::Init);
            assert_eq!(id, "b");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("mount should fail"),
    }
    assert!(log.is_empty());
    assert!(!destroyed.get());
}

#[test]
fn disabled_state_overrides_style() {
    let button = ButtonWrapper::new(
        cn::button(
            "b",
            ButtonPatch::new().with_base(BasePatch::new().disabled(true).stl(Style::new().opacity(0.9))),
        ),
        EventHandlers::new(),
    )
    .unwrap();
    assert_eq!(button.computed_style().opacity, Some(0.6));

    let custom = ButtonWrapper::new(
        cn::button(
            "c",
            ButtonPatch::new().with_base(
                BasePatch::new()
                    .disabled(true)
                    .disabled_opacity(0.3)
                    .stl(Style::new().opacity(0.9)),
            ),
        ),
        EventHandlers::new(),
    )
    .unwrap();
    assert_eq!(custom.computed_style().opacity, Some(0.3));

    let hidden = LabelWrapper::new(
        cn::label(
            "l",
            LabelPatch::new().with_base(
                BasePatch::new()
                    .visible(false)
                    .stl(Style::new().display(Display::Flex)),
            ),
        ),
        EventHandlers::new(),
    )
    .unwrap();
    assert_eq!(hidden.computed_style().display, Some(Display::None));
}

#[test]
fn attributes_merge_with_defaults() {
    let config = cn::button(
        "x",
        ButtonPatch::new().with_base(BasePatch::new().attr("testID", "save")),
    );
    assert_eq!(config.base.attr["role"], json!("button"));
    assert_eq!(config.base.attr["testID"], json!("save"));

    let element = ButtonWrapper::new(config, EventHandlers::new())
        .unwrap()
        .render()
        .unwrap()
        .unwrap();
    assert_eq!(element.props["testID"], json!("save"));
}

#[test]
fn split_and_unified_handlers_see_the_same_stream() {
    let unified = Rc::new(RefCell::new(Vec::new()));
    let split = Rc::new(RefCell::new(Vec::new()));

    let mut handlers = EventHandlers::new();
    let u = unified.clone();
    handlers.on_event(move |event| u.borrow_mut().push(event.event_type()));
    for event_type in [
        EventType::Initialized,
        EventType::Press,
        EventType::Destroyed,
    ] {
        let s = split.clone();
        handlers.on(event_type, move |event| s.borrow_mut().push(event.event_type()));
    }

    let mut button = ButtonWrapper::new(cn::button("b", ButtonPatch::new()), handlers).unwrap();
    button.press(Interaction::touch(1.0, 1.0)).unwrap();
    button.cleanup().unwrap();

    assert_eq!(*unified.borrow(), *split.borrow());
    assert_eq!(
        *unified.borrow(),
        vec![EventType::Initialized, EventType::Press, EventType::Destroyed]
    );
}

#[test]
fn surface_runs_a_manifest() {
    let manifest = ComponentManifest::from_json(
        r#"{
            "submit": { "type": "Button", "config": { "id": "btn1", "label": "Go", "type": "contained" } },
            "status": { "type": "Label", "config": { "id": "lbl1", "text": "A" } },
            "secret": { "type": "Label", "config": { "visible": false } }
        }"#,
    )
    .unwrap();

    let log = EventLog::new();
    let mut surface = Surface::new(log.handlers());
    assert_eq!(surface.mount_manifest(&manifest).unwrap(), 3);
    assert_eq!(surface.render().unwrap().len(), 2);

    surface.press("btn1", Interaction::keyboard()).unwrap();
    surface
        .update(cn::label("lbl1", LabelPatch::new().text("B")))
        .unwrap();
    surface.unmount_all().unwrap();

    let types: Vec<_> = log.events().iter().map(ComponentEvent::event_type).collect();
    assert_eq!(
        types,
        vec![
            EventType::Initialized,
            EventType::Initialized,
            EventType::Initialized,
            EventType::Press,
            EventType::TextChanged,
            EventType::Destroyed,
            EventType::Destroyed,
            EventType::Destroyed,
        ]
    );
}
