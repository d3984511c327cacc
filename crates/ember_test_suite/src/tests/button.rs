//! Button tests
//!
//! Modes, sizes, loading and icon content, and press dispatch

use crate::runner::TestSuite;
use ember_cn::prelude::*;
use ember_core::element_types;

/// Create the button test suite
pub fn suite() -> TestSuite {
    let mut suite = TestSuite::new("button");

    // One button per visual mode
    suite.add("modes", |ctx| {
        for (id, button_type) in [("contained", "contained"), ("outlined", "OUTLINED"), ("text", "text")] {
            ctx.mount(cn::button(id, ButtonPatch::new().label(id).button_type(button_type)));
        }

        let elements = ctx.surface().render().unwrap_or_default();
        let modes: Vec<_> = elements
            .iter()
            .filter_map(|e| e.props.get("mode").and_then(|m| m.as_str()))
            .map(str::to_string)
            .collect();
        ctx.check_eq("modes", modes, vec!["contained".into(), "outlined".into(), "text".into()]);
    });

    // Unknown types fall back to the text mode
    suite.add("unknown_type", |ctx| {
        ctx.mount(cn::button("b", ButtonPatch::new().button_type("raised")));
        let mode = ButtonMode::from_type("raised");
        ctx.check_eq("mode", mode, ButtonMode::Text);
    });

    suite.add("sizes", |ctx| {
        for size in [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large] {
            ctx.mount(cn::button(size.as_str(), ButtonPatch::new().size(size)));
        }

        let heights: Vec<_> = ctx
            .surface()
            .render()
            .unwrap_or_default()
            .iter()
            .filter_map(|e| e.style.height)
            .collect();
        ctx.check_eq("heights", heights, vec![32.0, 40.0, 48.0]);
    });

    // Loading replaces the icon with an activity indicator and blocks presses
    suite.add("loading", |ctx| {
        ctx.mount(cn::button(
            "save",
            ButtonPatch::new().label("Save").icon("check").loading(true),
        ));

        let elements = ctx.surface().render().unwrap_or_default();
        let root = elements.first();
        ctx.check(
            root.and_then(|e| e.find(element_types::ACTIVITY_INDICATOR)).is_some(),
            "loading button shows an activity indicator",
        );
        ctx.check(
            root.and_then(|e| e.find(element_types::ICON)).is_none(),
            "loading button hides its icon",
        );
        ctx.check(root.map_or(false, |e| !e.interactive), "loading button is not interactive");

        let pressed = ctx.surface().press("save", Interaction::mouse(5.0, 5.0));
        ctx.check(matches!(pressed, Ok(false)), "press on a loading button is ignored");
    });

    suite.add("icon", |ctx| {
        ctx.mount(cn::button("next", ButtonPatch::new().label("Next").icon("arrow-right")));
        let elements = ctx.surface().render().unwrap_or_default();
        let icon = elements.first().and_then(|e| e.find(element_types::ICON)).cloned();
        ctx.check_eq(
            "icon name",
            icon.and_then(|i| i.props.get("name").cloned()),
            Some("arrow-right".into()),
        );
    });

    // Disabled buttons render dimmed and swallow presses
    suite.add("disabled", |ctx| {
        ctx.mount(cn::button(
            "off",
            ButtonPatch::new().label("Off").disabled(true),
        ));
        ctx.mount(cn::button(
            "dim",
            ButtonPatch::new().label("Dim").with_base(
                BasePatch::new()
                    .disabled(true)
                    .disabled_opacity(0.25)
                    .disabled_text_color(Color::GRAY),
            ),
        ));

        let pressed = ctx.surface().press("off", Interaction::touch(1.0, 1.0));
        ctx.check(matches!(pressed, Ok(false)), "press on a disabled button is ignored");
        ctx.check_eq("press events", ctx.log().of_type(EventType::Press).len(), 0);
    });

    // Press and long press produce interaction events carrying the label
    suite.add("press_events", |ctx| {
        ctx.mount(cn::button("btn1", ButtonPatch::new().label("Go").button_type("contained")));
        ctx.mount(cn::button("hold", ButtonPatch::new().label("Hold").long_press(true)));

        let results = [
            ctx.surface().press("btn1", Interaction::mouse(10.0, 8.0)),
            ctx.surface().long_press("btn1", Interaction::mouse(10.0, 8.0)),
            ctx.surface().long_press("hold", Interaction::touch(3.0, 3.0)),
            ctx.surface().press("hold", Interaction::keyboard()),
        ];
        let emitted: Vec<bool> = results.into_iter().map(|r| r.unwrap_or(false)).collect();
        ctx.check_eq("emitted", emitted, vec![true, false, true, true]);
        ctx.check_eq("press events", ctx.log().of_type(EventType::Press).len(), 2);
        ctx.check_eq("long press events", ctx.log().of_type(EventType::LongPress).len(), 1);
    });

    // Pass-through attributes land on the root element next to `role`
    suite.add("attributes", |ctx| {
        ctx.mount(cn::button(
            "save",
            ButtonPatch::new().label("Save").with_base(
                BasePatch::new()
                    .attr("testID", "save-button")
                    .attr("accessibilityHint", "Saves the form"),
            ),
        ));
    });

    suite
}
