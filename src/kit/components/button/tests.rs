//! Tests for the button element

use super::{attr, ButtonSize, ButtonType, ContentOwnership, RenderState, Renderer, WebButton};
use super::{ACCEPTABLE_SIZES, ACCEPTABLE_TYPES, BUTTON_SCHEMA};
use crate::component::{AttributeMap, CustomElement, PropValidationError};
use crate::renderer::{SurfaceOp, VirtualButton, VirtualSlot, SCREEN_READER_CLASS};

// Drives a button the way the host runtime would: mutate an attribute, then
// deliver the change.
struct Harness {
    attrs: AttributeMap,
    slot: VirtualSlot,
    button: WebButton<VirtualButton>,
}

impl Harness {
    fn new() -> Self {
        Self {
            attrs: AttributeMap::new(),
            slot: VirtualSlot::new(),
            button: WebButton::new(VirtualButton::new()),
        }
    }

    fn set(&mut self, name: &str, value: &str) -> &mut Self {
        let change = self.attrs.set_attribute(name, value);
        self.button.attribute_changed(&self.attrs, &change);
        self
    }

    fn remove(&mut self, name: &str) -> &mut Self {
        let change = self.attrs.remove_attribute(name);
        self.button.attribute_changed(&self.attrs, &change);
        self
    }

    fn assign(&mut self, node: &str) {
        self.slot.assign(node);
        self.button.slot_changed(&self.slot);
    }

    fn clear_slot(&mut self) {
        self.slot.clear();
        self.button.slot_changed(&self.slot);
    }

    fn surface(&self) -> &VirtualButton {
        self.button.surface()
    }

    fn sorted_classes(&self) -> Vec<String> {
        let mut classes = self.surface().classes().to_vec();
        classes.sort();
        classes
    }
}

fn expected_classes(size: &str, kind: &str) -> Vec<String> {
    let mut classes = vec![
        "btn".to_string(),
        format!("btn--{size}"),
        format!("btn--{kind}"),
    ];
    classes.sort();
    classes
}

#[test]
fn enums_match_schema_allow_lists() {
    let sizes: Vec<_> = ButtonSize::ALL.iter().map(|s| s.as_str()).collect();
    let types: Vec<_> = ButtonType::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(sizes, ACCEPTABLE_SIZES);
    assert_eq!(types, ACCEPTABLE_TYPES);
}

#[test]
fn observed_attributes_come_from_schema() {
    assert_eq!(
        WebButton::<VirtualButton>::observed_attributes(),
        vec!["accessibilityText", "disabled", "faIcon", "id", "label", "size", "type"]
    );
    assert_eq!(WebButton::<VirtualButton>::STYLESHEET, "button");
}

#[test]
fn every_valid_size_and_type_yields_exact_class_set() {
    for size in ACCEPTABLE_SIZES {
        for kind in ACCEPTABLE_TYPES {
            let mut h = Harness::new();
            h.set(attr::ID, "b").set(attr::SIZE, size).set(attr::TYPE, kind);
            assert_eq!(h.sorted_classes(), expected_classes(size, kind));
        }
    }
}

#[test]
fn classes_stay_exact_across_repeated_changes() {
    let mut h = Harness::new();
    h.set(attr::ID, "b")
        .set(attr::SIZE, "small")
        .set(attr::TYPE, "danger")
        .set(attr::SIZE, "large")
        .set(attr::LABEL, "Go")
        .set(attr::TYPE, "link")
        .remove(attr::SIZE);
    assert_eq!(h.sorted_classes(), expected_classes("medium", "link"));
}

#[test]
fn size_change_diffs_only_its_own_axis() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::TYPE, "primary").set(attr::SIZE, "small");
    h.button.surface_mut().clear_ops();

    h.set(attr::SIZE, "large");

    assert_eq!(
        h.surface().ops()[..2],
        [
            SurfaceOp::RemoveClass("btn--small".to_string()),
            SurfaceOp::AddClass("btn--large".to_string()),
        ]
    );
    assert!(!h
        .surface()
        .ops()
        .iter()
        .any(|op| matches!(op, SurfaceOp::RemoveClass(c) if c == "btn" || c == "btn--primary")));
    assert_eq!(h.sorted_classes(), expected_classes("large", "primary"));
}

#[test]
fn invalid_type_falls_back_to_default_modifier() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::TYPE, "danger").set(attr::TYPE, "giant");

    assert_eq!(h.sorted_classes(), expected_classes("medium", "default"));
    assert!(!h.surface().has_class("btn--giant"));
    assert_eq!(h.button.state().unwrap().button_type, ButtonType::Default);
}

// Unlike passing the raw value through, an invalid value never reaches the
// class list and a later valid value removes the fallback class.
#[test]
fn invalid_size_is_diffed_by_effective_value() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::SIZE, "huge");
    assert_eq!(h.sorted_classes(), expected_classes("medium", "default"));

    h.set(attr::SIZE, "small");
    assert_eq!(h.sorted_classes(), expected_classes("small", "default"));
    assert!(!h.surface().has_class("btn--huge"));
    assert!(!h.surface().has_class("btn--medium"));
}

#[test]
fn disabled_uses_presence_semantics() {
    let cases = [("false", false), ("", true), ("true", true), ("no", true)];
    for (value, expected) in cases {
        let mut h = Harness::new();
        h.set(attr::ID, "b").set(attr::DISABLED, value);
        assert_eq!(h.surface().disabled(), expected, "disabled={value:?}");
    }

    let mut h = Harness::new();
    h.set(attr::DISABLED, "").remove(attr::DISABLED);
    assert!(!h.surface().disabled());
}

#[test]
fn label_renders_without_slotted_content() {
    let mut h = Harness::new();
    h.set(attr::ID, "b");
    assert_eq!(h.surface().text_content(), "Button");

    h.set(attr::LABEL, "Submit");
    assert_eq!(h.surface().text_content(), "Submit");

    h.set(attr::LABEL, "");
    assert_eq!(h.surface().text_content(), "Button");
}

#[test]
fn slotted_content_takes_precedence_over_label() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::LABEL, "Submit");

    h.assign("<strong>Save</strong>");
    assert_eq!(h.slot.assigned(), ["<strong>Save</strong>"]);
    assert_eq!(h.surface().text_content(), "");
    assert_eq!(h.button.ownership(), ContentOwnership::SlottedContent);

    h.set(attr::LABEL, "Ignored");
    assert_eq!(h.surface().text_content(), "");

    h.clear_slot();
    assert_eq!(h.button.ownership(), ContentOwnership::ScriptedLabel);
    assert_eq!(h.surface().text_content(), "");

    h.set(attr::SIZE, "small");
    assert_eq!(h.surface().text_content(), "Ignored");
}

#[test]
fn slot_assigned_before_first_render_suppresses_label() {
    let mut h = Harness::new();
    h.assign("icon");
    h.set(attr::ID, "b").set(attr::LABEL, "Hidden");
    assert_eq!(h.surface().label_text(), "");
    assert!(h.button.state().unwrap().has_slotted_content);
}

#[test]
fn accessibility_node_is_created_once_then_updated() {
    let mut h = Harness::new();
    h.set(attr::ID, "b");
    assert!(h.surface().accessibility_node().is_none());

    h.set(attr::ACCESSIBILITY_TEXT, "Close dialog");
    let node = h.surface().accessibility_node().unwrap();
    assert_eq!(node.text, "Close dialog");
    assert_eq!(node.classes, vec![SCREEN_READER_CLASS.to_string()]);

    h.set(attr::ACCESSIBILITY_TEXT, "Close dialog v2");
    assert_eq!(h.surface().children().len(), 1);
    assert_eq!(h.surface().accessibility_node().unwrap().text, "Close dialog v2");
    let created = h
        .surface()
        .ops()
        .iter()
        .filter(|op| **op == SurfaceOp::CreateAccessibilityNode)
        .count();
    assert_eq!(created, 1);
}

#[test]
fn accessibility_node_survives_removal_of_text() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::ACCESSIBILITY_TEXT, "Help");
    h.remove(attr::ACCESSIBILITY_TEXT);

    assert!(h.button.has_accessibility_node());
    assert_eq!(h.surface().accessibility_node().unwrap().text, "Help");
    assert_eq!(h.surface().text_content(), "ButtonHelp");
}

#[test]
fn empty_accessibility_text_creates_nothing() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::ACCESSIBILITY_TEXT, "");
    assert!(!h.button.has_accessibility_node());
}

#[test]
fn label_update_keeps_accessibility_node() {
    let mut h = Harness::new();
    h.set(attr::ID, "b")
        .set(attr::ACCESSIBILITY_TEXT, "Opens settings")
        .set(attr::LABEL, "Settings");
    assert_eq!(h.surface().label_text(), "Settings");
    assert_eq!(h.surface().text_content(), "SettingsOpens settings");
}

#[test]
fn missing_id_still_renders() {
    let mut h = Harness::new();
    h.set(attr::LABEL, "Anonymous");

    assert_eq!(h.surface().id(), "");
    assert_eq!(h.surface().text_content(), "Anonymous");
    assert_eq!(h.sorted_classes(), expected_classes("medium", "default"));
}

#[test]
fn id_is_mirrored() {
    let mut h = Harness::new();
    h.set(attr::ID, "save-button");
    assert_eq!(h.surface().id(), "save-button");
    h.remove(attr::ID);
    assert_eq!(h.surface().id(), "");
}

#[test]
fn icon_node_follows_fa_icon() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::FA_ICON, r#"["fa-solid", "fa-xmark"]"#);
    let icon = h.surface().icon_node().unwrap();
    assert_eq!(icon.classes, vec!["fa-solid", "fa-xmark"]);

    h.set(attr::FA_ICON, "not json");
    assert!(h.surface().icon_node().unwrap().classes.is_empty());

    h.set(attr::FA_ICON, r#"["fa-check"]"#);
    assert_eq!(h.surface().icon_node().unwrap().classes, vec!["fa-check"]);
    assert_eq!(
        h.surface()
            .ops()
            .iter()
            .filter(|op| **op == SurfaceOp::CreateIconNode)
            .count(),
        1
    );
}

#[test]
fn resolve_reports_fallbacks() {
    let attrs = AttributeMap::from([("size", "xl"), ("faIcon", "{}")]);
    let (state, problems) = RenderState::resolve(&attrs, false);

    assert_eq!(state.size, ButtonSize::Medium);
    assert_eq!(state.label, "Button");
    assert_eq!(problems.len(), 3);
    assert_eq!(problems[0], PropValidationError::MissingRequired("id".to_string()));
}

#[test]
fn render_state_serializes_with_attribute_names() {
    let attrs = AttributeMap::from([("id", "b"), ("type", "primary"), ("size", "small")]);
    let (state, _) = RenderState::resolve(&attrs, false);
    let json = serde_json::to_value(&state).unwrap();

    assert_eq!(json["type"], "primary");
    assert_eq!(json["size"], "small");
    assert_eq!(json["hasSlottedContent"], false);
    assert_eq!(json["accessibilityText"], serde_json::Value::Null);
}

#[test]
fn diagnostics_flag_configuration_problems() {
    let attrs = AttributeMap::from([("label", "x")]);
    assert_eq!(
        WebButton::<VirtualButton>::diagnostics(&attrs),
        Err(PropValidationError::MissingRequired("id".to_string()))
    );

    let attrs = AttributeMap::from([("id", "b"), ("disabled", "false"), ("type", "link")]);
    assert!(WebButton::<VirtualButton>::diagnostics(&attrs).is_ok());
    assert_eq!(BUTTON_SCHEMA.names().len(), 7);
}

#[test]
fn connected_renders_host_without_attributes() {
    let attrs = AttributeMap::new();
    let mut button = WebButton::new(VirtualButton::new());
    button.connected(&attrs);

    let mut classes = button.surface().classes().to_vec();
    classes.sort();
    assert_eq!(classes, expected_classes("medium", "default"));
    assert_eq!(button.surface().label_text(), "Button");
    assert_eq!(button.surface().id(), "");
    assert!(!button.surface().disabled());
}

#[test]
fn connected_is_a_no_op_after_first_render() {
    let mut h = Harness::new();
    h.set(attr::ID, "b").set(attr::LABEL, "Ready");
    h.button.surface_mut().clear_ops();

    h.button.connected(&h.attrs);
    assert!(h.surface().ops().is_empty());
    assert_eq!(h.surface().label_text(), "Ready");
}

#[test]
fn renderer_creates_icon_node_only_for_icons() {
    let mut surface = VirtualButton::new();
    let mut renderer = Renderer::new();

    let (state, _) = RenderState::resolve(&AttributeMap::from([("id", "b")]), false);
    renderer.apply(&mut surface, &state, None, attr::ID);
    assert!(!renderer.has_icon_node());
    assert!(surface.icon_node().is_none());

    let attrs = AttributeMap::from([("id", "b"), ("faIcon", r#"["fa-star"]"#)]);
    let (next, _) = RenderState::resolve(&attrs, false);
    renderer.apply(&mut surface, &next, Some(&state), attr::FA_ICON);
    assert!(renderer.has_icon_node());
    assert_eq!(surface.icon_node().unwrap().classes, vec!["fa-star"]);
}

#[test]
fn slot_changes_update_render_state() {
    let mut h = Harness::new();
    h.set(attr::ID, "b");
    assert!(!h.button.state().unwrap().has_slotted_content);

    h.assign("<em>Go</em>");
    assert!(h.button.state().unwrap().has_slotted_content);

    h.clear_slot();
    assert!(!h.button.state().unwrap().has_slotted_content);
    assert!(h.slot.assigned().is_empty());
}
