use super::*;

fn id(s: &str) -> ElementId {
    ElementId::new(s).unwrap()
}

#[test]
fn generated_mode_sizes_and_classes_container() {
    let mut settings = SliderSettings::new(id("w0"));
    settings.container_class = Some("gallery".to_string());
    let attrs = settings.container_attributes();
    assert_eq!(attrs.get("id"), Some("w0"));
    assert_eq!(attrs.get("style"), Some("width:600px; height:450px"));
    assert_eq!(
        attrs.get("class"),
        Some("slider-container slider-container-w0 gallery")
    );
}

#[test]
fn generated_mode_drops_caller_attributes() {
    let mut settings = SliderSettings::new(id("w0"));
    settings.container_attributes.insert("data-x", "1");
    let attrs = settings.container_attributes();
    assert_eq!(attrs.get("data-x"), None);
    assert_eq!(
        attrs.get("class"),
        Some("slider-container slider-container-w0")
    );
}

#[test]
fn raw_mode_keeps_caller_attributes_and_forces_id() {
    let mut settings = SliderSettings::new(id("hero"));
    settings.mode = RenderMode::Raw;
    settings.container_attributes.insert("class", "my-slider");
    settings.container_attributes.insert("id", "ignored");
    settings.container_attributes.insert("style", "width:100%");
    let attrs = settings.container_attributes();
    assert_eq!(attrs.get("id"), Some("hero"));
    assert_eq!(attrs.get("class"), Some("my-slider"));
    assert_eq!(attrs.get("style"), Some("width:100%"));
}

#[test]
fn attributes_iterate_sorted() {
    let attrs = SliderSettings::new(id("w1")).container_attributes();
    assert_eq!(
        attrs.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec!["class", "id", "style"]
    );
}

#[test]
fn validate_rejects_zero_size_in_generated_mode() {
    let mut settings = SliderSettings::new(id("w0"));
    settings.width = 0;
    assert!(settings.validate().is_err());
    settings.mode = RenderMode::Raw;
    assert!(settings.validate().is_ok());
}

#[test]
fn json_defaults_apply() {
    let settings: SliderSettings = serde_json::from_str(r#"{"id":"w3"}"#).unwrap();
    assert_eq!(settings.width, 600);
    assert_eq!(settings.height, 450);
    assert_eq!(settings.mode, RenderMode::Generated);
    assert_eq!(settings.strategy, LiteralStrategy::TextRewrite);
    assert_eq!(settings.caption_transitions, TransitionTable::standard());
    assert!(settings.plugin_options.is_empty());
}

#[test]
fn json_rejects_unknown_fields_and_bad_ids() {
    assert!(serde_json::from_str::<SliderSettings>(r#"{"id":"w3","responsive":true}"#).is_err());
    assert!(serde_json::from_str::<SliderSettings>(r#"{"id":"w-3"}"#).is_err());
}
