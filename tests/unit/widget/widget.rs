use super::*;
use crate::options::builder::PluginOptionsBuilder;
use crate::options::token::ReservedToken;
use crate::options::value::{ConfigMap, ConfigValue};
use crate::script::pipeline::LiteralStrategy;
use crate::widget::settings::RenderMode;
use crate::widget::view::InMemoryView;

fn settings(id: &str) -> SliderSettings {
    SliderSettings::new(ElementId::new(id).unwrap())
}

#[test]
fn render_emits_css_script_and_container() {
    let mut s = settings("w0");
    s.plugin_options = PluginOptionsBuilder::new()
        .auto_play(true)
        .bullet_navigator(ConfigMap::new())
        .build()
        .unwrap();
    let widget = SliderWidget::new(s).unwrap();

    let mut view = InMemoryView::new();
    widget.render(&mut view).unwrap();

    assert_eq!(view.css(), [SLIDER_CSS.to_string()]);
    assert_eq!(
        view.js(),
        [
            "var w0 = new $JssorSlider$('w0', {\"$AutoPlay\":true,\"$BulletNavigatorOptions\":{\"$Class\":$JssorBulletNavigator$}});\n"
                .to_string()
        ]
    );
    assert_eq!(
        view.body(),
        "<div class=\"slider-container slider-container-w0\" id=\"w0\" style=\"width:600px; height:450px\"></div>\n"
    );
}

#[test]
fn failed_preparation_leaves_view_untouched() {
    let mut s = settings("w0");
    s.plugin_options = ConfigMap::new().with("$Idle", f64::NAN);
    let widget = SliderWidget::new(s).unwrap();

    let mut view = InMemoryView::new();
    assert!(widget.render(&mut view).is_err());
    assert!(view.css().is_empty());
    assert!(view.js().is_empty());
    assert!(view.body().is_empty());
}

#[test]
fn two_sliders_share_css_but_not_variables() {
    let mut view = InMemoryView::new();
    for id in ["w0", "w1"] {
        let mut s = settings(id);
        s.plugin_options = PluginOptionsBuilder::new().captions(1, 3).build().unwrap();
        SliderWidget::new(s).unwrap().render(&mut view).unwrap();
    }
    assert_eq!(view.css().len(), 1);
    assert_eq!(view.js().len(), 2);
    assert!(view.js()[0].contains("var w0_CaptionTransitions = [];"));
    assert!(view.js()[1].contains("var w1_CaptionTransitions = [];"));
    assert!(!view.js()[1].contains("w0"));
}

#[test]
fn raw_mode_renders_caller_attributes() {
    let mut s = settings("hero");
    s.mode = RenderMode::Raw;
    s.container_attributes.insert("class", "custom");
    let rendered = SliderWidget::new(s).unwrap().prepare().unwrap();
    assert_eq!(rendered.attributes.get("class"), Some("custom"));
    assert_eq!(rendered.attributes.get("id"), Some("hero"));
    assert_eq!(rendered.attributes.get("style"), None);
}

#[test]
fn from_reader_promotes_constants_for_native_strategy() {
    let json = r#"{
        "id": "w2",
        "strategy": "native",
        "plugin_options": {
            "$ArrowNavigatorOptions": { "$Class": "$JssorArrowNavigator$", "$ChanceToShow": 2 },
            "$CaptionSliderOptions": {
                "$Class": "$JssorCaptionSlider$",
                "$CaptionTransitions": "CaptionTransitionsPlaceholder"
            }
        }
    }"#;
    let widget = SliderWidget::from_reader(json.as_bytes()).unwrap();
    assert!(widget.captions_enabled());
    assert_eq!(widget.settings().strategy, LiteralStrategy::Native);

    let arrows = widget
        .settings()
        .plugin_options
        .get("$ArrowNavigatorOptions")
        .and_then(ConfigValue::as_map)
        .unwrap();
    assert_eq!(
        arrows.get("$Class"),
        Some(&ConfigValue::Token(ReservedToken::ArrowNavigator))
    );

    let rendered = widget.prepare().unwrap();
    assert_eq!(
        rendered.script.init_statement,
        r#"var w2 = new $JssorSlider$('w2', {"$ArrowNavigatorOptions":{"$Class":$JssorArrowNavigator$,"$ChanceToShow":2},"$CaptionSliderOptions":{"$Class":$JssorCaptionSlider$,"$CaptionTransitions":w2_CaptionTransitions}});"#
    );
}

#[test]
fn from_reader_reports_bad_json_as_validation() {
    let err = SliderWidget::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, SliderError::Validation(_)));
}

#[test]
fn new_validates_settings() {
    let mut s = settings("w0");
    s.height = 0;
    assert!(SliderWidget::new(s).is_err());
}

#[test]
fn from_reader_rejects_out_of_range_integers() {
    let json = r#"{"id":"w0","plugin_options":{"$Idle":18446744073709551615}}"#;
    let err = SliderWidget::from_reader(json.as_bytes()).unwrap_err();
    assert!(matches!(err, SliderError::Validation(_)));
}
