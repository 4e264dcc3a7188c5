use super::*;
use crate::options::token::ReservedToken;

fn table() -> RawIdentifier {
    RawIdentifier::new("w0_CaptionTransitions").unwrap()
}

fn caption_options() -> ConfigMap {
    ConfigMap::new().with("$AutoPlay", true).with(
        CAPTION_OPTIONS_KEY,
        ConfigMap::new()
            .with("$Class", ReservedToken::CaptionSlider)
            .with("$CaptionTransitions", CAPTION_TRANSITIONS_PLACEHOLDER)
            .with("$PlayInMode", 1)
            .with("$PlayOutMode", 3),
    )
}

#[test]
fn text_rewrite_unquotes_tokens() {
    let options = ConfigMap::new()
        .with("a", 1)
        .with("b", ReservedToken::Slider);
    let out = options_literal(&options, None, LiteralStrategy::TextRewrite).unwrap();
    assert_eq!(out, r#"{"a":1,"b":$JssorSlider$}"#);
}

#[test]
fn captions_gate_on_top_level_key() {
    assert!(captions_enabled(&caption_options()));
    let nested = ConfigMap::new().with("x", ConfigMap::new().with(CAPTION_OPTIONS_KEY, 1));
    assert!(!captions_enabled(&nested));
}

#[test]
fn both_strategies_splice_the_table_reference() {
    let expected = r#"{"$AutoPlay":true,"$CaptionSliderOptions":{"$Class":$JssorCaptionSlider$,"$CaptionTransitions":w0_CaptionTransitions,"$PlayInMode":1,"$PlayOutMode":3}}"#;
    for strategy in [LiteralStrategy::TextRewrite, LiteralStrategy::Native] {
        let out = options_literal(&caption_options(), Some(&table()), strategy).unwrap();
        assert_eq!(out, expected, "{strategy:?}");
    }
}

#[test]
fn without_table_the_placeholder_stays_quoted() {
    let out = options_literal(&caption_options(), None, LiteralStrategy::TextRewrite).unwrap();
    assert!(out.contains(&quoted_placeholder()));
}

#[test]
fn missing_placeholder_is_not_an_error() {
    let options = ConfigMap::new().with(
        CAPTION_OPTIONS_KEY,
        ConfigMap::new().with("$Class", ReservedToken::CaptionSlider),
    );
    for strategy in [LiteralStrategy::TextRewrite, LiteralStrategy::Native] {
        let out = options_literal(&options, Some(&table()), strategy).unwrap();
        assert_eq!(
            out,
            r#"{"$CaptionSliderOptions":{"$Class":$JssorCaptionSlider$}}"#
        );
    }
}

#[test]
fn native_keeps_colliding_plain_strings_quoted() {
    let options = ConfigMap::new().with("title", "$JssorSlider$");
    let native = options_literal(&options, None, LiteralStrategy::Native).unwrap();
    let text = options_literal(&options, None, LiteralStrategy::TextRewrite).unwrap();
    assert_eq!(native, r#"{"title":"$JssorSlider$"}"#);
    assert_eq!(text, r#"{"title":$JssorSlider$}"#);
}

#[test]
fn placeholder_as_key_is_only_rewritten_in_text() {
    let options = ConfigMap::new()
        .with(CAPTION_OPTIONS_KEY, ConfigMap::new())
        .with(CAPTION_TRANSITIONS_PLACEHOLDER, 0);
    let out = options_literal(&options, Some(&table()), LiteralStrategy::TextRewrite).unwrap();
    assert!(out.contains("w0_CaptionTransitions:0"));
    assert!(!out.contains(&quoted_placeholder()));
}

#[test]
fn serialization_errors_propagate() {
    let options = ConfigMap::new().with("x", f64::NAN);
    for strategy in [LiteralStrategy::TextRewrite, LiteralStrategy::Native] {
        assert!(options_literal(&options, None, strategy).is_err());
    }
}

#[test]
fn strategy_names_are_snake_case() {
    let s: LiteralStrategy = serde_json::from_str("\"text_rewrite\"").unwrap();
    assert_eq!(s, LiteralStrategy::TextRewrite);
    let s: LiteralStrategy = serde_json::from_str("\"native\"").unwrap();
    assert_eq!(s, LiteralStrategy::Native);
}
