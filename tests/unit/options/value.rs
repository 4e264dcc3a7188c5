use super::*;
use serde_json::json;

#[test]
fn insert_keeps_first_position_and_replaces_value() {
    let mut map = ConfigMap::new();
    map.insert("b", 1);
    map.insert("a", 2);
    let prev = map.insert("b", 3);
    assert_eq!(prev, Some(ConfigValue::Integer(1)));
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    assert_eq!(map.get("b"), Some(&ConfigValue::Integer(3)));
    assert_eq!(map.len(), 2);
}

#[test]
fn deserialize_preserves_document_order() {
    let map: ConfigMap = serde_json::from_str(r#"{"z":1,"a":{"y":true,"b":null},"m":[1.5,"x"]}"#)
        .unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a", "m"]);
    let inner = map.get("a").and_then(ConfigValue::as_map).unwrap();
    assert_eq!(inner.keys().collect::<Vec<_>>(), vec!["y", "b"]);
    assert_eq!(
        map.get("m"),
        Some(&ConfigValue::Seq(vec![
            ConfigValue::Float(1.5),
            ConfigValue::Str("x".to_string())
        ]))
    );
}

#[test]
fn from_json_value_keeps_integers_and_order() {
    let v = ConfigValue::from(json!({ "$AutoPlay": true, "$Idle": 4000, "$Scale": 0.5 }));
    let map = v.as_map().unwrap();
    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        vec!["$AutoPlay", "$Idle", "$Scale"]
    );
    assert_eq!(map.get("$Idle"), Some(&ConfigValue::Integer(4000)));
    assert_eq!(map.get("$Scale"), Some(&ConfigValue::Float(0.5)));
}

#[test]
fn to_json_renders_tokens_as_strings() {
    let map = ConfigMap::new()
        .with("$Class", ReservedToken::BulletNavigator)
        .with("$Easing", Easing::OutQuad);
    assert_eq!(
        map.to_json().unwrap(),
        json!({ "$Class": "$JssorBulletNavigator$", "$Easing": "$JssorEasing$.$EaseOutQuad" })
    );
}

#[test]
fn to_json_rejects_raw_and_non_finite() {
    let raw = ConfigMap::new().with("t", RawIdentifier::new("table").unwrap());
    assert!(matches!(raw.to_json(), Err(SliderError::Serialization(_))));

    let nan = ConfigMap::new().with("x", f64::NAN);
    assert!(matches!(nan.to_json(), Err(SliderError::Serialization(_))));
}

#[test]
fn raw_identifier_is_validated() {
    assert!(RawIdentifier::new("w0_CaptionTransitions").is_ok());
    assert!(RawIdentifier::new("not valid").is_err());
}

#[test]
fn promote_reserved_converts_exact_catalog_strings_only() {
    let mut map: ConfigMap = serde_json::from_str(
        r#"{"$Class":"$JssorArrowNavigator$","list":["$JssorEasing$.$EaseLinear","$Jssor"],"n":{"c":"$JssorCaptionSlider$ "}}"#,
    )
    .unwrap();
    map.promote_reserved();

    assert_eq!(
        map.get("$Class"),
        Some(&ConfigValue::Token(ReservedToken::ArrowNavigator))
    );
    assert_eq!(
        map.get("list"),
        Some(&ConfigValue::Seq(vec![
            ConfigValue::Token(ReservedToken::Easing(Easing::Linear)),
            ConfigValue::Str("$Jssor".to_string()),
        ]))
    );
    let nested = map.get("n").and_then(ConfigValue::as_map).unwrap();
    assert_eq!(nested.get("c").and_then(ConfigValue::as_str), Some("$JssorCaptionSlider$ "));
}

#[test]
fn replace_first_str_is_depth_first_and_single() {
    let mut map = ConfigMap::new()
        .with("a", ConfigMap::new().with("p", "marker"))
        .with("b", "marker");
    let replacement = ConfigValue::Integer(7);
    assert!(map.replace_first_str("marker", &replacement));
    let a = map.get("a").and_then(ConfigValue::as_map).unwrap();
    assert_eq!(a.get("p"), Some(&ConfigValue::Integer(7)));
    assert_eq!(map.get("b").and_then(ConfigValue::as_str), Some("marker"));
    assert!(!ConfigMap::new().replace_first_str("marker", &replacement));
}

#[test]
fn integers_beyond_i64_are_rejected_not_rounded() {
    let max: ConfigMap = serde_json::from_str(r#"{"n":9223372036854775807}"#).unwrap();
    assert_eq!(max.get("n"), Some(&ConfigValue::Integer(i64::MAX)));

    let err = serde_json::from_str::<ConfigMap>(r#"{"n":18446744073709551615}"#).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
