use std::fmt;

use crate::foundation::error::{SliderError, SliderResult};

/// Words a script binding may not use as its name.
const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "implements", "import", "in", "instanceof", "interface", "let", "new", "null",
    "package", "private", "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Globals the plugin script defines (`$JssorSlider$`, `$JssorEasing$`, ...).
const PLUGIN_NAMESPACE: &str = "$Jssor";

/// Return `true` when `s` can be used verbatim as a script binding name.
///
/// Accepts `[A-Za-z_$][A-Za-z0-9_$]*` minus reserved words.
pub fn is_script_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !RESERVED_WORDS.contains(&s)
}

/// DOM element id of a slider container.
///
/// The same string names the script variable holding the plugin instance, so it must be a
/// valid script identifier outside the plugin's `$Jssor` namespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ElementId(String);

impl ElementId {
    /// Create an id, rejecting strings that are not script identifiers.
    pub fn new(id: impl Into<String>) -> SliderResult<Self> {
        let id = id.into();
        if !is_script_identifier(&id) {
            return Err(SliderError::validation(format!(
                "element id '{id}' is not a valid script identifier"
            )));
        }
        if id.starts_with(PLUGIN_NAMESPACE) {
            return Err(SliderError::validation(format!(
                "element id '{id}' would shadow a plugin global"
            )));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ElementId {
    type Error = SliderError;

    fn try_from(value: String) -> SliderResult<Self> {
        Self::new(value)
    }
}

impl From<ElementId> for String {
    fn from(id: ElementId) -> Self {
        id.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
