use std::collections::BTreeMap;

use crate::captions::transition::TransitionTable;
use crate::foundation::error::{SliderError, SliderResult};
use crate::foundation::ident::ElementId;
use crate::options::value::ConfigMap;
use crate::script::pipeline::LiteralStrategy;

/// Who owns the container markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// The widget sizes and classes the container itself.
    #[default]
    Generated,
    /// The caller writes the slide markup; only `id` is forced onto its attributes.
    Raw,
}

/// HTML attributes of the slider container element, sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContainerAttributes(BTreeMap<String, String>);

impl ContainerAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    450
}

/// Everything needed to render one slider.
///
/// Loaded from a JSON document; omitted fields take the defaults below.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliderSettings {
    /// Container element id, also the script variable name.
    pub id: ElementId,
    /// Container width in px (generated mode).
    #[serde(default = "default_width")]
    pub width: u32,
    /// Container height in px (generated mode).
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub mode: RenderMode,
    /// Extra class appended to the generated container classes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_class: Option<String>,
    /// Caller-owned container attributes (raw mode).
    #[serde(default)]
    pub container_attributes: ContainerAttributes,
    #[serde(default)]
    pub strategy: LiteralStrategy,
    /// Caption transition table; the stock table when omitted.
    #[serde(default)]
    pub caption_transitions: TransitionTable,
    /// Options object handed to the `$JssorSlider$` constructor.
    #[serde(default)]
    pub plugin_options: ConfigMap,
}

impl SliderSettings {
    pub fn new(id: ElementId) -> Self {
        Self {
            id,
            width: default_width(),
            height: default_height(),
            mode: RenderMode::default(),
            container_class: None,
            container_attributes: ContainerAttributes::new(),
            strategy: LiteralStrategy::default(),
            caption_transitions: TransitionTable::standard(),
            plugin_options: ConfigMap::new(),
        }
    }

    pub fn validate(&self) -> SliderResult<()> {
        if self.mode == RenderMode::Generated && (self.width == 0 || self.height == 0) {
            return Err(SliderError::validation(format!(
                "slider '{}' width/height must be > 0",
                self.id
            )));
        }
        self.caption_transitions.validate()
    }

    /// Container attributes for the current mode. `id` always equals the element id.
    pub fn container_attributes(&self) -> ContainerAttributes {
        let mut attrs = match self.mode {
            RenderMode::Generated => {
                let mut attrs = ContainerAttributes::new();
                attrs.insert(
                    "style",
                    format!("width:{}px; height:{}px", self.width, self.height),
                );
                let custom = self
                    .container_class
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(|c| format!(" {c}"))
                    .unwrap_or_default();
                attrs.insert(
                    "class",
                    format!("slider-container slider-container-{}{custom}", self.id),
                );
                attrs
            }
            RenderMode::Raw => self.container_attributes.clone(),
        };
        attrs.insert("id", self.id.as_str());
        attrs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/settings.rs"]
mod tests;
