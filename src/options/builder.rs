use crate::captions::{CAPTION_OPTIONS_KEY, CAPTION_TRANSITIONS_PLACEHOLDER};
use crate::foundation::error::{SliderError, SliderResult};
use crate::options::token::ReservedToken;
use crate::options::value::{ConfigMap, ConfigValue};

const BULLET_NAVIGATOR_KEY: &str = "$BulletNavigatorOptions";
const ARROW_NAVIGATOR_KEY: &str = "$ArrowNavigatorOptions";
const THUMBNAIL_NAVIGATOR_KEY: &str = "$ThumbnailNavigatorOptions";
const SLIDESHOW_KEY: &str = "$SlideshowOptions";

/// Sub-option blocks and the class constant each one must carry.
const CLASS_BLOCKS: [(&str, ReservedToken); 5] = [
    (BULLET_NAVIGATOR_KEY, ReservedToken::BulletNavigator),
    (ARROW_NAVIGATOR_KEY, ReservedToken::ArrowNavigator),
    (THUMBNAIL_NAVIGATOR_KEY, ReservedToken::ThumbnailNavigator),
    (SLIDESHOW_KEY, ReservedToken::SlideshowRunner),
    (CAPTION_OPTIONS_KEY, ReservedToken::CaptionSlider),
];

/// Builder for the top-level `$JssorSlider$` options object.
///
/// Sub-option blocks get their `$Class` constant filled in; extra settings passed alongside
/// are appended after it.
#[derive(Debug, Default)]
pub struct PluginOptionsBuilder {
    options: ConfigMap,
}

impl PluginOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set any option verbatim.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.options.insert(key, value);
        self
    }

    pub fn auto_play(self, on: bool) -> Self {
        self.option("$AutoPlay", on)
    }

    pub fn bullet_navigator(self, extra: ConfigMap) -> Self {
        self.class_block(BULLET_NAVIGATOR_KEY, ReservedToken::BulletNavigator, extra)
    }

    pub fn arrow_navigator(self, extra: ConfigMap) -> Self {
        self.class_block(ARROW_NAVIGATOR_KEY, ReservedToken::ArrowNavigator, extra)
    }

    pub fn thumbnail_navigator(self, extra: ConfigMap) -> Self {
        self.class_block(
            THUMBNAIL_NAVIGATOR_KEY,
            ReservedToken::ThumbnailNavigator,
            extra,
        )
    }

    /// Slide-to-slide transitions run by the slideshow runner.
    pub fn slideshow(self, transitions: Vec<ConfigValue>, extra: ConfigMap) -> Self {
        let mut block = ConfigMap::new().with("$Transitions", transitions);
        block.extend(extra);
        self.class_block(SLIDESHOW_KEY, ReservedToken::SlideshowRunner, block)
    }

    /// Enable captions, wiring the transition table placeholder.
    pub fn captions(self, play_in_mode: u32, play_out_mode: u32) -> Self {
        let block = ConfigMap::new()
            .with("$CaptionTransitions", CAPTION_TRANSITIONS_PLACEHOLDER)
            .with("$PlayInMode", play_in_mode)
            .with("$PlayOutMode", play_out_mode);
        self.class_block(CAPTION_OPTIONS_KEY, ReservedToken::CaptionSlider, block)
    }

    fn class_block(mut self, key: &str, class: ReservedToken, extra: ConfigMap) -> Self {
        let mut block = ConfigMap::new().with("$Class", class);
        block.extend(extra);
        self.options.insert(key, block);
        self
    }

    /// Finish, checking that every known sub-option block still carries its class constant.
    pub fn build(self) -> SliderResult<ConfigMap> {
        for (key, class) in CLASS_BLOCKS {
            let Some(value) = self.options.get(key) else {
                continue;
            };
            let block = value.as_map().ok_or_else(|| {
                SliderError::validation(format!("plugin option '{key}' must be an object"))
            })?;
            if block.get("$Class") != Some(&ConfigValue::Token(class)) {
                return Err(SliderError::validation(format!(
                    "plugin option '{key}' must have $Class {class}"
                )));
            }
        }
        Ok(self.options)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/builder.rs"]
mod tests;
