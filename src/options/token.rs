use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{SliderError, SliderResult};

/// Easing enumerators exposed by the plugin under `$JssorEasing$`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Easing {
    Linear,
    Swing,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InElastic,
    OutElastic,
    InOutElastic,
    InBack,
    OutBack,
    InOutBack,
    InBounce,
    OutBounce,
    InOutBounce,
    InWave,
    OutWave,
    InJump,
    OutJump,
}

impl Easing {
    pub const ALL: [Easing; 36] = [
        Self::Linear,
        Self::Swing,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
        Self::InWave,
        Self::OutWave,
        Self::InJump,
        Self::OutJump,
    ];

    /// Fully qualified member expression, e.g. `$JssorEasing$.$EaseInOutSine`.
    pub fn script_name(self) -> &'static str {
        match self {
            Self::Linear => "$JssorEasing$.$EaseLinear",
            Self::Swing => "$JssorEasing$.$EaseSwing",
            Self::InQuad => "$JssorEasing$.$EaseInQuad",
            Self::OutQuad => "$JssorEasing$.$EaseOutQuad",
            Self::InOutQuad => "$JssorEasing$.$EaseInOutQuad",
            Self::InCubic => "$JssorEasing$.$EaseInCubic",
            Self::OutCubic => "$JssorEasing$.$EaseOutCubic",
            Self::InOutCubic => "$JssorEasing$.$EaseInOutCubic",
            Self::InQuart => "$JssorEasing$.$EaseInQuart",
            Self::OutQuart => "$JssorEasing$.$EaseOutQuart",
            Self::InOutQuart => "$JssorEasing$.$EaseInOutQuart",
            Self::InQuint => "$JssorEasing$.$EaseInQuint",
            Self::OutQuint => "$JssorEasing$.$EaseOutQuint",
            Self::InOutQuint => "$JssorEasing$.$EaseInOutQuint",
            Self::InSine => "$JssorEasing$.$EaseInSine",
            Self::OutSine => "$JssorEasing$.$EaseOutSine",
            Self::InOutSine => "$JssorEasing$.$EaseInOutSine",
            Self::InExpo => "$JssorEasing$.$EaseInExpo",
            Self::OutExpo => "$JssorEasing$.$EaseOutExpo",
            Self::InOutExpo => "$JssorEasing$.$EaseInOutExpo",
            Self::InCirc => "$JssorEasing$.$EaseInCirc",
            Self::OutCirc => "$JssorEasing$.$EaseOutCirc",
            Self::InOutCirc => "$JssorEasing$.$EaseInOutCirc",
            Self::InElastic => "$JssorEasing$.$EaseInElastic",
            Self::OutElastic => "$JssorEasing$.$EaseOutElastic",
            Self::InOutElastic => "$JssorEasing$.$EaseInOutElastic",
            Self::InBack => "$JssorEasing$.$EaseInBack",
            Self::OutBack => "$JssorEasing$.$EaseOutBack",
            Self::InOutBack => "$JssorEasing$.$EaseInOutBack",
            Self::InBounce => "$JssorEasing$.$EaseInBounce",
            Self::OutBounce => "$JssorEasing$.$EaseOutBounce",
            Self::InOutBounce => "$JssorEasing$.$EaseInOutBounce",
            Self::InWave => "$JssorEasing$.$EaseInWave",
            Self::OutWave => "$JssorEasing$.$EaseOutWave",
            Self::InJump => "$JssorEasing$.$EaseInJump",
            Self::OutJump => "$JssorEasing$.$EaseOutJump",
        }
    }
}

/// Plugin constant that must appear in the script as a bare identifier, never as a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReservedToken {
    /// `$JssorSlider$`, the plugin constructor.
    Slider,
    BulletNavigator,
    ArrowNavigator,
    ThumbnailNavigator,
    SlideshowRunner,
    CaptionSlider,
    Easing(Easing),
}

impl ReservedToken {
    /// Class constants accepted as `$Class` values of the sub-option blocks.
    pub const CLASSES: [ReservedToken; 6] = [
        Self::Slider,
        Self::BulletNavigator,
        Self::ArrowNavigator,
        Self::ThumbnailNavigator,
        Self::SlideshowRunner,
        Self::CaptionSlider,
    ];

    /// The whole closed catalog: class constants first, then every easing member.
    pub fn catalog() -> impl Iterator<Item = ReservedToken> {
        Self::CLASSES
            .into_iter()
            .chain(Easing::ALL.into_iter().map(Self::Easing))
    }

    pub fn script_name(self) -> &'static str {
        match self {
            Self::Slider => "$JssorSlider$",
            Self::BulletNavigator => "$JssorBulletNavigator$",
            Self::ArrowNavigator => "$JssorArrowNavigator$",
            Self::ThumbnailNavigator => "$JssorThumbnailNavigator$",
            Self::SlideshowRunner => "$JssorSlideshowRunner$",
            Self::CaptionSlider => "$JssorCaptionSlider$",
            Self::Easing(e) => e.script_name(),
        }
    }

    /// The form the generic serializer produces for this token: its name in double quotes.
    pub fn quoted(self) -> String {
        format!("\"{}\"", self.script_name())
    }
}

impl fmt::Display for ReservedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.script_name())
    }
}

impl FromStr for ReservedToken {
    type Err = SliderError;

    fn from_str(s: &str) -> SliderResult<Self> {
        Self::catalog()
            .find(|t| t.script_name() == s)
            .ok_or_else(|| SliderError::validation(format!("unknown reserved token '{s}'")))
    }
}

impl serde::Serialize for ReservedToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.script_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/token.rs"]
mod tests;
