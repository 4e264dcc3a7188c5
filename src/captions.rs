pub(crate) mod transition;

/// Top-level option whose presence turns captions on.
pub const CAPTION_OPTIONS_KEY: &str = "$CaptionSliderOptions";

/// String value marking where the transition table reference goes.
pub const CAPTION_TRANSITIONS_PLACEHOLDER: &str = "CaptionTransitionsPlaceholder";
