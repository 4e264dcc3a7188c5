use crate::foundation::error::{SliderError, SliderResult};
use crate::options::token::Easing;
use crate::options::value::{ConfigMap, RawIdentifier};
use crate::script::literal;

/// Per-axis easing curves of a caption transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AxisEasing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Easing>,
}

impl AxisEasing {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn to_config(self) -> ConfigMap {
        let mut map = ConfigMap::new();
        let axes = [
            ("$Left", self.left),
            ("$Top", self.top),
            ("$Zoom", self.zoom),
            ("$Opacity", self.opacity),
            ("$Rotate", self.rotate),
            ("$Clip", self.clip),
        ];
        for (key, easing) in axes {
            if let Some(e) = easing {
                map.insert(key, e);
            }
        }
        map
    }
}

/// One caption animation record of the plugin's caption slider.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CaptionTransition {
    pub duration_ms: u32,
    /// Horizontal offset as a fraction of the caption width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical offset as a fraction of the caption height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    /// Clip direction bit mask.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip: Option<u32>,
    #[serde(default, rename = "move")]
    pub move_with_clip: bool,
    #[serde(default)]
    pub easing: AxisEasing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u32>,
    /// Rounds of rotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_rotate: Option<f64>,
}

impl CaptionTransition {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            x: None,
            y: None,
            zoom: None,
            rotate: None,
            clip: None,
            move_with_clip: false,
            easing: AxisEasing::default(),
            opacity: None,
            round_rotate: None,
        }
    }

    pub fn validate(&self) -> SliderResult<()> {
        if self.duration_ms == 0 {
            return Err(SliderError::validation(
                "caption transition duration_ms must be > 0",
            ));
        }
        for (name, v) in [
            ("x", self.x),
            ("y", self.y),
            ("rotate", self.rotate),
            ("round_rotate", self.round_rotate),
        ] {
            if v.is_some_and(|v| !v.is_finite()) {
                return Err(SliderError::validation(format!(
                    "caption transition {name} must be finite when set"
                )));
            }
        }
        Ok(())
    }

    /// Plugin-facing record with `$`-prefixed keys in the order the plugin documents them.
    pub fn to_config(&self) -> ConfigMap {
        let mut map = ConfigMap::new().with("$Duration", self.duration_ms);
        if let Some(x) = self.x {
            map.insert("x", x);
        }
        if let Some(y) = self.y {
            map.insert("y", y);
        }
        if let Some(zoom) = self.zoom {
            map.insert("$Zoom", zoom);
        }
        if let Some(rotate) = self.rotate {
            map.insert("$Rotate", rotate);
        }
        if let Some(clip) = self.clip {
            map.insert("$Clip", clip);
        }
        if self.move_with_clip {
            map.insert("$Move", true);
        }
        if !self.easing.is_empty() {
            map.insert("$Easing", self.easing.to_config());
        }
        if let Some(opacity) = self.opacity {
            map.insert("$Opacity", opacity);
        }
        if let Some(round) = self.round_rotate {
            map.insert("$Round", ConfigMap::new().with("$Rotate", round));
        }
        map
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NamedTransition {
    pub name: String,
    #[serde(flatten)]
    pub transition: CaptionTransition,
}

/// Ordered catalog of caption transitions, addressed by name from caption markup.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    entries: Vec<NamedTransition>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the transition stored under `name`.
    pub fn with(mut self, name: impl Into<String>, transition: CaptionTransition) -> Self {
        let name = name.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.transition = transition,
            None => self.entries.push(NamedTransition { name, transition }),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&CaptionTransition> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.transition)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> SliderResult<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(SliderError::validation(format!(
                    "caption transition #{i} has an empty name"
                )));
            }
            if self.entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(SliderError::validation(format!(
                    "duplicate caption transition '{}'",
                    entry.name
                )));
            }
            entry.transition.validate().map_err(|e| match e {
                SliderError::Validation(msg) => {
                    SliderError::validation(format!("'{}': {msg}", entry.name))
                }
                other => other,
            })?;
        }
        Ok(())
    }

    /// Script statements declaring `var` as an object keyed by transition name.
    ///
    /// Must be registered before any statement that references `var`.
    pub fn declaration(&self, var: &RawIdentifier) -> SliderResult<String> {
        let mut out = format!("var {var} = [];");
        for entry in &self.entries {
            let name = literal::quote(&entry.name)?;
            let record = literal::encode(&entry.transition.to_config())?;
            out.push_str(&format!("\n{var}[{name}] = {record};"));
        }
        Ok(out)
    }

    /// The stock effects shipped with the widget.
    pub fn standard() -> Self {
        let slide = |x: Option<f64>, y: Option<f64>| {
            let mut t = CaptionTransition::new(900);
            t.x = x;
            t.y = y;
            if x.is_some() {
                t.easing.left = Some(Easing::InOutSine);
            } else {
                t.easing.top = Some(Easing::InOutSine);
            }
            t.opacity = Some(2);
            t
        };
        let spin = |zoom: u32, zoom_easing: Easing, rotate_easing: Easing, round: f64| {
            let mut t = CaptionTransition::new(900);
            t.zoom = Some(zoom);
            t.rotate = Some(1.0);
            t.easing.zoom = Some(zoom_easing);
            t.easing.opacity = Some(Easing::Linear);
            t.easing.rotate = Some(rotate_easing);
            t.opacity = Some(2);
            t.round_rotate = Some(round);
            t
        };
        let move_clip = |clip: u32| {
            let mut t = CaptionTransition::new(900);
            t.clip = Some(clip);
            t.move_with_clip = true;
            t.easing.clip = Some(Easing::InOutCubic);
            t
        };

        let mut zoom_fade = CaptionTransition::new(900);
        zoom_fade.zoom = Some(11);
        zoom_fade.easing.zoom = Some(Easing::OutQuad);
        zoom_fade.easing.opacity = Some(Easing::Linear);
        zoom_fade.opacity = Some(2);

        let mut corner_spin = CaptionTransition::new(900);
        corner_spin.x = Some(-0.6);
        corner_spin.y = Some(-0.6);
        corner_spin.zoom = Some(11);
        corner_spin.rotate = Some(1.0);
        corner_spin.easing = AxisEasing {
            left: Some(Easing::InCubic),
            top: Some(Easing::InCubic),
            zoom: Some(Easing::InCubic),
            opacity: Some(Easing::Linear),
            rotate: Some(Easing::InCubic),
            clip: None,
        };
        corner_spin.opacity = Some(2);
        corner_spin.round_rotate = Some(0.8);

        let mut clip_lr = CaptionTransition::new(900);
        clip_lr.clip = Some(15);
        clip_lr.easing.clip = Some(Easing::InOutCubic);
        clip_lr.opacity = Some(2);

        Self::new()
            .with("L", slide(Some(0.6), None))
            .with("R", slide(Some(-0.6), None))
            .with("T", slide(None, Some(0.6)))
            .with("B", slide(None, Some(-0.6)))
            .with("ZMF|10", zoom_fade)
            .with("RTT|10", spin(11, Easing::OutQuad, Easing::InExpo, 0.8))
            .with("RTT|2", spin(3, Easing::InQuad, Easing::InQuad, 0.5))
            .with("RTTL|BR", corner_spin)
            .with("CLIP|LR", clip_lr)
            .with("MCLIP|L", move_clip(1))
            .with("MCLIP|R", move_clip(2))
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/captions/transition.rs"]
mod tests;
