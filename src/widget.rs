//! Slider widget: settings in, script payload plus container markup out.

pub(crate) mod batch;
pub(crate) mod payload;
pub(crate) mod settings;
pub(crate) mod view;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{SliderError, SliderResult};
use crate::foundation::ident::ElementId;
use crate::script::pipeline::captions_enabled;
use crate::widget::payload::{ScriptPayload, build_script};
use crate::widget::settings::{ContainerAttributes, SliderSettings};
use crate::widget::view::View;

/// Stylesheet the plugin's navigator skins rely on.
pub const SLIDER_CSS: &str = ".thumbnavigator div,.w,.p,.c{box-sizing: content-box}";

const CONTAINER_TAG: &str = "div";

/// Output of [`SliderWidget::prepare`], ready to be emitted into a [`View`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSlider {
    pub id: ElementId,
    pub attributes: ContainerAttributes,
    pub script: ScriptPayload,
    pub css: &'static str,
}

impl RenderedSlider {
    /// Register css and script, then write the (empty) container element.
    pub fn emit(&self, view: &mut dyn View) -> SliderResult<()> {
        view.register_css(self.css)?;
        view.register_js(&self.script.to_js())?;
        view.begin_tag(CONTAINER_TAG, &self.attributes)?;
        view.end_tag(CONTAINER_TAG)
    }
}

/// A validated slider ready to render.
#[derive(Clone, Debug)]
pub struct SliderWidget {
    settings: SliderSettings,
}

impl SliderWidget {
    pub fn new(settings: SliderSettings) -> SliderResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Parse slider settings from a JSON reader.
    ///
    /// String option values naming a plugin constant are promoted to tokens.
    pub fn from_reader<R: std::io::Read>(r: R) -> SliderResult<Self> {
        let mut settings: SliderSettings = serde_json::from_reader(r)
            .map_err(|e| SliderError::validation(format!("parse slider settings JSON: {e}")))?;
        settings.plugin_options.promote_reserved();
        Self::new(settings)
    }

    /// Parse slider settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SliderResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SliderError::validation(format!("open slider settings '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    pub fn id(&self) -> &ElementId {
        &self.settings.id
    }

    pub fn captions_enabled(&self) -> bool {
        captions_enabled(&self.settings.plugin_options)
    }

    /// Produce script and markup without touching any view.
    #[tracing::instrument(skip(self), fields(id = %self.settings.id))]
    pub fn prepare(&self) -> SliderResult<RenderedSlider> {
        let s = &self.settings;
        let script = build_script(&s.id, &s.plugin_options, &s.caption_transitions, s.strategy)?;
        Ok(RenderedSlider {
            id: s.id.clone(),
            attributes: s.container_attributes(),
            script,
            css: SLIDER_CSS,
        })
    }

    /// Prepare and emit. Nothing reaches `view` when preparation fails.
    pub fn render(&self, view: &mut dyn View) -> SliderResult<()> {
        self.prepare()?.emit(view)
    }
}

#[cfg(test)]
#[path = "../tests/unit/widget/widget.rs"]
mod tests;
