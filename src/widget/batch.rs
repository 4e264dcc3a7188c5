use std::collections::HashSet;

use rayon::prelude::*;

use crate::foundation::error::{SliderError, SliderResult};
use crate::options::value::RawIdentifier;
use crate::widget::payload::caption_table_var;
use crate::widget::{RenderedSlider, SliderWidget};

/// Prepare many sliders in parallel. Results keep input order; one failure does not affect
/// the others.
#[tracing::instrument(skip(widgets), fields(count = widgets.len()))]
pub fn prerender(widgets: &[SliderWidget]) -> Vec<SliderResult<RenderedSlider>> {
    widgets.par_iter().map(SliderWidget::prepare).collect()
}

/// Reject pages where two sliders would declare the same script variable.
///
/// Every slider declares its id; sliders with captions also declare their transition table.
pub fn ensure_unique_ids(widgets: &[SliderWidget]) -> SliderResult<()> {
    let mut seen = HashSet::new();
    for w in widgets {
        let table = if w.captions_enabled() {
            Some(caption_table_var(w.id())?)
        } else {
            None
        };
        let declared = std::iter::once(w.id().as_str())
            .chain(table.as_ref().map(RawIdentifier::as_str));
        for name in declared {
            if !seen.insert(name.to_string()) {
                return Err(SliderError::validation(format!(
                    "duplicate slider id '{}': script variable '{name}' is declared twice",
                    w.id()
                )));
            }
        }
    }
    Ok(())
}
