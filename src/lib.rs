//! Server-side rendering of Jssor image sliders.
//!
//! Plugin options are held in an ordered [`ConfigMap`] and turned into the object literal
//! passed to the `$JssorSlider$` constructor:
//!
//! - [`serialize`] encodes the options as compact JSON (plugin constants still quoted)
//! - [`unquote_reserved`] turns quoted plugin constants back into bare identifiers
//! - [`substitute_placeholder`] splices the caption transition table reference in
//!
//! [`SliderWidget`] wires the literal into an init statement, declares the
//! [`TransitionTable`] when captions are on, and emits script, css and the container element
//! into a [`View`].
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod captions;
pub(crate) mod options;
pub(crate) mod script;
pub(crate) mod widget;

pub use crate::foundation::error::{SliderError, SliderResult};
pub use crate::foundation::ident::{ElementId, is_script_identifier};

pub use crate::captions::transition::{
    AxisEasing, CaptionTransition, NamedTransition, TransitionTable,
};
pub use crate::captions::{CAPTION_OPTIONS_KEY, CAPTION_TRANSITIONS_PLACEHOLDER};
pub use crate::options::builder::PluginOptionsBuilder;
pub use crate::options::token::{Easing, ReservedToken};
pub use crate::options::value::{ConfigMap, ConfigValue, RawIdentifier};
pub use crate::script::literal::{encode as encode_literal, encode_value as encode_literal_value};
pub use crate::script::pipeline::{
    LiteralStrategy, captions_enabled, options_literal, quoted_placeholder,
};
pub use crate::script::rewrite::{ReservedSet, substitute_placeholder, unquote_reserved};
pub use crate::script::serialize::{serialize, serialize_value};
pub use crate::widget::batch::{ensure_unique_ids, prerender};
pub use crate::widget::payload::{ScriptPayload, build_script, caption_table_var};
pub use crate::widget::settings::{ContainerAttributes, RenderMode, SliderSettings};
pub use crate::widget::view::{InMemoryView, View};
pub use crate::widget::{RenderedSlider, SLIDER_CSS, SliderWidget};
