use crate::captions::transition::TransitionTable;
use crate::foundation::error::SliderResult;
use crate::foundation::ident::ElementId;
use crate::options::token::ReservedToken;
use crate::options::value::{ConfigMap, RawIdentifier};
use crate::script::pipeline::{LiteralStrategy, captions_enabled, options_literal};

/// Script registered for one slider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptPayload {
    /// Caption transition table declaration; present only with captions on.
    pub table_declaration: Option<String>,
    /// `var <id> = new $JssorSlider$('<id>', {...});`
    pub init_statement: String,
}

impl ScriptPayload {
    /// Table declaration first, since the init statement refers to it.
    pub fn to_js(&self) -> String {
        let mut js = String::new();
        if let Some(decl) = &self.table_declaration {
            js.push_str(decl);
            js.push('\n');
        }
        js.push_str(&self.init_statement);
        js.push('\n');
        js
    }
}

/// Name of the caption table variable owned by slider `id`.
pub fn caption_table_var(id: &ElementId) -> SliderResult<RawIdentifier> {
    RawIdentifier::new(format!("{id}_CaptionTransitions"))
}

/// Build the full script for slider `id`.
#[tracing::instrument(skip(id, options, table), fields(id = %id))]
pub fn build_script(
    id: &ElementId,
    options: &ConfigMap,
    table: &TransitionTable,
    strategy: LiteralStrategy,
) -> SliderResult<ScriptPayload> {
    let table_var = if captions_enabled(options) {
        Some(caption_table_var(id)?)
    } else {
        None
    };

    let literal = options_literal(options, table_var.as_ref(), strategy)?;
    let table_declaration = match &table_var {
        Some(var) => Some(table.declaration(var)?),
        None => None,
    };

    let init_statement = format!(
        "var {id} = new {}('{id}', {literal});",
        ReservedToken::Slider.script_name()
    );
    tracing::debug!(
        captions = table_declaration.is_some(),
        bytes = init_statement.len(),
        "built slider script"
    );

    Ok(ScriptPayload {
        table_declaration,
        init_statement,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/widget/payload.rs"]
mod tests;
