//! Derives the portrait prompt from a character's selections.
//!
//! Composition is a pure function of the state and the catalog, so callers can
//! recompute it after every mutation instead of caching it.

use crate::catalog::Catalog;
use crate::selection::{CharacterState, Selection};
use serde::Serialize;

/// Fragment every composed prompt starts with.
pub const LEADING_FRAGMENT: &str = "A character portrait of";
const SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedPrompt {
    pub prompt: String,
    pub active_count: usize,
}

pub fn compose(state: &CharacterState, catalog: &Catalog) -> ComposedPrompt {
    ComposedPrompt {
        prompt: compose_prompt(state, catalog),
        active_count: state.active_selection_count(),
    }
}

/// Builds the prompt by walking the catalog's prompt order, never the map order.
pub fn compose_prompt(state: &CharacterState, catalog: &Catalog) -> String {
    let mut fragments = vec![LEADING_FRAGMENT.to_string()];
    fragments.extend(
        catalog
            .prompt_order()
            .iter()
            .filter_map(|id| state.selection(*id))
            .filter_map(|selection| fragment(selection, catalog)),
    );
    format!("{}.", fragments.join(SEPARATOR))
}

// Custom text is used verbatim, options go through the category template.
// An active but empty override falls through to the chosen option.
fn fragment(selection: &Selection, catalog: &Catalog) -> Option<String> {
    if selection.is_custom {
        if let Some(text) = selection.custom_prompt.as_deref().filter(|t| !t.is_empty()) {
            return Some(text.to_string());
        }
    }

    let option_id = selection.option_id.as_ref()?;
    let option = catalog.option(selection.category, option_id)?;
    if option.prompt_value.is_empty() {
        return None;
    }
    let category = catalog.category(selection.category)?;
    Some(category.fill(&option.prompt_value))
}
