// Selection store: the only owner and mutator of a character being created.
use crate::catalog::{Catalog, CategoryId, CategoryOption, OptionId};
use crate::composer::{self, ComposedPrompt};
use crate::error::{CreatorError, Result};
use crate::selection::{CharacterState, DEFAULT_CHARACTER_NAME, Selection};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::sync::Arc;

/// One character-editing session. Every session owns its own store; there is no
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    catalog: Arc<Catalog>,
    default_name: String,
    state: CharacterState,
}

impl SelectionStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_default_name(catalog, DEFAULT_CHARACTER_NAME)
    }

    // The default name is what `reset_character` restores.
    pub fn with_default_name(catalog: Arc<Catalog>, default_name: impl Into<String>) -> Self {
        let default_name = default_name.into();
        let state = CharacterState::seeded(&catalog, default_name.clone());
        SelectionStore {
            catalog,
            default_name,
            state,
        }
    }

    fn selection_mut(&mut self, category: CategoryId) -> Result<&mut Selection> {
        self.state.selections.get_mut(&category).ok_or_else(|| {
            log::warn!("Mutation targeted unknown category '{category}'");
            CreatorError::UnknownCategory(category.to_string())
        })
    }

    /// Chooses a catalog option, or unselects with `None`. Always drops the custom
    /// override, even when the same option is chosen again.
    pub fn set_selection(&mut self, category: CategoryId, option_id: Option<OptionId>) -> Result<()> {
        log::debug!("set_selection {category} -> {option_id:?}");
        let selection = self.selection_mut(category)?;
        selection.option_id = option_id;
        selection.is_custom = false;
        Ok(())
    }

    /// Overrides the category with free text. The chosen option is remembered.
    pub fn set_custom_prompt(&mut self, category: CategoryId, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        log::debug!("set_custom_prompt {category} -> {text:?}");
        let selection = self.selection_mut(category)?;
        selection.custom_prompt = Some(text);
        selection.is_custom = true;
        Ok(())
    }

    pub fn clear_custom_prompt(&mut self, category: CategoryId) -> Result<()> {
        log::debug!("clear_custom_prompt {category}");
        let selection = self.selection_mut(category)?;
        selection.custom_prompt = None;
        selection.is_custom = false;
        Ok(())
    }

    pub fn set_character_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    pub fn reset_character(&mut self) {
        log::debug!("reset_character");
        self.state = CharacterState::seeded(&self.catalog, self.default_name.clone());
    }

    /// Picks a random option for every category and drops all custom overrides.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for (category, selection) in self.state.selections.iter_mut() {
            if let Some(option) = self.catalog.options(*category).choose(rng) {
                selection.option_id = Some(option.id.clone());
                selection.custom_prompt = None;
                selection.is_custom = false;
            }
        }
        log::debug!("randomized {} categories", self.state.selections.len());
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    pub fn character_name(&self) -> &str {
        &self.state.name
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn selection(&self, category: CategoryId) -> Result<&Selection> {
        self.state
            .selection(category)
            .ok_or_else(|| CreatorError::UnknownCategory(category.to_string()))
    }

    pub fn is_defined(&self, category: CategoryId) -> Result<bool> {
        self.selection(category).map(Selection::is_defined)
    }

    // The catalog option currently in effect, if the category is not overridden.
    pub fn selected_option(&self, category: CategoryId) -> Result<Option<&CategoryOption>> {
        let selection = self.selection(category)?;
        if selection.is_custom {
            return Ok(None);
        }
        Ok(selection
            .option_id
            .as_ref()
            .and_then(|id| self.catalog.option(category, id)))
    }

    pub fn active_selection_count(&self) -> usize {
        self.state.active_selection_count()
    }

    pub fn composed_prompt(&self) -> String {
        composer::compose_prompt(&self.state, &self.catalog)
    }

    pub fn compose(&self) -> ComposedPrompt {
        composer::compose(&self.state, &self.catalog)
    }
}
