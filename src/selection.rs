use crate::catalog::{Catalog, CategoryId, OptionId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name given to a character before the user types one.
pub const DEFAULT_CHARACTER_NAME: &str = "Unnamed Character";

// The user's current choice for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub category: CategoryId,
    pub option_id: Option<OptionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_prompt: Option<String>,
    pub is_custom: bool, // Whether the custom text overrides the chosen option.
}

impl Selection {
    pub fn empty(category: CategoryId) -> Self {
        Selection {
            category,
            option_id: None,
            custom_prompt: None,
            is_custom: false,
        }
    }

    /// A selection is defined once an option is chosen or a custom override is active,
    /// even when that override is empty text.
    pub fn is_defined(&self) -> bool {
        self.option_id.is_some() || self.is_custom
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterState {
    pub name: String,
    pub selections: BTreeMap<CategoryId, Selection>,
}

impl CharacterState {
    // Seed one empty selection for every category of the catalog.
    pub fn seeded(catalog: &Catalog, name: impl Into<String>) -> Self {
        let selections = catalog
            .categories()
            .iter()
            .map(|category| (category.id, Selection::empty(category.id)))
            .collect();
        CharacterState {
            name: name.into(),
            selections,
        }
    }

    pub fn selection(&self, category: CategoryId) -> Option<&Selection> {
        self.selections.get(&category)
    }

    pub fn active_selection_count(&self) -> usize {
        self.selections
            .values()
            .filter(|selection| selection.is_defined())
            .count()
    }
}
