// Static catalog of portrait categories, their options and the order they are phrased in.
use crate::error::{CatalogError, CreatorError};
use include_dir::{Dir, include_dir};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Placeholder every category template must contain exactly once.
pub const PLACEHOLDER: &str = "{value}";

static ASSETS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/assets");
static BUILTIN: OnceCell<Arc<Catalog>> = OnceCell::new();

// The closed set of customization axes a portrait can be described along.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum CategoryId {
    Hair,
    Eyes,
    Nose,
    Mouth,
    Expression,
    Makeup,
    Markings,
    Accessories,
    FacialHair,
    SkinTone,
    Age,
    BodyType,
    Lighting,
    Background,
}

impl CategoryId {
    /// Parses a raw id coming from a UI event, e.g. `"facialHair"`.
    pub fn parse(id: &str) -> Result<Self, CreatorError> {
        CategoryId::from_str(id).map_err(|_| {
            log::warn!("Rejected unknown category id: {id:?}");
            CreatorError::UnknownCategory(id.to_string())
        })
    }
}

// Only used to organize categories on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayGroup {
    Face,
    Features,
    Style,
    Body,
    Scene,
}

// Option identifiers are either small integers or strings, unique within a category.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(untagged)]
pub enum OptionId {
    #[display("{_0}")]
    Number(u32),
    #[display("{_0}")]
    Text(String),
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        OptionId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    pub prompt_template: String,
    pub display_group: DisplayGroup,
}

impl Category {
    // Substitute a prompt value into the category template.
    pub fn fill(&self, value: &str) -> String {
        self.prompt_template.replacen(PLACEHOLDER, value, 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub id: OptionId,
    pub name: String,
    // Empty means the option has no visual effect ("None", "Clean Shaven").
    #[serde(default)]
    pub prompt_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// On-disk shape of a catalog before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    categories: Vec<Category>,
    options: HashMap<CategoryId, Vec<CategoryOption>>,
    prompt_order: Vec<CategoryId>,
}

/// Immutable set of categories and options. Construct it through [`Catalog::new`]
/// or one of the loaders so that it is always validated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    categories: Vec<Category>,
    options: HashMap<CategoryId, Vec<CategoryOption>>,
    prompt_order: Vec<CategoryId>,
}

impl Catalog {
    pub fn new(
        categories: Vec<Category>,
        options: HashMap<CategoryId, Vec<CategoryOption>>,
        prompt_order: Vec<CategoryId>,
    ) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            categories,
            options,
            prompt_order,
        };
        if let Err(e) = catalog.validate() {
            log::error!("Malformed catalog: {e}");
            return Err(e);
        }
        Ok(catalog)
    }

    /// The catalog shipped with the crate, validated on first use.
    pub fn builtin() -> Result<Arc<Catalog>, CatalogError> {
        BUILTIN
            .get_or_try_init(|| {
                let data = ASSETS
                    .get_file("catalog.json")
                    .and_then(|file| file.contents_utf8())
                    .ok_or_else(|| {
                        CatalogError::Io(std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "embedded catalog.json is missing",
                        ))
                    })?;
                Self::from_json(data).map(Arc::new)
            })
            .cloned()
    }

    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(data)?;
        let catalog = Self::new(document.categories, document.options, document.prompt_order)?;
        log::info!(
            "Loaded catalog with {} categories",
            catalog.categories.len()
        );
        Ok(catalog)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        log::debug!("Reading catalog from {}", path.display());
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut declared = HashSet::new();
        for category in &self.categories {
            if !declared.insert(category.id) {
                return Err(CatalogError::DuplicateCategory(category.id));
            }
            let found = category.prompt_template.matches(PLACEHOLDER).count();
            if found != 1 {
                return Err(CatalogError::PlaceholderCount {
                    category: category.id,
                    found,
                });
            }
        }

        if let Some(undeclared) = self.options.keys().find(|id| !declared.contains(*id)) {
            return Err(CatalogError::UndeclaredCategory(*undeclared));
        }

        for category in &self.categories {
            let options = match self.options.get(&category.id) {
                Some(options) if !options.is_empty() => options,
                _ => return Err(CatalogError::EmptyOptions(category.id)),
            };
            let mut seen = HashSet::new();
            for option in options {
                if !seen.insert(&option.id) {
                    return Err(CatalogError::DuplicateOption {
                        category: category.id,
                        option: option.id.clone(),
                    });
                }
            }
        }

        let mut ordered = HashSet::new();
        for id in &self.prompt_order {
            if !declared.contains(id) {
                return Err(CatalogError::PromptOrderMismatch(format!(
                    "'{id}' is not a declared category"
                )));
            }
            if !ordered.insert(*id) {
                return Err(CatalogError::PromptOrderMismatch(format!(
                    "'{id}' appears more than once"
                )));
            }
        }
        if let Some(missing) = self.categories.iter().find(|c| !ordered.contains(&c.id)) {
            return Err(CatalogError::PromptOrderMismatch(format!(
                "'{}' is missing",
                missing.id
            )));
        }

        Ok(())
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn contains(&self, id: CategoryId) -> bool {
        self.options.contains_key(&id)
    }

    pub fn options(&self, id: CategoryId) -> &[CategoryOption] {
        self.options.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn option(&self, id: CategoryId, option_id: &OptionId) -> Option<&CategoryOption> {
        self.options(id).iter().find(|option| &option.id == option_id)
    }

    /// The order categories are phrased in when composing a prompt.
    pub fn prompt_order(&self) -> &[CategoryId] {
        &self.prompt_order
    }
}
