pub mod catalog;
pub mod composer;
pub mod error;
pub mod logging;
pub mod selection;
pub mod session;
pub mod settings;
pub mod store;
pub mod toast;

// Re-export commonly used items for easier access
pub use catalog::{Catalog, Category, CategoryId, CategoryOption, DisplayGroup, OptionId};
pub use composer::{ComposedPrompt, LEADING_FRAGMENT, compose, compose_prompt};
pub use error::{CatalogError, CreatorError, Result};
pub use selection::{CharacterState, DEFAULT_CHARACTER_NAME, Selection};
pub use session::SharedSession;
pub use settings::Settings;
pub use store::SelectionStore;
pub use toast::{Severity, Toast, ToastQueue};
