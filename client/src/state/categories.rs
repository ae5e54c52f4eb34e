//! Category list for the post form's selection control.
//!
//! Populated by the host application's category provider; read-only here.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::Category;

/// Placeholder option shown before a category is picked.
pub const PLACEHOLDER_LABEL: &str = "Select a category";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
}

/// A `(value, label)` pair for a `<select>` option.
pub type SelectOption = (String, String);

impl CategoriesState {
    /// Options in provider order, led by the empty-valued placeholder.
    pub fn select_options(&self) -> Vec<SelectOption> {
        std::iter::once((String::new(), PLACEHOLDER_LABEL.to_owned()))
            .chain(self.items.iter().map(|c| (c.id.clone(), c.name.clone())))
            .collect()
    }
}
