use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Category, SCHOOLS};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryInfo {
    pub name: String,
    /// Number of names the form asks for
    pub participants: usize,
    /// Whether the form shows the supporting-file link
    pub accepts_file: bool,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            name: category.name().to_string(),
            participants: category.expected_participants(),
            accepts_file: category.accepts_file(),
        }
    }
}

/// Options for the registration form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub schools: Vec<String>,
    pub categories: Vec<CategoryInfo>,
}

impl CatalogResponse {
    pub fn current() -> Self {
        Self {
            schools: SCHOOLS.iter().map(|school| school.to_string()).collect(),
            categories: Category::ALL.into_iter().map(CategoryInfo::from).collect(),
        }
    }
}
