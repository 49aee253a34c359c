//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, listing::SortColumn};

/// Whether a category, and the transactions in it, count as income or expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Income.
    #[default]
    Gelir,
    /// Expense.
    Gider,
}

impl CategoryType {
    pub const ALL: [CategoryType; 2] = [CategoryType::Gelir, CategoryType::Gider];

    /// The value the API and the forms use, e.g. "gelir".
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryType::Gelir => "gelir",
            CategoryType::Gider => "gider",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryType::Gelir => "Gelir",
            CategoryType::Gider => "Gider",
        }
    }
}

impl FromStr for CategoryType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gelir" => Ok(CategoryType::Gelir),
            "gider" => Ok(CategoryType::Gider),
            other => Err(Error::InvalidCategoryType(other.to_owned())),
        }
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is
    /// empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier the API assigns to a category.
pub type CategoryId = i64;

/// A category as the API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// The JSON body for creating or updating a category.
#[derive(Debug, Serialize)]
pub struct CategoryBody {
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub name: CategoryName,
}

/// Form data for category creation and editing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryFormData {
    #[serde(rename = "type")]
    pub category_type: String,
    pub name: String,
}

impl CategoryFormData {
    /// Check the form before anything is sent to the API.
    pub fn validate(&self) -> Result<CategoryBody, Error> {
        Ok(CategoryBody {
            category_type: self.category_type.parse()?,
            name: CategoryName::new(&self.name)?,
        })
    }
}

/// The columns the category list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySortColumn {
    #[default]
    Id,
    Type,
    Name,
    CreatedAt,
}

impl SortColumn for CategorySortColumn {
    fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "type" => Some(Self::Type),
            "name" => Some(Self::Name),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn as_query_value(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Type => "type",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Error;

    use super::{Category, CategoryFormData, CategoryName, CategoryType};

    #[test]
    fn parses_category_type() {
        assert_eq!("gelir".parse(), Ok(CategoryType::Gelir));
        assert_eq!("gider".parse(), Ok(CategoryType::Gider));
        assert_eq!(
            "kira".parse::<CategoryType>(),
            Err(Error::InvalidCategoryType("kira".to_owned()))
        );
    }

    #[test]
    fn whitespace_name_is_empty() {
        assert_eq!(CategoryName::new("   "), Err(Error::EmptyCategoryName));
        assert_eq!(CategoryName::new(" Kira ").unwrap().as_ref(), "Kira");
    }

    #[test]
    fn deserializes_api_category() {
        let category: Category = serde_json::from_value(json!({
            "id": 4,
            "type": "gider",
            "name": "Kira",
            "created_at": "2024-05-01T09:30:00"
        }))
        .unwrap();

        assert_eq!(category.category_type, CategoryType::Gider);
        assert_eq!(category.created_at.as_deref(), Some("2024-05-01T09:30:00"));
    }

    #[test]
    fn body_uses_api_field_names() {
        let form = CategoryFormData {
            category_type: "gider".to_owned(),
            name: " Kira ".to_owned(),
        };

        let body = serde_json::to_value(form.validate().unwrap()).unwrap();

        assert_eq!(body, json!({"type": "gider", "name": "Kira"}));
    }
}
