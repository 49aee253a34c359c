//! Core project domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, listing::SortColumn};

/// A validated, non-empty project name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectName(String);

impl ProjectName {
    /// Create a project name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyProjectName] if `name` is
    /// empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyProjectName)
        } else {
            Ok(Self(name.to_owned()))
        }
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier the API assigns to a project.
pub type ProjectId = i64;

/// A project as the API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectBody {
    pub name: ProjectName,
}

/// Form data for project creation and editing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFormData {
    pub name: String,
}

impl ProjectFormData {
    pub fn validate(&self) -> Result<ProjectBody, Error> {
        Ok(ProjectBody {
            name: ProjectName::new(&self.name)?,
        })
    }
}

/// The columns the project list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSortColumn {
    #[default]
    Id,
    Name,
    CreatedAt,
}

impl SortColumn for ProjectSortColumn {
    fn from_query_value(value: &str) -> Option<Self> {
        match value {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    fn as_query_value(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::CreatedAt => "created_at",
        }
    }
}
