//! Portfolio (résumé) document

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Skill groups in document order, e.g. "Languages" -> ["Rust", "Go"]
pub type SkillMap = serde_json::Map<String, serde_json::Value>;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("failed to read portfolio {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio document {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub university: String,
    pub location: String,
    pub degree: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub technologies: Vec<String>,
    pub date: String,
    pub description: Vec<String>,
}

/// The résumé shown on the portfolio page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub name: String,
    pub contact: Contact,
    pub education: Vec<Education>,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: SkillMap,
}

impl Portfolio {
    /// Load the portfolio document from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PortfolioError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PortfolioError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| PortfolioError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Skills of one group, e.g. `skills_in("Languages")`
    pub fn skills_in(&self, group: &str) -> Vec<&str> {
        self.skills
            .get(group)
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(|s| s.as_str()).collect())
            .unwrap_or_default()
    }
}
