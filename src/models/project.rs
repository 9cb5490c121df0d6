//! Project requirement model.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The requirement profile of a project.
///
/// Lists the certification and skill tags a project calls for. Workers are
/// scored by how many of these tags they cover (see
/// [`crate::ga::match_score`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectRequirement {
    /// Project name.
    pub name: String,
    /// Certification tags the project requires.
    pub required_certifications: HashSet<String>,
    /// Skill tags the project requires.
    pub required_skills: HashSet<String>,
}

impl ProjectRequirement {
    /// Creates a requirement profile with the given name and no tags.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required_certifications: HashSet::new(),
            required_skills: HashSet::new(),
        }
    }

    /// Adds a required certification tag.
    pub fn with_required_certification(mut self, tag: impl Into<String>) -> Self {
        self.required_certifications.insert(tag.into());
        self
    }

    /// Adds a required skill tag.
    pub fn with_required_skill(mut self, tag: impl Into<String>) -> Self {
        self.required_skills.insert(tag.into());
        self
    }
}
