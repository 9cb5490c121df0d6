//! Worker model.
//!
//! A worker is identified by a unique string id and carries two tag sets:
//! certifications (formal credentials) and skills (role competencies).
//! Tags are free-form strings; the requirement matching in
//! [`crate::ga::match_score`] compares them by exact equality.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A worker available for project placement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Worker {
    /// Unique worker identifier (e.g., "W001").
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Certification tags held by this worker.
    pub certifications: HashSet<String>,
    /// Skill tags held by this worker.
    pub skills: HashSet<String>,
}

impl Worker {
    /// Creates a worker with the given id and no tags.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            certifications: HashSet::new(),
            skills: HashSet::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a certification tag.
    pub fn with_certification(mut self, tag: impl Into<String>) -> Self {
        self.certifications.insert(tag.into());
        self
    }

    /// Adds a skill tag.
    pub fn with_skill(mut self, tag: impl Into<String>) -> Self {
        self.skills.insert(tag.into());
        self
    }

    /// Whether this worker holds a given certification.
    pub fn has_certification(&self, tag: &str) -> bool {
        self.certifications.contains(tag)
    }

    /// Whether this worker has a given skill.
    pub fn has_skill(&self, tag: &str) -> bool {
        self.skills.contains(tag)
    }
}
