use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything the site (and the terminal's content-backed commands) knows:
/// who the owner is, the project cards, post previews, stack, and contact
/// channels. Loaded once at startup and never mutated.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SiteContent {
    pub identity: Identity,
    pub projects: Vec<Project>,
    pub posts: Vec<Post>,
    pub stack: Vec<String>,
    pub contact: Vec<Channel>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Identity {
    pub name: String,
    pub host: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub email: String,
    /// The fake working directory `pwd` reports.
    pub home: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub summary: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub published: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Channel {
    pub label: String,
    pub value: String,
}

const SITE_JSON: &str = include_str!("../content/site.json");

impl SiteContent {
    /// The compiled-in site document.
    pub fn embedded() -> Self {
        serde_json::from_str(SITE_JSON).expect("embedded site content")
    }

    /// Loads an alternate content document, same schema as the embedded one.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read content file {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parse content file {}", path.display()))
    }
}

#[cfg(test)]
#[path = "tests/content/content_tests.rs"]
mod tests;
