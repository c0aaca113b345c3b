//! Loading API snapshots from JSON files.
//!
//! Snapshots are the raw bodies the console receives from the API. Both the
//! wrapped (`{"admin": {...}}`, `{"admins": [...]}`) and bare shapes are
//! accepted, since different endpoints return different ones.

use anyhow::{Context, Result};
use clubdesk_models::{AdminAccount, Identity};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum MeBody {
    Wrapped { admin: Identity },
    Bare(Identity),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AdminsBody {
    Wrapped { admins: Vec<AdminAccount> },
    Bare(Vec<AdminAccount>),
}

pub fn parse_identity(json: &str) -> Result<Identity> {
    let body: MeBody = serde_json::from_str(json).context("Invalid identity JSON")?;
    Ok(match body {
        MeBody::Wrapped { admin } => admin,
        MeBody::Bare(identity) => identity,
    })
}

pub fn parse_admins(json: &str) -> Result<Vec<AdminAccount>> {
    let body: AdminsBody = serde_json::from_str(json).context("Invalid admin list JSON")?;
    Ok(match body {
        AdminsBody::Wrapped { admins } => admins,
        AdminsBody::Bare(admins) => admins,
    })
}

pub fn parse_record<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).context("Invalid record JSON")
}

fn read(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "Reading snapshot");
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn load_identity(path: &Path) -> Result<Identity> {
    parse_identity(&read(path)?).with_context(|| format!("In {}", path.display()))
}

pub fn load_admins(path: &Path) -> Result<Vec<AdminAccount>> {
    parse_admins(&read(path)?).with_context(|| format!("In {}", path.display()))
}

pub fn load_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    parse_record(&read(path)?).with_context(|| format!("In {}", path.display()))
}
