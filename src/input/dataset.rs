use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::input::InputError;
use crate::model::MemberRecord;

const BUNDLED_MEMBERS: &str = include_str!("../../data/members.json");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Bundled,
    File(PathBuf),
}

impl DatasetSource {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) => DatasetSource::File(p.to_path_buf()),
            None => DatasetSource::Bundled,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DatasetSource::Bundled => "bundled".to_string(),
            DatasetSource::File(p) => p.display().to_string(),
        }
    }
}

/// The document must be a JSON list. Object entries always decode (bad
/// fields fall back to defaults); entries that are not objects are skipped.
pub fn parse_members(json: &str) -> Result<Vec<MemberRecord>, InputError> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    let mut members = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        if !entry.is_object() {
            warn!(index, "skipping dataset entry that is not an object");
            continue;
        }
        members.push(serde_json::from_value(entry)?);
    }
    Ok(members)
}

pub fn load_members(source: &DatasetSource) -> Result<Vec<MemberRecord>, InputError> {
    let members = match source {
        DatasetSource::Bundled => parse_members(BUNDLED_MEMBERS)?,
        DatasetSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| InputError::Io {
                path: path.clone(),
                source,
            })?;
            parse_members(&raw)?
        }
    };
    audit_members(&members);
    info!(
        members = members.len(),
        source = %source.describe(),
        "dataset loaded"
    );
    Ok(members)
}

/// Reports records that will render oddly. Nothing is rejected.
fn audit_members(members: &[MemberRecord]) {
    for member in members {
        if !member.is_total_consistent() {
            debug!(
                name = %member.name,
                total = member.total_score,
                category_sum = member.category_sum(),
                "stored total differs from category sum"
            );
        }
        for category in member.out_of_range() {
            debug!(
                name = %member.name,
                category = category.key(),
                score = member.score(category),
                max = category.max(),
                "score outside category range"
            );
        }
        if member.name.is_empty() {
            debug!("record without a name");
        }
    }
}
