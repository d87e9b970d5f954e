use crate::dictionary::EntryStatus;
use crate::proposal::MissingField;
use std::path::PathBuf;
use thiserror::Error;

/// All possible `mankon_dictionary` [std::error::Error] paths
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("(-)[<md_error::snapshot>] -> \n{0}")]
    Snapshot(#[from] SnapshotError),
    #[error("(-)[<md_error::proposal>] -> \n{0}")]
    Proposal(#[from] ProposalError),
    #[error("(-)[<md_error::options>] -> \n{0}")]
    Options(#[from] OptionsError),
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot is not valid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot root must be an object of `id -> record`, found: {found}")]
    NotAnObject { found: &'static str },
    #[error("record `{id}` could not be read: {reason}")]
    Record { id: String, reason: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProposalError {
    #[error("no proposal with id `{0}`")]
    NotFound(String),
    #[error("proposal `{id}` cannot go from `{from}` to `{to}`")]
    InvalidTransition {
        id: String,
        from: EntryStatus,
        to: &'static str,
    },
    #[error("invalid proposal `{id}`, missing: {}", fmt_missing(missing))]
    Incomplete {
        id: String,
        missing: Vec<MissingField>,
    },
}

fn fmt_missing(missing: &[MissingField]) -> String {
    missing
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("failed to open options file: {path}\nreason: {reason}")]
    FailedOpen { path: PathBuf, reason: std::io::Error },
    #[error("options json err: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be greater than zero")]
    Zero { field: &'static str },
    #[error("alphabet override for `{0}` has no graphemes")]
    EmptyAlphabet(String),
    #[error("invalid collation locale `{locale}`: {reason}")]
    Locale { locale: String, reason: String },
}
