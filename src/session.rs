//! The editing session: the review loop and its collaborators.
//!
//! This module is the boundary between the pure core (schema, validator,
//! formatter) and the outside world. A [`Session`](struct.Session.html)
//! receives raw text on every edit, persists it through an injected
//! [`Store`](trait.Store.html), and reviews it into a
//! [`Report`](enum.Report.html): one of the three expected outcomes (no
//! input, not JSON, contract violations) or the all-clear.
//!
//! The smaller collaborators live here too: share-link encoding on top of a
//! URL query parameter, a one-shot pretty-printer, and literal
//! find-and-replace over the raw text.

use crate::errors::ThemeError;
use crate::format;
use crate::schema::Schema;
use crate::theme;
use crate::validator::validate;
use failure::Error;
use log::{debug, warn};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use url::Url;

/// Fixed name the edited document is persisted under.
pub const STORAGE_KEY: &str = "themecheck-document";

/// Query parameter a share link carries the document in.
pub const SHARE_PARAM: &str = "config";

/// Shown when no text has been supplied at all.
pub const NO_INPUT_MESSAGE: &str = "no value was provided";

/// Shown when the text does not parse as JSON.
pub const INVALID_JSON_MESSAGE: &str = "no valid JSON was provided";

/// Shown when the document satisfies the contract.
pub const ALL_CLEAR_MESSAGE: &str = "No errors found";

/// Outcome of reviewing one edit.
///
/// The three failure kinds are deliberately disjoint: an empty editor, text
/// that is not JSON, and valid JSON that violates the contract each produce
/// their own variant and are never conflated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// No text was supplied.
    NoInput,

    /// The text is not valid JSON.
    InvalidJson,

    /// The text parsed, but the document violates the contract.
    /// Carries the formatted error lines, ready for display.
    Invalid(Vec<String>),

    /// The document satisfies the contract.
    Valid,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        matches!(self, Report::Valid)
    }

    /// Render the report for direct, whitespace-significant display.
    pub fn to_display(&self) -> String {
        match self {
            Report::NoInput => NO_INPUT_MESSAGE.to_owned(),
            Report::InvalidJson => INVALID_JSON_MESSAGE.to_owned(),
            Report::Invalid(lines) => lines.join("\n"),
            Report::Valid => ALL_CLEAR_MESSAGE.to_owned(),
        }
    }
}

/// Persistence for the last-edited raw text.
///
/// The text is stored verbatim whether or not it is valid; an operator's
/// half-finished edit survives a reload exactly as typed.
pub trait Store {
    /// The persisted text, or `None` if nothing has been stored yet.
    fn load(&self) -> Result<Option<String>, Error>;

    /// Persist `text`, replacing any previous document.
    fn save(&mut self, text: &str) -> Result<(), Error>;
}

/// A [`Store`](trait.Store.html) backed by a single file named
/// [`STORAGE_KEY`](constant.STORAGE_KEY.html) under a given directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        FileStore {
            path: dir.as_ref().join(STORAGE_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(cause) => Err(ThemeError::StoreLoad {
                path: self.path.display().to_string(),
                cause,
            }
            .into()),
        }
    }

    fn save(&mut self, text: &str) -> Result<(), Error> {
        fs::write(&self.path, text).map_err(|cause| ThemeError::StoreSave {
            path: self.path.display().to_string(),
            cause,
        })?;
        debug!("persisted {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}

/// An in-memory [`Store`](trait.Store.html), for tests and one-shot runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    text: Option<String>,
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<String>, Error> {
        Ok(self.text.clone())
    }

    fn save(&mut self, text: &str) -> Result<(), Error> {
        self.text = Some(text.to_owned());
        Ok(())
    }
}

/// One editing session over the theme contract.
pub struct Session<S> {
    schema: Schema,
    store: S,
}

impl<S: Store> Session<S> {
    pub fn new(store: S) -> Self {
        Session {
            schema: theme::theme_config(),
            store,
        }
    }

    /// The contract this session checks against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Text to show when the editor opens.
    ///
    /// A share link wins when it carries a JSON payload; otherwise the
    /// persisted document is used, and failing that the documented example.
    pub fn open(&self, share_link: Option<&Url>) -> Result<String, Error> {
        if let Some(url) = share_link {
            if let Some(text) = shared_document(url) {
                return Ok(text);
            }
        }
        if let Some(text) = self.store.load()? {
            return Ok(text);
        }
        Ok(theme::INITIAL_DOCUMENT.to_owned())
    }

    /// Handle one edit: persist the new text, then review it.
    ///
    /// Empty text is not persisted; it only yields
    /// [`Report::NoInput`](enum.Report.html).
    pub fn edit(&mut self, text: &str) -> Result<Report, Error> {
        if text.is_empty() {
            return Ok(Report::NoInput);
        }
        self.store.save(text)?;
        Ok(self.review(text))
    }

    /// Review one document: parse, validate, format. Pure; touches no state.
    pub fn review(&self, text: &str) -> Report {
        if text.is_empty() {
            return Report::NoInput;
        }

        let value: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => {
                debug!("document is not JSON: {}", err);
                return Report::InvalidJson;
            }
        };

        match validate(&self.schema, &value) {
            Ok(()) => Report::Valid,
            Err(tree) => Report::Invalid(format::lines(&tree)),
        }
    }
}

/// Encode `text` into a share link on `base`.
///
/// Any previous [`SHARE_PARAM`](constant.SHARE_PARAM.html) pair on `base` is
/// replaced; other query pairs are kept.
pub fn share_link(base: &Url, text: &str) -> Url {
    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(name, _)| name != SHARE_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    let mut url = base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (name, value) in &kept {
            pairs.append_pair(name, value);
        }
        pairs.append_pair(SHARE_PARAM, text);
    }
    url
}

/// Extract a shared document from `url`.
///
/// Returns `Some` only when the parameter is present *and* its value parses
/// as JSON; anything else falls back to the store.
pub fn shared_document(url: &Url) -> Option<String> {
    let text = url
        .query_pairs()
        .find(|(name, _)| name == SHARE_PARAM)
        .map(|(_, value)| value.into_owned())?;

    if serde_json::from_str::<Value>(&text).is_err() {
        warn!("ignoring share link: payload is not valid JSON");
        return None;
    }
    Some(text)
}

/// Pretty-print `text` if it is valid JSON; `None` leaves it untouched.
pub fn format_document(text: &str) -> Option<String> {
    let value: Value = serde_json::from_str(text).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

/// Replace every literal occurrence of `find` with `replace`.
pub fn find_and_replace(text: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return text.to_owned();
    }
    text.replace(find, replace)
}
