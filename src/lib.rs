//! `themecheck` validates a hand-edited theme config — the colors, fonts,
//! image URLs and responsive sizing/position of an embeddable chat widget —
//! against a fixed structural contract, and renders every violation as a
//! deterministic, indentation-nested report an operator can act on.
//!
//! The crate is split along one seam: a pure core (the declarative
//! [`schema`](schema/index.html) model, the [`validator`](validator/index.html)
//! and the [`format`](format/index.html)ter) with no I/O or state, and a thin
//! [`session`](session/index.html) boundary that feeds it raw editor text and
//! handles persistence, share links and the other pass-through collaborators.
//!
//! # Checking a document
//!
//! ```
//! use serde_json::json;
//! use themecheck::schema::{Field, Schema};
//! use themecheck::{render, validate};
//!
//! let schema = Schema::strict_object(vec![
//!     ("name", Field::required(Schema::string())),
//!     ("debug", Field::optional(Schema::boolean())),
//! ]);
//!
//! // A conforming document validates cleanly.
//! assert!(validate(&schema, &json!({ "name": "widget" })).is_ok());
//!
//! // A failing one produces a tree of every violation, which the formatter
//! // renders into display lines: one per failing path, indented by depth.
//! let tree = validate(&schema, &json!({ "debug": 1 })).unwrap_err();
//! assert_eq!(
//!     render(&tree),
//!     "    name -- required key missing\n    debug -- expected boolean, found number"
//! );
//! ```
//!
//! # The theme contract
//!
//! The one document shape this crate ships is declared in
//! [`theme`](theme/index.html) and exported for external tooling by
//! [`to_json_schema`](export/fn.to_json_schema.html) — both views are
//! generated from the same declaration and cannot diverge.
//!
//! ```
//! use serde_json::json;
//! use themecheck::{theme, validate};
//!
//! // An empty document reports every missing top-level requirement at once.
//! let tree = validate(&theme::theme_config(), &json!({})).unwrap_err();
//! assert_eq!(tree.children().len(), 5);
//! ```
//!
//! # Driving an editor
//!
//! The [`Session`](session/struct.Session.html) type wires the core to an
//! injected [`Store`](session/trait.Store.html) and turns each edit into a
//! [`Report`](session/enum.Report.html): no input, not JSON, the formatted
//! violations, or the all-clear. All three failure outcomes are expected
//! states, never process errors.

pub mod errors;
pub mod export;
pub mod format;
pub mod schema;
pub mod session;
pub mod theme;
pub mod validator;

pub use crate::errors::ThemeError;
pub use crate::export::{to_json_schema, JsonSchema};
pub use crate::format::{lines, render};
pub use crate::schema::{Field, Kind, Pattern, Schema};
pub use crate::session::{FileStore, MemoryStore, Report, Session, Store};
pub use crate::validator::{validate, ErrorTree};
