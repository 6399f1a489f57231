//! Declarative command-line argument decoding. Define a struct, declare its
//! flag bindings, and go.
//!
//! Argbind takes a flat list of command-line tokens and populates a typed
//! record in place: flag names resolve to fields, and textual values are
//! converted into each field's native type — integers with `0x` radix
//! detection, floats, booleans, timestamps tried against an ordered layout
//! list, and homogeneous lists of any of those.
//!
//! ```
//! use argbind::{Binder, Schema};
//!
//! #[derive(Default)]
//! struct Config {
//!     host: String,
//!     port: u16,
//!     verbose: bool,
//!     tags: Vec<String>,
//! }
//!
//! impl Schema for Config {
//!     fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
//!         binder.field("host", &mut self.host);
//!         binder.field("port", &mut self.port);
//!         binder.field("verbose", &mut self.verbose);
//!         binder.field("tags", &mut self.tags);
//!     }
//! }
//!
//! let mut config = Config::default();
//! argbind::decode(
//!     &mut config,
//!     &["--host=0.0.0.0", "--port", "8080", "--verbose", "--tags", "a", "b"],
//! )
//! .unwrap();
//! assert_eq!(config.port, 8080);
//! assert!(config.verbose);
//! assert_eq!(config.tags, vec!["a", "b"]);
//! ```
//!
//! For a real binary, [`decode_env`] reads the process's own arguments.
//!
//! # Design: an explicit registry, not reflection
//!
//! Each schema type spells out its own bindings in [`Schema::bind`]. The
//! binding is the single source of truth: it fixes the flag's name, the
//! field's kind (from the field type itself, through [`Bindable`]), and
//! the storage location — a mutable borrow into your record, held only for
//! the duration of one [`decode`] call. There is no runtime type
//! inspection and no intermediate value tree; decoded values land directly
//! in your struct.
//!
//! A field you don't bind doesn't exist as far as decoding is concerned:
//! supplying a flag with its name is an unknown-flag error, exactly like a
//! name that was never a field at all.
//!
//! # Flag syntax
//!
//! `--name`, `-name`, `--name=value`, and `-name=value` are all accepted;
//! one dash and two dashes mean the same thing. Only the first `=` splits
//! the token, so values may themselves contain `=`.
//!
//! Operand consumption depends on the field's kind:
//!
//! - **bool** — presence sets the field true; no operand is consumed. An
//!   inline `=value` is silently discarded (kept for compatibility; see
//!   `DESIGN.md` for why this is not validated).
//! - **scalars** (strings, integers, floats, timestamps) — exactly one
//!   operand: the inline value if present, otherwise the next token.
//! - **lists** — the inline value splits on commas, then subsequent tokens
//!   are consumed one per element until a token resolves to a *known* flag
//!   name. A dash-prefixed token that isn't a known flag stays a value, so
//!   `--nums -5 10` reads as two elements of `nums`.
//!
//! Flags apply left to right. Repeating a scalar keeps the last value;
//! repeating a list replaces the earlier run.
//!
//! # Nested records
//!
//! [`Binder::nested`] composes flag names with a `-` separator (a `count`
//! field under a `sub` record becomes `--sub-count`);
//! [`Binder::embed`] merges a sub-record's names without any prefix.
//! The `_opt` variants accept `Option<S>` and fill an empty option with
//! `S::default()` while the mapping is built — note that this mutates the
//! record even if no flag under that path is supplied.
//!
//! # Timestamps
//!
//! Timestamp fields are `chrono::DateTime<Local>`. Values are tried
//! against a fixed, ordered list of layouts — ISO-8601 and space-separated
//! variants with numeric offsets or zone abbreviations, plain dates,
//! Unix-style and RFC 1123 formats, and slash dates with 4- or 2-digit
//! years — and the first match wins. Inputs without zone information are
//! interpreted in the process-local zone.
//!
//! # Error handling
//!
//! All failures are terminal and return [`DecodeError`]: the first problem
//! aborts the pass, annotated with the flag name, the raw value(s) as
//! supplied, and the target type. Fields written by earlier tokens stay
//! written. Types outside the supported set can be registered with
//! [`Binder::unsupported`] (maps) or [`Binder::unsupported_list`] (lists
//! of records); their flags exist in the mapping but fail with an
//! unsupported-type error when a value actually arrives.

pub mod error;

mod coerce;
mod decode;
mod schema;
mod timestamp;

#[cfg(test)]
mod fixtures;

pub use decode::{decode, decode_env};
pub use error::{CoerceError, DecodeError};
pub use schema::{Bindable, Binder, Schema, Slot};
