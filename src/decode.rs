//! The token decoder: one left-to-right pass over raw argument tokens,
//! resolving each flag against the bound schema and storing coerced values
//! into the record as it goes.

use crate::error::{CoerceError, DecodeError};
use crate::schema::{Binder, Schema, Shape};

/// Decode `args` into `record`, mutating it in place.
///
/// Accepted flag syntax per token: `--name`, `-name`, `--name=value`,
/// `-name=value` — any number of leading dashes is stripped uniformly.
/// Boolean flags consume no operand, scalars consume one (inline `=value`
/// or the next token), and lists consume tokens greedily until the next
/// token that resolves to a known flag name. A dash-prefixed token that
/// does *not* name a known flag is a literal list value, so negative
/// numbers survive in numeric lists.
///
/// Flags apply in token order: a repeated scalar keeps the last value; a
/// repeated list flag replaces the earlier occurrence's values. Decoding
/// stops at the first error and fields already written stay written.
pub fn decode<S: Schema>(record: &mut S, args: &[impl AsRef<str>]) -> Result<(), DecodeError> {
    let mut binder = Binder::new();
    record.bind(&mut binder);
    let mut targets = binder.into_targets();

    let n = args.len();
    let mut i = 0;
    while i < n {
        let (flag, inline) = split_token(args[i].as_ref());
        let name = flag.trim_start_matches('-');
        let shape = match targets.get(name) {
            Some(slot) => slot.shape(),
            None => return Err(DecodeError::UnknownFlag(flag.to_string())),
        };
        i += 1;

        if shape == Shape::Flag {
            // Presence is the value; an inline `=value` is discarded.
            if let Some(slot) = targets.get_mut(name) {
                slot.set_present();
            }
            continue;
        }

        let vals: Vec<String> = if shape == Shape::List {
            // The inline portion is comma-separated; continuation tokens
            // are taken literally, one per element.
            let mut vals: Vec<String> = match inline {
                Some(v) => v.split(',').map(str::to_owned).collect(),
                None => Vec::new(),
            };
            while i < n {
                let tok = args[i].as_ref();
                if tok.starts_with('-') {
                    let (next, _) = split_token(tok);
                    if targets.contains_key(next.trim_start_matches('-')) {
                        break;
                    }
                }
                vals.push(tok.to_owned());
                i += 1;
            }
            vals
        } else {
            let val = match inline {
                Some(v) => v.to_owned(),
                None if i < n => {
                    let v = args[i].as_ref().to_owned();
                    i += 1;
                    v
                }
                None => String::new(),
            };
            vec![val]
        };

        if let Some(slot) = targets.get_mut(name) {
            let ty = slot.type_name();
            slot.store(&vals).map_err(|e| match e {
                CoerceError::Unsupported(ty) => DecodeError::UnsupportedType {
                    flag: flag.to_string(),
                    ty,
                },
                source => DecodeError::Value {
                    flag: flag.to_string(),
                    values: vals.join(" "),
                    ty,
                    source,
                },
            })?;
        }
    }
    Ok(())
}

/// Decode the process's own command-line arguments (program name excluded).
pub fn decode_env<S: Schema>(record: &mut S) -> Result<(), DecodeError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    decode(record, &args)
}

/// Split a token on the first `=` into its flag part and optional inline
/// value. Later `=` characters belong to the value.
fn split_token(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    }
}
