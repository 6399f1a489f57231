//! Value coercion: converting raw token text into typed field values.
//!
//! Integers accept a `0x` prefix for base-16 digits, parse at 64 bits, and
//! narrow to the field's declared width. Floats parse at 64-bit precision
//! and narrow. Lists coerce element-wise and report the first failing
//! position. Timestamps go through [`crate::timestamp`].

use crate::error::CoerceError;
use crate::schema::{Shape, Slot};
use crate::timestamp;

/// Parse a signed integer, with `0x` switching to base 16.
fn parse_int(raw: &str) -> Result<i64, CoerceError> {
    match raw.strip_prefix("0x") {
        Some(hex) => i64::from_str_radix(hex, 16).map_err(CoerceError::Int),
        None => raw.parse().map_err(CoerceError::Int),
    }
}

/// Parse an unsigned integer, with `0x` switching to base 16.
fn parse_uint(raw: &str) -> Result<u64, CoerceError> {
    match raw.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).map_err(CoerceError::Int),
        None => raw.parse().map_err(CoerceError::Int),
    }
}

/// Parse and narrow to the declared signed width.
fn int_of<T: TryFrom<i64>>(raw: &str, ty: &'static str) -> Result<T, CoerceError> {
    T::try_from(parse_int(raw)?).map_err(|_| CoerceError::Range(ty))
}

/// Parse and narrow to the declared unsigned width.
fn uint_of<T: TryFrom<u64>>(raw: &str, ty: &'static str) -> Result<T, CoerceError> {
    T::try_from(parse_uint(raw)?).map_err(|_| CoerceError::Range(ty))
}

fn parse_float(raw: &str) -> Result<f64, CoerceError> {
    raw.parse().map_err(CoerceError::Float)
}

/// Coerce every element of `vals`, annotating the first failure with its
/// position.
fn list_of<T>(
    vals: &[String],
    each: impl Fn(&str) -> Result<T, CoerceError>,
) -> Result<Vec<T>, CoerceError> {
    vals.iter()
        .enumerate()
        .map(|(index, val)| {
            each(val).map_err(|e| CoerceError::Element {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

impl Slot<'_> {
    /// Coerce `vals` and write the result through this slot.
    ///
    /// Scalar kinds require exactly one value. List kinds take any number
    /// (zero included) and replace the previous contents wholesale rather
    /// than appending.
    pub(crate) fn store(&mut self, vals: &[String]) -> Result<(), CoerceError> {
        if self.shape() != Shape::List && vals.len() != 1 {
            return Err(CoerceError::Arity(vals.len()));
        }
        match self {
            // Presence alone sets a bool; any value text is ignored.
            Slot::Bool(f) => **f = true,
            Slot::Str(f) => **f = vals[0].clone(),
            Slot::I8(f) => **f = int_of(&vals[0], "i8")?,
            Slot::I16(f) => **f = int_of(&vals[0], "i16")?,
            Slot::I32(f) => **f = int_of(&vals[0], "i32")?,
            Slot::I64(f) => **f = int_of(&vals[0], "i64")?,
            Slot::U8(f) => **f = uint_of(&vals[0], "u8")?,
            Slot::U16(f) => **f = uint_of(&vals[0], "u16")?,
            Slot::U32(f) => **f = uint_of(&vals[0], "u32")?,
            Slot::U64(f) => **f = uint_of(&vals[0], "u64")?,
            Slot::F32(f) => **f = parse_float(&vals[0])? as f32,
            Slot::F64(f) => **f = parse_float(&vals[0])?,
            Slot::Time(f) => **f = timestamp::parse(&vals[0])?,
            Slot::StrList(f) => **f = vals.to_vec(),
            Slot::I8List(f) => **f = list_of(vals, |v| int_of(v, "i8"))?,
            Slot::I16List(f) => **f = list_of(vals, |v| int_of(v, "i16"))?,
            Slot::I32List(f) => **f = list_of(vals, |v| int_of(v, "i32"))?,
            Slot::I64List(f) => **f = list_of(vals, |v| int_of(v, "i64"))?,
            Slot::U8List(f) => **f = list_of(vals, |v| uint_of(v, "u8"))?,
            Slot::U16List(f) => **f = list_of(vals, |v| uint_of(v, "u16"))?,
            Slot::U32List(f) => **f = list_of(vals, |v| uint_of(v, "u32"))?,
            Slot::U64List(f) => **f = list_of(vals, |v| uint_of(v, "u64"))?,
            Slot::F32List(f) => **f = list_of(vals, |v| parse_float(v).map(|x| x as f32))?,
            Slot::F64List(f) => **f = list_of(vals, parse_float)?,
            Slot::TimeList(f) => **f = list_of(vals, timestamp::parse)?,
            Slot::Unsupported(ty) => return Err(CoerceError::Unsupported(*ty)),
            // List-shaped: an empty run writes nothing and succeeds.
            Slot::UnsupportedList(ty) => {
                if !vals.is_empty() {
                    return Err(CoerceError::Unsupported(*ty));
                }
            }
        }
        Ok(())
    }
}
