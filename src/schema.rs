//! The flag registry: schema types declare their bindings into a [`Binder`],
//! which produces the map from normalized flag name to a writable [`Slot`]
//! inside the original record.
//!
//! Nothing here is reflective — each record type spells out its own bindings
//! in [`Schema::bind`], so the set of flags is fixed at compile time and a
//! field left out of `bind` is simply unreachable.

use std::collections::HashMap;

use chrono::{DateTime, Local};

/// A record type whose fields can be bound to command-line flags.
///
/// Implementations declare one binding per decodable field. Names are the
/// normalized flag names: lowercase, no leading dashes.
///
/// ```
/// use argbind::{Binder, Schema};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     verbose: bool,
/// }
///
/// impl Schema for Server {
///     fn bind<'a>(&'a mut self, binder: &mut Binder<'a>) {
///         binder.field("host", &mut self.host);
///         binder.field("port", &mut self.port);
///         binder.field("verbose", &mut self.verbose);
///     }
/// }
///
/// let mut server = Server::default();
/// argbind::decode(&mut server, &["--host=0.0.0.0", "--port", "8080"]).unwrap();
/// assert_eq!(server.port, 8080);
/// ```
///
/// A field with no binding is invisible: decoding a flag with its name
/// reports an unknown flag, exactly as if the field did not exist.
pub trait Schema {
    /// Declare this record's flag bindings into `binder`.
    fn bind<'a>(&'a mut self, binder: &mut Binder<'a>);
}

/// Collects flag bindings while walking a [`Schema`].
///
/// Nested records compose flag names with a literal `-` separator
/// (`--sub-count`); embedded records merge their names in unprefixed.
///
/// Flag names must be unique within one decode call. A duplicate is a
/// schema bug: debug builds panic on it, release builds deterministically
/// keep the later binding.
pub struct Binder<'a> {
    prefix: String,
    targets: HashMap<String, Slot<'a>>,
}

impl<'a> Binder<'a> {
    pub(crate) fn new() -> Self {
        Binder {
            prefix: String::new(),
            targets: HashMap::new(),
        }
    }

    /// Bind a leaf field under `name`.
    pub fn field<T: Bindable>(&mut self, name: &str, field: &'a mut T) {
        self.insert(name, field.slot());
    }

    /// Bind a flag name whose field type has no supported coercion (a
    /// map). The name is reachable in the flag map, but supplying a value
    /// for it fails with an unsupported-type error — never at bind time.
    pub fn unsupported<T>(&mut self, name: &str) {
        self.insert(name, Slot::Unsupported(std::any::type_name::<T>()));
    }

    /// Bind a list-shaped flag name whose element type has no supported
    /// coercion (a list of records). Operands are collected with the
    /// normal list boundary: an empty run succeeds and writes nothing,
    /// and the unsupported-type error fires only when values were
    /// actually supplied.
    pub fn unsupported_list<T>(&mut self, name: &str) {
        self.insert(name, Slot::UnsupportedList(std::any::type_name::<T>()));
    }

    /// Bind a named sub-record; its flag names are prefixed with `<name>-`.
    pub fn nested<S: Schema>(&mut self, name: &str, sub: &'a mut S) {
        let saved = self.prefix.len();
        self.prefix.push_str(name);
        self.prefix.push('-');
        sub.bind(self);
        self.prefix.truncate(saved);
    }

    /// Bind an embedded sub-record; its flag names merge in unprefixed.
    pub fn embed<S: Schema>(&mut self, sub: &'a mut S) {
        sub.bind(self);
    }

    /// Bind an optional named sub-record.
    ///
    /// An empty option is filled with `S::default()` so its flag names can
    /// be derived — the record is mutated even when no flag under this
    /// prefix is ever supplied. This eager materialization is part of the
    /// contract, not an optimization target.
    pub fn nested_opt<S: Schema + Default>(&mut self, name: &str, sub: &'a mut Option<S>) {
        self.nested(name, sub.get_or_insert_with(S::default));
    }

    /// Bind an optional embedded sub-record, materializing it if empty.
    pub fn embed_opt<S: Schema + Default>(&mut self, sub: &'a mut Option<S>) {
        self.embed(sub.get_or_insert_with(S::default));
    }

    pub(crate) fn into_targets(self) -> HashMap<String, Slot<'a>> {
        self.targets
    }

    fn insert(&mut self, name: &str, slot: Slot<'a>) {
        let key = if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}{name}", self.prefix)
        };
        debug_assert!(
            !self.targets.contains_key(&key),
            "argbind: duplicate flag name '{key}'"
        );
        self.targets.insert(key, slot);
    }
}

/// A writable binding into one record field, tagged with the field's kind.
///
/// This is a closed set: one variant per supported leaf type plus the list
/// form of every element kind. The coercer matches it exhaustively, so
/// adding a kind means extending this enum, [`Bindable`], and
/// `Slot::store` together — the compiler enforces the rest.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    Str(&'a mut String),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Time(&'a mut DateTime<Local>),
    StrList(&'a mut Vec<String>),
    I8List(&'a mut Vec<i8>),
    I16List(&'a mut Vec<i16>),
    I32List(&'a mut Vec<i32>),
    I64List(&'a mut Vec<i64>),
    U8List(&'a mut Vec<u8>),
    U16List(&'a mut Vec<u16>),
    U32List(&'a mut Vec<u32>),
    U64List(&'a mut Vec<u64>),
    F32List(&'a mut Vec<f32>),
    F64List(&'a mut Vec<f64>),
    TimeList(&'a mut Vec<DateTime<Local>>),
    /// A reachable flag whose field type has no coercion. Carries the
    /// concrete type name for the error message.
    Unsupported(&'static str),
    /// Like [`Slot::Unsupported`], but list-shaped: operands collect
    /// greedily, an empty run is fine, and supplied values fail.
    UnsupportedList(&'static str),
}

/// How many operand tokens a slot consumes during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// Presence-only: no operand.
    Flag,
    /// Greedy: operands until the next known flag or end of input.
    List,
    /// Exactly one operand. Scalar-shaped unsupported kinds also consume
    /// one, then fail.
    Scalar,
}

impl Slot<'_> {
    pub(crate) fn shape(&self) -> Shape {
        match self {
            Slot::Bool(_) => Shape::Flag,
            Slot::StrList(_)
            | Slot::I8List(_)
            | Slot::I16List(_)
            | Slot::I32List(_)
            | Slot::I64List(_)
            | Slot::U8List(_)
            | Slot::U16List(_)
            | Slot::U32List(_)
            | Slot::U64List(_)
            | Slot::F32List(_)
            | Slot::F64List(_)
            | Slot::TimeList(_)
            | Slot::UnsupportedList(_) => Shape::List,
            Slot::Str(_)
            | Slot::I8(_)
            | Slot::I16(_)
            | Slot::I32(_)
            | Slot::I64(_)
            | Slot::U8(_)
            | Slot::U16(_)
            | Slot::U32(_)
            | Slot::U64(_)
            | Slot::F32(_)
            | Slot::F64(_)
            | Slot::Time(_)
            | Slot::Unsupported(_) => Shape::Scalar,
        }
    }

    /// Mark a presence-only flag as seen. No-op for value-carrying slots.
    pub(crate) fn set_present(&mut self) {
        if let Slot::Bool(field) = self {
            **field = true;
        }
    }

    /// The target type's name as it appears in error messages.
    pub(crate) fn type_name(&self) -> &'static str {
        match self {
            Slot::Bool(_) => "bool",
            Slot::Str(_) => "String",
            Slot::I8(_) => "i8",
            Slot::I16(_) => "i16",
            Slot::I32(_) => "i32",
            Slot::I64(_) => "i64",
            Slot::U8(_) => "u8",
            Slot::U16(_) => "u16",
            Slot::U32(_) => "u32",
            Slot::U64(_) => "u64",
            Slot::F32(_) => "f32",
            Slot::F64(_) => "f64",
            Slot::Time(_) => "DateTime<Local>",
            Slot::StrList(_) => "Vec<String>",
            Slot::I8List(_) => "Vec<i8>",
            Slot::I16List(_) => "Vec<i16>",
            Slot::I32List(_) => "Vec<i32>",
            Slot::I64List(_) => "Vec<i64>",
            Slot::U8List(_) => "Vec<u8>",
            Slot::U16List(_) => "Vec<u16>",
            Slot::U32List(_) => "Vec<u32>",
            Slot::U64List(_) => "Vec<u64>",
            Slot::F32List(_) => "Vec<f32>",
            Slot::F64List(_) => "Vec<f64>",
            Slot::TimeList(_) => "Vec<DateTime<Local>>",
            Slot::Unsupported(ty) => *ty,
            Slot::UnsupportedList(ty) => *ty,
        }
    }
}

/// Leaf field types that can be bound with [`Binder::field`].
///
/// Implemented for the closed set of supported scalars and their `Vec`
/// list forms. Types outside this set go through [`Binder::unsupported`].
pub trait Bindable {
    fn slot(&mut self) -> Slot<'_>;
}

impl Bindable for bool {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

macro_rules! bindable {
    ($($ty:ty => $scalar:ident / $list:ident),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$scalar(self)
                }
            }

            impl Bindable for Vec<$ty> {
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$list(self)
                }
            }
        )*
    };
}

bindable! {
    String => Str / StrList,
    i8 => I8 / I8List,
    i16 => I16 / I16List,
    i32 => I32 / I32List,
    i64 => I64 / I64List,
    u8 => U8 / U8List,
    u16 => U16 / U16List,
    u32 => U32 / U32List,
    u64 => U64 / U64List,
    f32 => F32 / F32List,
    f64 => F64 / F64List,
    DateTime<Local> => Time / TimeList,
}
