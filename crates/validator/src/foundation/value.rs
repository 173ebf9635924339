//! Runtime value shapes handed to rules.
//!
//! A record field is lowered into a [`Value`] before any rule sees it. The
//! enum is closed: rules match on it directly instead of inspecting types at
//! runtime, and the "absent vs. null vs. zero" distinction is encoded in the
//! variants themselves.
//!
//! # Examples
//!
//! ```
//! use fieldcheck_validator::foundation::{Kind, Value};
//!
//! let lat: Option<f64> = None;
//! let value = Value::from(lat);
//! assert_eq!(value, Value::null(Kind::Float));
//! assert_eq!(Value::from("48.85").kind(), Kind::String);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============================================================================
// KIND
// ============================================================================

/// The shape of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// No value and no type information.
    Absent,
    Bool,
    Int,
    Uint,
    Float,
    Complex,
    String,
    Seq,
    Array,
    Map,
    Record,
    Ref,
    Dyn,
    Func,
    Chan,
}

impl Kind {
    /// Lowercase name used in error messages and params.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::String => "string",
            Self::Seq => "seq",
            Self::Array => "array",
            Self::Map => "map",
            Self::Record => "record",
            Self::Ref => "ref",
            Self::Dyn => "dyn",
            Self::Func => "func",
            Self::Chan => "chan",
        }
    }

    /// Returns true for shapes that can hold a null.
    #[must_use]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::Ref | Self::Dyn)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A field value as seen by a rule.
///
/// Integers and floats of every width are widened into `Int`, `Uint` and
/// `Float`. Nullable references keep the kind they point to even when null,
/// so a rule can tell a missing `Option<f64>` from a missing `Option<Vec<_>>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// An uninitialised dynamic slot: no value, no type.
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Complex { re: f64, im: f64 },
    String(String),
    Seq(Vec<Value>),
    Array(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Record(Vec<(String, Value)>),
    /// A nullable reference to a value of kind `pointee`.
    Ref {
        pointee: Kind,
        target: Option<Box<Value>>,
    },
    /// A nullable dynamic slot. When filled it is transparent to rules.
    Dyn(Option<Box<Value>>),
    Func,
    Chan,
}

/// What a rule sees after looking through references.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointee<'a> {
    /// A null reference. `None` when the type of the missing value is unknown
    /// (an empty dynamic slot or [`Value::Absent`]).
    Null(Option<Kind>),
    /// A concrete value.
    Value(&'a Value),
}

impl Value {
    /// A null reference to a value of the given kind.
    #[must_use]
    pub const fn null(pointee: Kind) -> Self {
        Self::Ref {
            pointee,
            target: None,
        }
    }

    /// A non-null reference to `value`.
    #[must_use]
    pub fn reference(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::Ref {
            pointee: value.kind(),
            target: Some(Box::new(value)),
        }
    }

    /// A filled dynamic slot.
    #[must_use]
    pub fn dynamic(value: impl Into<Value>) -> Self {
        Self::Dyn(Some(Box::new(value.into())))
    }

    /// Builds a record from `(field, value)` pairs, keeping their order.
    pub fn record<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the shape of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Absent => Kind::Absent,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::Complex { .. } => Kind::Complex,
            Self::String(_) => Kind::String,
            Self::Seq(_) => Kind::Seq,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Record(_) => Kind::Record,
            Self::Ref { .. } => Kind::Ref,
            Self::Dyn(_) => Kind::Dyn,
            Self::Func => Kind::Func,
            Self::Chan => Kind::Chan,
        }
    }

    /// Looks through one reference level and any filled dynamic slots.
    ///
    /// A reference to a reference resolves to the inner reference; rules
    /// accept a single level of indirection.
    #[must_use]
    pub fn pointee(&self) -> Pointee<'_> {
        match self {
            Self::Absent | Self::Dyn(None) => Pointee::Null(None),
            Self::Dyn(Some(inner)) => inner.pointee(),
            Self::Ref {
                pointee,
                target: None,
            } => Pointee::Null(Some(*pointee)),
            Self::Ref {
                target: Some(target),
                ..
            } => Pointee::Value(target),
            other => Pointee::Value(other),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

/// Types whose [`Kind`] is known without a value at hand.
///
/// Needed to lower `Option<T>` into a typed null reference.
pub trait HasKind {
    /// The kind every value of this type lowers to.
    const KIND: Kind;
}

macro_rules! scalar_from {
    ($variant:ident($target:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(<$target>::from(v))
                }
            }

            impl HasKind for $ty {
                const KIND: Kind = Kind::$variant;
            }
        )+
    };
}

scalar_from!(Int(i64): i8, i16, i32, i64);
scalar_from!(Uint(u64): u8, u16, u32, u64);
scalar_from!(Float(f64): f32, f64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Self::Int(v as i64)
    }
}

impl HasKind for isize {
    const KIND: Kind = Kind::Int;
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Self::Uint(v as u64)
    }
}

impl HasKind for usize {
    const KIND: Kind = Kind::Uint;
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl HasKind for bool {
    const KIND: Kind = Kind::Bool;
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl HasKind for String {
    const KIND: Kind = Kind::String;
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl HasKind for &str {
    const KIND: Kind = Kind::String;
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Seq(v.into_iter().map(Into::into).collect())
    }
}

impl<T> HasKind for Vec<T> {
    const KIND: Kind = Kind::Seq;
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> HasKind for [T; N] {
    const KIND: Kind = Kind::Array;
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(v: BTreeMap<K, V>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V> HasKind for BTreeMap<K, V> {
    const KIND: Kind = Kind::Map;
}

impl<K: Into<Value>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(v: HashMap<K, V, S>) -> Self {
        Self::Map(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, S> HasKind for HashMap<K, V, S> {
    const KIND: Kind = Kind::Map;
}

/// `Option<T>` lowers to a nullable reference that remembers `T`'s kind.
impl<T: Into<Value> + HasKind> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        Self::Ref {
            pointee: T::KIND,
            target: v.map(|inner| Box::new(inner.into())),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widths_widen() {
        assert_eq!(Value::from(7_i8), Value::Int(7));
        assert_eq!(Value::from(-7_isize), Value::Int(-7));
        assert_eq!(Value::from(7_u16), Value::Uint(7));
        assert_eq!(Value::from(7_usize), Value::Uint(7));
        assert_eq!(Value::from(1.5_f32), Value::Float(1.5));
    }

    #[test]
    fn test_option_keeps_pointee_kind() {
        assert_eq!(Value::from(None::<f64>), Value::null(Kind::Float));
        assert_eq!(Value::from(None::<String>), Value::null(Kind::String));
        assert_eq!(Value::from(Some(0_i32)), Value::reference(0_i32));
    }

    #[test]
    fn test_collections() {
        assert_eq!(Value::from(Vec::<i32>::new()), Value::Seq(vec![]));
        assert_eq!(Value::from([1_u8, 2]).kind(), Kind::Array);

        let mut map = BTreeMap::new();
        map.insert("a", 1_i32);
        assert_eq!(
            Value::from(map),
            Value::Map(vec![(Value::from("a"), Value::Int(1))])
        );
    }

    #[test]
    fn test_pointee_looks_through_one_reference() {
        let inner = Value::reference(3.5_f64);
        assert_eq!(inner.pointee(), Pointee::Value(&Value::Float(3.5)));

        let nested = Value::reference(Value::reference(3.5_f64));
        assert!(matches!(
            nested.pointee(),
            Pointee::Value(Value::Ref { .. })
        ));
    }

    #[test]
    fn test_pointee_null_shapes() {
        assert_eq!(Value::Absent.pointee(), Pointee::Null(None));
        assert_eq!(Value::Dyn(None).pointee(), Pointee::Null(None));
        assert_eq!(
            Value::null(Kind::String).pointee(),
            Pointee::Null(Some(Kind::String))
        );
    }

    #[test]
    fn test_dyn_is_transparent() {
        let filled = Value::dynamic(Value::null(Kind::Float));
        assert_eq!(filled.pointee(), Pointee::Null(Some(Kind::Float)));

        let filled = Value::dynamic("x");
        assert_eq!(filled.pointee(), Pointee::Value(&Value::from("x")));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Kind::Float.to_string(), "float");
        assert!(Kind::Ref.is_nullable());
        assert!(!Kind::Record.is_nullable());
    }
}
