use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};

use super::{Primitive, TypeDesc};

/// A type that can describe its own shape to the schema builder.
///
/// Implemented for the std primitives, strings, pointer-like wrappers,
/// `Option`, sequences, sets and maps. Records get it from
/// `#[derive(Describe)]`.
///
/// A type that contains itself (directly or through a collection) has no
/// finite descriptor: `describe` recurses without bound on it.
pub trait Describe {
    fn describe() -> TypeDesc;
}

macro_rules! describe_primitive {
    ($($ty:ty => $prim:ident),* $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDesc {
                    TypeDesc::primitive(Primitive::$prim)
                }
            }
        )*
    };
}

describe_primitive! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128, usize => Usize,
    f32 => F32, f64 => F64,
    bool => Bool,
    char => Char,
    str => String,
    String => String,
}

// pointers / references: one level of indirection each
macro_rules! describe_optional {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Describe + ?Sized> Describe for $ty {
                fn describe() -> TypeDesc {
                    TypeDesc::optional(T::describe())
                }
            }
        )*
    };
}

describe_optional!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDesc {
        TypeDesc::optional(T::describe())
    }
}

macro_rules! describe_sequence {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Describe> Describe for $ty {
                fn describe() -> TypeDesc {
                    TypeDesc::sequence(T::describe())
                }
            }
        )*
    };
}

describe_sequence!([T], Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>);

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDesc {
        TypeDesc::sequence(T::describe())
    }
}

impl<T: Describe, S> Describe for HashSet<T, S> {
    fn describe() -> TypeDesc {
        TypeDesc::sequence(T::describe())
    }
}

impl<T: Describe, S> Describe for IndexSet<T, S> {
    fn describe() -> TypeDesc {
        TypeDesc::sequence(T::describe())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDesc {
        TypeDesc::mapping(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDesc {
        TypeDesc::mapping(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for IndexMap<K, V, S> {
    fn describe() -> TypeDesc {
        TypeDesc::mapping(K::describe(), V::describe())
    }
}

// No mapping rule for these; they describe themselves as opaque so the
// build reports them instead of the declaration failing to compile.
impl Describe for () {
    fn describe() -> TypeDesc {
        TypeDesc::opaque("unit", "()")
    }
}

impl Describe for serde_json::Value {
    fn describe() -> TypeDesc {
        TypeDesc::opaque("any", "serde_json::Value")
    }
}
