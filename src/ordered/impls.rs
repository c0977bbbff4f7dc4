// src/ordered/impls.rs
//! Comparison, hashing and formatting, all in terms of the native value.

use std::cmp;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytemuck::Pod;

use super::Ordered;
use crate::ordering::Ordering;

impl<T, O, G> PartialEq for Ordered<T, O, G>
where
    T: Pod + PartialEq,
    O: Ordering,
    G: Pod,
{
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T, O, G> Eq for Ordered<T, O, G>
where
    T: Pod + Eq,
    O: Ordering,
    G: Pod,
{
}

impl<T, O, G> PartialOrd for Ordered<T, O, G>
where
    T: Pod + PartialOrd,
    O: Ordering,
    G: Pod,
{
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.get().partial_cmp(&other.get())
    }
}

impl<T, O, G> Ord for Ordered<T, O, G>
where
    T: Pod + Ord,
    O: Ordering,
    G: Pod,
{
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.get().cmp(&other.get())
    }
}

impl<T, O, G> Hash for Ordered<T, O, G>
where
    T: Pod + Hash,
    O: Ordering,
    G: Pod,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

macro_rules! forward_fmt {
    ($($trait:ident),+) => {
        $(
            impl<T, O, G> fmt::$trait for Ordered<T, O, G>
            where
                T: Pod + fmt::$trait,
                O: Ordering,
                G: Pod,
            {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$trait::fmt(&self.get(), f)
                }
            }
        )+
    };
}

forward_fmt!(Debug, Display, LowerHex, UpperHex);
