//! String interning for identifiers and keywords.
//!
//! The compiler is strictly single-threaded (see the core's concurrency
//! model), so the interner is a thread-local table rather than the
//! lock/DashMap-based global table a concurrent frontend would need.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;

thread_local! {
    static TABLE: RefCell<Interner> = RefCell::new(Interner::new());
}

struct Interner {
    strings: Vec<&'static str>,
    lookup: FxHashMap<&'static str, u32>,
}

impl Interner {
    fn new() -> Self {
        Self { strings: Vec::new(), lookup: FxHashMap::default() }
    }

    fn intern(&mut self, s: &str) -> u32 {
        if let Some(&idx) = self.lookup.get(s) {
            return idx;
        }
        let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
        let idx = self.strings.len() as u32;
        self.strings.push(leaked);
        self.lookup.insert(leaked, idx);
        idx
    }

    fn resolve(&self, idx: u32) -> &'static str {
        self.strings[idx as usize]
    }
}

/// A compact, copyable handle to an interned string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    pub fn intern(s: &str) -> Self {
        TABLE.with(|t| Symbol(t.borrow_mut().intern(s)))
    }

    pub fn as_str(&self) -> &'static str {
        TABLE.with(|t| t.borrow().resolve(self.0))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_interns_to_equal_symbols() {
        let a = Symbol::intern("foo");
        let b = Symbol::intern("foo");
        let c = Symbol::intern("bar");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "foo");
    }
}
