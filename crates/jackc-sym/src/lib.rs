//! jackc-sym - the two-scope symbol table.
//!
//! A class scope (`Static`/`Field`) persists for the whole class; a
//! subroutine scope (`Argument`/`Local`) is cleared at the start of
//! every subroutine. `lookup` favors the subroutine scope, giving
//! parameters and locals shadowing priority over fields and statics
//! with the same name. There is no stack of scopes because the
//! language only ever has these two.

use rustc_hash::FxHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Static,
    Field,
    Argument,
    Local,
}

/// One bound identifier: its declared type, which kind of slot it
/// lives in, and its 0-based index within that (scope, kind) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub declared_type: String,
    pub kind: Kind,
    pub index: u16,
}

#[derive(Default)]
struct Scope {
    entries: FxHashMap<String, Entry>,
}

pub struct SymbolTable {
    class_scope: Scope,
    subroutine_scope: Scope,
    class_counters: [u16; 2],      // indexed by Kind::Static / Field
    subroutine_counters: [u16; 2], // indexed by Kind::Argument - 2 / Local - 2
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            class_scope: Scope::default(),
            subroutine_scope: Scope::default(),
            class_counters: [0, 0],
            subroutine_counters: [0, 0],
        }
    }

    /// Clear the subroutine scope and zero its counters. The class
    /// scope and its counters are untouched.
    pub fn start_subroutine(&mut self) {
        self.subroutine_scope.entries.clear();
        self.subroutine_counters = [0, 0];
    }

    /// Returns `Err` if `name` is already bound in the scope `kind`
    /// belongs to — re-declaration within one scope is a compile
    /// error, not silently shadowed.
    pub fn define(
        &mut self,
        name: &str,
        declared_type: &str,
        kind: Kind,
    ) -> Result<(), Redeclared> {
        let (scope, counter) = self.scope_and_counter_mut(kind);
        if scope.entries.contains_key(name) {
            return Err(Redeclared { name: name.to_string() });
        }
        let index = *counter;
        *counter += 1;
        scope.entries.insert(
            name.to_string(),
            Entry { name: name.to_string(), declared_type: declared_type.to_string(), kind, index },
        );
        Ok(())
    }

    /// Subroutine scope first, then class scope.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.subroutine_scope
            .entries
            .get(name)
            .or_else(|| self.class_scope.entries.get(name))
    }

    pub fn count(&self, kind: Kind) -> u16 {
        match kind {
            Kind::Static => self.class_counters[0],
            Kind::Field => self.class_counters[1],
            Kind::Argument => self.subroutine_counters[0],
            Kind::Local => self.subroutine_counters[1],
        }
    }

    fn scope_and_counter_mut(&mut self, kind: Kind) -> (&mut Scope, &mut u16) {
        match kind {
            Kind::Static => (&mut self.class_scope, &mut self.class_counters[0]),
            Kind::Field => (&mut self.class_scope, &mut self.class_counters[1]),
            Kind::Argument => (&mut self.subroutine_scope, &mut self.subroutine_counters[0]),
            Kind::Local => (&mut self.subroutine_scope, &mut self.subroutine_counters[1]),
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct Redeclared {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense_per_kind() {
        let mut t = SymbolTable::new();
        t.define("a", "int", Kind::Field).unwrap();
        t.define("b", "int", Kind::Field).unwrap();
        t.define("s", "int", Kind::Static).unwrap();
        assert_eq!(t.lookup("a").unwrap().index, 0);
        assert_eq!(t.lookup("b").unwrap().index, 1);
        assert_eq!(t.lookup("s").unwrap().index, 0);
        assert_eq!(t.count(Kind::Field), 2);
        assert_eq!(t.count(Kind::Static), 1);
    }

    #[test]
    fn redeclaration_in_same_scope_is_an_error() {
        let mut t = SymbolTable::new();
        t.define("x", "int", Kind::Field).unwrap();
        assert!(t.define("x", "int", Kind::Field).is_err());
    }

    #[test]
    fn subroutine_scope_shadows_class_scope() {
        let mut t = SymbolTable::new();
        t.define("x", "int", Kind::Field).unwrap();
        t.start_subroutine();
        t.define("x", "int", Kind::Local).unwrap();
        let e = t.lookup("x").unwrap();
        assert_eq!(e.kind, Kind::Local);
    }

    #[test]
    fn start_subroutine_clears_scope_and_counters_but_not_class_scope() {
        let mut t = SymbolTable::new();
        t.define("f", "int", Kind::Field).unwrap();
        t.start_subroutine();
        t.define("a", "int", Kind::Argument).unwrap();
        t.define("l", "int", Kind::Local).unwrap();
        t.start_subroutine();
        assert!(t.lookup("a").is_none());
        assert!(t.lookup("l").is_none());
        assert_eq!(t.count(Kind::Argument), 0);
        assert_eq!(t.count(Kind::Local), 0);
        assert!(t.lookup("f").is_some());
        assert_eq!(t.count(Kind::Field), 1);
    }
}
