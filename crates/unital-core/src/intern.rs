//! Interning table for unit names.
//!
//! This module provides the storage behind the unit registry: each
//! distinct name is kept exactly once and addressed by a dense index.

use hashbrown::HashMap;

/// An interning table for unit names.
///
/// Maps names to dense `u32` indices with reverse lookup, ensuring each
/// unique name is stored exactly once.
#[derive(Debug, Default)]
pub struct UnitTable {
    /// Maps names to their indices.
    map: HashMap<String, u32>,
    /// Stores names by index for reverse lookup.
    names: Vec<String>,
}

impl UnitTable {
    /// Creates a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            names: Vec::new(),
        }
    }

    /// Interns a name, returning its index.
    ///
    /// If the name was seen before, returns the existing index.
    /// Otherwise assigns the next index and stores the name.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&idx) = self.map.get(name) {
            return idx;
        }

        let idx = u32::try_from(self.names.len()).expect("unit table overflow");
        self.map.insert(name.to_owned(), idx);
        self.names.push(name.to_owned());
        idx
    }

    /// Gets a name by its index.
    #[must_use]
    pub fn name(&self, idx: u32) -> Option<&str> {
        self.names.get(idx as usize).map(String::as_str)
    }

    /// Gets the index of a name, if it was interned.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<u32> {
        self.map.get(name).copied()
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_stable() {
        let mut table = UnitTable::new();

        let i = table.intern("i");
        let j = table.intern("j");
        let i2 = table.intern("i");

        assert_eq!(i, 0);
        assert_eq!(j, 1);
        assert_eq!(i, i2); // Same name, same index

        assert_eq!(table.name(i), Some("i"));
        assert_eq!(table.name(j), Some("j"));
        assert_eq!(table.lookup("j"), Some(1));
        assert_eq!(table.lookup("k"), None);
        assert_eq!(table.len(), 2);
    }
}
