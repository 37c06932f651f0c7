//! Unit identities and the process-wide unit registry.
//!
//! A unit is an opaque symbolic tag carried by every scalar of the engine.
//! The reserved [`UnitId::NUMBER`] identity marks a plain, unit-free
//! number and renders as the empty string.

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::intern::UnitTable;

/// An interned unit identity.
///
/// Two `UnitId`s are equal iff they were interned from the same name, so
/// equality is a single integer compare.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UnitId(u32);

impl UnitId {
    /// The reserved "pure number" unit.
    ///
    /// Its display name is the empty string; arithmetic treats it as the
    /// neutral unit under multiplication.
    pub const NUMBER: UnitId = UnitId(0);

    /// Returns true if this is the pure-number unit.
    #[must_use]
    pub fn is_number(self) -> bool {
        self == Self::NUMBER
    }

    /// Returns the raw interned index.
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }
}

fn registry() -> &'static RwLock<UnitTable> {
    static REGISTRY: OnceLock<RwLock<UnitTable>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut table = UnitTable::new();
        // Index 0 is reserved for the pure-number unit.
        let id = table.intern("");
        debug_assert_eq!(id, 0);
        RwLock::new(table)
    })
}

/// Interns a unit name, returning its identity.
///
/// Re-interning a name returns the identity assigned on first use, so the
/// concatenated name of a unit product always maps back to a single id.
/// The empty name is the pure-number unit.
#[must_use]
pub fn unit(name: &str) -> UnitId {
    if name.is_empty() {
        return UnitId::NUMBER;
    }

    let reg = registry();
    if let Some(idx) = reg.read().lookup(name) {
        return UnitId(idx);
    }
    UnitId(reg.write().intern(name))
}

/// Returns the display name of a unit identity.
///
/// The pure-number unit has the empty name.
#[must_use]
pub fn unit_name(id: UnitId) -> String {
    registry()
        .read()
        .name(id.0)
        .map(str::to_owned)
        .unwrap_or_default()
}
