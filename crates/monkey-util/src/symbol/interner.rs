//! String interner backing [`super::Symbol`].
//!
//! Uses a single `RwLock`-guarded table rather than a lock-free concurrent
//! map: the lexer and parser are invoked from one thread at a time (spec §5),
//! so contention never happens in this crate's own use. A lock keeps the type
//! `Send + Sync` for callers who do cross threads, without the extra
//! complexity a sharded or lock-free table would add for no benefit here.

use rustc_hash::FxHashMap;
use std::sync::{LazyLock, RwLock};

use super::Symbol;

pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.initialize_known_symbols();
    table
});

pub struct StringTable {
    inner: RwLock<Inner>,
}

struct Inner {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

pub(crate) const KNOWN_SYMBOLS: [&str; 7] = ["fn", "let", "true", "false", "if", "else", "return"];

impl StringTable {
    fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                map: FxHashMap::default(),
                strings: Vec::new(),
            }),
        }
    }

    fn initialize_known_symbols(&self) {
        let mut inner = self.inner.write().unwrap();
        for symbol in KNOWN_SYMBOLS {
            let interned: &'static str = Box::leak(symbol.to_string().into_boxed_str());
            let idx = inner.strings.len() as u32;
            inner.strings.push(interned);
            inner.map.insert(interned, idx);
        }
    }

    pub fn intern(&self, string: &str) -> Symbol {
        {
            let inner = self.inner.read().unwrap();
            if let Some(&idx) = inner.map.get(string) {
                return Symbol { index: idx };
            }
        }

        let mut inner = self.inner.write().unwrap();
        // Another writer may have interned this string while we waited for
        // the write lock; check again before allocating.
        if let Some(&idx) = inner.map.get(string) {
            return Symbol { index: idx };
        }

        let interned: &'static str = Box::leak(string.to_string().into_boxed_str());
        let idx = inner.strings.len() as u32;
        inner.strings.push(interned);
        inner.map.insert(interned, idx);
        Symbol { index: idx }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        let inner = self.inner.read().unwrap();
        inner.strings.get(symbol.index as usize).copied()
    }
}
