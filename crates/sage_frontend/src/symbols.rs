//! A rudimentary name-resolution table.
//!
//! Not yet consulted by the parser or the code generator; it becomes useful
//! once assignment statements are lowered and names need declared types.

use std::collections::HashMap;

use crate::ast::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub ty: Type,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
    parent: Option<Box<SymbolTable>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: SymbolTable) -> Self {
        Self {
            symbols: HashMap::new(),
            parent: Some(Box::new(parent)),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, ty: Type) {
        self.symbols.insert(name.into(), Symbol { ty });
    }

    /// Looks `name` up in this scope, then in enclosing scopes.
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        match self.symbols.get(name) {
            Some(symbol) => Some(*symbol),
            None => self.parent.as_ref().and_then(|p| p.lookup(name)),
        }
    }
}
