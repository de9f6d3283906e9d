use arch::symbol::{predefined, VARIABLE_BASE};
use indexmap::IndexMap;
use serde::Serialize;

use crate::label::Labels;

/// Symbols of one assembly run. Lookup order is predefined, label, variable.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    labels: Labels,
    variables: IndexMap<String, u16>,
    next: u16,
}

impl SymbolTable {
    pub fn new(labels: Labels) -> Self {
        SymbolTable {
            labels,
            variables: IndexMap::new(),
            next: VARIABLE_BASE,
        }
    }

    /// Resolve `name`, allocating a new variable on a miss.
    pub fn resolve(&mut self, name: &str) -> u16 {
        if let Some(addr) = predefined(name) {
            return addr;
        }
        if let Some(addr) = self.labels.get(name) {
            return addr;
        }
        if let Some(addr) = self.variables.get(name) {
            return *addr;
        }
        let addr = self.next;
        self.variables.insert(name.to_string(), addr);
        self.next = self.next.wrapping_add(1);
        addr
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, u16)> {
        self.variables.iter().map(|(name, addr)| (name.as_str(), *addr))
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn to_map(&self) -> SymbolMap {
        SymbolMap {
            labels: self
                .labels
                .iter()
                .map(|(name, pc)| (name.to_string(), pc))
                .collect(),
            variables: self.variables.clone(),
        }
    }
}

/// User-defined symbols, as written by `--symbols`.
#[derive(Debug, Serialize)]
pub struct SymbolMap {
    pub labels: IndexMap<String, u16>,
    pub variables: IndexMap<String, u16>,
}

impl SymbolMap {
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
