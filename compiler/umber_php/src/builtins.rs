//! Builtin function registry.
//!
//! PHP builtins are grouped by extension module so users can switch off
//! highlighting for modules they do not care about. The bundled table is
//! loaded once per process; each lexer keeps its own filtered
//! [`BuiltinSet`].

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};

mod table;

/// Supplies module name → function names.
pub trait BuiltinSource {
    fn load(&self) -> Vec<(String, Vec<String>)>;
}

/// The table compiled into this crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct BundledBuiltins;

impl BuiltinSource for BundledBuiltins {
    fn load(&self) -> Vec<(String, Vec<String>)> {
        table::MODULES
            .iter()
            .map(|(module, functions)| {
                let functions = functions.iter().map(|f| (*f).to_owned()).collect();
                ((*module).to_owned(), functions)
            })
            .collect()
    }
}

/// All known builtin functions, by module. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct BuiltinRegistry {
    modules: FxHashMap<String, FxHashSet<String>>,
}

static BUNDLED: OnceLock<BuiltinRegistry> = OnceLock::new();

impl BuiltinRegistry {
    /// Build a registry. Function names are stored lowercased; a module
    /// listed twice has its functions merged.
    pub fn from_source(source: &dyn BuiltinSource) -> Self {
        let mut modules: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        for (module, functions) in source.load() {
            modules
                .entry(module)
                .or_default()
                .extend(functions.into_iter().map(|f| f.to_lowercase()));
        }
        BuiltinRegistry { modules }
    }

    /// The process-wide registry of bundled builtins.
    pub fn bundled() -> &'static BuiltinRegistry {
        BUNDLED.get_or_init(|| {
            let registry = BuiltinRegistry::from_source(&BundledBuiltins);
            tracing::debug!(
                modules = registry.modules.len(),
                functions = registry.function_count(),
                "loaded builtin registry"
            );
            registry
        })
    }

    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    pub fn module(&self, name: &str) -> Option<&FxHashSet<String>> {
        self.modules.get(name)
    }

    pub fn function_count(&self) -> usize {
        self.modules.values().map(FxHashSet::len).sum()
    }

    /// Union of all modules not named in `disabled`.
    pub fn filtered(&self, disabled: &FxHashSet<String>) -> BuiltinSet {
        let names: FxHashSet<String> = self
            .modules
            .iter()
            .filter(|(module, _)| !disabled.contains(module.as_str()))
            .flat_map(|(_, functions)| functions.iter().cloned())
            .collect();
        tracing::debug!(
            disabled = disabled.len(),
            functions = names.len(),
            "filtered builtins"
        );
        BuiltinSet { names }
    }
}

/// Builtin names one lexer highlights.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuiltinSet {
    names: FxHashSet<String>,
}

impl BuiltinSet {
    /// `name` must already be lowercased.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
