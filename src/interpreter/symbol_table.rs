use std::collections::BTreeMap;

use crate::interpreter::value::core::Value;

/// Handle to a scope record inside a [`SymbolTable`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

/// One level of the scope chain.
#[derive(Debug, Clone)]
struct Scope {
    name:      String,
    level:     usize,
    symbols:   BTreeMap<String, Value>,
    enclosing: Option<ScopeId>,
}

/// Returned by [`SymbolTable::assign`] when no scope in the chain declares the
/// name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndefinedSymbol {
    /// The name that could not be resolved.
    pub name: String,
}

impl std::fmt::Display for UndefinedSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Undefined variable: {}", self.name)
    }
}

impl std::error::Error for UndefinedSymbol {}

/// Chained name-to-value mapping.
///
/// Scopes live in an arena and refer to their enclosing scope by
/// [`ScopeId`]; the enclosing link is only used for lookup, never for
/// ownership. The table always contains the global scope, created by
/// [`SymbolTable::new`], and tracks which scope is current.
///
/// ## Example
/// ```
/// use minipas::interpreter::{symbol_table::SymbolTable, value::core::Value};
///
/// let mut table = SymbolTable::new("GLOBAL");
/// table.define("X", Value::Integer(1));
///
/// table.enter_scope("INNER");
/// table.define("Y", Value::Real(2.0));
///
/// // Lookups walk outward through the chain.
/// assert_eq!(table.lookup("X", false), Some(&Value::Integer(1)));
/// assert_eq!(table.lookup("X", true), None);
///
/// // Assignment updates the nearest scope that declares the name.
/// table.assign("X", Value::Integer(5)).unwrap();
/// assert!(table.assign("Z", Value::Integer(0)).is_err());
///
/// table.leave_scope();
/// assert_eq!(table.lookup("X", true), Some(&Value::Integer(5)));
/// assert_eq!(table.lookup("Y", false), None);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes:  Vec<Scope>,
    current: ScopeId,
}

impl SymbolTable {
    /// Creates a table holding only an empty global scope at level 1.
    #[must_use]
    pub fn new(global_name: &str) -> Self {
        Self { scopes:  vec![Scope { name:      global_name.to_string(),
                                     level:     1,
                                     symbols:   BTreeMap::new(),
                                     enclosing: None, }],
               current: ScopeId(0), }
    }

    /// Opens a new scope nested in the current one and makes it current.
    pub fn enter_scope(&mut self, name: &str) -> ScopeId {
        let level = self.current_scope().level + 1;
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { name: name.to_string(),
                                 level,
                                 symbols: BTreeMap::new(),
                                 enclosing: Some(self.current) });
        self.current = id;
        id
    }

    /// Makes the enclosing scope current again.
    ///
    /// Returns the new current scope, or `None` (leaving the table unchanged)
    /// when the current scope is the global one.
    pub fn leave_scope(&mut self) -> Option<ScopeId> {
        let enclosing = self.current_scope().enclosing?;
        self.current = enclosing;
        Some(enclosing)
    }

    /// The handle of the current scope.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// The name of the current scope.
    #[must_use]
    pub fn scope_name(&self) -> &str {
        &self.current_scope().name
    }

    /// The nesting level of the current scope; the global scope is level 1.
    #[must_use]
    pub fn scope_level(&self) -> usize {
        self.current_scope().level
    }

    /// Binds `name` in the current scope, replacing any existing binding
    /// there.
    pub fn define(&mut self, name: &str, value: Value) {
        let current = self.current;
        self.scope_mut(current).symbols.insert(name.to_string(), value);
    }

    /// Resolves `name`, starting at the current scope.
    ///
    /// Unless `current_only` is set, the search continues outward through the
    /// enclosing scopes until the name is found or the chain ends.
    #[must_use]
    pub fn lookup(&self, name: &str, current_only: bool) -> Option<&Value> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let scope = self.scope(scope_id);
            if let Some(value) = scope.symbols.get(name) {
                return Some(value);
            }
            if current_only {
                return None;
            }
            id = scope.enclosing;
        }
        None
    }

    /// Overwrites the binding of `name` in the nearest scope that declares it.
    ///
    /// # Errors
    /// Returns `UndefinedSymbol` when no scope in the chain declares `name`;
    /// assignment never creates a binding.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), UndefinedSymbol> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let scope = self.scope_mut(scope_id);
            if let Some(slot) = scope.symbols.get_mut(name) {
                *slot = value;
                return Ok(());
            }
            id = scope.enclosing;
        }
        Err(UndefinedSymbol { name: name.to_string() })
    }

    /// The bindings of the current scope, ordered by name.
    #[must_use]
    pub fn symbols(&self) -> &BTreeMap<String, Value> {
        &self.current_scope().symbols
    }

    /// Consumes the table and returns the bindings of the global scope.
    #[must_use]
    pub fn into_global_symbols(mut self) -> BTreeMap<String, Value> {
        std::mem::take(&mut self.scopes[0].symbols)
    }

    fn current_scope(&self) -> &Scope {
        self.scope(self.current)
    }

    fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0]
    }

    fn scope_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.0]
    }
}
