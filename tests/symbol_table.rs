use minipas::interpreter::{
    symbol_table::{SymbolTable, UndefinedSymbol},
    value::core::Value,
};

#[test]
fn global_scope_is_level_one() {
    let table = SymbolTable::new("GLOBAL");

    assert_eq!(table.scope_name(), "GLOBAL");
    assert_eq!(table.scope_level(), 1);
    assert!(table.symbols().is_empty());
}

#[test]
fn nested_scopes_shadow_and_restore() {
    let mut table = SymbolTable::new("GLOBAL");
    let global = table.current();
    table.define("X", Value::Integer(1));

    let inner = table.enter_scope("INNER");
    assert_ne!(inner, global);
    assert_eq!(table.scope_level(), 2);

    table.define("X", Value::Text("shadow".to_string()));
    assert_eq!(table.lookup("X", false), Some(&Value::Text("shadow".to_string())));

    assert_eq!(table.leave_scope(), Some(global));
    assert_eq!(table.lookup("X", false), Some(&Value::Integer(1)));
}

#[test]
fn leaving_global_scope_is_a_no_op() {
    let mut table = SymbolTable::new("GLOBAL");

    assert_eq!(table.leave_scope(), None);
    assert_eq!(table.scope_name(), "GLOBAL");
}

#[test]
fn assign_updates_nearest_declaring_scope() {
    let mut table = SymbolTable::new("GLOBAL");
    table.define("COUNT", Value::Integer(0));
    table.enter_scope("INNER");

    table.assign("COUNT", Value::Integer(5)).unwrap();
    assert!(table.symbols().is_empty());

    table.leave_scope();
    assert_eq!(table.symbols()["COUNT"], Value::Integer(5));
}

#[test]
fn assign_never_creates_bindings() {
    let mut table = SymbolTable::new("GLOBAL");

    assert_eq!(table.assign("MISSING", Value::Boolean(true)),
               Err(UndefinedSymbol { name: "MISSING".to_string() }));
    assert_eq!(table.lookup("MISSING", false), None);
}

#[test]
fn global_symbols_are_ordered_by_name() {
    let mut table = SymbolTable::new("GLOBAL");
    table.define("ZETA", Value::Real(1.0));
    table.define("ALPHA", Value::Real(2.0));
    table.enter_scope("INNER");
    table.define("LOCAL", Value::Real(3.0));

    let names: Vec<_> = table.into_global_symbols().into_keys().collect();
    assert_eq!(names, ["ALPHA", "ZETA"]);
}
