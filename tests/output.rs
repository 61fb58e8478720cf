use std::collections::BTreeMap;

use minipas::{
    interpreter::value::core::Value,
    output::{beauty_table, to_json},
    run,
};

fn sample() -> BTreeMap<String, Value> {
    BTreeMap::from([("NAME".to_string(), Value::Text("Ada".to_string())),
                    ("COUNT".to_string(), Value::Integer(-3)),
                    ("RATIO".to_string(), Value::Real(0.5)),
                    ("READY".to_string(), Value::Boolean(false)),
                    ("PENDING".to_string(), Value::Absent)])
}

#[test]
fn json_is_sorted_and_typed() {
    assert_eq!(to_json(&sample()).unwrap(),
               r#"{"COUNT":-3,"NAME":"Ada","PENDING":null,"RATIO":0.5,"READY":false}"#);
}

#[test]
fn json_of_empty_mapping() {
    assert_eq!(to_json(&BTreeMap::new()).unwrap(), "{}");
}

#[test]
fn json_escapes_text() {
    let memory = run("PROGRAM T; VAR s: STRING; BEGIN s := 'say \"hi\"' END.").unwrap();
    assert_eq!(to_json(&memory).unwrap(), r#"{"S":"say \"hi\""}"#);
}

#[test]
fn table_layout() {
    let expected = "\
+--------------------+--------------------+
|      Variable      |       Value        |
+--------------------+--------------------+
| COUNT              |                  -3|
| NAME               |                 Ada|
| PENDING            |                None|
| RATIO              |              0.5000|
| READY              |               FALSE|
+--------------------+--------------------+
";

    assert_eq!(beauty_table(&sample()), expected);
}

#[test]
fn table_of_empty_mapping_has_only_borders() {
    assert_eq!(beauty_table(&BTreeMap::new()).lines().count(), 4);
}
