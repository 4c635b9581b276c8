use super::*;

const LIMIT: ConfigKey<u32> = ConfigKey::new("limit");
const LABEL: ConfigKey<String> = ConfigKey::new("label");
const LIMIT_AS_TEXT: ConfigKey<String> = ConfigKey::new("limit");

#[test]
fn unset_key_reads_none() {
    let map = ConfigMap::new();

    assert_eq!(map.get(&LIMIT), None);
    assert!(!map.has(&LIMIT));
    assert!(map.is_empty());
}

#[test]
fn set_then_get() {
    let mut map = ConfigMap::new();
    map.set(&LIMIT, 10);
    map.set(&LABEL, "title".to_string());

    assert_eq!(map.get(&LIMIT), Some(&10));
    assert_eq!(map.get(&LABEL).map(String::as_str), Some("title"));
    assert_eq!(map.len(), 2);
}

#[test]
fn set_overwrites_silently() {
    let mut map = ConfigMap::new();
    map.set(&LIMIT, 10);
    map.set(&LIMIT, 20);

    assert_eq!(map.get(&LIMIT), Some(&20));
    assert_eq!(map.len(), 1);
}

#[test]
fn unset_removes_value() {
    let mut map = ConfigMap::new();
    map.set(&LIMIT, 10);

    assert!(map.unset(&LIMIT));
    assert!(!map.unset(&LIMIT));
    assert_eq!(map.get(&LIMIT), None);
}

#[test]
fn keys_keep_insertion_order() {
    let mut map = ConfigMap::new();
    map.set(&LABEL, String::new());
    map.set(&LIMIT, 1);

    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["label", "limit"]);
}

#[test]
fn try_get_reports_type_mismatch() {
    let mut map = ConfigMap::new();
    map.set(&LIMIT, 10);

    let err = map.try_get(&LIMIT_AS_TEXT).unwrap_err();

    assert_eq!(
        err,
        Error::TypeMismatch {
            key: "limit",
            requested: "alloc::string::String",
            stored: "u32",
        }
    );
}

#[test]
#[should_panic(expected = "config key `limit`")]
fn get_panics_on_type_mismatch() {
    let mut map = ConfigMap::new();
    map.set(&LIMIT, 10);

    let _ = map.get(&LIMIT_AS_TEXT);
}

#[test]
fn key_debug_shows_name() {
    assert_eq!(format!("{LIMIT:?}"), "ConfigKey(\"limit\")");
}

#[test]
fn field_config_is_its_own_map() {
    let mut fc = FieldConfig::new("title");
    fc.set(&LIMIT, 3);

    assert_eq!(fc.field(), "title");
    assert_eq!(fc.get(&LIMIT), Some(&3));
    assert!(fc.has(&LIMIT));
    assert!(!fc.has(&LABEL));
    assert_eq!(fc.values().len(), 1);
}
