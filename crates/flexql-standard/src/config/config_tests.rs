use flexql_core::{Error, FieldConfig, QueryConfigHandler, Result};
use indexmap::IndexMap;

use super::keys::{BOOST, DEFAULT_OPERATOR, FIELD_BOOST_MAP};
use super::{FieldBoostMapListener, Operator, StandardQueryConfig};

#[test]
fn mapped_field_gets_boost() {
    let config = StandardQueryConfig::new().field_boost("title", 2.5).build();

    let title = config.get_field_config("title").unwrap();
    let body = config.get_field_config("body").unwrap();

    assert_eq!(title.get(&BOOST), Some(&2.5));
    assert_eq!(body.get(&BOOST), None);
    assert!(!body.has(&BOOST));
}

#[test]
fn listener_without_map_is_a_no_op() {
    let mut config = QueryConfigHandler::new();
    config.add_field_config_listener(FieldBoostMapListener);

    let title = config.get_field_config("title").unwrap();

    assert!(title.values().is_empty());
}

#[test]
fn listener_reads_current_map() {
    let mut config = StandardQueryConfig::new().field_boost("title", 2.5).build();
    assert_eq!(
        config.get_field_config("title").unwrap().get(&BOOST),
        Some(&2.5)
    );

    let mut boosts = IndexMap::new();
    boosts.insert("title".to_owned(), 4.0);
    config.set(&FIELD_BOOST_MAP, boosts);

    assert_eq!(
        config.get_field_config("title").unwrap().get(&BOOST),
        Some(&4.0)
    );
}

#[test]
fn later_listener_overrides_boost() {
    let mut config = StandardQueryConfig::new().field_boost("title", 2.5).build();
    config.add_field_config_listener(
        |fc: &mut FieldConfig, _: &QueryConfigHandler| -> Result<()> {
            if fc.has(&BOOST) {
                fc.set(&BOOST, 1.0);
            }
            Ok(())
        },
    );

    assert_eq!(
        config.get_field_config("title").unwrap().get(&BOOST),
        Some(&1.0)
    );
    assert_eq!(config.get_field_config("body").unwrap().get(&BOOST), None);
}

#[test]
fn builder_defaults() {
    let config = StandardQueryConfig::new().build();

    assert_eq!(config.get(&DEFAULT_OPERATOR), Some(&Operator::Or));
    assert_eq!(config.get(&FIELD_BOOST_MAP).map(IndexMap::len), Some(0));
    assert_eq!(config.listener_count(), 1);
}

#[test]
fn builder_collects_boosts() {
    let config = StandardQueryConfig::new()
        .default_operator(Operator::And)
        .field_boosts([("title", 2.0), ("body", 0.5)])
        .field_boost("title", 3.0)
        .build();

    let boosts = config.get(&FIELD_BOOST_MAP).unwrap();
    assert_eq!(config.get(&DEFAULT_OPERATOR), Some(&Operator::And));
    assert_eq!(
        boosts.iter().map(|(f, b)| (f.as_str(), *b)).collect::<Vec<_>>(),
        vec![("title", 3.0), ("body", 0.5)]
    );
}

#[test]
fn empty_registry_has_no_operator() {
    let config = QueryConfigHandler::new();

    assert_eq!(config.get(&DEFAULT_OPERATOR), None);
    assert_eq!(config.listener_count(), 0);
}

#[test]
fn boost_stored_with_wrong_type_is_reported() {
    let mut field_config = FieldConfig::new("title");
    field_config.set(&flexql_core::ConfigKey::<f64>::new("boost"), 2.0);

    let err = field_config.try_get(&BOOST).unwrap_err();

    assert_eq!(
        err,
        Error::TypeMismatch {
            key: "boost",
            requested: "f32",
            stored: "f64",
        }
    );
}

#[test]
fn operator_names() {
    assert_eq!(Operator::And.as_str(), "AND");
    assert_eq!(Operator::default(), Operator::Or);
}
