//! End-to-End Tests
//!
//! Drives the facade crate the way the downstream mapping-to-constraint
//! assembly component would: a stream of parsed (contract, name→value)
//! tuples becomes builders, builders become descriptors, and descriptors
//! are compared and deduplicated by value.

use redecl::{
    Accessor, AttributeKind, AttributeValue, ContractType, Error, Marker, ProxyBuilder,
};
use std::collections::HashMap;
use std::sync::Arc;

fn size_contract() -> Arc<ContractType> {
    ContractType::constraint(
        "Size",
        vec![
            Accessor::new("min", AttributeKind::Int),
            Accessor::new("max", AttributeKind::Int),
        ],
    )
}

/// One parsed constraint occurrence, as the mapping parser hands it over
fn parsed_occurrence() -> HashMap<String, AttributeValue> {
    let mut values = HashMap::new();
    values.insert("min".to_string(), AttributeValue::Int(1));
    values.insert("max".to_string(), AttributeValue::Int(10));
    values.insert(
        "message".to_string(),
        AttributeValue::Str("must be sized".to_string()),
    );
    values.insert("groups".to_string(), AttributeValue::Array(vec![]));
    values.insert("payload".to_string(), AttributeValue::Array(vec![]));
    values
}

#[test]
fn test_mapping_stream_to_descriptors() {
    let contract = size_contract();

    // two occurrences of the same declaration in the mapping source
    let descriptors: Vec<_> = (0..2)
        .map(|_| {
            ProxyBuilder::with_values(contract.clone(), parsed_occurrence())
                .create()
                .unwrap()
        })
        .collect();

    // the validation engine may rely on value equality for deduplication
    assert_eq!(descriptors[0], descriptors[1]);
    assert_eq!(
        descriptors[0].content_hash(),
        descriptors[1].content_hash()
    );

    // and each answers its accessors independently
    for descriptor in &descriptors {
        assert_eq!(descriptor.get("min").unwrap().as_int(), Some(1));
        assert_eq!(descriptor.get("max").unwrap().as_int(), Some(10));
        assert_eq!(
            descriptor.message().unwrap().as_str(),
            Some("must be sized")
        );
    }
}

#[test]
fn test_incomplete_mapping_surfaces_at_accessor_time() {
    let contract = size_contract();
    let mut builder = ProxyBuilder::new(contract);
    builder.put_value("min", 1i64);
    // "max" never supplied: creation succeeds, the accessor fails
    let descriptor = builder.create().unwrap();
    assert_eq!(descriptor.get("min").unwrap().as_int(), Some(1));
    assert!(matches!(
        descriptor.get("max"),
        Err(Error::MissingAttribute { .. })
    ));
}

#[test]
fn test_descriptor_replication_round_trip() {
    let contract = size_contract();
    let original = ProxyBuilder::with_values(contract, parsed_occurrence())
        .create()
        .unwrap();

    let replica = ProxyBuilder::replicate(&original)
        .unwrap()
        .create()
        .unwrap();

    assert_eq!(replica, original);
    for accessor in original.contract_type().accessors() {
        assert_eq!(
            replica.get(accessor.name()).unwrap(),
            original.get(accessor.name()).unwrap()
        );
    }
}

#[test]
fn test_group_markers_pass_through_opaquely() {
    let contract = size_contract();
    let mut builder = ProxyBuilder::new(contract);
    builder.set_groups(vec![Marker::new("OnCreate"), Marker::new("OnUpdate")]);
    let descriptor = builder.create().unwrap();

    let groups = descriptor.groups().unwrap().as_array().unwrap();
    let names: Vec<&str> = groups
        .iter()
        .map(|g| g.as_marker().unwrap().name())
        .collect();
    assert_eq!(names, vec!["OnCreate", "OnUpdate"]);
}

#[test]
fn test_descriptor_survives_builder_drop() {
    let descriptor = {
        let mut builder = ProxyBuilder::new(size_contract());
        builder.put_value("min", 1i64);
        builder.create().unwrap()
    };
    assert_eq!(descriptor.get("min").unwrap().as_int(), Some(1));
}
