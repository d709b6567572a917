//! Replication Integration Tests
//!
//! Tests seeding a builder from an existing contract-conformant instance:
//! the full round trip through a produced proxy, replication of
//! hand-written instances, the elevated-access fallback, and the fault
//! paths that surface as replication errors.

use redecl_core::{
    Accessor, AccessorFault, AttributeKind, AttributeValue, ContractInstance, ContractType, Error,
    Marker,
};
use redecl_proxy::ProxyBuilder;
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

/// Hand-written conformant instance, the "natively declared" case
struct NativeSize {
    contract: Arc<ContractType>,
}

impl ContractInstance for NativeSize {
    fn contract_type(&self) -> &Arc<ContractType> {
        &self.contract
    }

    fn read_attribute(&self, accessor: &str) -> Result<AttributeValue, AccessorFault> {
        match accessor {
            "min" => Ok(AttributeValue::Int(2)),
            "max" => Ok(AttributeValue::Int(8)),
            "message" => Ok(AttributeValue::Str("out of range".to_string())),
            "groups" => Ok(vec![Marker::new("Default")].into()),
            "payload" => Ok(AttributeValue::Array(vec![])),
            other => Err(AccessorFault::Invocation(format!("unknown: {other}"))),
        }
    }
}

/// Instance that denies plain reads on one accessor but honors elevation
struct Guarded {
    contract: Arc<ContractType>,
}

impl ContractInstance for Guarded {
    fn contract_type(&self) -> &Arc<ContractType> {
        &self.contract
    }

    fn read_attribute(&self, accessor: &str) -> Result<AttributeValue, AccessorFault> {
        match accessor {
            "max" => Err(AccessorFault::Denied),
            _ => self.read_attribute_elevated(accessor),
        }
    }

    fn read_attribute_elevated(&self, accessor: &str) -> Result<AttributeValue, AccessorFault> {
        match accessor {
            "min" => Ok(AttributeValue::Int(0)),
            "max" => Ok(AttributeValue::Int(100)),
            "message" => Ok(AttributeValue::Str("guarded".to_string())),
            "groups" | "payload" => Ok(AttributeValue::Array(vec![])),
            other => Err(AccessorFault::Invocation(format!("unknown: {other}"))),
        }
    }
}

/// Instance that stays inaccessible even under elevation
struct Locked {
    contract: Arc<ContractType>,
}

impl ContractInstance for Locked {
    fn contract_type(&self) -> &Arc<ContractType> {
        &self.contract
    }

    fn read_attribute(&self, _accessor: &str) -> Result<AttributeValue, AccessorFault> {
        Err(AccessorFault::Denied)
    }
}

#[test]
fn test_round_trip_through_a_produced_proxy() {
    let contract = size_contract();
    let mut builder = ProxyBuilder::new(contract);
    builder.put_value("min", 1i64);
    builder.put_value("max", 10i64);
    builder.set_message("must be sized");
    builder.set_groups(vec![Marker::new("Default")]);
    builder.set_payload(vec![]);
    let original = builder.create().unwrap();

    let replica = ProxyBuilder::replicate(&original).unwrap().create().unwrap();

    assert_eq!(replica, original);
    for accessor in original.contract_type().accessors() {
        assert_eq!(
            replica.get(accessor.name()).unwrap(),
            original.get(accessor.name()).unwrap(),
            "accessor {}",
            accessor.name()
        );
    }
}

#[test]
fn test_replicate_native_instance() {
    let native = NativeSize {
        contract: size_contract(),
    };
    let builder = ProxyBuilder::replicate(&native).unwrap();

    // every declared accessor was read and stored
    assert_eq!(builder.len(), native.contract_type().accessors().len());
    assert_eq!(builder.value("min"), Some(&AttributeValue::Int(2)));
    assert_eq!(builder.value("max"), Some(&AttributeValue::Int(8)));

    let proxy = builder.create().unwrap();
    assert_eq!(
        proxy.get("message").unwrap().as_str(),
        Some("out of range")
    );
    let groups = proxy.get("groups").unwrap().as_array().unwrap();
    assert_eq!(groups[0].as_marker().unwrap().name(), "Default");
}

#[test]
fn test_replicated_builder_infers_the_contract() {
    let native = NativeSize {
        contract: size_contract(),
    };
    let builder = ProxyBuilder::replicate(&native).unwrap();
    assert_eq!(
        builder.contract_type().id(),
        native.contract_type().id()
    );
}

#[test]
fn test_denied_read_falls_back_to_elevated() {
    let guarded = Guarded {
        contract: size_contract(),
    };
    let builder = ProxyBuilder::replicate(&guarded).unwrap();
    assert_eq!(builder.value("max"), Some(&AttributeValue::Int(100)));
}

#[test]
fn test_denied_even_elevated_is_a_replication_error() {
    let locked = Locked {
        contract: size_contract(),
    };
    match ProxyBuilder::replicate(&locked) {
        Err(Error::Replication {
            instance,
            accessor,
            fault,
        }) => {
            assert_eq!(instance, "@Size");
            assert!(!accessor.is_empty());
            assert_eq!(fault, AccessorFault::Denied);
        }
        other => panic!("expected Replication, got {other:?}"),
    }
}

#[test]
fn test_invocation_fault_names_the_accessor() {
    struct Flaky {
        contract: Arc<ContractType>,
    }
    impl ContractInstance for Flaky {
        fn contract_type(&self) -> &Arc<ContractType> {
            &self.contract
        }
        fn read_attribute(&self, accessor: &str) -> Result<AttributeValue, AccessorFault> {
            match accessor {
                "max" => Err(AccessorFault::Invocation("backing store gone".to_string())),
                _ => Ok(AttributeValue::Int(0)),
            }
        }
    }

    let flaky = Flaky {
        contract: ContractType::new(
            "Max",
            vec![
                Accessor::new("other", AttributeKind::Int),
                Accessor::new("max", AttributeKind::Int),
            ],
        ),
    };
    match ProxyBuilder::replicate(&flaky) {
        Err(Error::Replication { accessor, fault, .. }) => {
            assert_eq!(accessor, "max");
            assert!(matches!(fault, AccessorFault::Invocation(_)));
        }
        other => panic!("expected Replication, got {other:?}"),
    }
}

#[test]
fn test_invalid_arguments_fault_surfaces_unchanged() {
    struct Hostile {
        contract: Arc<ContractType>,
    }
    impl ContractInstance for Hostile {
        fn contract_type(&self) -> &Arc<ContractType> {
            &self.contract
        }
        fn read_attribute(&self, _accessor: &str) -> Result<AttributeValue, AccessorFault> {
            Err(AccessorFault::InvalidArguments)
        }
    }

    let hostile = Hostile {
        contract: ContractType::new("Odd", vec![Accessor::new("value", AttributeKind::Int)]),
    };
    match ProxyBuilder::replicate(&hostile) {
        Err(Error::Replication { fault, .. }) => {
            assert_eq!(fault, AccessorFault::InvalidArguments)
        }
        other => panic!("expected Replication, got {other:?}"),
    }
}

#[test]
fn test_replica_is_independent_of_the_original_builder() {
    let contract = size_contract();
    let mut builder = ProxyBuilder::new(contract);
    builder.put_value("min", 1i64);
    builder.put_value("max", 10i64);
    builder.set_message("m");
    builder.set_groups(vec![]);
    builder.set_payload(vec![]);
    let original = builder.create().unwrap();

    let mut replica_builder = ProxyBuilder::replicate(&original).unwrap();
    replica_builder.put_value("max", 42i64);
    let replica = replica_builder.create().unwrap();

    assert_eq!(original.get("max").unwrap().as_int(), Some(10));
    assert_eq!(replica.get("max").unwrap().as_int(), Some(42));
    assert_ne!(replica, original);
}
