use replgraph::{Replica, ReplicaState};
use tempfile::TempDir;

use crate::helpers::*;

#[test]
fn test_save_and_load_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("replica.json");

    let mut replica = replica_from_adjacency(FAMILY_TREE);
    let tom = replica.graph().node("Tom").unwrap().clone();
    replica.remove_node(&tom, minutes(1));
    replica.remove_edge_pair("June", "Fliss", minutes(2));

    replica.state().save_to_file(&path).unwrap();
    let loaded = ReplicaState::load_from_file(&path).unwrap();

    assert_eq!(&loaded, replica.state());
    assert_eq!(Replica::from_state(loaded).graph(), replica.graph());
}

#[test]
fn test_loaded_state_merges_like_the_original() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("remote.json");

    let mut remote = seeded_replica();
    remote.add_node("four", minutes(1));
    remote.add_edge_pair("one", "four", minutes(1));
    remote.state().save_to_file(&path).unwrap();

    let mut direct = seeded_replica();
    direct.merge(remote.state());

    let mut via_file = seeded_replica();
    via_file.merge(&ReplicaState::load_from_file(&path).unwrap());

    assert_eq!(direct.state(), via_file.state());
}

#[test]
fn test_bare_state_json_loads() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bare.json");

    let state = seeded_replica().into_state();
    std::fs::write(&path, serde_json::to_string(&state).unwrap()).unwrap();

    let loaded = ReplicaState::load_from_file(&path).unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn test_missing_fields_load_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.json");
    std::fs::write(&path, "{}").unwrap();

    let loaded = ReplicaState::load_from_file(&path).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_unsupported_version_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("future.json");
    std::fs::write(&path, r#"{"_v": 3, "nodes_added": []}"#).unwrap();

    let err = ReplicaState::load_from_file(&path).unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_malformed_json_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ReplicaState::load_from_file(&path).unwrap_err();
    assert!(err.is_serialization_error());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ReplicaState::load_from_file(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.is_io_error());
    assert!(!err.is_not_found());
}
