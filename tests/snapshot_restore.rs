use map2d::{
    core::store::{DualIndexStore, StoreError},
    snapshot::{CellRecord, SNAPSHOT_FORMAT_VERSION, TableSnapshotV1},
};

fn cell(row: &str, column: u16, value: f32) -> CellRecord<String, u16, f32> {
    CellRecord {
        row: row.to_string(),
        column,
        value,
    }
}

#[test]
fn export_restore_through_json() {
    let mut store = DualIndexStore::new();
    store.put("K1ABC".to_string(), 14u16, 0.5f32);
    store.put("K1ABC".to_string(), 21u16, 1.5f32);
    store.put("W9XYZ".to_string(), 14u16, 2.5f32);

    let snapshot = store.export_snapshot();
    assert_eq!(snapshot.format_version, SNAPSHOT_FORMAT_VERSION);
    assert_eq!(snapshot.len, 3);

    let json = serde_json::to_string(&snapshot).expect("encode snapshot");
    let decoded: TableSnapshotV1<String, u16, f32> =
        serde_json::from_str(&json).expect("decode snapshot");
    let restored = DualIndexStore::from_snapshot(decoded).expect("restore");

    assert_eq!(restored, store);
    assert_eq!(restored.column_view(&14).len(), 2);
}

#[test]
fn empty_snapshot_restores_empty_store() {
    let store: DualIndexStore<String, u16, f32> =
        DualIndexStore::from_snapshot(TableSnapshotV1::new(vec![])).expect("restore empty");
    assert!(store.is_empty());
}

#[test]
fn duplicate_pair_is_rejected() {
    let snapshot = TableSnapshotV1::new(vec![cell("A", 1, 1.0), cell("A", 1, 2.0)]);

    let err = DualIndexStore::from_snapshot(snapshot).expect_err("restore must fail");
    assert!(matches!(err, StoreError::InvalidArgument { name: "cells", .. }));
}

#[test]
fn count_mismatch_is_rejected() {
    let mut snapshot = TableSnapshotV1::new(vec![cell("A", 1, 1.0)]);
    snapshot.len = 2;

    let err = DualIndexStore::from_snapshot(snapshot).expect_err("restore must fail");
    assert!(matches!(err, StoreError::InvalidArgument { name: "len", .. }));
}

#[test]
fn unknown_format_version_is_rejected() {
    let mut snapshot = TableSnapshotV1::new(vec![cell("A", 1, 1.0)]);
    snapshot.format_version = SNAPSHOT_FORMAT_VERSION + 1;

    let err = DualIndexStore::from_snapshot(snapshot).expect_err("restore must fail");
    assert!(matches!(
        err,
        StoreError::InvalidArgument {
            name: "format_version",
            ..
        }
    ));
    assert!(err.to_string().contains("format_version"));
}
