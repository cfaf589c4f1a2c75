use std::collections::BTreeMap;

use proptest::prelude::*;

use map2d::{core::store::DualIndexStore, table::Table2d};

type Store = DualIndexStore<u8, u8, u16>;

#[derive(Debug, Clone)]
enum Action {
    Put { row: u8, column: u8, value: u16 },
    Remove { row: u8, column: u8 },
    PutRow { row: u8, cells: Vec<(u8, u16)> },
    Clear,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        6 => (0u8..12, 0u8..12, any::<u16>())
            .prop_map(|(row, column, value)| Action::Put { row, column, value }),
        4 => (0u8..12, 0u8..12).prop_map(|(row, column)| Action::Remove { row, column }),
        1 => (0u8..12, prop::collection::vec((0u8..12, any::<u16>()), 0..6))
            .prop_map(|(row, cells)| Action::PutRow { row, cells }),
        1 => Just(Action::Clear),
    ]
}

fn assert_consistent(store: &Store, model: &BTreeMap<(u8, u8), u16>) -> Result<(), TestCaseError> {
    prop_assert_eq!(store.len(), model.len());
    prop_assert_eq!(store.is_empty(), model.is_empty());

    let rows = store.row_map_view();
    let columns = store.column_map_view();

    for (row, cells) in &rows {
        prop_assert!(!cells.is_empty(), "row {} kept an empty map", row);
        prop_assert!(store.contains_row(row));
        for (column, value) in cells {
            prop_assert_eq!(columns.get(column).and_then(|c| c.get(row)), Some(value));
            prop_assert_eq!(model.get(&(*row, *column)), Some(value));
        }
    }
    for (column, cells) in &columns {
        prop_assert!(!cells.is_empty(), "column {} kept an empty map", column);
        prop_assert!(store.contains_column(column));
    }

    let row_total: usize = rows.values().map(|cells| cells.len()).sum();
    let column_total: usize = columns.values().map(|cells| cells.len()).sum();
    prop_assert_eq!(row_total, model.len());
    prop_assert_eq!(column_total, model.len());

    for ((row, column), value) in model {
        prop_assert_eq!(store.get(row, column), Some(value));
        prop_assert!(store.contains_key(row, column));
    }
    Ok(())
}

proptest! {
    #[test]
    fn random_sequences_keep_indexes_mirrored(actions in prop::collection::vec(action_strategy(), 1..200)) {
        let mut store = Store::new();
        let mut model = BTreeMap::new();

        for action in actions {
            match action {
                Action::Put { row, column, value } => {
                    let before = store.len();
                    let previous = store.put(row, column, value);
                    prop_assert_eq!(previous, model.insert((row, column), value));
                    let grew = usize::from(previous.is_none());
                    prop_assert_eq!(store.len(), before + grew);
                }
                Action::Remove { row, column } => {
                    let before = store.len();
                    let removed = store.remove(&row, &column);
                    prop_assert_eq!(removed, model.remove(&(row, column)));
                    let shrank = usize::from(removed.is_some());
                    prop_assert_eq!(store.len(), before - shrank);
                    prop_assert_eq!(store.remove(&row, &column), None);
                    prop_assert_eq!(store.len(), before - shrank);
                }
                Action::PutRow { row, cells } => {
                    store.put_all_to_row(cells.clone(), row);
                    for (column, value) in cells {
                        model.insert((row, column), value);
                    }
                }
                Action::Clear => {
                    store.clear();
                    model.clear();
                }
            }

            assert_consistent(&store, &model)?;
        }

        let restored = Store::from_snapshot(store.export_snapshot())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(&restored, &store);
    }

    #[test]
    fn views_taken_earlier_never_change(
        seed in prop::collection::vec((0u8..6, 0u8..6, any::<u16>()), 1..40),
        writes in prop::collection::vec((0u8..6, 0u8..6, any::<u16>()), 1..40),
    ) {
        let mut store: Store = seed.into_iter().collect();
        let row_before = store.row_view(&0);
        let column_before = store.column_view(&0);
        let rows_before = store.row_map_view();
        let expected_row = row_before.clone();
        let expected_column = column_before.clone();
        let expected_rows = rows_before.clone();

        for (row, column, value) in writes {
            if value % 3 == 0 {
                store.remove(&row, &column);
            } else {
                store.put(row, column, value);
            }
        }

        prop_assert_eq!(row_before, expected_row);
        prop_assert_eq!(column_before, expected_column);
        prop_assert_eq!(rows_before, expected_rows);
    }
}
