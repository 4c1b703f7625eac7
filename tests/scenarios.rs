//! End-to-end catalog scenarios
//!
//! Each test drives a small disk through a fixed sequence of create/delete
//! calls and checks the exact block placement.

use blocksim::{BlocksimError, Catalog, StrategyKind};

/// Occupied blocks must always equal the union of the table's records
fn assert_table_matches_disk(catalog: &Catalog) {
    let mut owned: Vec<usize> = catalog
        .allocation_table()
        .flat_map(|record| record.blocks.iter().copied())
        .collect();
    owned.sort_unstable();

    let occupied: Vec<usize> = catalog
        .disk_layout()
        .filter(|block| !block.is_free())
        .map(|block| block.index())
        .collect();

    assert_eq!(owned, occupied, "orphaned or unowned occupied blocks");

    for record in catalog.allocation_table() {
        for &index in &record.blocks {
            assert_eq!(
                catalog.disk_layout().nth(index).unwrap().owner(),
                Some(record.name.as_str())
            );
        }
    }
}

#[test]
fn contiguous_fills_disk_then_rejects() {
    let mut catalog = Catalog::new(5, StrategyKind::Contiguous);

    catalog.create_file("a", 3).unwrap();
    assert_eq!(catalog.file("a").unwrap().blocks, vec![0, 1, 2]);

    catalog.create_file("b", 2).unwrap();
    assert_eq!(catalog.file("b").unwrap().blocks, vec![3, 4]);

    let result = catalog.create_file("c", 1);
    assert!(matches!(
        result,
        Err(BlocksimError::InsufficientSpace {
            requested: 1,
            free: 0
        })
    ));
    assert_table_matches_disk(&catalog);
}

#[test]
fn contiguous_reuses_freed_run_in_full() {
    let mut catalog = Catalog::new(5, StrategyKind::Contiguous);

    catalog.create_file("a", 3).unwrap();
    assert_eq!(catalog.file("a").unwrap().blocks, vec![0, 1, 2]);

    catalog.delete_file("a").unwrap();
    catalog.create_file("b", 5).unwrap();
    assert_eq!(catalog.file("b").unwrap().blocks, vec![0, 1, 2, 3, 4]);
    assert_table_matches_disk(&catalog);
}

#[test]
fn linked_failure_on_full_disk_changes_nothing() {
    let mut catalog = Catalog::new(4, StrategyKind::Linked);

    catalog.create_file("a", 2).unwrap();
    assert_eq!(catalog.file("a").unwrap().blocks, vec![0, 1]);

    catalog.create_file("b", 2).unwrap();
    assert_eq!(catalog.file("b").unwrap().blocks, vec![2, 3]);

    let result = catalog.create_file("c", 1);
    assert!(matches!(
        result,
        Err(BlocksimError::InsufficientSpace {
            requested: 1,
            free: 0
        })
    ));
    // The failed call claimed nothing
    assert_eq!(catalog.free_blocks(), 0);
    assert_eq!(catalog.file_count(), 2);
    assert_table_matches_disk(&catalog);
}

#[test]
fn duplicate_create_is_rejected_without_mutation() {
    let mut catalog = Catalog::new(4, StrategyKind::Contiguous);

    catalog.create_file("a", 1).unwrap();
    let layout_before = catalog.render_disk_layout();

    let result = catalog.create_file("a", 1);
    assert_eq!(result, Err(BlocksimError::DuplicateName("a".to_string())));
    assert_eq!(catalog.render_disk_layout(), layout_before);
    assert_eq!(catalog.file_count(), 1);
}

#[test]
fn deleting_unknown_file_is_not_found() {
    let mut catalog = Catalog::new(4, StrategyKind::Linked);

    let result = catalog.delete_file("never-created");
    assert_eq!(
        result,
        Err(BlocksimError::NotFound("never-created".to_string()))
    );
    assert_eq!(catalog.free_blocks(), 4);
    assert_eq!(catalog.file_count(), 0);
}

#[test]
fn linked_chain_reuses_lowest_free_blocks_after_delete() {
    let mut catalog = Catalog::new(6, StrategyKind::Linked);

    catalog.create_file("a", 2).unwrap();
    catalog.create_file("b", 2).unwrap();
    catalog.delete_file("a").unwrap();

    // The new chain picks up the freed low indices before untouched space
    catalog.create_file("c", 3).unwrap();
    assert_eq!(catalog.file("c").unwrap().blocks, vec![0, 1, 4]);
    assert_table_matches_disk(&catalog);
}

#[test]
fn contiguous_skips_gap_too_small_for_request() {
    let mut catalog = Catalog::new(8, StrategyKind::Contiguous);

    catalog.create_file("a", 2).unwrap(); // 0-1
    catalog.create_file("b", 2).unwrap(); // 2-3
    catalog.delete_file("a").unwrap(); // gap of 2 at the front

    // A 3-block file cannot use the front gap and lands after b
    catalog.create_file("c", 3).unwrap();
    assert_eq!(catalog.file("c").unwrap().blocks, vec![4, 5, 6]);

    // A 2-block file then takes the front gap (earliest fit)
    catalog.create_file("d", 2).unwrap();
    assert_eq!(catalog.file("d").unwrap().blocks, vec![0, 1]);
    assert_table_matches_disk(&catalog);
}
