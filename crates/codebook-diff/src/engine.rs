//! Snapshot reconciliation: compute the change table between two codebooks.
//!
//! The table is built as an insertion-ordered map realized as a row vector
//! plus an identifier-to-position index, so the output order is stable:
//! after-side entries first in snapshot order, then before-only entries.

use std::collections::HashMap;

use codebook_types::{ChangeState, CodeEntry};

use crate::table::{DiffRow, DiffTable};

/// Compare two codebook snapshots and produce the change table.
///
/// Every identifier appearing in either snapshot yields exactly one row.
/// After-side entries are inserted first, tagged [`ChangeState::New`]; the
/// before pass then re-tags entries present on both sides as `Unmodified`
/// (all fields equal) or `Updated` (any field differs, row keeps the
/// after-side value), and appends before-only entries as `Deleted`.
///
/// Identifiers are assumed unique within one snapshot. This is not
/// enforced: a duplicate id silently overwrites the earlier occurrence
/// during indexing, keeping the first occurrence's position.
pub fn diff(before: &[CodeEntry], after: &[CodeEntry]) -> DiffTable {
    let mut rows: Vec<DiffRow> = Vec::with_capacity(after.len() + before.len());
    let mut index: HashMap<i64, usize> = HashMap::with_capacity(after.len() + before.len());

    // First pass: every after-side entry starts as new.
    for entry in after {
        match index.get(&entry.id) {
            Some(&pos) => rows[pos] = DiffRow::new(entry.clone(), ChangeState::New),
            None => {
                index.insert(entry.id, rows.len());
                rows.push(DiffRow::new(entry.clone(), ChangeState::New));
            }
        }
    }

    // Second pass: before-side entries re-tag matching rows or append as
    // deleted. The presence check runs before the equality check.
    for entry in before {
        match index.get(&entry.id) {
            Some(&pos) => {
                let row = &mut rows[pos];
                row.state = if row.entry == *entry {
                    ChangeState::Unmodified
                } else {
                    ChangeState::Updated
                };
            }
            None => {
                index.insert(entry.id, rows.len());
                rows.push(DiffRow::new(entry.clone(), ChangeState::Deleted));
            }
        }
    }

    DiffTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, code: &str, name: &str) -> CodeEntry {
        CodeEntry::new(id, code, name)
    }

    #[test]
    fn identical_snapshots_all_unmodified() {
        let snapshot = vec![
            entry(1, "01.11", "Growing of cereals"),
            entry(2, "01.13", "Growing of vegetables"),
        ];

        let table = diff(&snapshot, &snapshot);
        assert_eq!(table.len(), 2);
        assert!(table
            .rows
            .iter()
            .all(|r| r.state == ChangeState::Unmodified));
    }

    #[test]
    fn empty_before_all_new() {
        let after = vec![entry(1, "A", "Alpha"), entry(2, "B", "Beta")];

        let table = diff(&[], &after);
        assert_eq!(table.len(), 2);
        assert!(table.rows.iter().all(|r| r.state == ChangeState::New));
    }

    #[test]
    fn empty_after_all_deleted() {
        let before = vec![entry(1, "A", "Alpha"), entry(2, "B", "Beta")];

        let table = diff(&before, &[]);
        assert_eq!(table.len(), 2);
        assert!(table.rows.iter().all(|r| r.state == ChangeState::Deleted));
    }

    #[test]
    fn both_empty_yields_empty_table() {
        let table = diff(&[], &[]);
        assert!(table.is_empty());
    }

    #[test]
    fn rename_is_an_update_carrying_the_after_value() {
        let before = vec![entry(1, "A", "Alpha")];
        let after = vec![entry(1, "A", "Alpha Renamed")];

        let table = diff(&before, &after);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.rows[0],
            DiffRow::new(entry(1, "A", "Alpha Renamed"), ChangeState::Updated)
        );
    }

    #[test]
    fn code_change_is_an_update() {
        let before = vec![entry(1, "01.11", "Growing of cereals")];
        let after = vec![entry(1, "01.11.1", "Growing of cereals")];

        let table = diff(&before, &after);
        assert_eq!(table.rows[0].state, ChangeState::Updated);
        assert_eq!(table.rows[0].entry.code, "01.11.1");
    }

    #[test]
    fn mixed_changes_in_table_order() {
        let before = vec![entry(1, "A", "Alpha"), entry(2, "B", "Beta")];
        let after = vec![entry(2, "B", "Beta"), entry(3, "C", "Gamma")];

        let table = diff(&before, &after);
        assert_eq!(table.len(), 3);

        // After-side order first (2, 3), then before-only (1).
        assert_eq!(table.rows[0].entry.id, 2);
        assert_eq!(table.rows[0].state, ChangeState::Unmodified);
        assert_eq!(table.rows[1].entry.id, 3);
        assert_eq!(table.rows[1].state, ChangeState::New);
        assert_eq!(table.rows[2].entry.id, 1);
        assert_eq!(table.rows[2].state, ChangeState::Deleted);
    }

    #[test]
    fn ordering_follows_snapshot_order_not_id_order() {
        let before = vec![entry(9, "I", "Iota"), entry(4, "D", "Delta")];
        let after = vec![entry(7, "G", "Eta"), entry(2, "B", "Beta")];

        let table = diff(&before, &after);
        let ids: Vec<i64> = table.rows.iter().map(|r| r.entry.id).collect();
        assert_eq!(ids, vec![7, 2, 9, 4]);
    }

    #[test]
    fn deleted_rows_carry_the_before_value() {
        let before = vec![entry(5, "E", "Epsilon")];

        let table = diff(&before, &[]);
        assert_eq!(
            table.rows[0],
            DiffRow::new(entry(5, "E", "Epsilon"), ChangeState::Deleted)
        );
    }

    #[test]
    fn all_four_states_in_one_table() {
        let before = vec![
            entry(1, "A", "Alpha"),
            entry(2, "B", "Beta"),
            entry(4, "D", "Delta"),
        ];
        let after = vec![
            entry(1, "A", "Alpha"),
            entry(2, "B", "Beta Revised"),
            entry(3, "C", "Gamma"),
        ];

        let table = diff(&before, &after);
        assert_eq!(table.len(), 4);
        assert_eq!(table.unchanged(), 1);
        assert_eq!(table.updates(), 1);
        assert_eq!(table.additions(), 1);
        assert_eq!(table.deletions(), 1);
    }

    #[test]
    fn duplicate_id_keeps_first_position_and_last_value() {
        let after = vec![
            entry(1, "A", "First"),
            entry(2, "B", "Beta"),
            entry(1, "A", "Second"),
        ];

        let table = diff(&[], &after);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].entry.id, 1);
        assert_eq!(table.rows[0].entry.name, "Second");
        assert_eq!(table.rows[1].entry.id, 2);
    }
}
