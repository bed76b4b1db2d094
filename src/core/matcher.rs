use crate::core::normalize::{normalize_date, normalize_text};
use crate::domain::model::{CallRow, MatchQuery};

/// Column positions of the fields of interest within a sheet row.
#[derive(Debug, Clone, Copy)]
pub struct FieldLayout {
    pub name: usize,
    pub date: usize,
    pub time: usize,
    pub audio_link: usize,
}

impl Default for FieldLayout {
    // Column order of the production report sheet (A:G).
    fn default() -> Self {
        Self {
            name: 2,
            date: 5,
            time: 6,
            audio_link: 1,
        }
    }
}

/// Scans `rows` in order for the first row whose normalized name field
/// contains the normalized target name and whose normalized date field
/// equals the normalized target date. The first row is assumed to be a
/// header and is always skipped.
///
/// A query whose name or date normalizes to the empty string is rejected
/// up front: an empty needle would satisfy the substring check against
/// every row, so the scan returns no match instead.
///
/// `None` is a domain outcome (no such call), not a failure; transport
/// errors surface from the row source before this function runs.
pub fn find_match<'a>(
    rows: &'a [CallRow],
    query: &MatchQuery,
    layout: &FieldLayout,
) -> Option<&'a CallRow> {
    let target_name = normalize_text(&query.name);
    let target_date = normalize_date(&query.date);

    if target_name.is_empty() || target_date.is_empty() {
        return None;
    }

    rows.iter().skip(1).find(|row| {
        normalize_text(row.cell(layout.name)).contains(&target_name)
            && normalize_date(row.cell(layout.date)) == target_date
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<CallRow> {
        vec![
            CallRow::from(vec![
                "id", "link", "atendente", "cliente", "fila", "data", "hora",
            ]),
            CallRow::from(vec!["x", "url1", "Maria Silva", "x", "x", "2024-03-05", "10:00"]),
            CallRow::from(vec!["y", "url2", "João Souza", "y", "y", "05/03/2024", "11:30"]),
            CallRow::from(vec!["z", "url3", "Maria Silva", "z", "z", "2024-03-06", "09:15"]),
        ]
    }

    fn query(name: &str, date: &str) -> MatchQuery {
        MatchQuery {
            name: name.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_partial_name_and_slash_date_match() {
        let rows = sample_rows();
        let hit = find_match(&rows, &query("Maria", "05/03/2024"), &FieldLayout::default())
            .expect("should match the first Maria row");

        assert_eq!(hit.cell(2), "Maria Silva");
        assert_eq!(hit.cell(6), "10:00");
        assert_eq!(hit.cell(1), "url1");
    }

    #[test]
    fn test_accent_insensitive_match_on_row_side() {
        let rows = sample_rows();
        let hit = find_match(&rows, &query("joao", "2024-03-05"), &FieldLayout::default())
            .expect("accent-folded name should match");
        assert_eq!(hit.cell(1), "url2");
    }

    #[test]
    fn test_no_match_returns_none() {
        let rows = sample_rows();
        assert!(find_match(&rows, &query("Pedro", "05/03/2024"), &FieldLayout::default()).is_none());
    }

    #[test]
    fn test_date_must_equal_exactly() {
        let rows = sample_rows();
        // Name matches row 3 as well, but its date differs.
        let hit = find_match(&rows, &query("Maria", "06/03/2024"), &FieldLayout::default())
            .expect("should match the 2024-03-06 row");
        assert_eq!(hit.cell(1), "url3");
    }

    #[test]
    fn test_first_match_wins() {
        let mut rows = sample_rows();
        rows.push(CallRow::from(vec![
            "w", "url4", "Maria Silva", "w", "w", "2024-03-05", "16:00",
        ]));
        let hit =
            find_match(&rows, &query("Maria Silva", "2024-03-05"), &FieldLayout::default())
                .expect("should match");
        assert_eq!(hit.cell(1), "url1");
    }

    #[test]
    fn test_header_row_is_skipped() {
        let rows = vec![
            CallRow::from(vec!["x", "url0", "Maria Silva", "x", "x", "2024-03-05", "08:00"]),
        ];
        // The only row is treated as the header, so nothing can match.
        assert!(
            find_match(&rows, &query("Maria", "2024-03-05"), &FieldLayout::default()).is_none()
        );
    }

    #[test]
    fn test_empty_normalized_name_is_rejected() {
        // A blank name folds to "" and would otherwise match every row via
        // the contains-empty-string rule; the scan refuses it instead.
        let rows = sample_rows();
        assert!(find_match(&rows, &query("   ", "05/03/2024"), &FieldLayout::default()).is_none());
        assert!(find_match(&rows, &query("Maria", "   "), &FieldLayout::default()).is_none());
    }

    #[test]
    fn test_ragged_rows_do_not_panic() {
        let rows = vec![
            CallRow::from(vec!["header"]),
            CallRow::from(vec!["x", "url1"]),
            CallRow::from(vec!["y", "url2", "Maria Silva", "y", "y", "2024-03-05"]),
        ];
        // Missing time cell still matches; the display layer fills the default.
        let hit = find_match(&rows, &query("Maria", "2024-03-05"), &FieldLayout::default())
            .expect("row without time cell should still match");
        assert_eq!(hit.cell(1), "url2");
        assert_eq!(hit.cell(6), "");
    }
}
