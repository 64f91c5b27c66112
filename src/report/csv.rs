//! Serializes ledger entries as CSV.

use crate::{models::LedgerEntry, Error};

/// Serialize `entries` as CSV with a header row of the entry field names.
///
/// # Errors
///
/// This function will return an [Error::CsvSerializationError] if a record
/// could not be written.
pub fn entries_to_csv(entries: &[LedgerEntry]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["id", "user_id", "amount", "category", "type", "date"])
        .map_err(csv_error)?;

    for entry in entries {
        writer
            .write_record([
                entry.id.to_string(),
                entry.user_id.to_string(),
                entry.amount.to_string(),
                entry.category.clone(),
                entry.kind.to_string(),
                entry.date.to_string(),
            ])
            .map_err(csv_error)?;
    }

    writer
        .into_inner()
        .map_err(|error| Error::CsvSerializationError(error.to_string()))
}

fn csv_error(error: csv::Error) -> Error {
    Error::CsvSerializationError(error.to_string())
}

#[cfg(test)]
mod csv_tests {
    use rust_decimal_macros::dec;

    use crate::models::{EntryKind, LedgerEntry, UserID};

    use super::entries_to_csv;

    fn test_entries() -> Vec<LedgerEntry> {
        vec![
            LedgerEntry {
                id: 1,
                user_id: UserID::new(7),
                amount: dec!(50.00),
                category: "food".to_owned(),
                kind: EntryKind::Expense,
                date: "2024-03-05".parse().unwrap(),
            },
            LedgerEntry {
                id: 2,
                user_id: UserID::new(7),
                amount: dec!(1000.00),
                category: "salary".to_owned(),
                kind: EntryKind::Income,
                date: "2024-03-01".parse().unwrap(),
            },
        ]
    }

    #[test]
    fn csv_starts_with_field_name_header() {
        let bytes = entries_to_csv(&test_entries()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("id,user_id,amount,category,type,date\n"));
    }

    #[test]
    fn csv_has_one_record_per_entry() {
        let bytes = entries_to_csv(&test_entries()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,7,50.00,food,expense,2024-03-05");
        assert_eq!(lines[2], "2,7,1000.00,salary,income,2024-03-01");
    }

    #[test]
    fn csv_of_no_entries_is_only_the_header() {
        let bytes = entries_to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn csv_quotes_categories_containing_commas() {
        let mut entries = test_entries();
        entries[0].category = "eating, out".to_owned();

        let bytes = entries_to_csv(&entries).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.contains("\"eating, out\""));
    }
}
