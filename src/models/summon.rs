use serde::Serialize;
use sqlx::FromRow;

/// One outstanding, uncleared request from a specific table
///
/// Identity is the composite key (magician_id, table_number); repeated
/// scans of the same table coalesce into this row with a refreshed
/// `last_requested_at` instead of creating duplicates.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SummonEntry {
    #[serde(rename = "tableNumber")]
    pub table_number: i64,
    /// When this table last asked for the magician (Unix epoch millis)
    #[serde(rename = "lastRequestedAt")]
    pub last_requested_at: i64,
}

impl SummonEntry {
    /// Validate that a table number is within the venue's capacity
    /// (1-based, inclusive). Checked before any store access.
    pub fn is_valid_table(table_number: i64, capacity: u32) -> bool {
        table_number >= 1 && table_number <= i64::from(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_table() {
        assert!(SummonEntry::is_valid_table(1, 40));
        assert!(SummonEntry::is_valid_table(40, 40));
        assert!(SummonEntry::is_valid_table(17, 40));

        // Zero and negatives are never valid
        assert!(!SummonEntry::is_valid_table(0, 40));
        assert!(!SummonEntry::is_valid_table(-3, 40));

        // One past capacity
        assert!(!SummonEntry::is_valid_table(41, 40));

        // Larger deployments accept larger numbers
        assert!(SummonEntry::is_valid_table(50, 50));
        assert!(!SummonEntry::is_valid_table(51, 50));
    }
}
