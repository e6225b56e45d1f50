use crate::PharmacyRecord;

/// Positions of records whose address contains `query`, in feed order.
///
/// Plain byte-wise substring match: no trimming, no case folding. The empty
/// query matches every record.
pub fn matching_indices(records: &[PharmacyRecord], query: &str) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.address.contains(query))
        .map(|(idx, _)| idx)
        .collect()
}
