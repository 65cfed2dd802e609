use sha2::Digest;

/// Derive a stable row identifier from a source id and 1-based record number.
///
/// Deterministic: sha256("<source_id>\0<record_number>"), first 16 bytes,
/// hex-encoded. The same input file yields the same ids on every run, so
/// report entries from independent runs are comparable.
pub fn derive_row_id(source_id: &str, record_number: u64) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(record_number.to_string().as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    hex::encode(&digest[..16])
}
