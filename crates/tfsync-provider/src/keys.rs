use sha2::{Digest, Sha256};

/// Separator placed between items before hashing.
const SEPARATOR: &str = "|";

/// Compute a stable key for a set of strings.
///
/// The items are sorted (on a copy; the input is untouched), joined with
/// `|`, and hashed with SHA-256. The result is the lowercase hex digest, so
/// two sets with the same members produce the same key regardless of order.
pub fn key_from_strings<S: AsRef<str>>(items: &[S]) -> String {
    let mut sorted: Vec<&str> = items.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    let digest = Sha256::digest(sorted.join(SEPARATOR).as_bytes());
    hex::encode(digest)
}
