//! Directory search.

use super::DirectoryRecord;

/// Returns the records whose name or email contains `query`, ignoring ASCII
/// case.
///
/// The result borrows from `records` and keeps their relative order. An
/// empty query matches every record. Non-ASCII characters are compared
/// exactly.
///
/// Because `&T` is itself a [`DirectoryRecord`], the output can be fed back
/// in; filtering twice with the same query gives the same records.
///
/// # Example
///
/// ```
/// use studio_pro_core::directory::{DirectoryRecord, filter};
///
/// struct Contact(&'static str, &'static str);
///
/// impl DirectoryRecord for Contact {
///     fn name(&self) -> &str { self.0 }
///     fn email(&self) -> &str { self.1 }
/// }
///
/// let contacts = [
///     Contact("Jane Smith", "jane.smith@email.com"),
///     Contact("John Doe", "john.doe@email.com"),
/// ];
///
/// let found = filter(&contacts, "JANE");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name(), "Jane Smith");
/// ```
#[must_use]
pub fn filter<'a, R: DirectoryRecord>(records: &'a [R], query: &str) -> Vec<&'a R> {
    records.iter().filter(|record| matches(*record, query)).collect()
}

/// Whether a single record matches `query`. See [`filter`].
#[must_use]
pub fn matches<R: DirectoryRecord + ?Sized>(record: &R, query: &str) -> bool {
    contains_ignore_ascii_case(record.name(), query)
        || contains_ignore_ascii_case(record.email(), query)
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
