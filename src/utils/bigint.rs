//! Big-integer helpers.
//!
//! Token ids and amounts are unbounded, so they are carried as
//! [`num_bigint::BigInt`] rather than machine integers.

use num_bigint::BigInt;

/// Parse a base-10 string into a [`BigInt`]
///
/// Accepts an optional leading `-` or `+` followed by one or more ASCII
/// digits. Leading zeros are allowed. Anything else (empty input, whitespace,
/// `_` separators, other characters) yields `None`.
///
/// # Examples
/// ```
/// use vulcan_one::utils::bigint::str_to_big_int;
///
/// assert_eq!(str_to_big_int("-0042").unwrap().to_string(), "-42");
/// assert!(str_to_big_int("not_a_number").is_none());
/// ```
pub fn str_to_big_int(s: &str) -> Option<BigInt> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    BigInt::parse_bytes(s.as_bytes(), 10)
}

/// Count, for each group, the elements equal to the group's first element
///
/// The first element counts itself, so any non-empty group has a count of at
/// least one. An empty group has no first element and counts as zero.
///
/// # Examples
/// ```
/// use num_bigint::BigInt;
/// use vulcan_one::utils::bigint::count_elements;
///
/// let groups = vec![
///     vec![BigInt::from(921), BigInt::from(955), BigInt::from(921)],
///     vec![BigInt::from(900)],
/// ];
/// assert_eq!(count_elements(&groups), vec![BigInt::from(2), BigInt::from(1)]);
/// ```
pub fn count_elements(groups: &[Vec<BigInt>]) -> Vec<BigInt> {
    groups
        .iter()
        .map(|group| match group.first() {
            Some(first) => BigInt::from(group.iter().filter(|v| *v == first).count()),
            None => BigInt::from(0u8),
        })
        .collect()
}
