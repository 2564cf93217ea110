//! ERC1155 composite token-id validation.
//!
//! A composite token-id lists one or more `(id, amount)` pairs joined by `&`.
//! Each pair is written `<id>_<amount>` or `<id>-<amount>`, and one string
//! must use the same separator for every pair:
//!
//! - `955_921` and `955-921` are valid
//! - `955_921&1_2` is valid
//! - `955_921&1-2` mixes separators and is rejected

use crate::utils::bigint::str_to_big_int;
use num_bigint::BigInt;
use regex::Regex;
use std::sync::LazyLock;

const ERC1155_PATTERN: &str = r"^[0-9]+_[0-9]+(&[0-9]+_[0-9]+)*$|^[0-9]+-[0-9]+(&[0-9]+-[0-9]+)*$";

/// Compiled once; `None` if the pattern failed to compile, in which case
/// nothing validates.
static ERC1155_FORMAT: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(ERC1155_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Invalid ERC1155 token-id pattern: {}", e);
        None
    }
});

/// One `(id, amount)` pair of a composite token-id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAmount {
    pub id: BigInt,
    pub amount: BigInt,
}

/// Check that the token-id pattern compiled
///
/// Binaries call this at startup so a broken pattern stops the process instead
/// of silently rejecting every token-id.
pub fn erc1155_pattern_ready() -> bool {
    ERC1155_FORMAT.is_some()
}

/// Validate a composite ERC1155 token-id
///
/// # Examples
/// ```
/// use vulcan_one::utils::validation::is_valid_erc1155_format;
///
/// assert!(is_valid_erc1155_format("955_921&1_2"));
/// assert!(!is_valid_erc1155_format("955_921&1-2"));
/// ```
pub fn is_valid_erc1155_format(s: &str) -> bool {
    match ERC1155_FORMAT.as_ref() {
        Some(re) => re.is_match(s),
        None => false,
    }
}

/// Split a composite token-id into its `(id, amount)` pairs
///
/// Returns `None` for any string [`is_valid_erc1155_format`] rejects.
pub fn split_erc1155_ids(s: &str) -> Option<Vec<TokenAmount>> {
    if !is_valid_erc1155_format(s) {
        return None;
    }

    let separator = if s.contains('_') { '_' } else { '-' };

    s.split('&')
        .map(|pair| {
            let (id, amount) = pair.split_once(separator)?;
            Some(TokenAmount {
                id: str_to_big_int(id)?,
                amount: str_to_big_int(amount)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_compiles() {
        assert!(erc1155_pattern_ready());
    }

    #[test]
    fn test_valid_formats() {
        assert!(is_valid_erc1155_format("955_921"));
        assert!(is_valid_erc1155_format("955-921"));
        assert!(is_valid_erc1155_format("955_921&1_2"));
        assert!(is_valid_erc1155_format("955-921&1-2&0-0"));
        assert!(is_valid_erc1155_format("007_1"));
    }

    #[test]
    fn test_invalid_formats() {
        for input in [
            "",
            "955_921&1-2",
            "955-921&1_2",
            "abc_1",
            "955",
            "955_",
            "_921",
            "955_921&",
            "&955_921",
            "955_921&&1_2",
            "955__921",
            "955_921_3",
            " 955_921",
            "955_921\n",
            "-1_2",
            "955_921 &1_2",
        ] {
            assert!(!is_valid_erc1155_format(input), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits
        assert!(!is_valid_erc1155_format("\u{0661}\u{0662}_3"));
    }

    #[test]
    fn test_split_pairs() {
        let pairs = split_erc1155_ids("955_921&1_2").unwrap();
        assert_eq!(
            pairs,
            vec![
                TokenAmount { id: BigInt::from(955), amount: BigInt::from(921) },
                TokenAmount { id: BigInt::from(1), amount: BigInt::from(2) },
            ]
        );

        let pairs = split_erc1155_ids("10-3").unwrap();
        assert_eq!(pairs, vec![TokenAmount { id: BigInt::from(10), amount: BigInt::from(3) }]);
    }

    #[test]
    fn test_split_large_ids() {
        let id = "340282366920938463463374607431768211457";
        let pairs = split_erc1155_ids(&format!("{}_1", id)).unwrap();
        assert_eq!(pairs[0].id.to_string(), id);
    }

    #[test]
    fn test_split_rejects_invalid() {
        assert!(split_erc1155_ids("955_921&1-2").is_none());
        assert!(split_erc1155_ids("").is_none());
    }
}
