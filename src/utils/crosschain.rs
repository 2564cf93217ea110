//! Cross-chain collection lookup.
//!
//! A collection can be deployed on several networks under different contract
//! addresses. Collections are described as
//! `collection-id -> network -> contract-address`.

use std::collections::HashMap;

/// Contract address of one collection per network name
pub type NetworkContractMap = HashMap<String, String>;

/// Deployment addresses of every collection, keyed by collection id
pub type CrossChainCollections = HashMap<String, NetworkContractMap>;

/// Find the collections deployed at `contract` on `network`
///
/// Every matching entry is returned with its full network map. Collections
/// without a deployment on `network` never match. Addresses are compared as
/// exact strings.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use vulcan_one::utils::crosschain::get_crosschain_data;
///
/// let mut collections = HashMap::new();
/// collections.insert(
///     "1".to_string(),
///     HashMap::from([("eth".to_string(), "0x1".to_string())]),
/// );
///
/// assert_eq!(get_crosschain_data("eth", "0x1", &collections).len(), 1);
/// assert!(get_crosschain_data("arb", "0x1", &collections).is_empty());
/// ```
pub fn get_crosschain_data(
    network: &str,
    contract: &str,
    collections: &CrossChainCollections,
) -> CrossChainCollections {
    let matches: CrossChainCollections = collections
        .iter()
        .filter(|(_, deployments)| deployments.get(network).is_some_and(|addr| addr == contract))
        .map(|(id, deployments)| (id.clone(), deployments.clone()))
        .collect();

    log::debug!(
        "Cross-chain lookup for {} on {}: {} of {} collection(s) matched",
        contract,
        network,
        matches.len(),
        collections.len()
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_map(entries: &[(&str, &str)]) -> NetworkContractMap {
        entries
            .iter()
            .map(|(network, addr)| (network.to_string(), addr.to_string()))
            .collect()
    }

    fn collections() -> CrossChainCollections {
        HashMap::from([
            (
                "1".to_string(),
                network_map(&[("arb", "0x3"), ("eth", "0x1"), ("trn", "0x2"), ("none", "0x8")]),
            ),
            (
                "2".to_string(),
                network_map(&[("eth", "0x4"), ("frame", "0x6"), ("trn", "0x5")]),
            ),
        ])
    }

    #[test]
    fn test_matching_network_and_contract() {
        let expected = HashMap::from([(
            "1".to_string(),
            network_map(&[("arb", "0x3"), ("eth", "0x1"), ("trn", "0x2"), ("none", "0x8")]),
        )]);

        assert_eq!(get_crosschain_data("eth", "0x1", &collections()), expected);
        assert_eq!(get_crosschain_data("trn", "0x2", &collections()), expected);
    }

    #[test]
    fn test_network_present_in_one_collection() {
        let expected = HashMap::from([(
            "2".to_string(),
            network_map(&[("eth", "0x4"), ("frame", "0x6"), ("trn", "0x5")]),
        )]);

        assert_eq!(get_crosschain_data("frame", "0x6", &collections()), expected);
    }

    #[test]
    fn test_unknown_network_or_contract() {
        assert!(get_crosschain_data("unknown", "0x7", &collections()).is_empty());
        assert!(get_crosschain_data("eth", "0x7", &collections()).is_empty());
        // Address lives on a different network
        assert!(get_crosschain_data("arb", "0x1", &collections()).is_empty());
        assert!(get_crosschain_data("eth", "0x1", &HashMap::new()).is_empty());
    }

    #[test]
    fn test_returns_every_match() {
        let mut input = collections();
        input.insert("3".to_string(), network_map(&[("eth", "0x1")]));

        let result = get_crosschain_data("eth", "0x1", &input);
        let mut ids: Vec<&str> = result.keys().map(String::as_str).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(result["3"], network_map(&[("eth", "0x1")]));
    }

    #[test]
    fn test_exact_address_comparison() {
        let input = HashMap::from([("1".to_string(), network_map(&[("eth", "0xAbC")]))]);
        assert!(get_crosschain_data("eth", "0xabc", &input).is_empty());
        assert_eq!(get_crosschain_data("eth", "0xAbC", &input).len(), 1);
    }
}
