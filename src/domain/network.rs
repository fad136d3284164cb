//! Chain id to human readable network name

/// Resolve a chain id to the name shown in the timeline.
///
/// Unknown ids fall back to their decimal representation.
pub fn chain_id_to_network(chain_id: u64) -> String {
    match chain_id {
        1 => "Mainnet".to_string(),
        3 => "Ropsten".to_string(),
        4 => "Rinkeby".to_string(),
        5 => "Goerli".to_string(),
        42 => "Kovan".to_string(),
        100 => "xDai".to_string(),
        1337 => "Localhost".to_string(),
        31337 => "Hardhat".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_networks() {
        assert_eq!(chain_id_to_network(1), "Mainnet");
        assert_eq!(chain_id_to_network(3), "Ropsten");
        assert_eq!(chain_id_to_network(4), "Rinkeby");
        assert_eq!(chain_id_to_network(5), "Goerli");
        assert_eq!(chain_id_to_network(42), "Kovan");
        assert_eq!(chain_id_to_network(100), "xDai");
        assert_eq!(chain_id_to_network(1337), "Localhost");
        assert_eq!(chain_id_to_network(31337), "Hardhat");
    }

    #[test]
    fn test_unknown_network_uses_decimal_id() {
        assert_eq!(chain_id_to_network(99999), "99999");
        assert_eq!(chain_id_to_network(0), "0");
    }
}
