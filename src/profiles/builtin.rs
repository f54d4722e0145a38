//! Built-in network table.
//!
//! Every field is spelled out per network; nothing is shared between entries.

use std::collections::BTreeMap;

use crate::config::schema::{ChainId, NetworkConfig, NetworkKind};

pub const RINKEBY: &str = "rinkeby";
pub const DEVELOPMENT: &str = "development";

/// Rinkeby via Infura. Lower block gas limit than mainnet.
pub fn rinkeby() -> NetworkConfig {
    NetworkConfig {
        kind: NetworkKind::Public,
        endpoint: "https://rinkeby.infura.io/v3/{api_key}".to_string(),
        chain_id: ChainId::Id(4),
        gas: 5_500_000,
        confirmations: 2,
        timeout_blocks: 200,
        skip_dry_run: true,
        address_index: 0,
        num_addresses: 1,
    }
}

/// Local development node (Ganache/Anvil style) on the default port.
pub fn development() -> NetworkConfig {
    NetworkConfig {
        kind: NetworkKind::Local,
        endpoint: "http://127.0.0.1:8545/".to_string(),
        chain_id: ChainId::Any,
        gas: 9_999_999,
        // Accept on inclusion and let the deployment tool pick its own timeout.
        confirmations: 0,
        timeout_blocks: 0,
        skip_dry_run: false,
        address_index: 0,
        num_addresses: 50,
    }
}

pub fn builtin_networks() -> BTreeMap<String, NetworkConfig> {
    BTreeMap::from([
        (RINKEBY.to_string(), rinkeby()),
        (DEVELOPMENT.to_string(), development()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_network;

    #[test]
    fn test_builtins_are_valid() {
        for (name, network) in builtin_networks() {
            assert!(validate_network(&network).is_ok(), "{name} failed validation");
        }
    }

    #[test]
    fn test_only_development_is_wildcard() {
        for (name, network) in builtin_networks() {
            assert_eq!(network.chain_id.is_wildcard(), name == DEVELOPMENT, "{name}");
        }
    }
}
