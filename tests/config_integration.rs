//! Configuration file → resolver.

use netprofile::config::{load_config, ChainId, NetworkKind};
use netprofile::lifecycle::bootstrap;
use netprofile::ResolverError;

mod common;

#[test]
fn test_custom_networks_replace_builtins() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "k-1\n");
    let path = common::write_config(
        &secrets,
        r#"
        [networks.sepolia]
        kind = "public"
        endpoint = "https://sepolia.infura.io/v3/{api_key}"
        chain_id = 11155111
        gas = 3000000
        confirmations = 3
        timeout_blocks = 50

        [networks.ganache]
        kind = "local"
        endpoint = "http://localhost:7545"
        chain_id = "*"
        gas = 6721975
        num_addresses = 10
        "#,
    );

    let config = load_config(&path).unwrap();
    let resolver = bootstrap(&config).unwrap();

    assert_eq!(resolver.names().collect::<Vec<_>>(), vec!["ganache", "sepolia"]);
    assert!(resolver.resolve("rinkeby").is_err());

    let sepolia = resolver.resolve("sepolia").unwrap();
    assert_eq!(sepolia.kind(), NetworkKind::Public);
    assert_eq!(sepolia.endpoint().expose(), "https://sepolia.infura.io/v3/k-1");
    assert_eq!(sepolia.chain_id(), ChainId::Id(11_155_111));
    assert!(!sepolia.skip_dry_run());

    let ganache = resolver.resolve("ganache").unwrap();
    assert_eq!(ganache.accounts().count, 10);
    assert_eq!(ganache.confirmations(), 0);
}

#[test]
fn test_public_wildcard_is_rejected_at_load() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "k");
    let path = common::write_config(
        &secrets,
        r#"
        [networks.mainnet]
        kind = "public"
        endpoint = "https://mainnet.infura.io/v3/{api_key}"
        chain_id = "*"
        gas = 8000000
        "#,
    );

    let config = load_config(&path).unwrap();
    match bootstrap(&config) {
        Err(ResolverError::InvalidProfile { name, reason }) => {
            assert_eq!(name, "mainnet");
            assert!(reason.contains("concrete chain id"));
        }
        other => panic!("expected InvalidProfile, got {other:?}"),
    }
}

#[test]
fn test_credentials_checked_before_profiles() {
    let secrets = common::write_secrets("", "k");
    let path = common::write_config(&secrets, "");

    let config = load_config(&path).unwrap();
    assert!(matches!(
        bootstrap(&config),
        Err(ResolverError::CredentialUnavailable { .. })
    ));
}

#[test]
fn test_api_key_in_authority_is_rejected_at_load() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "rpc.example.org/");
    let path = common::write_config(
        &secrets,
        r#"
        [networks.development]
        kind = "local"
        endpoint = "http://{api_key}@127.0.0.1:8545/"
        chain_id = "*"
        gas = 9999999
        "#,
    );

    let config = load_config(&path).unwrap();
    match bootstrap(&config) {
        Err(ResolverError::InvalidProfile { name, reason }) => {
            assert_eq!(name, "development");
            assert!(reason.contains("path or query"));
        }
        other => panic!("expected InvalidProfile, got {other:?}"),
    }
}

#[test]
fn test_oversized_account_range_is_rejected_at_load() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "k");
    let path = common::write_config(
        &secrets,
        r#"
        [networks.development]
        kind = "local"
        endpoint = "http://127.0.0.1:8545/"
        chain_id = "*"
        gas = 9999999
        num_addresses = 4000000000
        "#,
    );

    let config = load_config(&path).unwrap();
    assert!(matches!(
        bootstrap(&config),
        Err(ResolverError::InvalidProfile { .. })
    ));
}
