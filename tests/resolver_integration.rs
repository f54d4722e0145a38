//! End-to-end resolution over the built-in network table.

use std::sync::Arc;

use netprofile::config::ChainId;
use netprofile::{Credential, NetworkProfileResolver, ResolverError};

mod common;

fn builtin_resolver(secrets: &common::SecretDir) -> NetworkProfileResolver {
    let credential = Credential::load(&secrets.mnemonic_path, &secrets.api_key_path).unwrap();
    NetworkProfileResolver::with_builtin_profiles(Arc::new(credential)).unwrap()
}

#[test]
fn test_rinkeby_end_to_end() {
    let secrets = common::write_secrets(
        "  word1 word2 word3 word4 word5 word6 word7 word8 word9 word10 word11 word12  \n",
        "abc123\n",
    );
    let resolver = builtin_resolver(&secrets);

    let profile = resolver.resolve("rinkeby").unwrap();
    assert_eq!(
        profile.endpoint().expose(),
        "https://rinkeby.infura.io/v3/abc123"
    );
    assert_eq!(profile.chain_id(), ChainId::Id(4));
    assert_eq!(profile.gas_limit(), 5_500_000);
    assert_eq!(profile.confirmations(), 2);
    assert_eq!(profile.timeout_blocks(), 200);
    assert!(profile.skip_dry_run());

    assert_eq!(
        resolver.credential().mnemonic(),
        "word1 word2 word3 word4 word5 word6 word7 word8 word9 word10 word11 word12"
    );
}

#[test]
fn test_development_profile() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "abc123");
    let resolver = builtin_resolver(&secrets);

    let profile = resolver.resolve("development").unwrap();
    assert_eq!(profile.endpoint().expose(), "http://127.0.0.1:8545/");
    assert_eq!(profile.chain_id(), ChainId::Any);
    assert_eq!(profile.gas_limit(), 9_999_999);
    assert_eq!(profile.confirmations(), 0);
    assert_eq!(profile.timeout_blocks(), 0);
    assert!(!profile.skip_dry_run());
    assert_eq!(profile.accounts().count, 50);

    assert_eq!(profile, resolver.resolve("development").unwrap());
}

#[test]
fn test_wildcard_only_on_development() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "abc123");
    let resolver = builtin_resolver(&secrets);

    for profile in resolver.profiles() {
        assert_eq!(
            profile.chain_id().is_wildcard(),
            profile.name() == "development",
            "{}",
            profile.name()
        );
    }
}

#[test]
fn test_unknown_environment_is_not_fatal() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "abc123");
    let resolver = builtin_resolver(&secrets);

    assert!(matches!(
        resolver.resolve("nonexistent"),
        Err(ResolverError::UnknownEnvironment { .. })
    ));
    // The resolver keeps working after a failed lookup.
    assert!(resolver.resolve("rinkeby").is_ok());
}

#[test]
fn test_missing_api_key_file() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "abc123");
    std::fs::remove_file(&secrets.api_key_path).unwrap();

    let result = Credential::load(&secrets.mnemonic_path, &secrets.api_key_path);
    assert!(matches!(
        result,
        Err(ResolverError::CredentialUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_factory_builds_lazily_without_network() {
    let secrets = common::write_secrets(common::TEST_MNEMONIC, "abc123");
    let resolver = builtin_resolver(&secrets);

    let factory = resolver.provider("rinkeby").unwrap();
    let transport = factory.build().unwrap();

    assert_eq!(transport.accounts().len(), 1);
    assert_eq!(
        transport.default_account().to_string().to_lowercase(),
        "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
    );
    assert!(!format!("{:?}", transport).contains("abc123"));
}
