//! Demo data and an in-memory custom token resolver.

use std::sync::Arc;

use eyre::{Result, WrapErr};
use multisig_proposals_core::{
    CustomTokenResolver, PortError, ProposalRecord, TokenFuture, TokenHolding, TokenInfo,
};
use serde::Deserialize;

const FIXTURE_JSON: &str = include_str!("../assets/demo_fixture.json");

/// Length of a Stellar strkey (account `G...` or contract `C...`).
pub const STRKEY_LEN: usize = 56;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DemoFixture {
    pub holdings: Vec<TokenHolding>,
    pub proposals: Vec<ProposalRecord>,
    /// Tokens the resolver knows about but the account does not hold.
    #[serde(default)]
    pub registry: Vec<TokenInfo>,
}

pub fn load_fixture() -> Result<DemoFixture> {
    serde_json::from_str(FIXTURE_JSON).wrap_err("failed to parse embedded demo fixture")
}

/// Shape check only: prefix plus 55 base32 characters. No checksum.
pub fn looks_like_strkey(address: &str, prefix: char) -> bool {
    address.len() == STRKEY_LEN
        && address.starts_with(prefix)
        && address
            .chars()
            .all(|c| c.is_ascii_uppercase() || ('2'..='7').contains(&c))
}

/// Resolves contract addresses against a fixed token list.
#[derive(Debug, Clone, Default)]
pub struct RegistryResolver {
    known: Arc<Vec<TokenInfo>>,
}

impl RegistryResolver {
    pub fn new(known: Vec<TokenInfo>) -> Self {
        Self {
            known: Arc::new(known),
        }
    }
}

impl CustomTokenResolver for RegistryResolver {
    fn resolve(&self, address: &str) -> TokenFuture {
        let known = Arc::clone(&self.known);
        let address = address.trim().to_owned();
        Box::pin(async move {
            if !looks_like_strkey(&address, 'C') {
                return Err(PortError::Validation(format!(
                    "expected a {}-character contract address starting with C",
                    STRKEY_LEN
                )));
            }
            let found = known.iter().find(|t| t.address == address).cloned();
            tracing::debug!("resolved {} -> {:?}", address, found.as_ref().map(|t| &t.symbol));
            Ok(found)
        })
    }
}
