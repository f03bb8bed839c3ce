//! Transaction fingerprints.
//!
//! A fingerprint is keccak256 over the XDR encoding of the ordered tuple
//! `(target, value, signature, data, eta)`. XDR values are typed and length
//! prefixed, so two distinct tuples never share an encoding. The guard and the
//! timelock both go through [`Transaction::fingerprint`], which keeps their
//! keys byte-identical.

use soroban_sdk::{xdr::ToXdr, Address, BytesN, Env, Symbol, Val, Vec};

/// A proposed call, exactly as it is queued and later executed.
#[derive(Clone)]
pub struct Transaction {
    pub target: Address,
    pub value: i128,
    pub signature: Option<Symbol>,
    pub data: Vec<Val>,
    pub eta: u64,
}

impl Transaction {
    pub fn new(
        target: Address,
        value: i128,
        signature: Option<Symbol>,
        data: Vec<Val>,
        eta: u64,
    ) -> Self {
        Self {
            target,
            value,
            signature,
            data,
            eta,
        }
    }

    pub fn fingerprint(&self, env: &Env) -> BytesN<32> {
        fingerprint(
            env,
            &self.target,
            self.value,
            &self.signature,
            &self.data,
            self.eta,
        )
    }
}

pub fn fingerprint(
    env: &Env,
    target: &Address,
    value: i128,
    signature: &Option<Symbol>,
    data: &Vec<Val>,
    eta: u64,
) -> BytesN<32> {
    let encoded = (
        target.clone(),
        value,
        signature.clone(),
        data.clone(),
        eta,
    )
        .to_xdr(env);
    env.crypto().keccak256(&encoded).to_bytes()
}
