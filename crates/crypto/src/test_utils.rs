//! Deterministic keys and proof builders for tests.

use std::num::NonZero;

use secp256k1::{Message, PublicKey, SecretKey, SECP256K1};

use crate::{
    threshold_signature::indexed::{
        CompressedPublicKey, IndexedSignature, SignatureSet, ThresholdConfig,
    },
    PublicKeySet,
};

/// Secret/public key pair derived from a one-byte seed.
pub fn keypair(seed: u8) -> (SecretKey, CompressedPublicKey) {
    let mut sk_bytes = [0u8; 32];
    sk_bytes[31] = seed.max(1);
    let sk = SecretKey::from_slice(&sk_bytes).expect("test: valid secret key");
    let pk = CompressedPublicKey::from(PublicKey::from_secret_key(SECP256K1, &sk));
    (sk, pk)
}

/// Signs a digest, returning `recovery_id || r || s`.
pub fn sign_recoverable(message_hash: &[u8; 32], secret_key: &SecretKey) -> [u8; 65] {
    let message = Message::from_digest(*message_hash);
    let sig = SECP256K1.sign_ecdsa_recoverable(&message, secret_key);
    let (recovery_id, compact) = sig.serialize_compact();

    let mut result = [0u8; 65];
    result[0] = recovery_id.to_i32() as u8;
    result[1..].copy_from_slice(&compact);
    result
}

/// Encoded [`ThresholdConfig`] over the keys for `seeds`.
pub fn key_set(seeds: &[u8], threshold: u8) -> PublicKeySet {
    let keys = seeds.iter().map(|s| keypair(*s).1).collect();
    let threshold = NonZero::new(threshold).expect("test: non-zero threshold");
    let config = ThresholdConfig::try_new(keys, threshold).expect("test: valid config");
    PublicKeySet::new(borsh::to_vec(&config).expect("test: encode config"))
}

/// Encoded [`SignatureSet`] with one signature per `(index, seed)` pair.
pub fn build_proof(message_hash: &[u8; 32], signers: &[(u8, u8)]) -> Vec<u8> {
    let signatures = signers
        .iter()
        .map(|(index, seed)| {
            IndexedSignature::new(*index, sign_recoverable(message_hash, &keypair(*seed).0))
        })
        .collect();
    let set = SignatureSet::new(signatures).expect("test: unique indices");
    borsh::to_vec(&set).expect("test: encode proof")
}
