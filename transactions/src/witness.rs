//! Witnesses: proof data that an authority approves a transaction.
//!
//! A witness pairs an `invocation` (the proof) with a `verification` payload
//! (the policy). The witness's identity is the Blake2b-160 hash of the
//! verification payload, which is what outputs name as their owner.

use accrue_crypto::{authority_hash, sign_message, verify_signature};
use accrue_types::codec::MAX_VAR_BYTES;
use accrue_types::{
    AuthorityHash, BinaryReader, BinaryWriter, CodecError, Decode, Encode, KeyPair, PublicKey,
    Signature, TxHash,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    pub invocation: Vec<u8>,
    pub verification: Vec<u8>,
}

impl Witness {
    /// The authority this witness speaks for.
    pub fn authority(&self) -> AuthorityHash {
        authority_hash(&self.verification)
    }

    /// A standard single-key witness: signature over the transaction hash.
    pub fn sign(hash: &TxHash, keypair: &KeyPair) -> Self {
        let signature = sign_message(hash.as_bytes(), &keypair.private);
        Self {
            invocation: signature.0.to_vec(),
            verification: keypair.public.0.to_vec(),
        }
    }
}

/// The authority owning outputs locked to a single Ed25519 key.
pub fn standard_authority(public: &PublicKey) -> AuthorityHash {
    authority_hash(public.as_bytes())
}

impl Encode for Witness {
    fn encode(&self, writer: &mut BinaryWriter) {
        writer.write_var_bytes(&self.invocation);
        writer.write_var_bytes(&self.verification);
    }
}

impl Decode for Witness {
    fn decode(reader: &mut BinaryReader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            invocation: reader.read_var_bytes(MAX_VAR_BYTES)?,
            verification: reader.read_var_bytes(MAX_VAR_BYTES)?,
        })
    }
}

/// Decides whether a witness proves approval of a transaction hash.
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait WitnessVerifier {
    fn verify(&self, hash: &TxHash, witness: &Witness) -> bool;
}

/// Checks standard single-key witnesses: a 32-byte Ed25519 public key as the
/// verification payload and a 64-byte signature over the hash as invocation.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignatureWitnessVerifier;

impl WitnessVerifier for SignatureWitnessVerifier {
    fn verify(&self, hash: &TxHash, witness: &Witness) -> bool {
        let Ok(public) = <[u8; 32]>::try_from(witness.verification.as_slice()) else {
            return false;
        };
        let Some(signature) = Signature::from_slice(&witness.invocation) else {
            return false;
        };
        verify_signature(hash.as_bytes(), &signature, &PublicKey(public))
    }
}
