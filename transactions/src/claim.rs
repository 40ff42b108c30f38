//! Claim transaction: mint accrued dividends for governance outputs.

use crate::envelope::{ClaimReference, Envelope};
use crate::error::{FormatError, TransactionError};
use accrue_types::codec::MAX_ARRAY_LEN;
use accrue_types::{BinaryReader, BinaryWriter};
use std::collections::HashSet;

/// A claim transaction.
///
/// `claims` keeps its encoded order; it is never sorted or deduplicated, so a
/// decoded transaction re-encodes to the same bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimTx {
    /// Governance outputs whose accrued dividend this transaction mints.
    pub claims: Vec<ClaimReference>,
    pub envelope: Envelope,
}

impl ClaimTx {
    pub fn new(claims: Vec<ClaimReference>, envelope: Envelope) -> Self {
        Self { claims, envelope }
    }

    pub(crate) fn encode_exclusive(&self, writer: &mut BinaryWriter) {
        writer.write_array(&self.claims);
    }

    /// Read the claims field, rejecting empty and duplicated collections.
    pub(crate) fn decode_exclusive(
        reader: &mut BinaryReader<'_>,
    ) -> Result<Vec<ClaimReference>, FormatError> {
        let claims: Vec<ClaimReference> = reader.read_array(MAX_ARRAY_LEN)?;
        if claims.is_empty() {
            return Err(FormatError::EmptyClaims);
        }
        if let Some(duplicate) = first_duplicate(&claims) {
            return Err(FormatError::DuplicateClaim(duplicate));
        }
        Ok(claims)
    }
}

/// Check the claim collection is non-empty and pairwise distinct.
///
/// Applies to directly constructed transactions too, not only decoded ones.
pub fn check_claims(claims: &[ClaimReference]) -> Result<(), TransactionError> {
    if claims.is_empty() {
        return Err(TransactionError::EmptyClaims);
    }
    match first_duplicate(claims) {
        Some(duplicate) => Err(TransactionError::DuplicateClaim(duplicate)),
        None => Ok(()),
    }
}

/// First element that repeats an earlier one, compared across the whole collection.
fn first_duplicate(claims: &[ClaimReference]) -> Option<ClaimReference> {
    let mut seen = HashSet::with_capacity(claims.len());
    claims.iter().find(|claim| !seen.insert(**claim)).copied()
}
