//! Stateful verification of accrue transactions against a ledger snapshot.
//!
//! Every kind first passes the shared base checks ([`verify_base`]): stateless
//! structure, input resolution and double spends, minting rules and witnesses.
//! Claim transactions then have their dividend output priced by a
//! [`ClaimAmountOracle`](accrue_dividend::ClaimAmountOracle) and accepted only
//! on exact equality.
//!
//! Verification never mutates anything. Pass a ledger snapshot to get a
//! point-in-time answer while the ledger keeps growing.

pub mod authority;
pub mod balance;
pub mod base;
pub mod claim;
pub mod error;
mod resolve;
pub mod verifier;

pub use authority::required_authority_set;
pub use balance::{net_asset_results, NetAssetResult};
pub use base::verify_base;
pub use claim::verify_claim;
pub use error::VerificationFailure;
pub use verifier::TransactionVerifier;
