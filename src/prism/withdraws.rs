//! Waiting-withdraws view: joins transfers with their payouts.
//!
//! # Algorithm
//! ```text
//! for each transfer, in chain order:
//!     withdraw = first withdraw with the same id
//!     amount   = withdraw.amount            if found
//!              = transfer.amount * 13 / 10  otherwise (estimate)
//!     emit { id, transfer, amount, is_completed = found }
//! ```
//!
//! Withdraws whose id matches no transfer are not reported.

use std::collections::{HashMap, HashSet};

use alloy::primitives::{B256, U256};
use serde::{Deserialize, Serialize};

use crate::prism::events::{TransferEvent, WithdrawEvent};
use crate::prism::units::format_ether;

/// Numerator of the payout estimate applied before a withdraw is recorded.
pub const ESTIMATE_NUMERATOR: u64 = 13;
/// Denominator of the payout estimate.
pub const ESTIMATE_DENOMINATOR: u64 = 10;

/// A transfer together with its actual or estimated payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitingWithdraw {
    pub id: B256,
    /// Transfer amount in ether.
    pub transfer: String,
    /// Recorded payout if completed, estimate otherwise, in ether.
    pub withdraw: String,
    pub is_completed: bool,
}

/// Payout estimate for a transfer with no recorded withdraw.
///
/// Integer arithmetic, truncating. Exact whenever the result fits in a
/// `U256`, saturating at `U256::MAX` otherwise.
pub fn estimate_withdraw(transfer_amount: U256) -> U256 {
    let numerator = U256::from(ESTIMATE_NUMERATOR);
    let (quotient, remainder) = transfer_amount.div_rem(U256::from(ESTIMATE_DENOMINATOR));

    // remainder * 13 / 10 is at most 11, so only the first term can overflow
    let tail = remainder * numerator / U256::from(ESTIMATE_DENOMINATOR);
    quotient
        .checked_mul(numerator)
        .and_then(|head| head.checked_add(tail))
        .unwrap_or(U256::MAX)
}

/// Build the waiting-withdraws report.
pub fn correlate(transfers: &[TransferEvent], withdraws: &[WithdrawEvent]) -> Vec<WaitingWithdraw> {
    let mut by_id: HashMap<B256, &WithdrawEvent> = HashMap::with_capacity(withdraws.len());
    for withdraw in withdraws {
        if by_id.contains_key(&withdraw.id) {
            tracing::warn!(id = %withdraw.id, "Duplicate withdraw id, keeping the first");
            continue;
        }
        by_id.insert(withdraw.id, withdraw);
    }

    let transfer_ids: HashSet<B256> = transfers.iter().map(|t| t.id).collect();
    let orphans = by_id.keys().filter(|id| !transfer_ids.contains(*id)).count();
    if orphans > 0 {
        tracing::warn!(orphans, "Withdraws without a matching transfer were dropped");
    }

    transfers
        .iter()
        .map(|transfer| {
            let matched = by_id.get(&transfer.id);
            let withdraw_amount = match matched {
                Some(withdraw) => withdraw.amount,
                None => estimate_withdraw(transfer.amount),
            };

            WaitingWithdraw {
                id: transfer.id,
                transfer: format_ether(transfer.amount),
                withdraw: format_ether(withdraw_amount),
                is_completed: matched.is_some(),
            }
        })
        .collect()
}
