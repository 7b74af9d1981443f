//! Typed Prism event records and log decoding.

use alloy::primitives::{B256, U256};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use serde::{Deserialize, Serialize};

use crate::blockchain::abi::IPrism::{TransferAccepted, WithdrawAccepted};
use crate::blockchain::types::{PrismError, PrismResult};

/// A deposit accepted by the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub id: B256,
    pub amount: U256,
}

/// A payout accepted by the contract for a prior deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawEvent {
    pub id: B256,
    pub amount: U256,
}

/// A contract event that can be rebuilt from a raw log.
pub trait PrismEvent: Sized {
    /// ABI event the log must match.
    type Abi: SolEvent;

    /// Human readable name for logs and errors.
    const NAME: &'static str;

    fn from_abi(event: Self::Abi) -> Self;

    /// Amount carried by the event, in wei.
    fn amount(&self) -> U256;
}

impl PrismEvent for TransferEvent {
    type Abi = TransferAccepted;
    const NAME: &'static str = "TransferAccepted";

    fn from_abi(event: TransferAccepted) -> Self {
        Self {
            id: event.id,
            amount: event.amount,
        }
    }

    fn amount(&self) -> U256 {
        self.amount
    }
}

impl PrismEvent for WithdrawEvent {
    type Abi = WithdrawAccepted;
    const NAME: &'static str = "WithdrawAccepted";

    fn from_abi(event: WithdrawAccepted) -> Self {
        Self {
            id: event.id,
            amount: event.amount,
        }
    }

    fn amount(&self) -> U256 {
        self.amount
    }
}

/// Decode every log into `E`, preserving order.
///
/// The first log that does not decode fails the whole batch with
/// [`PrismError::MalformedEvent`] carrying its position.
pub fn parse_logs<E: PrismEvent>(logs: &[Log]) -> PrismResult<Vec<E>> {
    logs.iter()
        .enumerate()
        .map(|(index, log)| {
            if log.topics().first() != Some(&<E::Abi as SolEvent>::SIGNATURE_HASH) {
                return Err(PrismError::MalformedEvent {
                    index,
                    reason: format!("{}: unexpected event topic", E::NAME),
                });
            }
            log.log_decode::<E::Abi>()
                .map(|decoded| E::from_abi(decoded.inner.data))
                .map_err(|e| PrismError::MalformedEvent {
                    index,
                    reason: format!("{}: {}", E::NAME, e),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{Address, LogData};

    fn rpc_log(data: LogData) -> Log {
        Log {
            inner: alloy::primitives::Log {
                address: Address::ZERO,
                data,
            },
            ..Default::default()
        }
    }

    fn transfer_log(id: u8, amount: u64) -> Log {
        let event = TransferAccepted {
            id: B256::with_last_byte(id),
            amount: U256::from(amount),
        };
        rpc_log(event.encode_log_data())
    }

    #[test]
    fn test_parse_transfer_logs() {
        let logs = vec![transfer_log(1, 100), transfer_log(2, 250)];
        let events: Vec<TransferEvent> = parse_logs(&logs).unwrap();

        assert_eq!(
            events,
            vec![
                TransferEvent {
                    id: B256::with_last_byte(1),
                    amount: U256::from(100)
                },
                TransferEvent {
                    id: B256::with_last_byte(2),
                    amount: U256::from(250)
                },
            ]
        );
    }

    #[test]
    fn test_empty_logs() {
        let events: Vec<WithdrawEvent> = parse_logs(&[]).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_wrong_topic_is_malformed() {
        let logs = vec![transfer_log(1, 100)];
        let result: PrismResult<Vec<WithdrawEvent>> = parse_logs(&logs);
        assert!(matches!(result, Err(PrismError::MalformedEvent { index: 0, .. })));
    }

    #[test]
    fn test_missing_amount_is_malformed() {
        let full = transfer_log(1, 100);
        let topics = full.inner.data.topics().to_vec();
        // Only the id word is present; amount is missing
        let truncated = LogData::new_unchecked(topics, full.inner.data.data[..32].to_vec().into());
        let logs = vec![transfer_log(7, 1), rpc_log(truncated)];

        let err = parse_logs::<TransferEvent>(&logs).unwrap_err();
        match err {
            PrismError::MalformedEvent { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.starts_with("TransferAccepted"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
