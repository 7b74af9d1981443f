//! Prism contract interface.
//!
//! The ABI is an external artifact; signatures here must match the deployed
//! contract exactly or calls and log decoding will fail.

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract IPrism {
        /// Emitted when a deposit is accepted.
        #[derive(Debug, PartialEq, Eq)]
        event TransferAccepted(bytes32 id, uint256 amount);

        /// Emitted when a payout for a prior deposit is accepted.
        #[derive(Debug, PartialEq, Eq)]
        event WithdrawAccepted(bytes32 id, uint256 amount);

        function getLevels() external view returns (uint256[] memory);
        function getNextWithdraw(uint256 level) external view returns (bytes32);
        function getBalance() external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::IPrism::{TransferAccepted, WithdrawAccepted};
    use alloy::primitives::keccak256;
    use alloy::sol_types::SolEvent;

    #[test]
    fn test_event_signatures() {
        assert_eq!(TransferAccepted::SIGNATURE, "TransferAccepted(bytes32,uint256)");
        assert_eq!(WithdrawAccepted::SIGNATURE, "WithdrawAccepted(bytes32,uint256)");
        assert_eq!(
            TransferAccepted::SIGNATURE_HASH,
            keccak256("TransferAccepted(bytes32,uint256)")
        );
        assert_ne!(TransferAccepted::SIGNATURE_HASH, WithdrawAccepted::SIGNATURE_HASH);
    }
}
