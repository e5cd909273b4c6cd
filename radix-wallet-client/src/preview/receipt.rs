use crate::internal_prelude::*;

/// Engine error emitted when a receiving account's deposit rules reject a
/// resource outright.
const DEPOSIT_DISALLOWED: &str = "AccountError(DepositIsDisallowed";
/// Engine error emitted when a try-deposit batch could not be placed.
const NOT_ALL_BUCKETS_DEPOSITED: &str = "AccountError(NotAllBucketsCouldBeDeposited";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionReceiptStatus {
    Succeeded,
    Failed,
    Rejected,
}

/// Outcome of running the manifest in the preview engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub status: TransactionReceiptStatus,
    pub error_message: Option<String>,
}

impl TransactionReceipt {
    pub fn succeeded() -> Self {
        Self {
            status: TransactionReceiptStatus::Succeeded,
            error_message: None,
        }
    }

    pub fn failed(error_message: impl AsRef<str>) -> Self {
        Self {
            status: TransactionReceiptStatus::Failed,
            error_message: Some(error_message.as_ref().to_owned()),
        }
    }

    /// Maps a non successful receipt onto the failure shown to the user.
    /// Deposit rejections get a dedicated message; everything else is
    /// surfaced verbatim.
    pub fn failure(&self) -> Option<TransactionFailure> {
        if self.status == TransactionReceiptStatus::Succeeded {
            return None;
        }
        let message = self.error_message.clone().unwrap_or_default();
        if message.contains(DEPOSIT_DISALLOWED) || message.contains(NOT_ALL_BUCKETS_DEPOSITED) {
            Some(TransactionFailure::ReceivingAccountDisallowsDeposits)
        } else {
            Some(TransactionFailure::PreviewFailed { message })
        }
    }
}

/// What the gateway returns for a preview request: the engine receipt plus,
/// when the run got far enough, the analyzed execution summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPreviewResponse {
    pub receipt: TransactionReceipt,
    pub execution_summary: Option<ExecutionSummary>,
}

impl TransactionPreviewResponse {
    pub fn succeeded(execution_summary: ExecutionSummary) -> Self {
        Self {
            receipt: TransactionReceipt::succeeded(),
            execution_summary: Some(execution_summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_receipt_is_no_failure() {
        assert!(TransactionReceipt::succeeded().failure().is_none());
    }

    #[test]
    fn disallowed_deposit_is_recognized() {
        let receipt = TransactionReceipt::failed(
            "CallError: AccountError(DepositIsDisallowed { resource_address: resource_rdx... })",
        );
        assert!(matches!(
            receipt.failure(),
            Some(TransactionFailure::ReceivingAccountDisallowsDeposits)
        ));
    }

    #[test]
    fn unplaced_buckets_are_recognized() {
        let receipt =
            TransactionReceipt::failed("AccountError(NotAllBucketsCouldBeDeposited)");
        assert!(matches!(
            receipt.failure(),
            Some(TransactionFailure::ReceivingAccountDisallowsDeposits)
        ));
    }

    #[test]
    fn other_errors_are_surfaced_verbatim() {
        let receipt = TransactionReceipt::failed("OutOfCostUnits");
        match receipt.failure() {
            Some(TransactionFailure::PreviewFailed { message }) => {
                assert_eq!(message, "OutOfCostUnits")
            }
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn rejection_without_message_still_fails() {
        let receipt = TransactionReceipt {
            status: TransactionReceiptStatus::Rejected,
            error_message: None,
        };
        assert!(matches!(
            receipt.failure(),
            Some(TransactionFailure::PreviewFailed { .. })
        ));
    }
}
