use serde::{Deserialize, Serialize};

/// Sender identity carried by mining-reward transactions.
pub const REWARD_SENDER: &str = "0";

/// Amount credited to the mining node per sealed block.
pub const REWARD_AMOUNT: i64 = 1;

/// A transfer accepted into the pending pool. The ledger is
/// permissionless: sender/recipient are opaque identities and the
/// amount is taken as-is (no sign check, no double-spend check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub sender: String,
    pub recipient: String,
    pub amount: i64,
}

impl Transaction {
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: i64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }

    /// Build the reward transaction minted for the node that seals a block.
    pub fn reward(recipient: impl Into<String>) -> Self {
        Self::new(REWARD_SENDER, recipient, REWARD_AMOUNT)
    }

    pub fn is_reward(&self) -> bool {
        self.sender == REWARD_SENDER
    }
}

#[cfg(test)]
mod tests {
    use super::{REWARD_AMOUNT, Transaction};

    #[test]
    fn reward_uses_sentinel_sender() {
        let tx = Transaction::reward("node-1");
        assert!(tx.is_reward());
        assert_eq!(tx.recipient, "node-1");
        assert_eq!(tx.amount, REWARD_AMOUNT);
    }

    #[test]
    fn plain_transfer_is_not_a_reward() {
        let tx = Transaction::new("alice", "bob", 10);
        assert!(!tx.is_reward());
    }
}
