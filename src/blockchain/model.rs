use super::Block;
use crate::error::ChainError;
use crate::transaction::Transaction;

/// The ledger: an append-only chain of blocks plus the pool of
/// transactions accepted but not yet bound into a block.
///
/// Both live in one struct on purpose — callers wrap the whole thing in
/// a single `Mutex`, which makes "snapshot the pending pool and clear it"
/// in `mine_block` atomic with respect to concurrent submissions.
#[derive(Debug)]
pub struct Blockchain {
    pub chain: Vec<Block>,
    pending: Vec<Transaction>,
}

impl Blockchain {
    /// Initialize with the synthetic genesis block.
    pub fn new() -> Self {
        Self {
            chain: vec![Block::genesis()],
            pending: Vec::new(),
        }
    }

    /// Tail of the chain. `EmptyChain` is unreachable after `new()` and
    /// indicates a construction bug.
    pub fn last_block(&self) -> Result<&Block, ChainError> {
        self.chain.last().ok_or(ChainError::EmptyChain)
    }

    /// Enqueue a transfer into the pending pool. Accepted as-is: no sign
    /// check, no identity check, no double-spend check. Returns the index
    /// of the block that will eventually hold it.
    pub fn new_transaction(
        &mut self,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: i64,
    ) -> Result<u64, ChainError> {
        self.push_pending(Transaction::new(sender, recipient, amount))
    }

    /// Enqueue an already-built transaction (used for mining rewards).
    pub fn push_pending(&mut self, tx: Transaction) -> Result<u64, ChainError> {
        let next_index = self.last_block()?.index + 1;
        self.pending.push(tx);
        Ok(next_index)
    }

    /// Seal a new block: drain the entire pending pool into it and append.
    /// The drain and the append happen together, so no concurrently
    /// submitted transaction can be dropped or mined twice as long as the
    /// caller holds the lock guarding this struct.
    pub fn mine_block(&mut self, proof: u64, previous_hash: String) -> &Block {
        let transactions = std::mem::take(&mut self.pending);
        let block = Block::new(
            self.chain.len() as u64 + 1,
            transactions,
            proof,
            previous_hash,
        );
        self.chain.push(block);
        self.chain.last().expect("block just appended")
    }

    /// Wholesale chain substitution. Used only by consensus resolution,
    /// after the replacement has been validated.
    pub fn replace_chain(&mut self, new_chain: Vec<Block>) {
        self.chain = new_chain;
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Derived aggregate of all amounts across sealed blocks and the
    /// pending pool. Recomputed on demand — an observability figure, not
    /// an authoritative account balance.
    pub fn total_volume(&self) -> i64 {
        let sealed: i64 = self
            .chain
            .iter()
            .flat_map(|b| &b.transactions)
            .map(|tx| tx.amount)
            .sum();
        let queued: i64 = self.pending.iter().map(|tx| tx.amount).sum();
        sealed + queued
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Blockchain;
    use crate::blockchain::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF, pow};
    use crate::transaction::Transaction;

    #[test]
    fn starts_with_genesis_only() {
        let ledger = Blockchain::new();
        assert_eq!(ledger.len(), 1);
        let genesis = ledger.last_block().unwrap();
        assert_eq!(genesis.index, 1);
        assert_eq!(genesis.proof, GENESIS_PROOF);
        assert_eq!(genesis.previous_hash, GENESIS_PREVIOUS_HASH);
        assert_eq!(ledger.pending_len(), 0);
    }

    #[test]
    fn new_transaction_reports_the_next_block_index() {
        let mut ledger = Blockchain::new();
        assert_eq!(ledger.new_transaction("alice", "bob", 10).unwrap(), 2);
        assert_eq!(ledger.new_transaction("bob", "carol", 5).unwrap(), 2);
        assert_eq!(ledger.pending_len(), 2);
    }

    #[test]
    fn mining_drains_the_pending_pool_into_one_block() {
        let mut ledger = Blockchain::new();
        ledger.new_transaction("alice", "bob", 10).unwrap();

        let (last_proof, previous_hash) = {
            let last = ledger.last_block().unwrap();
            (last.proof, last.digest())
        };
        let proof = pow::find_proof(last_proof);
        let block = ledger.mine_block(proof, previous_hash.clone());

        assert_eq!(block.index, 2);
        assert_eq!(block.previous_hash, previous_hash);
        assert_eq!(
            block.transactions,
            vec![Transaction::new("alice", "bob", 10)]
        );
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.pending_len(), 0);
    }

    #[test]
    fn mining_an_empty_pool_yields_an_empty_block() {
        let mut ledger = Blockchain::new();
        let (last_proof, previous_hash) = {
            let last = ledger.last_block().unwrap();
            (last.proof, last.digest())
        };
        let block = ledger.mine_block(pow::find_proof(last_proof), previous_hash);
        assert!(block.transactions.is_empty());
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn replace_chain_substitutes_wholesale() {
        let mut a = Blockchain::new();
        let mut b = Blockchain::new();
        let (last_proof, previous_hash) = {
            let last = b.last_block().unwrap();
            (last.proof, last.digest())
        };
        b.mine_block(pow::find_proof(last_proof), previous_hash);

        a.replace_chain(b.chain.clone());
        assert_eq!(a.len(), 2);
        assert_eq!(a.chain, b.chain);
    }

    #[test]
    fn total_volume_counts_sealed_and_pending_amounts() {
        let mut ledger = Blockchain::new();
        ledger.new_transaction("alice", "bob", 10).unwrap();
        assert_eq!(ledger.total_volume(), 10);

        let (last_proof, previous_hash) = {
            let last = ledger.last_block().unwrap();
            (last.proof, last.digest())
        };
        ledger.mine_block(pow::find_proof(last_proof), previous_hash);
        ledger.new_transaction("bob", "carol", -3).unwrap();
        assert_eq!(ledger.total_volume(), 7);
    }
}
