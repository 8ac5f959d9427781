use super::Block;
use super::pow;

/// Walk a candidate chain and re-verify hash linkage and proof-of-work
/// for every adjacent pair. Pure: no mutation, no network I/O, so chains
/// fetched from peers can be checked without committing to them.
///
/// An empty or single-element chain is trivially valid.
pub fn is_valid_chain(chain: &[Block]) -> bool {
    for pair in chain.windows(2) {
        let (prev, block) = (&pair[0], &pair[1]);

        if block.previous_hash != prev.digest() {
            return false;
        }
        if !pow::valid_proof(prev.proof, block.proof) {
            return false;
        }
    }
    true
}
