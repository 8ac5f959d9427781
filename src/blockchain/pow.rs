use sha2::{Digest, Sha256};

use super::DIFFICULTY_PREFIX_LEN;

/// Check whether `proof` satisfies the difficulty predicate against the
/// previous block's proof: SHA-256 of the text concatenation
/// `"{last_proof}{proof}"` must start with `DIFFICULTY_PREFIX_LEN` zero
/// hex characters.
pub fn valid_proof(last_proof: u64, proof: u64) -> bool {
    let guess = format!("{last_proof}{proof}");
    let mut hasher = Sha256::new();
    hasher.update(guess.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest
        .chars()
        .take(DIFFICULTY_PREFIX_LEN)
        .all(|c| c == '0')
}

/// Brute-force search for the next proof: start at 0, increment by 1,
/// first match wins. CPU-bound and unbounded (expected iterations are
/// 16^4 for the fixed difficulty); callers must run it outside the lock
/// guarding ledger state.
pub fn find_proof(last_proof: u64) -> u64 {
    let mut proof = 0u64;
    while !valid_proof(last_proof, proof) {
        proof += 1;
    }
    proof
}

/// Capped variant of `find_proof` for callers that cannot tolerate an
/// unbounded search. Returns `None` when `max_iterations` candidates
/// were tried without a match.
pub fn find_proof_bounded(last_proof: u64, max_iterations: u64) -> Option<u64> {
    (0..max_iterations).find(|&proof| valid_proof(last_proof, proof))
}

#[cfg(test)]
mod tests {
    use super::{find_proof, find_proof_bounded, valid_proof};

    #[test]
    fn found_proof_satisfies_predicate() {
        let proof = find_proof(100);
        assert!(valid_proof(100, proof));
    }

    #[test]
    fn tampered_proof_fails_predicate() {
        let proof = find_proof(100);
        assert!(!valid_proof(100, proof + 1));
        // The pair is directional: the predicate binds proof to its
        // predecessor, not the other way around.
        assert!(!valid_proof(proof, 100));
    }

    #[test]
    fn bounded_search_honours_the_cap() {
        assert_eq!(find_proof_bounded(100, 1), None);
        let unbounded = find_proof(100);
        assert_eq!(find_proof_bounded(100, unbounded + 1), Some(unbounded));
    }
}
