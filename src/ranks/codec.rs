//! Leaderboard wire format.
//!
//! The leaderboard is stored as a bincode-encoded sequence of
//! `{ id, points }` records in insertion order.

use super::leaderboard::Rank;
use crate::core::error::Result;

/// Encode ranks for storage.
///
/// # Errors
/// Returns [`MemorizeError::Codec`](crate::core::MemorizeError::Codec) if
/// serialization fails.
pub fn encode(ranks: &[Rank]) -> Result<Vec<u8>> {
    Ok(bincode::serialize(ranks)?)
}

/// Decode stored ranks.
///
/// # Errors
/// Returns [`MemorizeError::Codec`](crate::core::MemorizeError::Codec) for
/// truncated or corrupt input.
pub fn decode(bytes: &[u8]) -> Result<Vec<Rank>> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemorizeError;

    #[test]
    fn test_encode_decode() {
        let ranks = vec![Rank::new("alice", 50), Rank::new("bob", 12), Rank::new("", 0)];

        let bytes = encode(&ranks).unwrap();
        assert_eq!(decode(&bytes).unwrap(), ranks);
    }

    #[test]
    fn test_empty() {
        let bytes = encode(&[]).unwrap();
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_input() {
        let bytes = encode(&[Rank::new("alice", 50)]).unwrap();
        let result = decode(&bytes[..bytes.len() - 2]);
        assert!(matches!(result, Err(MemorizeError::Codec(_))));
    }
}
