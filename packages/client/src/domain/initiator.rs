//! Initiator rule for peer connections.
//!
//! For every pair of members exactly one side sends the initial offer: the one
//! whose identifier has the smaller numeric suffix. Both sides evaluate the
//! same rule locally, so no negotiation round is needed to avoid glare.

use super::value_object::MemberId;

/// Ordering key of a member identifier.
///
/// Identifiers without a numeric suffix rank as `u64::MAX`, after every
/// well-formed identifier.
pub fn id_rank(id: &MemberId) -> u64 {
    id.user_number().unwrap_or(u64::MAX)
}

/// Whether `me` sends the offer to `peer`.
///
/// Strict comparison: equal ranks resolve to neither side initiating.
pub fn should_initiate(me: &MemberId, peer: &MemberId) -> bool {
    id_rank(me) < id_rank(peer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> MemberId {
        MemberId::new(raw.to_string()).unwrap()
    }

    #[test]
    fn test_smaller_number_initiates() {
        // テスト項目: 番号の小さい側がオファーを送る（文字列順ではなく数値順）
        // given (前提条件):
        let a = id("u-2");
        let b = id("u-10");

        // when (操作):
        let a_to_b = should_initiate(&a, &b);
        let b_to_a = should_initiate(&b, &a);

        // then (期待する結果):
        assert!(a_to_b);
        assert!(!b_to_a);
    }

    #[test]
    fn test_exactly_one_side_initiates_for_distinct_ids() {
        // テスト項目: 異なる番号のペアでは必ずどちらか一方だけが送る
        // given (前提条件):
        let numbers = [0_u64, 1, 2, 9, 10, 11, 99, 100, 12345];

        for &x in &numbers {
            for &y in &numbers {
                if x == y {
                    continue;
                }
                // when (操作):
                let a = MemberId::from_user_number(x);
                let b = MemberId::from_user_number(y);
                let forward = should_initiate(&a, &b);
                let backward = should_initiate(&b, &a);

                // then (期待する結果):
                assert!(forward ^ backward, "pair ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_malformed_id_never_initiates() {
        // テスト項目: 数値を持たない ID は正しい ID に対して送らない
        // given (前提条件):
        let malformed = id("x");
        let peer = id("u-1");

        // when (操作):
        let malformed_to_peer = should_initiate(&malformed, &peer);
        let peer_to_malformed = should_initiate(&peer, &malformed);

        // then (期待する結果):
        assert!(!malformed_to_peer);
        assert!(peer_to_malformed);
        assert_eq!(id_rank(&malformed), u64::MAX);
    }

    #[test]
    fn test_equal_ranks_resolve_to_neither() {
        // テスト項目: 同じ番号同士ではどちらも送らない
        // given (前提条件):
        let a = id("u-5");
        let b = id("5");

        // when (操作):
        let a_to_b = should_initiate(&a, &b);
        let b_to_a = should_initiate(&b, &a);

        // then (期待する結果):
        assert!(!a_to_b);
        assert!(!b_to_a);
    }

    #[test]
    fn test_two_malformed_ids_resolve_to_neither() {
        // テスト項目: 不正な ID 同士ではどちらも送らない
        // given (前提条件):
        let a = id("guest");
        let b = id("u-abc");

        // when (操作):
        let a_to_b = should_initiate(&a, &b);
        let b_to_a = should_initiate(&b, &a);

        // then (期待する結果):
        assert!(!a_to_b);
        assert!(!b_to_a);
    }
}
