use crate::types::Rank;

const RANK_THRESHOLDS: [(Rank, i128); 4] = [
    (Rank::Hamster, 0),
    (Rank::Hodler, 1001),
    (Rank::Trader, 5001),
    (Rank::Whale, 20001),
];

pub struct RankManager;

impl RankManager {
    /// Highest rank whose threshold the balance has reached
    pub fn rank_for_balance(balance: i128) -> Rank {
        let mut rank = Rank::Hamster;
        for (candidate, threshold) in RANK_THRESHOLDS {
            if balance >= threshold {
                rank = candidate;
            }
        }
        rank
    }

    /// Balance needed for the next rank, None at the top
    pub fn next_rank_threshold(balance: i128) -> Option<i128> {
        RANK_THRESHOLDS
            .iter()
            .map(|(_, threshold)| *threshold)
            .find(|threshold| *threshold > balance)
    }
}
