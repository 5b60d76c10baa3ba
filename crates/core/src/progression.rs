//! Experience, levels and the three in-app currencies.
//!
//! Every reward in the app (habit completions, finished books) and every
//! purchase (gacha pulls) goes through the pure functions in this module.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest reachable level.
pub const MAX_LEVEL: u32 = 100;

/// XP needed to go from level 1 to level 2.
pub const BASE_XP_TO_NEXT_LEVEL: u64 = 100;

/// Starting balance for every currency.
pub const STARTING_BALANCE: u64 = 10;

/// Reward for completing a habit.
pub const HABIT_REWARD: Reward = Reward {
    xp: 10,
    currency: Currency::TemuTokens,
    amount: 1,
};

/// Reward for finishing a book.
pub const BOOK_REWARD: Reward = Reward {
    xp: 150,
    currency: Currency::WendyHearts,
    amount: 25,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("Insufficient funds. Requires {required} {currency}, have {available}.")]
    InsufficientFunds {
        currency: Currency,
        required: u64,
        available: u64,
    },
}

/// One of the three spendable currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    TemuTokens,
    GatillaGold,
    WendyHearts,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Currency::TemuTokens => "Temu Tokens",
            Currency::GatillaGold => "Gatilla Gold",
            Currency::WendyHearts => "Wendy Hearts",
        };
        f.write_str(name)
    }
}

/// XP plus a currency grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub xp: u64,
    pub currency: Currency,
    pub amount: u64,
}

impl Reward {
    /// Human-readable summary, e.g. `+10 XP, +1 Temu Tokens`.
    pub fn describe(&self) -> String {
        format!("+{} XP, +{} {}", self.xp, self.amount, self.currency)
    }
}

/// A user's level, XP and wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progression {
    pub level: u32,
    pub experience: u64,
    pub xp_to_next_level: u64,
    pub temu_tokens: u64,
    pub gatilla_gold: u64,
    pub wendy_hearts: u64,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            level: 1,
            experience: 0,
            xp_to_next_level: BASE_XP_TO_NEXT_LEVEL,
            temu_tokens: STARTING_BALANCE,
            gatilla_gold: STARTING_BALANCE,
            wendy_hearts: STARTING_BALANCE,
        }
    }
}

impl Progression {
    /// Current balance of a currency.
    pub fn balance(&self, currency: Currency) -> u64 {
        match currency {
            Currency::TemuTokens => self.temu_tokens,
            Currency::GatillaGold => self.gatilla_gold,
            Currency::WendyHearts => self.wendy_hearts,
        }
    }

    fn balance_mut(&mut self, currency: Currency) -> &mut u64 {
        match currency {
            Currency::TemuTokens => &mut self.temu_tokens,
            Currency::GatillaGold => &mut self.gatilla_gold,
            Currency::WendyHearts => &mut self.wendy_hearts,
        }
    }

    /// Grants a reward and returns how many levels were gained.
    pub fn award(&mut self, reward: Reward) -> u32 {
        let balance = self.balance_mut(reward.currency);
        *balance = balance.saturating_add(reward.amount);
        self.gain_experience(reward.xp)
    }

    /// Adds XP, levelling up as many times as the XP allows.
    ///
    /// Each level-up consumes the current threshold and grows the next one
    /// by 25% (rounded down). XP keeps accumulating at the level cap.
    pub fn gain_experience(&mut self, xp: u64) -> u32 {
        self.experience = self.experience.saturating_add(xp);
        let mut gained = 0;
        while self.level < MAX_LEVEL && self.experience >= self.xp_to_next_level {
            self.experience -= self.xp_to_next_level;
            self.level += 1;
            self.xp_to_next_level = next_threshold(self.xp_to_next_level);
            gained += 1;
        }
        gained
    }

    /// Deducts `cost` from a currency balance.
    pub fn spend(&mut self, currency: Currency, cost: u64) -> Result<(), ProgressionError> {
        let balance = self.balance_mut(currency);
        if *balance < cost {
            return Err(ProgressionError::InsufficientFunds {
                currency,
                required: cost,
                available: *balance,
            });
        }
        *balance -= cost;
        Ok(())
    }
}

/// Next XP threshold after a level-up: `floor(threshold * 1.25)`.
pub fn next_threshold(threshold: u64) -> u64 {
    threshold.saturating_mul(5) / 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_progression() {
        let p = Progression::default();
        assert_eq!(p.level, 1);
        assert_eq!(p.experience, 0);
        assert_eq!(p.xp_to_next_level, 100);
        assert_eq!(p.temu_tokens, 10);
        assert_eq!(p.gatilla_gold, 10);
        assert_eq!(p.wendy_hearts, 10);
    }

    #[test]
    fn test_award_without_level_up() {
        let mut p = Progression::default();
        let gained = p.award(HABIT_REWARD);

        assert_eq!(gained, 0);
        assert_eq!(p.experience, 10);
        assert_eq!(p.temu_tokens, 11);
    }

    #[test]
    fn test_award_levels_up_and_grows_threshold() {
        let mut p = Progression {
            experience: 95,
            ..Progression::default()
        };
        let gained = p.award(HABIT_REWARD);

        assert_eq!(gained, 1);
        assert_eq!(p.level, 2);
        assert_eq!(p.experience, 5);
        assert_eq!(p.xp_to_next_level, 125);
    }

    #[test]
    fn test_large_award_levels_up_multiple_times() {
        let mut p = Progression::default();
        // 100 + 125 = 225 XP for two levels, 150 + 150 = 300 XP awarded.
        p.award(BOOK_REWARD);
        let gained = p.award(BOOK_REWARD);

        assert_eq!(p.level, 3);
        assert_eq!(gained, 1);
        assert_eq!(p.experience, 75);
        assert_eq!(p.xp_to_next_level, 156);
        assert_eq!(p.wendy_hearts, 60);
    }

    #[test]
    fn test_level_cap() {
        let mut p = Progression {
            level: MAX_LEVEL,
            ..Progression::default()
        };
        let gained = p.gain_experience(10_000);

        assert_eq!(gained, 0);
        assert_eq!(p.level, MAX_LEVEL);
        assert_eq!(p.experience, 10_000);
    }

    #[test]
    fn test_spend_success() {
        let mut p = Progression::default();
        p.spend(Currency::TemuTokens, 5).unwrap();
        assert_eq!(p.temu_tokens, 5);
    }

    #[test]
    fn test_spend_insufficient_funds() {
        let mut p = Progression::default();
        let err = p.spend(Currency::GatillaGold, 20).unwrap_err();

        assert_eq!(
            err,
            ProgressionError::InsufficientFunds {
                currency: Currency::GatillaGold,
                required: 20,
                available: 10,
            }
        );
        assert_eq!(p.gatilla_gold, 10);
        assert_eq!(
            err.to_string(),
            "Insufficient funds. Requires 20 Gatilla Gold, have 10."
        );
    }

    #[test]
    fn test_next_threshold_rounds_down() {
        assert_eq!(next_threshold(100), 125);
        assert_eq!(next_threshold(125), 156);
        assert_eq!(next_threshold(50), 62);
    }

    #[test]
    fn test_reward_describe() {
        assert_eq!(HABIT_REWARD.describe(), "+10 XP, +1 Temu Tokens");
        assert_eq!(BOOK_REWARD.describe(), "+150 XP, +25 Wendy Hearts");
    }
}
