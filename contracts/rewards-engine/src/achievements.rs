use crate::types::{Achievement, Error, UnlockRule, UserAccount};
use soroban_sdk::{vec, Env, Symbol, Vec};

pub const EARLY_ADOPTER: &str = "early_adopter";
pub const KNOWLEDGE_SEEKER: &str = "knowledge_seeker";
pub const SHOPAHOLIC: &str = "shopaholic";
pub const RICH_GUY: &str = "rich_guy";

pub struct AchievementEvaluator;

impl AchievementEvaluator {
    /// The static achievement catalog
    pub fn catalog(env: &Env) -> Vec<Achievement> {
        vec![
            env,
            Achievement {
                id: Symbol::new(env, EARLY_ADOPTER),
                rule: UnlockRule::Explicit,
            },
            Achievement {
                id: Symbol::new(env, KNOWLEDGE_SEEKER),
                rule: UnlockRule::Explicit,
            },
            Achievement {
                id: Symbol::new(env, SHOPAHOLIC),
                rule: UnlockRule::Explicit,
            },
            Achievement {
                id: Symbol::new(env, RICH_GUY),
                rule: UnlockRule::Threshold(10_000),
            },
        ]
    }

    pub fn find(catalog: &Vec<Achievement>, id: &Symbol) -> Option<Achievement> {
        catalog.iter().find(|achievement| achievement.id == *id)
    }

    /// Explicitly held, or implied by a threshold the balance has reached.
    /// Pure read: nothing is persisted for threshold unlocks.
    pub fn is_unlocked(account: &UserAccount, id: &Symbol, catalog: &Vec<Achievement>) -> bool {
        if account.has_achievement(id) {
            return true;
        }

        match Self::find(catalog, id) {
            Some(Achievement {
                rule: UnlockRule::Threshold(threshold),
                ..
            }) => account.balance >= threshold,
            _ => false,
        }
    }

    /// Every catalog id currently unlocked, plus held ids outside the catalog
    pub fn unlocked(env: &Env, account: &UserAccount, catalog: &Vec<Achievement>) -> Vec<Symbol> {
        let mut unlocked = Vec::new(env);
        for achievement in catalog.iter() {
            if Self::is_unlocked(account, &achievement.id, catalog) {
                unlocked.push_back(achievement.id);
            }
        }
        for held in account.achievements.iter() {
            if !unlocked.contains(&held) {
                unlocked.push_back(held);
            }
        }
        unlocked
    }

    /// Add `id` to the account unless already held. Returns true only for the
    /// first grant, so callers tie one-time side effects to the return value.
    pub fn grant(account: &mut UserAccount, id: &Symbol) -> bool {
        if account.has_achievement(id) {
            return false;
        }
        account.achievements.push_back(id.clone());
        true
    }

    /// Grant an explicit catalog achievement on behalf of an external event
    pub fn grant_explicit(
        account: &mut UserAccount,
        id: &Symbol,
        catalog: &Vec<Achievement>,
    ) -> Result<bool, Error> {
        match Self::find(catalog, id) {
            None => Err(Error::AchievementNotFound),
            Some(Achievement {
                rule: UnlockRule::Threshold(_),
                ..
            }) => Err(Error::AchievementNotGrantable),
            Some(_) => Ok(Self::grant(account, id)),
        }
    }
}
