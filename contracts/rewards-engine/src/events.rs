use crate::types::ClaimOutcome;
use soroban_sdk::{contracttype, Address, Env, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountRegistered {
    pub account: Address,
    pub ordinal: u32,
    pub balance: i128,
    pub referred_by: Option<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralCredited {
    pub referrer: Address,
    pub referee: Address,
    pub referrer_bonus: i128,
    pub referee_bonus: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyBonusClaimed {
    pub account: Address,
    pub outcome: ClaimOutcome,
    pub balance: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LessonCompleted {
    pub account: Address,
    pub course_id: String,
    pub progress: u32,
    pub total_lessons: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AchievementUnlocked {
    pub account: Address,
    pub achievement: Symbol,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointsAwarded {
    pub account: Address,
    pub amount: i128,
    pub balance: i128,
}

pub fn account_registered(env: &Env, event: AccountRegistered) {
    env.events().publish(
        (Symbol::new(env, "account_registered"), event.account.clone()),
        event,
    );
}

pub fn referral_credited(env: &Env, event: ReferralCredited) {
    env.events().publish(
        (Symbol::new(env, "referral_credited"), event.referrer.clone()),
        event,
    );
}

/// Granted claims publish `daily_bonus_claimed`, clock rollbacks
/// `clock_rollback`. Too-soon retries are only logged.
pub fn daily_bonus(env: &Env, event: DailyBonusClaimed) {
    let topic = match event.outcome {
        ClaimOutcome::Granted => "daily_bonus_claimed",
        ClaimOutcome::ClockRollback => "clock_rollback",
        ClaimOutcome::TooSoon => return,
    };
    env.events()
        .publish((Symbol::new(env, topic), event.account.clone()), event);
}

pub fn lesson_completed(env: &Env, event: LessonCompleted) {
    env.events().publish(
        (Symbol::new(env, "lesson_completed"), event.account.clone()),
        event,
    );
}

pub fn achievement_unlocked(env: &Env, event: AchievementUnlocked) {
    env.events().publish(
        (Symbol::new(env, "achievement_unlocked"), event.account.clone()),
        event,
    );
}

pub fn points_awarded(env: &Env, event: PointsAwarded) {
    env.events().publish(
        (Symbol::new(env, "points_awarded"), event.account.clone()),
        event,
    );
}
