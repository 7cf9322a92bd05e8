#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Symbol, Vec};

pub mod accounts;
pub mod achievements;
pub mod admin;
pub mod events;
pub mod ledger;
pub mod population;
pub mod progress;
pub mod ranks;
pub mod referral;
pub mod store;
pub mod types;

use accounts::AccountsModule;
use achievements::AchievementEvaluator;
use admin::AdminModule;
use ranks::RankManager;
use store::AccountStore;
use types::{
    AccountImport, Achievement, ClaimOutcome, Course, Error, LessonReport, Rank, RewardConfig,
    UserAccount,
};

/// Main contract trait defining all available functions
pub trait RewardsEngineTrait {
    // Admin functions
    fn init(env: Env, admin: Address) -> Result<(), Error>;
    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error>;
    fn set_config(env: Env, config: RewardConfig) -> Result<(), Error>;
    fn upsert_course(env: Env, course: Course) -> Result<(), Error>;
    fn remove_course(env: Env, course_id: String) -> Result<(), Error>;
    fn import_account(env: Env, import: AccountImport) -> Result<UserAccount, Error>;
    fn set_referral_reward(env: Env, user: Address, amount: i128) -> Result<(), Error>;
    fn award_points(env: Env, user: Address, amount: i128) -> Result<i128, Error>;
    fn grant_achievement(env: Env, user: Address, achievement: Symbol) -> Result<bool, Error>;

    // Account operations
    fn register(
        env: Env,
        user: Address,
        name: String,
        email: String,
        referral_code: Option<String>,
    ) -> Result<UserAccount, Error>;
    fn claim_daily_bonus(env: Env, user: Address) -> Result<ClaimOutcome, Error>;
    fn complete_lesson(env: Env, user: Address, course_id: String) -> Result<LessonReport, Error>;
    fn restart_course(env: Env, user: Address, course_id: String) -> Result<(), Error>;

    // Queries
    fn get_admin(env: Env) -> Result<Address, Error>;
    fn get_config(env: Env) -> RewardConfig;
    fn get_course(env: Env, course_id: String) -> Result<Course, Error>;
    fn get_account(env: Env, user: Address) -> Result<UserAccount, Error>;
    fn get_total_users(env: Env) -> u32;
    fn get_achievement_catalog(env: Env) -> Vec<Achievement>;
    fn is_achievement_unlocked(env: Env, user: Address, achievement: Symbol) -> Result<bool, Error>;
    fn get_unlocked_achievements(env: Env, user: Address) -> Result<Vec<Symbol>, Error>;
    fn get_user_rank(env: Env, user: Address) -> Result<Rank, Error>;
    fn get_next_rank_threshold(env: Env, user: Address) -> Result<Option<i128>, Error>;
    fn time_until_next_claim(env: Env, user: Address) -> Result<u64, Error>;
    fn preview_referral_bonus(env: Env, code: String, email: String) -> i128;
}

#[contract]
pub struct RewardsEngine;

#[contractimpl]
impl RewardsEngineTrait for RewardsEngine {
    // Admin functions
    fn init(env: Env, admin: Address) -> Result<(), Error> {
        AdminModule::init(&env, &admin)
    }

    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        AdminModule::transfer_admin(&env, &new_admin)
    }

    fn set_config(env: Env, config: RewardConfig) -> Result<(), Error> {
        AdminModule::set_config(&env, &config)
    }

    fn upsert_course(env: Env, course: Course) -> Result<(), Error> {
        AdminModule::upsert_course(&env, &course)
    }

    fn remove_course(env: Env, course_id: String) -> Result<(), Error> {
        AdminModule::remove_course(&env, &course_id)
    }

    fn import_account(env: Env, import: AccountImport) -> Result<UserAccount, Error> {
        AdminModule::import_account(&env, import)
    }

    fn set_referral_reward(env: Env, user: Address, amount: i128) -> Result<(), Error> {
        AdminModule::set_referral_reward(&env, &user, amount)
    }

    fn award_points(env: Env, user: Address, amount: i128) -> Result<i128, Error> {
        AdminModule::award_points(&env, &user, amount)
    }

    fn grant_achievement(env: Env, user: Address, achievement: Symbol) -> Result<bool, Error> {
        AdminModule::grant_achievement(&env, &user, &achievement)
    }

    // Account operations
    fn register(
        env: Env,
        user: Address,
        name: String,
        email: String,
        referral_code: Option<String>,
    ) -> Result<UserAccount, Error> {
        AccountsModule::register(&env, &user, name, email, referral_code)
    }

    fn claim_daily_bonus(env: Env, user: Address) -> Result<ClaimOutcome, Error> {
        AccountsModule::claim_daily_bonus(&env, &user)
    }

    fn complete_lesson(env: Env, user: Address, course_id: String) -> Result<LessonReport, Error> {
        AccountsModule::complete_lesson(&env, &user, &course_id)
    }

    fn restart_course(env: Env, user: Address, course_id: String) -> Result<(), Error> {
        AccountsModule::restart_course(&env, &user, &course_id)
    }

    // Queries
    fn get_admin(env: Env) -> Result<Address, Error> {
        AdminModule::get_admin(&env)
    }

    fn get_config(env: Env) -> RewardConfig {
        AdminModule::get_config(&env)
    }

    fn get_course(env: Env, course_id: String) -> Result<Course, Error> {
        AdminModule::get_course(&env, &course_id)
    }

    fn get_account(env: Env, user: Address) -> Result<UserAccount, Error> {
        AccountStore::get(&env, &user)
    }

    fn get_total_users(env: Env) -> u32 {
        AccountStore::total_users(&env)
    }

    fn get_achievement_catalog(env: Env) -> Vec<Achievement> {
        AchievementEvaluator::catalog(&env)
    }

    fn is_achievement_unlocked(env: Env, user: Address, achievement: Symbol) -> Result<bool, Error> {
        AccountsModule::is_achievement_unlocked(&env, &user, &achievement)
    }

    fn get_unlocked_achievements(env: Env, user: Address) -> Result<Vec<Symbol>, Error> {
        let account = AccountStore::get(&env, &user)?;
        let catalog = AchievementEvaluator::catalog(&env);
        Ok(AchievementEvaluator::unlocked(&env, &account, &catalog))
    }

    fn get_user_rank(env: Env, user: Address) -> Result<Rank, Error> {
        let account = AccountStore::get(&env, &user)?;
        Ok(RankManager::rank_for_balance(account.balance))
    }

    fn get_next_rank_threshold(env: Env, user: Address) -> Result<Option<i128>, Error> {
        let account = AccountStore::get(&env, &user)?;
        Ok(RankManager::next_rank_threshold(account.balance))
    }

    fn time_until_next_claim(env: Env, user: Address) -> Result<u64, Error> {
        AccountsModule::time_until_next_claim(&env, &user)
    }

    fn preview_referral_bonus(env: Env, code: String, email: String) -> i128 {
        AccountsModule::preview_referral_bonus(&env, &code, &email)
    }
}
