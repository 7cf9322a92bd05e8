use crate::achievements::AchievementEvaluator;
use crate::events::{self, AchievementUnlocked, PointsAwarded};
use crate::ledger::RewardLedger;
use crate::store::{AccountStore, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD};
use crate::types::{AccountImport, Course, DataKey, Error, RewardConfig, UserAccount};
use soroban_sdk::{log, Address, Env, Map, String, Symbol, Vec};

pub struct AdminModule;

impl AdminModule {
    /// Initialize the contract with an admin and the default reward config
    pub fn init(env: &Env, admin: &Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        let config = RewardConfig::default(env);
        env.storage().instance().set(&DataKey::Admin, admin);
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::TotalUsers, &0u32);
        Self::bump_instance(env);

        env.events().publish(
            (Symbol::new(env, "contract_initialized"),),
            (admin.clone(), config, env.ledger().timestamp()),
        );

        Ok(())
    }

    /// Verify the stored admin signed this invocation
    pub fn verify_admin(env: &Env) -> Result<(), Error> {
        let admin = Self::get_admin(env)?;
        admin.require_auth();
        Ok(())
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn transfer_admin(env: &Env, new_admin: &Address) -> Result<(), Error> {
        Self::verify_admin(env)?;
        env.storage().instance().set(&DataKey::Admin, new_admin);
        Ok(())
    }

    /// Current reward config; defaults until an admin overrides them
    pub fn get_config(env: &Env) -> RewardConfig {
        Self::bump_instance(env);
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .unwrap_or_else(|| RewardConfig::default(env))
    }

    pub fn set_config(env: &Env, config: &RewardConfig) -> Result<(), Error> {
        Self::verify_admin(env)?;

        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }

        env.storage().instance().set(&DataKey::Config, config);
        Ok(())
    }

    /// Add a course or replace its catalog entry. An existing course may gain
    /// lessons but never lose them, so stored progress stays within the total.
    pub fn upsert_course(env: &Env, course: &Course) -> Result<(), Error> {
        Self::verify_admin(env)?;

        if course.id.len() == 0 || course.lessons == 0 {
            return Err(Error::InvalidInput);
        }
        if course.price < 0 {
            return Err(Error::InvalidAmount);
        }

        let key = DataKey::Course(course.id.clone());
        if let Some(existing) = env.storage().persistent().get::<_, Course>(&key) {
            if course.lessons < existing.lessons {
                return Err(Error::InvalidInput);
            }
        }

        env.storage().persistent().set(&key, course);
        Ok(())
    }

    pub fn remove_course(env: &Env, course_id: &String) -> Result<(), Error> {
        Self::verify_admin(env)?;

        let key = DataKey::Course(course_id.clone());
        if !env.storage().persistent().has(&key) {
            return Err(Error::CourseNotFound);
        }
        env.storage().persistent().remove(&key);
        Ok(())
    }

    pub fn get_course(env: &Env, course_id: &String) -> Result<Course, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Course(course_id.clone()))
            .ok_or(Error::CourseNotFound)
    }

    /// Insert a pre-populated account without applying any bonus rule
    pub fn import_account(env: &Env, import: AccountImport) -> Result<UserAccount, Error> {
        Self::verify_admin(env)?;

        if import.name.len() == 0 || import.email.len() == 0 {
            return Err(Error::InvalidInput);
        }

        let config = Self::get_config(env);
        let referral_reward = import
            .referral_reward
            .unwrap_or(config.default_referral_reward);
        if import.balance < 0 || referral_reward < 0 {
            return Err(Error::InvalidAmount);
        }

        let referral_code = match import.referral_code {
            Some(code) if code.len() > 0 => code,
            Some(_) => return Err(Error::InvalidInput),
            None => AccountStore::generate_referral_code(env)?,
        };

        let mut account = UserAccount {
            id: import.id,
            name: import.name,
            email: import.email,
            balance: import.balance,
            referral_code,
            referral_reward,
            referred_by: None,
            achievements: Vec::new(env),
            last_daily_claim: None,
            course_progress: Map::new(env),
            registration_ordinal: AccountStore::total_users(env),
            created_at: env.ledger().timestamp(),
        };

        let catalog = AchievementEvaluator::catalog(env);
        for achievement in import.achievements.iter() {
            AchievementEvaluator::grant_explicit(&mut account, &achievement, &catalog)?;
        }

        AccountStore::insert(env, &account)?;
        log!(env, "imported account {} at ordinal {}", account.id, account.registration_ordinal);

        Ok(account)
    }

    /// Change the bonus a referee receives for using this account's code
    pub fn set_referral_reward(env: &Env, user: &Address, amount: i128) -> Result<(), Error> {
        Self::verify_admin(env)?;

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut account = AccountStore::get(env, user)?;
        account.referral_reward = amount;
        AccountStore::save(env, &account)
    }

    /// Credit points earned outside the engine's own rules
    pub fn award_points(env: &Env, user: &Address, amount: i128) -> Result<i128, Error> {
        Self::verify_admin(env)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let mut account = AccountStore::get(env, user)?;
        RewardLedger::credit(&mut account, amount)?;
        AccountStore::save(env, &account)?;

        events::points_awarded(
            env,
            PointsAwarded {
                account: user.clone(),
                amount,
                balance: account.balance,
            },
        );

        Ok(account.balance)
    }

    /// Record an explicit achievement triggered by an external event.
    /// Returns false when the account already held it.
    pub fn grant_achievement(env: &Env, user: &Address, achievement: &Symbol) -> Result<bool, Error> {
        Self::verify_admin(env)?;

        let mut account = AccountStore::get(env, user)?;
        let catalog = AchievementEvaluator::catalog(env);
        if !AchievementEvaluator::grant_explicit(&mut account, achievement, &catalog)? {
            return Ok(false);
        }

        AccountStore::save(env, &account)?;
        events::achievement_unlocked(
            env,
            AchievementUnlocked {
                account: user.clone(),
                achievement: achievement.clone(),
                balance: account.balance,
            },
        );

        Ok(true)
    }

    fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }
}
