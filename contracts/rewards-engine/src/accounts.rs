use crate::achievements::{AchievementEvaluator, KNOWLEDGE_SEEKER};
use crate::admin::AdminModule;
use crate::events::{
    self, AccountRegistered, AchievementUnlocked, DailyBonusClaimed, LessonCompleted,
    ReferralCredited,
};
use crate::ledger::RewardLedger;
use crate::progress::CourseProgressTracker;
use crate::referral::ReferralResolver;
use crate::store::{AccountStore, StoredPopulation};
use crate::types::{AccountDraft, ClaimOutcome, Error, LessonOutcome, LessonReport, UserAccount};
use soroban_sdk::{log, Address, Env, String, Symbol};

/// Account-facing operations. Each one runs inside a single contract
/// invocation, so the read-check-write below is atomic per account.
pub struct AccountsModule;

impl AccountsModule {
    pub fn register(
        env: &Env,
        user: &Address,
        name: String,
        email: String,
        referral_code: Option<String>,
    ) -> Result<UserAccount, Error> {
        user.require_auth();

        if AccountStore::exists(env, user) {
            return Err(Error::AlreadyRegistered);
        }
        if AccountStore::email_taken(env, &email) {
            return Err(Error::EmailTaken);
        }

        let config = AdminModule::get_config(env);
        let draft = AccountDraft {
            id: user.clone(),
            name,
            email,
            referral_code: AccountStore::generate_referral_code(env)?,
        };

        let registration = RewardLedger::register(
            env,
            draft,
            referral_code,
            &StoredPopulation::new(env),
            &config,
            env.ledger().timestamp(),
        )?;
        let account = registration.account;

        if let Some(referrer) = &registration.referrer {
            AccountStore::save(env, referrer)?;
            events::referral_credited(
                env,
                ReferralCredited {
                    referrer: referrer.id.clone(),
                    referee: account.id.clone(),
                    referrer_bonus: config.referrer_bonus,
                    referee_bonus: referrer.referral_reward,
                },
            );
        }
        AccountStore::insert(env, &account)?;

        events::account_registered(
            env,
            AccountRegistered {
                account: account.id.clone(),
                ordinal: account.registration_ordinal,
                balance: account.balance,
                referred_by: account.referred_by.clone(),
            },
        );
        for achievement in account.achievements.iter() {
            events::achievement_unlocked(
                env,
                AchievementUnlocked {
                    account: account.id.clone(),
                    achievement,
                    balance: account.balance,
                },
            );
        }

        Ok(account)
    }

    pub fn claim_daily_bonus(env: &Env, user: &Address) -> Result<ClaimOutcome, Error> {
        user.require_auth();

        let account = AccountStore::get(env, user)?;
        let config = AdminModule::get_config(env);
        let now = env.ledger().timestamp();

        let (updated, outcome) = RewardLedger::claim_daily_bonus(&account, now, &config)?;
        match outcome {
            ClaimOutcome::Granted => AccountStore::save(env, &updated)?,
            ClaimOutcome::TooSoon => {
                log!(
                    env,
                    "daily bonus for {} available in {}s",
                    user.clone(),
                    RewardLedger::time_until_next_claim(&account, now, &config)
                );
            }
            ClaimOutcome::ClockRollback => {
                log!(env, "clock rollback for {}: now {} is before last claim", user.clone(), now);
            }
        }

        events::daily_bonus(
            env,
            DailyBonusClaimed {
                account: user.clone(),
                outcome,
                balance: updated.balance,
                timestamp: now,
            },
        );

        Ok(outcome)
    }

    pub fn complete_lesson(env: &Env, user: &Address, course_id: &String) -> Result<LessonReport, Error> {
        user.require_auth();

        let course = AdminModule::get_course(env, course_id)?;
        let account = AccountStore::get(env, user)?;
        let config = AdminModule::get_config(env);

        let (updated, outcome) =
            CourseProgressTracker::complete_lesson(env, &account, course_id, course.lessons, &config)?;

        let seeker = Symbol::new(env, KNOWLEDGE_SEEKER);
        let achievement_unlocked = !account.has_achievement(&seeker) && updated.has_achievement(&seeker);
        let progress = updated.lessons_completed(course_id);

        if outcome == LessonOutcome::Advanced {
            AccountStore::save(env, &updated)?;
            events::lesson_completed(
                env,
                LessonCompleted {
                    account: user.clone(),
                    course_id: course_id.clone(),
                    progress,
                    total_lessons: course.lessons,
                },
            );
        }
        if achievement_unlocked {
            events::achievement_unlocked(
                env,
                AchievementUnlocked {
                    account: user.clone(),
                    achievement: seeker,
                    balance: updated.balance,
                },
            );
        }

        Ok(LessonReport {
            outcome,
            progress,
            total_lessons: course.lessons,
            achievement_unlocked,
        })
    }

    pub fn restart_course(env: &Env, user: &Address, course_id: &String) -> Result<(), Error> {
        user.require_auth();

        AdminModule::get_course(env, course_id)?;
        let account = AccountStore::get(env, user)?;
        let updated = CourseProgressTracker::restart(&account, course_id)?;
        AccountStore::save(env, &updated)
    }

    pub fn is_achievement_unlocked(env: &Env, user: &Address, achievement: &Symbol) -> Result<bool, Error> {
        let account = AccountStore::get(env, user)?;
        let catalog = AchievementEvaluator::catalog(env);
        Ok(AchievementEvaluator::is_unlocked(&account, achievement, &catalog))
    }

    pub fn time_until_next_claim(env: &Env, user: &Address) -> Result<u64, Error> {
        let account = AccountStore::get(env, user)?;
        let config = AdminModule::get_config(env);
        Ok(RewardLedger::time_until_next_claim(
            &account,
            env.ledger().timestamp(),
            &config,
        ))
    }

    pub fn preview_referral_bonus(env: &Env, code: &String, email: &String) -> i128 {
        ReferralResolver::preview_bonus(code, email, &StoredPopulation::new(env))
    }
}
