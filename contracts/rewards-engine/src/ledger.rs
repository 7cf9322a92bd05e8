use crate::achievements::{AchievementEvaluator, EARLY_ADOPTER};
use crate::population::Population;
use crate::referral::ReferralResolver;
use crate::types::{AccountDraft, ClaimOutcome, Error, Registration, RewardConfig, UserAccount};
use soroban_sdk::{Env, String, Symbol};

/// Balance-changing rules. Every function takes the current record and
/// returns a replacement; nothing here touches storage or reads the clock.
pub struct RewardLedger;

impl RewardLedger {
    /// Finalize a new account: early adopter bonus first, then the referral
    /// credit to both sides. The referrer is returned so the caller persists
    /// both records together.
    pub fn register<P: Population>(
        env: &Env,
        draft: AccountDraft,
        referral_code: Option<String>,
        population: &P,
        config: &RewardConfig,
        now: u64,
    ) -> Result<Registration, Error> {
        if draft.name.len() == 0 || draft.email.len() == 0 || draft.referral_code.len() == 0 {
            return Err(Error::InvalidInput);
        }
        if population.with_referral_code(&draft.referral_code).len() > 0 {
            return Err(Error::ReferralCodeTaken);
        }

        let ordinal = population.size();
        let mut account = UserAccount::from_draft(env, draft, ordinal, config, now);

        if ordinal < config.early_adopter_limit
            && AchievementEvaluator::grant(&mut account, &Symbol::new(env, EARLY_ADOPTER))
        {
            Self::credit(&mut account, config.early_adopter_bonus)?;
        }

        let mut referrer = None;
        if let Some(code) = referral_code {
            if let Some(mut owner) = ReferralResolver::resolve(&code, &account.email, population) {
                Self::credit(&mut account, owner.referral_reward)?;
                Self::credit(&mut owner, config.referrer_bonus)?;
                account.referred_by = Some(owner.id.clone());
                referrer = Some(owner);
            }
        }

        Ok(Registration { account, referrer })
    }

    /// Grant the daily bonus at most once per `claim_interval`. A stored
    /// claim time later than `now` means the clock went backwards and the
    /// claim is refused without touching the record.
    pub fn claim_daily_bonus(
        account: &UserAccount,
        now: u64,
        config: &RewardConfig,
    ) -> Result<(UserAccount, ClaimOutcome), Error> {
        if let Some(last_claim) = account.last_daily_claim {
            if last_claim > now {
                return Ok((account.clone(), ClaimOutcome::ClockRollback));
            }
            if now - last_claim < config.claim_interval {
                return Ok((account.clone(), ClaimOutcome::TooSoon));
            }
        }

        let mut updated = account.clone();
        Self::credit(&mut updated, config.daily_bonus)?;
        updated.last_daily_claim = Some(now);
        Ok((updated, ClaimOutcome::Granted))
    }

    /// Seconds left before the next claim can be granted, 0 when available
    pub fn time_until_next_claim(account: &UserAccount, now: u64, config: &RewardConfig) -> u64 {
        match account.last_daily_claim {
            None => 0,
            Some(last_claim) => last_claim
                .saturating_add(config.claim_interval)
                .saturating_sub(now),
        }
    }

    /// Add points; balances only ever grow
    pub fn credit(account: &mut UserAccount, amount: i128) -> Result<(), Error> {
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(Error::BalanceOverflow)?;
        Ok(())
    }
}
