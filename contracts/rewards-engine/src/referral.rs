use crate::population::Population;
use crate::types::UserAccount;
use soroban_sdk::String;

pub struct ReferralResolver;

impl ReferralResolver {
    /// Find the account that owns `code`, skipping any candidate that shares
    /// the registrant's email so an account can never refer itself.
    pub fn resolve<P: Population>(
        code: &String,
        registrant_email: &String,
        population: &P,
    ) -> Option<UserAccount> {
        if code.len() == 0 {
            return None;
        }

        population
            .with_referral_code(code)
            .iter()
            .find(|candidate| candidate.email != *registrant_email)
    }

    /// Points a registrant with `email` would receive for using `code`
    pub fn preview_bonus<P: Population>(code: &String, email: &String, population: &P) -> i128 {
        Self::resolve(code, email, population)
            .map(|referrer| referrer.referral_reward)
            .unwrap_or(0)
    }
}
