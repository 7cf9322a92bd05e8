use crate::types::UserAccount;
use soroban_sdk::{String, Vec};

/// Read-only view over every existing account, as seen by a registration.
pub trait Population {
    /// Number of accounts created so far
    fn size(&self) -> u32;

    /// Accounts whose referral code equals `code` exactly
    fn with_referral_code(&self, code: &String) -> Vec<UserAccount>;
}

/// An in-memory snapshot, in creation order.
impl Population for Vec<UserAccount> {
    fn size(&self) -> u32 {
        self.len()
    }

    fn with_referral_code(&self, code: &String) -> Vec<UserAccount> {
        let mut matches = Vec::new(self.env());
        for account in self.iter() {
            if account.referral_code == *code {
                matches.push_back(account);
            }
        }
        matches
    }
}
