use crate::population::Population;
use crate::types::{DataKey, Error, UserAccount};
use soroban_sdk::{Address, Env, String, Vec};

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 518_400;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
const PERSISTENT_BUMP_AMOUNT: u32 = 518_400;

const REFERRAL_CODE_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REFERRAL_CODE_LEN: usize = 6;
const REFERRAL_CODE_ATTEMPTS: u32 = 8;

/// Persistent account records plus the referral code and email indexes
pub struct AccountStore;

impl AccountStore {
    pub fn exists(env: &Env, id: &Address) -> bool {
        env.storage().persistent().has(&DataKey::Account(id.clone()))
    }

    pub fn get(env: &Env, id: &Address) -> Result<UserAccount, Error> {
        let key = DataKey::Account(id.clone());
        let account = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::UserNotFound)?;
        Self::bump(env, &key);
        Ok(account)
    }

    /// Store a brand-new account and index its code and email
    pub fn insert(env: &Env, account: &UserAccount) -> Result<(), Error> {
        if Self::exists(env, &account.id) {
            return Err(Error::AlreadyRegistered);
        }
        if Self::email_taken(env, &account.email) {
            return Err(Error::EmailTaken);
        }
        if Self::code_taken(env, &account.referral_code) {
            return Err(Error::ReferralCodeTaken);
        }

        let code_key = DataKey::ReferralCode(account.referral_code.clone());
        env.storage().persistent().set(&code_key, &account.id);
        Self::bump(env, &code_key);

        let email_key = DataKey::Email(account.email.clone());
        env.storage().persistent().set(&email_key, &account.id);
        Self::bump(env, &email_key);

        env.storage()
            .instance()
            .set(&DataKey::TotalUsers, &(Self::total_users(env) + 1));

        Self::save(env, account)
    }

    /// Replace an existing account record as a whole
    pub fn save(env: &Env, account: &UserAccount) -> Result<(), Error> {
        let key = DataKey::Account(account.id.clone());
        env.storage().persistent().set(&key, account);
        Self::bump(env, &key);
        Ok(())
    }

    pub fn total_users(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalUsers)
            .unwrap_or(0)
    }

    pub fn email_taken(env: &Env, email: &String) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Email(email.clone()))
    }

    pub fn code_taken(env: &Env, code: &String) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::ReferralCode(code.clone()))
    }

    pub fn find_by_referral_code(env: &Env, code: &String) -> Option<UserAccount> {
        let id: Address = env
            .storage()
            .persistent()
            .get(&DataKey::ReferralCode(code.clone()))?;
        Self::get(env, &id).ok()
    }

    /// Random upper-case base-36 code that no account uses yet
    pub fn generate_referral_code(env: &Env) -> Result<String, Error> {
        for _ in 0..REFERRAL_CODE_ATTEMPTS {
            let mut buf = [0u8; REFERRAL_CODE_LEN];
            for byte in buf.iter_mut() {
                let index: u64 = env.prng().gen_range(0..REFERRAL_CODE_ALPHABET.len() as u64);
                *byte = REFERRAL_CODE_ALPHABET[index as usize];
            }
            let code = String::from_bytes(env, &buf);
            if !Self::code_taken(env, &code) {
                return Ok(code);
            }
        }
        Err(Error::ReferralCodeTaken)
    }

    fn bump(env: &Env, key: &DataKey) {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}

/// The stored population, resolved through the indexes instead of a scan
pub struct StoredPopulation<'a> {
    env: &'a Env,
}

impl<'a> StoredPopulation<'a> {
    pub fn new(env: &'a Env) -> Self {
        StoredPopulation { env }
    }
}

impl Population for StoredPopulation<'_> {
    fn size(&self) -> u32 {
        AccountStore::total_users(self.env)
    }

    fn with_referral_code(&self, code: &String) -> Vec<UserAccount> {
        let mut matches = Vec::new(self.env);
        if let Some(account) = AccountStore::find_by_referral_code(self.env, code) {
            matches.push_back(account);
        }
        matches
    }
}
