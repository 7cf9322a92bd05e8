use soroban_sdk::{contracterror, contracttype, Address, Env, Map, String, Symbol, Vec};

/// Account record owned by the reward ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserAccount {
    pub id: Address,                        // Account id, also the signing credential
    pub name: String,
    pub email: String,
    pub balance: i128,                      // Never decremented by the engine
    pub referral_code: String,              // Unique, immutable
    pub referral_reward: i128,              // Paid to a new account that uses this code
    pub referred_by: Option<Address>,       // Set only at creation
    pub achievements: Vec<Symbol>,          // Append-only
    pub last_daily_claim: Option<u64>,      // None means never claimed
    pub course_progress: Map<String, u32>,  // course id -> completed lessons
    pub registration_ordinal: u32,          // Position in creation order (0-based)
    pub created_at: u64,
}

impl UserAccount {
    /// Build a fresh zero-balance account from a registration draft.
    pub fn from_draft(env: &Env, draft: AccountDraft, ordinal: u32, config: &RewardConfig, now: u64) -> Self {
        UserAccount {
            id: draft.id,
            name: draft.name,
            email: draft.email,
            balance: 0,
            referral_code: draft.referral_code,
            referral_reward: config.default_referral_reward,
            referred_by: None,
            achievements: Vec::new(env),
            last_daily_claim: None,
            course_progress: Map::new(env),
            registration_ordinal: ordinal,
            created_at: now,
        }
    }

    pub fn has_achievement(&self, achievement: &Symbol) -> bool {
        self.achievements.contains(achievement)
    }

    pub fn lessons_completed(&self, course_id: &String) -> u32 {
        self.course_progress.get(course_id.clone()).unwrap_or(0)
    }
}

/// Registration input: everything a new account has before bonuses are applied
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountDraft {
    pub id: Address,
    pub name: String,
    pub email: String,
    pub referral_code: String, // Freshly generated, must not collide
}

/// Pre-populated record inserted by an administrator, bypassing bonus rules
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountImport {
    pub id: Address,
    pub name: String,
    pub email: String,
    pub balance: i128,
    pub referral_code: Option<String>,  // Generated when absent
    pub referral_reward: Option<i128>,  // Config default when absent
    pub achievements: Vec<Symbol>,
}

/// Result of a registration: the new account plus the credited referrer, if any
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    pub account: UserAccount,
    pub referrer: Option<UserAccount>,
}

/// Outcome of a daily bonus claim
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimOutcome {
    Granted,
    TooSoon,
    ClockRollback, // Stored claim time is ahead of `now`
}

/// Outcome of a lesson completion
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LessonOutcome {
    Advanced,
    AlreadyComplete,
}

/// What the caller learns after completing a lesson
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LessonReport {
    pub outcome: LessonOutcome,
    pub progress: u32,
    pub total_lessons: u32,
    pub achievement_unlocked: bool,
}

/// Course catalog entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub lessons: u32,
    pub price: i128, // 0 for free courses
}

/// How an achievement becomes unlocked
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnlockRule {
    Explicit,         // Granted by an event and stored on the account
    Threshold(i128),  // Derived on read from the balance
}

/// Static achievement catalog entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Achievement {
    pub id: Symbol,
    pub rule: UnlockRule,
}

/// Balance-derived ranks
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Rank {
    Hamster = 0,
    Hodler = 1,
    Trader = 2,
    Whale = 3,
}

/// Tunable amounts and limits of the reward rules
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardConfig {
    pub early_adopter_limit: u32,     // First N accounts get the early adopter bonus
    pub early_adopter_bonus: i128,
    pub referrer_bonus: i128,         // Paid to the owner of a used referral code
    pub default_referral_reward: i128,
    pub daily_bonus: i128,
    pub claim_interval: u64,          // Seconds between daily claims
    pub course_completion_bonus: i128,
    pub intro_course: String,         // Free course whose completion pays the bonus
}

impl RewardConfig {
    pub fn default(env: &Env) -> Self {
        RewardConfig {
            early_adopter_limit: 1000,
            early_adopter_bonus: 1000,
            referrer_bonus: 25,
            default_referral_reward: 10,
            daily_bonus: 5,
            claim_interval: 24 * 60 * 60,
            course_completion_bonus: 1000,
            intro_course: String::from_str(env, "1"),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.early_adopter_bonus >= 0
            && self.referrer_bonus >= 0
            && self.default_referral_reward >= 0
            && self.daily_bonus >= 0
            && self.course_completion_bonus >= 0
            && self.claim_interval > 0
            && self.intro_course.len() > 0
    }
}

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,                  // Contract administrator
    Config,                 // RewardConfig
    TotalUsers,             // Accounts ever created
    Account(Address),       // UserAccount
    ReferralCode(String),   // referral code -> account id
    Email(String),          // email -> account id
    Course(String),         // Course
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,           // Contract not initialized
    AlreadyInitialized = 2,       // Contract already setup
    UserNotFound = 3,             // Account doesn't exist
    AlreadyRegistered = 4,        // Account id already in use
    EmailTaken = 5,               // Email already on file
    ReferralCodeTaken = 6,        // Referral code collides with an existing one
    InvalidInput = 7,             // Malformed request
    InvalidAmount = 8,            // Negative or zero amount where not allowed
    CourseNotFound = 9,           // Unknown course id
    AchievementNotFound = 10,     // Not in the catalog
    AchievementNotGrantable = 11, // Threshold achievements cannot be granted
    InvalidConfig = 12,           // Rejected configuration
    BalanceOverflow = 13,         // Balance arithmetic overflowed
}
