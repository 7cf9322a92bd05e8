use crate::achievements::{AchievementEvaluator, KNOWLEDGE_SEEKER};
use crate::ledger::RewardLedger;
use crate::types::{Error, LessonOutcome, RewardConfig, UserAccount};
use soroban_sdk::{Env, String, Symbol};

pub struct CourseProgressTracker;

impl CourseProgressTracker {
    /// Advance the course by one lesson, never past `total_lessons`.
    ///
    /// Reaching the last lesson unlocks `knowledge_seeker`; the intro course
    /// bonus is paid only together with that first unlock, so replaying a
    /// restarted course never pays twice.
    pub fn complete_lesson(
        env: &Env,
        account: &UserAccount,
        course_id: &String,
        total_lessons: u32,
        config: &RewardConfig,
    ) -> Result<(UserAccount, LessonOutcome), Error> {
        if total_lessons == 0 || course_id.len() == 0 {
            return Err(Error::InvalidInput);
        }

        let completed = account.lessons_completed(course_id);
        if completed >= total_lessons {
            return Ok((account.clone(), LessonOutcome::AlreadyComplete));
        }

        let mut updated = account.clone();
        let next = completed + 1;
        updated.course_progress.set(course_id.clone(), next);

        if next >= total_lessons
            && AchievementEvaluator::grant(&mut updated, &Symbol::new(env, KNOWLEDGE_SEEKER))
            && *course_id == config.intro_course
        {
            RewardLedger::credit(&mut updated, config.course_completion_bonus)?;
        }

        Ok((updated, LessonOutcome::Advanced))
    }

    /// Reset a course to zero lessons. Achievements stay.
    pub fn restart(account: &UserAccount, course_id: &String) -> Result<UserAccount, Error> {
        if course_id.len() == 0 {
            return Err(Error::InvalidInput);
        }
        let mut updated = account.clone();
        updated.course_progress.set(course_id.clone(), 0);
        Ok(updated)
    }
}
