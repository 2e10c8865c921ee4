//! True/false quiz engine.
//!
//! Each question pairs a randomly chosen term with either its own definition
//! or a decoy borrowed from another entry. The truthfulness of the statement
//! is fixed when the question is built, and grading compares the judgment
//! against that flag only.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::QuizError;
use crate::model::{eq_ignore_case, Entry};

/// A statement presented to the user for a true/false judgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// 1-based position in the run.
    pub number: usize,
    /// Total questions in the run.
    pub total: usize,
    /// The anchor term.
    pub term: String,
    /// Workbook of the anchor entry.
    pub workbook: String,
    /// Definition shown alongside the term (real or decoy).
    pub shown_definition: String,
    /// The anchor's real definition, revealed after grading.
    correct_definition: String,
    /// Whether `shown_definition` belongs to `term`.
    truthful: bool,
}

impl Question {
    /// Authoritative truthfulness of the statement.
    pub fn is_truthful(&self) -> bool {
        self.truthful
    }
}

/// Outcome of a single judged question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub number: usize,
    pub term: String,
    /// The judgment that was submitted.
    pub judgment: bool,
    /// Whether the statement was actually true.
    pub truthful: bool,
    pub correct: bool,
    /// The anchor's real definition, always revealed.
    pub correct_definition: String,
    /// Running score after this question.
    pub score: usize,
}

/// Score of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
}

impl QuizScore {
    /// Score as a whole-number percentage (floored).
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.score * 100 / self.total
        }
    }
}

/// Source of true/false judgments for a quiz run.
pub trait JudgmentProvider {
    /// Return `true` if the user judges the statement correct.
    fn judge(&mut self, question: &Question) -> bool;

    /// Called after each question is graded.
    fn on_graded(&mut self, _grade: &Grade) {}
}

impl<F> JudgmentProvider for F
where
    F: FnMut(&Question) -> bool,
{
    fn judge(&mut self, question: &Question) -> bool {
        self(question)
    }
}

/// An in-progress quiz over a pool of entries.
///
/// Questions must be taken one at a time: [`next_question`](Self::next_question)
/// then [`submit`](Self::submit).
pub struct QuizSession<'a, R> {
    pool: &'a [Entry],
    total: usize,
    asked: usize,
    score: usize,
    pending: Option<Question>,
    rng: R,
}

impl<'a, R: Rng> QuizSession<'a, R> {
    /// Start a session of `question_count` questions over `pool`.
    pub fn new(pool: &'a [Entry], question_count: usize, rng: R) -> Result<Self, QuizError> {
        if pool.is_empty() {
            return Err(QuizError::EmptyPool);
        }
        if question_count == 0 {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            pool,
            total: question_count,
            asked: 0,
            score: 0,
            pending: None,
            rng,
        })
    }

    /// Build and return the next question, or `None` when the run is complete.
    pub fn next_question(&mut self) -> Result<Option<&Question>, QuizError> {
        if self.pending.is_some() {
            return Err(QuizError::AwaitingJudgment);
        }
        if self.is_complete() {
            return Ok(None);
        }
        self.asked += 1;
        let question = build_question(self.pool, self.asked, self.total, &mut self.rng);
        Ok(Some(&*self.pending.insert(question)))
    }

    /// Grade the pending question against `judgment`.
    pub fn submit(&mut self, judgment: bool) -> Result<Grade, QuizError> {
        let question = self.pending.take().ok_or(QuizError::NoPendingQuestion)?;
        let correct = judgment == question.truthful;
        if correct {
            self.score += 1;
        }
        Ok(Grade {
            number: question.number,
            term: question.term,
            judgment,
            truthful: question.truthful,
            correct,
            correct_definition: question.correct_definition,
            score: self.score,
        })
    }

    /// The question awaiting a judgment, if any.
    pub fn pending(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.asked >= self.total && self.pending.is_none()
    }

    /// Running score (final once the session is complete).
    pub fn score(&self) -> QuizScore {
        QuizScore {
            score: self.score,
            total: self.total,
        }
    }
}

/// Run a full quiz, asking `judge` for every question.
pub fn run_quiz<R, J>(
    pool: &[Entry],
    question_count: usize,
    rng: &mut R,
    judge: &mut J,
) -> Result<QuizScore, QuizError>
where
    R: Rng,
    J: JudgmentProvider + ?Sized,
{
    let mut session = QuizSession::new(pool, question_count, rng)?;
    while let Some(question) = session.next_question()? {
        let judgment = judge.judge(question);
        let grade = session.submit(judgment)?;
        judge.on_graded(&grade);
    }
    let score = session.score();
    tracing::debug!("quiz finished: {}/{}", score.score, score.total);
    Ok(score)
}

fn build_question<R: Rng + ?Sized>(
    pool: &[Entry],
    number: usize,
    total: usize,
    rng: &mut R,
) -> Question {
    let anchor = &pool[rng.gen_range(0..pool.len())];
    let want_truth = pool.len() == 1 || rng.gen_bool(0.5);

    let decoy = if want_truth {
        None
    } else {
        pick_decoy(pool, anchor, rng)
    };

    let (shown_definition, truthful) = match decoy {
        Some(d) => (d.definition.clone(), false),
        None => (anchor.definition.clone(), true),
    };

    Question {
        number,
        total,
        term: anchor.term.clone(),
        workbook: anchor.workbook.clone(),
        shown_definition,
        correct_definition: anchor.definition.clone(),
        truthful,
    }
}

/// Uniformly pick an entry whose definition and term both differ from the
/// anchor's. `None` when no such entry exists.
fn pick_decoy<'a, R: Rng + ?Sized>(
    pool: &'a [Entry],
    anchor: &Entry,
    rng: &mut R,
) -> Option<&'a Entry> {
    let candidates: Vec<&Entry> = pool
        .iter()
        .filter(|e| {
            !eq_ignore_case(&e.definition, &anchor.definition)
                && !eq_ignore_case(&e.term, &anchor.term)
        })
        .collect();
    if candidates.is_empty() {
        tracing::debug!("no decoy for '{}', asking a true statement", anchor.term);
    }
    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<Entry> {
        vec![
            Entry::new("Java", "JVM", "Runs bytecode", ""),
            Entry::new("Java", "JIT", "Compiles hot code", ""),
        ]
    }

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn rejects_empty_pool_and_zero_questions() {
        assert_eq!(
            QuizSession::new(&[], 3, rng(1)).err(),
            Some(QuizError::EmptyPool)
        );
        assert_eq!(
            QuizSession::new(&pool(), 0, rng(1)).err(),
            Some(QuizError::NoQuestions)
        );
    }

    #[test]
    fn always_true_scores_truthful_questions() {
        let pool = pool();
        let mut truthful = 0;
        let mut judge = |q: &Question| {
            if q.is_truthful() {
                truthful += 1;
            }
            true
        };
        let score = run_quiz(&pool, 100, &mut rng(42), &mut judge).unwrap();
        assert_eq!(score.total, 100);
        assert_eq!(score.score, truthful);
        // A fair coin over 100 flips lands well inside this range.
        assert!(truthful > 20 && truthful < 80, "truthful = {truthful}");
    }

    #[test]
    fn statements_match_truthfulness() {
        let pool = pool();
        let mut session = QuizSession::new(&pool, 50, rng(3)).unwrap();
        while let Some(q) = session.next_question().unwrap() {
            let anchor = pool.iter().find(|e| e.term == q.term).unwrap();
            if q.is_truthful() {
                assert_eq!(q.shown_definition, anchor.definition);
            } else {
                assert_ne!(q.shown_definition, anchor.definition);
            }
            let truthful = q.is_truthful();
            session.submit(truthful).unwrap();
        }
        assert_eq!(session.score(), QuizScore { score: 50, total: 50 });
    }

    #[test]
    fn grading_uses_flag_not_text() {
        // Two terms share a definition in different case; decoys must skip it,
        // and a truthful statement is graded true even though the text matches
        // another entry too.
        let pool = vec![
            Entry::new("Java", "JVM", "Runs bytecode", ""),
            Entry::new("Kotlin", "KVM", "runs BYTECODE", ""),
            Entry::new("Java", "GC", "Frees memory", ""),
        ];
        let mut session = QuizSession::new(&pool, 200, rng(9)).unwrap();
        while let Some(q) = session.next_question().unwrap() {
            let truthful = q.is_truthful();
            if !truthful && q.term != "GC" {
                assert_eq!(q.shown_definition, "Frees memory");
            }
            let grade = session.submit(!truthful).unwrap();
            assert!(!grade.correct);
            assert_eq!(grade.truthful, truthful);
        }
        assert_eq!(session.score().score, 0);
    }

    #[test]
    fn single_entry_is_always_true() {
        let pool = vec![Entry::new("Java", "JVM", "Runs bytecode", "")];
        let mut judge = |q: &Question| {
            assert!(q.is_truthful());
            true
        };
        let score = run_quiz(&pool, 1, &mut rng(5), &mut judge).unwrap();
        assert_eq!(score, QuizScore { score: 1, total: 1 });

        let score = run_quiz(&pool, 10, &mut rng(6), &mut judge).unwrap();
        assert_eq!(score.score, 10);
    }

    #[test]
    fn identical_definitions_fall_back_to_true() {
        let pool = vec![
            Entry::new("A", "one", "same", ""),
            Entry::new("A", "two", "SAME", ""),
            Entry::new("B", "three", "same", ""),
        ];
        let mut judge = |q: &Question| q.is_truthful();
        let mut all_true = true;
        let mut session = QuizSession::new(&pool, 30, rng(11)).unwrap();
        while let Some(q) = session.next_question().unwrap() {
            all_true &= q.is_truthful();
            let j = judge.judge(q);
            session.submit(j).unwrap();
        }
        assert!(all_true);
    }

    #[test]
    fn grade_reveals_real_definition() {
        let pool = pool();
        let mut session = QuizSession::new(&pool, 20, rng(8)).unwrap();
        while let Some(q) = session.next_question().unwrap() {
            let term = q.term.clone();
            let grade = session.submit(false).unwrap();
            let anchor = pool.iter().find(|e| e.term == term).unwrap();
            assert_eq!(grade.correct_definition, anchor.definition);
            assert_eq!(grade.correct, !grade.truthful);
        }
    }

    #[test]
    fn enforces_question_order() {
        let pool = pool();
        let mut session = QuizSession::new(&pool, 1, rng(2)).unwrap();
        assert_eq!(session.submit(true), Err(QuizError::NoPendingQuestion));

        assert!(session.next_question().unwrap().is_some());
        assert_eq!(session.next_question().err(), Some(QuizError::AwaitingJudgment));
        assert!(session.pending().is_some());
        assert!(!session.is_complete());

        session.submit(true).unwrap();
        assert!(session.is_complete());
        assert_eq!(session.next_question().unwrap(), None);
        assert_eq!(session.submit(true), Err(QuizError::NoPendingQuestion));
    }

    #[test]
    fn running_score_in_grades() {
        let pool = pool();
        let mut scores = Vec::new();
        struct Recorder<'a>(&'a mut Vec<usize>);
        impl JudgmentProvider for Recorder<'_> {
            fn judge(&mut self, question: &Question) -> bool {
                question.is_truthful()
            }
            fn on_graded(&mut self, grade: &Grade) {
                self.0.push(grade.score);
            }
        }
        let score = run_quiz(&pool, 4, &mut rng(4), &mut Recorder(&mut scores)).unwrap();
        assert_eq!(scores, vec![1, 2, 3, 4]);
        assert_eq!(score.percent(), 100);
    }

    #[test]
    fn same_seed_same_questions() {
        let pool = pool();
        let collect = |seed| {
            let mut shown = Vec::new();
            let mut judge = |q: &Question| {
                shown.push((q.term.clone(), q.shown_definition.clone()));
                true
            };
            run_quiz(&pool, 10, &mut rng(seed), &mut judge).unwrap();
            shown
        };
        assert_eq!(collect(17), collect(17));
    }

    #[test]
    fn percent_floors() {
        assert_eq!(QuizScore { score: 2, total: 3 }.percent(), 66);
        assert_eq!(QuizScore { score: 0, total: 0 }.percent(), 0);
    }
}
