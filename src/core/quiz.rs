//! # Quiz
//!
//! Linear run through a fixed list of questions. Each answer scores (or not)
//! and always advances; there is no going back.
//!
//! ```text
//! InProgress { index: 0, score: 0 }
//!        │ answer(option)          score += option.correct
//!        ▼                         index += 1
//! InProgress { index: i, score: s }
//!        │ answer on the last question
//!        ▼
//! Completed { final_score }
//! ```
//!
//! Invariants: `index < total` while in progress, `score <= total` always.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<QuizOption>,
    pub fun_fact: String,
}

impl QuizQuestion {
    /// Index of the first correct option, if the question has one.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }
}

/// `(prompt, options (text, correct), fun fact)`
type QuestionSpec = (&'static str, [(&'static str, bool); 4], &'static str);

const SPORTS_QUESTIONS: [QuestionSpec; 5] = [
    (
        "Which sport is known as 'The Beautiful Game'?",
        [("Basketball", false), ("Soccer", true), ("Tennis", false), ("Cricket", false)],
        "Soccer is called 'The Beautiful Game' because of its fluid, artistic nature and global appeal!",
    ),
    (
        "In which sport would you perform a 'slam dunk'?",
        [("Volleyball", false), ("Basketball", true), ("Tennis", false), ("Swimming", false)],
        "The first slam dunk was performed by Joe Fortenberry in 1936!",
    ),
    (
        "Which sport uses a 'shuttlecock'?",
        [("Badminton", true), ("Tennis", false), ("Squash", false), ("Table Tennis", false)],
        "A shuttlecock can reach speeds of up to 200 mph in professional badminton!",
    ),
    (
        "What is the maximum number of players on a volleyball court?",
        [("4 players", false), ("6 players", true), ("8 players", false), ("10 players", false)],
        "Volleyball was invented in 1895 by William G. Morgan!",
    ),
    (
        "Which sport is played on the largest field?",
        [("Soccer", false), ("Cricket", true), ("Rugby", false), ("American Football", false)],
        "A cricket field can be up to 150 meters in diameter!",
    ),
];

/// The built-in sports question bank.
pub fn sports_questions() -> Vec<QuizQuestion> {
    SPORTS_QUESTIONS
        .iter()
        .map(|(prompt, options, fun_fact)| QuizQuestion {
            prompt: prompt.to_string(),
            options: options
                .iter()
                .map(|(text, correct)| QuizOption {
                    text: text.to_string(),
                    correct: *correct,
                })
                .collect(),
            fun_fact: fun_fact.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress { index: usize, score: usize },
    Completed { final_score: usize },
}

/// Outcome of a single answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    Next { correct: bool },
    Completed { correct: bool, final_score: usize },
}

impl QuizStep {
    pub fn was_correct(self) -> bool {
        match self {
            QuizStep::Next { correct } | QuizStep::Completed { correct, .. } => correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    NoQuestions,
    InvalidOption { option: usize, available: usize },
    AlreadyCompleted,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NoQuestions => write!(f, "quiz has no questions"),
            QuizError::InvalidOption { option, available } => {
                write!(f, "option {option} out of range ({available} available)")
            }
            QuizError::AlreadyCompleted => write!(f, "quiz already completed"),
        }
    }
}

impl std::error::Error for QuizError {}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            questions,
            state: QuizState::InProgress { index: 0, score: 0 },
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::InProgress { score, .. } => score,
            QuizState::Completed { final_score } => final_score,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    /// The question waiting for an answer; `None` once completed.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress { index, .. } => self.questions.get(index),
            QuizState::Completed { .. } => None,
        }
    }

    /// Fraction of the quiz reached, counting the question on screen.
    pub fn progress(&self) -> f64 {
        let reached = match self.state {
            QuizState::InProgress { index, .. } => index + 1,
            QuizState::Completed { .. } => self.total(),
        };
        reached as f64 / self.total() as f64
    }

    /// Submits the option at `option` for the current question.
    ///
    /// Rejected submissions leave the session untouched.
    pub fn answer(&mut self, option: usize) -> Result<QuizStep, QuizError> {
        let QuizState::InProgress { index, score } = self.state else {
            return Err(QuizError::AlreadyCompleted);
        };
        let question = &self.questions[index];
        let chosen = question.options.get(option).ok_or(QuizError::InvalidOption {
            option,
            available: question.options.len(),
        })?;

        let correct = chosen.correct;
        let score = score + usize::from(correct);
        let next = index + 1;

        if next >= self.questions.len() {
            self.state = QuizState::Completed { final_score: score };
            Ok(QuizStep::Completed {
                correct,
                final_score: score,
            })
        } else {
            self.state = QuizState::InProgress { index: next, score };
            Ok(QuizStep::Next { correct })
        }
    }
}

/// The answer currently being revealed: which option was picked and the fun fact to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerReveal {
    pub question: usize,
    pub chosen: usize,
    pub step: QuizStep,
}

/// A quiz in progress on screen: the session plus the pending answer reveal.
///
/// While a reveal is showing, further answers are refused until the player continues.
#[derive(Debug, Clone)]
pub struct QuizRun {
    pub session: QuizSession,
    pub reveal: Option<AnswerReveal>,
}

impl QuizRun {
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            reveal: None,
        }
    }

    /// Question on screen, which during a reveal is the one just answered.
    pub fn displayed_question(&self) -> Option<(usize, &QuizQuestion)> {
        match (&self.reveal, self.session.state()) {
            (Some(reveal), _) => self
                .session
                .questions()
                .get(reveal.question)
                .map(|q| (reveal.question, q)),
            (None, QuizState::InProgress { index, .. }) => {
                self.session.questions().get(index).map(|q| (index, q))
            }
            (None, QuizState::Completed { .. }) => None,
        }
    }

    /// Answers the current question and starts the reveal. Ignored while a reveal is showing.
    pub fn choose(&mut self, option: usize) -> Result<Option<QuizStep>, QuizError> {
        if self.reveal.is_some() {
            return Ok(None);
        }
        let question = match self.session.state() {
            QuizState::InProgress { index, .. } => index,
            QuizState::Completed { .. } => return Err(QuizError::AlreadyCompleted),
        };
        let step = self.session.answer(option)?;
        self.reveal = Some(AnswerReveal {
            question,
            chosen: option,
            step,
        });
        Ok(Some(step))
    }

    /// Ends the reveal. Returns the final score when that was the last question.
    pub fn continue_after_reveal(&mut self) -> Option<usize> {
        match self.reveal.take()?.step {
            QuizStep::Completed { final_score, .. } => Some(final_score),
            QuizStep::Next { .. } => None,
        }
    }
}

/// Result banner picked from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Master,
    Enthusiast,
    Rookie,
}

impl ResultTier {
    pub fn for_score(score: usize) -> Self {
        if score >= 4 {
            ResultTier::Master
        } else if score >= 2 {
            ResultTier::Enthusiast
        } else {
            ResultTier::Rookie
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ResultTier::Master => "Sports Master!",
            ResultTier::Enthusiast => "Sports Enthusiast!",
            ResultTier::Rookie => "Sports Rookie!",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResultTier::Master => {
                "Wow! You're a true sports encyclopedia! Your knowledge is impressive!"
            }
            ResultTier::Enthusiast => {
                "Great job! You know your sports well. Keep learning and you'll be a master soon!"
            }
            ResultTier::Rookie => {
                "You're just starting your sports journey. Keep exploring and learning!"
            }
        }
    }
}
