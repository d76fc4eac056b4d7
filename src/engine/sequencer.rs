use crate::engine::perturbation::{perturb, RandomSource};
use crate::model::session::Session;

pub const GREETING: &str =
    "Hi I am Naavi, your personal coach and navigator for higher education...😊";

pub const COMPLETION_NOTICE: &str =
    "Thank you for providing the information. Please ask for your pathway to proceed.";

pub const QUESTIONS: &[&str] = &[
    "Can you briefly describe your current academic journey, including any notable achievements?",
    "Are there specific fields of study or professions you are passionate about? Where do you see yourself in five years, academically or professionally?",
    "What extracurricular activities or hobbies do you enjoy that align with your academic interests?",
    "What educational resources or materials do you regularly use?",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Question(&'static str),
    Complete,
}

/// Fixed ordered question catalog.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSequencer {
    catalog: &'static [&'static str],
}

impl Default for QuestionSequencer {
    fn default() -> Self {
        Self::new(QUESTIONS)
    }
}

impl QuestionSequencer {
    pub fn new(catalog: &'static [&'static str]) -> Self {
        Self { catalog }
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn is_complete(&self, session: &Session) -> bool {
        session.is_complete(self.len())
    }

    /// Records one submitted answer and moves the session forward.
    ///
    /// The submission made at index 0 is the empty opener that fetches the
    /// first question, so it is perturbed but never stored. Every later
    /// submission is stored, including the one that arrives after the last
    /// question has been handed out.
    pub fn advance(
        &self,
        session: &mut Session,
        raw_input: &str,
        p: f64,
        rng: &mut dyn RandomSource,
    ) -> Turn {
        let perturbed = perturb(raw_input, p, rng);

        if session.question_index > 0 {
            session.responses.push(perturbed);
        }

        match self.catalog.get(session.question_index) {
            Some(question) => {
                session.question_index += 1;
                Turn::Question(*question)
            }
            None => {
                session.question_index = self.len();
                Turn::Complete
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::perturbation::RngSource;

    #[test]
    fn first_submission_is_not_recorded() {
        let seq = QuestionSequencer::default();
        let mut session = Session::default();
        let mut rng = RngSource::seeded(0);

        let turn = seq.advance(&mut session, "", 0.5, &mut rng);

        assert_eq!(turn, Turn::Question(QUESTIONS[0]));
        assert_eq!(session.question_index, 1);
        assert!(session.responses.is_empty());
    }

    #[test]
    fn catalog_length_calls_reach_completion_once() {
        let seq = QuestionSequencer::default();
        let mut session = Session::default();
        let mut rng = RngSource::seeded(11);

        let mut transitions = 0;
        for i in 0..seq.len() {
            let was_complete = seq.is_complete(&session);
            let turn = seq.advance(&mut session, "an answer", 0.5, &mut rng);
            assert_eq!(turn, Turn::Question(QUESTIONS[i]));
            if !was_complete && seq.is_complete(&session) {
                transitions += 1;
            }
        }

        assert_eq!(transitions, 1);
        assert!(seq.is_complete(&session));
        assert_eq!(session.responses.len(), seq.len() - 1);
    }

    #[test]
    fn submissions_past_the_end_signal_completion_and_keep_index() {
        let seq = QuestionSequencer::default();
        let mut session = Session::default();
        let mut rng = RngSource::seeded(5);

        for _ in 0..seq.len() {
            seq.advance(&mut session, "x", 0.0, &mut rng);
        }
        assert_eq!(seq.advance(&mut session, "last answer", 0.0, &mut rng), Turn::Complete);
        assert_eq!(seq.advance(&mut session, "again", 0.0, &mut rng), Turn::Complete);

        assert_eq!(session.question_index, seq.len());
        assert_eq!(session.responses.last().map(String::as_str), Some("again"));
    }

    #[test]
    fn out_of_range_index_is_terminal() {
        let seq = QuestionSequencer::default();
        let mut session = Session {
            question_index: 99,
            responses: Vec::new(),
        };
        let mut rng = RngSource::seeded(2);

        assert_eq!(seq.advance(&mut session, "late", 0.0, &mut rng), Turn::Complete);
        assert_eq!(session.question_index, seq.len());
    }

    #[test]
    fn empty_input_still_advances() {
        let seq = QuestionSequencer::default();
        let mut session = Session {
            question_index: 1,
            responses: Vec::new(),
        };
        let mut rng = RngSource::seeded(3);

        let turn = seq.advance(&mut session, "   ", 0.5, &mut rng);

        assert_eq!(turn, Turn::Question(QUESTIONS[1]));
        assert_eq!(session.responses, vec![String::new()]);
    }

    #[test]
    fn stored_answers_are_perturbed_text() {
        let seq = QuestionSequencer::default();
        let mut session = Session {
            question_index: 1,
            responses: Vec::new(),
        };
        let mut rng = RngSource::seeded(8);

        seq.advance(&mut session, "robotics   club\tcaptain", 1.0, &mut rng);

        let stored = &session.responses[0];
        assert_eq!(stored.split_whitespace().count(), 3);
        assert_ne!(stored, "robotics   club\tcaptain");
    }
}
