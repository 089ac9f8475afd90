pub mod console;
pub mod question;
pub mod sample;

use std::collections::BTreeSet;
use std::io::{BufRead, Write};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::dataset::{Fact, FactStore};
use crate::error::QuizError;

pub use console::Console;
pub use question::{Question, Variant};
use sample::sample_incorrect;

/// Letters run `a..=z`, so a question can show at most this many choices.
pub const MAX_CHOICES: usize = 26;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

/// One interactive quiz session over the facts of a single topic.
pub struct Quiz<S, R> {
    store: S,
    class_name: String,
    num_choices: usize,
    rng: R,
    counter: usize,
    facts: Option<Vec<Fact>>,
}

impl<S: FactStore, R: Rng> Quiz<S, R> {
    pub fn new(
        store: S,
        class_name: impl Into<String>,
        num_choices: usize,
        rng: R,
    ) -> Result<Self, QuizError> {
        if !(1..=MAX_CHOICES).contains(&num_choices) {
            return Err(QuizError::InvalidChoiceCount(num_choices));
        }
        Ok(Self {
            store,
            class_name: class_name.into(),
            num_choices,
            rng,
            counter: 1,
            facts: None,
        })
    }

    /// Facts for this topic, read from the store on first use and cached.
    ///
    /// Duplicates collapse into one entry; the cached snapshot is ordered so a
    /// seeded RNG reproduces the same quiz.
    pub fn facts(&mut self) -> Result<&[Fact], QuizError> {
        if self.facts.is_none() {
            let unique = self
                .store
                .facts_for_topic(&self.class_name)?
                .into_iter()
                .collect::<BTreeSet<_>>();
            log::debug!("cached {} facts for {:?}", unique.len(), self.class_name);
            self.facts = Some(unique.into_iter().collect());
        }
        Ok(self.facts.get_or_insert_with(Vec::new).as_slice())
    }

    /// One question per fact per variant, variant-major.
    pub fn generate(&mut self) -> Result<Vec<Question>, QuizError> {
        self.facts()?;
        let facts = self.facts.as_deref().unwrap_or_default();
        let rng = &mut self.rng;
        let num_incorrect = self.num_choices - 1;

        let mut questions = Vec::with_capacity(Variant::ALL.len() * facts.len());
        for variant in Variant::ALL {
            for (idx, fact) in facts.iter().enumerate() {
                let incorrect = sample_incorrect(&mut *rng, facts, idx, variant, num_incorrect)?;
                questions.push(Question::new(variant, fact.clone(), incorrect));
            }
        }

        log::debug!("generated {} questions", questions.len());
        Ok(questions)
    }

    pub fn ask<I: BufRead, O: Write>(
        &mut self,
        question: &Question,
        console: &mut Console<I, O>,
    ) -> Result<bool, QuizError> {
        let mut choices = question.choices();
        if choices.len() > MAX_CHOICES {
            return Err(QuizError::InvalidChoiceCount(choices.len()));
        }

        console.say(&format!("\nQuestion {}: {}\n", self.counter, question.ask()))?;
        self.counter += 1;

        choices.shuffle(&mut self.rng);

        let mut answer = question.answer().to_string();
        for (letter, choice) in ('a'..='z').zip(&choices) {
            if !question.full_answer() && choice == question.answer() {
                answer = letter.to_string();
            }
            console.say(&format!("  {}: {}", letter, choice))?;
        }

        let response = if question.full_answer() {
            console.prompt("\nAnswer (full keyword): ")?
        } else {
            console.prompt("\nAnswer (letter): ")?
        };

        let correct = response.to_lowercase() == answer.to_lowercase();
        log::debug!("response {:?}, expected {:?}: {}", response, answer, correct);
        if correct {
            console.say("Correct!")?;
        } else {
            console.say(&format!("Incorrect. Correct answer was {}", quoted(&answer)))?;
        }
        Ok(correct)
    }

    /// Runs the whole session and prints the final tally.
    ///
    /// Fails before the first question if the topic cannot fill every question
    /// with `num_choices` distinct choices. Facts sharing a keyword or value
    /// count once for that side, so a topic with exactly `num_choices` facts
    /// fails when two of them have the same value.
    pub fn start<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> Result<Score, QuizError> {
        let mut questions = self.generate()?;
        questions.shuffle(&mut self.rng);
        log::info!(
            "starting {:?} quiz: {} questions, {} choices each",
            self.class_name,
            questions.len(),
            self.num_choices
        );

        let mut score = 0;
        for question in &questions {
            if self.ask(question, console)? {
                score += 1;
            }
        }

        let score = Score {
            correct: score,
            total: questions.len(),
        };
        console.say(&format!(
            "\nQuiz complete. You scored {} / {} correct!",
            score.correct, score.total
        ))?;
        log::info!("quiz finished with {}/{}", score.correct, score.total);

        Ok(score)
    }
}

/// Quotes `s` the way Python's `repr` does, so `don't` prints as `"don't"`.
fn quoted(s: &str) -> String {
    let s = s.replace('\\', "\\\\");
    if s.contains('\'') && !s.contains('"') {
        format!("\"{}\"", s)
    } else {
        format!("'{}'", s.replace('\'', "\\'"))
    }
}
