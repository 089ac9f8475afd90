use crate::dataset::Fact;

/// Which side of a fact a question quizzes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Shows the value, expects the keyword typed out in full.
    GuessKeyword,
    /// Shows the keyword, expects the letter of the matching value.
    GuessValue,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::GuessKeyword, Variant::GuessValue];

    /// The part of `fact` that appears among the choices.
    pub fn aspect<'a>(&self, fact: &'a Fact) -> &'a str {
        match self {
            Variant::GuessKeyword => &fact.keyword,
            Variant::GuessValue => &fact.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    variant: Variant,
    seed: Fact,
    incorrect: Vec<Fact>,
}

impl Question {
    pub fn new(variant: Variant, seed: Fact, incorrect: Vec<Fact>) -> Self {
        Self {
            variant,
            seed,
            incorrect,
        }
    }

    #[cfg(test)]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[cfg(test)]
    pub fn seed(&self) -> &Fact {
        &self.seed
    }

    pub fn ask(&self) -> String {
        let fact = &self.seed;
        match self.variant {
            Variant::GuessKeyword => match &fact.description {
                Some(desc) => format!(
                    "Which {} is {:?} ({})?",
                    fact.class_name, fact.value, desc
                ),
                None => format!("Which {} is {:?}?", fact.class_name, fact.value),
            },
            Variant::GuessValue => format!("What is {:?}?", fact.keyword),
        }
    }

    /// Correct candidate first, then the incorrect ones in sample order.
    pub fn choices(&self) -> Vec<String> {
        std::iter::once(&self.seed)
            .chain(&self.incorrect)
            .map(|fact| self.variant.aspect(fact).to_string())
            .collect()
    }

    pub fn answer(&self) -> &str {
        self.variant.aspect(&self.seed)
    }

    pub fn full_answer(&self) -> bool {
        matches!(self.variant, Variant::GuessKeyword)
    }
}
