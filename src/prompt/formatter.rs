//! Imperative prompt rewriting
//!
//! Turns a summary sentence into an LLM-style instruction:
//!
//! 1. politeness phrases are removed
//! 2. `don't` becomes `do`
//! 3. sometimes framed as `Your task is to ... You MUST complete this.`
//! 4. sometimes followed by `Let's think step by step.`
//! 5. always fenced in triple backticks
//! 6. sometimes followed by an `Answer:` primer
//!
//! The random choices come from the caller's RNG; seed it to get
//! reproducible output. Ranking never sees any of this.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

static POLITENESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(please|kindly|if you don't mind|thank you|I would like to)\b")
        .expect("politeness pattern is valid")
});

static RUNS_OF_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("whitespace pattern is valid"));

const DIRECTIVE_PREFIX: &str = "Your task is to";
const DIRECTIVE_SUFFIX: &str = "You MUST complete this.";
const STEP_BY_STEP: &str = "Let's think step by step.";
const ANSWER_PRIMER: &str = "Answer:";
const FENCE: &str = "```";

/// Randomized sentence-to-prompt rewriter
#[derive(Debug, Clone)]
pub struct PromptFormatter {
    directive_probability: f64,
    step_by_step_probability: f64,
    answer_primer_probability: f64,
}

impl Default for PromptFormatter {
    fn default() -> Self {
        Self {
            directive_probability: 0.5,
            step_by_step_probability: 0.5,
            answer_primer_probability: 0.5,
        }
    }
}

impl PromptFormatter {
    /// Create a formatter applying each optional rewrite half the time
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter that applies every optional rewrite
    pub fn always() -> Self {
        Self::uniform(1.0)
    }

    /// Create a formatter that only strips politeness and fences
    pub fn never() -> Self {
        Self::uniform(0.0)
    }

    fn uniform(p: f64) -> Self {
        Self {
            directive_probability: p,
            step_by_step_probability: p,
            answer_primer_probability: p,
        }
    }

    /// Chance of the `Your task is to` framing (clamped to `[0, 1]`)
    pub fn with_directive_probability(mut self, p: f64) -> Self {
        self.directive_probability = probability(p);
        self
    }

    /// Chance of appending `Let's think step by step.` (clamped to `[0, 1]`)
    pub fn with_step_by_step_probability(mut self, p: f64) -> Self {
        self.step_by_step_probability = probability(p);
        self
    }

    /// Chance of appending the `Answer:` primer (clamped to `[0, 1]`)
    pub fn with_answer_primer_probability(mut self, p: f64) -> Self {
        self.answer_primer_probability = probability(p);
        self
    }

    /// Rewrite one sentence
    pub fn format<R: Rng + ?Sized>(&self, sentence: &str, rng: &mut R) -> String {
        let mut text = affirmative(&strip_politeness(sentence));

        if rng.gen_bool(self.directive_probability) {
            text = format!("{DIRECTIVE_PREFIX} {text} {DIRECTIVE_SUFFIX}");
        }
        if rng.gen_bool(self.step_by_step_probability) {
            text = format!("{text} {STEP_BY_STEP}");
        }

        let mut prompt = format!("{FENCE}{text}{FENCE}");
        if rng.gen_bool(self.answer_primer_probability) {
            prompt.push(' ');
            prompt.push_str(ANSWER_PRIMER);
        }
        prompt
    }

    /// Rewrite each sentence independently, in order
    pub fn format_all<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        sentences: &[S],
        rng: &mut R,
    ) -> Vec<String> {
        sentences
            .iter()
            .map(|s| self.format(s.as_ref(), rng))
            .collect()
    }
}

/// Remove politeness phrases and the gaps they leave behind
pub fn strip_politeness(text: &str) -> String {
    let stripped = POLITENESS.replace_all(text, "");
    RUNS_OF_SPACES
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Rewrite negative `don't` instructions as affirmative `do`
pub fn affirmative(text: &str) -> String {
    text.replace("don't", "do")
}

fn probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
