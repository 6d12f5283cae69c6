//! Question catalog loading and validation
//!
//! The catalog is injected configuration: scoring semantics follow from its
//! contents, so it is validated at construction and substitutable in tests
//! and deployments (TOML file via `--catalog`). The builtin bank is the
//! 40-item reference set.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::axis::Axis;
use crate::{Error, Result};

/// A single quiz statement
///
/// `favors` names the letter that agreement with this statement supports.
/// It may be either pole of the question's axis; the scorer converts it to
/// an explicit sign relative to the axis's primary letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub axis: Axis,
    pub favors: char,
}

impl Question {
    /// Accumulation sign relative to the axis's primary letter:
    /// +1 when agreement pushes toward the primary letter, -1 otherwise
    pub fn sign(&self) -> i32 {
        if self.favors == self.axis.primary() {
            1
        } else {
            -1
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if !self.axis.contains(self.favors) {
            return Err(Error::Config(format!(
                "Question {}: favored letter '{}' does not belong to axis {}",
                index + 1,
                self.favors,
                self.axis
            )));
        }
        if self.text.trim().is_empty() {
            return Err(Error::Config(format!("Question {}: empty text", index + 1)));
        }
        Ok(())
    }
}

/// TOML document shape for substitute catalogs
#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

/// Ordered, validated question bank
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Build a catalog from entries, validating each question's axis/letter
    /// association. An empty catalog is rejected.
    pub fn new(questions: Vec<Question>) -> Result<Catalog> {
        if questions.is_empty() {
            return Err(Error::Config("Catalog contains no questions".to_string()));
        }
        for (index, question) in questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(Catalog { questions })
    }

    /// Load a substitute catalog from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Catalog> {
        let content = std::fs::read_to_string(path)?;
        Catalog::from_toml_str(&content)
    }

    /// Parse a catalog from TOML text (`[[questions]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Catalog> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Catalog parse error: {}", e)))?;
        Catalog::new(file.questions)
    }

    /// Number of questions in catalog order
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in catalog order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of catalog entries tagged with `axis`
    pub fn count_for(&self, axis: Axis) -> usize {
        self.questions.iter().filter(|q| q.axis == axis).count()
    }

    /// The builtin 40-item reference bank
    pub fn builtin() -> Catalog {
        let entries: &[(&str, Axis, char)] = &[
            ("I enjoy large social gatherings and meeting new people.", Axis::EI, 'E'),
            ("I prefer spending quiet time alone to recharge.", Axis::EI, 'I'),
            ("I often start conversations with strangers.", Axis::EI, 'E'),
            ("I usually think before speaking and prefer listening.", Axis::EI, 'I'),
            ("I focus on facts and present realities more than possibilities.", Axis::SN, 'S'),
            ("I enjoy imagining future possibilities and patterns.", Axis::SN, 'N'),
            ("I trust experience and tried-and-true methods.", Axis::SN, 'S'),
            ("I like exploring abstract theories and underlying meanings.", Axis::SN, 'N'),
            ("I base decisions mostly on logic and objective analysis.", Axis::TF, 'T'),
            ("I consider people's feelings and values when making decisions.", Axis::TF, 'F'),
            ("I prefer to be fair and apply rules consistently.", Axis::TF, 'T'),
            ("I tend to be warm and compassionate toward others' concerns.", Axis::TF, 'F'),
            ("I like having things decided and planned in advance.", Axis::JP, 'J'),
            ("I prefer to stay open to new information and adapt as I go.", Axis::JP, 'P'),
            ("I appreciate schedules and structure.", Axis::JP, 'J'),
            ("I often act spontaneously and enjoy flexibility.", Axis::JP, 'P'),
            ("I feel energized after spending time with a group of friends.", Axis::EI, 'E'),
            ("I prefer to reflect quietly rather than talk through every idea.", Axis::EI, 'I'),
            ("I like to talk things out to process them.", Axis::EI, 'E'),
            ("I plan my time carefully and dislike last-minute plans.", Axis::JP, 'J'),
            ("I often notice small facts others miss.", Axis::SN, 'S'),
            ("I enjoy interpreting symbols and hidden meanings.", Axis::SN, 'N'),
            ("I make decisions using clear pros and cons.", Axis::TF, 'T'),
            ("I find it easy to sense how others feel in a room.", Axis::TF, 'F'),
            ("I prefer to finish one project before starting another.", Axis::JP, 'J'),
            ("I adapt my plans frequently and enjoy variety.", Axis::JP, 'P'),
            ("I trust data and objective tests more than personal stories.", Axis::TF, 'T'),
            ("I often think about the future and possibilities more than details.", Axis::SN, 'N'),
            ("I enjoy being the center of attention sometimes.", Axis::EI, 'E'),
            ("I keep a small circle of close friends rather than many acquaintances.", Axis::EI, 'I'),
            ("I value traditions and proven methods.", Axis::SN, 'S'),
            ("I like playing with hypotheticals and \"what if\" scenarios.", Axis::SN, 'N'),
            ("When criticized, I try to analyze it objectively.", Axis::TF, 'T'),
            ("I respond to others' emotions and offer comfort.", Axis::TF, 'F'),
            ("I prefer clear deadlines and checkpoints.", Axis::JP, 'J'),
            ("I enjoy improvising and figuring things out on the fly.", Axis::JP, 'P'),
            ("I speak up in meetings even if I might be wrong.", Axis::EI, 'E'),
            ("I like to read and reflect rather than share every opinion.", Axis::EI, 'I'),
            ("I get energized planning long-term goals and systems.", Axis::SN, 'N'),
            ("I prefer concrete proof over speculative ideas.", Axis::SN, 'S'),
        ];

        let questions = entries
            .iter()
            .map(|(text, axis, favors)| Question {
                text: text.to_string(),
                axis: *axis,
                favors: *favors,
            })
            .collect();

        // Builtin entries are known-valid; validation still runs to catch
        // edits that break the axis/letter association.
        Catalog::new(questions).expect("builtin catalog must validate")
    }
}
