//! Quiz question loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spirit_core::Question;

use crate::loaders::{LoadResult, read_file};

/// Ordered question list for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub questions: Vec<Question>,
}

/// Loader for quiz questions from RON files.
pub struct QuizLoader;

impl QuizLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Question>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Question>> {
        let set: QuestionSet = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse question set RON: {}", e))?;

        Ok(set.questions)
    }
}
