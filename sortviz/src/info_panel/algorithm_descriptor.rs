// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

/// A code listing, one `&str` per line, indentation included.
pub type CodeLines = &'static [&'static str];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// Everything the info panel shows for one algorithm. Compile time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub complexity: Complexity,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub pseudocode: CodeLines,
    pub cpp: CodeLines,
    pub java: CodeLines,
}

impl AlgorithmDescriptor {
    #[must_use]
    pub fn listing(&self, which: CodeListing) -> CodeLines {
        match which {
            CodeListing::Pseudocode => self.pseudocode,
            CodeListing::Cpp => self.cpp,
            CodeListing::Java => self.java,
        }
    }
}

/// Which of the three listings the panel shows. There is only room for one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CodeListing {
    #[default]
    #[strum(serialize = "Pseudocode")]
    Pseudocode,
    #[strum(serialize = "C++")]
    Cpp,
    #[strum(serialize = "Java")]
    Java,
}

impl CodeListing {
    /// Cycles pseudocode, C++, Java, and back.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            CodeListing::Pseudocode => CodeListing::Cpp,
            CodeListing::Cpp => CodeListing::Java,
            CodeListing::Java => CodeListing::Pseudocode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_next_visits_every_listing_and_wraps() {
        let mut it = CodeListing::default();
        let mut seen = vec![];
        for _ in CodeListing::iter() {
            seen.push(it);
            it = it.next();
        }
        assert_eq!(it, CodeListing::default());
        assert_eq!(seen, CodeListing::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CodeListing::Cpp.to_string(), "C++");
        assert_eq!(CodeListing::Pseudocode.to_string(), "Pseudocode");
    }
}
