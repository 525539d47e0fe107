use crate::data::preprocessor::TextCleaner;

/// Spot-check the cleaner on one string.
pub struct CleanUseCase {
    cleaner: TextCleaner,
}

impl CleanUseCase {
    pub fn new(remove_stopwords: bool) -> Self {
        let cleaner = if remove_stopwords {
            TextCleaner::with_stopwords()
        } else {
            TextCleaner::new()
        };
        Self { cleaner }
    }

    pub fn execute(&self, text: &str) -> String {
        let cleaned = self.cleaner.clean(text);
        tracing::debug!("Cleaned {} chars into {} chars", text.len(), cleaned.len());
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_stopword_flag() {
        let text = "The Fed raises rates";
        assert_eq!(CleanUseCase::new(false).execute(text), "the fed raises rates");
        assert_eq!(CleanUseCase::new(true).execute(text), "fed raises rates");
    }
}
