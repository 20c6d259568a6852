//! Building phrases one word at a time.

/// Accumulates words and joins them into a phrase separated by single
/// spaces.
///
/// Every builder owns its words, so separate chains never affect each other.
///
/// # Examples
/// ```
/// use exercises_text::{say, say_word};
///
/// assert_eq!(say().build(), "");
/// assert_eq!(say_word("hi").and("there").and("friend").build(), "hi there friend");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhraseBuilder {
    words: Vec<String>,
}

/// Starts an empty phrase.
pub fn say() -> PhraseBuilder {
    PhraseBuilder::new()
}

/// Starts a phrase with the given word.
pub fn say_word(word: impl Into<String>) -> PhraseBuilder {
    PhraseBuilder::starting_with(word)
}

impl PhraseBuilder {
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    pub fn starting_with(word: impl Into<String>) -> Self {
        Self {
            words: vec![word.into()],
        }
    }

    /// Adds a word to the end of the phrase.
    pub fn append(&mut self, word: impl Into<String>) -> &mut Self {
        self.words.push(word.into());
        self
    }

    /// Returns the builder with the word added to the end of the phrase.
    #[must_use]
    pub fn and(mut self, word: impl Into<String>) -> Self {
        self.append(word);
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Joins the accumulated words with single spaces.
    pub fn build(&self) -> String {
        self.words.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saying_nothing_gives_empty_string() {
        let builder = say();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn single_word_is_returned_as_is() {
        assert_eq!(say_word("hello").build(), "hello");
    }

    #[test]
    fn chained_words_are_joined_with_spaces() {
        assert_eq!(
            say_word("hello").and("my").and("friends").build(),
            "hello my friends"
        );
    }

    #[test]
    fn appending_in_place_accumulates_words() {
        let mut builder = PhraseBuilder::starting_with("one");
        builder.append("two").append("three");
        assert_eq!(builder.words(), ["one", "two", "three"]);
        assert_eq!(builder.build(), "one two three");
    }

    #[test]
    fn appending_to_empty_builder_has_no_leading_space() {
        let mut builder = say();
        builder.append("first");
        assert_eq!(builder.build(), "first");
    }

    #[test]
    fn empty_and_spaced_words_are_kept() {
        assert_eq!(say_word("hi").and("").build(), "hi ");
        assert_eq!(say_word("  x").and("y  ").build(), "  x y  ");
    }

    #[test]
    fn building_does_not_consume_builder() {
        let mut builder = say_word("a");
        assert_eq!(builder.build(), "a");
        builder.append("b");
        assert_eq!(builder.build(), "a b");
    }

    #[test]
    fn separate_chains_are_independent() {
        let greeting = say_word("hi");
        let extended = greeting.clone().and("there");
        let other = say_word("bye").and("now");

        assert_eq!(greeting.build(), "hi");
        assert_eq!(extended.build(), "hi there");
        assert_eq!(other.build(), "bye now");
    }
}
