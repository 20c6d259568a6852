//! Searching sequences.

/// Finds the first item satisfying `predicate` and returns the result of
/// applying `function` to it, or [`None`] if no item matches.
///
/// Items are visited in order and the search stops at the first match, so
/// `function` is called at most once.
///
/// # Examples
/// ```
/// use exercises_text::first_then_apply;
///
/// let fruit = ["apple", "banana", "blueberry"];
/// let found = first_then_apply(fruit, |s| s.starts_with('b'), str::to_uppercase);
/// assert_eq!(found.as_deref(), Some("BANANA"));
/// ```
pub fn first_then_apply<T, U>(
    items: impl IntoIterator<Item = T>,
    mut predicate: impl FnMut(&T) -> bool,
    function: impl FnOnce(T) -> U,
) -> Option<U> {
    items.into_iter().find(|item| predicate(item)).map(function)
}

/// Returns the lower-cased version of the first string satisfying
/// `predicate`.
pub fn first_then_lower_case<S: AsRef<str>>(
    strings: impl IntoIterator<Item = S>,
    mut predicate: impl FnMut(&str) -> bool,
) -> Option<String> {
    first_then_apply(
        strings,
        |string| predicate(string.as_ref()),
        |string| string.as_ref().to_lowercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_string_is_transformed() {
        let result = first_then_apply(
            ["apple", "banana"],
            |s| s.starts_with('b'),
            str::to_uppercase,
        );
        assert_eq!(result.as_deref(), Some("BANANA"));
    }

    #[test]
    fn no_match_gives_none() {
        let result = first_then_apply(
            ["apple", "banana"],
            |s| s.starts_with('z'),
            str::to_uppercase,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn empty_input_gives_none() {
        let words: [&str; 0] = [];
        assert_eq!(first_then_apply(words, |_| true, str::len), None);
    }

    #[test]
    fn only_first_match_is_transformed() {
        let mut calls = 0;
        let result = first_then_apply(
            vec!["ab".to_string(), "abc".to_string(), "abcd".to_string()],
            |s| s.len() > 2,
            |s| {
                calls += 1;
                s.len()
            },
        );
        assert_eq!(result, Some(3));
        assert_eq!(calls, 1);
    }

    #[test]
    fn scanning_stops_at_first_match() {
        let mut inspected = Vec::new();
        let _ = first_then_apply(
            ["x", "yes", "also yes", "z"],
            |s| {
                inspected.push(s.to_string());
                s.contains("yes")
            },
            |s| s,
        );
        assert_eq!(inspected, ["x", "yes"]);
    }

    #[test]
    fn works_for_non_string_items() {
        let result = first_then_apply([1, 4, 9, 16], |n| *n > 5, |n| n * 10);
        assert_eq!(result, Some(90));
    }

    #[test]
    fn first_long_word_is_lower_cased() {
        let result = first_then_lower_case(["Hi", "ABCDEF", "ZZZZZZZ"], |s| s.len() > 5);
        assert_eq!(result.as_deref(), Some("abcdef"));
    }

    #[test]
    fn lower_casing_without_match_gives_none() {
        let words = vec![String::from("A"), String::from("B")];
        assert_eq!(first_then_lower_case(&words, |s| s.len() > 1), None);
    }
}
