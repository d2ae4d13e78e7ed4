use crate::utils::constants::CONSTANTS;

pub trait Capitalize {
    fn capitalize(&self) -> String;
}

impl Capitalize for &str {
    fn capitalize(&self) -> String {
        let mut chars = self.chars();
        chars.next().map_or_else(String::new, |first_char| first_char.to_uppercase().collect::<String>() + chars.as_str())
    }
}

impl Capitalize for String {
    fn capitalize(&self) -> String {
        self.as_str().capitalize()
    }
}

/// Uppercases the first character of every space separated word, the spacing is kept.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ').map(|word| word.capitalize()).collect::<Vec<String>>().join(" ")
}

/// Trims and folds every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    CONSTANTS.re_whitespace.replace_all(text.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("my song  name"), "My Song  Name");
        assert_eq!(capitalize_words("song3"), "Song3");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Song\n\t  One "), "Song One");
        assert_eq!(collapse_whitespace(" \n "), "");
    }
}
