//! # 단어 멀티셋(빈도) 비교
//!
//! 두 텍스트를 토큰화한 뒤, 토큰별 등장 횟수를 비교해
//! "늘어난 단어"(added)와 "줄어든 단어"(removed)를 구합니다.
//!
//! ## 처리 흐름
//! ```text
//! old_text ─ tokenize ─ 빈도표(old) ─┐
//!                                     ├─ 토큰별 차이(delta) → added / removed
//! new_text ─ tokenize ─ 빈도표(new) ─┘
//! ```
//!
//! 단어의 위치는 보지 않고 횟수만 봅니다. 따라서 같은 단어들을 순서만 바꾼
//! 텍스트는 변경 없음으로 판정됩니다.

use std::collections::HashMap;

use super::tokenizer::tokenize;

/// 두 텍스트의 단어 비교 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordDiff {
    /// 새 텍스트에서 횟수가 늘어난 단어 (중복 없음, 새 텍스트의 첫 등장 순)
    pub added_words: Vec<String>,
    /// 이전 텍스트에서 횟수가 줄어든 단어 (중복 없음, 이전 텍스트의 첫 등장 순)
    pub removed_words: Vec<String>,
    /// 이전 원문의 UTF-16 코드 유닛 길이
    pub old_length: usize,
    pub new_length: usize,
    /// 토큰별 순 변화량 (new - old). 0인 토큰은 포함하지 않습니다.
    pub deltas: HashMap<String, i64>,
}

/// 토큰 빈도표. 첫 등장 순서를 함께 기억합니다.
struct Frequencies<'a> {
    order: Vec<&'a str>,
    counts: HashMap<&'a str, i64>,
}

impl<'a> Frequencies<'a> {
    fn count(tokens: &'a [String]) -> Self {
        let mut order = Vec::new();
        let mut counts: HashMap<&str, i64> = HashMap::with_capacity(tokens.len());
        for token in tokens {
            let entry = counts.entry(token.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(token.as_str());
            }
            *entry += 1;
        }
        Self { order, counts }
    }

    fn get(&self, token: &str) -> i64 {
        self.counts.get(token).copied().unwrap_or(0)
    }
}

/// 원문 길이. 브라우저 쪽 `string.length`와 같은 값을 내도록 UTF-16 단위로 셉니다.
pub fn code_unit_length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// `old_text` → `new_text` 사이의 단어 변경을 계산합니다.
///
/// 시간/공간 복잡도는 두 토큰 목록 길이의 합에 비례합니다.
pub fn diff(old_text: &str, new_text: &str) -> WordDiff {
    let old_tokens = tokenize(old_text);
    let new_tokens = tokenize(new_text);

    let old_freq = Frequencies::count(&old_tokens);
    let new_freq = Frequencies::count(&new_tokens);

    let mut deltas = HashMap::new();

    let mut added_words = Vec::new();
    for &word in &new_freq.order {
        let delta = new_freq.get(word) - old_freq.get(word);
        if delta > 0 {
            added_words.push(word.to_string());
            deltas.insert(word.to_string(), delta);
        }
    }

    let mut removed_words = Vec::new();
    for &word in &old_freq.order {
        let delta = old_freq.get(word) - new_freq.get(word);
        if delta > 0 {
            removed_words.push(word.to_string());
            deltas.insert(word.to_string(), -delta);
        }
    }

    WordDiff {
        added_words,
        removed_words,
        old_length: code_unit_length(old_text),
        new_length: code_unit_length(new_text),
        deltas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn set(words: &[String]) -> HashSet<&str> {
        words.iter().map(String::as_str).collect()
    }

    #[test]
    fn identical_texts_have_no_changes() {
        let text = "The quick brown fox, the lazy dog.";
        let result = diff(text, text);
        assert!(result.added_words.is_empty());
        assert!(result.removed_words.is_empty());
        assert!(result.deltas.is_empty());
        assert_eq!(result.old_length, text.len());
        assert_eq!(result.new_length, text.len());
    }

    #[test]
    fn first_version_adds_every_distinct_word_once() {
        let result = diff("", "cat cat dog");
        assert_eq!(result.added_words, vec!["cat", "dog"]);
        assert!(result.removed_words.is_empty());
        assert_eq!(result.old_length, 0);
        assert_eq!(result.new_length, 11);
        assert_eq!(result.deltas.get("cat"), Some(&2));
        assert_eq!(result.deltas.get("dog"), Some(&1));
    }

    #[test]
    fn frequency_shift_reports_both_sides() {
        let result = diff("cat cat dog", "cat dog dog");
        assert_eq!(result.added_words, vec!["dog"]);
        assert_eq!(result.removed_words, vec!["cat"]);
        assert_eq!(result.deltas.get("dog"), Some(&1));
        assert_eq!(result.deltas.get("cat"), Some(&-1));
    }

    #[test]
    fn word_order_does_not_matter() {
        let result = diff("alpha beta gamma", "Gamma, alpha... BETA!");
        assert!(result.added_words.is_empty());
        assert!(result.removed_words.is_empty());
        assert_ne!(result.old_length, result.new_length);
    }

    #[test]
    fn added_and_removed_are_disjoint() {
        let cases = [
            ("", ""),
            ("a b c", "c d e"),
            ("a a a b", "a b b b"),
            ("one two. two three", "three; three two one one"),
            ("Mixed CASE words", "mixed case WORDS extra"),
        ];
        for (old, new) in cases {
            let result = diff(old, new);
            let added = set(&result.added_words);
            let removed = set(&result.removed_words);
            assert!(added.is_disjoint(&removed), "{old:?} -> {new:?}");
        }
    }

    #[test]
    fn clearing_the_text_removes_everything() {
        let result = diff("hello there, hello", "");
        assert!(result.added_words.is_empty());
        assert_eq!(result.removed_words, vec!["hello", "there"]);
        assert_eq!(result.new_length, 0);
    }

    #[test]
    fn lengths_count_utf16_code_units() {
        // "😀"는 UTF-16에서 서로게이트 쌍(2 유닛), "é"는 1 유닛
        let result = diff("é", "😀");
        assert_eq!(result.old_length, 1);
        assert_eq!(result.new_length, 2);
    }
}
