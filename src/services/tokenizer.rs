//! # 단어 토크나이저
//!
//! 원문 텍스트를 비교 가능한 단어(토큰) 목록으로 바꿉니다.
//!
//! 규칙:
//! 1. 전체를 소문자로 바꾼 뒤
//! 2. 공백 문자 또는 구두점 집합(`,.;:!?()[]{}"'` + 백틱)을 구분자로 나누고
//! 3. 빈 조각은 버립니다.
//!
//! 어간 추출이나 유니코드 정규화는 하지 않습니다.

/// 구분자로 취급하는 구두점 문자들
const PUNCTUATION: &[char] = &[
    ',', '.', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '`',
];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c)
}

/// 텍스트를 소문자 토큰 목록으로 분리합니다. 순서는 원문 순서를 따릅니다.
///
/// # 예시
/// ```text
/// tokenize("Hello, World!") → ["hello", "world"]
/// tokenize("  ...  ")       → []
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    // .split(): 구분자 하나마다 나누므로 연속된 구분자는 빈 조각을 만듭니다.
    // filter로 빈 조각을 제거하면 "구분자 연속 구간"으로 나눈 것과 같아집니다.
    text.to_lowercase()
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
