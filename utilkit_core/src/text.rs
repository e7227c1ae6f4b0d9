//! # Text Tools
//!
//! Character/word statistics, line-oriented transforms and a line-by-line
//! comparison of two texts.
//!
//! ## Example
//!
//! ```rust
//! use utilkit_core::text::{text_stats, transform, TextOperation};
//!
//! let stats = text_stats("Hello world. Bye!");
//! assert_eq!(stats.words, 3);
//! assert_eq!(stats.sentences, 2);
//!
//! assert_eq!(transform("total 1234567", TextOperation::AddCommas), "total 1,234,567");
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::group_digits;

/// Counts describing a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextStats {
    /// Unicode scalar values
    pub characters: usize,
    /// Characters excluding whitespace
    pub characters_no_spaces: usize,
    pub words: usize,
    /// Non-blank segments between runs of `.`, `!` or `?`
    pub sentences: usize,
    /// Non-blank blocks separated by blank lines
    pub paragraphs: usize,
    /// UTF-8 length
    pub bytes: usize,
}

/// Compute [`TextStats`] for `text`.
pub fn text_stats(text: &str) -> TextStats {
    let blank = text.trim().is_empty();

    TextStats {
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        words: text.split_whitespace().count(),
        sentences: if blank {
            0
        } else {
            text.split(['.', '!', '?'])
                .filter(|s| !s.trim().is_empty())
                .count()
        },
        paragraphs: if blank { 0 } else { paragraphs(text).len() },
        bytes: text.len(),
    }
}

/// Split on lines that are empty or whitespace-only.
fn paragraphs(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.trim().is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.trim().is_empty() {
        blocks.push(current);
    }
    blocks
}

/// A whole-text transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextOperation {
    /// Trim the ends and collapse inner whitespace runs to one space
    Trim,
    Uppercase,
    Lowercase,
    /// Uppercase the first letter of each word
    Capitalize,
    /// Reverse character order
    Reverse,
    /// Join all lines with single spaces
    RemoveLinebreaks,
    /// Group integer digit runs with thousands separators
    AddCommas,
    /// Drop repeated lines, keeping the first occurrence
    RemoveDuplicates,
    SortLines,
}

impl TextOperation {
    pub const ALL: [TextOperation; 9] = [
        TextOperation::Trim,
        TextOperation::Uppercase,
        TextOperation::Lowercase,
        TextOperation::Capitalize,
        TextOperation::Reverse,
        TextOperation::RemoveLinebreaks,
        TextOperation::AddCommas,
        TextOperation::RemoveDuplicates,
        TextOperation::SortLines,
    ];

    pub fn id(self) -> &'static str {
        match self {
            TextOperation::Trim => "trim",
            TextOperation::Uppercase => "uppercase",
            TextOperation::Lowercase => "lowercase",
            TextOperation::Capitalize => "capitalize",
            TextOperation::Reverse => "reverse",
            TextOperation::RemoveLinebreaks => "remove-linebreaks",
            TextOperation::AddCommas => "add-commas",
            TextOperation::RemoveDuplicates => "remove-duplicates",
            TextOperation::SortLines => "sort-lines",
        }
    }
}

impl fmt::Display for TextOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TextOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        TextOperation::ALL
            .into_iter()
            .find(|op| op.id() == wanted)
            .ok_or_else(|| format!("unknown text operation '{}'", s))
    }
}

/// Apply `operation` to `text`.
pub fn transform(text: &str, operation: TextOperation) -> String {
    match operation {
        TextOperation::Trim => collapse_whitespace(text.trim()),
        TextOperation::RemoveLinebreaks => collapse_whitespace(text),
        TextOperation::Uppercase => text.to_uppercase(),
        TextOperation::Lowercase => text.to_lowercase(),
        TextOperation::Capitalize => capitalize_words(text),
        TextOperation::Reverse => text.chars().rev().collect(),
        TextOperation::AddCommas => add_commas(text),
        TextOperation::RemoveDuplicates => {
            let mut seen = HashSet::new();
            text.split('\n')
                .filter(|line| seen.insert(*line))
                .collect::<Vec<_>>()
                .join("\n")
        }
        TextOperation::SortLines => {
            let mut lines: Vec<&str> = text.split('\n').collect();
            lines.sort_unstable();
            lines.join("\n")
        }
    }
}

/// Replace every whitespace run (line breaks included) with one space.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_word = false;
    for c in text.chars() {
        if is_word_char(c) && !prev_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_word = is_word_char(c);
    }
    out
}

/// Group digit runs that start a word. Runs after a letter, underscore or
/// decimal point are left alone.
fn add_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + text.len() / 3);
    let mut i = 0;
    while i < chars.len() {
        if !chars[i].is_ascii_digit() {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        let run: String = chars[start..i].iter().collect();
        let groupable = match start.checked_sub(1).map(|p| chars[p]) {
            Some(prev) => !is_word_char(prev) && prev != '.',
            None => true,
        };
        if groupable {
            out.push_str(&group_digits(&run));
        } else {
            out.push_str(&run);
        }
    }
    out
}

/// A line that differs between two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDifference {
    /// 1-based line number
    pub line: usize,
    pub left: String,
    pub right: String,
}

/// Compare two texts line by line. Missing lines compare as empty.
pub fn compare_lines(left: &str, right: &str) -> Vec<LineDifference> {
    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let count = left_lines.len().max(right_lines.len());

    (0..count)
        .filter_map(|i| {
            let l = left_lines.get(i).copied().unwrap_or("");
            let r = right_lines.get(i).copied().unwrap_or("");
            (l != r).then(|| LineDifference {
                line: i + 1,
                left: l.to_string(),
                right: r.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = text_stats("Hello world. How are you? Fine!");
        assert_eq!(stats.characters, 31);
        assert_eq!(stats.characters_no_spaces, 26);
        assert_eq!(stats.words, 6);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.paragraphs, 1);
        assert_eq!(stats.bytes, 31);
    }

    #[test]
    fn test_stats_multibyte_and_paragraphs() {
        let text = "안녕하세요\n\n  \n둘째 문단...\n계속";
        let stats = text_stats(text);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.characters, text.chars().count());
        assert!(stats.bytes > stats.characters);
    }

    #[test]
    fn test_stats_blank() {
        assert_eq!(text_stats(""), TextStats::default());
        let spaces = text_stats("   \n ");
        assert_eq!(spaces.words, 0);
        assert_eq!(spaces.sentences, 0);
        assert_eq!(spaces.paragraphs, 0);
        assert_eq!(spaces.characters, 5);
    }

    #[test]
    fn test_whitespace_transforms() {
        assert_eq!(transform("  a   b \t c  ", TextOperation::Trim), "a b c");
        assert_eq!(
            transform("line1\nline2\n\nline3\n", TextOperation::RemoveLinebreaks),
            "line1 line2 line3 "
        );
    }

    #[test]
    fn test_case_transforms() {
        assert_eq!(transform("MiXeD", TextOperation::Uppercase), "MIXED");
        assert_eq!(transform("MiXeD", TextOperation::Lowercase), "mixed");
        assert_eq!(
            transform("hello wORLD, it's-fine", TextOperation::Capitalize),
            "Hello WORLD, It'S-Fine"
        );
    }

    #[test]
    fn test_reverse() {
        assert_eq!(transform("abc 한글", TextOperation::Reverse), "글한 cba");
    }

    #[test]
    fn test_add_commas() {
        assert_eq!(transform("1234567", TextOperation::AddCommas), "1,234,567");
        assert_eq!(transform("pay 1000 or 999", TextOperation::AddCommas), "pay 1,000 or 999");
        assert_eq!(transform("id42000", TextOperation::AddCommas), "id42000");
        assert_eq!(transform("3.14159", TextOperation::AddCommas), "3.14159");
        assert_eq!(transform("12345.678", TextOperation::AddCommas), "12,345.678");
    }

    #[test]
    fn test_line_transforms() {
        assert_eq!(transform("b\na\nb\nc\na", TextOperation::RemoveDuplicates), "b\na\nc");
        assert_eq!(transform("pear\napple\nBanana", TextOperation::SortLines), "Banana\napple\npear");
    }

    #[test]
    fn test_operation_ids() {
        for op in TextOperation::ALL {
            assert_eq!(op.id().parse::<TextOperation>().unwrap(), op);
            let json = serde_json::to_string(&op).unwrap();
            assert_eq!(json, format!("\"{}\"", op.id()));
        }
        assert!("shout".parse::<TextOperation>().is_err());
    }

    #[test]
    fn test_compare_lines() {
        assert!(compare_lines("a\nb", "a\nb").is_empty());

        let diffs = compare_lines("a\nb\nc", "a\nB");
        assert_eq!(
            diffs,
            vec![
                LineDifference {
                    line: 2,
                    left: "b".to_string(),
                    right: "B".to_string()
                },
                LineDifference {
                    line: 3,
                    left: "c".to_string(),
                    right: String::new()
                },
            ]
        );
    }
}
