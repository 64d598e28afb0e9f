// src/scan/matcher.rs
//
// Literal substring search that restarts one character past each match
// start, so overlapping occurrences are all reported ("京京京" holds three
// matches of "京", "aaa" two of "aa").
//
// Positions handed out by `Matches` are byte offsets; excerpt windows are
// measured in characters, so `CharIndex` converts between the two.

use std::ops::Range;

use crate::config::consts::{ELLIPSIS, EXCERPT_AFTER, EXCERPT_BEFORE};

pub struct Matches<'h, 'n> {
    hay: &'h str,
    needle: &'n str,
    pos: usize,
}

impl<'h, 'n> Iterator for Matches<'h, 'n> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.needle.is_empty() || self.pos >= self.hay.len() { return None; }
        let at = self.hay[self.pos..].find(self.needle)? + self.pos;
        // `at` is a char boundary, so there is a char to step over
        let step = self.hay[at..].chars().next().map_or(1, char::len_utf8);
        self.pos = at + step;
        Some(at)
    }
}

/// All match starts of `needle` in `hay`, overlapping ones included.
/// An empty needle matches nothing.
pub fn find_overlapping<'h, 'n>(hay: &'h str, needle: &'n str) -> Matches<'h, 'n> {
    Matches { hay, needle, pos: 0 }
}

/// Character range of the excerpt around a match at char `i` in a text of
/// `n` chars: `[max(0, i-250), min(n, i+350))`, always inside `0..=n`.
pub fn excerpt_window(i: usize, n: usize) -> Range<usize> {
    let end = i.saturating_add(EXCERPT_AFTER).min(n);
    let start = i.saturating_sub(EXCERPT_BEFORE).min(end);
    start..end
}

/// Byte offset of every char start in a document.
pub struct CharIndex {
    starts: Vec<usize>,
    byte_len: usize,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(b, _)| b).collect(),
            byte_len: text.len(),
        }
    }

    /// Document length in chars.
    pub fn char_len(&self) -> usize { self.starts.len() }

    /// Char index of a byte offset that sits on a char boundary.
    pub fn char_at(&self, byte: usize) -> usize {
        self.starts.partition_point(|&b| b < byte)
    }

    /// Byte offset of char `c`; one past the end maps to the byte length.
    pub fn byte_at(&self, c: usize) -> usize {
        self.starts.get(c).copied().unwrap_or(self.byte_len)
    }
}

/// Excerpt text for the match starting at byte `at`: the char window with
/// newlines flattened to spaces, wrapped in ellipsis markers.
pub fn make_excerpt(text: &str, index: &CharIndex, at: usize) -> String {
    let w = excerpt_window(index.char_at(at), index.char_len());
    let slice = &text[index.byte_at(w.start)..index.byte_at(w.end)];
    let mut out = String::with_capacity(slice.len() + 2 * ELLIPSIS.len());
    out.push_str(ELLIPSIS);
    out.push_str(&slice.replace('\n', " "));
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_alias_matches_every_position() {
        let text = "京京京";
        let hits: Vec<usize> = find_overlapping(text, "京").collect();
        // byte offsets of chars 0, 1, 2
        assert_eq!(hits, vec![0, 3, 6]);
        let index = CharIndex::new(text);
        let chars: Vec<usize> = hits.iter().map(|&b| index.char_at(b)).collect();
        assert_eq!(chars, vec![0, 1, 2]);
    }

    #[test]
    fn overlapping_multi_char_matches() {
        assert_eq!(find_overlapping("aaaa", "aa").count(), 3);
        assert_eq!(find_overlapping("金陵金陵", "金陵").count(), 2);
        assert_eq!(find_overlapping("abc", "").count(), 0);
        assert_eq!(find_overlapping("", "京").count(), 0);
    }

    #[test]
    fn window_is_clamped_to_document() {
        assert_eq!(excerpt_window(0, 10), 0..10);
        assert_eq!(excerpt_window(300, 1000), 50..650);
        assert_eq!(excerpt_window(900, 1000), 650..1000);
        assert_eq!(excerpt_window(5, 3), 0..3);
    }

    #[test]
    fn excerpt_flattens_newlines_and_wraps() {
        let text = "第一回\n南京城里";
        let index = CharIndex::new(text);
        let at = text.find("南京").unwrap();
        assert_eq!(make_excerpt(text, &index, at), "...第一回 南京城里...");
    }

    #[test]
    fn excerpt_window_counts_chars_not_bytes() {
        let before: String = "甲".repeat(300);
        let after: String = "乙".repeat(400);
        let text = format!("{before}京{after}");
        let index = CharIndex::new(&text);
        let at = text.find('京').unwrap();
        let ex = make_excerpt(&text, &index, at);
        let body = ex.trim_start_matches("...").trim_end_matches("...");
        assert_eq!(body.chars().count(), 600);
        assert_eq!(body.chars().take_while(|&c| c == '甲').count(), 250);
        assert_eq!(body.chars().nth(250), Some('京'));
    }
}
