//! Page segmentation for raw narrative text.
//!
//! Models do not reliably follow the page-delimiter contract, so parsing
//! runs as a cascade: marker patterns in priority order, then sentence
//! distribution, then placeholder padding. Content is never discarded; the
//! only hard failure is a narrative with no sentences at all.

use regex::Regex;
use std::sync::LazyLock;
use storyloom_error::{SegmentError, SegmentErrorKind};

/// Neutral sentence used to pad pages when the narrative runs short.
pub const PLACEHOLDER_SENTENCE: &str = "让我们继续探索吧";

/// Characters accepted as sentence-terminal punctuation.
const TERMINALS: [char; 6] = ['。', '！', '？', '.', '!', '?'];

/// Marker patterns in priority order. The first pattern that splits the
/// text into exactly the target count wins.
static MARKER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Localized ordinal markers: 第一页：
        r"第[一二三四五六七八九十]+页[：:]",
        // Numeric markers: 第1页：
        r"第\d+页[：:]",
        // English markers: Page 1:
        r"(?i)page\s*\d+\s*[：:]",
        // Explicit separator lines
        r"(?m)^\s*-{3,}\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("marker pattern is valid"))
    .collect()
});

/// Split raw narrative text into exactly `target` ordered page texts.
///
/// Every returned page is non-empty and ends with a terminal punctuation
/// mark; one is appended when missing. That append is a normalization
/// step, not a correctness guarantee.
///
/// # Errors
///
/// Returns [`SegmentErrorKind::InsufficientContent`] when the narrative
/// contains no sentences at all, and [`SegmentErrorKind::ZeroPageCount`]
/// for a zero target.
///
/// # Examples
///
/// ```
/// use storyloom_pipeline::segment;
///
/// let raw = "第1页：小兔子出发了。第2页：它遇到了朋友。第3页：大家一起回家。";
/// let pages = segment(raw, 3).unwrap();
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[0], "小兔子出发了。");
/// ```
pub fn segment(raw: &str, target: usize) -> Result<Vec<String>, SegmentError> {
    if target == 0 {
        return Err(SegmentError::new(SegmentErrorKind::ZeroPageCount));
    }

    for pattern in MARKER_PATTERNS.iter() {
        let pages: Vec<&str> = pattern
            .split(raw)
            .map(str::trim)
            .filter(|page| !page.is_empty())
            .collect();
        if pages.len() == target {
            return Ok(pages
                .into_iter()
                .map(|page| ensure_terminal(page.to_string()))
                .collect());
        }
    }

    distribute_sentences(raw, target)
}

/// Sentence-boundary fallback: distribute sentences evenly across pages
/// with per-bucket ceiling division, padding with the placeholder when the
/// narrative runs short.
fn distribute_sentences(raw: &str, target: usize) -> Result<Vec<String>, SegmentError> {
    let sentences: Vec<&str> = raw
        .split(TERMINALS)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();

    if sentences.is_empty() {
        return Err(SegmentError::new(SegmentErrorKind::InsufficientContent {
            sentences: 0,
            target,
        }));
    }

    let mut pages = Vec::with_capacity(target);
    if sentences.len() >= target {
        let per_page = sentences.len().div_ceil(target);
        for i in 0..target {
            let start = i * per_page;
            let end = ((i + 1) * per_page).min(sentences.len());
            if start < end {
                pages.push(ensure_terminal(sentences[start..end].join("。")));
            } else {
                // Ceiling division can drain the tail early; keep the page
                // count exact rather than fail.
                pages.push(placeholder_page());
            }
        }
    } else {
        for sentence in &sentences {
            pages.push(ensure_terminal((*sentence).to_string()));
        }
        while pages.len() < target {
            pages.push(placeholder_page());
        }
    }
    Ok(pages)
}

fn placeholder_page() -> String {
    format!("{PLACEHOLDER_SENTENCE}。")
}

fn ensure_terminal(mut page: String) -> String {
    match page.chars().last() {
        Some(last) if TERMINALS.contains(&last) => page,
        _ => {
            page.push('。');
            page
        }
    }
}
