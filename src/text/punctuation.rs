//! Smart punctuation for paper mode
//!
//! Applied once to the whole submitted text before segmentation so that dash
//! handling sees line starts and ends.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NUMERIC_RANGE: Regex =
        Regex::new(r"(\d)[ \t]*[-–—][ \t]*(\d)").expect("range pattern compiles");
    static ref SPACED_DASH: Regex =
        Regex::new(r"(^|\s)(?:--?|–)(\s|$)").expect("dash pattern compiles");
    static ref DOUBLE_HYPHEN: Regex = Regex::new(r"--+").expect("hyphen pattern compiles");
    static ref DOTS: Regex = Regex::new(r"\.\.\.").expect("ellipsis pattern compiles");
}

/// Characters after which a quote mark opens rather than closes
const OPENING_CONTEXT: &[char] = &['(', '[', '{', '«', '„', '“', '‘', '—', '–', '-', '/'];

/// Matches can share their boundary characters (`1-2-3`, `a - b - c`), so
/// replacement is repeated until the text stops changing.
fn replace_until_stable(re: &Regex, text: &str, replacement: &str) -> String {
    let mut current = text.to_string();
    for _ in 0..8 {
        let next = re.replace_all(&current, replacement).into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Dash disambiguation
///
/// - a dash between digits becomes an unspaced en dash: `1990 - 2000` -> `1990–2000`
/// - a free-standing hyphen, double hyphen or en dash becomes an em dash
/// - any remaining run of hyphens becomes an em dash
///
/// Hyphens inside words are untouched.
pub fn normalize_dashes(text: &str) -> String {
    let text = replace_until_stable(&NUMERIC_RANGE, text, "${1}–${2}");
    let text = replace_until_stable(&SPACED_DASH, &text, "${1}—${2}");
    DOUBLE_HYPHEN.replace_all(&text, "—").into_owned()
}

/// Turn straight quotes into directional ones
///
/// The direction is taken from the character immediately preceding the quote:
/// start of text, whitespace or an opening bracket/dash opens, anything else
/// closes. An apostrophe between two letters is left alone so that words like
/// `don't` stay single tokens.
pub fn normalize_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &ch) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();
        let opens = match prev {
            None => true,
            Some(p) => p.is_whitespace() || OPENING_CONTEXT.contains(&p),
        };

        match ch {
            '"' => out.push(if opens { '“' } else { '”' }),
            '\'' => {
                let inner = prev.map_or(false, |p| p.is_alphanumeric())
                    && next.map_or(false, |n| n.is_alphanumeric());
                if inner {
                    out.push('\'');
                } else {
                    out.push(if opens { '‘' } else { '’' });
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Full paper-mode normalization: dashes, ellipses, then quotes
pub fn normalize_punctuation(text: &str) -> String {
    let text = normalize_dashes(text);
    let text = DOTS.replace_all(&text, "…");
    normalize_quotes(&text)
}
