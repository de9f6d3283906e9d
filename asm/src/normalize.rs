/// A source line that survived comment and whitespace stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based index into the raw source, kept for diagnostics only.
    pub idx: usize,
    pub code: String,
}

impl Line {
    pub fn new(idx: usize, code: &str) -> Self {
        Line {
            idx,
            code: code.to_string(),
        }
    }
}

/// Drop everything from the first `//` and trim the rest.
pub fn strip(raw: &str) -> &str {
    match raw.split_once("//") {
        Some((code, _comment)) => code.trim(),
        None => raw.trim(),
    }
}

pub fn normalize<I, S>(raw_lines: I) -> Vec<Line>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let code = strip(raw.as_ref());
            if code.is_empty() {
                None
            } else {
                Some(Line::new(idx, code))
            }
        })
        .collect()
}
