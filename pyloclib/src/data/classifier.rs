//! Python source line classifier.
//!
//! Each physical line is stripped of surrounding whitespace and assigned to
//! exactly one [`LineCategory`]. The only state carried between lines is
//! whether we are inside an open triple-quoted block, modelled as a two-state
//! machine:
//!
//! ```text
//!              line starts with """ or '''
//!   Normal  ---------------------------------->  InsideDocstring
//!           <----------------------------------
//!              line ends with """ or '''
//! ```
//!
//! While `Normal`, checks run in a fixed priority order: comment, single-line
//! docstring, blank, opening fence, and finally code. While `InsideDocstring`,
//! every line is docstring; the one that ends with a fence also closes the block.
//! So a `# ...` line between fences is docstring, never a comment.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. A file whose last line carries a
//! line break gets one extra blank line, the implicit empty line after the
//! final terminator.

use super::stats::{LineCategory, Locs};

const FENCES: [&str; 2] = ["\"\"\"", "'''"];
const QUOTES: [char; 2] = ['"', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Normal,
    InsideDocstring,
}

/// Classifies the lines of one file.
///
/// A classifier holds the counters and block state of a single file; create a
/// fresh one for every file. It is cheap and owns no shared state, so files can
/// be classified on as many threads as needed.
#[derive(Debug, Default)]
pub struct LineClassifier {
    state: State,
    locs: Locs,
    last_had_line_break: bool,
}

impl LineClassifier {
    /// Create a classifier at the start of a file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an opening fence has been seen without its closing fence.
    pub fn inside_multiline_string(&self) -> bool {
        self.state == State::InsideDocstring
    }

    /// Classify one raw line (line terminator optional) and count it.
    pub fn push_line(&mut self, raw: &str) -> LineCategory {
        self.last_had_line_break = raw.ends_with(['\n', '\r']);

        let line = raw.trim();
        let (category, next) = match self.state {
            State::Normal => classify_outside(line),
            State::InsideDocstring => classify_inside(line),
        };
        self.state = next;
        self.locs.record(category);
        category
    }

    /// Finish the file and return its counts.
    pub fn finish(self) -> Locs {
        let mut locs = self.locs;
        if self.last_had_line_break {
            locs.blank += 1;
            locs.total += 1;
        }
        locs
    }
}

fn classify_outside(line: &str) -> (LineCategory, State) {
    if line.starts_with('#') {
        (LineCategory::Comment, State::Normal)
    } else if is_single_line_docstring(line) {
        (LineCategory::DocstringSingleLine, State::Normal)
    } else if line.is_empty() {
        (LineCategory::Blank, State::Normal)
    } else if opens_fence(line) {
        (LineCategory::DocstringMultiLineStart, State::InsideDocstring)
    } else {
        (LineCategory::Code, State::Normal)
    }
}

fn classify_inside(line: &str) -> (LineCategory, State) {
    if closes_fence(line) {
        (LineCategory::DocstringMultiLineEnd, State::Normal)
    } else {
        (LineCategory::DocstringMultiLineBody, State::InsideDocstring)
    }
}

fn opens_fence(line: &str) -> bool {
    FENCES.iter().any(|fence| line.starts_with(fence))
}

fn closes_fence(line: &str) -> bool {
    FENCES.iter().any(|fence| line.ends_with(fence))
}

/// `"""text"""` / `'''text'''` with a non-empty interior, or a line that is a
/// single quoted string without any quote inside it.
fn is_single_line_docstring(line: &str) -> bool {
    // Both fences plus at least one character between them.
    let triple = line.len() > 6 && opens_fence(line) && closes_fence(line);
    if triple {
        return true;
    }

    let mut chars = line.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if QUOTES.contains(&first) && QUOTES.contains(&last) => {
            let inner = chars.as_str();
            !inner.is_empty() && !inner.contains(QUOTES)
        }
        _ => false,
    }
}

/// Classify a sequence of raw lines, each optionally ending with its line break.
pub fn classify<I, S>(lines: I) -> Locs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut classifier = LineClassifier::new();
    for line in lines {
        classifier.push_line(line.as_ref());
    }
    classifier.finish()
}

/// Split content after each line break, keeping the terminator on the line.
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_lines<'a>(content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\n', '\r']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Classify the whole content of a file.
///
/// # Example
///
/// ```rust
/// use pyloclib::classify_str;
///
/// let locs = classify_str("\"\"\"Module docs.\"\"\"\nimport os\n# done");
/// assert_eq!(locs.docstring, 1);
/// assert_eq!(locs.code, 1);
/// assert_eq!(locs.comments, 1);
/// assert_eq!(locs.total, 3);
/// ```
pub fn classify_str(content: &str) -> Locs {
    classify(split_lines(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(content: &str) -> Vec<LineCategory> {
        let mut classifier = LineClassifier::new();
        split_lines(content)
            .map(|line| classifier.push_line(line))
            .collect()
    }

    #[test]
    fn empty_file_is_all_zeros() {
        let locs = classify_str("");
        assert_eq!(locs, Locs::new());
    }

    #[test]
    fn basic_categories() {
        let locs = classify_str("import os\n\n# comment\nx = 1");

        assert_eq!(locs.code, 2);
        assert_eq!(locs.blank, 1);
        assert_eq!(locs.comments, 1);
        assert_eq!(locs.docstring, 0);
        assert_eq!(locs.total, 4);
    }

    #[test]
    fn trailing_newline_adds_blank_line() {
        let without = classify_str("x = 1\ny = 2");
        let with = classify_str("x = 1\ny = 2\n");

        assert_eq!(with.blank, without.blank + 1);
        assert_eq!(with.total, without.total + 1);
        assert_eq!(with.code, without.code);
    }

    #[test]
    fn crlf_terminated_lines() {
        let locs = classify_str("x = 1\r\n\r\n# c\r\n");

        assert_eq!(locs.code, 1);
        assert_eq!(locs.comments, 1);
        // The empty line plus the implicit trailing one
        assert_eq!(locs.blank, 2);
        assert_eq!(locs.total, 4);
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let locs = classify_str("\t\"\"\"\nx\r");

        assert_eq!(locs.docstring, 2);
        // The trailing `\r` counts as a final line break
        assert_eq!(locs.blank, 1);
        assert_eq!(locs.total, 3);

        let locs = classify_str("a = 1\rb = 2");
        assert_eq!(locs.code, 2);
        assert_eq!(locs.total, 2);
    }

    #[test]
    fn split_lines_keeps_terminators() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\n\r\nd").collect();
        assert_eq!(lines, vec!["a\r\n", "b\r", "c\n", "\r\n", "d"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn lone_newline() {
        let locs = classify_str("\n");
        assert_eq!(locs.blank, 2);
        assert_eq!(locs.total, 2);
    }

    #[test]
    fn multiline_fence_pairing() {
        let locs = classify(["\"\"\"", "body", "\"\"\""]);

        assert_eq!(locs.docstring, 3);
        assert_eq!(locs.code, 0);
        assert_eq!(locs.total, 3);
    }

    #[test]
    fn multiline_categories_in_order() {
        let cats = categories("'''Summary\n\nmore\n'''\nx = 1\n");
        assert_eq!(
            cats,
            vec![
                LineCategory::DocstringMultiLineStart,
                LineCategory::DocstringMultiLineBody,
                LineCategory::DocstringMultiLineBody,
                LineCategory::DocstringMultiLineEnd,
                LineCategory::Code,
            ]
        );
    }

    #[test]
    fn same_line_docstring() {
        let locs = classify(["\"\"\"hello\"\"\""]);
        assert_eq!(locs.docstring, 1);
        assert_eq!(locs.code, 0);
        assert_eq!(locs.total, 1);

        let locs = classify_str("'''hello'''\n");
        assert_eq!(locs.docstring, 1);
        assert_eq!(locs.blank, 1);
        assert_eq!(locs.total, 2);
    }

    #[test]
    fn empty_triple_quotes_open_a_block() {
        // Six quotes have no interior, so this is an opening fence
        let mut classifier = LineClassifier::new();
        assert_eq!(
            classifier.push_line("\"\"\"\"\"\"\n"),
            LineCategory::DocstringMultiLineStart
        );
        assert!(classifier.inside_multiline_string());
    }

    #[test]
    fn quoted_string_line() {
        let cats = categories("\"plain\"\n'single'\n\"it's\"\n''\n");
        assert_eq!(
            cats,
            vec![
                LineCategory::DocstringSingleLine,
                LineCategory::DocstringSingleLine,
                LineCategory::Code,
                LineCategory::Code,
            ]
        );
    }

    #[test]
    fn comment_inside_docstring_is_docstring() {
        let locs = classify(["\"\"\"", "# not a comment", "\"\"\""]);

        assert_eq!(locs.docstring, 3);
        assert_eq!(locs.comments, 0);
    }

    #[test]
    fn blank_inside_docstring_is_docstring() {
        let locs = classify(["'''", "", "   ", "'''"]);
        assert_eq!(locs.docstring, 4);
        assert_eq!(locs.blank, 0);
    }

    #[test]
    fn closing_fence_with_text_before_it() {
        let cats = categories("\"\"\"Start\nThe end.\"\"\"\nx = 1");
        assert_eq!(
            cats,
            vec![
                LineCategory::DocstringMultiLineStart,
                LineCategory::DocstringMultiLineEnd,
                LineCategory::Code,
            ]
        );
    }

    #[test]
    fn assignment_of_triple_quoted_string_is_code() {
        // Only a fence at the start of a line opens a block
        let cats = categories("text = \"\"\"\n# comment\n");
        assert_eq!(cats, vec![LineCategory::Code, LineCategory::Comment]);
    }

    #[test]
    fn indented_docstring() {
        let source = "def f():\n    \"\"\"Doc.\n\n    More.\n    \"\"\"\n    return 1\n";
        let locs = classify_str(source);

        assert_eq!(locs.code, 2);
        assert_eq!(locs.docstring, 4);
        assert_eq!(locs.blank, 1);
        assert_eq!(locs.total, 7);
    }

    #[test]
    fn unterminated_block_runs_to_end_of_file() {
        let locs = classify(["'''", "x = 1", "# c"]);
        assert_eq!(locs.docstring, 3);
        assert_eq!(locs.code, 0);
    }

    #[test]
    fn state_resets_per_classifier() {
        let first = classify(["\"\"\"", "open"]);
        let second = classify(["x = 1"]);

        assert_eq!(first.docstring, 2);
        assert_eq!(second.code, 1);
        assert_eq!(second.docstring, 0);
    }

    #[test]
    fn sum_invariant_and_idempotence() {
        let source = "#!/usr/bin/env python\n\"\"\"Mod.\"\"\"\n\nimport sys\n\
                      '''\nblock\n# inner\n'''\ndef main():\n    'doc'\n    pass\n";
        let a = classify_str(source);
        let b = classify_str(source);

        assert_eq!(a, b);
        assert!(a.is_consistent());
        assert_eq!(a.comments, 1);
        assert_eq!(a.docstring, 6);
        assert_eq!(a.code, 3);
        assert_eq!(a.blank, 2);
    }
}
