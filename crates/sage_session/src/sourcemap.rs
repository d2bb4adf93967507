/// A named source with cached line-break offsets, so that byte offsets from
/// spans can be rendered as `line:col` pairs when reporting errors.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    text: String,
    line_breaks: Vec<usize>,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();

        let line_breaks = text
            .char_indices()
            .filter_map(|(i, ch)| (ch == '\n').then_some(i))
            .collect();

        Self {
            name: name.into(),
            text,
            line_breaks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Both line and column are 1-based. Returns `None` if `byte` is past the
    /// end of the source.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;

        let line_start = self.line_to_byte(line)?;
        let col = byte - line_start;

        Some((line + 1, col + 1))
    }

    fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.text.len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    fn line_to_byte(&self, line: usize) -> Option<usize> {
        if line == 0 {
            Some(0)
        } else {
            self.line_breaks.get(line - 1).map(|&byte| byte + 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Source;

    fn source(s: &str) -> Source {
        Source::new("sample", s)
    }

    #[test]
    fn empty_source() {
        let src = source("");
        assert_eq!(src.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(src.byte_to_line_col(1), None);
    }

    #[test]
    fn single_newline() {
        let src = source("\n");
        assert_eq!(src.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(src.byte_to_line_col(1), Some((2, 1)));
        assert_eq!(src.byte_to_line_col(2), None);
    }

    #[test]
    fn text_then_newline() {
        let src = source("x\n");
        assert_eq!(src.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(src.byte_to_line_col(1), Some((1, 2)));
        assert_eq!(src.byte_to_line_col(2), Some((2, 1)));
    }

    #[test]
    fn newline_then_text() {
        let src = source("\nx");
        assert_eq!(src.byte_to_line_col(0), Some((1, 1)));
        assert_eq!(src.byte_to_line_col(1), Some((2, 1)));
        assert_eq!(src.byte_to_line_col(2), Some((2, 2)));
    }

    #[test]
    fn multi_line() {
        let src = source("fn main() {\n\treturn 42;\n}\n");
        // byte offset of `return`
        assert_eq!(src.byte_to_line_col(13), Some((2, 2)));
        // byte offset of the closing brace
        assert_eq!(src.byte_to_line_col(24), Some((3, 1)));
    }
}
