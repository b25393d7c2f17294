use std::fmt::{self, Write};

const INDENT: &str = "  ";

/// Minimal indented XML writer for documents whose shape is known up front.
///
/// Elements without children are written as an open/close pair on one line,
/// attributes keep the order they are given in.
#[derive(Debug, Default)]
pub struct XmlWriter {
    out: String,
    depth: usize,
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declaration(&mut self, version: &str, encoding: &str) -> fmt::Result {
        writeln!(
            self.out,
            r#"<?xml version="{version}" encoding="{encoding}"?>"#
        )
    }

    pub fn open(&mut self, name: &str, attributes: &[(&str, &str)]) -> fmt::Result {
        self.start_tag(name, attributes)?;
        self.depth += 1;
        Ok(())
    }

    pub fn close(&mut self, name: &str) -> fmt::Result {
        self.depth = self.depth.saturating_sub(1);
        self.line_break()?;
        write!(self.out, "</{name}>")
    }

    pub fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> fmt::Result {
        self.start_tag(name, attributes)?;
        write!(self.out, "</{name}>")
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn start_tag(&mut self, name: &str, attributes: &[(&str, &str)]) -> fmt::Result {
        self.line_break()?;
        write!(self.out, "<{name}")?;
        for (key, value) in attributes {
            write!(self.out, r#" {key}=""#)?;
            escape_into(&mut self.out, value)?;
            self.out.write_char('"')?;
        }
        self.out.write_char('>')
    }

    // No newline before the root element, whose line follows the declaration.
    fn line_break(&mut self) -> fmt::Result {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.write_char('\n')?;
        }
        for _ in 0..self.depth {
            self.out.write_str(INDENT)?;
        }
        Ok(())
    }
}

fn escape_into(out: &mut String, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '"' => out.write_str("&#34;")?,
            '\'' => out.write_str("&#39;")?,
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '\t' => out.write_str("&#x9;")?,
            '\n' => out.write_str("&#xA;")?,
            '\r' => out.write_str("&#xD;")?,
            c if is_xml_char(c) => out.write_char(c)?,
            _ => out.write_char('\u{FFFD}')?,
        }
    }
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("<tag>", "&lt;tag&gt;")]
    #[case(r#"say "hi""#, "say &#34;hi&#34;")]
    #[case("it's", "it&#39;s")]
    #[case("tab\there", "tab&#x9;here")]
    #[case("line\nbreak\r", "line&#xA;break&#xD;")]
    #[case("bell\u{7}", "bell\u{FFFD}")]
    #[case("$PROJECT_DIR$", "$PROJECT_DIR$")]
    fn escapes_attribute_values(#[case] raw: &str, #[case] expected: &str) {
        let mut out = String::new();
        escape_into(&mut out, raw).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn writes_nested_document_with_two_space_indent() {
        let mut writer = XmlWriter::new();
        writer.declaration("1.0", "UTF-8").unwrap();
        writer.open("root", &[("a", "1"), ("b", "2")]).unwrap();
        writer.open("child", &[]).unwrap();
        writer.empty("leaf", &[("value", "x")]).unwrap();
        writer.close("child").unwrap();
        writer.close("root").unwrap();

        assert_eq!(
            writer.finish(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <root a=\"1\" b=\"2\">\n\
             \x20\x20<child>\n\
             \x20\x20\x20\x20<leaf value=\"x\"></leaf>\n\
             \x20\x20</child>\n\
             </root>"
        );
    }

    #[test]
    fn default_writer_starts_empty() {
        assert_eq!(XmlWriter::default().finish(), "");
    }

    #[test]
    fn empty_root_without_declaration() {
        let mut writer = XmlWriter::new();
        writer.empty("only", &[]).unwrap();
        assert_eq!(writer.finish(), "<only></only>");
    }
}
