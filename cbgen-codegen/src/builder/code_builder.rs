//! Code builder utility for generating properly indented code.

/// One indentation level. cbitcoin sources indent with tabs.
const INDENT: &str = "\t";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use cbgen_codegen::CodeBuilder;
///
/// let code = CodeBuilder::c()
///     .block_with_close("void CBFreeWidget(void * self){", "}", |b| {
///         b.line("CBFreeObject(self);")
///     })
///     .build();
///
/// assert_eq!(code, "void CBFreeWidget(void * self){\n\tCBFreeObject(self);\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder for C source.
    pub fn c() -> Self {
        Self {
            indent_level: 0,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a Doxygen comment: `/**`, one ` text` line per entry, then `close`.
    ///
    /// cbitcoin closes file and structure docs with `*/` and function docs
    /// with ` */`, so the closing line is up to the caller.
    pub fn doxygen<I, S>(self, lines: I, close: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let builder = self.line("/**");
        builder
            .each(lines, |b, text| b.line(&format!(" {}", text.as_ref())))
            .line(close)
    }

    /// Add a `//  Title` section comment followed by a blank line.
    pub fn section(self, title: &str) -> Self {
        self.line(&format!("//  {}", title)).blank()
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::c()
    }
}
