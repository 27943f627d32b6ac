#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    line: TestLine,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, line: TestLine) -> Self {
        Self { name, group, line }
    }

    pub fn plain(name: &'static str, line: TestLine) -> Self {
        Self::new(name, TestGroup::Plain, line)
    }

    pub fn folded(name: &'static str, line: TestLine) -> Self {
        Self::new(name, TestGroup::Folded, line)
    }

    pub fn malformed(name: &'static str, line: TestLine) -> Self {
        Self::new(name, TestGroup::Malformed, line)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn line(&self) -> &TestLine {
        &self.line
    }

    pub fn content(&self) -> &'static [u8] {
        self.line().content()
    }
}

/// One header field line, CRLF included.
#[derive(Debug, Copy, Clone)]
pub struct TestLine {
    content: &'static [u8],
}

impl TestLine {
    pub const fn new(content: &'static [u8]) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &'static [u8] {
        self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestGroup {
    Plain,
    Folded,
    Malformed,
}

impl TestGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestGroup::Plain => "plain",
            TestGroup::Folded => "folded",
            TestGroup::Malformed => "malformed",
        }
    }
}
