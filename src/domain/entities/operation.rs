//! Operation entity - typed pseudo-syntax nodes
//!
//! Operations describe tool calls and control flow inside guideline examples.
//! They are rendered to text by `domain::services::pseudo_syntax`.

/// Argument to an operation
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Literal text, rendered as-is
    Text(String),
    /// Variable reference, rendered as a `{{ NAME }}` placeholder
    Var(String),
    /// Nested operation
    Op(Box<Operation>),
}

impl Arg {
    /// Reference a variable (paths, dates, target name...)
    pub fn var(name: impl Into<String>) -> Self {
        Arg::Var(name.into())
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<Operation> for Arg {
    fn from(value: Operation) -> Self {
        Arg::Op(Box::new(value))
    }
}

/// Single-word operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Report,
    Note,
    Skip,
    Verify,
    Output,
    Input,
    Context,
}

impl Directive {
    pub const ALL: [Directive; 7] = [
        Directive::Report,
        Directive::Note,
        Directive::Skip,
        Directive::Verify,
        Directive::Output,
        Directive::Input,
        Directive::Context,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Directive::Report => "REPORT",
            Directive::Note => "NOTE",
            Directive::Skip => "SKIP",
            Directive::Verify => "VERIFY",
            Directive::Output => "OUTPUT",
            Directive::Input => "INPUT",
            Directive::Context => "CONTEXT",
        }
    }

    /// Parse a directive from its keyword, case-insensitively
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.keyword().eq_ignore_ascii_case(keyword))
    }
}

/// A typed pseudo-syntax node
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// `Name(args...)`
    ToolCall { name: String, args: Vec<Arg> },
    /// Delegation to another agent, `Task(@agent-<id>, args...)`
    Delegate { agent: String, args: Vec<Arg> },
    /// `IF(cond) → THEN → [...] → ELSE → [...] → END-IF`
    Conditional {
        condition: Arg,
        then: Vec<Operation>,
        otherwise: Option<Vec<Operation>>,
    },
    /// `FOREACH(item) → [...] → END-FOREACH`
    Loop { item: Arg, body: Vec<Operation> },
    /// `STORE-AS($NAME = value)`
    StoreAs { name: String, value: Arg },
    /// `STORE-GET($NAME)`
    StoreGet { name: String },
    /// `TASK → [...] → END-TASK`
    Task { body: Vec<Operation> },
    /// `REPORT(...)`, `NOTE(...)`, ...
    Directive { directive: Directive, args: Vec<Arg> },
}

impl Operation {
    /// Tool call without arguments
    pub fn call(name: impl Into<String>) -> Self {
        Operation::ToolCall {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn tool<A: Into<Arg>>(name: impl Into<String>, args: impl IntoIterator<Item = A>) -> Self {
        Operation::ToolCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn delegate<A: Into<Arg>>(
        agent: impl Into<String>,
        args: impl IntoIterator<Item = A>,
    ) -> Self {
        Operation::Delegate {
            agent: agent.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn conditional(
        condition: impl Into<Arg>,
        then: Vec<Operation>,
        otherwise: Option<Vec<Operation>>,
    ) -> Self {
        Operation::Conditional {
            condition: condition.into(),
            then,
            otherwise,
        }
    }

    pub fn foreach(item: impl Into<Arg>, body: Vec<Operation>) -> Self {
        Operation::Loop {
            item: item.into(),
            body,
        }
    }

    pub fn store_as(name: impl Into<String>, value: impl Into<Arg>) -> Self {
        Operation::StoreAs {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn store_get(name: impl Into<String>) -> Self {
        Operation::StoreGet { name: name.into() }
    }

    pub fn task(body: Vec<Operation>) -> Self {
        Operation::Task { body }
    }

    pub fn directive<A: Into<Arg>>(directive: Directive, args: impl IntoIterator<Item = A>) -> Self {
        Operation::Directive {
            directive,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn report(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Report, [text])
    }

    pub fn note(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Note, [text])
    }

    pub fn skip(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Skip, [text])
    }

    pub fn verify(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Verify, [text])
    }

    pub fn output(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Output, [text])
    }

    pub fn input(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Input, [text])
    }

    pub fn context(text: impl Into<Arg>) -> Self {
        Self::directive(Directive::Context, [text])
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::domain::services::pseudo_syntax::render(self))
    }
}
