//! The selector program model.
//!
//! Selectors are linear: a [`Chain`] is executed left to right and is
//! never a tree. A [`Program`] holds the top-level comma-separated list
//! of chains that are each applied to the same root document.

/// Lexical tokens of the selector language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// String literal enclosed in double quotes, escapes preserved
    ///
    /// # Examples
    /// ```text
    /// "key"
    /// "bigger key"
    /// ```
    String(String),

    /// Signed integer used for indices and ranges
    ///
    /// # Examples
    /// ```text
    /// 42
    /// -1
    /// ```
    Integer(i64),

    /// `.` - the any selector or the optional step separator
    Dot,

    /// `..` - the flatten selector (matched before `.`)
    DotDot,

    /// `,` - separates root chains and property keys
    Comma,

    /// `:` - separates range bounds
    Colon,

    /// `|` - the filter selector prefix
    Pipe,

    /// `!` - the truncate selector
    Exclamation,

    /// `[` for index and range selectors
    LBracket,

    /// `]`
    RBracket,

    /// `{` for property selectors
    LBrace,

    /// `}`
    RBrace,

    /// End of input
    Eof,
}

/// One selector step within a chain.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// Selects everything.
    ///
    /// Written `.` and only valid as the first step of a chain, though
    /// other selectors may follow it. Applies to every json value.
    Any,

    /// Selects a single key from an object.
    ///
    /// Written as a quoted string. E.g. `{"key1":1,"key2":2}` with the
    /// selector `"key2"` turns into `2`.
    Key(String),

    /// Selects a single element from an array, zero-based.
    ///
    /// E.g. `[1,2,3]` with the selector `[1]` turns into `2`.
    Index(i64),

    /// Selects an inclusive sub-range from an array.
    ///
    /// Either bound may be omitted: `[1:2]`, `[4:]`, `[:3]`, `[:]` and
    /// `[]` are all ranges, the last two selecting the whole array.
    /// E.g. `[1,2,3,4,5]` with `[1:3]` turns into `[2,3,4]`.
    Range {
        start: Option<i64>,
        end: Option<i64>,
    },

    /// Selects multiple keys from an object, building a new object.
    ///
    /// E.g. `{"key1":1,"key2":2,"key3":3}` with `{"key1","key3"}` turns
    /// into `{"key1":1,"key3":3}`.
    Property(Vec<String>),

    /// Filters an array for objects containing a key.
    ///
    /// Written `|` followed by a key. Elements that are objects with the
    /// key contribute their associated value; everything else is
    /// skipped. E.g. `[{"key":1},{"key":2},5]` with `|"key"` turns into
    /// `[1,2]`.
    Filter(String),

    /// Truncates the json at the current value.
    ///
    /// Written `!` and only valid as the last step of its chain. Objects
    /// and arrays become empty; other values pass through unchanged.
    Truncate,

    /// Flattens one level of array nesting.
    ///
    /// Written `..`. The rest of the chain is applied to every element;
    /// results that are arrays are spliced into the output and
    /// non-array results are dropped. E.g. `[[1,2],[3,4]]` with `..`
    /// turns into `[1,2,3,4]`.
    Flatten,
}

impl Selector {
    /// The selector's name as used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Selector::Any => "Any",
            Selector::Key(_) => "Key",
            Selector::Index(_) => "Index",
            Selector::Range { .. } => "Range",
            Selector::Property(_) => "Property",
            Selector::Filter(_) => "Filter",
            Selector::Truncate => "Truncate",
            Selector::Flatten => "Flatten",
        }
    }
}

/// A list of sequential selectors sharing one root.
///
/// Applying a chain applies its selectors in order, each one working on
/// the result of the previous.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    selectors: Vec<Selector>,
}

impl Chain {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Chain { selectors }
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }
}

/// A full selector program: a non-empty list of independent chains.
///
/// With a single chain the program result is that chain's result; with
/// more than one the results are collected into an array in declaration
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    chains: Vec<Chain>,
}

impl Program {
    pub fn new(chains: Vec<Chain>) -> Self {
        Program { chains }
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
}
