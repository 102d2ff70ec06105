//! Minimal CSS output: declarations, class rules, stylesheets.

use std::fmt;

/// One `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    #[must_use]
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Declarations in emission order.
pub type Declarations = Vec<Declaration>;

/// A single-class rule: `.{class} { … }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Unescaped class name, e.g. `shadow-sc-[37]`.
    pub class: String,
    pub declarations: Declarations,
}

impl Rule {
    #[must_use]
    pub fn new(class: impl Into<String>, declarations: Declarations) -> Self {
        Self {
            class: class.into(),
            declarations,
        }
    }

    /// The class selector with CSS escapes applied.
    #[must_use]
    pub fn selector(&self) -> String {
        format!(".{}", escape_class(&self.class))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {{", self.selector())?;
        for declaration in &self.declarations {
            writeln!(f, "  {declaration}")?;
        }
        write!(f, "}}")
    }
}

/// Rules in order. Rules without declarations are skipped on output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }
}

impl Extend<Rule> for Stylesheet {
    fn extend<T: IntoIterator<Item = Rule>>(&mut self, iter: T) {
        self.rules.extend(iter);
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for rule in self.rules.iter().filter(|r| !r.declarations.is_empty()) {
            if !first {
                writeln!(f)?;
            }
            writeln!(f, "{rule}")?;
            first = false;
        }
        Ok(())
    }
}

/// Backslash-escape everything outside `[A-Za-z0-9_-]` so arbitrary values
/// like `[37]` or `[#fff]` survive in a selector.
#[must_use]
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len());
    for c in class.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}
