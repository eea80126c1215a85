//! Method naming convention checks.
//!
//! A name conforms when the whole identifier matches the rule's pattern. The
//! default rule is lower camel case with at least one hump, so single-word
//! names such as `run` are reported as non-conforming.

use crate::core::Result;
use once_cell::sync::Lazy;
use regex::Regex;

pub const LOWER_CAMEL_CASE_PATTERN: &str = "^[a-z]+([A-Z][a-z0-9]+)+";

static LOWER_CAMEL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&anchored(LOWER_CAMEL_CASE_PATTERN)).unwrap());

fn anchored(pattern: &str) -> String {
    format!(r"\A(?:{pattern})\z")
}

#[derive(Clone, Debug)]
pub struct NamingRule {
    pattern: String,
    regex: Regex,
}

impl NamingRule {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(&anchored(pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    pub fn lower_camel_case() -> Self {
        Self {
            pattern: LOWER_CAMEL_CASE_PATTERN.to_string(),
            regex: LOWER_CAMEL_CASE.clone(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_conforming(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl Default for NamingRule {
    fn default() -> Self {
        Self::lower_camel_case()
    }
}

/// Outcome of checking a file's method names against a rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NamingCheck {
    pub total: usize,
    pub non_conforming: Vec<String>,
}

impl NamingCheck {
    /// Percentage of non-conforming names, 0.0 when no names were checked.
    pub fn incorrect_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.non_conforming.len() as f64 / self.total as f64
    }
}

pub fn check_names<'a, I>(names: I, rule: &NamingRule) -> NamingCheck
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .fold(NamingCheck::default(), |mut check, name| {
            check.total += 1;
            if !rule.is_conforming(name) {
                check.non_conforming.push(name.to_string());
            }
            check
        })
}

pub fn incorrect_name_percentage<'a, I>(names: I, rule: &NamingRule) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    check_names(names, rule).incorrect_percentage()
}
