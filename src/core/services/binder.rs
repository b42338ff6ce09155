//! Pattern binder - turns check templates into concrete per-target assertions
//!
//! Every template carries a regex that is searched (not full-matched) against
//! each target identifier. On a match, each needle template is instantiated
//! with the capture groups of that match substituted for `$N` placeholders.

use regex::{Captures, Regex};

use crate::core::models::{Assertion, NeedleTemplate, Target};
use crate::error::ConfigError;

/// A compiled identifier pattern and the needles it binds
#[derive(Debug, Clone)]
pub struct AssertionTemplate {
    pattern: Regex,
    needles: Vec<NeedleTemplate>,
}

impl AssertionTemplate {
    /// Compile a template; an invalid regex is a fatal configuration error
    pub fn compile(pattern: &str, needles: Vec<NeedleTemplate>) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern, needles })
    }

    /// The identifier pattern source
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Needle templates in declaration order
    #[must_use]
    pub fn needles(&self) -> &[NeedleTemplate] {
        &self.needles
    }

    /// Assertions this template produces for `identifier`, if it matches
    fn instantiate(&self, identifier: &str) -> Option<impl Iterator<Item = Assertion>> {
        let captures = self.pattern.captures(identifier)?;
        Some(self.needles.iter().map(move |needle| {
            Assertion::new(substitute(&needle.template, &captures), needle.template.clone(), needle.expected)
        }))
    }
}

/// Bind every identifier against every template, preserving identifier order
#[must_use]
pub fn bind<I, S>(templates: &[AssertionTemplate], identifiers: I) -> Vec<Target>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    identifiers.into_iter().map(|id| bind_target(templates, id)).collect()
}

/// Build the target for one identifier
///
/// Assertions accumulate in template order, then needle order. An identifier
/// that matches no template still yields a target, with no assertions.
pub fn bind_target(templates: &[AssertionTemplate], identifier: impl Into<String>) -> Target {
    let mut target = Target::new(identifier);
    for template in templates {
        if let Some(assertions) = template.instantiate(&target.identifier) {
            target.assertions.extend(assertions);
        }
    }
    target
}

/// Replace `$N` placeholders with capture group `N`
///
/// Every occurrence is replaced in a single left-to-right pass; substituted
/// text is not rescanned. The longest digit run naming an existing group is
/// used, so with two groups `$10` reads as group 1 followed by `0`. A group
/// that exists but did not participate in the match becomes the empty string.
/// Placeholders naming no group are left as literal text.
#[must_use]
pub fn substitute(template: &str, captures: &Captures<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();

        if let Some((used, text)) = resolve_group(&after[..digits], captures) {
            out.push_str(text);
            rest = &after[used..];
        } else {
            out.push('$');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Longest prefix of `digits` that names a group, with the group's text
fn resolve_group<'h>(digits: &str, captures: &Captures<'h>) -> Option<(usize, &'h str)> {
    (1..=digits.len()).rev().find_map(|len| {
        let candidate = &digits[..len];
        if len > 1 && candidate.starts_with('0') {
            return None;
        }
        let index: usize = candidate.parse().ok()?;
        (index < captures.len()).then(|| (len, captures.get(index).map_or("", |m| m.as_str())))
    })
}
