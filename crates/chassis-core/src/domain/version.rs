//! Semantic version parsing and the packed `version_num` encoding.
//!
//! App versions follow `MAJOR(.MINOR)?(.PATCH)?(-..PREn..)?`. Parsing is
//! anchored at the start only: once the leading components are consumed,
//! trailing text is ignored (`1.2.3.4` reads as `1.2.3`, `1.2.3-beta`
//! carries no numeric pre-release). Each component gets two decimal digits
//! in the packed form, so every component must stay below 100.

use std::cmp::Ordering;

use crate::domain::DomainError;

/// A parsed application version. Missing components read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: u64,
}

impl SemanticVersion {
    /// Parse the leading semantic version out of `version`.
    ///
    /// The pre-release number is the first digit run after a hyphen that
    /// immediately follows the numeric components, so `1.2.3-rc4` yields
    /// `pre = 4` while `1.2.3-beta` yields `pre = 0`.
    pub fn parse(version: &str) -> Result<Self, DomainError> {
        let (major_digits, mut rest) = split_digit_run(version);
        if major_digits.is_empty() {
            return Err(DomainError::VersionNotSemantic);
        }
        let major = component(major_digits, "major")?;

        let mut minor = 0;
        let mut patch = 0;
        for (slot, name) in [(&mut minor, "minor"), (&mut patch, "patch")] {
            let Some(candidate) = rest.strip_prefix('.') else {
                break;
            };
            let (digits, tail) = split_digit_run(candidate);
            if digits.is_empty() {
                break;
            }
            *slot = component(digits, name)?;
            rest = tail;
        }

        let mut pre = 0;
        if let Some(tail) = rest.strip_prefix('-') {
            if let Some(start) = tail.find(|c: char| c.is_ascii_digit()) {
                let (digits, _) = split_digit_run(&tail[start..]);
                pre = component(digits, "pre")?;
            }
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre,
        })
    }

    /// Pack into a single ordered integer, two decimal digits per component.
    pub fn encode(&self) -> u64 {
        self.pre + self.patch * 100 + self.minor * 10_000 + self.major * 1_000_000
    }
}

/// Split `s` into its leading ASCII digit run and the remainder.
fn split_digit_run(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

fn component(digits: &str, name: &'static str) -> Result<u64, DomainError> {
    // A run too long for u64 is certainly >= 100.
    let value: u64 = digits
        .parse()
        .map_err(|_| DomainError::VersionComponentTooLarge { component: name })?;
    if value >= 100 {
        return Err(DomainError::VersionComponentTooLarge { component: name });
    }
    Ok(value)
}

/// Compare two dot-separated version strings numerically.
///
/// `10.0.0` outranks `9.0.0`; a longer version wins a tie on the shared
/// prefix (`30.0.1` over `30.0`). Non-numeric components count as zero.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parts = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|part| part.parse::<u64>().unwrap_or(0))
            .collect()
    };
    let pa = parts(a);
    let pb = parts(b);
    for (x, y) in pa.iter().zip(pb.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    pa.len().cmp(&pb.len())
}
