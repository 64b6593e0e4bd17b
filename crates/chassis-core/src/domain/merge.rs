//! Merge-step descriptions shared between the orchestrator and the
//! tree-composition adapter.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// File extension marking a template. Rendered on every merge, never
/// copied verbatim; the extension is stripped from the destination name.
pub const TEMPLATE_EXTENSION: &str = "tpl";

/// A directory filter matching on whole path segments.
///
/// A filter hits a path when the filter's component sequence appears as a
/// consecutive run of that path's components. So `ios` hits `x/ios/y` but
/// not `x/ios_legacy/y`, and `platform/android/native` hits everything
/// under that subtree when built from an absolute source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    components: Vec<OsString>,
}

impl PathFilter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let components = path
            .as_ref()
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_os_string()),
                _ => None,
            })
            .collect();
        Self { components }
    }

    /// Whether `path` contains this filter's segment run.
    pub fn hits(&self, path: &Path) -> bool {
        if self.components.is_empty() {
            return false;
        }
        let parts: Vec<_> = path
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_os_string()),
                _ => None,
            })
            .collect();
        parts
            .windows(self.components.len())
            .any(|window| window == self.components.as_slice())
    }
}

/// One composition step: a source tree layered into a destination tree.
///
/// Skip filters prune whole subtrees. Match filters gate which directories
/// contribute files without stopping descent, since a deeper directory may
/// still match. Files directly under the source root are exempt from both.
/// A skip hit wins over any match hit.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeSpec {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub skip_filters: Vec<PathFilter>,
    pub match_filters: Vec<PathFilter>,
}

impl MergeSpec {
    pub fn new(source: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            skip_filters: Vec::new(),
            match_filters: Vec::new(),
        }
    }

    pub fn skip(mut self, filter: impl AsRef<Path>) -> Self {
        self.skip_filters.push(PathFilter::new(filter));
        self
    }

    pub fn match_dir(mut self, filter: impl AsRef<Path>) -> Self {
        self.match_filters.push(PathFilter::new(filter));
        self
    }
}

/// What one merge (or a whole pipeline of merges) did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    /// Templates rendered into the destination.
    pub rendered: usize,
    /// Plain assets copied because the destination was missing or stale.
    pub copied: usize,
    /// Plain assets left alone because the destination was current.
    pub up_to_date: usize,
}

impl MergeReport {
    pub fn written(&self) -> usize {
        self.rendered + self.copied
    }

    /// Fold another report into this one.
    pub fn absorb(&mut self, other: MergeReport) {
        self.rendered += other.rendered;
        self.copied += other.copied;
        self.up_to_date += other.up_to_date;
    }
}
