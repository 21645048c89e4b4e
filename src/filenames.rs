use glob::MatchOptions;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Files matched by a set of wildcard patterns, with their extension-stripped twins.
/// Both vectors always have the same length and order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    pub files: Vec<String>,
    pub basenames: Vec<String>,
}

impl Resolved {
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.files, self.basenames)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .zip(&self.basenames)
            .map(|(f, b)| (f.as_str(), b.as_str()))
    }
}

/// Expands wildcard patterns into existing paths.
///
/// ```no_run
/// let resolved = quickargs::FilenameResolver::new(["*.ppm", "*.png"])
///     .extensions([".ppm", ".png"])
///     .sorted(true)
///     .resolve();
/// for (file, base) in resolved.iter() {
///     println!("{file} -> {base}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilenameResolver {
    patterns: Vec<String>,
    extensions: Option<HashSet<String>>,
    sort: bool,
}

impl FilenameResolver {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            extensions: None,
            sort: false,
        }
    }

    /// Keep only files whose extension (with the leading period) is in `extensions`.
    /// An empty set filters out everything.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    pub fn sorted(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn resolve(&self) -> Resolved {
        let mut seen = HashSet::new();
        let mut files: Vec<String> = self
            .patterns
            .iter()
            .flat_map(|pat| expand_pattern(pat))
            .filter(|f| seen.insert(f.clone()))
            .filter(|f| Path::new(f).exists())
            .collect();

        if let Some(exts) = &self.extensions {
            files.retain(|f| {
                let (_, ext) = split_extension(f);
                !ext.is_empty() && exts.contains(ext)
            });
        }

        if self.sort {
            files.sort();
        }

        let basenames = files
            .iter()
            .map(|f| split_extension(f).0.to_string())
            .collect();

        log::debug!(
            "resolved {} file(s) from {} pattern(s)",
            files.len(),
            self.patterns.len()
        );
        Resolved { files, basenames }
    }
}

/// Three-argument form of [`FilenameResolver`].
pub fn filenames<S: AsRef<str>>(
    patterns: &[S],
    extensions: Option<&[&str]>,
    sort: bool,
) -> Resolved {
    let resolver = FilenameResolver::new(patterns.iter().map(|p| p.as_ref().to_string()));
    let resolver = match extensions {
        Some(exts) => resolver.extensions(exts.iter().copied()),
        None => resolver,
    };
    resolver.sorted(sort).resolve()
}

// Shell-like: `*` and `?` never match a leading '.' or a path separator.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Matches for one pattern.
///
/// `**` means the same as `*`. A malformed pattern (such as an unclosed `[`)
/// is matched literally. A trailing separator restricts matches to
/// directories and is kept on each result.
fn expand_pattern(pat: &str) -> Vec<String> {
    let pat = collapse_stars(pat);
    let paths = match glob::glob_with(&pat, MATCH_OPTIONS) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("malformed pattern {pat:?} ({e}), matching it literally");
            match glob::glob_with(&glob::Pattern::escape(&pat), MATCH_OPTIONS) {
                Ok(paths) => paths,
                Err(e) => {
                    log::warn!("ignoring pattern {pat:?}: {e}");
                    return Vec::new();
                }
            }
        }
    };
    let dirs_only = pat.ends_with(is_separator);

    let matches: Vec<String> = paths
        .filter_map(|entry| match entry {
            Ok(path) => path_to_string(path),
            Err(e) => {
                log::debug!("skipping unreadable path while expanding {pat:?}: {e}");
                None
            }
        })
        .map(|m| {
            if dirs_only && !m.ends_with(is_separator) {
                format!("{m}{}", std::path::MAIN_SEPARATOR)
            } else {
                m
            }
        })
        .collect();
    log::debug!("pattern {pat:?} matched {} path(s)", matches.len());
    matches
}

/// Collapse runs of `*` into one, so `**` never recurses.
fn collapse_stars(pat: &str) -> Cow<'_, str> {
    if !pat.contains("**") {
        return Cow::Borrowed(pat);
    }
    let mut out = String::with_capacity(pat.len());
    for c in pat.chars() {
        if c == '*' && out.ends_with('*') {
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

fn path_to_string(path: PathBuf) -> Option<String> {
    match path.into_os_string().into_string() {
        Ok(s) => Some(s),
        Err(raw) => {
            log::debug!("skipping non-UTF8 path {}", Path::new(&raw).display());
            None
        }
    }
}

#[cfg(windows)]
fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

#[cfg(not(windows))]
fn is_separator(c: char) -> bool {
    c == '/'
}

/// Split `path` into `(stem, extension)`; the extension keeps its period.
///
/// The extension starts at the last period of the final component. Leading
/// periods of that component do not count, so `.bashrc` has no extension.
pub fn split_extension(path: &str) -> (&str, &str) {
    let name_start = path.rfind(is_separator).map_or(0, |i| i + 1);
    let name = &path[name_start..];
    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => path.split_at(name_start + dot),
        _ => (path, ""),
    }
}
