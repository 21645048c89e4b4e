use std::process;

use crate::error::{UnrecognizedOption, UNRECOGNIZED_OPTION_EXIT_CODE};

/// Remove the first occurrence of `name` from `args`.
/// Returns true if it was there. Exact token match only.
pub fn exists(args: &mut Vec<String>, name: &str) -> bool {
    match args.iter().position(|arg| arg == name) {
        Some(idx) => {
            args.remove(idx);
            log::debug!("consumed flag {name} at position {idx}");
            true
        }
        None => false,
    }
}

/// First argument containing `--` anywhere, with its position.
pub fn find_unparsed_option(args: &[String]) -> Option<(usize, &str)> {
    args.iter()
        .enumerate()
        .find(|(_, arg)| arg.contains("--"))
        .map(|(idx, arg)| (idx, arg.as_str()))
}

/// Fail if any `--` argument is left over. Call after all known flags were consumed.
pub fn check_unparsed_options(args: &[String]) -> Result<(), UnrecognizedOption> {
    match find_unparsed_option(args) {
        Some((position, option)) => {
            log::warn!("unparsed option {option} at position {position}");
            Err(UnrecognizedOption {
                option: option.to_string(),
                position,
            })
        }
        None => Ok(()),
    }
}

/// Like [`check_unparsed_options`], but prints the diagnostic and exits the process.
pub fn exit_if_any_unparsed_options(args: &[String]) {
    if let Err(err) = check_unparsed_options(args) {
        eprintln!("{err}");
        process::exit(i32::from(UNRECOGNIZED_OPTION_EXIT_CODE));
    }
}

/// Owned argument vector, excluding the program name.
///
/// ```
/// let mut argv = quickargs::Argv::new(["--verbose", "file.txt"]);
/// assert!(argv.exists("--verbose"));
/// assert!(argv.check_unparsed_options().is_ok());
/// assert_eq!(argv.as_slice(), ["file.txt"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Argv {
    args: Vec<String>,
}

impl Argv {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Process arguments without the program name. Non-UTF8 tokens are converted lossily.
    pub fn from_env() -> Self {
        Self {
            args: std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    pub fn exists(&mut self, name: &str) -> bool {
        exists(&mut self.args, name)
    }

    pub fn check_unparsed_options(&self) -> Result<(), UnrecognizedOption> {
        check_unparsed_options(&self.args)
    }

    pub fn exit_if_any_unparsed_options(&self) {
        exit_if_any_unparsed_options(&self.args)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.args
    }
}

impl From<Vec<String>> for Argv {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl AsRef<[String]> for Argv {
    fn as_ref(&self) -> &[String] {
        &self.args
    }
}

impl IntoIterator for Argv {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}
