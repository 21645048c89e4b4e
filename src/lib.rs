//! Small helpers for parsing command-line arguments in quick scripts.
//!
//! ```no_run
//! let mut argv = quickargs::Argv::from_env();
//! let show_help = argv.exists("--help");
//! let verbose = argv.exists("--verbose");
//! argv.exit_if_any_unparsed_options();
//!
//! let (files, basenames) = quickargs::filenames(argv.as_slice(), Some(&[".ppm", ".png"]), true)
//!     .into_parts();
//! # let _ = (show_help, verbose, files, basenames);
//! ```

pub mod argv;
pub mod error;
pub mod filenames;

pub use argv::{check_unparsed_options, exists, exit_if_any_unparsed_options, Argv};
pub use error::{UnrecognizedOption, UNRECOGNIZED_OPTION_EXIT_CODE};
pub use filenames::{filenames, split_extension, FilenameResolver, Resolved};
