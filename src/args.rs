//! Command-line argument resolution.

use crate::error::Result;
use crate::zoom::ZoomFactor;
use std::path::PathBuf;
use std::str::FromStr;

/// Printed to stdout when no input file is given.
pub const USAGE_MESSAGE: &str = "Provide a file name.";

/// What the program was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// No file argument: print [`USAGE_MESSAGE`] and exit successfully.
    Usage,

    /// Load `path`, scale by `zoom` and display the result.
    Plot { path: PathBuf, zoom: ZoomFactor },
}

impl Invocation {
    /// Resolves the invocation from the full argument list, program name first.
    ///
    /// Arguments after the zoom factor are ignored. The zoom factor is only
    /// parsed once a file argument is known to be present.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positional = args.into_iter().skip(1);

        let path = match positional.next() {
            Some(path) => PathBuf::from(path.as_ref()),
            None => return Ok(Invocation::Usage),
        };

        let zoom = match positional.next() {
            Some(zoom) => ZoomFactor::from_str(zoom.as_ref())?,
            None => ZoomFactor::DEFAULT,
        };

        Ok(Invocation::Plot { path, zoom })
    }
}
