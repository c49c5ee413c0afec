//! Ordered presence checks.
//!
//! Required arguments are declared as an ordered slice of `(name, check)` pairs.
//! Checks run in declaration order and stop at the first failure, so the error
//! always names exactly one argument. Put expensive or side-effecting inputs last.

use crate::error::{AbctlError, Result};

/// A named presence check over some argument bundle.
pub type Requirement<T> = (&'static str, fn(&T) -> bool);

pub fn require_in_order<T>(input: &T, requirements: &[Requirement<T>]) -> Result<()> {
    for &(name, present) in requirements {
        if !present(input) {
            return Err(AbctlError::MissingArgument(name));
        }
    }
    Ok(())
}
