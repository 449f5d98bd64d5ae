//! Iteration-count argument handling for the benchmark drivers.

/// Default iteration count when no usable argument is supplied.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Picks the iteration count from CLI arguments.
///
/// The first non-flag argument is used (cargo passes flags like `--bench` to
/// bench binaries); an absent or non-numeric argument falls back to the
/// literal default, never an error.
pub fn parse_iterations<I>(args: I) -> usize
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .find(|arg| !arg.starts_with('-'))
        .and_then(|arg| arg.parse().ok())
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_ITERATIONS)
}
