use thiserror::Error;

/// Failures of the runtime bridges into the table set.
///
/// The tables themselves cannot fail; these only arise when a name arrives as
/// text or when the start-up self-check finds a broken build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("unknown constant table name")]
    UnknownName,
    #[error("table {name} at {address:#x} is not {alignment}-byte aligned")]
    Misaligned {
        name: &'static str,
        alignment: usize,
        address: usize,
    },
}
