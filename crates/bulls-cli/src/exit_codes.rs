//! Exit codes for the `bulls` binary. Scripts rely on these values.

pub const EXIT_SUCCESS: i32 = 0;
pub const INVALID_INPUT: i32 = 1; // guess/secret failed validation
pub const CONFIG_ERROR: i32 = 2; // config or secret store failure
