//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (unknown command, missing argument)
pub const USAGE: i32 = 64;

/// Data format error (argument value could not be converted)
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
