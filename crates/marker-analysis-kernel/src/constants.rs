pub const CARGO_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal tokens the lexer recognizes inside comments. The end token is
/// always tested before the start token at a given scan position.
pub const START_MARKER: &str = "@MARK-SCAN-START@";
pub const END_MARKER: &str = "@MARK-SCAN-END@";
