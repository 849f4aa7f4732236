pub mod analyze;
pub mod lexer;
pub mod pairing;
