pub mod comment_style;
pub mod marker;
