// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License, Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

/// The comment grammar applied to a file before marker detection. When all
/// delimiters are `None`, every character of the file is eligible for
/// marker detection (plain text).
#[derive(Debug, Eq, PartialEq)]
pub struct CommentStyle {
    pub line_comment_prefix: Option<&'static str>,
    pub block_comment_open: Option<&'static str>,
    pub block_comment_close: Option<&'static str>,
}

impl CommentStyle {
    pub fn has_comment_filtering(&self) -> bool {
        self.line_comment_prefix.is_some() || self.block_comment_open.is_some()
    }
}

static NO_FILTERING: CommentStyle = CommentStyle {
    line_comment_prefix: None,
    block_comment_open: None,
    block_comment_close: None,
};

static C_STYLE: CommentStyle = CommentStyle {
    line_comment_prefix: Some("//"),
    block_comment_open: Some("/*"),
    block_comment_close: Some("*/"),
};

// Extension match is on the literal, case-sensitive suffix. Adding a
// language means adding an entry here, not touching the lexer.
static COMMENT_STYLE_PER_EXTENSION_LIST: &[(&str, &CommentStyle)] =
    &[(".c", &C_STYLE), (".java", &C_STYLE)];

/// Returns the comment style for a file name, keyed by its extension.
/// Unrecognized extensions (including none at all) resolve to the
/// no-filtering style.
pub fn style_for_file(file_name: &str) -> &'static CommentStyle {
    for (extension, style) in COMMENT_STYLE_PER_EXTENSION_LIST {
        if file_name.ends_with(extension) {
            return style;
        }
    }
    &NO_FILTERING
}
