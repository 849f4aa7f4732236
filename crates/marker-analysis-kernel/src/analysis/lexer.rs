// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License, Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use crate::constants::{END_MARKER, START_MARKER};
use crate::model::comment_style::CommentStyle;
use crate::model::marker::{Marker, MarkerType};
use common::utils::position_utils::get_position_in_string;
use std::ops::Range;

/// Walk the file line by line, classify the in-comment span of each line
/// according to `style`, and emit every marker token found inside those
/// spans, in file order.
///
/// A comment delimiter only opens a comment when preceded by whitespace
/// alone on its line; a delimiter that trails code is not recognized, and
/// markers inside the region it would have opened are never emitted.
pub fn scan_markers(content: &str, style: &CommentStyle) -> anyhow::Result<Vec<Marker>> {
    let mut markers = vec![];
    let mut inside_block_comment = false;
    let mut line_offset: usize = 0;

    for raw_line in content.split_inclusive('\n') {
        let line = raw_line.trim_end_matches('\n').trim_end_matches('\r');

        let span = if !style.has_comment_filtering() {
            Some(0..line.len())
        } else if inside_block_comment {
            block_continuation_span(line, style, &mut inside_block_comment)
        } else {
            comment_opening_span(line, style, &mut inside_block_comment)
        };

        if let Some(span) = span {
            scan_span(content, line_offset, line, span, &mut markers)?;
        }

        line_offset += raw_line.len();
    }
    Ok(markers)
}

// Inside a block comment, the span runs from the start of the line to the
// close delimiter if present (clearing the state), otherwise to end of
// line. Text after the close is code again and is not re-scanned for a new
// comment on the same line.
fn block_continuation_span(
    line: &str,
    style: &CommentStyle,
    inside_block_comment: &mut bool,
) -> Option<Range<usize>> {
    let close = style.block_comment_close?;
    match line.find(close) {
        Some(index) => {
            *inside_block_comment = false;
            Some(0..index)
        }
        None => Some(0..line.len()),
    }
}

// Outside of comments, look for the leftmost comment-introducing
// delimiter. It only counts when nothing but whitespace precedes it.
fn comment_opening_span(
    line: &str,
    style: &CommentStyle,
    inside_block_comment: &mut bool,
) -> Option<Range<usize>> {
    let line_comment = style
        .line_comment_prefix
        .and_then(|prefix| line.find(prefix).map(|index| (index, prefix, false)));
    let block_comment = style
        .block_comment_open
        .and_then(|open| line.find(open).map(|index| (index, open, true)));

    // leftmost match wins
    let (index, delimiter, is_block) = match (line_comment, block_comment) {
        (Some(l), Some(b)) => {
            if l.0 <= b.0 {
                l
            } else {
                b
            }
        }
        (Some(l), None) => l,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    if line[..index].chars().any(|c| !c.is_whitespace()) {
        return None;
    }

    let span_start = index + delimiter.len();
    if !is_block {
        return Some(span_start..line.len());
    }

    let close = style.block_comment_close?;
    match line[span_start..].find(close) {
        Some(close_index) => Some(span_start..span_start + close_index),
        None => {
            *inside_block_comment = true;
            Some(span_start..line.len())
        }
    }
}

fn scan_span(
    content: &str,
    line_offset: usize,
    line: &str,
    span: Range<usize>,
    markers: &mut Vec<Marker>,
) -> anyhow::Result<()> {
    let span_start = span.start;
    let text = &line[span];
    let mut index = 0;
    while index < text.len() {
        let rest = &text[index..];
        let matched = if rest.starts_with(END_MARKER) {
            Some((MarkerType::End, END_MARKER.len()))
        } else if rest.starts_with(START_MARKER) {
            Some((MarkerType::Start, START_MARKER.len()))
        } else {
            None
        };
        match matched {
            Some((marker_type, token_length)) => {
                let position =
                    get_position_in_string(content, line_offset + span_start + index)?;
                markers.push(Marker {
                    marker_type,
                    position,
                });
                index += token_length;
            }
            None => {
                // advance one character, not one byte
                index += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    Ok(())
}
