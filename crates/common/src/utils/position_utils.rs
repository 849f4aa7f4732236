use crate::model::position::Position;
use bstr::BStr;
use bstr::ByteSlice;

/// Resolve a byte offset in `content` into a 1-based [`Position`].
/// Columns are counted per grapheme so that multi-byte characters occupy a
/// single column.
pub fn get_position_in_string(content: &str, offset: usize) -> anyhow::Result<Position> {
    if offset > content.len() {
        anyhow::bail!("offset is larger than content length");
    }

    let bstr = BStr::new(content);

    let mut line_number: u32 = 1;
    let mut line_start: usize = 0;

    for line in bstr.lines_with_terminator() {
        let line_end = line_start + line.len();

        if offset >= line_start && offset < line_end {
            let mut col_number: u32 = 1;
            for (grapheme_start, grapheme_end, _) in line.grapheme_indices() {
                if offset == line_start + grapheme_start {
                    return Ok(Position {
                        line: line_number,
                        col: col_number,
                    });
                }

                // The offset falls inside this grapheme; report the next col.
                if offset > line_start + grapheme_start && offset < line_start + grapheme_end {
                    return Ok(Position {
                        line: line_number,
                        col: col_number + 1,
                    });
                }
                col_number += 1;
            }
        }
        line_number += 1;
        line_start = line_end;
    }
    Err(anyhow::anyhow!("cannot find position"))
}
