// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License, Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2024 Datadog, Inc.

use crate::analysis::lexer::scan_markers;
use crate::analysis::pairing::pair_markers;
use crate::model::comment_style::style_for_file;
use crate::model::marker::MarkerPair;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{path} (No such file or directory)")]
    FileNotFound { path: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Position(#[from] anyhow::Error),
}

/// Analyze a single file and return its marker pairs in file order.
///
/// The returned vector is empty when the file contains no complete pair.
/// A missing file is the only typed failure; the error message carries the
/// path exactly as supplied, not canonicalized.
pub fn process_file(path: &Path) -> Result<Vec<MarkerPair>, AnalyzeError> {
    let content = fs::read_to_string(path).map_err(|error| {
        if error.kind() == ErrorKind::NotFound {
            AnalyzeError::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            AnalyzeError::Io(error)
        }
    })?;

    let style = style_for_file(&path.to_string_lossy());
    let markers = scan_markers(&content, style)?;
    Ok(pair_markers(&markers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::marker::{Marker, MarkerType};
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    fn pair_of(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> MarkerPair {
        MarkerPair {
            start: Marker::new(MarkerType::Start, start_line, start_col),
            end: Marker::new(MarkerType::End, end_line, end_col),
        }
    }

    #[test]
    fn test_process_file_pair() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_pair.txt",
            &[
                "first line",
                "second line",
                "  @MARK-SCAN-START@",
                "some",
                "content",
                "to",
                "be",
                "scanned",
                "  @MARK-SCAN-END@",
                "last line",
            ],
        );

        let pairs = process_file(&path).unwrap();

        assert_eq!(pairs, vec![pair_of(3, 3, 9, 3)]);
    }

    #[test]
    fn test_process_file_multiple() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_multiple.txt",
            &[
                "one",
                "two",
                "three",
                "   @MARK-SCAN-START@",
                "five",
                "six",
                "    @MARK-SCAN-END@",
                "eight",
                "nine",
                "        @MARK-SCAN-START@",
                "eleven",
                "  @MARK-SCAN-END@",
                "thirteen",
                "fourteen",
                "  @MARK-SCAN-START@",
                "sixteen",
                "seventeen",
                "  @MARK-SCAN-END@",
            ],
        );

        let pairs = process_file(&path).unwrap();

        assert_eq!(
            pairs,
            vec![
                pair_of(4, 4, 7, 5),
                pair_of(10, 9, 12, 3),
                pair_of(15, 3, 18, 3),
            ]
        );
    }

    #[test]
    fn test_process_file_start_only() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_only_start.txt",
            &["first", "  @MARK-SCAN-START@", "last"],
        );

        assert!(process_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_process_file_end_only() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_only_end.txt",
            &["first", "  @MARK-SCAN-END@", "last"],
        );

        assert!(process_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_process_file_two_ends() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_two_ends.txt",
            &[
                "first",
                "second",
                "  @MARK-SCAN-START@",
                "four",
                "five",
                "six",
                "seven",
                "eight",
                "  @MARK-SCAN-END@",
                "ten",
                "  @MARK-SCAN-END@",
            ],
        );

        let pairs = process_file(&path).unwrap();

        // the first end closes the pair, the second one is discarded
        assert_eq!(pairs, vec![pair_of(3, 3, 9, 3)]);
    }

    #[test]
    fn test_process_file_two_starts() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_two_starts.txt",
            &[
                "first",
                "second",
                "  @MARK-SCAN-START@",
                "four",
                "five",
                "six",
                "      @MARK-SCAN-START@",
                "eight",
                "nine",
                "ten",
                "eleven",
                "twelve",
                "thirteen",
                "fourteen",
                " @MARK-SCAN-END@",
            ],
        );

        let pairs = process_file(&path).unwrap();

        // the earliest unmatched start wins
        assert_eq!(pairs, vec![pair_of(3, 3, 15, 2)]);
    }

    #[test]
    fn test_process_file_c_single_comment() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "single_line.c",
            &[
                "#include <stdio.h>",
                "",
                "int main() {",
                "//  @MARK-SCAN-START@",
                "    printf(\"hello\\n\");",
                "//  @MARK-SCAN-END@",
                "    return 0;",
                "}",
            ],
        );

        let pairs = process_file(&path).unwrap();

        assert_eq!(pairs, vec![pair_of(4, 5, 6, 5)]);
    }

    #[test]
    fn test_process_file_c_multiline_comment() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "multi_line.c",
            &[
                "#include <stdio.h>",
                "",
                "/*",
                "    @MARK-SCAN-START@",
                " * the function below",
                " * is experimental",
                " *",
                "    @MARK-SCAN-END@",
                "*/",
                "int main() { return 0; }",
            ],
        );

        let pairs = process_file(&path).unwrap();

        assert_eq!(pairs, vec![pair_of(4, 5, 8, 5)]);
    }

    #[test]
    fn test_process_file_c_multiline_comment_not_beginning() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "multi_line_comment_not_beginning.c",
            &[
                "#include <stdio.h>",
                "",
                "int main() { /*",
                "    @MARK-SCAN-START@",
                "    @MARK-SCAN-END@",
                "*/",
                "}",
            ],
        );

        // the open delimiter trails code, so the comment never begins and
        // the markers inside the region are invisible
        assert!(process_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_process_file_java_multiline_comment() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "MultiLineComment.java",
            &[
                "package com.example;",
                "",
                "public class MultiLineComment {",
                "    /*",
                "          @MARK-SCAN-START@",
                "     * helper below",
                "          @MARK-SCAN-END@",
                "     */",
                "    void helper() {}",
                "}",
            ],
        );

        let pairs = process_file(&path).unwrap();

        assert_eq!(pairs, vec![pair_of(5, 11, 7, 11)]);
    }

    #[test]
    fn test_process_file_java_multiline_comment_not_beginning() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "MultiLineCommentNotBeginning.java",
            &[
                "package com.example;",
                "",
                "public class MultiLineCommentNotBeginning {",
                "    void helper() {} /*",
                "          @MARK-SCAN-START@",
                "          @MARK-SCAN-END@",
                "     */",
                "}",
            ],
        );

        assert!(process_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_process_file_java_single_line() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "SingleLineComment.java",
            &[
                "package com.example;",
                "",
                "public class SingleLineComment {",
                "    void helper() {",
                "        int a = 0;",
                "    //  @MARK-SCAN-START@",
                "        int b = a;",
                "    //  @MARK-SCAN-END@",
                "    }",
                "}",
            ],
        );

        let pairs = process_file(&path).unwrap();

        assert_eq!(pairs, vec![pair_of(6, 9, 8, 9)]);
    }

    #[test]
    fn test_process_file_no_markers() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_no_markers.txt",
            &["nothing", "to", "see", "here"],
        );

        assert!(process_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_process_file_same_line() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_same_line.txt",
            &["first", "  @MARK-SCAN-START@ region @MARK-SCAN-END@", "last"],
        );

        assert!(process_file(&path).unwrap().is_empty());
    }

    #[test]
    fn test_process_file_not_found() {
        let path = Path::new("src/test/resources/not_found.txt");

        let error = process_file(path).unwrap_err();

        assert!(matches!(error, AnalyzeError::FileNotFound { .. }));
        assert_eq!(
            error.to_string(),
            "src/test/resources/not_found.txt (No such file or directory)"
        );
    }

    #[test]
    fn test_process_file_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "test_idempotent.txt",
            &["first", " @MARK-SCAN-START@", "third", " @MARK-SCAN-END@"],
        );

        let first = process_file(&path).unwrap();
        let second = process_file(&path).unwrap();

        assert_eq!(first, second);
    }
}
