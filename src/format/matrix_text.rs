//! Plain-text matrix files.
//!
//! The first non-blank line holds the vertex count `n`; it is followed by
//! exactly `n` lines of `n` whitespace-separated weights. Blank lines are
//! ignored.
//!
//! ```text
//! 3
//! 0 1 1
//! 0 0 2
//! 5 0 0
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use crate::graph::AdjacencyMatrix;
use crate::types::{GraphError, GraphResult, Weight};

/// Reader for matrix text files.
pub struct MatrixTextReader;

impl MatrixTextReader {
    /// Read a matrix text file.
    pub fn read_from_file<W: Weight>(path: &Path) -> GraphResult<AdjacencyMatrix<W>> {
        let file = std::fs::File::open(path)?;
        Self::read_from(std::io::BufReader::new(file))
    }

    /// Read from any buffered reader.
    pub fn read_from<W: Weight>(reader: impl BufRead) -> GraphResult<AdjacencyMatrix<W>> {
        let mut dimension: Option<usize> = None;
        let mut rows: Vec<Vec<W>> = Vec::new();
        let mut last_line = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            last_line = line_no;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let n = match dimension {
                None => {
                    let n = trimmed.parse::<usize>().map_err(|_| {
                        GraphError::parse(line_no, format!("invalid vertex count {:?}", trimmed))
                    })?;
                    dimension = Some(n);
                    continue;
                }
                Some(n) => n,
            };

            if rows.len() == n {
                return Err(GraphError::parse(
                    line_no,
                    format!("expected {} rows, found more", n),
                ));
            }

            let row = parse_row::<W>(trimmed, line_no)?;
            if row.len() != n {
                return Err(GraphError::parse(
                    line_no,
                    format!("expected {} values, found {}", n, row.len()),
                ));
            }
            rows.push(row);
        }

        let n = dimension.ok_or_else(|| GraphError::parse(last_line, "missing vertex count"))?;
        if rows.len() != n {
            return Err(GraphError::parse(
                last_line,
                format!("expected {} rows, found {}", n, rows.len()),
            ));
        }

        log::debug!("Read {n}x{n} matrix", n = n);
        AdjacencyMatrix::from_rows(rows)
    }
}

fn parse_row<W: Weight>(line: &str, line_no: usize) -> GraphResult<Vec<W>> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<W>()
                .map_err(|_| GraphError::parse(line_no, format!("invalid weight {:?}", token)))
        })
        .collect()
}

/// Writer for matrix text files.
pub struct MatrixTextWriter;

impl MatrixTextWriter {
    /// Write a matrix to a file, replacing it.
    pub fn write_to_file<W: Weight>(matrix: &AdjacencyMatrix<W>, path: &Path) -> GraphResult<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        Self::write_to(matrix, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write a matrix to any writer.
    pub fn write_to<W: Weight>(
        matrix: &AdjacencyMatrix<W>,
        mut writer: impl Write,
    ) -> GraphResult<()> {
        writeln!(writer, "{}", matrix.dimension())?;
        for row in matrix.rows() {
            let line: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            writeln!(writer, "{}", line.join(" "))?;
        }
        Ok(())
    }

    /// Render a matrix to a string.
    pub fn to_string<W: Weight>(matrix: &AdjacencyMatrix<W>) -> GraphResult<String> {
        let mut buf = Vec::new();
        Self::write_to(matrix, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_rejects_garbage() {
        assert_eq!(parse_row::<i64>("1 -2 3", 4).unwrap(), vec![1, -2, 3]);
        match parse_row::<i64>("1 x 3", 4) {
            Err(GraphError::Parse { line, message }) => {
                assert_eq!(line, 4);
                assert!(message.contains("\"x\""));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_propagate() {
        let matrix = AdjacencyMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        match MatrixTextWriter::write_to(&matrix, FailingWriter) {
            Err(GraphError::Io(e)) => assert_eq!(e.to_string(), "disk full"),
            other => panic!("Expected Io error, got {:?}", other),
        }
        assert_eq!(MatrixTextWriter::to_string(&matrix).unwrap(), "2\n0 1\n2 0\n");
    }
}
