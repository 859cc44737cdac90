//! Phase 3 tests: matrix text, JSON and DOT encodings.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;

use graph_convert::format::{read_json, to_dot, write_json, MatrixTextReader, MatrixTextWriter};
use graph_convert::graph::{AdjacencyList, AdjacencyMatrix, GraphBuilder};
use graph_convert::types::GraphError;

fn parse_err<T: std::fmt::Debug>(result: Result<T, GraphError>) -> (usize, String) {
    match result {
        Err(GraphError::Parse { line, message }) => (line, message),
        other => panic!("Expected Parse error, got {:?}", other),
    }
}

// ==================== Matrix Text ====================

#[test]
fn test_read_matrix_text() {
    let text = "3\n0 1 1\n0 0 2\n5 0 0\n";
    let m: AdjacencyMatrix<i64> = MatrixTextReader::read_from(Cursor::new(text)).unwrap();
    assert_eq!(m.into_rows(), vec![vec![0, 1, 1], vec![0, 0, 2], vec![5, 0, 0]]);
}

#[test]
fn test_read_matrix_text_tolerates_blank_lines() {
    let text = "\n2\n\n1   0\n 0 3 \n\n";
    let m: AdjacencyMatrix<i32> = MatrixTextReader::read_from(Cursor::new(text)).unwrap();
    assert_eq!(m.into_rows(), vec![vec![1, 0], vec![0, 3]]);
}

#[test]
fn test_read_real_weights() {
    let text = "2\n0 0.5\n-1.25 0\n";
    let m: AdjacencyMatrix<f64> = MatrixTextReader::read_from(Cursor::new(text)).unwrap();
    assert_eq!(m.to_list(), AdjacencyList::from(vec![vec![(1, 0.5)], vec![(0, -1.25)]]));
}

#[test]
fn test_read_empty_matrix() {
    let m: AdjacencyMatrix<i64> = MatrixTextReader::read_from(Cursor::new("0\n")).unwrap();
    assert_eq!(m.dimension(), 0);
}

#[test]
fn test_matrix_text_errors() {
    let (line, _) = parse_err(MatrixTextReader::read_from::<i64>(Cursor::new("")));
    assert_eq!(line, 0);

    let (line, message) = parse_err(MatrixTextReader::read_from::<i64>(Cursor::new("two\n")));
    assert_eq!(line, 1);
    assert!(message.contains("vertex count"));

    let (line, message) =
        parse_err(MatrixTextReader::read_from::<i64>(Cursor::new("2\n0 1\n1 0 1\n")));
    assert_eq!(line, 3);
    assert!(message.contains("expected 2 values"));

    let (line, _) = parse_err(MatrixTextReader::read_from::<i64>(Cursor::new("2\n0 1\n1 z\n")));
    assert_eq!(line, 3);

    let (line, message) = parse_err(MatrixTextReader::read_from::<i64>(Cursor::new("2\n0 1\n")));
    assert_eq!(line, 2);
    assert!(message.contains("found 1"));

    let (line, _) = parse_err(MatrixTextReader::read_from::<i64>(Cursor::new(
        "1\n0\n1\n",
    )));
    assert_eq!(line, 3);
}

#[test]
fn test_negative_weight_rejected_for_unsigned() {
    let (line, _) = parse_err(MatrixTextReader::read_from::<u32>(Cursor::new("1\n-1\n")));
    assert_eq!(line, 2);
}

#[test]
fn test_matrix_text_file_roundtrip() {
    let m = AdjacencyMatrix::from_rows(vec![vec![0, -3, 0], vec![0, 0, 7], vec![1, 0, 1]]).unwrap();
    let file = NamedTempFile::new().unwrap();
    MatrixTextWriter::write_to_file(&m, file.path()).unwrap();

    let text = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(text, "3\n0 -3 0\n0 0 7\n1 0 1\n");

    let back: AdjacencyMatrix<i32> = MatrixTextReader::read_from_file(file.path()).unwrap();
    assert_eq!(back, m);
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = MatrixTextReader::read_from_file::<i64>(&dir.path().join("missing.txt"));
    assert!(matches!(result, Err(GraphError::Io(_))));
}

// ==================== JSON ====================

#[test]
fn test_list_json_shape() {
    let list = AdjacencyList::from(vec![vec![(1, 2)], vec![]]);
    let mut buf = Vec::new();
    write_json(&list, &mut buf, false).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        r#"[[{"target":1,"weight":2}],[]]"#
    );
}

#[test]
fn test_matrix_json_shape() {
    let m = AdjacencyMatrix::from_rows(vec![vec![0, 2], vec![0, 0]]).unwrap();
    assert_eq!(serde_json::to_string(&m).unwrap(), "[[0,2],[0,0]]");
    let empty: AdjacencyMatrix<i64> = AdjacencyMatrix::zeros(0);
    assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");
}

#[test]
fn test_read_list_json_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[[{{"target":1,"weight":1}},{{"target":2,"weight":1}}],[],[{{"target":0,"weight":4}}]]"#
    )
    .unwrap();
    let list: AdjacencyList<i64> =
        graph_convert::format::read_json_file(file.path()).unwrap();
    assert_eq!(
        list,
        AdjacencyList::from(vec![vec![(1, 1), (2, 1)], vec![], vec![(0, 4)]])
    );
}

#[test]
fn test_matrix_json_rejects_non_square() {
    let result: Result<AdjacencyMatrix<i64>, _> = read_json(Cursor::new("[[0,1,0],[1,0,1]]"));
    match result {
        Err(GraphError::Json(e)) => assert!(e.to_string().contains("not square")),
        other => panic!("Expected Json error, got {:?}", other),
    }
}

#[test]
fn test_list_json_rejects_negative_target() {
    let result: Result<AdjacencyList<i64>, _> =
        read_json(Cursor::new(r#"[[{"target":-1,"weight":1}]]"#));
    assert!(matches!(result, Err(GraphError::Json(_))));
}

// ==================== DOT ====================

#[test]
fn test_dot_output() {
    let mut builder = GraphBuilder::new(4);
    builder
        .add_edge(0, 1, 2)
        .unwrap()
        .add_edge(1, 3, 1)
        .unwrap()
        .add_edge(1, 1, 3)
        .unwrap();
    let matrix = builder.build_matrix();

    let expected = "digraph G {\n\
                    \t0;\n\
                    \t0 -> 1 [ label=\"2\" ] ;\n\
                    \t1;\n\
                    \t1 -> 1 [ label=\"3\" ] ;\n\
                    \t1 -> 3 [ label=\"1\" ] ;\n\
                    \t2;\n\
                    \t3;\n\
                    }\n";
    assert_eq!(to_dot(&matrix).unwrap(), expected);
}

#[test]
fn test_dot_from_list_keeps_insertion_order() {
    let list = AdjacencyList::from(vec![vec![(1, 5), (0, 6)], vec![]]);
    let dot = to_dot(&list).unwrap();
    assert_eq!(
        dot,
        "digraph G {\n\t0;\n\t0 -> 1 [ label=\"5\" ] ;\n\t0 -> 0 [ label=\"6\" ] ;\n\t1;\n}\n"
    );
}

#[test]
fn test_dot_from_list_matches_matrix() {
    let list = AdjacencyList::from(vec![vec![(1, 1), (1, 0), (2, 4), (2, 9)], vec![], vec![]]);
    let dot = to_dot(&list).unwrap();
    assert_eq!(
        dot,
        "digraph G {\n\t0;\n\t0 -> 2 [ label=\"9\" ] ;\n\t1;\n\t2;\n}\n"
    );
    assert_eq!(dot, to_dot(&list.to_matrix().unwrap()).unwrap());
}

#[test]
fn test_dot_empty_graph() {
    let m: AdjacencyMatrix<i64> = AdjacencyMatrix::zeros(0);
    assert_eq!(to_dot(&m).unwrap(), "digraph G {\n}\n");
}
