use super::*;
use std::fs;
use tempfile::TempDir;

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("queries.csv");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_single_column() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "query\nWhat color is the sky?\nWhat color is clay?\n");

    let queries = load_queries(&path).unwrap();
    assert_eq!(queries, vec!["What color is the sky?", "What color is clay?"]);
}

#[test]
fn test_query_column_found_among_others() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "id,query,category\n1,first prompt,a\n2,second prompt,b\n3,third prompt,c\n",
    );

    let queries = load_queries(&path).unwrap();
    assert_eq!(queries, vec!["first prompt", "second prompt", "third prompt"]);
}

#[test]
fn test_quoted_fields_keep_commas_and_newlines() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(
        &dir,
        "query\n\"Name three colors, then stop.\"\n\"Line one\nline two\"\n",
    );

    let queries = load_queries(&path).unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0], "Name three colors, then stop.");
    assert_eq!(queries[1], "Line one\nline two");
}

#[test]
fn test_missing_query_column() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "prompt\nhello\n");

    let result = load_queries(&path);
    assert!(matches!(result, Err(QueryError::MissingColumn { .. })));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must have a 'query' column")
    );
}

#[test]
fn test_header_only_yields_no_queries() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "query\n");

    assert!(load_queries(&path).unwrap().is_empty());
}

#[test]
fn test_short_row_yields_empty_prompt() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "id,query\n1,hello\n2\n");

    let queries = load_queries(&path).unwrap();
    assert_eq!(queries, vec!["hello", ""]);
}

#[test]
fn test_nonexistent_file() {
    let dir = TempDir::new().unwrap();
    let result = load_queries(dir.path().join("nope.csv"));
    assert!(matches!(result, Err(QueryError::Io { .. })));
}

#[test]
fn test_padded_header_is_not_the_query_column() {
    let dir = TempDir::new().unwrap();
    let path = write_csv(&dir, "id, query\n1,hello\n");

    let result = load_queries(&path);
    assert!(matches!(result, Err(QueryError::MissingColumn { .. })));
}
