use sqlfixture::split_statements;

#[test]
fn splits_on_default_delimiter() {
    let stmts = split_statements(["SELECT 1;", "-- comment", "", "SELECT 2;"]);
    assert_eq!(stmts, vec!["\nSELECT 1", "\nSELECT 2"]);
}

#[test]
fn accumulates_multi_line_statements() {
    let stmts = split_statements([
        "CREATE TABLE users (",
        "    id INTEGER PRIMARY KEY,",
        "    name TEXT",
        ");",
    ]);
    assert_eq!(
        stmts,
        vec!["\nCREATE TABLE users (\n    id INTEGER PRIMARY KEY,\n    name TEXT\n)"]
    );
}

#[test]
fn skips_comments_blank_lines_and_bare_semicolons() {
    let stmts = split_statements([
        "-- leading comment",
        "# hash comment",
        "   ",
        ";",
        "SELECT 1;",
    ]);
    assert_eq!(stmts, vec!["\nSELECT 1"]);
}

#[test]
fn delimiter_change_applies_to_subsequent_lines() {
    let stmts = split_statements(["DELIMITER $$", "CREATE X$$", "DELIMITER ;", "SELECT 1;"]);
    assert_eq!(stmts, vec!["\nCREATE X", "\nSELECT 1"]);
}

#[test]
fn semicolons_are_plain_text_under_a_custom_delimiter() {
    let stmts = split_statements([
        "DELIMITER $$",
        "CREATE TRIGGER t BEGIN",
        "    UPDATE x SET y = 1;",
        "END$$",
    ]);
    assert_eq!(
        stmts,
        vec!["\nCREATE TRIGGER t BEGIN\n    UPDATE x SET y = 1;\nEND"]
    );
}

#[test]
fn trailing_statement_without_delimiter_is_emitted() {
    let stmts = split_statements(["SELECT 1;", "SELECT 2"]);
    assert_eq!(stmts, vec!["\nSELECT 1", "\nSELECT 2"]);
}

#[test]
fn directive_line_is_not_buffered() {
    let stmts = split_statements(["DELIMITER |", "SELECT 1|"]);
    assert_eq!(stmts, vec!["\nSELECT 1"]);
}

#[test]
fn trailing_whitespace_does_not_hide_the_delimiter() {
    let stmts = split_statements(["SELECT 1;   "]);
    assert_eq!(stmts, vec!["\nSELECT 1"]);
}

#[test]
fn non_directive_delimiter_lines_are_ordinary_text() {
    // "DELIMITER GO" is not a recognized directive (token outside the
    // delimiter character class), so the line accumulates as SQL.
    let stmts = split_statements(["DELIMITER GO;"]);
    assert_eq!(stmts, vec!["\nDELIMITER GO"]);
}

#[test]
fn empty_input_yields_no_statements() {
    let stmts = split_statements(Vec::<String>::new());
    assert!(stmts.is_empty());
}
