/// Best-effort CSV tokenizer for published-sheet exports.
///
/// Splits raw CSV text into rows of string cells. Handles quoted cells,
/// doubled-quote escapes, and both CRLF and LF line endings. Malformed
/// quoting never fails: an unterminated quote consumes to end of input.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped literal quote
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(ch);
            }
        } else {
            match ch {
                '"' => in_quotes = true,
                ',' => row.push(std::mem::take(&mut cell)),
                '\n' => {
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                // Tolerate CRLF exports
                '\r' => {}
                _ => cell.push(ch),
            }
        }
    }

    // Flush the final unterminated line, but drop it when it is nothing
    // more than the empty remainder after a trailing newline.
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}
