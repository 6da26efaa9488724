//! Splits an edit-mode input line into command tokens.

/// Split `line` on whitespace. A token opening with `'` or `"` runs to the
/// matching quote and may contain spaces; inside quotes `\` takes the next
/// character literally. An unterminated quote runs to the end of the line.
pub fn split(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&first) = chars.peek() {
        if first.is_whitespace() {
            chars.next();
            continue;
        }

        let mut token = String::new();
        if first == '"' || first == '\'' {
            chars.next();
            while let Some(c) = chars.next() {
                match c {
                    '\\' => token.extend(chars.next()),
                    c if c == first => break,
                    c => token.push(c),
                }
            }
        } else {
            while let Some(c) = chars.next_if(|c| !c.is_whitespace()) {
                token.push(c);
            }
        }
        tokens.push(token);
    }

    tokens
}
