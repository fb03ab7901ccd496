//! Brace matching over PHP source that ignores braces inside strings and comments.

/// Find the `}` that closes the `{` at byte offset `open`.
///
/// Returns `None` if `open` is not a `{` or the block is never closed.
pub fn find_closing_brace(source: &str, open: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            quote @ (b'\'' | b'"') => {
                i = skip_string(bytes, i, quote);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = skip_line(bytes, i);
                continue;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = skip_block_comment(bytes, i);
                continue;
            }
            // `#[...]` is an attribute in PHP 8, not a comment
            b'#' if bytes.get(i + 1) != Some(&b'[') => {
                i = skip_line(bytes, i);
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Check whether byte offset `offset` lies inside a string literal or a comment.
///
/// Scanning starts at the first `<?php` tag; template text before it is never
/// considered hidden.
pub fn in_string_or_comment(source: &str, offset: usize) -> bool {
    let bytes = source.as_bytes();
    let Some(mut i) = source.find("<?php") else {
        return false;
    };
    while i < offset && i < bytes.len() {
        let end = match bytes[i] {
            quote @ (b'\'' | b'"') => skip_string(bytes, i, quote),
            b'/' if bytes.get(i + 1) == Some(&b'/') => skip_line(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'*') => skip_block_comment(bytes, i),
            b'#' if bytes.get(i + 1) != Some(&b'[') => skip_line(bytes, i),
            _ => {
                i += 1;
                continue;
            }
        };
        if end > offset {
            return true;
        }
        i = end;
    }
    false
}

/// Returns the offset just past the closing quote.
fn skip_string(bytes: &[u8], start: usize, quote: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Returns the offset of the terminating newline.
fn skip_line(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |p| start + p)
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    bytes[start + 2..]
        .windows(2)
        .position(|w| w == b"*/")
        .map_or(bytes.len(), |p| start + 2 + p + 2)
}
