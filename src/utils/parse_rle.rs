use super::{Cell, Error, Pattern, Result};
use std::path::Path;

fn rle_error(line: usize, reason: impl Into<String>) -> Error {
    Error::Rle {
        line,
        reason: reason.into(),
    }
}

/// Parses the `x = W, y = H[, rule = R]` header line.
fn parse_header(line_no: usize, line: &str) -> Result<(u64, u64)> {
    let (mut width, mut height) = (None, None);
    for item in line.split(',') {
        let (key, value) = item
            .split_once('=')
            .ok_or_else(|| rle_error(line_no, format!("malformed header item '{}'", item.trim())))?;
        let value = value.trim();
        let parse_size = |v: &str| {
            v.parse::<u32>()
                .map(u64::from)
                .map_err(|_| rle_error(line_no, format!("invalid size '{v}'")))
        };
        match key.trim() {
            "x" => width = Some(parse_size(value)?),
            "y" => height = Some(parse_size(value)?),
            "rule" => {
                let rule = value.replace(' ', "").to_ascii_uppercase();
                if rule != "B3/S23" && rule != "23/3" {
                    return Err(rle_error(line_no, format!("unsupported rule '{value}'")));
                }
            }
            other => return Err(rle_error(line_no, format!("unknown header key '{other}'"))),
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(rle_error(line_no, "header must declare both x and y")),
    }
}

/// Parses a pattern in RLE format.
///
/// Any malformed entry rejects the whole input; no partial pattern is returned.
pub fn parse_rle(data: &[u8]) -> Result<Pattern> {
    let text = std::str::from_utf8(data).map_err(|_| rle_error(1, "input is not valid UTF-8"))?;
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    // skipping comment lines
    let (header_no, header) = loop {
        match lines.next() {
            Some((_, l)) if l.is_empty() || l.starts_with('#') => continue,
            Some(x) => break x,
            None => return Err(rle_error(1, "missing header line")),
        }
    };
    let (width, height) = parse_header(header_no, header)?;

    // run-length encoded pattern data
    let mut cells = vec![];
    let (mut x, mut y) = (0u64, 0u64);
    let mut count: Option<u64> = None;
    let mut last_line = header_no;
    let mut finished = false;
    'lines: for (line_no, line) in lines {
        last_line = line_no;
        for symbol in line.bytes() {
            match symbol {
                b'0'..=b'9' => {
                    let digit = u64::from(symbol - b'0');
                    let n = count
                        .unwrap_or(0)
                        .checked_mul(10)
                        .and_then(|n| n.checked_add(digit))
                        .ok_or_else(|| rle_error(line_no, "run count is too large"))?;
                    count = Some(n);
                }
                b'b' | b'o' => {
                    let n = count.take().unwrap_or(1);
                    let end = x
                        .checked_add(n)
                        .filter(|&end| end <= width)
                        .ok_or_else(|| rle_error(line_no, "row exceeds declared width"))?;
                    if symbol == b'o' {
                        if y >= height {
                            return Err(rle_error(line_no, "pattern exceeds declared height"));
                        }
                        cells.extend((x..end).map(|cx| Cell::new(cx as i64, y as i64)));
                    }
                    x = end;
                }
                b'$' => {
                    y = y
                        .checked_add(count.take().unwrap_or(1))
                        .filter(|&y| y <= height)
                        .ok_or_else(|| rle_error(line_no, "pattern exceeds declared height"))?;
                    x = 0;
                }
                b'!' => {
                    if count.is_some() {
                        return Err(rle_error(line_no, "run count without a tag before '!'"));
                    }
                    finished = true;
                    break 'lines;
                }
                s if s.is_ascii_whitespace() => {}
                s => {
                    return Err(rle_error(
                        line_no,
                        format!("unexpected symbol '{}'", s.escape_ascii()),
                    ))
                }
            }
        }
    }
    if !finished {
        return Err(rle_error(last_line, "missing '!' terminator"));
    }
    Ok(Pattern::new(cells))
}

/// Reads and parses an RLE file.
pub fn load_rle_file(path: impl AsRef<Path>) -> Result<Pattern> {
    let data = std::fs::read(path.as_ref())?;
    let pattern = parse_rle(&data)?;
    log::info!(
        "loaded {} cells from {}",
        pattern.len(),
        path.as_ref().display()
    );
    Ok(pattern)
}
