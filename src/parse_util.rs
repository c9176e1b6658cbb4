/// Takes the next line from the slice, without its line break. Returns `None` once the slice is
/// empty.
///
/// A linebreak is either of
/// * `\n`
/// * `\r\n`
///
/// The linebreak is consumed. A final line without a linebreak is still returned, so `b"a\nb"`
/// and `b"a\nb\n"` both yield two lines. A `\r` not followed by `\n` stays in the line.
pub fn take_line(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if bytes.is_empty() {
        return (None, bytes);
    }

    let Some(i) = bytes.iter().position(|&b| b == b'\n') else {
        return (Some(bytes), &bytes[bytes.len()..]);
    };

    let (line, rest) = (&bytes[..i], &bytes[i + 1..]);
    let line = line.strip_suffix(b"\r").unwrap_or(line);

    (Some(line), rest)
}
