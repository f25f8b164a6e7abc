use crate::checkers::{is_scheme_byte, is_scheme_start, parse_port};

/// Check if bytes begin with a non-empty all-digit run ending at a path,
/// query, or fragment delimiter (or the end of input).
fn is_port_run(bytes: &[u8]) -> bool {
    let end = memchr::memchr3(b'/', b'?', b'#', bytes).unwrap_or(bytes.len());
    end > 0 && bytes[..end].iter().all(u8::is_ascii_digit)
}

/// Extract the leading scheme token from a URL string.
///
/// A scheme is `[A-Za-z][A-Za-z0-9+.-]*` immediately followed by `:`. The
/// token is returned exactly as written, without case folding.
///
/// A token whose colon is followed by a bare digit run (`host:8080/path`)
/// is a host, not a scheme, and yields `None`; a token followed by `//`
/// or by anything non-numeric is a scheme.
pub fn scheme_token(input: &str) -> Option<&str> {
    let bytes = input.as_bytes();
    if !bytes.first().copied().is_some_and(is_scheme_start) {
        return None;
    }

    let colon = memchr::memchr(b':', bytes)?;
    if !bytes[1..colon].iter().copied().all(is_scheme_byte) {
        return None;
    }

    let rest = &bytes[colon + 1..];
    if rest.starts_with(b"//") {
        return Some(&input[..colon]);
    }
    if is_port_run(rest) {
        // host:port form
        return None;
    }
    Some(&input[..colon])
}

/// Extract the port from a scheme-less URL of the form `//host:port/...`
/// or `host:port...`.
///
/// The authority runs up to the first `/`, `?`, or `#`. Bracketed IPv6
/// hosts carry their port after `]:`; otherwise the port follows the last
/// `:` in the authority. Runs that are empty, non-numeric, or exceed the
/// u16 range yield `None`.
pub fn authority_port(input: &str) -> Option<u16> {
    let input = input.strip_prefix("//").unwrap_or(input);
    let bytes = input.as_bytes();
    let end = memchr::memchr3(b'/', b'?', b'#', bytes).unwrap_or(bytes.len());
    let authority = &input[..end];

    let port = if authority.starts_with('[') {
        let bracket_end = memchr::memchr(b']', authority.as_bytes())?;
        authority[bracket_end + 1..].strip_prefix(':')?
    } else {
        let colon = memchr::memrchr(b':', authority.as_bytes())?;
        &authority[colon + 1..]
    };
    parse_port(port)
}
