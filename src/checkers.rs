/// Check if a byte can start a scheme token.
/// URL grammar: a scheme begins with an ASCII alpha.
pub fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Check if a byte can continue a scheme token.
/// URL grammar: ASCII alphanumeric or `+`, `-`, `.`.
pub fn is_scheme_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
