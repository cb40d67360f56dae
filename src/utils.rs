/// Read a string of `'0'` and `'1'` as a binary number, first character most significant.
///
/// Returns `None` for empty strings, any other character, or strings too long for `usize`.
///
/// # Example
/// ```
/// use qsim::utils::parse_bits;
///
/// assert_eq!(parse_bits("110"), Some(0b110));
/// assert_eq!(parse_bits("0"), Some(0));
/// assert_eq!(parse_bits(""), None);
/// assert_eq!(parse_bits("1a"), None);
/// ```
pub fn parse_bits(bits: &str) -> Option<usize> {
    if bits.is_empty() || bits.len() > usize::BITS as usize {
        return None;
    }
    bits.chars().try_fold(0usize, |acc, c| match c {
        '0' => Some(acc << 1),
        '1' => Some((acc << 1) | 1),
        _ => None,
    })
}
