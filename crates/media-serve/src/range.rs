/// Inclusive byte range within a resource of known size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    /// Chunk length: `end - start + 1`.
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for a resource of `size` bytes.
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

/// Parses a standard `bytes=<start>-[<end>]` header against a resource of
/// `size` bytes. An omitted end defaults to `size - 1`; an end past the
/// resource is clamped. Returns `None` for anything unparsable or
/// unsatisfiable — callers fall back to the full-file response rather than
/// failing the request.
pub fn parse_range(header: &str, size: u64) -> Option<ByteRange> {
    if size == 0 {
        return None;
    }

    let spec = header.trim().strip_prefix("bytes=")?;
    let (start, end) = spec.split_once('-')?;

    let start: u64 = start.trim().parse().ok()?;
    let end: u64 = match end.trim() {
        "" => size - 1,
        explicit => explicit.parse().ok()?,
    };
    let end = end.min(size - 1);

    if start > end {
        return None;
    }

    Some(ByteRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_range_parses() {
        let range = parse_range("bytes=100-199", 1000).unwrap();
        assert_eq!((range.start, range.end), (100, 199));
        assert_eq!(range.len(), 100);
        assert_eq!(range.content_range(1000), "bytes 100-199/1000");
    }

    #[test]
    fn omitted_end_defaults_to_last_byte() {
        let range = parse_range("bytes=950-", 1000).unwrap();
        assert_eq!((range.start, range.end), (950, 999));
        assert_eq!(range.len(), 50);
    }

    #[test]
    fn end_is_clamped_to_resource_size() {
        let range = parse_range("bytes=0-5000", 1000).unwrap();
        assert_eq!(range.end, 999);
    }

    #[test]
    fn unsatisfiable_or_malformed_yields_none() {
        assert_eq!(parse_range("bytes=abc-def", 1000), None);
        assert_eq!(parse_range("bytes=-500", 1000), None);
        assert_eq!(parse_range("items=0-10", 1000), None);
        assert_eq!(parse_range("bytes=200-100", 1000), None);
        assert_eq!(parse_range("bytes=1000-", 1000), None);
        assert_eq!(parse_range("bytes=0-", 0), None);
    }

    #[test]
    fn whitespace_is_tolerated() {
        let range = parse_range(" bytes=0 - 9 ", 100);
        // Inner whitespace around the numbers is trimmed per field.
        assert_eq!(range, Some(ByteRange { start: 0, end: 9 }));
    }
}
