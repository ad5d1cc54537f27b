use regex_syntax::{hir::literal::Extractor, parse};

/// Extract the literal prefixes one of which must occur in any haystack the
/// pattern matches. Used to skip regex evaluation when none is present.
///
/// Returns an empty vec when the pattern cannot be reduced to a finite set of
/// prefixes of at least `min_len` bytes (or cannot be parsed by regex_syntax,
/// e.g. look-around). An empty result means the pattern must always be tried.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    // A single short alternative would make the whole prefilter unsound, so
    // it disables prefiltering for this pattern.
    let mut out = Vec::with_capacity(literals.len());
    for lit in literals {
        match std::str::from_utf8(lit.as_bytes()) {
            Ok(s) if s.len() >= min_len => out.push(s.to_lowercase()),
            _ => return Vec::new(),
        }
    }
    out
}
