//! Parsing the compressor descriptor: a comma-separated, ordered
//! preference list of codec names or numeric ids.

use std::collections::HashSet;

use hyphanet_types::CompressionAlgorithm;

use crate::error::CompressError;

const NAMED: &[CompressionAlgorithm] = &[
    CompressionAlgorithm::Gzip,
    CompressionAlgorithm::Bzip2,
    CompressionAlgorithm::LzmaLegacy,
    CompressionAlgorithm::Lzma,
];

pub fn parse(descriptor: &str) -> Result<Vec<CompressionAlgorithm>, CompressError> {
    if descriptor.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in descriptor.split(',') {
        let token = raw.trim();
        let algo = parse_token(token)
            .ok_or_else(|| CompressError::InvalidDescriptor(descriptor.to_string()))?;
        if !seen.insert(algo) {
            return Err(CompressError::InvalidDescriptor(descriptor.to_string()));
        }
        out.push(algo);
    }
    Ok(out)
}

fn parse_token(token: &str) -> Option<CompressionAlgorithm> {
    if let Ok(id) = token.parse::<i16>() {
        return CompressionAlgorithm::try_from(id).ok().filter(|a| NAMED.contains(a));
    }
    let upper = token.to_ascii_uppercase();
    NAMED.iter().copied().find(|algo| algo.descriptor_name() == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_names_case_insensitively_in_order() {
        let parsed = parse("gzip, BZIP2").unwrap();
        assert_eq!(parsed, vec![CompressionAlgorithm::Gzip, CompressionAlgorithm::Bzip2]);
    }

    #[test]
    fn test_parses_numeric_ids() {
        let parsed = parse("0,1").unwrap();
        assert_eq!(parsed, vec![CompressionAlgorithm::Gzip, CompressionAlgorithm::Bzip2]);
    }

    #[test]
    fn test_empty_descriptor_is_empty_list() {
        assert_eq!(parse("").unwrap(), Vec::new());
    }

    #[test]
    fn test_rejects_duplicates() {
        assert!(parse("GZIP,GZIP").is_err());
    }

    #[test]
    fn test_rejects_unknown_name() {
        assert!(parse("GZIP,NEVER_HEARD_OF_IT").is_err());
    }

    #[test]
    fn test_rejects_none_since_it_is_not_a_codec() {
        assert!(parse("NONE").is_err());
        assert!(parse("-1").is_err());
    }
}
