use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode};

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode with RFC3986 semantics, spaces become `%20`.
pub fn percent_encode(input: &str) -> PercentEncode<'_> {
    utf8_percent_encode(input, TARGETS_FOR_PARAMS)
}

/// Encode with standard `application/x-www-form-urlencoded` semantics,
/// spaces become `+`. This is what goes on the wire; the signature base
/// string always uses [`percent_encode`] instead.
pub fn form_encode(input: &str) -> String {
    percent_encode(input).to_string().replace("%20", "+")
}

/// Strip the query string, keeping everything before the first '?'.
pub fn base_uri(uri: &str) -> &str {
    uri.split('?').next().unwrap_or(uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_encode() {
        assert_eq!(
            percent_encode("Hello Ladies + Gentlemen, a signed OAuth request!").to_string(),
            "Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21"
        );
        assert_eq!(
            percent_encode("an_unreserved-name.~").to_string(),
            "an_unreserved-name.~"
        );
    }

    #[test]
    fn test_form_encode() {
        assert_eq!(
            form_encode("Hello Ladies + Gentlemen, a signed OAuth request!"),
            "Hello+Ladies+%2B+Gentlemen%2C+a+signed+OAuth+request%21"
        );
        // a literal percent sequence must survive the space rewrite
        assert_eq!(form_encode("a%20b"), "a%2520b");
    }

    #[test]
    fn test_base_uri() {
        assert_eq!(
            base_uri("https://api.twitter.com/1.1/statuses/update.json?include_entities=true"),
            "https://api.twitter.com/1.1/statuses/update.json"
        );
        assert_eq!(
            base_uri("https://api.twitter.com/1.1/statuses/update.json"),
            "https://api.twitter.com/1.1/statuses/update.json"
        );
    }
}
