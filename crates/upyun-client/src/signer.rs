//! Request signing for the UpYun REST API.
//!
//! The signature is `md5(method&uri&date&length&md5(password))`, sent as
//! `Authorization: UpYun <operator>:<signature>` next to the `Date` header it
//! was computed over. There is no keyed MAC involved; anyone holding the
//! hashed password can sign requests.

use jiff::Timestamp;

use crate::digest::string_md5;

/// Authorization scheme name.
pub const AUTH_SCHEME: &str = "UpYun";

/// Format of the `Date` header, e.g. `Mon, 02 Jan 2006 15:04:05 GMT`.
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Computes the hex request signature.
///
/// `password_md5` is the already hashed password, never the plain one.
pub fn sign(method: &str, uri: &str, date: &str, length: u64, password_md5: &str) -> String {
    let signing_input = format!("{method}&{uri}&{date}&{length}&{password_md5}");
    string_md5(&signing_input)
}

/// Builds the full `Authorization` header value for a request.
pub fn authorization(
    operator: &str,
    method: &str,
    uri: &str,
    date: &str,
    length: u64,
    password_md5: &str,
) -> String {
    let signature = sign(method, uri, date, length, password_md5);
    format!("{AUTH_SCHEME} {operator}:{signature}")
}

/// Formats a timestamp as an HTTP date in UTC.
pub fn http_date(timestamp: Timestamp) -> String {
    timestamp.strftime(HTTP_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATE: &str = "Wed, 01 Jan 2025 00:00:00 GMT";
    const SECRET: &str = "5f4dcc3b5aa765d61d8327deb882cf99";

    #[test]
    fn test_sign_is_deterministic_hex() {
        let first = sign("GET", "/bucket/a.txt", DATE, 0, SECRET);
        let second = sign("GET", "/bucket/a.txt", DATE, 0, SECRET);

        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_sign_matches_digest_of_joined_fields() {
        let expected = string_md5(&format!("POST&/bucket/a.txt&{DATE}&9&{SECRET}"));
        assert_eq!(sign("POST", "/bucket/a.txt", DATE, 9, SECRET), expected);
    }

    #[test]
    fn test_sign_changes_with_every_input() {
        let base = sign("GET", "/bucket/a.txt", DATE, 0, SECRET);

        assert_ne!(base, sign("HEAD", "/bucket/a.txt", DATE, 0, SECRET));
        assert_ne!(base, sign("GET", "/bucket/b.txt", DATE, 0, SECRET));
        assert_ne!(base, sign("GET", "/bucket/a.txt", "Thu, 02 Jan 2025 00:00:00 GMT", 0, SECRET));
        assert_ne!(base, sign("GET", "/bucket/a.txt", DATE, 1, SECRET));
        assert_ne!(base, sign("GET", "/bucket/a.txt", DATE, 0, &string_md5("other")));
    }

    #[test]
    fn test_authorization_header() {
        let header = authorization("operator", "GET", "/bucket/", DATE, 0, SECRET);
        let signature = sign("GET", "/bucket/", DATE, 0, SECRET);
        assert_eq!(header, format!("UpYun operator:{signature}"));
    }

    #[test]
    fn test_http_date() {
        let timestamp = Timestamp::from_second(1_136_214_245).unwrap();
        assert_eq!(http_date(timestamp), "Mon, 02 Jan 2006 15:04:05 GMT");
    }
}
