//! Compiled patterns for the format rules.

use std::sync::LazyLock;

use regex::Regex;

const EMAIL: &str = concat!(
    r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))"#,
    r"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$",
);

const INTEGER: &str = r"^[0-9]+$";

const ALPHANUMERIC: &str = r"^[a-zA-Z0-9]+$";

// Scheme, optional userinfo, dotted-quad or hostname, optional port, then
// path, query and fragment. Hostnames need at least one dot and an
// alphabetic top label. Non-ASCII letters from the BMP are accepted; case
// folding stays ASCII-only.
const URL: &str = concat!(
    r"^(?i-u:https?|s?ftp)://",
    // userinfo
    r"(([a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]|%[0-9a-fA-F]{2}|[!$&'()*+,;=]|:)*@)?",
    r"(",
    // IPv4
    r"(([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])",
    r"|",
    // hostname labels
    r"(([a-zA-Z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
    r"|[a-zA-Z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}][a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*[a-zA-Z0-9\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])\.)+",
    // top label
    r"([a-zA-Z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]",
    r"|[a-zA-Z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}][a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]*[a-zA-Z\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])\.?",
    r")",
    // port
    r"(:[0-9]*)?",
    // path
    r"(/(([a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]|%[0-9a-fA-F]{2}|[!$&'()*+,;=]|:|@)+(/([a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]|%[0-9a-fA-F]{2}|[!$&'()*+,;=]|:|@)*)*)?)?",
    // query
    r"(\?(([a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]|%[0-9a-fA-F]{2}|[!$&'()*+,;=]|:|@)|[\x{E000}-\x{F8FF}]|/|\?)*)?",
    // fragment
    r"(#(([a-zA-Z0-9\-._~\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]|%[0-9a-fA-F]{2}|[!$&'()*+,;=]|:|@)|/|\?)*)?$",
);

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(EMAIL));
static INTEGER_RE: LazyLock<Regex> = LazyLock::new(|| compile(INTEGER));
static ALPHANUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| compile(ALPHANUMERIC));
static URL_RE: LazyLock<Regex> = LazyLock::new(|| compile(URL));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in pattern")
}

/// Returns true if `value` is a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Returns true if `value` is one or more ASCII digits.
pub fn is_integer(value: &str) -> bool {
    INTEGER_RE.is_match(value)
}

/// Returns true if `value` is one or more ASCII letters or digits.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_RE.is_match(value)
}

/// Returns true if `value` is an absolute http, https, ftp or sftp URL.
pub fn is_url(value: &str) -> bool {
    URL_RE.is_match(value)
}
