//! Attribute codec: cookie records to and from the host jar's wire strings.
//!
//! Writes use the `Set-Cookie`-style grammar the host channel accepts:
//!
//! ```text
//! <enc key>=<enc value>[; expires=<date>|; max-age=<n>][; domain=<d>][; path=<p>][; secure]
//! ```
//!
//! Reads parse the jar string the host returns, `k1=v1; k2=v2`, and never
//! fail: content that cannot be decoded is treated as absent.
//!
//! Keys and values are percent-encoded with the URI component set, so `;`,
//! `=`, `%` and non-ASCII text survive a round trip.

use crate::base::config::{CookieStoreConfig, RelativeExpiry};
use crate::base::context::ResultExt;
use crate::base::kverror::KvError;
use crate::cookies::canonicalpath::canonicalize_path;
use crate::cookies::cookierecord::{validate_key, CookieRecord, Expiry};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Expiry written for [`Expiry::Never`].
pub const FAR_FUTURE_EXPIRES: &str = "Fri, 31 Dec 9999 23:59:59 GMT";

/// Expiry written by removals.
pub const EPOCH_EXPIRES: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// IMF-fixdate, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Strict percent-decoding: every `%` must start a two-digit hex escape and
/// the decoded bytes must be UTF-8.
pub fn percent_decode(s: &str) -> Result<String, KvError> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                return Err(KvError::MalformedPercentEncoding(s.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(s)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| KvError::InvalidUtf8)
}

/// Format an instant the way the jar expects `expires` values.
///
/// Fails with [`KvError::DateOutOfRange`] when the instant has no UTC
/// representation, e.g. `9999-12-31 23:00 -05:00`.
pub fn format_http_date(at: OffsetDateTime) -> Result<String, KvError> {
    let utc = at
        .checked_to_offset(UtcOffset::UTC)
        .ok_or(KvError::DateOutOfRange(at.year()))?;
    Ok(utc.format(HTTP_DATE)?)
}

/// [`format_http_date`], clamping instants past either end of the date
/// range to the far-future or epoch expiry.
fn format_http_date_clamped(at: OffsetDateTime) -> Option<String> {
    match format_http_date(at) {
        Ok(date) => Some(date),
        Err(KvError::DateOutOfRange(year)) if year > 0 => Some(FAR_FUTURE_EXPIRES.to_string()),
        Err(KvError::DateOutOfRange(_)) => Some(EPOCH_EXPIRES.to_string()),
        Err(e) => Err(e).or_log("encode"),
    }
}

/// Split a jar string into `(name, value)` pairs, trimmed, in jar order.
/// Tokens without `=` yield `None` for the value.
fn records(jar: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    jar.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (token, None),
        })
}

/// Match a raw jar name against a caller key, either in our encoding or
/// after decoding whatever encoding the writer used.
fn name_matches(raw_name: &str, key: &str, encoded_key: &str) -> bool {
    raw_name == encoded_key || percent_decode(raw_name).is_ok_and(|name| name == key)
}

/// Look up `key` in `jar` and return its decoded value.
///
/// When the jar exposes the key more than once the last occurrence wins.
/// Returns `None` for an empty key, an absent key, or a value that is not
/// valid percent-encoded UTF-8.
pub fn decode(key: &str, jar: &str) -> Option<String> {
    if key.is_empty() {
        return Err(KvError::EmptyKey).or_log("decode");
    }
    let encoded_key = percent_encode(key);

    let raw_value = records(jar)
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .filter(|(name, _)| name_matches(name, key, &encoded_key))
        .last()
        .map(|(_, value)| value)?;

    percent_decode(raw_value).or_log("decode")
}

/// True iff `key` is a usable key and the jar holds a record for it.
pub fn test_exists(key: &str, jar: &str) -> bool {
    if validate_key(key).or_log("test_exists").is_none() {
        return false;
    }
    let encoded_key = percent_encode(key);

    records(jar).any(|(name, value)| value.is_some() && name_matches(name, key, &encoded_key))
}

/// Every key in the jar, decoded, in jar order and without deduplication.
///
/// Tokens without `=`, records with an empty name and names that do not
/// decode are skipped.
pub fn list_keys(jar: &str) -> Vec<String> {
    records(jar)
        .filter(|(name, value)| value.is_some() && !name.is_empty())
        .filter_map(|(name, _)| percent_decode(name).or_log("list_keys"))
        .collect()
}

/// Build the wire string for `record`, resolving its path against
/// `location_path`. Does not touch the jar.
pub fn encode(record: &CookieRecord, location_path: &str, config: &CookieStoreConfig) -> String {
    encode_at(record, location_path, config, OffsetDateTime::now_utc())
}

/// [`encode`] with an explicit clock, used when relative expiries are
/// written as absolute dates.
pub fn encode_at(
    record: &CookieRecord,
    location_path: &str,
    config: &CookieStoreConfig,
    now: OffsetDateTime,
) -> String {
    let mut line = format!(
        "{}={}",
        percent_encode(&record.key),
        percent_encode(&record.value)
    );

    if let Some(expiry) = &record.expiry {
        if let Some(attr) = expiry_attribute(expiry, config.relative_expiry, now) {
            line.push_str(&attr);
        }
    }

    if let Some(domain) = config
        .domain_or_default(record.domain.as_deref())
        .filter(|d| !d.is_empty())
    {
        line.push_str("; domain=");
        line.push_str(domain);
    }

    let requested = record.path.as_deref().unwrap_or(location_path);
    let path = canonicalize_path(location_path, requested).unwrap_or_else(|e| {
        tracing::warn!(key = %record.key, error = %e, "writing cookie without a path attribute");
        String::new()
    });
    if !path.is_empty() {
        line.push_str("; path=");
        line.push_str(&path);
    }

    if record.secure {
        line.push_str("; secure");
    }

    line
}

fn expiry_attribute(expiry: &Expiry, mode: RelativeExpiry, now: OffsetDateTime) -> Option<String> {
    match expiry {
        Expiry::Never => Some(format!("; expires={FAR_FUTURE_EXPIRES}")),
        Expiry::RelativeSeconds(secs) => match mode {
            RelativeExpiry::MaxAge => Some(format!("; max-age={secs}")),
            RelativeExpiry::Expires => {
                let date = match now.checked_add(Duration::seconds(*secs)) {
                    Some(at) => format_http_date_clamped(at)?,
                    None if *secs > 0 => FAR_FUTURE_EXPIRES.to_string(),
                    None => EPOCH_EXPIRES.to_string(),
                };
                Some(format!("; expires={date}"))
            }
        },
        Expiry::AbsoluteTime(at) => {
            let date = format_http_date_clamped(*at)?;
            Some(format!("; expires={date}"))
        }
        Expiry::LiteralText(text) if text.is_empty() => None,
        Expiry::LiteralText(text) => Some(format!("; expires={text}")),
    }
}
