//! Cursor-in-payload pagination.
//!
//! Sites that page through a POST search keep the page position inside the
//! form-encoded request body. Advancing a chain means parsing that body,
//! bumping the cursor and encoding a fresh body; the incoming request is
//! left untouched.

use crate::error::CursorError;

/// Ordered form key/value pairs of a request body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    /// Parsing is lenient: malformed escapes decode lossily rather than
    /// fail.
    pub fn parse(body: &str) -> Self {
        let pairs = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value for `key` with a single one, keeping the position
    /// of the first occurrence. Appends if `key` is absent.
    pub fn set(&mut self, key: &str, value: String) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.pairs[idx].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_owned(), value)),
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn encode(&self) -> Result<String, CursorError> {
        Ok(serde_urlencoded::to_string(&self.pairs)?)
    }
}

/// Read the integer cursor stored under `field`.
pub fn read_cursor(form: &FormBody, field: &str) -> Result<i64, CursorError> {
    let value = form
        .get(field)
        .ok_or_else(|| CursorError::Missing(field.to_owned()))?;
    value.parse().map_err(|source| CursorError::NotNumeric {
        field: field.to_owned(),
        value: value.to_owned(),
        source,
    })
}

/// Returns `body` re-encoded with the cursor under `field` incremented by
/// one. All other fields keep their values and order.
pub fn advance_cursor(body: &str, field: &str) -> Result<String, CursorError> {
    let mut form = FormBody::parse(body);
    let current = read_cursor(&form, field)?;
    let next = current
        .checked_add(1)
        .ok_or_else(|| CursorError::Overflow(field.to_owned()))?;
    log::debug!("advance {} {} -> {}", field, current, next);
    form.set(field, next.to_string());
    form.encode()
}
