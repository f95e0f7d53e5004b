//! Typed lookups into an aircraft property store.
//!
//! Values are stored as text. Numeric reads are lenient in the same way as
//! C `atoi`/`atof`: the longest numeric prefix is used and text without one
//! reads as zero. Only a missing key is an error.

use pushback_acf::AcfFile;
use pushback_core::{feet_to_meters, OutlineError};

/// Read-only view of an [`AcfFile`] with typed accessors
#[derive(Debug, Clone, Copy)]
pub struct PropertyReader<'a> {
    acf: &'a AcfFile,
}

impl<'a> PropertyReader<'a> {
    pub fn new(acf: &'a AcfFile) -> Self {
        Self { acf }
    }

    /// File format version of the underlying store
    pub fn version(&self) -> i32 {
        self.acf.version()
    }

    /// Raw lookup, `None` if absent
    pub fn find(&self, key: &str) -> Option<&'a str> {
        self.acf.find(key)
    }

    /// Raw lookup that fails on a missing key
    pub fn read_str(&self, key: &str) -> Result<&'a str, OutlineError> {
        self.find(key).ok_or_else(|| {
            tracing::error!("Error parsing acf file: property {} not found", key);
            OutlineError::missing(key)
        })
    }

    pub fn read_int(&self, key: &str) -> Result<i32, OutlineError> {
        self.read_str(key).map(lenient_int)
    }

    pub fn read_float(&self, key: &str) -> Result<f64, OutlineError> {
        self.read_str(key).map(lenient_float)
    }

    /// Read a length in feet, returning meters minus `offset`
    pub fn read_feet(&self, key: &str, offset: f64) -> Result<f64, OutlineError> {
        self.read_float(key).map(|ft| feet_to_meters(ft) - offset)
    }

    /// Like [`read_feet`](Self::read_feet) but `None` on a missing key, without logging
    pub fn try_feet(&self, key: &str, offset: f64) -> Option<f64> {
        self.find(key)
            .map(|value| feet_to_meters(lenient_float(value)) - offset)
    }
}

/// Parse the leading integer of `s`, 0 if there is none
pub fn lenient_int(s: &str) -> i32 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    let prefix = &s[..sign_len + digits];
    match prefix.parse::<i64>() {
        Ok(v) => v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        // Only overflow gets here
        Err(_) if prefix.starts_with('-') => i32::MIN,
        Err(_) => i32::MAX,
    }
}

/// Parse the leading decimal number of `s`, 0 if there is none
pub fn lenient_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_at = |from: usize| {
        bytes[from.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_at(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_at(end + 1);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0.0;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_at(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_int() {
        assert_eq!(lenient_int("42"), 42);
        assert_eq!(lenient_int("  -7"), -7);
        assert_eq!(lenient_int("+3"), 3);
        assert_eq!(lenient_int("12abc"), 12);
        assert_eq!(lenient_int("3.9"), 3);
        assert_eq!(lenient_int("abc"), 0);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("-"), 0);
        assert_eq!(lenient_int("99999999999999999999"), i32::MAX);
        assert_eq!(lenient_int("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_lenient_float() {
        assert_eq!(lenient_float("1.5"), 1.5);
        assert_eq!(lenient_float(" -0.25"), -0.25);
        assert_eq!(lenient_float("2."), 2.0);
        assert_eq!(lenient_float(".5"), 0.5);
        assert_eq!(lenient_float("1e3"), 1000.0);
        assert_eq!(lenient_float("1.5E-1ft"), 0.15);
        assert_eq!(lenient_float("7e"), 7.0);
        assert_eq!(lenient_float("7e+"), 7.0);
        assert_eq!(lenient_float("12.5 deg"), 12.5);
        assert_eq!(lenient_float("."), 0.0);
        assert_eq!(lenient_float("none"), 0.0);
        assert_eq!(lenient_float(""), 0.0);
    }

    #[test]
    fn test_reader_feet_and_missing() {
        let acf = AcfFile::from_properties(1200, [("acf/_cgZ", "10"), ("acf/_junk", "n/a")]);
        let props = PropertyReader::new(&acf);

        assert!((props.read_feet("acf/_cgZ", 0.0).unwrap() - 3.048).abs() < 1e-12);
        assert!((props.read_feet("acf/_cgZ", 1.0).unwrap() - 2.048).abs() < 1e-12);
        assert_eq!(props.read_float("acf/_junk").unwrap(), 0.0);
        assert_eq!(props.try_feet("acf/_nothing", 0.0), None);

        match props.read_int("acf/_nothing") {
            Err(OutlineError::MissingProperty { key }) => assert_eq!(key, "acf/_nothing"),
            other => panic!("expected missing property, got {:?}", other),
        }
    }
}
