use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}_]+").expect("valid regex");
}

/// Tokenize text into lowercase word tokens, in left-to-right order.
///
/// A token is a maximal run of alphanumeric/underscore characters; every
/// other character is a separator and produces nothing. Duplicates are
/// retained so callers can count term frequencies.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    RE.find_iter(&lowered)
        .map(|mat| mat.as_str().to_string())
        .collect()
}
