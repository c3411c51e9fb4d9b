use std::io::BufRead;

use crate::error::SumError;

/// Reads a declared-length sequence: one count `N` followed by `N`
/// integers, whitespace-separated (line breaks and spaces are
/// interchangeable). Tokens beyond the `N`th are ignored.
pub fn read_sequence<R: BufRead>(mut reader: R) -> Result<Vec<i64>, SumError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut tokens = text.split_whitespace();
    let length_token = tokens.next().ok_or(SumError::EmptyInput)?;
    let length: usize = length_token
        .parse()
        .map_err(|_| SumError::InvalidLength(length_token.to_string()))?;

    let mut sequence = Vec::with_capacity(length);
    for found in 0..length {
        let token = tokens.next().ok_or(SumError::TruncatedSequence {
            expected: length,
            found,
        })?;
        let value = token
            .parse()
            .map_err(|_| SumError::InvalidValue(token.to_string()))?;
        sequence.push(value);
    }

    Ok(sequence)
}
