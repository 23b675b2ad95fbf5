use crate::error::ValidationError;

/// Length of a PAN: five letters, four digits, one check letter
pub const PAN_LEN: usize = 10;

/// Normalize a PAN to upper case and check its `AAAAA9999A` shape
pub fn normalize_pan(raw: &str) -> Result<String, ValidationError> {
    let pan = raw.trim().to_ascii_uppercase();
    if pan.len() != PAN_LEN {
        return Err(ValidationError::InvalidPanNumber);
    }

    let well_formed = pan.char_indices().all(|(i, c)| match i {
        0..=4 | 9 => c.is_ascii_uppercase(),
        _ => c.is_ascii_digit(),
    });
    if !well_formed {
        return Err(ValidationError::InvalidPanNumber);
    }
    Ok(pan)
}
