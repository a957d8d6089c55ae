//! Input validators
//!
//! Pure well-formedness checks shared by the domain entities.

const TAX_ID_LENGTH: usize = 11;

/// Check password complexity
///
/// At least 8 characters with one lowercase letter, one uppercase letter
/// and one digit. Any other characters are allowed.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_lowercase())
        && password.chars().any(|c| c.is_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Check a national tax id (11 digits, two mod-11 check digits)
///
/// Formatting punctuation such as `974.563.215-58` is ignored.
pub fn validate_tax_id(tax_id: &str) -> bool {
    let digits: Vec<u32> = tax_id.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != TAX_ID_LENGTH {
        return false;
    }
    // Repeated sequences pass the checksum but are never issued
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let first = check_digit(&digits[..9]);
    let second = check_digit(&digits[..10]);

    digits[9] == first && digits[10] == second
}

/// Weighted mod-11 check digit; weights run from `len + 1` down to 2
fn check_digit(digits: &[u32]) -> u32 {
    let weights = (2..=digits.len() as u32 + 1).rev();
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;

    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}
