pub const MIN_OPTION: i32 = 1;
pub const MAX_OPTION: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid option: {0} (must be {MIN_OPTION}-{MAX_OPTION})")]
    InvalidOption(i32),
}

pub fn validate_option(number: i32) -> Result<i16, ValidationError> {
    if (MIN_OPTION..=MAX_OPTION).contains(&number) {
        Ok(number as i16)
    } else {
        Err(ValidationError::InvalidOption(number))
    }
}

pub fn option_numbers() -> impl Iterator<Item = i16> {
    (MIN_OPTION as i16)..=(MAX_OPTION as i16)
}
