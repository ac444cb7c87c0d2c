// frontend/src/errors.rs

use crate::geo::PositionError;

pub const PERMISSION_DENIED_MSG: &str =
    "Aapne location access ki anumati nahi di. Kripya suraksha ke liye isse anumati dein.";
pub const POSITION_UNAVAILABLE_MSG: &str = "Aapki location ki jaankari uplabdh nahi hai.";
pub const TIMEOUT_MSG: &str = "Location anurodh time out ho gaya.";
pub const UNKNOWN_MSG: &str = "Ek anjaan error hua.";
pub const FALLBACK_MSG: &str = "An error occurred.";

/// User-facing text for a positioning failure. Never blank.
pub fn position_error_message(err: PositionError) -> &'static str {
    match err {
        PositionError::PermissionDenied => PERMISSION_DENIED_MSG,
        PositionError::PositionUnavailable => POSITION_UNAVAILABLE_MSG,
        PositionError::Timeout => TIMEOUT_MSG,
        PositionError::Unknown => UNKNOWN_MSG,
        PositionError::Unrecognized(_) => FALLBACK_MSG,
    }
}

/// Failure of a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    #[error("geolocation is not supported on this platform")]
    Unsupported,
    #[error(transparent)]
    Position(#[from] PositionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_known_code_has_its_own_message() {
        let known = [
            PositionError::PermissionDenied,
            PositionError::PositionUnavailable,
            PositionError::Timeout,
            PositionError::Unknown,
        ];
        let messages: Vec<&str> = known.iter().map(|e| position_error_message(*e)).collect();
        for (i, m) in messages.iter().enumerate() {
            assert!(!m.trim().is_empty());
            assert_ne!(*m, FALLBACK_MSG);
            assert!(messages.iter().skip(i + 1).all(|other| other != m));
        }
    }

    #[test]
    fn unrecognized_codes_fall_back() {
        for code in [0, 4, 99, u16::MAX] {
            assert_eq!(
                position_error_message(PositionError::Unrecognized(code)),
                FALLBACK_MSG
            );
        }
    }
}
