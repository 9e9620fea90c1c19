use crate::config::constants::SUCCESS_STATUSES;

/// Transport-neutral view of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct CallResponse<S> {
    pub status: u16,
    pub body: Option<S>,
    pub success: bool,
}

impl<S> CallResponse<S> {
    pub fn new(status: u16, body: Option<S>, success: bool) -> Self {
        Self {
            status,
            body,
            success,
        }
    }

    // * Derives the success flag from the 2xx range
    pub fn from_status(status: u16, body: Option<S>) -> Self {
        Self::new(status, body, SUCCESS_STATUSES.contains(&status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_success_flag() {
        assert!(CallResponse::<()>::from_status(200, None).success);
        assert!(CallResponse::<()>::from_status(204, None).success);
        assert!(!CallResponse::<()>::from_status(304, None).success);
        assert!(!CallResponse::<()>::from_status(401, None).success);
        assert!(!CallResponse::<()>::from_status(503, None).success);
    }
}
