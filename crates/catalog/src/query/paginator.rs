use shared::errors::ServiceError;

pub const MAX_PAGE_SIZE: u32 = 100;

/// Zero-based window derived from a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(page: u32, size: u32) -> Result<Self, ServiceError> {
        let mut errors = Vec::new();

        if page < 1 {
            errors.push(format!("page: must be at least 1, got {page}"));
        }
        if size < 1 || size > MAX_PAGE_SIZE {
            errors.push(format!(
                "size: must be between 1 and {MAX_PAGE_SIZE}, got {size}"
            ));
        }
        if !errors.is_empty() {
            return Err(ServiceError::Validation(errors));
        }

        Ok(Self {
            offset: (i64::from(page) - 1) * i64::from(size),
            limit: i64::from(size),
        })
    }
}
