// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid page number: {0} (pages are 1-based)")]
    InvalidPage(u32),
}

pub type Result<T> = std::result::Result<T, DomainError>;
