//! Tab collection error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Tab index {index} out of range for {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },
}
