//! Account (access-code holder) entities.

pub mod model;

pub use model::{Account, ACCESS_CODE_LEN, is_valid_access_code};
