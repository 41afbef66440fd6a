//! C++ wire-binding templates.

pub mod declarations;
pub mod test_base;

pub use declarations::DeclarationsTemplate;
pub use test_base::TestBaseTemplate;
