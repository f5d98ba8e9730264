pub mod completion;
pub mod store;
pub mod types;

pub use completion::{suggest, Suggestion};
pub use store::MemoStore;
pub use types::{Layout, Memo, COLOR_PALETTE};
