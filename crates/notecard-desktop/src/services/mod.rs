//! Application services
//!
//! Services for file persistence shared by the components.

mod storage;

pub use storage::StorageService;
