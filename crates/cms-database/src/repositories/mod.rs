//! Concrete repository implementations.

pub mod content;
pub mod menu;
pub mod upload;
pub mod user;

pub use content::ContentRepository;
pub use menu::MenuRepository;
pub use upload::UploadRepository;
pub use user::UserRepository;
