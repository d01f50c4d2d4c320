pub mod answers;
pub mod error;
pub mod layout;

pub use answers::{HOSTS_PLACEHOLDER, HostAnswers, ObjectStoreAnswers, SetupAnswers};
pub use error::AppError;
pub use layout::DeployLayout;
