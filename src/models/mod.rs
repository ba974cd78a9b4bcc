pub mod activity;
pub mod course;
pub mod dataset;
pub mod session;
pub mod settings;
pub mod subscription;
pub mod user;

pub use activity::ActivityEntry;
pub use course::{Course, Module, PublishStatus};
pub use dataset::MockDataset;
pub use session::{CurrentUser, SessionRecord};
pub use settings::{PlatformSettings, SettingKey};
pub use subscription::{Subscription, SubscriptionPlan};
pub use user::{Role, SubscriptionStatus, User};
