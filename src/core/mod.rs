pub mod circumference;
pub mod composition;
pub mod history;
pub mod progress;
pub mod projection;
pub mod rate;
pub mod summary;
pub mod timeline;
pub mod units;
