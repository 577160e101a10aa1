mod admin;
pub use admin::*;

mod auth;
pub use auth::*;

mod instructor;
pub use instructor::*;

mod payment;
pub use payment::*;

mod student;
pub use student::*;
