use std::fmt::Display;

use const_format::concatcp;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};

pub mod error;
pub mod payloads;
pub mod query;

pub const AUTH_BASE_PATH: &str = "/auth/";
pub const STUDENT_BASE_PATH: &str = "/student/";
pub const INSTRUCTOR_BASE_PATH: &str = "/instructor/";
pub const PAYMENT_BASE_PATH: &str = "/payment/";
pub const ADMIN_BASE_PATH: &str = "/admin/";

/// Placeholder in path templates that is substituted with a resource id
pub const ID_PLACEHOLDER: &str = ":id";

/// Substitutes the `:id` placeholder in `template` with the percent encoded `id`
pub fn with_id<T: Display>(template: &str, id: T) -> String {
    let id = id.to_string();
    template.replace(ID_PLACEHOLDER, &percent_encode(id.as_bytes(), NON_ALPHANUMERIC).to_string())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Auth {
    Register,
    Login,
    Profile,
    ChangePassword,
    VerifyToken,
}

impl Auth {
    pub const fn path(&self) -> &str {
        use Auth::*;
        match self {
            Register => concatcp!(AUTH_BASE_PATH, "register"),
            Login => concatcp!(AUTH_BASE_PATH, "login"),
            Profile => concatcp!(AUTH_BASE_PATH, "profile"),
            ChangePassword => concatcp!(AUTH_BASE_PATH, "change-password"),
            VerifyToken => concatcp!(AUTH_BASE_PATH, "verify-token"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Student {
    Courses,
    CourseId,
    Enroll,
    MyCourses,
    Progress,
    Chatbot,
    Recommendations,
    DropCourse,
}

impl Student {
    pub const fn path(&self) -> &str {
        use Student::*;
        match self {
            Courses => concatcp!(STUDENT_BASE_PATH, "courses"),
            CourseId => concatcp!(STUDENT_BASE_PATH, "courses/:id"),
            Enroll => concatcp!(STUDENT_BASE_PATH, "enroll"),
            MyCourses => concatcp!(STUDENT_BASE_PATH, "my-courses"),
            Progress => concatcp!(STUDENT_BASE_PATH, "progress/:id"),
            Chatbot => concatcp!(STUDENT_BASE_PATH, "chatbot"),
            Recommendations => concatcp!(STUDENT_BASE_PATH, "recommendations"),
            DropCourse => concatcp!(STUDENT_BASE_PATH, "drop-course/:id"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instructor {
    Courses,
    CourseId,
    Publish,
    Materials,
    Students,
    Statistics,
}

impl Instructor {
    pub const fn path(&self) -> &str {
        use Instructor::*;
        match self {
            Courses => concatcp!(INSTRUCTOR_BASE_PATH, "courses"),
            CourseId => concatcp!(INSTRUCTOR_BASE_PATH, "courses/:id"),
            Publish => concatcp!(INSTRUCTOR_BASE_PATH, "courses/:id/publish"),
            Materials => concatcp!(INSTRUCTOR_BASE_PATH, "courses/:id/materials"),
            Students => concatcp!(INSTRUCTOR_BASE_PATH, "courses/:id/students"),
            Statistics => concatcp!(INSTRUCTOR_BASE_PATH, "statistics"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payment {
    Demo,
    MyPayments,
    Verify,
    PaymentId,
}

impl Payment {
    pub const fn path(&self) -> &str {
        use Payment::*;
        match self {
            Demo => concatcp!(PAYMENT_BASE_PATH, "demo"),
            MyPayments => concatcp!(PAYMENT_BASE_PATH, "my-payments"),
            Verify => concatcp!(PAYMENT_BASE_PATH, "verify/:id"),
            PaymentId => concatcp!(PAYMENT_BASE_PATH, ":id"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admin {
    Users,
    UserId,
    PendingCourses,
    Approve,
    Reject,
    Statistics,
}

impl Admin {
    pub const fn path(&self) -> &str {
        use Admin::*;
        match self {
            Users => concatcp!(ADMIN_BASE_PATH, "users"),
            UserId => concatcp!(ADMIN_BASE_PATH, "users/:id"),
            PendingCourses => concatcp!(ADMIN_BASE_PATH, "courses/pending"),
            Approve => concatcp!(ADMIN_BASE_PATH, "courses/:id/approve"),
            Reject => concatcp!(ADMIN_BASE_PATH, "courses/:id/reject"),
            Statistics => concatcp!(ADMIN_BASE_PATH, "statistics"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_paths_are_joined_to_their_section() {
        assert_eq!(Auth::Login.path(), "/auth/login");
        assert_eq!(Student::MyCourses.path(), "/student/my-courses");
        assert_eq!(Instructor::Statistics.path(), "/instructor/statistics");
        assert_eq!(Payment::MyPayments.path(), "/payment/my-payments");
        assert_eq!(Admin::PendingCourses.path(), "/admin/courses/pending");
    }

    #[test]
    fn test_with_id_substitutes_placeholder() {
        assert_eq!(with_id(Instructor::Publish.path(), "c42"), "/instructor/courses/c42/publish");
        assert_eq!(with_id(Payment::PaymentId.path(), 7), "/payment/7");
    }

    #[test]
    fn test_with_id_encodes_path_separators() {
        assert_eq!(with_id(Student::CourseId.path(), "a/b c"), "/student/courses/a%2Fb%20c");
    }
}
