use http::Method;
use serde_json::Value;
use shared::{
    api::{self, payloads::RejectCourseRequest, query::Query, with_id},
    model::Role,
};

use super::{RequestOptions, SessionClient};
use crate::{error::ClientError, storage::Storage, transport::Transport};

impl<S: Storage, T: Transport> SessionClient<S, T> {
    /// Paged user list, optionally narrowed to one role
    pub async fn get_all_users(&self, role: Option<Role>, page: u32) -> Result<Value, ClientError> {
        let query = Query::new().append("page", page).append_opt("role", role);
        self.get(&query.to_path(api::Admin::Users.path())).await
    }

    pub async fn get_pending_courses(&self) -> Result<Value, ClientError> {
        self.get(api::Admin::PendingCourses.path()).await
    }

    pub async fn approve_course(&self, course_id: &str) -> Result<Value, ClientError> {
        self.post(&with_id(api::Admin::Approve.path(), course_id)).await
    }

    pub async fn reject_course(&self, course_id: &str, reason: &str) -> Result<Value, ClientError> {
        let body = RejectCourseRequest { reason: reason.to_string() };
        self.send_json(Method::POST, &with_id(api::Admin::Reject.path(), course_id), &body)
            .await
    }

    pub async fn get_platform_stats(&self) -> Result<Value, ClientError> {
        self.get(api::Admin::Statistics.path()).await
    }

    pub async fn deactivate_user(&self, user_id: &str) -> Result<Value, ClientError> {
        self.request(&with_id(api::Admin::UserId.path(), user_id), RequestOptions::delete())
            .await
    }
}
