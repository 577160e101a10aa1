use http::Method;
use serde_json::Value;
use shared::api::{
    self,
    payloads::{ChatbotRequest, EnrollRequest, EnrollmentStatus, ProgressRequest, SkillLevel},
    query::Query,
    with_id,
};

use super::SessionClient;
use crate::{error::ClientError, storage::Storage, transport::Transport};

impl<S: Storage, T: Transport> SessionClient<S, T> {
    /// Published course catalogue. An empty or missing `search` is left out of the query
    pub async fn browse_courses(&self, page: u32, search: Option<&str>) -> Result<Value, ClientError> {
        let query = Query::new()
            .append("page", page)
            .append_opt("search", search.filter(|s| !s.is_empty()));
        self.get(&query.to_path(api::Student::Courses.path())).await
    }

    pub async fn get_course_details(&self, course_id: &str) -> Result<Value, ClientError> {
        self.get(&with_id(api::Student::CourseId.path(), course_id)).await
    }

    /// `payment_id` is sent as `null` for free courses
    pub async fn enroll_in_course(
        &self,
        course_id: &str,
        payment_id: Option<&str>,
    ) -> Result<Value, ClientError> {
        let body = EnrollRequest {
            course_id: course_id.to_string(),
            payment_id: payment_id.map(str::to_string),
        };
        self.send_json(Method::POST, api::Student::Enroll.path(), &body).await
    }

    pub async fn get_my_courses(&self, status: Option<EnrollmentStatus>) -> Result<Value, ClientError> {
        let query = Query::new().append_opt("status", status);
        self.get(&query.to_path(api::Student::MyCourses.path())).await
    }

    pub async fn update_progress(&self, course_id: &str, progress_percent: f64) -> Result<Value, ClientError> {
        let body = ProgressRequest { progress_percent };
        self.send_json(Method::POST, &with_id(api::Student::Progress.path(), course_id), &body)
            .await
    }

    pub async fn chatbot(&self, message: &str, context: Option<Value>) -> Result<Value, ClientError> {
        let body = ChatbotRequest {
            message: message.to_string(),
            context,
        };
        self.send_json(Method::POST, api::Student::Chatbot.path(), &body).await
    }

    /// One `interests` pair per interest, in order, then `skill_level`
    pub async fn get_recommendations<I: AsRef<str>>(
        &self,
        interests: &[I],
        skill_level: SkillLevel,
    ) -> Result<Value, ClientError> {
        let query = Query::new()
            .append_all("interests", interests.iter().map(AsRef::<str>::as_ref))
            .append("skill_level", skill_level);
        self.get(&query.to_path(api::Student::Recommendations.path())).await
    }

    pub async fn drop_course(&self, course_id: &str) -> Result<Value, ClientError> {
        self.post(&with_id(api::Student::DropCourse.path(), course_id)).await
    }
}
