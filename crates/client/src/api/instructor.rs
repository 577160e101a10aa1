use http::Method;
use serde_json::Value;
use shared::api::{
    self,
    payloads::{CourseDraft, CourseUpdate, MaterialDraft},
    with_id,
};

use super::SessionClient;
use crate::{error::ClientError, storage::Storage, transport::Transport};

impl<S: Storage, T: Transport> SessionClient<S, T> {
    pub async fn get_instructor_courses(&self) -> Result<Value, ClientError> {
        self.get(api::Instructor::Courses.path()).await
    }

    /// New courses start unpublished and wait for admin approval
    pub async fn create_course(&self, course: &CourseDraft) -> Result<Value, ClientError> {
        self.send_json(Method::POST, api::Instructor::Courses.path(), course).await
    }

    pub async fn update_course(&self, course_id: &str, updates: &CourseUpdate) -> Result<Value, ClientError> {
        self.send_json(Method::PUT, &with_id(api::Instructor::CourseId.path(), course_id), updates)
            .await
    }

    pub async fn publish_course(&self, course_id: &str) -> Result<Value, ClientError> {
        self.post(&with_id(api::Instructor::Publish.path(), course_id)).await
    }

    pub async fn add_course_material(
        &self,
        course_id: &str,
        material: &MaterialDraft,
    ) -> Result<Value, ClientError> {
        self.send_json(Method::POST, &with_id(api::Instructor::Materials.path(), course_id), material)
            .await
    }

    pub async fn get_course_students(&self, course_id: &str) -> Result<Value, ClientError> {
        self.get(&with_id(api::Instructor::Students.path(), course_id)).await
    }

    pub async fn get_instructor_stats(&self) -> Result<Value, ClientError> {
        self.get(api::Instructor::Statistics.path()).await
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use tokio_test::block_on;

    use super::*;
    use crate::testing::client;

    #[test]
    fn test_course_lifecycle_requests() {
        let (client, _, transport) = client();
        for _ in 0..4 {
            transport.respond(200, r#"{"success":true}"#);
        }

        let draft = CourseDraft {
            title: "Rust in Practice".into(),
            description: "Ownership and traits".into(),
            price: Some(499.0),
            tags: vec!["rust".into()],
            ..Default::default()
        };
        block_on(client.create_course(&draft)).unwrap();
        let update = CourseUpdate { price: Some(0.0), ..Default::default() };
        block_on(client.update_course("c1", &update)).unwrap();
        block_on(client.publish_course("c1")).unwrap();
        block_on(client.add_course_material("c1", &MaterialDraft::link("Slides", "https://example.com/s"))).unwrap();

        let requests = transport.requests();
        let calls: Vec<_> = requests.iter().map(|r| (r.method.as_str(), r.endpoint())).collect();
        assert_eq!(
            calls,
            [
                ("POST", "/instructor/courses"),
                ("PUT", "/instructor/courses/c1"),
                ("POST", "/instructor/courses/c1/publish"),
                ("POST", "/instructor/courses/c1/materials"),
            ]
        );
        assert_eq!(
            requests[0].json_body().unwrap(),
            json!({ "title": "Rust in Practice", "description": "Ownership and traits", "price": 499.0, "tags": ["rust"] })
        );
        assert_eq!(requests[1].json_body().unwrap(), json!({ "price": 0.0 }));
        assert_eq!(requests[2].body, None);
        assert_eq!(requests[3].json_body().unwrap()["type"], "link");
    }

    #[test]
    fn test_instructor_reads() {
        let (client, _, transport) = client();
        transport.respond(200, "{}").respond(200, "{}").respond(200, "{}");

        block_on(client.get_instructor_courses()).unwrap();
        block_on(client.get_course_students("c1")).unwrap();
        block_on(client.get_instructor_stats()).unwrap();

        let endpoints: Vec<_> = transport.requests().iter().map(|r| r.endpoint().to_string()).collect();
        assert_eq!(
            endpoints,
            ["/instructor/courses", "/instructor/courses/c1/students", "/instructor/statistics"]
        );
        assert!(transport.requests().iter().all(|r| r.method == Method::GET));
    }

    #[test]
    fn test_create_course_rejection_uses_error_field() {
        let (client, _, transport) = client();
        transport.respond(400, r#"{"success":false,"error":"Title is required"}"#);
        let err = block_on(client.create_course(&CourseDraft::default())).unwrap_err();
        assert_eq!(err.message(), "Title is required");
    }
}
