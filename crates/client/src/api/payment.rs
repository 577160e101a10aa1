use http::Method;
use serde_json::Value;
use shared::api::{self, payloads::DemoPaymentRequest, with_id};

use super::SessionClient;
use crate::{error::ClientError, storage::Storage, transport::Transport};

impl<S: Storage, T: Transport> SessionClient<S, T> {
    /// Records a simulated payment for `course_id`. The returned payment id is
    /// what [SessionClient::enroll_in_course] expects for paid courses
    pub async fn process_demo_payment(&self, course_id: &str) -> Result<Value, ClientError> {
        let body = DemoPaymentRequest { course_id: course_id.to_string() };
        self.send_json(Method::POST, api::Payment::Demo.path(), &body).await
    }

    pub async fn get_my_payments(&self) -> Result<Value, ClientError> {
        self.get(api::Payment::MyPayments.path()).await
    }

    /// Whether the signed in student has paid for `course_id` (`has_paid` in the reply)
    pub async fn verify_payment(&self, course_id: &str) -> Result<Value, ClientError> {
        self.get(&with_id(api::Payment::Verify.path(), course_id)).await
    }

    pub async fn get_payment_details(&self, payment_id: &str) -> Result<Value, ClientError> {
        self.get(&with_id(api::Payment::PaymentId.path(), payment_id)).await
    }
}
