//! The fbfs computation call.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use fbfs_core::forward::{self, ForwardError, Forwarder};
use fbfs_core::submission::Submission;

use super::{BackendClient, CallStyle};
use crate::error::Result;

/// JSON body for the post-json call style.
#[derive(Debug, Serialize)]
struct FbfsRequest<'a> {
    fish_bigger: &'a str,
    fish_smaller: &'a str,
}

/// Response envelope the backend answers with.
#[derive(Debug, Deserialize)]
struct FbfsResponse {
    result: String,
}

impl BackendClient {
    /// Ask the backend to generate the logic chain for one pair of inputs.
    pub async fn fbfs(&self, fish_bigger: &str, fish_smaller: &str) -> Result<String> {
        let request = match self.call_style() {
            CallStyle::GetQuery => self.client.get(self.url("/fbfs")).query(&[
                ("fish_bigger", fish_bigger),
                ("fish_smaller", fish_smaller),
            ]),
            CallStyle::PostJson => self.client.post(self.url("/fbfs")).json(&FbfsRequest {
                fish_bigger,
                fish_smaller,
            }),
        };

        let response = request.send().await?;
        let body: FbfsResponse = self.handle_response(response).await?;
        Ok(body.result)
    }
}

#[async_trait]
impl Forwarder for BackendClient {
    async fn forward(&self, submission: &Submission) -> forward::Result<String> {
        self.fbfs(&submission.fish_bigger, &submission.fish_smaller)
            .await
            .map_err(ForwardError::from)
    }
}
