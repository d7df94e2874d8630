use contracts::domain::a001_school::aggregate::School;
use gloo_net::http::Request;

use crate::shared::api_utils::data_url;
use crate::shared::config::config;
use crate::shared::error::AppError;

/// Fetch the whole school directory
pub async fn fetch_schools() -> Result<Vec<School>, AppError> {
    let url = data_url(&config().data.schools_url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Status(response.status()));
    }

    response
        .json::<Vec<School>>()
        .await
        .map_err(|e| AppError::Decode {
            what: "school directory",
            message: e.to_string(),
        })
}
