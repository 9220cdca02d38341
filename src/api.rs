use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Anything in the exercise API that is just `{ "name": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Named {
    pub name: String,
}

impl Named {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Exercise {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<Named>,
    #[serde(default)]
    pub difficulty: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub equipment: Vec<Named>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub muscles: Vec<Named>,
}

/// One page of `/exerciseinfo/` results
#[derive(Debug, Clone, Deserialize)]
pub struct ExercisePage {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub results: Vec<Exercise>,
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to parse exercise data: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Clone)]
pub struct WorkoutClient {
    base_url: String,
    limit: u32,
    language: u32,
    client: Client,
}

impl WorkoutClient {
    pub fn new(base_url: String, limit: u32, language: u32) -> Self {
        Self {
            base_url,
            limit,
            language,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}?limit=..&language=..` and decode the `results` array
    pub async fn fetch_exercises(&self) -> Result<Vec<Exercise>, FetchError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("limit", self.limit), ("language", self.language)])
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let page: ExercisePage = response.json().await.map_err(FetchError::Decode)?;

        Ok(page.results)
    }

    /// Same as `fetch_exercises`, but gives up once `timeout` has elapsed
    pub async fn fetch_with_timeout(&self, timeout: Duration) -> Result<Vec<Exercise>, FetchError> {
        match tokio::time::timeout(timeout, self.fetch_exercises()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        }
    }
}

fn fallback(
    id: u64,
    name: &str,
    category: &str,
    difficulty: u8,
    muscles: &[&str],
) -> Exercise {
    Exercise {
        id,
        name: Some(name.to_string()),
        category: Some(Named::new(category)),
        difficulty: Some(difficulty),
        equipment: vec![Named::new("Body weight")],
        muscles: muscles.iter().map(|m| Named::new(m)).collect(),
    }
}

/// Exercises shown when the live source can't be reached
pub fn fallback_workouts() -> Vec<Exercise> {
    vec![
        fallback(1, "Push-ups", "Strength", 2, &["Chest", "Triceps"]),
        fallback(2, "Squats", "Strength", 2, &["Quadriceps", "Glutes"]),
        fallback(3, "Plank", "Core", 1, &["Core", "Shoulders"]),
        fallback(4, "Jumping Jacks", "Cardio", 1, &["Full body"]),
        fallback(5, "Burpees", "Cardio", 3, &["Full body"]),
    ]
}
