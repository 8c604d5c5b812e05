//! Payload types exchanged with the upstream services.

use serde::{Deserialize, Serialize};

/// Decoded body of a weather lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub city: String,
    pub temp_celsius: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub condition: String,
}

/// Decoded body of a currency-exchange lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub base: String,
    pub target: String,
    pub rate: f64,
    pub updated: String,
}

/// Registration payload POSTed to the user service on `/auth`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    pub user_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}
