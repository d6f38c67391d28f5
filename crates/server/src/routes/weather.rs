use axum::{extract::Path, Json};
use chrono::Utc;
use rand::{seq::SliceRandom, Rng};
use serde::Serialize;

const CONDITIONS: [&str; 4] = ["Sunny", "Partly Cloudy", "Cloudy", "Rainy"];
const FORECAST: [(&str, &str); 4] = [
    ("Mon", "Sunny"),
    ("Tue", "Partly Cloudy"),
    ("Wed", "Rainy"),
    ("Thu", "Partly Cloudy"),
];

#[derive(Debug, Serialize)]
pub struct ForecastDay {
    pub day: &'static str,
    pub temp: u8,
    pub condition: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Weather {
    pub city: String,
    pub date: String,
    pub temperature: u8,
    pub condition: &'static str,
    pub forecast: Vec<ForecastDay>,
}

/// Demo data only: temperatures are uniform in 25..=34 °C.
fn mock_weather(city: String) -> Weather {
    let mut rng = rand::thread_rng();
    let forecast = FORECAST
        .iter()
        .map(|&(day, condition)| ForecastDay { day, temp: rng.gen_range(25..35), condition })
        .collect();
    Weather {
        city,
        date: Utc::now().format("%-m/%-d/%Y").to_string(),
        temperature: rng.gen_range(25..35),
        condition: CONDITIONS.choose(&mut rng).copied().unwrap_or("Sunny"),
        forecast,
    }
}

#[utoipa::path(
    get, path = "/api/weather/{city}", tag = "weather",
    params(("city" = String, Path, description = "City name, echoed back")),
    responses((status = 200, description = "Mock forecast"))
)]
pub async fn forecast(Path(city): Path<String>) -> Json<Weather> {
    Json(mock_weather(city))
}
