//! Reply text for successful lookups. Temperatures to one decimal place,
//! humidity as an integer percentage, rate to four decimal places.

use wbot_upstream::{Exchange, Weather};

pub fn weather_reply(weather: &Weather) -> String {
    format!(
        "Weather in {}:\n• Temperature: {:.1}°C\n• Feels like: {:.1}°C\n• Humidity: {}%\n• Condition: {}",
        weather.city,
        weather.temp_celsius,
        weather.feels_like,
        weather.humidity,
        weather.condition,
    )
}

pub fn exchange_reply(exchange: &Exchange) -> String {
    format!(
        "Exchange rate:\n• {} → {}\n• Rate: {:.4}\n• Updated: {}",
        exchange.base, exchange.target, exchange.rate, exchange.updated,
    )
}
