// Raw store records in the legacy wire shape, for seeding test stores.

use serde_json::{Value as Json, json};

pub fn progress_record(timestamp: &str, distance_km: f64, elevation_m: f64, duration: &str) -> Json {
    json!({
        "timestamp": timestamp,
        "distancia": distance_km,
        "altimetria": elevation_m,
        "tempo": duration,
    })
}

pub fn expense_record(description: &str, category: &str, amount: f64, spent_on: &str) -> Json {
    json!({
        "descricao": description,
        "categoria": category,
        "valor": amount,
        "data": spent_on,
    })
}

pub fn location_record(city: &str, latitude: f64, longitude: f64) -> Json {
    json!({
        "cidade": city,
        "latitude": latitude,
        "longitude": longitude,
    })
}
