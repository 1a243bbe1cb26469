pub mod controller;
pub mod engine;
pub mod errors;
pub mod http;
pub mod maps;
pub mod models;
pub mod state;
pub mod store;

use std::path::PathBuf;

use controller::RatingsController;
use http::SheetsClient;
use models::Badge;
use state::FetchStatus;
use store::NameStore;

/// Fetches the current ratings and prints the ranked list, optionally
/// filtered by the first CLI argument.
pub async fn run() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = SheetsClient::from_env().expect("RATINGS_ENDPOINT_URL must be a valid URL");

    let profile_path = std::env::var("RATINGS_PROFILE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("ratings_profile.json"));

    let controller = RatingsController::new(client, NameStore::new(profile_path));
    let filter = std::env::args().nth(1).unwrap_or_default();

    controller.fetch_all().await;

    if let FetchStatus::Failed = controller.status().await {
        println!("Could not reach the ratings endpoint");
        return;
    }

    let ranked = controller.ranked(&filter).await;
    if ranked.is_empty() {
        println!("No ratings yet");
        return;
    }

    for entry in &ranked {
        let marker = match entry.badge {
            Some(Badge::Top) => "🥇",
            Some(Badge::Second) => "🥈",
            Some(Badge::Third) => "🥉",
            None => "  ",
        };
        println!(
            "{} {:<40} {:.2}",
            marker,
            entry.record.location,
            entry.record.overall_score()
        );
    }

    if let Some(top) = engine::highest_rated(&ranked) {
        println!(
            "\nGet directions to {}: {}",
            top.location,
            maps::directions_url(&top.location)
        );
    }
}
