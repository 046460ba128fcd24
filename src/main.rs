use waypoint::api::{AddressApi, Client};
use waypoint::config::Config;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let client = Client::new(Config::from_env());

    let search = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "museum".to_string());

    let options = client.search_addresses(&search, 10).await.unwrap();

    for option in &options {
        tracing::info!(id = option.id, score = option.score, "{}", option.value);
    }

    let (origin, destination) = match (options.first(), options.get(1)) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => {
            tracing::warn!("need at least two matches to build a route");
            return;
        }
    };

    match client.find_route(origin.id, destination.id).await {
        Ok(route) if route.is_degenerate() => {
            tracing::warn!("no route between the selected points")
        }
        Ok(route) => tracing::info!(points = route.points.len(), "route found"),
        Err(err) if err.is_application_error() => {
            tracing::warn!(message = %err.message, "backend rejected the request")
        }
        Err(err) => panic!("request failed: {:?}", err),
    }
}
