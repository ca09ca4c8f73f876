use backend::{
    routes::{all_options, get_results, reset_votes, submit_vote, AppState},
    cors::CORS,
    catchers::{bad_request, internal_error, not_found, too_many_requests, unprocessable_entity},
    queries::Queries,
};
use rocket::{routes, catchers};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[rocket::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Starting daily poll server");

    let database_url = std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    Queries::init_tallies(&pool).await?;

    info!("📋 Migrations complete, tallies seeded");

    let rocket = rocket::build()
        .attach(CORS)
        .manage(AppState::new(pool))
        .mount(
            "/",
            routes![submit_vote, get_results, reset_votes, all_options],
        )
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                too_many_requests,
                internal_error
            ],
        );

    let _ = rocket.launch().await?;
    Ok(())
}
