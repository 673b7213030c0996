use dioxus::prelude::*;

use ui::{AuthProvider, MessageHost};
use views::{
    AdminPanel, Announcements, AuthPage, Home, Mason, MasonRoom, Members, MyProfile,
    ProfileView, ProjectDetail, Projects, Rules, Shell, VipRoom,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/login")]
    AuthPage {},
    #[route("/projects")]
    Projects {},
    #[route("/project/:project_id")]
    ProjectDetail { project_id: String },
    #[route("/members")]
    Members {},
    #[route("/mason")]
    Mason {},
    #[route("/vip")]
    VipRoom {},
    #[route("/MasonTeam")]
    MasonRoom {},
    #[route("/masonadmin")]
    AdminPanel {},
    #[route("/user/:username")]
    ProfileView { username: String },
    #[route("/profile")]
    MyProfile {},
    #[route("/rules")]
    Rules {},
    #[route("/announcements")]
    Announcements {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use std::time::Duration;
    use tower_http::services::ServeDir;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    // Initialize database pool
    let pool = api::db::get_pool()
        .await
        .expect("Failed to connect to database");

    // Run migrations
    sqlx::migrate!("../api/migrations")
        .run(pool)
        .await
        .expect("Failed to run migrations");

    // Create session store
    let session_store = PostgresStore::new(pool.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to create session table");

    // Session layer configuration
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(
            Duration::from_secs(60 * 60 * 24 * 7).try_into().unwrap(),
        )); // 7 days

    let upload_dir =
        std::env::var("MASONHUB_UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());

    let router = axum::Router::new()
        // Uploaded images (avatars, project images, announcements)
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            MessageHost {
                Router::<Route> {}
            }
        }
    }
}
