// src/routes.rs

use axum::{
    Router, http::Method, middleware,
    routing::{delete, get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, companies, dashboard, profile, resume, skills, tests},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (auth, skills, tests, resume, companies, admin).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (pool, config, stats provider).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ]);

    let auth_routes = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login));

    let skill_routes = Router::new()
        .route("/", get(skills::list_skills))
        // Per-user skill tracking requires auth
        .merge(
            Router::new()
                .route("/mine", get(skills::list_my_skills))
                .route("/{id}/progress", post(skills::add_skill_progress))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let goal_routes = Router::new()
        .route("/", get(skills::list_goals))
        // POST takes a skill id, DELETE takes a goal id.
        .route("/{id}", post(skills::add_goal).delete(skills::delete_goal))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let test_routes = Router::new()
        .route("/", get(tests::list_tests))
        .merge(
            Router::new()
                .route("/{id}/start", get(tests::start_attempt))
                .route("/{id}/submit", post(tests::submit_attempt))
                .layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        );

    let resume_routes = Router::new()
        .route("/", post(resume::upload_resume).get(resume::get_resume_status))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let company_routes = Router::new()
        .route("/", get(companies::list_companies))
        .route("/{id}", get(companies::get_company));

    let profile_routes = Router::new()
        .route("/me", get(profile::get_me))
        .route("/", put(profile::update_profile))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let dashboard_routes = Router::new()
        .route("/", get(dashboard::get_dashboard))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/skills", post(admin::create_skill))
        .route("/skills/{id}", delete(admin::delete_skill))
        .route("/tests", post(admin::create_test))
        .route("/tests/{id}", delete(admin::delete_test))
        .route("/questions", post(admin::create_question))
        .route("/questions/{id}", delete(admin::delete_question))
        .route("/companies", post(admin::create_company))
        .route("/companies/{id}", delete(admin::delete_company))
        // Double middleware protection: Auth first, then Admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api/auth", auth_routes)
        .nest("/api/skills", skill_routes)
        .nest("/api/goals", goal_routes)
        .nest("/api/tests", test_routes)
        .nest("/api/resume", resume_routes)
        .nest("/api/companies", company_routes)
        .nest("/api/profile", profile_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/admin", admin_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
