//! Serve command - runs the Folio web server.

use std::time::Duration;

use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tokio::signal::unix::{SignalKind, signal};
use tower_cookies::{Cookie, CookieManagerLayer, Cookies};

use folio::{
    DocumentKind, DocumentStore, UserStore,
    document::{name::is_routable, render_markdown},
};

use crate::cli::ServeArgs;
use crate::session::{SessionStore, SessionToken};
use crate::stores::open_stores;
use crate::templates::{self, Page};

const SESSION_COOKIE: &str = "folio_session";
const SIGN_IN_REQUIRED: &str = "You must be signed in to do that.";
const SESSION_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    documents: DocumentStore,
    users: UserStore,
    sessions: SessionStore,
}

impl AppState {
    pub fn new(documents: DocumentStore, users: UserStore) -> Self {
        Self {
            documents,
            users,
            sessions: SessionStore::new(),
        }
    }
}

/// Sign-in form data
#[derive(Deserialize)]
struct SignInForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// Sign-up form data
#[derive(Deserialize)]
struct SignUpForm {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirmation: String,
}

/// New document and copy form data
#[derive(Deserialize)]
struct FileNameForm {
    #[serde(default)]
    file_name: String,
}

/// Edit form data
#[derive(Deserialize)]
struct ContentForm {
    #[serde(default)]
    content: String,
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health_endpoint))
        .route(
            "/users/signin",
            get(handle_sign_in_page).post(handle_sign_in_submit),
        )
        .route("/users/signout", post(handle_sign_out))
        .route(
            "/users/signup",
            get(handle_sign_up_page).post(handle_sign_up_submit),
        )
        .route("/new", get(handle_new_page))
        .route("/create", post(handle_create))
        .route("/{file}", get(handle_view).post(handle_update))
        .route("/{file}/edit", get(handle_edit_page))
        .route("/{file}/delete", post(handle_delete))
        .route("/{file}/copy", get(handle_copy_page).post(handle_copy_submit))
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

/// Run the Folio server
pub async fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let stores = open_stores(&args.stores).await?;
    let document_count = stores.documents.count().await?;
    let user_count = stores.users.count().await?;
    tracing::info!("Loaded {document_count} documents and {user_count} users");

    let state = AppState::new(stores.documents, stores.users);
    spawn_session_pruning(state.sessions.clone());
    let app = router(state);

    // Bind server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    println!("Folio started on http://localhost:{}", local_addr.port());
    println!();
    println!("  Documents:   {}", args.stores.data_dir.display());
    println!("  Credentials: {}", args.stores.users_file.display());
    println!();
    println!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server shut down");
    Ok(())
}

/// Periodically drop sessions nobody has used within the idle timeout
fn spawn_session_pruning(sessions: SessionStore) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SESSION_PRUNE_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = sessions.prune_idle().await;
            if removed > 0 {
                tracing::debug!(
                    "Dropped {removed} idle sessions (idle timeout {:?})",
                    sessions.idle_timeout()
                );
            }
        }
    });
}

async fn shutdown_signal() {
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to set up SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => tracing::info!("Received SIGINT, initiating graceful shutdown..."),
        _ = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}

// ============================================================================
// Session helpers
// ============================================================================

fn set_session_cookie(cookies: &Cookies, token: SessionToken) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);
}

/// Token of the caller's live session, if they have one
async fn existing_session(state: &AppState, cookies: &Cookies) -> Option<SessionToken> {
    let token = cookies.get(SESSION_COOKIE)?.value().to_string();
    state.sessions.touch(&token).await.then_some(token)
}

/// Token of the caller's session, starting a new one if needed
async fn session_token(state: &AppState, cookies: &Cookies) -> SessionToken {
    if let Some(token) = existing_session(state, cookies).await {
        return token;
    }
    let token = state.sessions.create_session().await;
    set_session_cookie(cookies, token.clone());
    token
}

async fn current_user(state: &AppState, cookies: &Cookies) -> Option<String> {
    let token = existing_session(state, cookies).await?;
    state.sessions.username(&token).await
}

/// Page state for a normal render; consumes the pending flash message
async fn page(state: &AppState, cookies: &Cookies) -> Page {
    let Some(token) = existing_session(state, cookies).await else {
        return Page::default();
    };
    let session = state.sessions.take_page_state(&token).await;
    Page {
        flash: session.flash,
        username: session.username,
    }
}

/// Page state for re-rendering a rejected form with `message`
///
/// Any pending flash is consumed and replaced by `message`.
async fn page_with_message(state: &AppState, cookies: &Cookies, message: String) -> Page {
    Page {
        flash: Some(message),
        ..page(state, cookies).await
    }
}

async fn flash_and_redirect(
    state: &AppState,
    cookies: &Cookies,
    message: impl Into<String>,
    to: &str,
) -> Response {
    let token = session_token(state, cookies).await;
    state.sessions.set_flash(&token, message).await;
    Redirect::to(to).into_response()
}

/// The signed-in username, or a redirect home with a sign-in-required message
async fn require_user(state: &AppState, cookies: &Cookies) -> Result<String, Response> {
    match current_user(state, cookies).await {
        Some(username) => Ok(username),
        None => Err(flash_and_redirect(state, cookies, SIGN_IN_REQUIRED, "/").await),
    }
}

fn require_routable(file: &str) -> Result<(), Response> {
    if is_routable(file) {
        Ok(())
    } else {
        Err(StatusCode::NOT_FOUND.into_response())
    }
}

fn internal_error(err: folio::Error) -> Response {
    tracing::error!("Request failed in {}: {err}", err.module());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Internal error: {err}"),
    )
        .into_response()
}

fn unprocessable(html: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
}

// ============================================================================
// Authentication Handlers
// ============================================================================

/// Handler for GET /users/signin - Show sign-in page
async fn handle_sign_in_page(State(state): State<AppState>, cookies: Cookies) -> Html<String> {
    Html(templates::sign_in_page(&page(&state, &cookies).await, ""))
}

/// Handler for POST /users/signin - Process sign-in
async fn handle_sign_in_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<SignInForm>,
) -> Response {
    match state.users.authenticate(&form.username, &form.password).await {
        Ok(()) => {
            if let Some(old) = existing_session(&state, &cookies).await {
                state.sessions.destroy_session(&old).await;
            }
            let token = state.sessions.create_session().await;
            state.sessions.sign_in(&token, &form.username).await;
            state.sessions.set_flash(&token, "Welcome!").await;
            set_session_cookie(&cookies, token);
            tracing::info!("{} signed in", form.username);
            Redirect::to("/").into_response()
        }
        Err(e) if e.is_authentication_error() => {
            let page = page_with_message(&state, &cookies, e.to_string()).await;
            unprocessable(templates::sign_in_page(&page, &form.username))
        }
        Err(e) => internal_error(e),
    }
}

/// Handler for POST /users/signout - Forget the signed-in user
async fn handle_sign_out(State(state): State<AppState>, cookies: Cookies) -> Response {
    let token = session_token(&state, &cookies).await;
    state.sessions.sign_out(&token).await;
    state.sessions.set_flash(&token, "You have been signed out").await;
    Redirect::to("/").into_response()
}

/// Handler for GET /users/signup - Show sign-up page
async fn handle_sign_up_page(State(state): State<AppState>, cookies: Cookies) -> Html<String> {
    Html(templates::sign_up_page(&page(&state, &cookies).await, ""))
}

/// Handler for POST /users/signup - Process sign-up
async fn handle_sign_up_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<SignUpForm>,
) -> Response {
    match state
        .users
        .sign_up(&form.username, &form.password, &form.confirmation)
        .await
    {
        Ok(()) => {
            let message = format!("{} added as user", form.username);
            flash_and_redirect(&state, &cookies, message, "/").await
        }
        Err(e) if e.is_validation_error() => {
            let page = page_with_message(&state, &cookies, e.to_string()).await;
            unprocessable(templates::sign_up_page(&page, &form.username))
        }
        Err(e) => internal_error(e),
    }
}

// ============================================================================
// Document Handlers
// ============================================================================

/// Handler for GET / - List documents
async fn handle_index(State(state): State<AppState>, cookies: Cookies) -> Response {
    match state.documents.list().await {
        Ok(files) => {
            Html(templates::index_page(&page(&state, &cookies).await, &files)).into_response()
        }
        Err(e) => internal_error(e),
    }
}

/// Handler for GET /{file} - Render markdown or serve plain text
async fn handle_view(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(file): Path<String>,
) -> Response {
    if let Err(response) = require_routable(&file) {
        return response;
    }

    match state.documents.read_bytes(&file).await {
        Ok(content) => match DocumentKind::from_name(&file) {
            Some(DocumentKind::Markdown) => {
                let page = page(&state, &cookies).await;
                let html = render_markdown(&String::from_utf8_lossy(&content));
                Html(templates::document_page(&page, &file, &html)).into_response()
            }
            _ => ([(header::CONTENT_TYPE, "text/plain")], content).into_response(),
        },
        Err(e) if e.is_not_found() => flash_and_redirect(&state, &cookies, e.to_string(), "/").await,
        Err(e) => internal_error(e),
    }
}

/// Handler for GET /{file}/edit - Show the edit form
async fn handle_edit_page(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(file): Path<String>,
) -> Response {
    if let Err(response) = require_routable(&file) {
        return response;
    }
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }

    match state.documents.read(&file).await {
        Ok(contents) => {
            let page = page(&state, &cookies).await;
            Html(templates::edit_page(&page, &file, &contents)).into_response()
        }
        Err(e) if e.is_not_found() => flash_and_redirect(&state, &cookies, e.to_string(), "/").await,
        Err(e) => internal_error(e),
    }
}

/// Handler for POST /{file} - Save edited content
async fn handle_update(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(file): Path<String>,
    Form(form): Form<ContentForm>,
) -> Response {
    if let Err(response) = require_routable(&file) {
        return response;
    }
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }

    match state.documents.write(&file, &form.content).await {
        Ok(()) => {
            let message = format!("{file} has been updated.");
            flash_and_redirect(&state, &cookies, message, "/").await
        }
        Err(e) => internal_error(e),
    }
}

/// Handler for GET /new - Show the new document form
async fn handle_new_page(State(state): State<AppState>, cookies: Cookies) -> Response {
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }
    Html(templates::new_page(&page(&state, &cookies).await, "")).into_response()
}

/// Handler for POST /create - Create an empty document
async fn handle_create(
    State(state): State<AppState>,
    cookies: Cookies,
    Form(form): Form<FileNameForm>,
) -> Response {
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }

    match state.documents.create(&form.file_name).await {
        Ok(name) => {
            let message = format!("{name} has been created.");
            flash_and_redirect(&state, &cookies, message, "/").await
        }
        Err(e) if e.is_validation_error() => {
            let page = page_with_message(&state, &cookies, e.to_string()).await;
            unprocessable(templates::new_page(&page, &form.file_name))
        }
        Err(e) => internal_error(e),
    }
}

/// Handler for POST /{file}/delete - Delete a document
async fn handle_delete(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(file): Path<String>,
) -> Response {
    if let Err(response) = require_routable(&file) {
        return response;
    }
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }

    match state.documents.delete(&file).await {
        Ok(()) => {
            let message = format!("{file} has been deleted.");
            flash_and_redirect(&state, &cookies, message, "/").await
        }
        Err(e) if e.is_not_found() => flash_and_redirect(&state, &cookies, e.to_string(), "/").await,
        Err(e) => internal_error(e),
    }
}

/// Handler for GET /{file}/copy - Show the copy form
async fn handle_copy_page(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(file): Path<String>,
) -> Response {
    if let Err(response) = require_routable(&file) {
        return response;
    }
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }

    match state.documents.exists(&file).await {
        Ok(true) => {
            Html(templates::copy_page(&page(&state, &cookies).await, &file, "")).into_response()
        }
        Ok(false) => {
            flash_and_redirect(&state, &cookies, format!("{file} does not exist"), "/").await
        }
        Err(e) => internal_error(e),
    }
}

/// Handler for POST /{file}/copy - Copy a document's content to a new name
async fn handle_copy_submit(
    State(state): State<AppState>,
    cookies: Cookies,
    Path(file): Path<String>,
    Form(form): Form<FileNameForm>,
) -> Response {
    if let Err(response) = require_routable(&file) {
        return response;
    }
    if let Err(response) = require_user(&state, &cookies).await {
        return response;
    }

    match state.documents.copy(&file, &form.file_name).await {
        Ok(()) => {
            let message = format!("Contents of {file} copied to {}.", form.file_name);
            flash_and_redirect(&state, &cookies, message, "/").await
        }
        Err(e) if e.is_validation_error() => {
            let page = page_with_message(&state, &cookies, e.to_string()).await;
            unprocessable(templates::copy_page(&page, &file, &form.file_name))
        }
        Err(e) if e.is_not_found() => flash_and_redirect(&state, &cookies, e.to_string(), "/").await,
        Err(e) => internal_error(e),
    }
}

// ============================================================================
// Health Handler
// ============================================================================

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    documents: usize,
}

/// Handler for GET /health - Health check endpoint
async fn handle_health_endpoint(State(state): State<AppState>) -> Response {
    match state.documents.count().await {
        Ok(documents) => Json(HealthResponse {
            status: "healthy",
            documents,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Health check could not read documents: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    documents: 0,
                }),
            )
                .into_response()
        }
    }
}
