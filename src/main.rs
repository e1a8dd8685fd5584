use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};

use sales_backend::api::{AgentsApi, AuthApi, CustomersApi, HealthApi, OrdersApi, UsersApi};
use sales_backend::config::{init_logging, AppSettings};
use sales_backend::errors::UserError;
use sales_backend::services::{AccessControl, TokenService};
use sales_backend::stores::{
    AgentStore, CredentialStore, CustomerStore, OrderStore, RoleStore,
};
use sales_backend::types::internal::auth::roles;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let settings = AppSettings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!(database_url = %settings.database_url, "connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("database migrations completed");

    // Built-in roles and permissions must exist before any user can be created
    let role_store = Arc::new(RoleStore::new(db.clone()));
    role_store
        .seed_defaults()
        .await
        .expect("Failed to seed roles and permissions");

    let credential_store = Arc::new(CredentialStore::new(db.clone()));
    bootstrap_admin(&credential_store, &settings).await;

    let token_service = Arc::new(TokenService::new(
        settings.jwt_secret.clone(),
        settings.token_expiration_hours,
    ));
    let access_control = Arc::new(AccessControl::new(
        credential_store.clone(),
        token_service.clone(),
    ));

    let auth_api = AuthApi::new(
        credential_store.clone(),
        token_service.clone(),
        access_control.clone(),
    );
    let users_api = UsersApi::new(
        credential_store.clone(),
        role_store.clone(),
        access_control.clone(),
    );
    let customers_api = CustomersApi::new(
        Arc::new(CustomerStore::new(db.clone())),
        access_control.clone(),
    );
    let agents_api = AgentsApi::new(Arc::new(AgentStore::new(db.clone())), access_control.clone());
    let orders_api = OrdersApi::new(Arc::new(OrderStore::new(db.clone())), access_control.clone());

    let api_service = OpenApiService::new(
        (
            HealthApi,
            auth_api,
            users_api,
            customers_api,
            agents_api,
            orders_api,
        ),
        "Sales Backend API",
        "1.0.0",
    )
    .server(format!("http://{}", settings.bind_address));

    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/", api_service).nest("/swagger", ui);

    tracing::info!(bind_address = %settings.bind_address, "starting server");

    Server::new(TcpListener::bind(settings.bind_address.clone()))
        .run(app)
        .await
}

/// Create the bootstrap admin account when ADMIN_EMAIL and ADMIN_PASSWORD
/// are both configured. An already registered email is left untouched.
async fn bootstrap_admin(credential_store: &CredentialStore, settings: &AppSettings) {
    let (Some(email), Some(password)) = (&settings.admin_email, &settings.admin_password) else {
        return;
    };

    match credential_store
        .create_user(email, password, Some(roles::ADMIN))
        .await
    {
        Ok(created) => {
            tracing::info!(user_id = %created.id, "bootstrap admin account created");
        }
        Err(UserError::DuplicateEmail(_)) => {
            tracing::debug!("bootstrap admin account already exists");
        }
        Err(e) => {
            tracing::error!(error = ?e, "failed to create bootstrap admin account");
        }
    }
}
