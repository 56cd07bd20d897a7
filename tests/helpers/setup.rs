use company_registry_api::Application;
use company_registry_infra::{Config, RegistryContext};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;

pub struct TestApp {
    pub config: Config,
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn token(&self) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &json!({ "sub": "integration-test" }),
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .expect("Failed to sign token")
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

// Launch the application as a background task
pub async fn spawn_app() -> TestApp {
    let mut ctx = RegistryContext::create_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        config,
        address,
        client: reqwest::Client::new(),
    }
}
