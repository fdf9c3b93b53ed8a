use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use marketing_ingest::handlers::handle_persist;
use marketing_ingest::utils::logger;
use marketing_ingest::utils::validation::Validate;
use marketing_ingest::{DynamoDbStore, MarketingPersister, StageResponse, StoreConfig};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = StoreConfig::from_env()?;
    config.validate()?;

    // Built once per cold start and shared by every invocation.
    let persister = MarketingPersister::new(DynamoDbStore::connect(&config).await);
    let persister = &persister;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        let (payload, _context) = event.into_parts();
        Ok::<StageResponse, Error>(handle_persist(persister, payload).await)
    }))
    .await
}
