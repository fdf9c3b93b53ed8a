use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use marketing_ingest::handlers::handle_dedupe;
use marketing_ingest::utils::logger;
use marketing_ingest::Record;
use serde_json::Value;

// A record without Email surfaces as a function error.
async fn function_handler(event: LambdaEvent<Value>) -> Result<Vec<Record>, Error> {
    let (payload, _context) = event.into_parts();
    Ok(handle_dedupe(payload)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
