use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use marketing_ingest::handlers::handle_validate;
use marketing_ingest::utils::logger;
use marketing_ingest::StageResponse;
use serde_json::Value;

async fn function_handler(event: LambdaEvent<Value>) -> Result<StageResponse, Error> {
    let (payload, _context) = event.into_parts();
    Ok(handle_validate(payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    run(service_fn(function_handler)).await
}
