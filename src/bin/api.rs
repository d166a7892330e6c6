pub use tos_gateway::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    tos_gateway::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
