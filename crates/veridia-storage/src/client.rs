use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the default credential/region chain.
pub async fn from_env() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    Client::new(&config)
}
