use aws_config::{BehaviorVersion, Region, SdkConfig};

/// Load the AWS SDK configuration for a region using the default credential
/// chain (environment, profile, or the Lambda execution role).
pub async fn load_sdk_config(region: &str) -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.to_string()))
        .load()
        .await
}

/// Build a Bedrock runtime client for a region.
pub async fn build_client_with_region(region: &str) -> aws_sdk_bedrockruntime::Client {
    let config = load_sdk_config(region).await;
    aws_sdk_bedrockruntime::Client::new(&config)
}
