//! LocalStack test context.

use aws_sdk_s3::Client as S3Client;

/// LocalStack test context providing an S3 client for seeding buckets.
pub struct LocalStackTestContext {
    pub s3: S3Client,
    pub endpoint: String,
    pub region: String,
}

impl LocalStackTestContext {
    /// Uses `LOCALSTACK_ENDPOINT` if set, otherwise `http://localhost:4566`.
    pub async fn new() -> Self {
        let endpoint = std::env::var("LOCALSTACK_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4566".to_string());
        let region = "us-east-1".to_string();

        let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_sdk_s3::config::Region::new(region.clone()))
            .endpoint_url(&endpoint)
            .load()
            .await;

        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(true)
            .build();

        Self {
            s3: S3Client::from_conf(s3_config),
            endpoint,
            region,
        }
    }

    pub async fn is_available(&self) -> bool {
        self.s3.list_buckets().send().await.is_ok()
    }

    /// Create a bucket if it does not exist yet and empty it.
    pub async fn fresh_bucket(&self, name: &str) -> Result<(), aws_sdk_s3::Error> {
        let buckets = self.s3.list_buckets().send().await?;
        let exists = buckets
            .buckets()
            .iter()
            .any(|b| b.name().unwrap_or_default() == name);

        if !exists {
            self.s3.create_bucket().bucket(name).send().await?;
            return Ok(());
        }

        let listed = self.s3.list_objects_v2().bucket(name).send().await?;
        for object in listed.contents() {
            if let Some(key) = object.key() {
                self.s3.delete_object().bucket(name).key(key).send().await?;
            }
        }
        Ok(())
    }

    /// Upload an object whose body is `size` zero bytes.
    pub async fn put(&self, bucket: &str, key: &str, size: usize) -> Result<(), aws_sdk_s3::Error> {
        self.s3
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(vec![0u8; size].into())
            .send()
            .await?;
        Ok(())
    }

    /// Make every object in the bucket publicly listable.
    pub async fn make_public(&self, bucket: &str) -> Result<(), aws_sdk_s3::Error> {
        let policy = format!(
            r#"{{"Version":"2012-10-17","Statement":[{{"Effect":"Allow","Principal":"*","Action":["s3:ListBucket"],"Resource":["arn:aws:s3:::{bucket}"]}}]}}"#
        );
        self.s3
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await?;
        Ok(())
    }
}
