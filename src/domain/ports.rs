use crate::domain::model::{BoardPayload, Report, SectionConfig};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn board_id(&self) -> &str;
    fn api_key(&self) -> &str;
    fn api_token(&self) -> &str;
    fn sections(&self) -> &[SectionConfig];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<BoardPayload>;
    async fn transform(&self, payload: BoardPayload) -> Result<Report>;
    async fn load(&self, report: Report) -> Result<String>;
}
