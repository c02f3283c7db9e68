use std::collections::HashMap;

use async_trait::async_trait;
use eyre::{eyre, Result};
use hotelops_core::models::service::SpaService;
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn add_service(&self, service: SpaService) -> Result<SpaService>;

    /// All services, sorted by name.
    async fn list_services(&self) -> Result<Vec<SpaService>>;

    async fn get_service_by_id(&self, id: Uuid) -> Result<Option<SpaService>>;

    /// Case-insensitive exact name match.
    async fn find_service_by_name(&self, name: &str) -> Result<Option<SpaService>>;
}

#[derive(Debug, Default)]
pub struct InMemoryServiceCatalog {
    services: RwLock<HashMap<Uuid, SpaService>>,
}

impl InMemoryServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceCatalog for InMemoryServiceCatalog {
    async fn add_service(&self, service: SpaService) -> Result<SpaService> {
        let mut services = self.services.write().await;
        if services.contains_key(&service.id) {
            return Err(eyre!("Service {} already exists", service.id));
        }
        tracing::debug!("Adding service: id={}, name={}", service.id, service.name);
        services.insert(service.id, service.clone());

        Ok(service)
    }

    async fn list_services(&self) -> Result<Vec<SpaService>> {
        let mut services: Vec<SpaService> =
            self.services.read().await.values().cloned().collect();
        services.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(services)
    }

    async fn get_service_by_id(&self, id: Uuid) -> Result<Option<SpaService>> {
        Ok(self.services.read().await.get(&id).cloned())
    }

    async fn find_service_by_name(&self, name: &str) -> Result<Option<SpaService>> {
        let name = name.trim();
        Ok(self
            .services
            .read()
            .await
            .values()
            .find(|service| service.name.eq_ignore_ascii_case(name))
            .cloned())
    }
}
