//! Client directory and receivable totals.

use std::sync::Arc;

use anyhow::Result;
use shared::Client;

use crate::backend::storage::DataSource;

/// Headline numbers above the client list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientStats {
    pub total_clients: usize,
    /// Clients that still owe money
    pub active_clients: usize,
    pub total_outstanding: u64,
}

#[derive(Clone)]
pub struct ClientService {
    source: Arc<dyn DataSource>,
}

impl ClientService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn list_clients(&self) -> Result<Vec<Client>> {
        self.source.clients()
    }

    pub fn find_client(&self, client_id: &str) -> Result<Option<Client>> {
        Ok(self
            .source
            .clients()?
            .into_iter()
            .find(|client| client.id == client_id))
    }

    /// Match on name or city (ignoring case) or on the raw phone text
    pub fn search(&self, query: &str) -> Result<Vec<Client>> {
        let query = query.trim();
        let needle = query.to_lowercase();
        Ok(self
            .source
            .clients()?
            .into_iter()
            .filter(|client| {
                client.name.to_lowercase().contains(&needle)
                    || client.phone.contains(query)
                    || client.city.to_lowercase().contains(&needle)
            })
            .collect())
    }

    pub fn stats(&self) -> Result<ClientStats> {
        let clients = self.source.clients()?;
        Ok(ClientStats {
            total_clients: clients.len(),
            active_clients: clients.iter().filter(|c| c.outstanding > 0).count(),
            total_outstanding: clients
                .iter()
                .map(|c| c.outstanding)
                .fold(0, u64::saturating_add),
        })
    }
}

/// First letter of each word, uppercased; "U" when there is nothing to use
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "U".to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::MockDataSource;

    fn create_test_service() -> ClientService {
        ClientService::new(Arc::new(MockDataSource::new()))
    }

    #[test]
    fn test_search_by_name_city_and_phone() {
        let service = create_test_service();

        let by_name = service.search("sita").unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Sita Mart");

        let by_city = service.search("PUNE").unwrap();
        assert_eq!(by_city[0].name, "City Wholesale");

        let by_phone = service.search("76543").unwrap();
        assert_eq!(by_phone[0].name, "Modern Retail");
    }

    #[test]
    fn test_empty_search_returns_everyone() {
        let service = create_test_service();
        assert_eq!(service.search("").unwrap().len(), 5);
    }

    #[test]
    fn test_stats() {
        let stats = create_test_service().stats().unwrap();
        assert_eq!(stats.total_clients, 5);
        assert_eq!(stats.active_clients, 3);
        assert_eq!(stats.total_outstanding, 45_500);
    }

    #[test]
    fn test_find_client() {
        let service = create_test_service();
        assert_eq!(service.find_client("4").unwrap().unwrap().city, "Pune");
        assert!(service.find_client("nope").unwrap().is_none());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Raj Kumar Store"), "RKS");
        assert_eq!(initials("  sita   mart "), "SM");
        assert_eq!(initials(""), "U");
    }
}
