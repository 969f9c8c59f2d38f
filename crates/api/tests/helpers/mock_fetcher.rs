#![allow(dead_code)]

use async_trait::async_trait;
use soawatch_application::ports::SoaFetcher;
use soawatch_domain::{DomainError, DomainName, SoaSnapshot};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Replays scripted fetch results in order, repeating the last one once the
/// script is exhausted.
pub struct MockSoaFetcher {
    script: Mutex<VecDeque<Result<SoaSnapshot, DomainError>>>,
    last: Mutex<Option<Result<SoaSnapshot, DomainError>>>,
    queried: Mutex<Vec<String>>,
    call_count: AtomicU64,
}

impl MockSoaFetcher {
    pub fn new(script: Vec<Result<SoaSnapshot, DomainError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            queried: Mutex::new(Vec::new()),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn queried(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

#[async_trait]
impl SoaFetcher for MockSoaFetcher {
    async fn fetch_soa(&self, domain: &DomainName) -> Result<SoaSnapshot, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.queried.lock().unwrap().push(domain.to_string());

        let next = self.script.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(result) = next {
            *last = Some(result);
        }
        last.clone()
            .unwrap_or_else(|| Err(DomainError::no_record(domain.as_str())))
    }
}

pub fn soa(serial: u32) -> SoaSnapshot {
    SoaSnapshot::new(format!(
        "example.com. 3600 IN SOA ns1.example.com. admin.example.com. {} 7200 3600 1209600 3600",
        serial
    ))
}
