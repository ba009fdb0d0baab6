//! In-process transports for exercising table operations without a network.

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use tabula_core::{ApiError, Error, ListOptions, Method, Result, Transport, TransportError};

/// A request seen by a test transport.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: Method,
    pub path: String,
    pub offset: Option<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Answers requests from a queue of canned responses.
///
/// Once `cap` requests have been answered, every further request fails with a
/// transport error, standing in for a caller-imposed limit.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Value>>,
    repeat: Option<Value>,
    cap: Option<usize>,
    seen: Mutex<Vec<SeenRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    /// Answer every request with the same response, up to `cap` times.
    pub fn repeating(response: Value, cap: usize) -> Self {
        Self {
            repeat: Some(response),
            cap: Some(cap),
            ..Self::default()
        }
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    fn answer(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let mut seen = self.seen.lock().unwrap();
        seen.push(SeenRequest {
            method,
            path: path.to_string(),
            offset: options.and_then(|o| o.offset().map(str::to_string)),
            query: options.map(|o| o.to_query()).unwrap_or_default(),
            body: body.map(|b| serde_json::from_slice(&b).unwrap()),
        });

        if let Some(cap) = self.cap
            && seen.len() > cap
        {
            return Err(TransportError::Other {
                message: format!("request cap of {cap} reached"),
            }
            .into());
        }

        let response = match self.repeat {
            Some(ref value) => value.clone(),
            None => self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted response left"),
        };

        if let Some(status) = response.get("__status").and_then(Value::as_u64) {
            return Err(ApiError::new(status as u16, None, None).into());
        }
        if let Some(raw) = response.get("__raw").and_then(Value::as_str) {
            return Ok(raw.as_bytes().to_vec());
        }
        Ok(serde_json::to_vec(&response).unwrap())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<u8>> {
        self.answer(method, path, options, None)
    }

    async fn request_with_body(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Vec<u8>,
    ) -> Result<Vec<u8>> {
        self.answer(method, path, options, Some(body))
    }
}

pub const CREATED_TIME: &str = "2024-05-01T10:00:00.000Z";

/// A small in-memory table server.
#[derive(Default)]
pub struct MemoryTransport {
    tables: Mutex<BTreeMap<String, Vec<Value>>>,
    next_id: Mutex<u64>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn not_found() -> Error {
        ApiError::new(404, Some("NOT_FOUND".to_string()), None).into()
    }

    fn handle(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let (table, id) = match path.split_once('/') {
            Some((table, id)) => (table.to_string(), Some(id.to_string())),
            None => (path.to_string(), None),
        };
        let body: Option<Value> = body.map(|b| serde_json::from_slice(&b)).transpose()?;

        let mut tables = self.tables.lock().unwrap();
        let rows = tables.entry(table).or_default();

        let response = match (method, id) {
            (Method::Post, None) => {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                let record = json!({
                    "id": format!("rec{:014}", *next),
                    "createdTime": CREATED_TIME,
                    "fields": body.map(|b| b["fields"].clone()).unwrap_or(json!({})),
                });
                rows.push(record.clone());
                record
            }
            (Method::Get, Some(id)) => {
                let index = position(rows, &id).ok_or_else(Self::not_found)?;
                rows[index].clone()
            }
            (Method::Patch, Some(id)) => {
                let index = position(rows, &id).ok_or_else(Self::not_found)?;
                let update = body.map(|b| b["fields"].clone()).unwrap_or(json!({}));
                if let (Some(stored), Some(update)) =
                    (rows[index]["fields"].as_object_mut(), update.as_object())
                {
                    for (k, v) in update {
                        stored.insert(k.clone(), v.clone());
                    }
                }
                rows[index].clone()
            }
            (Method::Delete, Some(id)) => {
                let index = position(rows, &id).ok_or_else(Self::not_found)?;
                rows.remove(index);
                json!({"deleted": true, "id": id})
            }
            (Method::Get, None) => {
                let options = options.cloned().unwrap_or_default();
                let start: usize = options.offset().map_or(0, |o| o.parse().unwrap());
                let size = options.page_size.unwrap_or(100) as usize;
                let end = (start + size).min(rows.len());
                let page: Vec<Value> = rows[start..end].to_vec();
                if end < rows.len() {
                    json!({"records": page, "offset": end.to_string()})
                } else {
                    json!({"records": page})
                }
            }
            _ => return Err(Self::not_found()),
        };

        Ok(serde_json::to_vec(&response)?)
    }
}

fn position(rows: &[Value], id: &str) -> Option<usize> {
    rows.iter().position(|r| r["id"] == id)
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
    ) -> Result<Vec<u8>> {
        self.handle(method, path, options, None)
    }

    async fn request_with_body(
        &self,
        method: Method,
        path: &str,
        options: Option<&ListOptions>,
        body: Vec<u8>,
    ) -> Result<Vec<u8>> {
        self.handle(method, path, options, Some(body))
    }
}
