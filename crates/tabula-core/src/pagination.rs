//! Offset-driven listing.
//!
//! A list run keeps requesting pages, feeding each response's `offset` back
//! into the next request, until the server stops returning one. There is no
//! client-side page cap: callers that need one can drive
//! [`Table::list_page`] themselves.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::options::ListOptions;
use crate::record::Record;
use crate::table::Table;
use crate::transport::{Method, Transport};

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "R: DeserializeOwned"))]
pub struct ListPage<R> {
    /// The records in this page, in server order.
    #[serde(default = "Vec::new")]
    pub records: Vec<R>,

    /// Cursor for the next page, if more records exist.
    #[serde(default)]
    pub offset: Option<String>,
}

impl<R> ListPage<R> {
    /// Returns the cursor for the next page, treating an empty one as absent.
    pub fn next_offset(&self) -> Option<&str> {
        self.offset.as_deref().filter(|o| !o.is_empty())
    }
}

impl<T: Transport> Table<T> {
    /// Fetch a single page of records starting at `offset`.
    #[instrument(skip(self, options), fields(table = %self.name))]
    pub async fn list_page<R: Record>(
        &self,
        options: &ListOptions,
        offset: Option<&str>,
    ) -> Result<ListPage<R>> {
        let mut options = options.clone();
        options.set_offset(offset.map(str::to_string));
        self.fetch_page(&options).await
    }

    /// List every record matching `options`, appending them to `out`.
    ///
    /// Records already in `out` are kept. If a page fails, the records of the
    /// pages before it remain in `out` and the error is returned.
    #[instrument(skip(self, out, options), fields(table = %self.name))]
    pub async fn list<R: Record>(
        &self,
        out: &mut Vec<R>,
        options: Option<ListOptions>,
    ) -> Result<()> {
        let mut options = options.unwrap_or_default();
        options.set_offset(None);
        let mut pages = 0usize;

        loop {
            let page: ListPage<R> = self.fetch_page(&options).await?;
            pages += 1;

            let next = page.next_offset().map(str::to_string);
            trace!(page = pages, records = page.records.len(), "Received page");
            out.extend(page.records);

            match next {
                Some(offset) => options.set_offset(Some(offset)),
                None => break,
            }
        }

        debug!(pages, total = out.len(), "Listed records");
        Ok(())
    }

    async fn fetch_page<R: Record>(&self, options: &ListOptions) -> Result<ListPage<R>> {
        debug!(offset = ?options.offset(), "Listing records");

        let body = self
            .transport
            .request(Method::Get, &self.path("")?, Some(options))
            .await?;

        Ok(serde_json::from_slice(&body)?)
    }
}
