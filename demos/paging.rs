//! Pulls every record out of a (simulated) paged web API,
//! then writes them back in fixed-size batches.
//!
//! ```text
//! cargo run --example paging
//! ```

use weblinq::prelude::*;

#[derive(Debug, Clone)]
struct Record {
    id: u32,
    name: String,
}

struct Response {
    records: Vec<Record>,
    next_cursor: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error("unknown cursor `{0}`")]
    UnknownCursor(String),
    #[error("rate limited at request #{0}")]
    RateLimited(usize),
}

struct FakeApi {
    records: Vec<Record>,
    page_size: usize,
    max_requests: usize,
}

impl FakeApi {
    fn list(&self, request_no: usize, cursor: Option<&str>) -> Result<Response, ApiError> {
        if request_no >= self.max_requests {
            return Err(ApiError::RateLimited(request_no));
        }

        let unknown = || ApiError::UnknownCursor(cursor.unwrap_or_default().to_owned());
        let start = match cursor {
            None => 0,
            Some(cursor) => cursor.parse().map_err(|_| unknown())?,
        };
        let end = (start + self.page_size).min(self.records.len());
        let records = self.records.get(start..end).ok_or_else(unknown)?.to_vec();

        Ok(Response {
            records,
            next_cursor: (end < self.records.len()).then(|| end.to_string()),
        })
    }
}

#[derive(Default)]
struct Pulled {
    records: Vec<Record>,
    cursor: Option<String>,
    last_page: bool,
}

fn pull_all(api: &FakeApi) -> Result<Vec<Record>, ApiError> {
    // The request counter is unbounded: the API decides when we are done.
    let pulled = (0..).try_fold_until(
        Pulled::default(),
        |mut pulled, request_no| {
            let response = api.list(request_no, pulled.cursor.as_deref())?;
            pulled.records.extend(response.records);
            pulled.last_page = response.next_cursor.is_none();
            pulled.cursor = response.next_cursor;
            Ok::<_, ApiError>(pulled)
        },
        |pulled| pulled.last_page,
    )?;

    Ok(pulled.records)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let records = (1..=23)
        .chain(40..=44)
        .map(|id| Record {
            id,
            name: format!("record-{id}"),
        })
        .collect();
    let api = FakeApi {
        records,
        page_size: 5,
        max_requests: 10,
    };

    let records = pull_all(&api)?;
    println!("pulled {} records", records.len());

    for run in records.iter().group_adjacent(|prev, curr| curr.id == prev.id + 1) {
        if let (Some(first), Some(last)) = (run.first(), run.last()) {
            println!("  ids {}..={}", first.id, last.id);
        }
    }

    for (batch_no, batch) in records.into_iter().chunk_by_size(8)?.enumerate() {
        let names: Vec<_> = batch.iter().map(|record| record.name.as_str()).collect();
        println!("batch #{batch_no}: {}", names.join(", "));
    }

    let stingy = FakeApi {
        max_requests: 3,
        ..api
    };
    match pull_all(&stingy) {
        Ok(records) => println!("unexpectedly pulled {} records", records.len()),
        Err(err) => println!("stingy api: {err}"),
    }

    Ok(())
}
