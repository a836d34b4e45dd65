use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Clone, Default)]
pub struct RequestArgs {
    pub url: String,
    pub body: Option<Vec<u8>>,
    pub headers: Option<HashMap<String, String>>,
    pub timeout_ms: u64,
}

impl RequestArgs {
    pub fn populate_headers(&mut self, extra_headers: HashMap<String, String>) {
        match &mut self.headers {
            Some(my_headers) => {
                for (key, value) in extra_headers {
                    my_headers.entry(key).or_insert(value);
                }
            }
            None => self.headers = Some(extra_headers),
        }
    }
}

/// Raw result of one provider round trip. A `status_code` of 0 means the
/// endpoint was never reached and `error` says why.
pub struct Response {
    pub status_code: u16,
    pub data: Option<Vec<u8>>,
    pub error: Option<String>,
}

#[derive(PartialEq, Clone, Debug)]
pub enum HttpMethod {
    POST,
}

#[async_trait]
pub trait NetworkProvider: Sync + Send {
    async fn send(&self, method: &HttpMethod, args: &RequestArgs) -> Response;
}
