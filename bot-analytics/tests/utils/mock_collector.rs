use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

const COLLECT_PATH: &str = "/collect";

pub struct CollectorStub {
    pub response: Vec<u8>,
    pub status: u16,
    pub delay_ms: u64,
}

impl CollectorStub {
    pub fn ok(response: &str) -> CollectorStub {
        CollectorStub {
            response: response.as_bytes().to_vec(),
            status: 200,
            delay_ms: 0,
        }
    }

    pub fn ok_bytes(response: Vec<u8>) -> CollectorStub {
        CollectorStub {
            response,
            status: 200,
            delay_ms: 0,
        }
    }

    pub fn with_status(status: u16, response: &str) -> CollectorStub {
        CollectorStub {
            response: response.as_bytes().to_vec(),
            status,
            delay_ms: 0,
        }
    }
}

pub struct MockCollector {
    mock_server: MockServer,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl MockCollector {
    pub async fn new() -> MockCollector {
        MockCollector {
            mock_server: MockServer::builder().start().await,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn stub(&self, stub: CollectorStub) {
        let reqs = self.requests.clone();

        Mock::given(method("POST"))
            .and(path(COLLECT_PATH))
            .respond_with(move |req: &Request| {
                reqs.lock().unwrap().push(req.clone());

                ResponseTemplate::new(stub.status)
                    .set_body_bytes(stub.response.clone())
                    .set_delay(Duration::from_millis(stub.delay_ms))
            })
            .mount(&self.mock_server)
            .await;
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.mock_server.uri(), COLLECT_PATH)
    }

    pub fn times_called(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn get_requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}
