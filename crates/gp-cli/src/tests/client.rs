use crate::Client;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8080/api/", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8080/api");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8080/api", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8080/api");
}
