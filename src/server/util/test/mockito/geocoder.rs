use mockito::{Matcher, Mock, ServerGuard};

use crate::server::geocoder::model::GeocoderResponse;

/// Create a mock geocoder endpoint answering for a single address
pub fn mock_geocoder_endpoint(
    server: &mut ServerGuard,
    address: &str,
    response: GeocoderResponse,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/1.x")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("geocode".into(), address.into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(serde_json::to_string(&response).unwrap())
        .expect(expected_requests)
        .create()
}

/// Create a mock geocoder endpoint that fails with the given status for a single address
pub fn mock_geocoder_error_endpoint(
    server: &mut ServerGuard,
    address: &str,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", "/1.x")
        .match_query(Matcher::UrlEncoded("geocode".into(), address.into()))
        .with_status(status)
        .expect(expected_requests)
        .create()
}
