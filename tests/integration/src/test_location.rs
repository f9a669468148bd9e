//! Location end to end: `restJson1` with URI labels, query strings and blobs.

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use stratus_location::model::input::{
        BatchUpdateDevicePositionInput, CalculateRouteInput, GetMapGlyphsInput, ListGeofencesInput,
        UntagResourceInput,
    };
    use stratus_location::model::types::{
        BatchItemErrorCode, DevicePositionUpdate, DistanceUnit, TravelMode,
    };
    use stratus_location::model::{LocationErrorCode, ValidationExceptionReason};

    use crate::{MockResponse, MockServer, location_client};

    #[tokio::test]
    async fn test_should_calculate_route() {
        let server = MockServer::respond_with(MockResponse::json(
            200,
            r#"{
                "Legs": [{
                    "StartPosition": [-123.115, 49.285],
                    "EndPosition": [-123.021, 49.221],
                    "Distance": 12.4,
                    "DurationSeconds": 1320.0,
                    "Steps": []
                }],
                "Summary": {
                    "RouteBBox": [-123.115, 49.221, -123.021, 49.285],
                    "DataSource": "Here",
                    "Distance": 12.4,
                    "DurationSeconds": 1320.0,
                    "DistanceUnit": "Kilometers"
                }
            }"#,
        ))
        .await;
        let client = location_client(&server);

        let mut input =
            CalculateRouteInput::new("city routes", vec![-123.115, 49.285], vec![-123.021, 49.221]);
        input.travel_mode = Some(TravelMode::Car);
        input.depart_now = Some(true);
        let output = client.calculate_route(input).await.unwrap();

        assert_eq!(output.legs.len(), 1);
        assert_eq!(output.summary.data_source, "Here");
        assert_eq!(output.summary.distance_unit, DistanceUnit::Kilometers);
        assert_eq!(output.summary.route_bbox.len(), 4);

        let request = server.last_request();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(
            request.uri.path(),
            "/routes/v0/calculators/city%20routes/calculate/route"
        );
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert!(request.header("x-amz-target").is_none());

        let body = request.body_json();
        assert_eq!(body["DeparturePosition"], serde_json::json!([-123.115, 49.285]));
        assert_eq!(body["TravelMode"], "Car");
        assert_eq!(body["DepartNow"], true);
        assert!(body.get("CalculatorName").is_none());
    }

    #[tokio::test]
    async fn test_should_return_glyphs_as_raw_bytes() {
        let server = MockServer::respond_with(MockResponse::blob(
            "application/octet-stream",
            b"\x0a\x05glyph",
        ))
        .await;
        let client = location_client(&server);

        let output = client
            .get_map_glyphs(GetMapGlyphsInput {
                map_name: "city".to_owned(),
                font_stack: "Noto Sans Regular".to_owned(),
                font_unicode_range: "0-255.pbf".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(output.blob, b"\x0a\x05glyph".to_vec());
        assert_eq!(output.content_type.as_deref(), Some("application/octet-stream"));

        let request = server.last_request();
        assert_eq!(request.method, http::Method::GET);
        assert_eq!(
            request.uri.path(),
            "/maps/v0/maps/city/glyphs/Noto%20Sans%20Regular/0-255.pbf"
        );
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_should_send_tag_keys_as_query() {
        let server = MockServer::respond_with(MockResponse::json(200, "{}")).await;
        let client = location_client(&server);

        client
            .untag_resource(UntagResourceInput {
                resource_arn: "arn:aws:geo:us-east-1:123456789012:map/city".to_owned(),
                tag_keys: vec!["team".to_owned(), "stage".to_owned()],
            })
            .await
            .unwrap();

        let request = server.last_request();
        assert_eq!(request.method, http::Method::DELETE);
        assert_eq!(
            request.uri.path(),
            "/tags/arn%3Aaws%3Ageo%3Aus-east-1%3A123456789012%3Amap%2Fcity"
        );
        assert_eq!(request.uri.query(), Some("tagKeys=team&tagKeys=stage"));
    }

    #[tokio::test]
    async fn test_should_report_partial_batch_failures() {
        let server = MockServer::respond_with(MockResponse::json(
            200,
            r#"{"Errors":[{
                "DeviceId": "truck-2",
                "SampleTime": "2026-03-01T08:00:00Z",
                "Error": {"Code": "ValidationError", "Message": "position out of range"}
            }]}"#,
        ))
        .await;
        let client = location_client(&server);

        let at = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let output = client
            .batch_update_device_position(BatchUpdateDevicePositionInput {
                tracker_name: "fleet".to_owned(),
                updates: vec![
                    DevicePositionUpdate::new("truck-1", vec![-123.1, 49.2], at),
                    DevicePositionUpdate::new("truck-2", vec![-300.0, 49.2], at),
                ],
            })
            .await
            .unwrap();

        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].device_id, "truck-2");
        assert_eq!(output.errors[0].sample_time, Some(at));
        assert_eq!(
            output.errors[0].error.code,
            Some(BatchItemErrorCode::ValidationError)
        );

        let body = server.last_request().body_json();
        assert_eq!(body["Updates"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["Updates"][0]["SampleTime"], "2026-03-01T08:00:00Z");
    }

    #[tokio::test]
    async fn test_should_surface_validation_exception() {
        let server = MockServer::respond_with(
            MockResponse::json(
                400,
                r#"{"message":"1 validation error","reason":"FieldValidationFailed","fieldList":[{"name":"MaxResults","message":"must be at most 100"}]}"#,
            )
            .header("x-amzn-errortype", "ValidationException")
            .header("x-amzn-requestid", "req-7"),
        )
        .await;
        let client = location_client(&server);

        let err = client
            .list_geofences(ListGeofencesInput {
                collection_name: "yard".to_owned(),
                max_results: Some(500),
                next_token: None,
            })
            .await
            .unwrap_err();

        let service = err.as_service_error().unwrap();
        assert_eq!(service.code, LocationErrorCode::ValidationException);
        assert_eq!(
            service.reason,
            Some(ValidationExceptionReason::FieldValidationFailed)
        );
        assert_eq!(service.field_list[0].name, "MaxResults");
        assert_eq!(service.request_id.as_deref(), Some("req-7"));
        assert_eq!(
            server.last_request().uri.path(),
            "/geofencing/v0/collections/yard/list-geofences"
        );
    }

    #[tokio::test]
    async fn test_should_not_dispatch_without_labels() {
        let server = MockServer::respond_with(MockResponse::json(200, "{}")).await;
        let client = location_client(&server);

        let err = client
            .list_geofences(ListGeofencesInput::default())
            .await
            .unwrap_err();

        assert!(matches!(err, stratus_http::SdkError::Build(_)));
        assert!(server.requests().is_empty());
    }
}
