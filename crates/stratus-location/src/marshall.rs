//! Request marshalling for Amazon Location.
//!
//! Location uses `restJson1`: each operation has its own method, URI template
//! and host prefix (see [`LocationOperation`]). Path labels are filled from
//! the input and the remaining members form the JSON body. Operations bound
//! to `GET` or `DELETE` carry no body.

use stratus_http::{
    APPLICATION_JSON, BuildError, RestPath, ServiceMetadata, WireRequest, rest_json_request,
};
use stratus_location_model::input::{
    AssociateTrackerConsumerInput, BatchDeleteDevicePositionHistoryInput, BatchDeleteGeofenceInput,
    BatchEvaluateGeofencesInput, BatchGetDevicePositionInput, BatchPutGeofenceInput,
    BatchUpdateDevicePositionInput, CalculateRouteInput, CalculateRouteMatrixInput,
    CreateGeofenceCollectionInput, CreateMapInput, CreatePlaceIndexInput,
    CreateRouteCalculatorInput, CreateTrackerInput, DeleteGeofenceCollectionInput, DeleteMapInput,
    DeletePlaceIndexInput, DeleteRouteCalculatorInput, DeleteTrackerInput,
    DescribeGeofenceCollectionInput, DescribeMapInput, DescribePlaceIndexInput,
    DescribeRouteCalculatorInput, DescribeTrackerInput, DisassociateTrackerConsumerInput,
    GetDevicePositionHistoryInput, GetDevicePositionInput, GetGeofenceInput, GetMapGlyphsInput,
    GetMapSpritesInput, GetMapStyleDescriptorInput, GetMapTileInput, ListDevicePositionsInput,
    ListGeofenceCollectionsInput, ListGeofencesInput, ListMapsInput, ListPlaceIndexesInput,
    ListRouteCalculatorsInput, ListTagsForResourceInput, ListTrackerConsumersInput,
    ListTrackersInput, PutGeofenceInput, SearchPlaceIndexForPositionInput,
    SearchPlaceIndexForTextInput, TagResourceInput, UntagResourceInput,
    UpdateGeofenceCollectionInput, UpdateMapInput, UpdatePlaceIndexInput,
    UpdateRouteCalculatorInput, UpdateTrackerInput,
};
use stratus_location_model::{API_VERSION, ENDPOINT_PREFIX, LocationOperation};

/// Endpoint and signing metadata of the Location service.
pub static METADATA: ServiceMetadata = ServiceMetadata {
    service_id: "Location",
    endpoint_prefix: ENDPOINT_PREFIX,
    signing_name: ENDPOINT_PREFIX,
    api_version: API_VERSION,
};

/// Method, expanded path and host prefix of `op`, without a body.
fn start(
    op: LocationOperation,
    labels: &[(&'static str, &str)],
) -> Result<WireRequest, BuildError> {
    let path = labels
        .iter()
        .fold(RestPath::new(op.uri()), |path, &(name, value)| {
            path.label(name, value)
        })
        .build()?;
    Ok(rest_json_request(op.method(), path).host_prefix(op.host_prefix()))
}

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// Build the `BatchDeleteGeofence` request.
pub fn batch_delete_geofence(input: &BatchDeleteGeofenceInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::BatchDeleteGeofence,
        &[("CollectionName", input.collection_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `BatchEvaluateGeofences` request.
pub fn batch_evaluate_geofences(
    input: &BatchEvaluateGeofencesInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::BatchEvaluateGeofences,
        &[("CollectionName", input.collection_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `BatchPutGeofence` request.
pub fn batch_put_geofence(input: &BatchPutGeofenceInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::BatchPutGeofence,
        &[("CollectionName", input.collection_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `CreateGeofenceCollection` request.
pub fn create_geofence_collection(
    input: &CreateGeofenceCollectionInput,
) -> Result<WireRequest, BuildError> {
    start(LocationOperation::CreateGeofenceCollection, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `DeleteGeofenceCollection` request.
pub fn delete_geofence_collection(
    input: &DeleteGeofenceCollectionInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::DeleteGeofenceCollection,
        &[("CollectionName", input.collection_name.as_str())],
    )
}

/// Build the `DescribeGeofenceCollection` request.
pub fn describe_geofence_collection(
    input: &DescribeGeofenceCollectionInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::DescribeGeofenceCollection,
        &[("CollectionName", input.collection_name.as_str())],
    )
}

/// Build the `GetGeofence` request.
pub fn get_geofence(input: &GetGeofenceInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::GetGeofence,
        &[
            ("CollectionName", input.collection_name.as_str()),
            ("GeofenceId", input.geofence_id.as_str()),
        ],
    )
}

/// Build the `ListGeofenceCollections` request.
pub fn list_geofence_collections(
    input: &ListGeofenceCollectionsInput,
) -> Result<WireRequest, BuildError> {
    start(LocationOperation::ListGeofenceCollections, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `ListGeofences` request.
pub fn list_geofences(input: &ListGeofencesInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::ListGeofences,
        &[("CollectionName", input.collection_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `PutGeofence` request.
pub fn put_geofence(input: &PutGeofenceInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::PutGeofence,
        &[
            ("CollectionName", input.collection_name.as_str()),
            ("GeofenceId", input.geofence_id.as_str()),
        ],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `UpdateGeofenceCollection` request.
pub fn update_geofence_collection(
    input: &UpdateGeofenceCollectionInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::UpdateGeofenceCollection,
        &[("CollectionName", input.collection_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Build the `CreateMap` request.
pub fn create_map(input: &CreateMapInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::CreateMap, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `DeleteMap` request.
pub fn delete_map(input: &DeleteMapInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::DeleteMap, &[("MapName", input.map_name.as_str())])
}

/// Build the `DescribeMap` request.
pub fn describe_map(input: &DescribeMapInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::DescribeMap, &[("MapName", input.map_name.as_str())])
}

/// Build the `GetMapGlyphs` request.
pub fn get_map_glyphs(input: &GetMapGlyphsInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::GetMapGlyphs,
        &[
            ("MapName", input.map_name.as_str()),
            ("FontStack", input.font_stack.as_str()),
            ("FontUnicodeRange", input.font_unicode_range.as_str()),
        ],
    )
}

/// Build the `GetMapSprites` request.
pub fn get_map_sprites(input: &GetMapSpritesInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::GetMapSprites,
        &[("MapName", input.map_name.as_str()), ("FileName", input.file_name.as_str())],
    )
}

/// Build the `GetMapStyleDescriptor` request.
pub fn get_map_style_descriptor(
    input: &GetMapStyleDescriptorInput,
) -> Result<WireRequest, BuildError> {
    start(LocationOperation::GetMapStyleDescriptor, &[("MapName", input.map_name.as_str())])
}

/// Build the `GetMapTile` request.
pub fn get_map_tile(input: &GetMapTileInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::GetMapTile,
        &[
            ("MapName", input.map_name.as_str()),
            ("Z", input.z.as_str()),
            ("X", input.x.as_str()),
            ("Y", input.y.as_str()),
        ],
    )
}

/// Build the `ListMaps` request.
pub fn list_maps(input: &ListMapsInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::ListMaps, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `UpdateMap` request.
pub fn update_map(input: &UpdateMapInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::UpdateMap,
        &[("MapName", input.map_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Build the `CreatePlaceIndex` request.
pub fn create_place_index(input: &CreatePlaceIndexInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::CreatePlaceIndex, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `DeletePlaceIndex` request.
pub fn delete_place_index(input: &DeletePlaceIndexInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::DeletePlaceIndex, &[("IndexName", input.index_name.as_str())])
}

/// Build the `DescribePlaceIndex` request.
pub fn describe_place_index(input: &DescribePlaceIndexInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::DescribePlaceIndex, &[("IndexName", input.index_name.as_str())])
}

/// Build the `ListPlaceIndexes` request.
pub fn list_place_indexes(input: &ListPlaceIndexesInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::ListPlaceIndexes, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `SearchPlaceIndexForPosition` request.
pub fn search_place_index_for_position(
    input: &SearchPlaceIndexForPositionInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::SearchPlaceIndexForPosition,
        &[("IndexName", input.index_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `SearchPlaceIndexForText` request.
pub fn search_place_index_for_text(
    input: &SearchPlaceIndexForTextInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::SearchPlaceIndexForText,
        &[("IndexName", input.index_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `UpdatePlaceIndex` request.
pub fn update_place_index(input: &UpdatePlaceIndexInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::UpdatePlaceIndex,
        &[("IndexName", input.index_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Build the `CalculateRoute` request.
pub fn calculate_route(input: &CalculateRouteInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::CalculateRoute,
        &[("CalculatorName", input.calculator_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `CalculateRouteMatrix` request.
pub fn calculate_route_matrix(
    input: &CalculateRouteMatrixInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::CalculateRouteMatrix,
        &[("CalculatorName", input.calculator_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `CreateRouteCalculator` request.
pub fn create_route_calculator(
    input: &CreateRouteCalculatorInput,
) -> Result<WireRequest, BuildError> {
    start(LocationOperation::CreateRouteCalculator, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `DeleteRouteCalculator` request.
pub fn delete_route_calculator(
    input: &DeleteRouteCalculatorInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::DeleteRouteCalculator,
        &[("CalculatorName", input.calculator_name.as_str())],
    )
}

/// Build the `DescribeRouteCalculator` request.
pub fn describe_route_calculator(
    input: &DescribeRouteCalculatorInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::DescribeRouteCalculator,
        &[("CalculatorName", input.calculator_name.as_str())],
    )
}

/// Build the `ListRouteCalculators` request.
pub fn list_route_calculators(
    input: &ListRouteCalculatorsInput,
) -> Result<WireRequest, BuildError> {
    start(LocationOperation::ListRouteCalculators, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `UpdateRouteCalculator` request.
pub fn update_route_calculator(
    input: &UpdateRouteCalculatorInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::UpdateRouteCalculator,
        &[("CalculatorName", input.calculator_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Build the `AssociateTrackerConsumer` request.
pub fn associate_tracker_consumer(
    input: &AssociateTrackerConsumerInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::AssociateTrackerConsumer,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `BatchDeleteDevicePositionHistory` request.
pub fn batch_delete_device_position_history(
    input: &BatchDeleteDevicePositionHistoryInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::BatchDeleteDevicePositionHistory,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `BatchGetDevicePosition` request.
pub fn batch_get_device_position(
    input: &BatchGetDevicePositionInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::BatchGetDevicePosition,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `BatchUpdateDevicePosition` request.
pub fn batch_update_device_position(
    input: &BatchUpdateDevicePositionInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::BatchUpdateDevicePosition,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `CreateTracker` request.
pub fn create_tracker(input: &CreateTrackerInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::CreateTracker, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `DeleteTracker` request.
pub fn delete_tracker(input: &DeleteTrackerInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::DeleteTracker, &[("TrackerName", input.tracker_name.as_str())])
}

/// Build the `DescribeTracker` request.
pub fn describe_tracker(input: &DescribeTrackerInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::DescribeTracker, &[("TrackerName", input.tracker_name.as_str())])
}

/// Build the `DisassociateTrackerConsumer` request.
pub fn disassociate_tracker_consumer(
    input: &DisassociateTrackerConsumerInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::DisassociateTrackerConsumer,
        &[
            ("TrackerName", input.tracker_name.as_str()),
            ("ConsumerArn", input.consumer_arn.as_str()),
        ],
    )
}

/// Build the `GetDevicePosition` request.
pub fn get_device_position(input: &GetDevicePositionInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::GetDevicePosition,
        &[("TrackerName", input.tracker_name.as_str()), ("DeviceId", input.device_id.as_str())],
    )
}

/// Build the `GetDevicePositionHistory` request.
pub fn get_device_position_history(
    input: &GetDevicePositionHistoryInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::GetDevicePositionHistory,
        &[("TrackerName", input.tracker_name.as_str()), ("DeviceId", input.device_id.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `ListDevicePositions` request.
pub fn list_device_positions(input: &ListDevicePositionsInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::ListDevicePositions,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `ListTrackerConsumers` request.
pub fn list_tracker_consumers(
    input: &ListTrackerConsumersInput,
) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::ListTrackerConsumers,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `ListTrackers` request.
pub fn list_trackers(input: &ListTrackersInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::ListTrackers, &[])?.json_body(input, APPLICATION_JSON)
}

/// Build the `UpdateTracker` request.
pub fn update_tracker(input: &UpdateTrackerInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::UpdateTracker,
        &[("TrackerName", input.tracker_name.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Build the `ListTagsForResource` request.
pub fn list_tags_for_resource(input: &ListTagsForResourceInput) -> Result<WireRequest, BuildError> {
    start(LocationOperation::ListTagsForResource, &[("ResourceArn", input.resource_arn.as_str())])
}

/// Build the `TagResource` request.
pub fn tag_resource(input: &TagResourceInput) -> Result<WireRequest, BuildError> {
    start(
        LocationOperation::TagResource,
        &[("ResourceArn", input.resource_arn.as_str())],
    )?
    .json_body(input, APPLICATION_JSON)
}

/// Build the `UntagResource` request.
pub fn untag_resource(input: &UntagResourceInput) -> Result<WireRequest, BuildError> {
    let request = start(
        LocationOperation::UntagResource,
        &[("ResourceArn", input.resource_arn.as_str())],
    )?;
    Ok(input
        .tag_keys
        .iter()
        .fold(request, |request, key| request.query("tagKeys", key)))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::{Value, json};
    use stratus_location_model::types::{DevicePositionUpdate, GeofenceGeometry, MapConfiguration};

    use super::*;

    fn body(request: &WireRequest) -> Value {
        serde_json::from_slice(&request.body).unwrap()
    }

    #[test]
    fn test_should_marshall_path_labels_and_body() {
        let req = batch_update_device_position(&BatchUpdateDevicePositionInput {
            tracker_name: "fleet".to_owned(),
            updates: vec![DevicePositionUpdate::new(
                "truck-1",
                vec![-123.1, 49.2],
                Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap(),
            )],
        })
        .unwrap();

        assert_eq!(req.method, http::Method::POST);
        assert_eq!(req.path, "/tracking/v0/trackers/fleet/positions");
        assert_eq!(req.host_prefix, Some("tracking."));
        assert_eq!(req.content_type, Some("application/json"));
        assert_eq!(
            body(&req),
            json!({"Updates": [{
                "DeviceId": "truck-1",
                "Position": [-123.1, 49.2],
                "SampleTime": "2021-03-04T05:06:07Z"
            }]})
        );
    }

    #[test]
    fn test_should_send_no_body_for_get_and_delete() {
        let req = get_device_position(&GetDevicePositionInput {
            tracker_name: "fleet".to_owned(),
            device_id: "phone 7".to_owned(),
        })
        .unwrap();
        assert_eq!(req.method, http::Method::GET);
        assert_eq!(
            req.path,
            "/tracking/v0/trackers/fleet/devices/phone%207/positions/latest"
        );
        assert!(req.body.is_empty());
        assert!(req.content_type.is_none());

        let req = delete_map(&DeleteMapInput {
            map_name: "city".to_owned(),
        })
        .unwrap();
        assert_eq!(req.method, http::Method::DELETE);
        assert_eq!(req.host_prefix, Some("cp.maps."));
        assert!(req.body.is_empty());
    }

    #[test]
    fn test_should_encode_font_stack_label() {
        let req = get_map_glyphs(&GetMapGlyphsInput {
            map_name: "city".to_owned(),
            font_stack: "Noto Sans Regular,Arial Unicode MS Regular".to_owned(),
            font_unicode_range: "0-255.pbf".to_owned(),
        })
        .unwrap();
        assert_eq!(
            req.path,
            "/maps/v0/maps/city/glyphs/Noto%20Sans%20Regular%2CArial%20Unicode%20MS%20Regular/0-255.pbf"
        );
        assert_eq!(req.host_prefix, Some("maps."));
    }

    #[test]
    fn test_should_encode_arn_labels() {
        let req = disassociate_tracker_consumer(&DisassociateTrackerConsumerInput {
            tracker_name: "fleet".to_owned(),
            consumer_arn: "arn:aws:geo:us-east-1:123456789012:geofence-collection/yard".to_owned(),
        })
        .unwrap();
        assert_eq!(
            req.path,
            "/tracking/v0/trackers/fleet/consumers/arn%3Aaws%3Ageo%3Aus-east-1%3A123456789012%3Ageofence-collection%2Fyard"
        );
        assert_eq!(req.host_prefix, Some("cp.tracking."));
    }

    #[test]
    fn test_should_put_tag_keys_in_query() {
        let req = untag_resource(&UntagResourceInput {
            resource_arn: "arn:aws:geo:us-east-1:123456789012:map/city".to_owned(),
            tag_keys: vec!["team".to_owned(), "cost center".to_owned()],
        })
        .unwrap();

        assert_eq!(req.method, http::Method::DELETE);
        assert_eq!(req.host_prefix, Some("metadata."));
        assert!(req.body.is_empty());
        assert_eq!(
            req.query,
            vec![
                ("tagKeys".to_owned(), "team".to_owned()),
                ("tagKeys".to_owned(), "cost center".to_owned()),
            ]
        );
        assert!(req.path_and_query().ends_with("?tagKeys=team&tagKeys=cost%20center"));
    }

    #[test]
    fn test_should_send_empty_object_for_optional_only_body() {
        let req = list_maps(&ListMapsInput::default()).unwrap();
        assert_eq!(req.path, "/maps/v0/list-maps");
        assert_eq!(&req.body[..], b"{}");
    }

    #[test]
    fn test_should_use_put_for_put_geofence() {
        let req = put_geofence(&PutGeofenceInput {
            collection_name: "yard".to_owned(),
            geofence_id: "gate".to_owned(),
            geometry: GeofenceGeometry::circle(vec![-123.1, 49.2], 25.0),
        })
        .unwrap();
        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.path, "/geofencing/v0/collections/yard/geofences/gate");
        assert_eq!(body(&req)["Geometry"]["Circle"]["Radius"], 25.0);
    }

    #[test]
    fn test_should_reject_missing_label() {
        let err = describe_map(&DescribeMapInput::default()).unwrap_err();
        assert!(matches!(err, BuildError::MissingField("MapName")));
    }

    #[test]
    fn test_should_keep_create_name_in_body() {
        let req = create_map(&CreateMapInput {
            map_name: "city".to_owned(),
            configuration: MapConfiguration::new("VectorEsriStreets"),
            ..CreateMapInput::default()
        })
        .unwrap();
        assert_eq!(req.path, "/maps/v0/maps");
        assert_eq!(
            body(&req),
            json!({"MapName": "city", "Configuration": {"Style": "VectorEsriStreets"}})
        );
    }
}
