//! Location operation outputs.
//!
//! Every output is the JSON response body, except the `GetMap*` family whose
//! payload is the raw response body with its media type in `Content-Type`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BatchDeleteDevicePositionHistoryError, BatchDeleteGeofenceError, BatchEvaluateGeofencesError,
    BatchGetDevicePositionError, BatchPutGeofenceError, BatchPutGeofenceSuccess,
    BatchUpdateDevicePositionError, CalculateRouteMatrixSummary, CalculateRouteSummary,
    DataSourceConfiguration, DevicePosition, GeofenceGeometry, Leg,
    ListDevicePositionsResponseEntry, ListGeofenceCollectionsResponseEntry,
    ListGeofenceResponseEntry, ListMapsResponseEntry, ListPlaceIndexesResponseEntry,
    ListRouteCalculatorsResponseEntry, ListTrackersResponseEntry, MapConfiguration,
    PositionFiltering, PositionalAccuracy, PricingPlan, RouteMatrixEntry, SearchForPositionResult,
    SearchForTextResult, SearchPlaceIndexForPositionSummary, SearchPlaceIndexForTextSummary, Tags,
};

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// Output of `BatchDeleteGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteGeofenceOutput {
    /// Items that failed, one entry each.
    #[serde(default)]
    pub errors: Vec<BatchDeleteGeofenceError>,
}

/// Output of `BatchEvaluateGeofences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchEvaluateGeofencesOutput {
    /// Items that failed, one entry each.
    #[serde(default)]
    pub errors: Vec<BatchEvaluateGeofencesError>,
}

/// Output of `BatchPutGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutGeofenceOutput {
    /// Geofences stored, one entry each.
    #[serde(default)]
    pub successes: Vec<BatchPutGeofenceSuccess>,

    /// Items that failed, one entry each.
    #[serde(default)]
    pub errors: Vec<BatchPutGeofenceError>,
}

/// Output of `CreateGeofenceCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGeofenceCollectionOutput {
    /// ARN of the geofence collection.
    #[serde(default)]
    pub collection_arn: String,

    /// Name of the geofence collection.
    #[serde(default)]
    pub collection_name: String,

    /// When the geofence collection was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output of `DeleteGeofenceCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteGeofenceCollectionOutput {}

/// Output of `DescribeGeofenceCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeGeofenceCollectionOutput {
    /// ARN of the geofence collection.
    #[serde(default)]
    pub collection_arn: String,

    /// Name of the geofence collection.
    #[serde(default)]
    pub collection_name: String,

    /// Free-form description of the geofence collection.
    #[serde(default)]
    pub description: String,

    /// KMS key used to encrypt the geofence collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Data provider the pricing plan applies to. Deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,

    /// Tags attached to the geofence collection.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,

    /// When the geofence collection was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the geofence collection was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output of `GetGeofence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetGeofenceOutput {
    /// ID of the geofence, unique within its collection.
    #[serde(default)]
    pub geofence_id: String,

    /// Geometry of the geofence.
    #[serde(default)]
    pub geometry: GeofenceGeometry,

    /// Current status of the geofence.
    #[serde(default)]
    pub status: String,

    /// When the geofence was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the geofence was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output of `ListGeofenceCollections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGeofenceCollectionsOutput {
    /// One entry per geofence collection.
    #[serde(default)]
    pub entries: Vec<ListGeofenceCollectionsResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListGeofences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGeofencesOutput {
    /// One entry per geofence.
    #[serde(default)]
    pub entries: Vec<ListGeofenceResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `PutGeofence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutGeofenceOutput {
    /// ID of the geofence, unique within its collection.
    #[serde(default)]
    pub geofence_id: String,

    /// When the geofence was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the geofence was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output of `UpdateGeofenceCollection`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGeofenceCollectionOutput {
    /// ARN of the geofence collection.
    #[serde(default)]
    pub collection_arn: String,

    /// Name of the geofence collection.
    #[serde(default)]
    pub collection_name: String,

    /// When the geofence collection was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Output of `CreateMap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMapOutput {
    /// ARN of the map resource.
    #[serde(default)]
    pub map_arn: String,

    /// Name of the map resource.
    #[serde(default)]
    pub map_name: String,

    /// When the map was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output of `DeleteMap`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteMapOutput {}

/// Output of `DescribeMap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMapOutput {
    /// ARN of the map resource.
    #[serde(default)]
    pub map_arn: String,

    /// Name of the map resource.
    #[serde(default)]
    pub map_name: String,

    /// Connector settings of the map.
    #[serde(default)]
    pub configuration: MapConfiguration,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Free-form description of the map.
    #[serde(default)]
    pub description: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Tags attached to the map.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,

    /// When the map was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the map was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// A map resource delivered as a raw payload (glyphs, sprites, style or
/// tile).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapBlobOutput {
    /// Raw payload.
    pub blob: Vec<u8>,

    /// Media type of `blob`, from the `Content-Type` header.
    pub content_type: Option<String>,
}

/// Output of `GetMapGlyphs`: a protobuf glyph range.
pub type GetMapGlyphsOutput = MapBlobOutput;
/// Output of `GetMapSprites`: a PNG sheet or its JSON index.
pub type GetMapSpritesOutput = MapBlobOutput;
/// Output of `GetMapStyleDescriptor`: a Mapbox GL style document.
pub type GetMapStyleDescriptorOutput = MapBlobOutput;
/// Output of `GetMapTile`: a vector or raster tile.
pub type GetMapTileOutput = MapBlobOutput;

/// Output of `ListMaps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMapsOutput {
    /// One entry per map.
    #[serde(default)]
    pub entries: Vec<ListMapsResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `UpdateMap`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateMapOutput {
    /// ARN of the map resource.
    #[serde(default)]
    pub map_arn: String,

    /// Name of the map resource.
    #[serde(default)]
    pub map_name: String,

    /// When the map was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Output of `CreatePlaceIndex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlaceIndexOutput {
    /// ARN of the place index.
    #[serde(default)]
    pub index_arn: String,

    /// Name of the place index.
    #[serde(default)]
    pub index_name: String,

    /// When the place index was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output of `DeletePlaceIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePlaceIndexOutput {}

/// Output of `DescribePlaceIndex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePlaceIndexOutput {
    /// ARN of the place index.
    #[serde(default)]
    pub index_arn: String,

    /// Name of the place index.
    #[serde(default)]
    pub index_name: String,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Connector settings of the data source.
    #[serde(default)]
    pub data_source_configuration: DataSourceConfiguration,

    /// Free-form description of the place index.
    #[serde(default)]
    pub description: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Tags attached to the place index.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,

    /// When the place index was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the place index was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output of `ListPlaceIndexes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPlaceIndexesOutput {
    /// One entry per place index.
    #[serde(default)]
    pub entries: Vec<ListPlaceIndexesResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `SearchPlaceIndexForPosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForPositionOutput {
    /// Places nearest to the position, nearest first.
    #[serde(default)]
    pub results: Vec<SearchForPositionResult>,

    /// Totals and metadata for the request.
    #[serde(default)]
    pub summary: SearchPlaceIndexForPositionSummary,
}

/// Output of `SearchPlaceIndexForText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForTextOutput {
    /// Matching places, best match first.
    #[serde(default)]
    pub results: Vec<SearchForTextResult>,

    /// Totals and metadata for the request.
    #[serde(default)]
    pub summary: SearchPlaceIndexForTextSummary,
}

/// Output of `UpdatePlaceIndex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlaceIndexOutput {
    /// ARN of the place index.
    #[serde(default)]
    pub index_arn: String,

    /// Name of the place index.
    #[serde(default)]
    pub index_name: String,

    /// When the place index was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Output of `CalculateRoute`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteOutput {
    /// One leg per pair of consecutive positions.
    #[serde(default)]
    pub legs: Vec<Leg>,

    /// Totals and metadata for the request.
    #[serde(default)]
    pub summary: CalculateRouteSummary,
}

/// Output of `CalculateRouteMatrix`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteMatrixOutput {
    /// `route_matrix[i][j]` is the route from departure `i` to destination `j`.
    #[serde(default)]
    pub route_matrix: Vec<Vec<RouteMatrixEntry>>,

    /// Departure positions moved onto the nearest road.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapped_departure_positions: Vec<Vec<f64>>,

    /// Destination positions moved onto the nearest road.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapped_destination_positions: Vec<Vec<f64>>,

    /// Totals and metadata for the request.
    #[serde(default)]
    pub summary: CalculateRouteMatrixSummary,
}

/// Output of `CreateRouteCalculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRouteCalculatorOutput {
    /// ARN of the route calculator.
    #[serde(default)]
    pub calculator_arn: String,

    /// Name of the route calculator.
    #[serde(default)]
    pub calculator_name: String,

    /// When the route calculator was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output of `DeleteRouteCalculator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRouteCalculatorOutput {}

/// Output of `DescribeRouteCalculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRouteCalculatorOutput {
    /// ARN of the route calculator.
    #[serde(default)]
    pub calculator_arn: String,

    /// Name of the route calculator.
    #[serde(default)]
    pub calculator_name: String,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Free-form description of the route calculator.
    #[serde(default)]
    pub description: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Tags attached to the route calculator.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,

    /// When the route calculator was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the route calculator was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output of `ListRouteCalculators`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRouteCalculatorsOutput {
    /// One entry per route calculator.
    #[serde(default)]
    pub entries: Vec<ListRouteCalculatorsResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `UpdateRouteCalculator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRouteCalculatorOutput {
    /// ARN of the route calculator.
    #[serde(default)]
    pub calculator_arn: String,

    /// Name of the route calculator.
    #[serde(default)]
    pub calculator_name: String,

    /// When the route calculator was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Output of `AssociateTrackerConsumer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssociateTrackerConsumerOutput {}

/// Output of `BatchDeleteDevicePositionHistory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteDevicePositionHistoryOutput {
    /// Items that failed, one entry each.
    #[serde(default)]
    pub errors: Vec<BatchDeleteDevicePositionHistoryError>,
}

/// Output of `BatchGetDevicePosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetDevicePositionOutput {
    /// Latest position of each device.
    #[serde(default)]
    pub device_positions: Vec<DevicePosition>,

    /// Items that failed, one entry each.
    #[serde(default)]
    pub errors: Vec<BatchGetDevicePositionError>,
}

/// Output of `BatchUpdateDevicePosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateDevicePositionOutput {
    /// Items that failed, one entry each.
    #[serde(default)]
    pub errors: Vec<BatchUpdateDevicePositionError>,
}

/// Output of `CreateTracker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrackerOutput {
    /// ARN of the tracker.
    #[serde(default)]
    pub tracker_arn: String,

    /// Name of the tracker.
    #[serde(default)]
    pub tracker_name: String,

    /// When the tracker was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
}

/// Output of `DeleteTracker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteTrackerOutput {}

/// Output of `DescribeTracker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTrackerOutput {
    /// ARN of the tracker.
    #[serde(default)]
    pub tracker_arn: String,

    /// Name of the tracker.
    #[serde(default)]
    pub tracker_name: String,

    /// Free-form description of the tracker.
    #[serde(default)]
    pub description: String,

    /// KMS key used to encrypt the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,

    /// How the tracker filters position updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_filtering: Option<PositionFiltering>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Data provider the pricing plan applies to. Deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,

    /// Tags attached to the tracker.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,

    /// When the tracker was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the tracker was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// Output of `DisassociateTrackerConsumer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisassociateTrackerConsumerOutput {}

/// Output of `GetDevicePosition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDevicePositionOutput {
    /// ID of the device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,

    /// Position as `[longitude, latitude]`.
    #[serde(default)]
    pub position: Vec<f64>,

    /// When the service received the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_time: Option<DateTime<Utc>>,

    /// When the device reported the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,

    /// Estimated accuracy of the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,

    /// Up to three free-form key-value pairs reported with the position.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub position_properties: Tags,
}

/// Output of `GetDevicePositionHistory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDevicePositionHistoryOutput {
    /// Position samples in time order.
    #[serde(default)]
    pub device_positions: Vec<DevicePosition>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListDevicePositions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDevicePositionsOutput {
    /// One entry per device.
    #[serde(default)]
    pub entries: Vec<ListDevicePositionsResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListTrackerConsumers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrackerConsumersOutput {
    /// ARNs of the linked geofence collections.
    #[serde(default)]
    pub consumer_arns: Vec<String>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `ListTrackers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrackersOutput {
    /// One entry per tracker.
    #[serde(default)]
    pub entries: Vec<ListTrackersResponseEntry>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `UpdateTracker`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTrackerOutput {
    /// ARN of the tracker.
    #[serde(default)]
    pub tracker_arn: String,

    /// Name of the tracker.
    #[serde(default)]
    pub tracker_name: String,

    /// When the tracker was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Output of `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    /// Tags attached to the resource.
    #[serde(default)]
    pub tags: Tags,
}

/// Output of `TagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagResourceOutput {}

/// Output of `UntagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UntagResourceOutput {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{
        BatchItemErrorCode, CalculateRouteMatrixSummary, CalculateRouteSummary, DistanceUnit, Leg,
        LegGeometry, RouteMatrixEntry, RouteMatrixEntryError, RouteMatrixErrorCode, Step,
    };

    #[test]
    fn test_should_parse_calculate_route() {
        let out: CalculateRouteOutput = serde_json::from_value(json!({
            "Legs": [{
                "StartPosition": [-123.1, 49.2],
                "EndPosition": [-122.3, 47.6],
                "Distance": 230.4,
                "DurationSeconds": 9000.0,
                "Steps": [{
                    "StartPosition": [-123.1, 49.2],
                    "EndPosition": [-122.3, 47.6],
                    "Distance": 230.4,
                    "DurationSeconds": 9000.0,
                    "GeometryOffset": 0
                }]
            }],
            "Summary": {
                "RouteBBox": [-123.1, 47.6, -122.3, 49.2],
                "DataSource": "Esri",
                "Distance": 230.4,
                "DurationSeconds": 9000.0,
                "DistanceUnit": "Kilometers"
            }
        }))
        .unwrap();

        assert_eq!(out.legs.len(), 1);
        assert!(out.legs[0].geometry.is_none());
        assert_eq!(out.legs[0].steps[0].geometry_offset, Some(0));
        assert_eq!(out.summary.distance_unit, DistanceUnit::Kilometers);
        assert_eq!(out.summary.route_bbox.len(), 4);
    }

    #[test]
    fn test_should_parse_iso8601_timestamps() {
        let out: DescribeTrackerOutput = serde_json::from_value(json!({
            "TrackerArn": "arn:aws:geo:us-east-1:123456789012:tracker/fleet",
            "TrackerName": "fleet",
            "Description": "",
            "PositionFiltering": "DistanceBased",
            "CreateTime": "2021-03-04T05:06:07.123Z",
            "UpdateTime": "2021-03-04T05:06:07Z"
        }))
        .unwrap();

        assert_eq!(out.position_filtering, Some(PositionFiltering::DistanceBased));
        assert_eq!(out.create_time.unwrap().timestamp_subsec_millis(), 123);
        assert!(out.tags.is_empty());
        assert!(out.kms_key_id.is_none());
    }

    #[test]
    fn test_should_parse_batch_errors() {
        let out: BatchGetDevicePositionOutput = serde_json::from_value(json!({
            "DevicePositions": [],
            "Errors": [{
                "DeviceId": "phone",
                "Error": {"Code": "ResourceNotFoundError", "Message": "no such device"}
            }]
        }))
        .unwrap();

        assert_eq!(
            out.errors[0].error.code,
            Some(BatchItemErrorCode::ResourceNotFoundError)
        );
    }

    #[test]
    fn test_should_tolerate_missing_members() {
        let out: DescribeMapOutput = serde_json::from_value(json!({
            "MapArn": "arn:aws:geo:us-east-1:123456789012:map/city",
            "MapName": "city",
            "Configuration": {"Style": "VectorEsriStreets"},
            "DataSource": "Esri",
            "CreateTime": "2021-03-04T05:06:07Z"
        }))
        .unwrap();

        assert_eq!(out.map_name, "city");
        assert!(out.description.is_empty());
        assert!(out.update_time.is_none());
        assert!(out.create_time.is_some());

        let out: ListGeofencesOutput = serde_json::from_value(json!({
            "Entries": [{"GeofenceId": "gate", "Status": "ACTIVE"}]
        }))
        .unwrap();
        assert_eq!(out.entries[0].geofence_id, "gate");
        assert_eq!(out.entries[0].geometry, GeofenceGeometry::default());
        assert!(out.entries[0].create_time.is_none());

        let out: SearchPlaceIndexForTextOutput = serde_json::from_value(json!({
            "Results": [{"Place": {"Label": "Main St"}}],
            "Summary": {"Text": "main"}
        }))
        .unwrap();
        assert!(out.results[0].place.geometry.point.is_empty());
        assert!(out.summary.data_source.is_empty());
    }

    #[test]
    fn test_should_parse_empty_output() {
        let out: DeleteMapOutput = serde_json::from_str("{}").unwrap();
        assert_eq!(out, DeleteMapOutput {});
    }

    #[test]
    fn test_should_round_trip_calculate_route_output() {
        let step = |start: Vec<f64>, end: Vec<f64>, offset| Step {
            start_position: start,
            end_position: end,
            distance: 12.5,
            duration_seconds: 600.25,
            geometry_offset: Some(offset),
        };
        let out = CalculateRouteOutput {
            legs: vec![Leg {
                start_position: vec![-123.125, 49.25],
                end_position: vec![-122.25, 47.5],
                distance: 25.0,
                duration_seconds: 1_200.5,
                geometry: Some(LegGeometry {
                    line_string: vec![vec![-123.125, 49.25], vec![-122.75, 48.5], vec![-122.25, 47.5]],
                }),
                steps: vec![
                    step(vec![-123.125, 49.25], vec![-122.75, 48.5], 0),
                    step(vec![-122.75, 48.5], vec![-122.25, 47.5], 1),
                ],
            }],
            summary: CalculateRouteSummary {
                route_bbox: vec![-123.125, 47.5, -122.25, 49.25],
                data_source: "Here".to_owned(),
                distance: 25.0,
                duration_seconds: 1_200.5,
                distance_unit: DistanceUnit::Miles,
            },
        };

        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["Summary"]["RouteBBox"][3], 49.25);
        assert_eq!(value["Legs"][0]["Geometry"]["LineString"][1][1], 48.5);
        let back: CalculateRouteOutput = serde_json::from_value(value).unwrap();
        assert_eq!(back, out);
    }

    #[test]
    fn test_should_round_trip_calculate_route_matrix_output() {
        let route = |distance, duration_seconds| RouteMatrixEntry {
            distance: Some(distance),
            duration_seconds: Some(duration_seconds),
            error: None,
        };
        let out = CalculateRouteMatrixOutput {
            route_matrix: vec![
                vec![route(10.5, 900.0), route(20.25, 1_800.5)],
                vec![
                    RouteMatrixEntry {
                        error: Some(RouteMatrixEntryError {
                            code: Some(RouteMatrixErrorCode::DestinationPositionNotFound),
                            message: Some("no road near destination".to_owned()),
                        }),
                        ..RouteMatrixEntry::default()
                    },
                    route(0.0, 0.0),
                ],
            ],
            snapped_departure_positions: vec![vec![-123.125, 49.25], vec![-122.5, 47.75]],
            snapped_destination_positions: vec![vec![-122.25, 47.5], vec![-122.5, 47.75]],
            summary: CalculateRouteMatrixSummary {
                data_source: "Esri".to_owned(),
                distance_unit: DistanceUnit::Kilometers,
                error_count: 1,
                route_count: 4,
            },
        };

        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(
            value["RouteMatrix"][1][0],
            json!({"Error": {"Code": "DestinationPositionNotFound", "Message": "no road near destination"}})
        );
        let back: CalculateRouteMatrixOutput = serde_json::from_value(value).unwrap();
        assert_eq!(back, out);
    }
}

