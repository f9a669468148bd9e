//! Location operation inputs.
//!
//! Members bound to a URI label or a query parameter are `#[serde(skip)]`:
//! they never appear in the JSON body. Everything else is the body.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    BatchPutGeofenceRequestEntry, CalculateRouteCarModeOptions, CalculateRouteTruckModeOptions,
    DataSourceConfiguration, DevicePositionUpdate, DistanceUnit, GeofenceGeometry,
    MapConfiguration, PositionFiltering, PricingPlan, Tags, TravelMode,
};

// ---------------------------------------------------------------------------
// Geofencing
// ---------------------------------------------------------------------------

/// Input for `BatchDeleteGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteGeofenceInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// IDs of the geofences to delete.
    pub geofence_ids: Vec<String>,
}

/// Input for `BatchEvaluateGeofences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchEvaluateGeofencesInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// Positions to evaluate, up to 10.
    pub device_position_updates: Vec<DevicePositionUpdate>,
}

/// Input for `BatchPutGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutGeofenceInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// One entry per geofence.
    pub entries: Vec<BatchPutGeofenceRequestEntry>,
}

/// Input for `CreateGeofenceCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGeofenceCollectionInput {
    /// Name of the geofence collection.
    pub collection_name: String,

    /// Free-form description of the geofence collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

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
}

/// Input for `DeleteGeofenceCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteGeofenceCollectionInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,
}

/// Input for `DescribeGeofenceCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeGeofenceCollectionInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,
}

/// Input for `GetGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetGeofenceInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// ID of the geofence, unique within its collection.
    #[serde(skip)]
    pub geofence_id: String,
}

/// Input for `ListGeofenceCollections`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGeofenceCollectionsInput {
    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `ListGeofences`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGeofencesInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `PutGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutGeofenceInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// ID of the geofence, unique within its collection.
    #[serde(skip)]
    pub geofence_id: String,

    /// Geometry of the geofence.
    pub geometry: GeofenceGeometry,
}

/// Input for `UpdateGeofenceCollection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateGeofenceCollectionInput {
    /// Name of the geofence collection.
    #[serde(skip)]
    pub collection_name: String,

    /// Free-form description of the geofence collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Data provider the pricing plan applies to. Deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Input for `CreateMap`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMapInput {
    /// Name of the map resource.
    pub map_name: String,

    /// Connector settings of the map.
    pub configuration: MapConfiguration,

    /// Free-form description of the map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Tags attached to the map.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}

/// Input for `DeleteMap`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteMapInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,
}

/// Input for `DescribeMap`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeMapInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,
}

/// Input for `GetMapGlyphs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMapGlyphsInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,

    /// Comma-separated font names, e.g. `Noto Sans Regular,Arial Unicode MS Regular`.
    #[serde(skip)]
    pub font_stack: String,

    /// Glyph range, e.g. `0-255.pbf`.
    #[serde(skip)]
    pub font_unicode_range: String,
}

/// Input for `GetMapSprites`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMapSpritesInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,

    /// `sprites.png`, `sprites@2x.json` and so on.
    #[serde(skip)]
    pub file_name: String,
}

/// Input for `GetMapStyleDescriptor`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMapStyleDescriptorInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,
}

/// Input for `GetMapTile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetMapTileInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,

    /// Zoom level.
    #[serde(skip)]
    pub z: String,

    /// Tile column.
    #[serde(skip)]
    pub x: String,

    /// Tile row.
    #[serde(skip)]
    pub y: String,
}

/// Input for `ListMaps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMapsInput {
    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `UpdateMap`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateMapInput {
    /// Name of the map resource.
    #[serde(skip)]
    pub map_name: String,

    /// Free-form description of the map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Input for `CreatePlaceIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePlaceIndexInput {
    /// Name of the place index.
    pub index_name: String,

    /// `Esri` or `Here`.
    pub data_source: String,

    /// Connector settings of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,

    /// Free-form description of the place index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Tags attached to the place index.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}

/// Input for `DeletePlaceIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePlaceIndexInput {
    /// Name of the place index.
    #[serde(skip)]
    pub index_name: String,
}

/// Input for `DescribePlaceIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribePlaceIndexInput {
    /// Name of the place index.
    #[serde(skip)]
    pub index_name: String,
}

/// Input for `ListPlaceIndexes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPlaceIndexesInput {
    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `SearchPlaceIndexForPosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForPositionInput {
    /// Name of the place index.
    #[serde(skip)]
    pub index_name: String,

    /// Position as `[longitude, latitude]`.
    pub position: Vec<f64>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// BCP 47 language tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SearchPlaceIndexForPositionInput {
    #[must_use]
    pub fn new(index_name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            index_name: index_name.into(),
            position: vec![longitude, latitude],
            ..Self::default()
        }
    }
}

/// Input for `SearchPlaceIndexForText`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForTextInput {
    /// Name of the place index.
    #[serde(skip)]
    pub index_name: String,

    /// Address or place name to search for.
    pub text: String,

    /// Prefer results near this position. Exclusive with `filter_bbox`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bias_position: Vec<f64>,

    /// Only return results inside this bounding box.
    #[serde(rename = "FilterBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub filter_bbox: Vec<f64>,

    /// ISO 3166 alpha-3 country codes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_countries: Vec<String>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Preferred language of the results, as a BCP 47 tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SearchPlaceIndexForTextInput {
    #[must_use]
    pub fn new(index_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            index_name: index_name.into(),
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Input for `UpdatePlaceIndex`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePlaceIndexInput {
    /// Name of the place index.
    #[serde(skip)]
    pub index_name: String,

    /// Connector settings of the data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_configuration: Option<DataSourceConfiguration>,

    /// Free-form description of the place index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Input for `CalculateRoute`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteInput {
    /// Name of the route calculator.
    #[serde(skip)]
    pub calculator_name: String,

    /// Start as `[longitude, latitude]`.
    pub departure_position: Vec<f64>,

    /// End as `[longitude, latitude]`.
    pub destination_position: Vec<f64>,

    /// Up to 23 intermediate stops, visited in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoint_positions: Vec<Vec<f64>>,

    /// Mode of transport; `Car` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<TravelMode>,

    /// Departure time used for traffic-aware results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,

    /// Exclusive with `departure_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depart_now: Option<bool>,

    /// Unit of every distance in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,

    /// Return the line string of each leg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_leg_geometry: Option<bool>,

    /// Route preferences when travelling by car.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_mode_options: Option<CalculateRouteCarModeOptions>,

    /// Route preferences and truck profile when travelling by truck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_mode_options: Option<CalculateRouteTruckModeOptions>,
}

impl CalculateRouteInput {
    #[must_use]
    pub fn new(
        calculator_name: impl Into<String>,
        departure_position: Vec<f64>,
        destination_position: Vec<f64>,
    ) -> Self {
        Self {
            calculator_name: calculator_name.into(),
            departure_position,
            destination_position,
            ..Self::default()
        }
    }
}

/// Input for `CalculateRouteMatrix`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteMatrixInput {
    /// Name of the route calculator.
    #[serde(skip)]
    pub calculator_name: String,

    /// Start positions, one matrix row each.
    pub departure_positions: Vec<Vec<f64>>,

    /// End positions, one matrix column each.
    pub destination_positions: Vec<Vec<f64>>,

    /// Mode of transport; `Car` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_mode: Option<TravelMode>,

    /// Departure time used for traffic-aware results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<DateTime<Utc>>,

    /// Use current traffic; exclusive with `departure_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depart_now: Option<bool>,

    /// Unit of every distance in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,

    /// Route preferences when travelling by car.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_mode_options: Option<CalculateRouteCarModeOptions>,

    /// Route preferences and truck profile when travelling by truck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truck_mode_options: Option<CalculateRouteTruckModeOptions>,
}

/// Input for `CreateRouteCalculator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRouteCalculatorInput {
    /// Name of the route calculator.
    pub calculator_name: String,

    /// Data provider, such as `Esri` or `Here`.
    pub data_source: String,

    /// Free-form description of the route calculator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Tags attached to the route calculator.
    #[serde(default, skip_serializing_if = "Tags::is_empty")]
    pub tags: Tags,
}

/// Input for `DeleteRouteCalculator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteRouteCalculatorInput {
    /// Name of the route calculator.
    #[serde(skip)]
    pub calculator_name: String,
}

/// Input for `DescribeRouteCalculator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeRouteCalculatorInput {
    /// Name of the route calculator.
    #[serde(skip)]
    pub calculator_name: String,
}

/// Input for `ListRouteCalculators`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRouteCalculatorsInput {
    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `UpdateRouteCalculator`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRouteCalculatorInput {
    /// Name of the route calculator.
    #[serde(skip)]
    pub calculator_name: String,

    /// Free-form description of the route calculator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Input for `AssociateTrackerConsumer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateTrackerConsumerInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// ARN of the geofence collection that consumes the tracker's positions.
    pub consumer_arn: String,
}

/// Input for `BatchDeleteDevicePositionHistory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteDevicePositionHistoryInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// IDs of the devices.
    pub device_ids: Vec<String>,
}

/// Input for `BatchGetDevicePosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetDevicePositionInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// IDs of the devices.
    pub device_ids: Vec<String>,
}

/// Input for `BatchUpdateDevicePosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateDevicePositionInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// Position updates, up to 10.
    pub updates: Vec<DevicePositionUpdate>,
}

/// Input for `CreateTracker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTrackerInput {
    /// Name of the tracker.
    pub tracker_name: String,

    /// Free-form description of the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

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
}

/// Input for `DeleteTracker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteTrackerInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,
}

/// Input for `DescribeTracker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeTrackerInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,
}

/// Input for `DisassociateTrackerConsumer`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisassociateTrackerConsumerInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// ARN of the geofence collection to detach.
    #[serde(skip)]
    pub consumer_arn: String,
}

/// Input for `GetDevicePosition`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetDevicePositionInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// ID of the device.
    #[serde(skip)]
    pub device_id: String,
}

/// Input for `GetDevicePositionHistory`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDevicePositionHistoryInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// ID of the device.
    #[serde(skip)]
    pub device_id: String,

    /// Earliest sample time to return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_inclusive: Option<DateTime<Utc>>,

    /// Only return samples before this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time_exclusive: Option<DateTime<Utc>>,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `ListDevicePositions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDevicePositionsInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `ListTrackerConsumers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrackerConsumersInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `ListTrackers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrackersInput {
    /// Maximum number of items to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Pagination token from a previous response; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for `UpdateTracker`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTrackerInput {
    /// Name of the tracker.
    #[serde(skip)]
    pub tracker_name: String,

    /// Free-form description of the tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How the tracker filters position updates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_filtering: Option<PositionFiltering>,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Data provider the pricing plan applies to. Deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for `ListTagsForResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListTagsForResourceInput {
    /// ARN of the tagged resource.
    #[serde(skip)]
    pub resource_arn: String,
}

/// Input for `TagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    /// ARN of the tagged resource.
    #[serde(skip)]
    pub resource_arn: String,

    /// Tags attached to the resource.
    pub tags: Tags,
}

/// Input for `UntagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UntagResourceInput {
    /// ARN of the tagged resource.
    #[serde(skip)]
    pub resource_arn: String,

    /// Sent as repeated `tagKeys` query parameters.
    #[serde(skip)]
    pub tag_keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_keep_path_members_out_of_body() {
        let input = PutGeofenceInput {
            collection_name: "fences".to_owned(),
            geofence_id: "home".to_owned(),
            geometry: GeofenceGeometry::circle(vec![-123.1, 49.2], 50.0),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"Geometry": {"Circle": {"Center": [-123.1, 49.2], "Radius": 50.0}}})
        );
    }

    #[test]
    fn test_should_serialize_label_only_input_as_empty_object() {
        let input = DescribeMapInput {
            map_name: "streets".to_owned(),
        };
        assert_eq!(serde_json::to_string(&input).unwrap(), "{}");
    }

    #[test]
    fn test_should_serialize_search_text_with_bbox_names() {
        let mut input = SearchPlaceIndexForTextInput::new("places", "coffee");
        input.filter_bbox = vec![-123.2, 49.1, -123.0, 49.3];
        input.max_results = Some(5);
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "Text": "coffee",
                "FilterBBox": [-123.2, 49.1, -123.0, 49.3],
                "MaxResults": 5
            })
        );
    }

    #[test]
    fn test_should_serialize_truck_route_options() {
        let mut input = CalculateRouteInput::new("routes", vec![-123.1, 49.2], vec![-122.3, 47.6]);
        input.travel_mode = Some(TravelMode::Truck);
        input.truck_mode_options = Some(CalculateRouteTruckModeOptions {
            avoid_tolls: Some(true),
            weight: Some(crate::types::TruckWeight {
                total: Some(12_000.0),
                unit: Some(crate::types::VehicleWeightUnit::Kilograms),
            }),
            ..CalculateRouteTruckModeOptions::default()
        });

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["TravelMode"], "Truck");
        assert_eq!(value["TruckModeOptions"]["AvoidTolls"], true);
        assert_eq!(value["TruckModeOptions"]["Weight"]["Unit"], "Kilograms");
        assert!(value.get("CalculatorName").is_none());
        assert!(value.get("WaypointPositions").is_none());
    }
}
