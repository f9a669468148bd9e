//! Shared Location shapes and enums.
//!
//! A position is a `[longitude, latitude]` pair of WGS 84 degrees and a
//! bounding box is `[min_x, min_y, max_x, max_y]`. Both stay plain vectors
//! here because that is how they travel on the wire.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stratus_core::string_enum;

/// Resource tags.
pub type Tags = HashMap<String, String>;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

string_enum! {
    /// Billing plan of a resource.
    pub enum PricingPlan {
        RequestBasedUsage => "RequestBasedUsage",
        MobileAssetTracking => "MobileAssetTracking",
        MobileAssetManagement => "MobileAssetManagement",
    }
}

string_enum! {
    /// How a tracker thins out incoming position updates.
    pub enum PositionFiltering {
        TimeBased => "TimeBased",
        DistanceBased => "DistanceBased",
        AccuracyBased => "AccuracyBased",
    }
}

string_enum! {
    pub enum DistanceUnit {
        Kilometers => "Kilometers",
        Miles => "Miles",
    }
}

string_enum! {
    pub enum TravelMode {
        Car => "Car",
        Truck => "Truck",
        Walking => "Walking",
    }
}

string_enum! {
    pub enum DimensionUnit {
        Meters => "Meters",
        Feet => "Feet",
    }
}

string_enum! {
    pub enum VehicleWeightUnit {
        Kilograms => "Kilograms",
        Pounds => "Pounds",
    }
}

string_enum! {
    /// Whether place index results may be stored.
    pub enum IntendedUse {
        SingleUse => "SingleUse",
        Storage => "Storage",
    }
}

string_enum! {
    /// Error code of a single failed entry in a batch operation.
    pub enum BatchItemErrorCode {
        AccessDeniedError => "AccessDeniedError",
        ConflictError => "ConflictError",
        InternalServerError => "InternalServerError",
        ResourceNotFoundError => "ResourceNotFoundError",
        ThrottlingError => "ThrottlingError",
        ValidationError => "ValidationError",
    }
}

string_enum! {
    /// Why a single route of a route matrix could not be calculated.
    pub enum RouteMatrixErrorCode {
        RouteNotFound => "RouteNotFound",
        RouteTooLong => "RouteTooLong",
        PositionsNotFound => "PositionsNotFound",
        DestinationPositionNotFound => "DestinationPositionNotFound",
        DeparturePositionNotFound => "DeparturePositionNotFound",
        OtherValidationError => "OtherValidationError",
    }
}

// ---------------------------------------------------------------------------
// Resource configuration
// ---------------------------------------------------------------------------

/// Style of a map resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapConfiguration {
    /// Map style name, e.g. `VectorEsriStreets`.
    #[serde(default)]
    pub style: String,
}

impl MapConfiguration {
    #[must_use]
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }
}

/// How place search results may be used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DataSourceConfiguration {
    /// Whether results are used once or stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intended_use: Option<IntendedUse>,
}

// ---------------------------------------------------------------------------
// Geofences
// ---------------------------------------------------------------------------

/// A circular geofence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Circle {
    /// Center as `[longitude, latitude]`.
    #[serde(default)]
    pub center: Vec<f64>,

    /// Radius in meters.
    #[serde(default)]
    pub radius: f64,
}

/// Geometry of a geofence: a polygon or a circle.
///
/// A polygon is a list of linear rings; the first ring is the exterior and
/// is counter-clockwise, the rest are clockwise holes. Each ring repeats its
/// first vertex at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeofenceGeometry {
    /// Linear rings of the polygon.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polygon: Vec<Vec<Vec<f64>>>,

    /// A circle, instead of a polygon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circle: Option<Circle>,
}

impl GeofenceGeometry {
    #[must_use]
    pub fn polygon(rings: Vec<Vec<Vec<f64>>>) -> Self {
        Self {
            polygon: rings,
            circle: None,
        }
    }

    #[must_use]
    pub fn circle(center: Vec<f64>, radius: f64) -> Self {
        Self {
            polygon: Vec::new(),
            circle: Some(Circle { center, radius }),
        }
    }
}

/// One geofence to store with `BatchPutGeofence`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutGeofenceRequestEntry {
    /// ID of the geofence, unique within its collection.
    pub geofence_id: String,

    /// Geometry of the geofence.
    pub geometry: GeofenceGeometry,
}

/// A geofence stored by `BatchPutGeofence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutGeofenceSuccess {
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

/// A geofence, as listed by `ListGeofences`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGeofenceResponseEntry {
    /// ID of the geofence, unique within its collection.
    #[serde(default)]
    pub geofence_id: String,

    /// Geometry of the geofence.
    #[serde(default)]
    pub geometry: GeofenceGeometry,

    /// `ACTIVE`, `PENDING`, `FAILED`, `DELETED` or `DELETING`.
    #[serde(default)]
    pub status: String,

    /// When the geofence was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the geofence was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Batch item errors
// ---------------------------------------------------------------------------

/// Why one item of a batch failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchItemError {
    /// Error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<BatchItemErrorCode>,

    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A device whose history could not be deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteDevicePositionHistoryError {
    /// ID of the device.
    #[serde(default)]
    pub device_id: String,

    /// Why the item failed.
    #[serde(default)]
    pub error: BatchItemError,
}

/// A geofence that could not be deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchDeleteGeofenceError {
    /// ID of the geofence, unique within its collection.
    #[serde(default)]
    pub geofence_id: String,

    /// Why the item failed.
    #[serde(default)]
    pub error: BatchItemError,
}

/// A position that could not be evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchEvaluateGeofencesError {
    /// ID of the device.
    #[serde(default)]
    pub device_id: String,

    /// When the device reported the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,

    /// Why the item failed.
    #[serde(default)]
    pub error: BatchItemError,
}

/// A device whose position could not be fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetDevicePositionError {
    /// ID of the device.
    #[serde(default)]
    pub device_id: String,

    /// Why the item failed.
    #[serde(default)]
    pub error: BatchItemError,
}

/// A geofence that could not be stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchPutGeofenceError {
    /// ID of the geofence, unique within its collection.
    #[serde(default)]
    pub geofence_id: String,

    /// Why the item failed.
    #[serde(default)]
    pub error: BatchItemError,
}

/// A position update that was rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchUpdateDevicePositionError {
    /// ID of the device.
    #[serde(default)]
    pub device_id: String,

    /// When the device reported the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,

    /// Why the item failed.
    #[serde(default)]
    pub error: BatchItemError,
}

// ---------------------------------------------------------------------------
// Tracking
// ---------------------------------------------------------------------------

/// Estimated accuracy of a reported position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionalAccuracy {
    /// Horizontal accuracy radius in meters.
    #[serde(default)]
    pub horizontal: f64,
}

/// A position reported by a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DevicePositionUpdate {
    /// ID of the device.
    pub device_id: String,

    /// Position as `[longitude, latitude]`.
    pub position: Vec<f64>,

    /// When the device reported the position.
    pub sample_time: DateTime<Utc>,

    /// Estimated accuracy of the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,

    /// Up to three free-form key-value pairs reported with the position.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
}

impl DevicePositionUpdate {
    #[must_use]
    pub fn new(device_id: impl Into<String>, position: Vec<f64>, sample_time: DateTime<Utc>) -> Self {
        Self {
            device_id: device_id.into(),
            position,
            sample_time,
            accuracy: None,
            position_properties: HashMap::new(),
        }
    }
}

/// A stored device position as returned by the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DevicePosition {
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
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
}

/// Latest position of a device, as listed by `ListDevicePositions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDevicePositionsResponseEntry {
    /// ID of the device.
    #[serde(default)]
    pub device_id: String,

    /// Position as `[longitude, latitude]`.
    #[serde(default)]
    pub position: Vec<f64>,

    /// When the device reported the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_time: Option<DateTime<Utc>>,

    /// Estimated accuracy of the position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<PositionalAccuracy>,

    /// Up to three free-form key-value pairs reported with the position.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub position_properties: HashMap<String, String>,
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

/// Route preferences for cars.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteCarModeOptions {
    /// Avoid ferries when possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_ferries: Option<bool>,

    /// Avoid toll roads when possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_tolls: Option<bool>,
}

/// Size of a truck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TruckDimensions {
    /// Height of the truck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Length of the truck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,

    /// Width of the truck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Unit of the values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<DimensionUnit>,
}

/// Weight of a truck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TruckWeight {
    /// Total weight of the truck.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,

    /// Unit of the values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<VehicleWeightUnit>,
}

/// Route preferences and profile of a truck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteTruckModeOptions {
    /// Avoid ferries when possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_ferries: Option<bool>,

    /// Avoid toll roads when possible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avoid_tolls: Option<bool>,

    /// Size of the truck, for road restrictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<TruckDimensions>,

    /// Weight of the truck, for road restrictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<TruckWeight>,
}

/// Shape of a leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LegGeometry {
    /// Points along the leg, as `[longitude, latitude]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_string: Vec<Vec<f64>>,
}

/// One maneuver within a leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Step {
    /// Start as `[longitude, latitude]`.
    #[serde(default)]
    pub start_position: Vec<f64>,

    /// End as `[longitude, latitude]`.
    #[serde(default)]
    pub end_position: Vec<f64>,

    /// Distance in the unit of the summary.
    #[serde(default)]
    pub distance: f64,

    /// Travel time in seconds.
    #[serde(default)]
    pub duration_seconds: f64,

    /// Index of the step's first point in the leg's `LineString`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry_offset: Option<i32>,
}

/// The route between two consecutive positions (departure, waypoints,
/// destination).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Leg {
    /// Start as `[longitude, latitude]`.
    #[serde(default)]
    pub start_position: Vec<f64>,

    /// End as `[longitude, latitude]`.
    #[serde(default)]
    pub end_position: Vec<f64>,

    /// Distance in the unit of the summary.
    #[serde(default)]
    pub distance: f64,

    /// Travel time in seconds.
    #[serde(default)]
    pub duration_seconds: f64,

    /// Shape of the leg, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LegGeometry>,

    /// Maneuvers along the leg.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Totals of a calculated route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteSummary {
    /// Bounding box of the whole route.
    #[serde(rename = "RouteBBox", default)]
    pub route_bbox: Vec<f64>,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Distance in the unit of the summary.
    #[serde(default)]
    pub distance: f64,

    /// Travel time in seconds.
    #[serde(default)]
    pub duration_seconds: f64,

    /// Unit of every distance in the response.
    #[serde(default)]
    pub distance_unit: DistanceUnit,
}

/// Why one cell of a route matrix has no route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteMatrixEntryError {
    /// Error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<RouteMatrixErrorCode>,

    /// Human-readable error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One cell of a route matrix. Either `distance`/`duration_seconds` or
/// `error` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteMatrixEntry {
    /// Distance in the unit of the summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Travel time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,

    /// Why the item failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RouteMatrixEntryError>,
}

/// Totals of a route matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculateRouteMatrixSummary {
    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Unit of every distance in the response.
    #[serde(default)]
    pub distance_unit: DistanceUnit,

    /// Number of cells with an error.
    #[serde(default)]
    pub error_count: i32,

    /// Number of cells in the matrix.
    #[serde(default)]
    pub route_count: i32,
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

/// Position of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaceGeometry {
    /// Position as `[longitude, latitude]`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub point: Vec<f64>,
}

/// Time zone of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeZone {
    /// IANA time zone name, e.g. `America/Vancouver`.
    #[serde(default)]
    pub name: String,

    /// Offset from UTC in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
}

/// A geocoded place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Place {
    /// Full display address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Position of the place.
    #[serde(default)]
    pub geometry: PlaceGeometry,

    /// House number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_number: Option<String>,

    /// Street name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Neighborhood or district.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,

    /// City or town.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,

    /// County or equivalent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_region: Option<String>,

    /// State or province.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// ISO 3166 alpha-3 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Whether the position was interpolated from an address range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpolated: Option<bool>,

    /// Time zone of the place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
}

/// A place near the query position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchForPositionResult {
    /// The matched place.
    #[serde(default)]
    pub place: Place,

    /// Distance in meters from the queried position.
    #[serde(default)]
    pub distance: f64,
}

/// A place matching the query text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchForTextResult {
    /// The matched place.
    #[serde(default)]
    pub place: Place,

    /// Distance in meters from the bias position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,

    /// Relative match confidence between 0 and 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f64>,
}

/// Echo of a reverse geocoding request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForPositionSummary {
    /// The query position.
    #[serde(default)]
    pub position: Vec<f64>,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Result limit of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Language of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Echo of a geocoding request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchPlaceIndexForTextSummary {
    /// The query text.
    #[serde(default)]
    pub text: String,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Position the results were biased toward.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bias_position: Vec<f64>,

    /// Bounding box the results were limited to.
    #[serde(rename = "FilterBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub filter_bbox: Vec<f64>,

    /// ISO 3166 alpha-3 country codes the results were limited to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_countries: Vec<String>,

    /// Bounding box of the returned results.
    #[serde(rename = "ResultBBox", default, skip_serializing_if = "Vec::is_empty")]
    pub result_bbox: Vec<f64>,

    /// Result limit of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,

    /// Language of the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

// ---------------------------------------------------------------------------
// Resource listings
// ---------------------------------------------------------------------------

/// A geofence collection, as listed by `ListGeofenceCollections`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGeofenceCollectionsResponseEntry {
    /// Name of the geofence collection.
    #[serde(default)]
    pub collection_name: String,

    /// Free-form description of the geofence collection.
    #[serde(default)]
    pub description: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Data provider the pricing plan applies to. Deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,

    /// When the geofence collection was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the geofence collection was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// A map resource, as listed by `ListMaps`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListMapsResponseEntry {
    /// Name of the map resource.
    #[serde(default)]
    pub map_name: String,

    /// Free-form description of the map.
    #[serde(default)]
    pub description: String,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// When the map was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the map was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// A place index, as listed by `ListPlaceIndexes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPlaceIndexesResponseEntry {
    /// Name of the place index.
    #[serde(default)]
    pub index_name: String,

    /// Free-form description of the place index.
    #[serde(default)]
    pub description: String,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// When the place index was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the place index was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// A route calculator, as listed by `ListRouteCalculators`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRouteCalculatorsResponseEntry {
    /// Name of the route calculator.
    #[serde(default)]
    pub calculator_name: String,

    /// Free-form description of the route calculator.
    #[serde(default)]
    pub description: String,

    /// Data provider, such as `Esri` or `Here`.
    #[serde(default)]
    pub data_source: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// When the route calculator was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the route calculator was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

/// A tracker, as listed by `ListTrackers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTrackersResponseEntry {
    /// Name of the tracker.
    #[serde(default)]
    pub tracker_name: String,

    /// Free-form description of the tracker.
    #[serde(default)]
    pub description: String,

    /// Billing plan. Deprecated by the service; kept for older resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan: Option<PricingPlan>,

    /// Data provider the pricing plan applies to. Deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_plan_data_source: Option<String>,

    /// When the tracker was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    /// When the tracker was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}
