//! Location operation enum and HTTP bindings.
//!
//! Each operation is bound to a method, a URI template and a host prefix.
//! The prefix separates the control plane (`cp.*`) from the data plane.

use std::fmt;

/// All Amazon Location service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationOperation {
    // Geofencing
    /// Delete geofences from a collection.
    BatchDeleteGeofence,
    /// Evaluate device positions against the geofences of a collection.
    BatchEvaluateGeofences,
    /// Create or replace geofences in a collection.
    BatchPutGeofence,
    /// Create a geofence collection.
    CreateGeofenceCollection,
    /// Delete a geofence collection.
    DeleteGeofenceCollection,
    /// Describe a geofence collection.
    DescribeGeofenceCollection,
    /// Fetch one geofence.
    GetGeofence,
    /// List geofence collections.
    ListGeofenceCollections,
    /// List the geofences of a collection.
    ListGeofences,
    /// Create or replace one geofence.
    PutGeofence,
    /// Update a geofence collection.
    UpdateGeofenceCollection,

    // Maps
    /// Create a map resource.
    CreateMap,
    /// Delete a map resource.
    DeleteMap,
    /// Describe a map resource.
    DescribeMap,
    /// Fetch a glyph range for a font stack.
    GetMapGlyphs,
    /// Fetch a sprite sheet or its index.
    GetMapSprites,
    /// Fetch the style descriptor of a map.
    GetMapStyleDescriptor,
    /// Fetch one map tile.
    GetMapTile,
    /// List map resources.
    ListMaps,
    /// Update a map resource.
    UpdateMap,

    // Places
    /// Create a place index.
    CreatePlaceIndex,
    /// Delete a place index.
    DeletePlaceIndex,
    /// Describe a place index.
    DescribePlaceIndex,
    /// List place indexes.
    ListPlaceIndexes,
    /// Reverse geocode a position.
    SearchPlaceIndexForPosition,
    /// Geocode free-form text.
    SearchPlaceIndexForText,
    /// Update a place index.
    UpdatePlaceIndex,

    // Routes
    /// Calculate a route between two positions.
    CalculateRoute,
    /// Calculate routes between every departure and every destination.
    CalculateRouteMatrix,
    /// Create a route calculator.
    CreateRouteCalculator,
    /// Delete a route calculator.
    DeleteRouteCalculator,
    /// Describe a route calculator.
    DescribeRouteCalculator,
    /// List route calculators.
    ListRouteCalculators,
    /// Update a route calculator.
    UpdateRouteCalculator,

    // Tracking
    /// Link a tracker to a geofence collection.
    AssociateTrackerConsumer,
    /// Delete the position history of devices.
    BatchDeleteDevicePositionHistory,
    /// Fetch the latest positions of several devices.
    BatchGetDevicePosition,
    /// Report device positions.
    BatchUpdateDevicePosition,
    /// Create a tracker.
    CreateTracker,
    /// Delete a tracker.
    DeleteTracker,
    /// Describe a tracker.
    DescribeTracker,
    /// Unlink a tracker from a geofence collection.
    DisassociateTrackerConsumer,
    /// Fetch the latest position of a device.
    GetDevicePosition,
    /// Fetch the position history of a device.
    GetDevicePositionHistory,
    /// List the latest positions of every device of a tracker.
    ListDevicePositions,
    /// List the geofence collections linked to a tracker.
    ListTrackerConsumers,
    /// List trackers.
    ListTrackers,
    /// Update a tracker.
    UpdateTracker,

    // Tagging
    /// List the tags of a resource.
    ListTagsForResource,
    /// Tag a resource.
    TagResource,
    /// Remove tags from a resource.
    UntagResource,
}

impl LocationOperation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 51] = [
        Self::BatchDeleteGeofence,
        Self::BatchEvaluateGeofences,
        Self::BatchPutGeofence,
        Self::CreateGeofenceCollection,
        Self::DeleteGeofenceCollection,
        Self::DescribeGeofenceCollection,
        Self::GetGeofence,
        Self::ListGeofenceCollections,
        Self::ListGeofences,
        Self::PutGeofence,
        Self::UpdateGeofenceCollection,
        Self::CreateMap,
        Self::DeleteMap,
        Self::DescribeMap,
        Self::GetMapGlyphs,
        Self::GetMapSprites,
        Self::GetMapStyleDescriptor,
        Self::GetMapTile,
        Self::ListMaps,
        Self::UpdateMap,
        Self::CreatePlaceIndex,
        Self::DeletePlaceIndex,
        Self::DescribePlaceIndex,
        Self::ListPlaceIndexes,
        Self::SearchPlaceIndexForPosition,
        Self::SearchPlaceIndexForText,
        Self::UpdatePlaceIndex,
        Self::CalculateRoute,
        Self::CalculateRouteMatrix,
        Self::CreateRouteCalculator,
        Self::DeleteRouteCalculator,
        Self::DescribeRouteCalculator,
        Self::ListRouteCalculators,
        Self::UpdateRouteCalculator,
        Self::AssociateTrackerConsumer,
        Self::BatchDeleteDevicePositionHistory,
        Self::BatchGetDevicePosition,
        Self::BatchUpdateDevicePosition,
        Self::CreateTracker,
        Self::DeleteTracker,
        Self::DescribeTracker,
        Self::DisassociateTrackerConsumer,
        Self::GetDevicePosition,
        Self::GetDevicePositionHistory,
        Self::ListDevicePositions,
        Self::ListTrackerConsumers,
        Self::ListTrackers,
        Self::UpdateTracker,
        Self::ListTagsForResource,
        Self::TagResource,
        Self::UntagResource,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BatchDeleteGeofence => "BatchDeleteGeofence",
            Self::BatchEvaluateGeofences => "BatchEvaluateGeofences",
            Self::BatchPutGeofence => "BatchPutGeofence",
            Self::CreateGeofenceCollection => "CreateGeofenceCollection",
            Self::DeleteGeofenceCollection => "DeleteGeofenceCollection",
            Self::DescribeGeofenceCollection => "DescribeGeofenceCollection",
            Self::GetGeofence => "GetGeofence",
            Self::ListGeofenceCollections => "ListGeofenceCollections",
            Self::ListGeofences => "ListGeofences",
            Self::PutGeofence => "PutGeofence",
            Self::UpdateGeofenceCollection => "UpdateGeofenceCollection",
            Self::CreateMap => "CreateMap",
            Self::DeleteMap => "DeleteMap",
            Self::DescribeMap => "DescribeMap",
            Self::GetMapGlyphs => "GetMapGlyphs",
            Self::GetMapSprites => "GetMapSprites",
            Self::GetMapStyleDescriptor => "GetMapStyleDescriptor",
            Self::GetMapTile => "GetMapTile",
            Self::ListMaps => "ListMaps",
            Self::UpdateMap => "UpdateMap",
            Self::CreatePlaceIndex => "CreatePlaceIndex",
            Self::DeletePlaceIndex => "DeletePlaceIndex",
            Self::DescribePlaceIndex => "DescribePlaceIndex",
            Self::ListPlaceIndexes => "ListPlaceIndexes",
            Self::SearchPlaceIndexForPosition => "SearchPlaceIndexForPosition",
            Self::SearchPlaceIndexForText => "SearchPlaceIndexForText",
            Self::UpdatePlaceIndex => "UpdatePlaceIndex",
            Self::CalculateRoute => "CalculateRoute",
            Self::CalculateRouteMatrix => "CalculateRouteMatrix",
            Self::CreateRouteCalculator => "CreateRouteCalculator",
            Self::DeleteRouteCalculator => "DeleteRouteCalculator",
            Self::DescribeRouteCalculator => "DescribeRouteCalculator",
            Self::ListRouteCalculators => "ListRouteCalculators",
            Self::UpdateRouteCalculator => "UpdateRouteCalculator",
            Self::AssociateTrackerConsumer => "AssociateTrackerConsumer",
            Self::BatchDeleteDevicePositionHistory => "BatchDeleteDevicePositionHistory",
            Self::BatchGetDevicePosition => "BatchGetDevicePosition",
            Self::BatchUpdateDevicePosition => "BatchUpdateDevicePosition",
            Self::CreateTracker => "CreateTracker",
            Self::DeleteTracker => "DeleteTracker",
            Self::DescribeTracker => "DescribeTracker",
            Self::DisassociateTrackerConsumer => "DisassociateTrackerConsumer",
            Self::GetDevicePosition => "GetDevicePosition",
            Self::GetDevicePositionHistory => "GetDevicePositionHistory",
            Self::ListDevicePositions => "ListDevicePositions",
            Self::ListTrackerConsumers => "ListTrackerConsumers",
            Self::ListTrackers => "ListTrackers",
            Self::UpdateTracker => "UpdateTracker",
            Self::ListTagsForResource => "ListTagsForResource",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
        }
    }

    /// Parse an operation name string into a `LocationOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// HTTP method of the operation.
    #[must_use]
    pub fn method(&self) -> http::Method {
        match self.binding().0 {
            Verb::Get => http::Method::GET,
            Verb::Post => http::Method::POST,
            Verb::Put => http::Method::PUT,
            Verb::Patch => http::Method::PATCH,
            Verb::Delete => http::Method::DELETE,
        }
    }

    /// URI template, with `{Label}` placeholders for path members.
    #[must_use]
    pub fn uri(&self) -> &'static str {
        self.binding().1
    }

    /// Prefix prepended to the endpoint host, e.g. `cp.maps.`.
    #[must_use]
    pub fn host_prefix(&self) -> &'static str {
        self.binding().2
    }

    fn binding(self) -> (Verb, &'static str, &'static str) {
        match self {
            Self::BatchDeleteGeofence => (
                Verb::Post,
                "/geofencing/v0/collections/{CollectionName}/delete-geofences",
                "geofencing.",
            ),
            Self::BatchEvaluateGeofences => (
                Verb::Post,
                "/geofencing/v0/collections/{CollectionName}/positions",
                "geofencing.",
            ),
            Self::BatchPutGeofence => (
                Verb::Post,
                "/geofencing/v0/collections/{CollectionName}/put-geofences",
                "geofencing.",
            ),
            Self::CreateGeofenceCollection => (
                Verb::Post,
                "/geofencing/v0/collections",
                "cp.geofencing.",
            ),
            Self::DeleteGeofenceCollection => (
                Verb::Delete,
                "/geofencing/v0/collections/{CollectionName}",
                "cp.geofencing.",
            ),
            Self::DescribeGeofenceCollection => (
                Verb::Get,
                "/geofencing/v0/collections/{CollectionName}",
                "cp.geofencing.",
            ),
            Self::GetGeofence => (
                Verb::Get,
                "/geofencing/v0/collections/{CollectionName}/geofences/{GeofenceId}",
                "geofencing.",
            ),
            Self::ListGeofenceCollections => (
                Verb::Post,
                "/geofencing/v0/list-collections",
                "cp.geofencing.",
            ),
            Self::ListGeofences => (
                Verb::Post,
                "/geofencing/v0/collections/{CollectionName}/list-geofences",
                "geofencing.",
            ),
            Self::PutGeofence => (
                Verb::Put,
                "/geofencing/v0/collections/{CollectionName}/geofences/{GeofenceId}",
                "geofencing.",
            ),
            Self::UpdateGeofenceCollection => (
                Verb::Patch,
                "/geofencing/v0/collections/{CollectionName}",
                "cp.geofencing.",
            ),
            Self::CreateMap => (Verb::Post, "/maps/v0/maps", "cp.maps."),
            Self::DeleteMap => (Verb::Delete, "/maps/v0/maps/{MapName}", "cp.maps."),
            Self::DescribeMap => (Verb::Get, "/maps/v0/maps/{MapName}", "cp.maps."),
            Self::GetMapGlyphs => (
                Verb::Get,
                "/maps/v0/maps/{MapName}/glyphs/{FontStack}/{FontUnicodeRange}",
                "maps.",
            ),
            Self::GetMapSprites => (
                Verb::Get,
                "/maps/v0/maps/{MapName}/sprites/{FileName}",
                "maps.",
            ),
            Self::GetMapStyleDescriptor => (
                Verb::Get,
                "/maps/v0/maps/{MapName}/style-descriptor",
                "maps.",
            ),
            Self::GetMapTile => (Verb::Get, "/maps/v0/maps/{MapName}/tiles/{Z}/{X}/{Y}", "maps."),
            Self::ListMaps => (Verb::Post, "/maps/v0/list-maps", "cp.maps."),
            Self::UpdateMap => (Verb::Patch, "/maps/v0/maps/{MapName}", "cp.maps."),
            Self::CreatePlaceIndex => (Verb::Post, "/places/v0/indexes", "cp.places."),
            Self::DeletePlaceIndex => (
                Verb::Delete,
                "/places/v0/indexes/{IndexName}",
                "cp.places.",
            ),
            Self::DescribePlaceIndex => (Verb::Get, "/places/v0/indexes/{IndexName}", "cp.places."),
            Self::ListPlaceIndexes => (Verb::Post, "/places/v0/list-indexes", "cp.places."),
            Self::SearchPlaceIndexForPosition => (
                Verb::Post,
                "/places/v0/indexes/{IndexName}/search/position",
                "places.",
            ),
            Self::SearchPlaceIndexForText => (
                Verb::Post,
                "/places/v0/indexes/{IndexName}/search/text",
                "places.",
            ),
            Self::UpdatePlaceIndex => (Verb::Patch, "/places/v0/indexes/{IndexName}", "cp.places."),
            Self::CalculateRoute => (
                Verb::Post,
                "/routes/v0/calculators/{CalculatorName}/calculate/route",
                "routes.",
            ),
            Self::CalculateRouteMatrix => (
                Verb::Post,
                "/routes/v0/calculators/{CalculatorName}/calculate/route-matrix",
                "routes.",
            ),
            Self::CreateRouteCalculator => (Verb::Post, "/routes/v0/calculators", "cp.routes."),
            Self::DeleteRouteCalculator => (
                Verb::Delete,
                "/routes/v0/calculators/{CalculatorName}",
                "cp.routes.",
            ),
            Self::DescribeRouteCalculator => (
                Verb::Get,
                "/routes/v0/calculators/{CalculatorName}",
                "cp.routes.",
            ),
            Self::ListRouteCalculators => (Verb::Post, "/routes/v0/list-calculators", "cp.routes."),
            Self::UpdateRouteCalculator => (
                Verb::Patch,
                "/routes/v0/calculators/{CalculatorName}",
                "cp.routes.",
            ),
            Self::AssociateTrackerConsumer => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/consumers",
                "cp.tracking.",
            ),
            Self::BatchDeleteDevicePositionHistory => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/delete-positions",
                "tracking.",
            ),
            Self::BatchGetDevicePosition => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/get-positions",
                "tracking.",
            ),
            Self::BatchUpdateDevicePosition => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/positions",
                "tracking.",
            ),
            Self::CreateTracker => (Verb::Post, "/tracking/v0/trackers", "cp.tracking."),
            Self::DeleteTracker => (
                Verb::Delete,
                "/tracking/v0/trackers/{TrackerName}",
                "cp.tracking.",
            ),
            Self::DescribeTracker => (
                Verb::Get,
                "/tracking/v0/trackers/{TrackerName}",
                "cp.tracking.",
            ),
            Self::DisassociateTrackerConsumer => (
                Verb::Delete,
                "/tracking/v0/trackers/{TrackerName}/consumers/{ConsumerArn}",
                "cp.tracking.",
            ),
            Self::GetDevicePosition => (
                Verb::Get,
                "/tracking/v0/trackers/{TrackerName}/devices/{DeviceId}/positions/latest",
                "tracking.",
            ),
            Self::GetDevicePositionHistory => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/devices/{DeviceId}/list-positions",
                "tracking.",
            ),
            Self::ListDevicePositions => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/list-positions",
                "tracking.",
            ),
            Self::ListTrackerConsumers => (
                Verb::Post,
                "/tracking/v0/trackers/{TrackerName}/list-consumers",
                "cp.tracking.",
            ),
            Self::ListTrackers => (Verb::Post, "/tracking/v0/list-trackers", "cp.tracking."),
            Self::UpdateTracker => (
                Verb::Patch,
                "/tracking/v0/trackers/{TrackerName}",
                "cp.tracking.",
            ),
            Self::ListTagsForResource => (Verb::Get, "/tags/{ResourceArn}", "metadata."),
            Self::TagResource => (Verb::Post, "/tags/{ResourceArn}", "metadata."),
            Self::UntagResource => (Verb::Delete, "/tags/{ResourceArn}", "metadata."),
        }
    }
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for LocationOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
