//! The Location client facade.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use stratus_auth::CredentialsProvider;
use stratus_core::ClientConfig;
use stratus_http::{BuildError, DispatchError, Pipeline, SdkError, WireRequest};
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
use stratus_location_model::output::{
    AssociateTrackerConsumerOutput, BatchDeleteDevicePositionHistoryOutput,
    BatchDeleteGeofenceOutput, BatchEvaluateGeofencesOutput, BatchGetDevicePositionOutput,
    BatchPutGeofenceOutput, BatchUpdateDevicePositionOutput, CalculateRouteMatrixOutput,
    CalculateRouteOutput, CreateGeofenceCollectionOutput, CreateMapOutput, CreatePlaceIndexOutput,
    CreateRouteCalculatorOutput, CreateTrackerOutput, DeleteGeofenceCollectionOutput,
    DeleteMapOutput, DeletePlaceIndexOutput, DeleteRouteCalculatorOutput, DeleteTrackerOutput,
    DescribeGeofenceCollectionOutput, DescribeMapOutput, DescribePlaceIndexOutput,
    DescribeRouteCalculatorOutput, DescribeTrackerOutput, DisassociateTrackerConsumerOutput,
    GetDevicePositionHistoryOutput, GetDevicePositionOutput, GetGeofenceOutput,
    ListDevicePositionsOutput, ListGeofenceCollectionsOutput, ListGeofencesOutput,
    ListMapsOutput, ListPlaceIndexesOutput, ListRouteCalculatorsOutput, ListTagsForResourceOutput,
    ListTrackerConsumersOutput, ListTrackersOutput, MapBlobOutput, PutGeofenceOutput,
    SearchPlaceIndexForPositionOutput, SearchPlaceIndexForTextOutput, TagResourceOutput,
    UntagResourceOutput, UpdateGeofenceCollectionOutput, UpdateMapOutput, UpdatePlaceIndexOutput,
    UpdateRouteCalculatorOutput, UpdateTrackerOutput,
};
use stratus_location_model::{LocationError, LocationOperation};

use crate::marshall::{self, METADATA};
use crate::unmarshall;

/// Result of a Location operation.
pub type LocationResult<T> = Result<T, SdkError<LocationError>>;

/// Client for the Amazon Location service.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct LocationClient {
    pipeline: Pipeline,
    credentials: Option<Arc<dyn CredentialsProvider>>,
}

impl LocationClient {
    /// Create a client with the default transport and credentials chain.
    pub fn new(config: ClientConfig) -> Result<Self, DispatchError> {
        Ok(Self::with_pipeline(Pipeline::new(config, &METADATA)?))
    }

    /// Create a client from the environment, honouring `AWS_ENDPOINT_URL_LOCATION`.
    pub fn from_env() -> Result<Self, DispatchError> {
        let config = ClientConfig::from_env()
            .with_service_endpoint(&METADATA.env_id(), |key| std::env::var(key).ok());
        Self::new(config)
    }

    /// Create a client over a preconfigured pipeline.
    #[must_use]
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self {
            pipeline,
            credentials: None,
        }
    }

    /// A client that signs its calls with `provider` instead of the
    /// pipeline's credentials. The connection pool is shared.
    #[must_use]
    pub fn with_credentials(&self, provider: impl CredentialsProvider + 'static) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            credentials: Some(Arc::new(provider)),
        }
    }

    /// The underlying pipeline.
    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    async fn call<O: DeserializeOwned>(
        &self,
        operation: LocationOperation,
        request: impl FnOnce() -> Result<WireRequest, BuildError>,
    ) -> LocationResult<O> {
        self.pipeline
            .invoke_json(operation.as_str(), self.credentials.as_deref(), request)
            .await
    }

    async fn call_blob(
        &self,
        operation: LocationOperation,
        request: impl FnOnce() -> Result<WireRequest, BuildError>,
    ) -> LocationResult<MapBlobOutput> {
        let response = self
            .pipeline
            .invoke::<LocationError, _>(operation.as_str(), self.credentials.as_deref(), request)
            .await?;
        Ok(unmarshall::blob_output(response))
    }

    // -- Geofencing --

    /// Delete geofences from a collection.
    pub async fn batch_delete_geofence(
        &self,
        input: BatchDeleteGeofenceInput,
    ) -> LocationResult<BatchDeleteGeofenceOutput> {
        self.call(LocationOperation::BatchDeleteGeofence, || marshall::batch_delete_geofence(&input))
            .await
    }

    /// Evaluate device positions against the geofences of a collection.
    pub async fn batch_evaluate_geofences(
        &self,
        input: BatchEvaluateGeofencesInput,
    ) -> LocationResult<BatchEvaluateGeofencesOutput> {
        self.call(
            LocationOperation::BatchEvaluateGeofences,
            || marshall::batch_evaluate_geofences(&input),
        )
        .await
    }

    /// Create or replace geofences in a collection.
    pub async fn batch_put_geofence(
        &self,
        input: BatchPutGeofenceInput,
    ) -> LocationResult<BatchPutGeofenceOutput> {
        self.call(LocationOperation::BatchPutGeofence, || marshall::batch_put_geofence(&input)).await
    }

    /// Create a geofence collection.
    pub async fn create_geofence_collection(
        &self,
        input: CreateGeofenceCollectionInput,
    ) -> LocationResult<CreateGeofenceCollectionOutput> {
        self.call(
            LocationOperation::CreateGeofenceCollection,
            || marshall::create_geofence_collection(&input),
        )
        .await
    }

    /// Delete a geofence collection.
    pub async fn delete_geofence_collection(
        &self,
        input: DeleteGeofenceCollectionInput,
    ) -> LocationResult<DeleteGeofenceCollectionOutput> {
        self.call(
            LocationOperation::DeleteGeofenceCollection,
            || marshall::delete_geofence_collection(&input),
        )
        .await
    }

    /// Describe a geofence collection.
    pub async fn describe_geofence_collection(
        &self,
        input: DescribeGeofenceCollectionInput,
    ) -> LocationResult<DescribeGeofenceCollectionOutput> {
        self.call(
            LocationOperation::DescribeGeofenceCollection,
            || marshall::describe_geofence_collection(&input),
        )
        .await
    }

    /// Fetch one geofence.
    pub async fn get_geofence(&self, input: GetGeofenceInput) -> LocationResult<GetGeofenceOutput> {
        self.call(LocationOperation::GetGeofence, || marshall::get_geofence(&input)).await
    }

    /// List geofence collections.
    pub async fn list_geofence_collections(
        &self,
        input: ListGeofenceCollectionsInput,
    ) -> LocationResult<ListGeofenceCollectionsOutput> {
        self.call(
            LocationOperation::ListGeofenceCollections,
            || marshall::list_geofence_collections(&input),
        )
        .await
    }

    /// List the geofences of a collection.
    pub async fn list_geofences(
        &self,
        input: ListGeofencesInput,
    ) -> LocationResult<ListGeofencesOutput> {
        self.call(LocationOperation::ListGeofences, || marshall::list_geofences(&input)).await
    }

    /// Create or replace one geofence.
    pub async fn put_geofence(&self, input: PutGeofenceInput) -> LocationResult<PutGeofenceOutput> {
        self.call(LocationOperation::PutGeofence, || marshall::put_geofence(&input)).await
    }

    /// Update a geofence collection.
    pub async fn update_geofence_collection(
        &self,
        input: UpdateGeofenceCollectionInput,
    ) -> LocationResult<UpdateGeofenceCollectionOutput> {
        self.call(
            LocationOperation::UpdateGeofenceCollection,
            || marshall::update_geofence_collection(&input),
        )
        .await
    }

    // -- Maps --

    /// Create a map resource.
    pub async fn create_map(&self, input: CreateMapInput) -> LocationResult<CreateMapOutput> {
        self.call(LocationOperation::CreateMap, || marshall::create_map(&input)).await
    }

    /// Delete a map resource.
    pub async fn delete_map(&self, input: DeleteMapInput) -> LocationResult<DeleteMapOutput> {
        self.call(LocationOperation::DeleteMap, || marshall::delete_map(&input)).await
    }

    /// Describe a map resource.
    pub async fn describe_map(&self, input: DescribeMapInput) -> LocationResult<DescribeMapOutput> {
        self.call(LocationOperation::DescribeMap, || marshall::describe_map(&input)).await
    }

    /// Fetch a glyph range for a font stack.
    pub async fn get_map_glyphs(&self, input: GetMapGlyphsInput) -> LocationResult<MapBlobOutput> {
        self.call_blob(LocationOperation::GetMapGlyphs, || marshall::get_map_glyphs(&input)).await
    }

    /// Fetch a sprite sheet or its index.
    pub async fn get_map_sprites(
        &self,
        input: GetMapSpritesInput,
    ) -> LocationResult<MapBlobOutput> {
        self.call_blob(LocationOperation::GetMapSprites, || marshall::get_map_sprites(&input)).await
    }

    /// Fetch the style descriptor of a map.
    pub async fn get_map_style_descriptor(
        &self,
        input: GetMapStyleDescriptorInput,
    ) -> LocationResult<MapBlobOutput> {
        self.call_blob(
            LocationOperation::GetMapStyleDescriptor,
            || marshall::get_map_style_descriptor(&input),
        )
        .await
    }

    /// Fetch one map tile.
    pub async fn get_map_tile(&self, input: GetMapTileInput) -> LocationResult<MapBlobOutput> {
        self.call_blob(LocationOperation::GetMapTile, || marshall::get_map_tile(&input)).await
    }

    /// List map resources.
    pub async fn list_maps(&self, input: ListMapsInput) -> LocationResult<ListMapsOutput> {
        self.call(LocationOperation::ListMaps, || marshall::list_maps(&input)).await
    }

    /// Update a map resource.
    pub async fn update_map(&self, input: UpdateMapInput) -> LocationResult<UpdateMapOutput> {
        self.call(LocationOperation::UpdateMap, || marshall::update_map(&input)).await
    }

    // -- Places --

    /// Create a place index.
    pub async fn create_place_index(
        &self,
        input: CreatePlaceIndexInput,
    ) -> LocationResult<CreatePlaceIndexOutput> {
        self.call(LocationOperation::CreatePlaceIndex, || marshall::create_place_index(&input)).await
    }

    /// Delete a place index.
    pub async fn delete_place_index(
        &self,
        input: DeletePlaceIndexInput,
    ) -> LocationResult<DeletePlaceIndexOutput> {
        self.call(LocationOperation::DeletePlaceIndex, || marshall::delete_place_index(&input)).await
    }

    /// Describe a place index.
    pub async fn describe_place_index(
        &self,
        input: DescribePlaceIndexInput,
    ) -> LocationResult<DescribePlaceIndexOutput> {
        self.call(LocationOperation::DescribePlaceIndex, || marshall::describe_place_index(&input))
            .await
    }

    /// List place indexes.
    pub async fn list_place_indexes(
        &self,
        input: ListPlaceIndexesInput,
    ) -> LocationResult<ListPlaceIndexesOutput> {
        self.call(LocationOperation::ListPlaceIndexes, || marshall::list_place_indexes(&input)).await
    }

    /// Reverse geocode a position.
    pub async fn search_place_index_for_position(
        &self,
        input: SearchPlaceIndexForPositionInput,
    ) -> LocationResult<SearchPlaceIndexForPositionOutput> {
        self.call(
            LocationOperation::SearchPlaceIndexForPosition,
            || marshall::search_place_index_for_position(&input),
        )
        .await
    }

    /// Geocode free-form text.
    pub async fn search_place_index_for_text(
        &self,
        input: SearchPlaceIndexForTextInput,
    ) -> LocationResult<SearchPlaceIndexForTextOutput> {
        self.call(
            LocationOperation::SearchPlaceIndexForText,
            || marshall::search_place_index_for_text(&input),
        )
        .await
    }

    /// Update a place index.
    pub async fn update_place_index(
        &self,
        input: UpdatePlaceIndexInput,
    ) -> LocationResult<UpdatePlaceIndexOutput> {
        self.call(LocationOperation::UpdatePlaceIndex, || marshall::update_place_index(&input)).await
    }

    // -- Routes --

    /// Calculate a route between two positions.
    pub async fn calculate_route(
        &self,
        input: CalculateRouteInput,
    ) -> LocationResult<CalculateRouteOutput> {
        self.call(LocationOperation::CalculateRoute, || marshall::calculate_route(&input)).await
    }

    /// Calculate routes between every departure and every destination.
    pub async fn calculate_route_matrix(
        &self,
        input: CalculateRouteMatrixInput,
    ) -> LocationResult<CalculateRouteMatrixOutput> {
        self.call(LocationOperation::CalculateRouteMatrix, || marshall::calculate_route_matrix(&input))
            .await
    }

    /// Create a route calculator.
    pub async fn create_route_calculator(
        &self,
        input: CreateRouteCalculatorInput,
    ) -> LocationResult<CreateRouteCalculatorOutput> {
        self.call(
            LocationOperation::CreateRouteCalculator,
            || marshall::create_route_calculator(&input),
        )
        .await
    }

    /// Delete a route calculator.
    pub async fn delete_route_calculator(
        &self,
        input: DeleteRouteCalculatorInput,
    ) -> LocationResult<DeleteRouteCalculatorOutput> {
        self.call(
            LocationOperation::DeleteRouteCalculator,
            || marshall::delete_route_calculator(&input),
        )
        .await
    }

    /// Describe a route calculator.
    pub async fn describe_route_calculator(
        &self,
        input: DescribeRouteCalculatorInput,
    ) -> LocationResult<DescribeRouteCalculatorOutput> {
        self.call(
            LocationOperation::DescribeRouteCalculator,
            || marshall::describe_route_calculator(&input),
        )
        .await
    }

    /// List route calculators.
    pub async fn list_route_calculators(
        &self,
        input: ListRouteCalculatorsInput,
    ) -> LocationResult<ListRouteCalculatorsOutput> {
        self.call(LocationOperation::ListRouteCalculators, || marshall::list_route_calculators(&input))
            .await
    }

    /// Update a route calculator.
    pub async fn update_route_calculator(
        &self,
        input: UpdateRouteCalculatorInput,
    ) -> LocationResult<UpdateRouteCalculatorOutput> {
        self.call(
            LocationOperation::UpdateRouteCalculator,
            || marshall::update_route_calculator(&input),
        )
        .await
    }

    // -- Tracking --

    /// Link a tracker to a geofence collection.
    pub async fn associate_tracker_consumer(
        &self,
        input: AssociateTrackerConsumerInput,
    ) -> LocationResult<AssociateTrackerConsumerOutput> {
        self.call(
            LocationOperation::AssociateTrackerConsumer,
            || marshall::associate_tracker_consumer(&input),
        )
        .await
    }

    /// Delete the position history of devices.
    pub async fn batch_delete_device_position_history(
        &self,
        input: BatchDeleteDevicePositionHistoryInput,
    ) -> LocationResult<BatchDeleteDevicePositionHistoryOutput> {
        self.call(
            LocationOperation::BatchDeleteDevicePositionHistory,
            || marshall::batch_delete_device_position_history(&input),
        )
        .await
    }

    /// Fetch the latest positions of several devices.
    pub async fn batch_get_device_position(
        &self,
        input: BatchGetDevicePositionInput,
    ) -> LocationResult<BatchGetDevicePositionOutput> {
        self.call(
            LocationOperation::BatchGetDevicePosition,
            || marshall::batch_get_device_position(&input),
        )
        .await
    }

    /// Report device positions.
    pub async fn batch_update_device_position(
        &self,
        input: BatchUpdateDevicePositionInput,
    ) -> LocationResult<BatchUpdateDevicePositionOutput> {
        self.call(
            LocationOperation::BatchUpdateDevicePosition,
            || marshall::batch_update_device_position(&input),
        )
        .await
    }

    /// Create a tracker.
    pub async fn create_tracker(
        &self,
        input: CreateTrackerInput,
    ) -> LocationResult<CreateTrackerOutput> {
        self.call(LocationOperation::CreateTracker, || marshall::create_tracker(&input)).await
    }

    /// Delete a tracker.
    pub async fn delete_tracker(
        &self,
        input: DeleteTrackerInput,
    ) -> LocationResult<DeleteTrackerOutput> {
        self.call(LocationOperation::DeleteTracker, || marshall::delete_tracker(&input)).await
    }

    /// Describe a tracker.
    pub async fn describe_tracker(
        &self,
        input: DescribeTrackerInput,
    ) -> LocationResult<DescribeTrackerOutput> {
        self.call(LocationOperation::DescribeTracker, || marshall::describe_tracker(&input)).await
    }

    /// Unlink a tracker from a geofence collection.
    pub async fn disassociate_tracker_consumer(
        &self,
        input: DisassociateTrackerConsumerInput,
    ) -> LocationResult<DisassociateTrackerConsumerOutput> {
        self.call(
            LocationOperation::DisassociateTrackerConsumer,
            || marshall::disassociate_tracker_consumer(&input),
        )
        .await
    }

    /// Fetch the latest position of a device.
    pub async fn get_device_position(
        &self,
        input: GetDevicePositionInput,
    ) -> LocationResult<GetDevicePositionOutput> {
        self.call(LocationOperation::GetDevicePosition, || marshall::get_device_position(&input)).await
    }

    /// Fetch the position history of a device.
    pub async fn get_device_position_history(
        &self,
        input: GetDevicePositionHistoryInput,
    ) -> LocationResult<GetDevicePositionHistoryOutput> {
        self.call(
            LocationOperation::GetDevicePositionHistory,
            || marshall::get_device_position_history(&input),
        )
        .await
    }

    /// List the latest positions of every device of a tracker.
    pub async fn list_device_positions(
        &self,
        input: ListDevicePositionsInput,
    ) -> LocationResult<ListDevicePositionsOutput> {
        self.call(LocationOperation::ListDevicePositions, || marshall::list_device_positions(&input))
            .await
    }

    /// List the geofence collections linked to a tracker.
    pub async fn list_tracker_consumers(
        &self,
        input: ListTrackerConsumersInput,
    ) -> LocationResult<ListTrackerConsumersOutput> {
        self.call(LocationOperation::ListTrackerConsumers, || marshall::list_tracker_consumers(&input))
            .await
    }

    /// List trackers.
    pub async fn list_trackers(
        &self,
        input: ListTrackersInput,
    ) -> LocationResult<ListTrackersOutput> {
        self.call(LocationOperation::ListTrackers, || marshall::list_trackers(&input)).await
    }

    /// Update a tracker.
    pub async fn update_tracker(
        &self,
        input: UpdateTrackerInput,
    ) -> LocationResult<UpdateTrackerOutput> {
        self.call(LocationOperation::UpdateTracker, || marshall::update_tracker(&input)).await
    }

    // -- Tagging --

    /// List the tags of a resource.
    pub async fn list_tags_for_resource(
        &self,
        input: ListTagsForResourceInput,
    ) -> LocationResult<ListTagsForResourceOutput> {
        self.call(LocationOperation::ListTagsForResource, || marshall::list_tags_for_resource(&input))
            .await
    }

    /// Tag a resource.
    pub async fn tag_resource(&self, input: TagResourceInput) -> LocationResult<TagResourceOutput> {
        self.call(LocationOperation::TagResource, || marshall::tag_resource(&input)).await
    }

    /// Remove tags from a resource.
    pub async fn untag_resource(
        &self,
        input: UntagResourceInput,
    ) -> LocationResult<UntagResourceOutput> {
        self.call(LocationOperation::UntagResource, || marshall::untag_resource(&input)).await
    }
}
