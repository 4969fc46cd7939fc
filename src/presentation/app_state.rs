// Application state for HTTP handlers
use crate::application::drawing_service::DrawingService;
use crate::application::map_service::MapProxyService;
use crate::application::tracker_service::TrackerService;

#[derive(Clone)]
pub struct AppState {
    pub tracker_service: TrackerService,
    pub map_service: MapProxyService,
    pub drawing_service: DrawingService,
}
