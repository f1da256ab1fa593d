pub mod index_lookup;
pub mod layout;
pub mod overview;
pub mod playback;
pub mod polyline;
pub mod range_index;
pub mod scale;
pub mod series;
pub mod types;
pub mod viewport;

pub use index_lookup::{SearchMode, search, search_by};
pub use layout::{ChartLayout, PixelRect, ViewRegion};
pub use overview::{OverviewConfig, OverviewIndicator, OverviewSync};
pub use playback::{FollowAction, FollowMode, PlaybackCursor};
pub use polyline::{
    PolylinePoint, PolylineSpace, ProjectionFrame, project_visible_polyline, project_with_frame,
};
pub use range_index::{RangeAggregate, RangeIndex};
pub use scale::LinearScale;
pub use series::{Series, SeriesCollection, SeriesId, SeriesStats};
pub use types::{Bounds, Color, DataDomain, NormalizedRange, Sample, ViewSize, VisibleRange};
pub use viewport::{Viewport, ViewportConfig};
