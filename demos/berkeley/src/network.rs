//! Synthetic downtown Berkeley street grid.
//!
//! Eight intersections and three named places, fed through `GraphBuilder`
//! as map events the same way a map-feed parser would.  Shattuck Avenue is
//! modelled one-way northbound between Center and University to exercise
//! the `oneway` handling.

use atlas_core::VertexId;
use atlas_graph::{GraphBuilder, GraphResult, MapData, MapEvent, VertexEvent, WayEvent};

// Intersections.
pub const SHATTUCK_UNIVERSITY: VertexId = VertexId(101);
pub const SHATTUCK_CENTER:     VertexId = VertexId(102);
pub const SHATTUCK_BANCROFT:   VertexId = VertexId(103);
pub const OXFORD_UNIVERSITY:   VertexId = VertexId(201);
pub const OXFORD_CENTER:       VertexId = VertexId(202);
pub const TELEGRAPH_BANCROFT:  VertexId = VertexId(303);
pub const MLK_UNIVERSITY:      VertexId = VertexId(401);
pub const MLK_BANCROFT:        VertexId = VertexId(403);

/// Build the demo map.
pub fn build_map() -> GraphResult<MapData> {
    let vertex = |id: VertexId, lat, lon| MapEvent::Vertex(VertexEvent::new(id, lat, lon));
    let place = |id: i64, lat, lon, name: &str| {
        MapEvent::Vertex(VertexEvent::new(VertexId(id), lat, lon).with_name(name))
    };
    let road = |id: i64, highway: &str, name: &str, refs: &[VertexId]| {
        MapEvent::Way(WayEvent::new(id, highway, refs.iter().copied()).with_name(name))
    };

    let events = vec![
        vertex(SHATTUCK_UNIVERSITY, 37.8719, -122.2685),
        vertex(SHATTUCK_CENTER,     37.8703, -122.2681),
        vertex(SHATTUCK_BANCROFT,   37.8677, -122.2677),
        vertex(OXFORD_UNIVERSITY,   37.8722, -122.2662),
        vertex(OXFORD_CENTER,       37.8705, -122.2660),
        vertex(TELEGRAPH_BANCROFT,  37.8688, -122.2590),
        vertex(MLK_UNIVERSITY,      37.8712, -122.2735),
        vertex(MLK_BANCROFT,        37.8670, -122.2727),
        place(9001, 37.8726, -122.2602, "Top Dog"),
        place(9002, 37.8799, -122.2690, "Cheese Board Collective"),
        place(9003, 37.8702, -122.2595, "Sather Gate"),
        road(1, "secondary", "University Avenue", &[MLK_UNIVERSITY, SHATTUCK_UNIVERSITY, OXFORD_UNIVERSITY]),
        road(2, "residential", "Center Street", &[SHATTUCK_CENTER, OXFORD_CENTER]),
        road(3, "tertiary", "Oxford Street", &[OXFORD_UNIVERSITY, OXFORD_CENTER]),
        road(4, "secondary", "Bancroft Way", &[MLK_BANCROFT, SHATTUCK_BANCROFT, TELEGRAPH_BANCROFT]),
        road(5, "primary", "Martin Luther King Jr Way", &[MLK_UNIVERSITY, MLK_BANCROFT]),
        road(6, "primary", "Shattuck Avenue", &[SHATTUCK_BANCROFT, SHATTUCK_CENTER]),
        MapEvent::Way(
            WayEvent::new(7, "primary", [SHATTUCK_CENTER, SHATTUCK_UNIVERSITY])
                .with_name("Shattuck Avenue")
                .with_max_speed("25 mph")
                .one_way(),
        ),
        road(8, "footway", "Sproul Plaza", &[TELEGRAPH_BANCROFT, OXFORD_CENTER]),
    ];

    GraphBuilder::from_events(events)
}
