use geo_types::Coord;

pub struct GeoUtils;

impl GeoUtils {
    pub fn midpoint(p1: Coord, p2: Coord) -> Coord {
        Coord::from(((p1.x + p2.x) / 2., (p1.y + p2.y) / 2.))
    }
}
