//! Unit tests for atlas-core primitives.

#[cfg(test)]
mod ids {
    use crate::VertexId;

    #[test]
    fn raw_roundtrip() {
        let id = VertexId::from(-42i64);
        assert_eq!(id.raw(), -42);
        assert_eq!(i64::from(id), -42);
    }

    #[test]
    fn ordering() {
        assert!(VertexId(1) < VertexId(2));
        assert!(VertexId(-5) < VertexId(0));
    }

    #[test]
    fn display() {
        assert_eq!(VertexId(7).to_string(), "VertexId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, Rect};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(37.87, -122.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn quadrants_partition_parent() {
        let r = Rect::new(4.0, 0.0, 0.0, 8.0);
        let [nw, ne, sw, se] = r.quadrants();
        assert_eq!(nw, Rect::new(4.0, 0.0, 2.0, 4.0));
        assert_eq!(ne, Rect::new(4.0, 4.0, 2.0, 8.0));
        assert_eq!(sw, Rect::new(2.0, 0.0, 0.0, 4.0));
        assert_eq!(se, Rect::new(2.0, 4.0, 0.0, 8.0));
        let area: f64 = [nw, ne, sw, se].iter().map(|q| q.width() * q.height()).sum();
        assert_eq!(area, r.width() * r.height());
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = Rect::new(4.0, 0.0, 0.0, 4.0);
        let b = Rect::new(3.0, 2.0, 1.0, 6.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_in_every_direction() {
        let a = Rect::new(4.0, 4.0, 2.0, 6.0);
        let above = Rect::new(8.0, 4.0, 5.0, 6.0);
        let below = Rect::new(1.0, 4.0, 0.0, 6.0);
        let left = Rect::new(4.0, 0.0, 2.0, 3.0);
        let right = Rect::new(4.0, 7.0, 2.0, 9.0);
        for other in [above, below, left, right] {
            assert!(!a.intersects(&other), "{a} vs {other}");
            assert!(!other.intersects(&a), "{other} vs {a}");
        }
    }

    #[test]
    fn touching_edges_and_corners_intersect() {
        let a = Rect::new(2.0, 0.0, 0.0, 2.0);
        let shares_edge = Rect::new(2.0, 2.0, 0.0, 4.0);
        let shares_corner = Rect::new(4.0, 2.0, 2.0, 4.0);
        assert!(a.intersects(&shares_edge));
        assert!(a.intersects(&shares_corner));
    }

    #[test]
    fn well_formed() {
        assert!(Rect::new(1.0, 0.0, 0.0, 1.0).is_well_formed());
        assert!(Rect::new(1.0, 0.5, 1.0, 0.5).is_well_formed()); // degenerate point
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_well_formed()); // lat inverted
        assert!(!Rect::new(1.0, 1.0, 0.0, 0.0).is_well_formed()); // lon inverted
        assert!(!Rect::new(f64::NAN, 0.0, 0.0, 1.0).is_well_formed());
    }
}

#[cfg(test)]
mod config {
    use crate::{AtlasError, MapConfig, Rect};

    #[test]
    fn default_is_valid() {
        let cfg = MapConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.max_depth, 7);
        assert_eq!(cfg.tile_size_px, 256.0);
        assert!(cfg.root.width() > 0.0);
        assert!(cfg.root.height() > 0.0);
    }

    #[test]
    fn inverted_root_rejected() {
        let cfg = MapConfig { root: Rect::new(0.0, 0.0, 1.0, 1.0), ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(AtlasError::Config(_))));
    }

    #[test]
    fn zero_tile_size_rejected() {
        let cfg = MapConfig { tile_size_px: 0.0, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(AtlasError::Config(_))));
    }

    #[test]
    fn excessive_depth_rejected() {
        let cfg = MapConfig { max_depth: 13, ..MapConfig::default() };
        assert!(matches!(cfg.validate(), Err(AtlasError::Config(_))));
    }
}
